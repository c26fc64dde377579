//! Pretty-printer: walks the flat token array with an explicit work
//! stack (matching the original's iterative `json_print` rather than
//! recursing over a tree it doesn't have), emitting 2-space indented
//! JSON to any `io::Write`.

use std::io::{self, Write};

use crate::navigate;
use crate::token::{Token, TokenType};
use crate::value;

enum Op {
    Value(usize, usize),
    ObjectKey(usize),
    Indent(usize),
    CloseByte(u8),
    Literal(&'static [u8]),
}

/// Pretty-print the value at `index` (and everything under it) to `out`,
/// with 2-space indentation. Empty objects/arrays print as `{}`/`[]` on
/// one line, matching spec.md's edge-case requirement.
pub fn pretty_print(bytes: &[u8], tokens: &[Token], index: usize, out: &mut impl Write) -> io::Result<()> {
    let mut stack = vec![Op::Value(index, 0)];

    while let Some(op) = stack.pop() {
        match op {
            Op::Literal(bytes) => out.write_all(bytes)?,
            Op::Indent(depth) => write_indent(out, depth)?,
            Op::CloseByte(b) => out.write_all(&[b])?,
            Op::ObjectKey(key_idx) => {
                value::string_print(bytes, &tokens[key_idx], out)?;
                out.write_all(b": ")?;
            }
            Op::Value(idx, depth) => {
                let tok = &tokens[idx];
                match tok.token_type {
                    TokenType::Object | TokenType::Array => {
                        write_container(bytes, tokens, idx, tok, depth, &mut stack, out)?
                    }
                    TokenType::String => value::string_print(bytes, tok, out)?,
                    TokenType::Number => out.write_all(&bytes[tok.start..tok.start + tok.length])?,
                    TokenType::True => out.write_all(b"true")?,
                    TokenType::False => out.write_all(b"false")?,
                    TokenType::Null => out.write_all(b"null")?,
                }
            }
        }
    }

    Ok(())
}

fn write_container(
    bytes: &[u8],
    tokens: &[Token],
    idx: usize,
    tok: &Token,
    depth: usize,
    stack: &mut Vec<Op>,
    out: &mut impl Write,
) -> io::Result<()> {
    let is_object = tok.token_type == TokenType::Object;
    let (opener, closer) = if is_object { (b'{', b'}') } else { (b'[', b']') };
    out.write_all(&[opener])?;

    if tok.length == 0 {
        out.write_all(&[closer])?;
        return Ok(());
    }
    out.write_all(b"\n")?;

    let children: Vec<usize> = navigate::siblings(tokens, idx).collect();
    let last = children.len() - 1;

    let mut forward: Vec<Op> = Vec::new();
    for (i, &child) in children.iter().enumerate() {
        forward.push(Op::Indent(depth + 1));
        if is_object {
            forward.push(Op::ObjectKey(child));
            forward.push(Op::Value(child + 1, depth + 1));
        } else {
            forward.push(Op::Value(child, depth + 1));
        }
        forward.push(Op::Literal(if i == last { b"\n" } else { b",\n" }));
    }
    forward.push(Op::Indent(depth));
    forward.push(Op::CloseByte(closer));

    for op in forward.into_iter().rev() {
        stack.push(op);
    }
    Ok(())
}

fn write_indent(out: &mut impl Write, depth: usize) -> io::Result<()> {
    for _ in 0..depth {
        out.write_all(b"  ")?;
    }
    Ok(())
}
