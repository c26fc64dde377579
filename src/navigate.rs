//! Tree navigation over a parsed token array: sibling walks, direct
//! object/array access, and dotted-path expression lookup.
//!
//! There is no `child` pointer (spec.md §9) — the first child of any
//! container at index `i` is always `i + 1`; everything here is built on
//! that single invariant plus each child's own `next` link.
//!
//! Grounded on `original_source/src/json.c`'s `json_array_get`/
//! `json_object_get`/`json_array_for_each` and `test/lookup.c`'s path
//! expression grammar.

use crate::token::{Error, Token, TokenType};

/// Iterate the direct children of the container token at `index`, in
/// document order. Replaces the original's `json_array_for_each` macro
/// with an idiomatic iterator.
pub fn siblings(tokens: &[Token], index: usize) -> Siblings<'_> {
    let first = if tokens[index].length == 0 { 0 } else { index + 1 };
    Siblings { tokens, next: first }
}

pub struct Siblings<'a> {
    tokens: &'a [Token],
    next: usize,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next == 0 {
            return None;
        }
        let current = self.next;
        self.next = self.tokens[current].next;
        Some(current)
    }
}

/// Index of the `n`th element of the array token at `index` (0-based).
pub fn array_get(bytes: &[u8], tokens: &[Token], index: usize, n: usize) -> Result<usize, Error> {
    let _ = bytes;
    let tok = &tokens[index];
    if tok.token_type != TokenType::Array {
        return Err(Error::Type);
    }
    siblings(tokens, index).nth(n).ok_or(Error::Index)
}

/// Index of the value token whose key equals `key`, within the object
/// token at `index`. Keys are compared byte-for-byte against the decoded
/// string contents (escapes resolved), mirroring `json_string_match`.
pub fn object_get(bytes: &[u8], tokens: &[Token], index: usize, key: &str) -> Result<usize, Error> {
    let tok = &tokens[index];
    if tok.token_type != TokenType::Object {
        return Err(Error::Type);
    }
    for key_idx in siblings(tokens, index) {
        if crate::value::string_match(bytes, &tokens[key_idx], key.as_bytes()) {
            // the value immediately follows its key in the flat array
            return Ok(key_idx + 1);
        }
    }
    Err(Error::Lookup)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathState {
    Start,
    AfterDot,
    InIdent,
    InBracket,
    AfterBracket,
}

/// Evaluate a dotted-path expression (`a.b[3].c[0][1]`) against the
/// document rooted at `root`, returning the index of the token it names.
///
/// `path` is interpreted relative to `root`: a leading identifier is an
/// object key, `[N]` is an array index, and either may repeat and chain.
/// On failure, `offset` is the byte position within `path` where
/// evaluation stopped, for use with [`crate::diagnostics::render_expr_error`].
pub fn lookup(bytes: &[u8], tokens: &[Token], root: usize, path: &str) -> Result<usize, (usize, Error)> {
    let p = path.as_bytes();
    let mut state = PathState::Start;
    let mut current = root;
    let mut ident_start = 0usize;
    let mut digit_start = 0usize;
    let mut i = 0usize;

    macro_rules! apply_ident {
        ($end:expr) => {{
            let key = std::str::from_utf8(&p[ident_start..$end]).map_err(|_| (ident_start, Error::BadExpr))?;
            current = object_get(bytes, tokens, current, key).map_err(|e| (ident_start, e))?;
        }};
    }

    macro_rules! apply_index {
        ($end:expr) => {{
            let digits = std::str::from_utf8(&p[digit_start..$end]).map_err(|_| (digit_start, Error::BadExpr))?;
            let n: usize = digits.parse().map_err(|_| (digit_start, Error::BadExpr))?;
            current = array_get(bytes, tokens, current, n).map_err(|e| (digit_start, e))?;
        }};
    }

    while i <= p.len() {
        let c = p.get(i).copied();
        match state {
            PathState::Start => match c {
                None => break,
                Some(b'[') => {
                    state = PathState::InBracket;
                    digit_start = i + 1;
                }
                Some(b'.') => {
                    // zero-length key segment before the dot
                    ident_start = i;
                    apply_ident!(i);
                    state = PathState::AfterDot;
                }
                Some(_) => {
                    ident_start = i;
                    state = PathState::InIdent;
                }
            },
            // Key names are everything up to the next `.`, `[`, or
            // end-of-string; no character-class restriction, and a
            // segment that hits its terminator immediately is a
            // zero-length key (left for object_get to reject as LOOKUP).
            PathState::AfterDot => match c {
                None => {
                    ident_start = i;
                    apply_ident!(i);
                    break;
                }
                Some(b'.') => {
                    ident_start = i;
                    apply_ident!(i);
                }
                Some(b'[') => {
                    ident_start = i;
                    apply_ident!(i);
                    state = PathState::InBracket;
                    digit_start = i + 1;
                }
                Some(_) => {
                    ident_start = i;
                    state = PathState::InIdent;
                }
            },
            PathState::InIdent => match c {
                Some(b'.') => {
                    apply_ident!(i);
                    state = PathState::AfterDot;
                }
                Some(b'[') => {
                    apply_ident!(i);
                    state = PathState::InBracket;
                    digit_start = i + 1;
                }
                None => {
                    apply_ident!(i);
                    break;
                }
                Some(_) => {}
            },
            PathState::InBracket => match c {
                Some(b'0'..=b'9') => {}
                Some(b']') => {
                    if i == digit_start {
                        return Err((i, Error::BadExpr));
                    }
                    apply_index!(i);
                    state = PathState::AfterBracket;
                }
                _ => return Err((i, Error::BadExpr)),
            },
            PathState::AfterBracket => match c {
                None => break,
                Some(b'.') => state = PathState::AfterDot,
                Some(b'[') => {
                    state = PathState::InBracket;
                    digit_start = i + 1;
                }
                Some(_) => return Err((i, Error::BadExpr)),
            },
        }
        i += 1;
    }

    if matches!(state, PathState::AfterDot | PathState::InBracket) {
        return Err((path.len(), Error::BadExpr));
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn parse_fixture(json: &str) -> Vec<Token> {
        let sizing = parser::parse(json.as_bytes(), None);
        let mut buf = vec![Token::new(TokenType::Null, 0); sizing.tokenidx];
        parser::parse(json.as_bytes(), Some(&mut buf));
        buf
    }

    #[test]
    fn siblings_walks_array_elements() {
        let json = "[1,2,3]";
        let tokens = parse_fixture(json);
        let idxs: Vec<usize> = siblings(&tokens, 0).collect();
        assert_eq!(idxs, vec![1, 2, 3]);
    }

    #[test]
    fn siblings_of_empty_container_is_empty() {
        let tokens = parse_fixture("[]");
        assert_eq!(siblings(&tokens, 0).count(), 0);
    }

    #[test]
    fn object_get_finds_value_after_key() {
        let json = r#"{"a":1,"b":2}"#;
        let tokens = parse_fixture(json);
        let v = object_get(json.as_bytes(), &tokens, 0, "b").unwrap();
        assert_eq!(tokens[v].token_type, TokenType::Number);
        assert_eq!(tokens[v].start, 11);
    }

    #[test]
    fn object_get_missing_key_is_lookup_error() {
        let json = r#"{"a":1}"#;
        let tokens = parse_fixture(json);
        assert_eq!(object_get(json.as_bytes(), &tokens, 0, "z"), Err(Error::Lookup));
    }

    #[test]
    fn array_get_out_of_bounds_is_index_error() {
        let json = "[1,2]";
        let tokens = parse_fixture(json);
        assert_eq!(array_get(json.as_bytes(), &tokens, 0, 5), Err(Error::Index));
    }

    #[test]
    fn type_mismatch_on_object_get_over_array() {
        let tokens = parse_fixture("[1,2]");
        assert_eq!(object_get(b"[1,2]", &tokens, 0, "a"), Err(Error::Type));
    }

    #[test]
    fn dotted_path_chains_object_and_array() {
        let json = r#"{"a":{"b":[10,20,{"c":30}]}}"#;
        let tokens = parse_fixture(json);
        let idx = lookup(json.as_bytes(), &tokens, 0, "a.b[2].c").unwrap();
        assert_eq!(tokens[idx].token_type, TokenType::Number);
        assert_eq!(tokens[idx].start, 24);
    }

    #[test]
    fn leading_bracket_path_indexes_root_array() {
        let json = "[[1,2],[3,4]]";
        let tokens = parse_fixture(json);
        let idx = lookup(json.as_bytes(), &tokens, 0, "[1][0]").unwrap();
        assert_eq!(tokens[idx].start, 8);
    }

    #[test]
    fn malformed_path_reports_offset() {
        let json = r#"{"a":1}"#;
        let tokens = parse_fixture(json);
        let err = lookup(json.as_bytes(), &tokens, 0, "a[x]").unwrap_err();
        assert_eq!(err, (2, Error::BadExpr));
    }

    #[test]
    fn key_segment_accepts_arbitrary_bytes() {
        let json = r#"{"café":1,"a b":2}"#;
        let tokens = parse_fixture(json);
        assert_eq!(lookup(json.as_bytes(), &tokens, 0, "café").map(|_| ()), Ok(()));
        assert_eq!(lookup(json.as_bytes(), &tokens, 0, "a b").map(|_| ()), Ok(()));
    }

    #[test]
    fn empty_key_segments_parse_but_fail_lookup_not_bad_expr() {
        let json = r#"{"a":{"b":1}}"#;
        let tokens = parse_fixture(json);
        assert_eq!(lookup(json.as_bytes(), &tokens, 0, "a."), Err((2, Error::Lookup)));
        assert_eq!(lookup(json.as_bytes(), &tokens, 0, "a..b"), Err((2, Error::Lookup)));
        assert_eq!(lookup(json.as_bytes(), &tokens, 0, "a.[0]"), Err((2, Error::Lookup)));
    }

    #[test]
    fn lookup_failure_is_contained_to_the_missing_segment() {
        let json = r#"{"a":{"b":1}}"#;
        let tokens = parse_fixture(json);
        let err = lookup(json.as_bytes(), &tokens, 0, "a.z").unwrap_err();
        assert_eq!(err, (2, Error::Lookup));
    }
}
