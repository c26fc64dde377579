//! The recursive-descent parser: dispatches on the first non-whitespace
//! byte, parses objects/arrays/literals/strings/numbers, and stitches
//! `next` sibling links while emitting a flat, pre-order token array.
//!
//! Grounded on `original_source/src/json.c` (`json_parse_object`,
//! `json_parse_array`, `json_parse_rec`), restructured to drop the
//! original's `child` pointer per spec.md §9 — a container's first child
//! is always `container_index + 1`, so only `next` needs stitching.

use crate::number;
use crate::scanner;
use crate::token::{Error, Token, TokenType};

/// Result of a `parse` call. On success, `tokenidx` is the number of
/// tokens emitted (or required, if sizing) and `textidx` is the offset of
/// the first unconsumed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseResult {
    pub textidx: usize,
    pub tokenidx: usize,
    pub error: Option<Error>,
}

struct Parser<'a> {
    bytes: &'a [u8],
    tokens: Option<&'a mut [Token]>,
    textidx: usize,
    tokenidx: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.textidx).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.textidx += 1;
        }
    }

    /// Write `token` into the next slot (if a buffer was supplied and has
    /// room) and return the index it was assigned.
    fn emit(&mut self, token: Token) -> usize {
        let idx = self.tokenidx;
        if let Some(tokens) = self.tokens.as_deref_mut() {
            if idx < tokens.len() {
                tokens[idx] = token;
            }
        }
        self.tokenidx += 1;
        idx
    }

    fn patch_next(&mut self, idx: usize, next: usize) {
        if let Some(tokens) = self.tokens.as_deref_mut() {
            if idx < tokens.len() {
                tokens[idx].next = next;
            }
        }
    }

    fn patch_length(&mut self, idx: usize, length: usize) {
        if let Some(tokens) = self.tokens.as_deref_mut() {
            if idx < tokens.len() {
                tokens[idx].length = length;
            }
        }
    }

    fn parse_value(&mut self) -> Result<(), Error> {
        self.skip_ws();
        match self.peek() {
            None => Err(Error::PrematureEof),
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => self.parse_string_value().map(|_| ()),
            Some(b't') => self.parse_literal(b"true", TokenType::True),
            Some(b'f') => self.parse_literal(b"false", TokenType::False),
            Some(b'n') => self.parse_literal(b"null", TokenType::Null),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(Error::UnexpectedToken),
        }
    }

    /// Parses a string, whether it's being used as a value or as an
    /// object key — the scanner itself rejects a leading byte other than
    /// `"` with `UnexpectedToken`, which is exactly the "must be a
    /// string" requirement object keys need.
    fn parse_string_value(&mut self) -> Result<usize, Error> {
        let start = self.textidx;
        let (length, result) = scanner::string_extent(self.bytes, start);
        self.textidx = result.end;
        if let Some(err) = result.error {
            return Err(err);
        }
        let mut tok = Token::new(TokenType::String, start);
        tok.length = length;
        Ok(self.emit(tok))
    }

    fn parse_literal(&mut self, keyword: &'static [u8], token_type: TokenType) -> Result<(), Error> {
        let start = self.textidx;
        if self.bytes.get(start..start + keyword.len()) == Some(keyword) {
            self.emit(Token::new(token_type, start));
            self.textidx += keyword.len();
            Ok(())
        } else {
            Err(Error::UnexpectedToken)
        }
    }

    fn parse_number(&mut self) -> Result<(), Error> {
        let start = self.textidx;
        let length = number::scan(self.bytes, start)?;
        let mut tok = Token::new(TokenType::Number, start);
        tok.length = length;
        self.emit(tok);
        self.textidx += length;
        Ok(())
    }

    fn parse_object(&mut self) -> Result<(), Error> {
        let obj_idx = self.emit(Token::new(TokenType::Object, self.textidx));
        self.textidx += 1; // past '{'
        self.skip_ws();

        let mut pair_count = 0usize;
        let mut prev_key_idx: Option<usize> = None;

        while self.peek() != Some(b'}') {
            if self.peek().is_none() {
                return Err(Error::PrematureEof);
            }

            let key_idx = self.parse_string_value()?;
            if let Some(prev) = prev_key_idx {
                self.patch_next(prev, key_idx);
            }
            prev_key_idx = Some(key_idx);

            self.skip_ws();
            if self.peek() != Some(b':') {
                return Err(Error::MissingColon);
            }
            self.textidx += 1;

            self.parse_value()?;
            pair_count += 1;
            self.skip_ws();

            match self.peek() {
                Some(b',') => {
                    self.textidx += 1;
                    self.skip_ws();
                }
                Some(b'}') => {}
                None => return Err(Error::PrematureEof),
                _ => return Err(Error::MissingComma),
            }
        }

        self.textidx += 1; // past '}'
        self.patch_length(obj_idx, pair_count);
        Ok(())
    }

    fn parse_array(&mut self) -> Result<(), Error> {
        let arr_idx = self.emit(Token::new(TokenType::Array, self.textidx));
        self.textidx += 1; // past '['
        self.skip_ws();

        let mut elem_count = 0usize;
        let mut prev_elem_idx: Option<usize> = None;

        while self.peek() != Some(b']') {
            if self.peek().is_none() {
                return Err(Error::PrematureEof);
            }

            let elem_idx = self.tokenidx;
            self.parse_value()?;
            if let Some(prev) = prev_elem_idx {
                self.patch_next(prev, elem_idx);
            }
            prev_elem_idx = Some(elem_idx);
            elem_count += 1;
            self.skip_ws();

            match self.peek() {
                Some(b',') => {
                    self.textidx += 1;
                    self.skip_ws();
                }
                Some(b']') => {}
                None => return Err(Error::PrematureEof),
                _ => return Err(Error::MissingComma),
            }
        }

        self.textidx += 1; // past ']'
        self.patch_length(arr_idx, elem_count);
        Ok(())
    }
}

/// Parse `bytes` into `out_tokens`. Two-pass usage: call once with `None`
/// to learn the required capacity (`tokenidx` in the result), allocate a
/// buffer of that size, then call again with `Some(&mut buf)`.
///
/// If the supplied buffer is smaller than what the document needs, parsing
/// still walks the whole grammar and `tokenidx` still reports the true
/// count — callers that care must check `tokenidx <= out_tokens.len()`.
pub fn parse(bytes: &[u8], out_tokens: Option<&mut [Token]>) -> ParseResult {
    let mut parser = Parser {
        bytes,
        tokens: out_tokens,
        textidx: 0,
        tokenidx: 0,
    };
    parser.skip_ws();
    let error = parser.parse_value().err();
    ParseResult {
        textidx: parser.textidx,
        tokenidx: parser.tokenidx,
        error,
    }
}
