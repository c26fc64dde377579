//! [`Doc`]: a convenience wrapper that owns the input bytes and parsed
//! token array together, forwarding every navigation/value/format
//! operation so callers don't have to thread `bytes`/`tokens` through
//! every call site themselves.

use std::io::{self, Write};

use crate::format;
use crate::navigate::{self, Siblings};
use crate::parser;
use crate::token::{Error, Token, TokenType};
use crate::value;

/// An owned, parsed JSON document.
pub struct Doc {
    bytes: Vec<u8>,
    tokens: Vec<Token>,
}

impl Doc {
    /// Parse `input` in full (two passes internally) and own the result.
    pub fn parse(input: impl Into<Vec<u8>>) -> Result<Self, Error> {
        let bytes = input.into();
        let sizing = parser::parse(&bytes, None);
        if let Some(err) = sizing.error {
            return Err(err);
        }
        let mut tokens = vec![Token::new(TokenType::Null, 0); sizing.tokenidx];
        let result = parser::parse(&bytes, Some(&mut tokens));
        if let Some(err) = result.error {
            return Err(err);
        }
        Ok(Doc { bytes, tokens })
    }

    /// The root token's index — always 0.
    pub fn root(&self) -> usize {
        0
    }

    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn siblings(&self, index: usize) -> Siblings<'_> {
        navigate::siblings(&self.tokens, index)
    }

    pub fn array_get(&self, index: usize, n: usize) -> Result<usize, Error> {
        navigate::array_get(&self.bytes, &self.tokens, index, n)
    }

    pub fn object_get(&self, index: usize, key: &str) -> Result<usize, Error> {
        navigate::object_get(&self.bytes, &self.tokens, index, key)
    }

    /// Evaluate a dotted-path expression relative to `root`. On failure,
    /// the returned string is a caret-pointing rendering suitable for
    /// direct display, built with [`crate::diagnostics::render_expr_error`].
    pub fn lookup(&self, root: usize, path: &str) -> Result<usize, String> {
        navigate::lookup(&self.bytes, &self.tokens, root, path)
            .map_err(|(offset, err)| crate::diagnostics::render_expr_error(path, offset, err))
    }

    pub fn string_load(&self, index: usize) -> Result<String, Error> {
        value::string_load(&self.bytes, &self.tokens[index])
    }

    pub fn string_match(&self, index: usize, needle: &str) -> bool {
        value::string_match(&self.bytes, &self.tokens[index], needle.as_bytes())
    }

    pub fn number_get(&self, index: usize) -> Result<f64, Error> {
        value::number_get(&self.bytes, &self.tokens[index])
    }

    pub fn number_getint(&self, index: usize) -> Result<i64, Error> {
        value::number_getint(&self.bytes, &self.tokens[index])
    }

    pub fn number_getuint(&self, index: usize) -> Result<u64, Error> {
        value::number_getuint(&self.bytes, &self.tokens[index])
    }

    pub fn pretty_print(&self, index: usize, out: &mut impl Write) -> io::Result<()> {
        format::pretty_print(&self.bytes, &self.tokens, index, out)
    }

    pub fn pretty_string(&self, index: usize) -> String {
        let mut out = Vec::new();
        self.pretty_print(index, &mut out).expect("writing to a Vec never fails");
        String::from_utf8(out).expect("pretty_print only emits valid UTF-8")
    }
}
