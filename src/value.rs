//! Typed value extraction: string compare/load/escaped-print, and strict
//! number parsing. All string operations share `scanner::scan` via a
//! dedicated [`scanner::Sink`] each, mirroring `original_source/src/json.c`'s
//! `json_string_match`/`json_string_load`/`json_string_print`.

use crate::scanner::{self, Sink};
use crate::token::{Error, Token, TokenType};

/// Decode the string token's contents and compare against `needle` without
/// allocating when the two lengths mismatch early.
pub fn string_match(bytes: &[u8], token: &Token, needle: &[u8]) -> bool {
    if token.token_type != TokenType::String || token.length != needle.len() {
        return false;
    }

    struct Compare<'a> {
        needle: &'a [u8],
        pos: usize,
        ok: bool,
    }
    impl Sink for Compare<'_> {
        fn push(&mut self, byte: u8) {
            if self.pos >= self.needle.len() || self.needle[self.pos] != byte {
                self.ok = false;
            }
            self.pos += 1;
        }
    }

    let mut sink = Compare { needle, pos: 0, ok: true };
    let result = scanner::scan(bytes, token.start, &mut sink);
    result.error.is_none() && sink.ok && sink.pos == needle.len()
}

/// Decode the string token's contents into an owned `String`.
pub fn string_load(bytes: &[u8], token: &Token) -> Result<String, Error> {
    if token.token_type != TokenType::String {
        return Err(Error::Type);
    }

    struct Collect(Vec<u8>);
    impl Sink for Collect {
        fn push(&mut self, byte: u8) {
            self.0.push(byte);
        }
    }

    let mut sink = Collect(Vec::with_capacity(token.length));
    let result = scanner::scan(bytes, token.start, &mut sink);
    if let Some(err) = result.error {
        return Err(err);
    }
    String::from_utf8(sink.0).map_err(|_| Error::Type)
}

/// Write the string token's contents to `out`, re-escaping control
/// characters, `"`, and `\` the way [`crate::format`] needs for pretty
/// printing — this is the inverse of the scanner's decode path.
pub fn string_print(bytes: &[u8], token: &Token, out: &mut impl std::io::Write) -> std::io::Result<()> {
    let decoded = string_load(bytes, token).map_err(|_| std::io::Error::other("not a string token"))?;
    out.write_all(b"\"")?;
    for &b in decoded.as_bytes() {
        match b {
            b'"' => out.write_all(b"\\\"")?,
            b'\\' => out.write_all(b"\\\\")?,
            0x08 => out.write_all(b"\\b")?,
            0x0C => out.write_all(b"\\f")?,
            b'\n' => out.write_all(b"\\n")?,
            b'\r' => out.write_all(b"\\r")?,
            b'\t' => out.write_all(b"\\t")?,
            0x00..=0x1F => write!(out, "\\u{b:04x}")?,
            _ => out.write_all(&[b])?,
        }
    }
    out.write_all(b"\"")
}

/// The raw literal text of a number token.
fn number_text<'a>(bytes: &'a [u8], token: &Token) -> Result<&'a str, Error> {
    if token.token_type != TokenType::Number {
        return Err(Error::Type);
    }
    let slice = &bytes[token.start..token.start + token.length];
    std::str::from_utf8(slice).map_err(|_| Error::Type)
}

/// Parse a number token as `f64`.
pub fn number_get(bytes: &[u8], token: &Token) -> Result<f64, Error> {
    number_text(bytes, token)?.parse().map_err(|_| Error::InvalidNumber)
}

/// Parse a number token as `i64`. Rejects anything whose literal is not
/// exactly a base-10 integer — a decimal point or exponent means `NotInt`,
/// not a silent truncation.
pub fn number_getint(bytes: &[u8], token: &Token) -> Result<i64, Error> {
    let text = number_text(bytes, token)?;
    text.parse().map_err(|_| Error::NotInt)
}

/// Parse a number token as `u64`. Like [`number_getint`], but additionally
/// rejects a leading `-` — `-0` is a valid signed integer but not a valid
/// unsigned one.
pub fn number_getuint(bytes: &[u8], token: &Token) -> Result<u64, Error> {
    let text = number_text(bytes, token)?;
    if text.starts_with('-') {
        return Err(Error::NotInt);
    }
    text.parse().map_err(|_| Error::NotInt)
}
