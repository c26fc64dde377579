//! Error-code-to-message table, and a caret-style pointer for path
//! expression failures. Mirrors the teacher's `ERROR_CODES`/
//! `lookup_error_code` registry pattern, flattened to this crate's fixed
//! eleven-variant `Error` enum.

use crate::token::Error;

const MESSAGES: &[(Error, &str)] = &[
    (Error::InvalidNumber, "invalid number literal"),
    (Error::PrematureEof, "input ended before the value was complete"),
    (Error::UnexpectedToken, "unexpected token"),
    (Error::InvalidSurrogate, "invalid UTF-16 surrogate pair"),
    (Error::MissingComma, "expected ',' between elements or pairs"),
    (Error::MissingColon, "expected ':' between a key and its value"),
    (Error::Type, "operation does not apply to this token's type"),
    (Error::Lookup, "object key not found"),
    (Error::Index, "array index out of bounds"),
    (Error::BadExpr, "syntax error in path expression"),
    (Error::NotInt, "number is not a strict integer literal"),
];

/// Human-readable message for an error code. Stays in sync with `Error`
/// because every variant is listed in `MESSAGES` and this panics if one is
/// ever missing, rather than silently falling back to a placeholder.
pub fn describe(error: Error) -> &'static str {
    MESSAGES
        .iter()
        .find(|(e, _)| *e == error)
        .map(|(_, msg)| *msg)
        .expect("every Error variant must have a message in MESSAGES")
}

/// Render a dotted-path expression failure as the expression, a caret
/// aligned under the byte offset where evaluation failed, and the
/// human-readable message.
///
/// ```
/// use flatjson::diagnostics::render_expr_error;
/// use flatjson::token::Error;
///
/// let rendered = render_expr_error("a.b[x]", 3, Error::BadExpr);
/// assert_eq!(rendered, "a.b[x]\n   ^ syntax error in path expression");
/// ```
pub fn render_expr_error(expr: &str, offset: usize, error: Error) -> String {
    let mut caret_line = " ".repeat(offset);
    caret_line.push('^');
    format!("{expr}\n{caret_line} {}", describe(error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_message() {
        let variants = [
            Error::InvalidNumber,
            Error::PrematureEof,
            Error::UnexpectedToken,
            Error::InvalidSurrogate,
            Error::MissingComma,
            Error::MissingColon,
            Error::Type,
            Error::Lookup,
            Error::Index,
            Error::BadExpr,
            Error::NotInt,
        ];
        for v in variants {
            assert!(!describe(v).is_empty());
        }
    }

    #[test]
    fn caret_points_at_offset() {
        let rendered = render_expr_error("abc[def]", 4, Error::BadExpr);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "abc[def]");
        assert_eq!(lines[1].find('^'), Some(4));
    }
}
