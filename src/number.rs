//! The number-literal FSM. Recognizes a JSON number by the ECMA grammar
//! and records only its byte span — the literal is re-parsed later by
//! `value::number_get`/`number_getint`/`number_getuint`, not here.
//!
//! Ported directly from `original_source/src/json.c`'s `json_parse_number`
//! state machine; state names match spec.md §4.3 exactly.

use crate::token::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Minus,
    Zero,
    Digit,
    Decimal,
    DecimalAccept,
    Exponent,
    ExponentDigit,
    ExponentDigitAccept,
}

fn is_accepting(state: State) -> bool {
    matches!(
        state,
        State::Zero | State::Digit | State::DecimalAccept | State::ExponentDigitAccept
    )
}

/// Scan a number literal starting at `bytes[start]`.
///
/// Returns the byte length consumed, or an error. Unexpected input at an
/// accepting state simply ends the token (the byte is left for the outer
/// parser); unexpected input at a non-accepting state is `InvalidNumber`.
/// Leading zeroes followed by further digits (`01`) are accepted as `0`
/// with the `1` left unparsed — this is documented behavior, not a defect.
pub(crate) fn scan(bytes: &[u8], start: usize) -> Result<usize, Error> {
    let mut state = State::Start;
    let mut i = start;

    loop {
        let c = bytes.get(i).copied();
        let next = match (state, c) {
            (State::Start, Some(b'0')) => Some(State::Zero),
            (State::Start, Some(b'-')) => Some(State::Minus),
            (State::Start, Some(b'1'..=b'9')) => Some(State::Digit),

            (State::Minus, Some(b'0')) => Some(State::Zero),
            (State::Minus, Some(b'1'..=b'9')) => Some(State::Digit),

            (State::Zero, Some(b'.')) => Some(State::Decimal),
            (State::Zero, Some(b'e' | b'E')) => Some(State::Exponent),

            (State::Digit, Some(b'.')) => Some(State::Decimal),
            (State::Digit, Some(b'e' | b'E')) => Some(State::Exponent),
            (State::Digit, Some(b'0'..=b'9')) => Some(State::Digit),

            (State::Decimal, Some(b'0'..=b'9')) => Some(State::DecimalAccept),

            (State::DecimalAccept, Some(b'0'..=b'9')) => Some(State::DecimalAccept),
            (State::DecimalAccept, Some(b'e' | b'E')) => Some(State::Exponent),

            (State::Exponent, Some(b'+' | b'-')) => Some(State::ExponentDigit),
            (State::Exponent, Some(b'0'..=b'9')) => Some(State::ExponentDigitAccept),

            (State::ExponentDigit, Some(b'0'..=b'9')) => Some(State::ExponentDigitAccept),

            (State::ExponentDigitAccept, Some(b'0'..=b'9')) => Some(State::ExponentDigitAccept),

            _ => None,
        };

        match next {
            Some(next_state) => {
                state = next_state;
                i += 1;
            }
            None => {
                return if is_accepting(state) {
                    Ok(i - start)
                } else {
                    Err(Error::InvalidNumber)
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(s: &str) -> Result<usize, Error> {
        scan(s.as_bytes(), 0)
    }

    #[test]
    fn integers() {
        assert_eq!(len("0"), Ok(1));
        assert_eq!(len("123"), Ok(3));
        assert_eq!(len("-0"), Ok(2));
        assert_eq!(len("-42"), Ok(3));
    }

    #[test]
    fn leading_zero_accepted_with_tail_unparsed() {
        // "01" is consumed as "0"; the "1" is left for the caller.
        assert_eq!(len("01"), Ok(1));
    }

    #[test]
    fn decimals_and_exponents() {
        assert_eq!(len("3.14"), Ok(4));
        assert_eq!(len("1e10"), Ok(4));
        assert_eq!(len("1E+10"), Ok(5));
        assert_eq!(len("1.5e-3"), Ok(6));
    }

    #[test]
    fn trailing_bytes_not_consumed() {
        assert_eq!(scan(b"123, 4", 0), Ok(3));
    }

    #[test]
    fn incomplete_exponent_is_invalid() {
        assert_eq!(len("1e+"), Err(Error::InvalidNumber));
    }

    #[test]
    fn bare_minus_is_invalid() {
        assert_eq!(len("-"), Err(Error::InvalidNumber));
    }

    #[test]
    fn bare_decimal_point_is_invalid() {
        assert_eq!(len("1."), Err(Error::InvalidNumber));
    }
}
