//! Leading quantity tokens of ingredient lines.

use crate::error::ParseError;

/// Convert an isolated quantity token into a number.
///
/// Accepts `"200"`, `"5.5"`, `"7,25"` and `"3/4"`. A comma is read as the
/// decimal separator.
pub fn parse_quantity(token: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::NumericFormat(token.to_string());
    let normalized = token.replace(',', ".");

    if let Some((numerator, denominator)) = normalized.split_once('/') {
        let numerator = parse_decimal(numerator).ok_or_else(invalid)?;
        let denominator = parse_decimal(denominator).ok_or_else(invalid)?;
        if denominator == 0.0 {
            return Err(invalid());
        }
        return Ok(numerator / denominator);
    }

    parse_decimal(&normalized).ok_or_else(invalid)
}

/// Digits, optionally followed by `.` and more digits.
fn parse_decimal(text: &str) -> Option<f64> {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let well_formed = match text.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(text),
    };
    if well_formed {
        text.parse().ok()
    } else {
        None
    }
}

/// Isolate the quantity token at the start of `text`.
///
/// The token is a run of digits, either joined to a second run by a single
/// whitespace, `.` or `/` (`"1/2"`, `"5.5"`), or extended by a `.`/`,`
/// decimal part. Returns the token and the remaining text; the token is not
/// validated here, so `"1 2"` is isolated and later rejected by
/// [`parse_quantity`].
pub fn scan_quantity(text: &str) -> Option<(&str, &str)> {
    let int_end = digits_len(text);
    if int_end == 0 {
        return None;
    }

    let rest = &text[int_end..];
    let mut chars = rest.chars();
    let end = match chars.next() {
        Some(sep) if sep.is_whitespace() || sep == '.' || sep == '/' || sep == ',' => {
            let after = &rest[sep.len_utf8()..];
            let more = digits_len(after);
            // A comma only ever introduces decimals, never a second number
            if more > 0 {
                int_end + sep.len_utf8() + more
            } else {
                int_end
            }
        }
        _ => int_end,
    };

    Some(text.split_at(end))
}

fn digits_len(text: &str) -> usize {
    text.bytes().take_while(|b| b.is_ascii_digit()).count()
}
