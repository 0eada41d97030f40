use crate::error::ParseError;

/// Read a `PT<minutes>M` duration as whole minutes.
///
/// Only the minutes form is understood: hours (`PT1H30M`), seconds or any
/// other ISO-8601 component is rejected rather than guessed.
pub fn parse_duration_minutes(raw: &str) -> Result<u32, ParseError> {
    let invalid = || ParseError::DurationFormat(raw.to_string());

    let digits = raw
        .strip_prefix("PT")
        .and_then(|rest| rest.strip_suffix('M'))
        .ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    digits.parse().map_err(|_| invalid())
}
