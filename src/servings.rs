//! Classification of the `recipeYield` phrase.

use crate::error::ParseError;
use crate::model::{ServingUnit, Servings};
use crate::normalize::normalize;

/// Keywords (accent-free, lowercase) marking a yield counted in items.
pub const PIECE_KEYWORDS: &[&str] = &[
    "muffin",
    "piece",
    "brioche",
    "confiserie",
    "mini",
    "burger",
    "gateau",
    "cupcake",
];

/// Keywords marking a yield counted in people.
pub const PERSON_KEYWORDS: &[&str] = &["personne", "portion"];

/// Parse a yield phrase such as `"4 personnes"` or `"12 muffins"`.
///
/// Keywords are searched as substrings of the normalized phrase; piece
/// keywords take precedence over person keywords. The leading count must fit
/// in a `u32`.
pub fn parse_servings(raw: &str) -> Result<Servings, ParseError> {
    let phrase = normalize(raw);
    let phrase = phrase.trim_start();

    let digits = phrase.bytes().take_while(u8::is_ascii_digit).count();
    let quantity = phrase[..digits]
        .parse::<u32>()
        .map_err(|_| ParseError::ServingsFormat(raw.to_string()))?;

    let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| phrase.contains(kw));
    let unit = if contains_any(PIECE_KEYWORDS) {
        ServingUnit::Pieces
    } else if contains_any(PERSON_KEYWORDS) {
        ServingUnit::Persons
    } else {
        return Err(ParseError::ServingsUnitUnrecognized(raw.to_string()));
    };

    Ok(Servings { quantity, unit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_keywords() {
        assert_eq!(
            parse_servings("3 gros brioches").unwrap(),
            Servings {
                quantity: 3,
                unit: ServingUnit::Pieces
            }
        );
        assert_eq!(parse_servings("12 Muffins").unwrap().unit, ServingUnit::Pieces);
        assert_eq!(parse_servings("8 pièces").unwrap().unit, ServingUnit::Pieces);
        assert_eq!(parse_servings("6 GÂTEAUX").unwrap().unit, ServingUnit::Pieces);
    }

    #[test]
    fn test_person_keywords() {
        assert_eq!(
            parse_servings("1 belles portion").unwrap(),
            Servings {
                quantity: 1,
                unit: ServingUnit::Persons
            }
        );
        assert_eq!(
            parse_servings("4 personnes").unwrap(),
            Servings {
                quantity: 4,
                unit: ServingUnit::Persons
            }
        );
    }

    #[test]
    fn test_pieces_win_over_persons() {
        assert_eq!(
            parse_servings("6 mini portions").unwrap().unit,
            ServingUnit::Pieces
        );
    }

    #[test]
    fn test_missing_leading_number() {
        assert_eq!(
            parse_servings("quelques muffins"),
            Err(ParseError::ServingsFormat("quelques muffins".to_string()))
        );
        assert_eq!(
            parse_servings(""),
            Err(ParseError::ServingsFormat(String::new()))
        );
    }

    #[test]
    fn test_count_overflow() {
        let err = parse_servings("99999999999 muffins").unwrap_err();
        assert_eq!(
            err,
            ParseError::ServingsFormat("99999999999 muffins".to_string())
        );
        assert_eq!(
            err.to_string(),
            "Servings without a valid leading count: \"99999999999 muffins\""
        );
        assert_eq!(parse_servings("4294967295 muffins").unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_unrecognized_unit() {
        assert_eq!(
            parse_servings("4 verrines"),
            Err(ParseError::ServingsUnitUnrecognized("4 verrines".to_string()))
        );
        assert_eq!(
            parse_servings("4"),
            Err(ParseError::ServingsUnitUnrecognized("4".to_string()))
        );
    }
}
