//! Segmentation of one `recipeIngredient` line.
//!
//! The line is read left to right by small parsers, each optional:
//!
//! ```text
//! line := quantity? WS? unit? WS? connector? name
//! ```
//!
//! Whatever is not consumed by the first three becomes the name tail, so any
//! non-empty line yields an ingredient.

use log::trace;

use crate::error::ParseError;
use crate::lexicon::match_unit;
use crate::model::Ingredient;
use crate::name::cleanse_name;
use crate::quantity::{parse_quantity, scan_quantity};

/// Parse a raw ingredient line into quantity, unit and cleaned name.
pub fn parse_ingredient_line(raw: &str) -> Result<Ingredient, ParseError> {
    let line = raw.trim();
    if line.is_empty() {
        return Err(ParseError::IngredientParse(raw.to_string()));
    }

    let (quantity, rest) = match scan_quantity(line) {
        Some((token, rest)) => (Some(parse_quantity(token)?), rest),
        None => (None, line),
    };

    // A unit needs a word boundary before it: "200 g" has one, "200g" does not.
    let after_space = rest.trim_start();
    let at_boundary = quantity.is_none() || after_space.len() < rest.len();
    let (unit, rest) = match at_boundary.then(|| match_unit(after_space)).flatten() {
        Some(unit) => (Some(unit.text.to_string()), &after_space[unit.end..]),
        None => (None, after_space),
    };

    let tail = strip_connector(rest.trim_start());
    let ingredient = Ingredient {
        name: cleanse_name(tail),
        quantity,
        unit,
    };
    trace!("{:?} -> {:?}", raw, ingredient);
    Ok(ingredient)
}

/// Drop a leading "de " or "d'"/"d’" joining the unit to the name.
fn strip_connector(text: &str) -> &str {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some('d' | 'D'), Some('\'' | '’')) => chars.as_str().trim_start(),
        (Some('d' | 'D'), Some('e' | 'E')) if chars.as_str().starts_with(char::is_whitespace) => {
            chars.as_str().trim_start()
        }
        _ => text,
    }
}
