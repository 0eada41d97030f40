//! Builds a [`Recipe`] from one raw JSON-LD document.
//!
//! Assembly is all-or-nothing: the first field that fails aborts the recipe
//! and the error names that field.

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use serde_json::Value;
use std::convert::TryFrom;

use crate::duration::parse_duration_minutes;
use crate::error::{Field, ImportError, ParseError};
use crate::extractors::{find_recipe_node, JsonLdRecipe};
use crate::ingredient::parse_ingredient_line;
use crate::model::{Ingredient, Recipe};
use crate::servings::parse_servings;

lazy_static! {
    static ref RECIPE_ID: Regex =
        Regex::new(r"recipe_([0-9]+)").expect("Recipe id pattern should be valid");
}

/// Extract the numeric id from a source identifier such as
/// `data/raw_recipes/recipe_10620.json`.
pub fn recipe_id(source_identifier: &str) -> Result<u64, ParseError> {
    RECIPE_ID
        .captures(source_identifier)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| ParseError::IdentifierFormat(source_identifier.to_string()))
}

/// Assemble a recipe from a parsed JSON-LD value.
pub fn assemble(raw_document: &Value, source_identifier: &str) -> Result<Recipe, ImportError> {
    let id = recipe_id(source_identifier).map_err(ImportError::field(Field::Identifier))?;
    let document = JsonLdRecipe::try_from(find_recipe_node(raw_document)?)?;
    debug!("Assembling recipe {} from {}", id, source_identifier);

    let servings =
        parse_servings(&document.yield_phrase()).map_err(ImportError::field(Field::Yield))?;
    let prep_time =
        parse_duration_minutes(&document.prep_time).map_err(ImportError::field(Field::PrepTime))?;
    let cook_time =
        parse_duration_minutes(&document.cook_time).map_err(ImportError::field(Field::CookTime))?;
    let total_time = parse_duration_minutes(&document.total_time)
        .map_err(ImportError::field(Field::TotalTime))?;

    let ingredients = document
        .recipe_ingredient
        .iter()
        .enumerate()
        .map(|(index, line)| {
            parse_ingredient_line(line).map_err(ImportError::field(Field::Ingredient(index)))
        })
        .collect::<Result<Vec<Ingredient>, _>>()?;

    let recipe = Recipe {
        id,
        title: document.name.clone(),
        prep_time,
        cook_time,
        total_time,
        servings,
        ingredients,
        instructions: document.instruction_texts(),
    };

    for index in recipe.degraded_ingredients() {
        warn!(
            "Recipe {}: ingredient {} ({:?}) has no usable name",
            recipe.id, index, document.recipe_ingredient[index]
        );
    }

    Ok(recipe)
}

/// Parse JSON text and assemble it.
pub fn assemble_str(json: &str, source_identifier: &str) -> Result<Recipe, ImportError> {
    let raw_document: Value = serde_json::from_str(json)?;
    assemble(&raw_document, source_identifier)
}
