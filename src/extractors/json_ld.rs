use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::convert::TryFrom;

use crate::error::ImportError;

/// The schema.org `Recipe` fields the import reads.
///
/// Strings are kept verbatim: titles and steps end up in persisted records.
#[derive(Debug, Deserialize)]
pub struct JsonLdRecipe {
    pub name: String,
    #[serde(rename = "recipeYield")]
    recipe_yield: RecipeYield,
    #[serde(rename = "prepTime")]
    pub prep_time: String,
    #[serde(rename = "cookTime")]
    pub cook_time: String,
    #[serde(rename = "totalTime")]
    pub total_time: String,
    #[serde(rename = "recipeIngredient")]
    pub recipe_ingredient: Vec<String>,
    #[serde(rename = "recipeInstructions")]
    recipe_instructions: RecipeInstructions,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeYield {
    String(String),
    Number(i64),
    Array(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct RecipeInstructionObject {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeInstructions {
    String(String),
    Multiple(Vec<String>),
    MultipleObject(Vec<RecipeInstructionObject>),
    HowTo(Vec<HowTo>),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "@type")]
enum HowTo {
    HowToStep(HowToStep),
    HowToSection(HowToSection),
}

#[derive(Debug, Deserialize)]
struct HowToStep {
    text: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HowToSection {
    #[serde(rename = "itemListElement")]
    item_list_element: Vec<HowToStep>,
}

impl HowToStep {
    fn text(&self) -> Option<&String> {
        // Prefer text over name
        self.text.as_ref().or(self.name.as_ref())
    }
}

impl TryFrom<&Value> for JsonLdRecipe {
    type Error = serde_json::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::deserialize(value)
    }
}

impl JsonLdRecipe {
    /// The yield as a phrase for the servings classifier.
    ///
    /// For arrays, prefer the descriptive version (e.g. "12 muffins") over
    /// the bare number.
    pub fn yield_phrase(&self) -> String {
        match &self.recipe_yield {
            RecipeYield::String(s) => s.clone(),
            RecipeYield::Number(n) => n.to_string(),
            RecipeYield::Array(arr) => arr
                .iter()
                .find(|s| s.contains(char::is_alphabetic))
                .or_else(|| arr.first())
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Step texts in source order; sections are flattened. Steps carrying
    /// neither `text` nor `name` are skipped with a warning.
    pub fn instruction_texts(&self) -> Vec<String> {
        match &self.recipe_instructions {
            RecipeInstructions::String(text) => vec![text.clone()],
            RecipeInstructions::Multiple(steps) => steps.clone(),
            RecipeInstructions::MultipleObject(steps) => {
                steps.iter().map(|step| step.text.clone()).collect()
            }
            RecipeInstructions::HowTo(items) => items
                .iter()
                .flat_map(|item| match item {
                    HowTo::HowToStep(step) => vec![step],
                    HowTo::HowToSection(section) => section.item_list_element.iter().collect(),
                })
                .filter_map(|step| {
                    let text = step.text().cloned();
                    if text.is_none() {
                        warn!("Skipping HowToStep without text or name");
                    }
                    text
                })
                .collect(),
        }
    }
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(type_str)) => type_str.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|type_str| type_str.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

/// Locate the Recipe node of a JSON-LD value.
///
/// Looks at the root object, then the items of a root array, then `@graph`.
/// A root object without `@type` is accepted when it carries ingredients.
pub fn find_recipe_node(json_ld: &Value) -> Result<&Value, ImportError> {
    let node = if let Some(items) = json_ld.as_array() {
        debug!("JSON-LD is an array of {} items", items.len());
        items.iter().find(|item| is_recipe_type(item))
    } else if is_recipe_type(json_ld)
        || (json_ld.get("@type").is_none() && json_ld.get("recipeIngredient").is_some())
    {
        Some(json_ld)
    } else if let Some(graph) = json_ld.get("@graph") {
        debug!("Searching Recipe node in @graph");
        graph
            .as_array()
            .and_then(|items| items.iter().find(|item| is_recipe_type(item)))
    } else {
        None
    };

    node.ok_or(ImportError::NoRecipeNode)
}
