use serde::{Deserialize, Serialize};

/// One segmented `recipeIngredient` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Cleaned ingredient name, in source casing
    pub name: String,
    pub quantity: Option<f64>,
    /// Unit exactly as written in the source line
    pub unit: Option<String>,
}

impl Ingredient {
    /// The line held no usable name, only markers or punctuation.
    pub fn is_degraded(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServingUnit {
    /// Countable items: muffins, brioches, pièces...
    Pieces,
    /// Number of people fed
    Persons,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Servings {
    pub quantity: u32,
    pub unit: ServingUnit,
}

/// A fully assembled recipe. Durations are in minutes.
///
/// `total_time` is kept as published and is not checked against
/// `prep_time + cook_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Taken from the source file name, not from the content
    pub id: u64,
    pub title: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub total_time: u32,
    pub servings: Servings,
    /// In source order
    pub ingredients: Vec<Ingredient>,
    /// In source step order
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Indices of ingredients whose name came out empty.
    pub fn degraded_ingredients(&self) -> impl Iterator<Item = usize> + '_ {
        self.ingredients
            .iter()
            .enumerate()
            .filter(|(_, ingredient)| ingredient.is_degraded())
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serving_unit_serializes_lowercase() {
        let servings = Servings {
            quantity: 4,
            unit: ServingUnit::Persons,
        };
        assert_eq!(
            serde_json::to_string(&servings).unwrap(),
            r#"{"quantity":4,"unit":"persons"}"#
        );
    }

    #[test]
    fn test_ingredient_serializes_missing_fields_as_null() {
        let ingredient = Ingredient {
            name: "Sucre glace".to_string(),
            quantity: None,
            unit: None,
        };
        assert_eq!(
            serde_json::to_string(&ingredient).unwrap(),
            r#"{"name":"Sucre glace","quantity":null,"unit":null}"#
        );
    }

    #[test]
    fn test_degraded_ingredients() {
        let ingredient = |name: &str| Ingredient {
            name: name.to_string(),
            quantity: None,
            unit: None,
        };
        let recipe = Recipe {
            id: 1,
            title: "Muffins".to_string(),
            prep_time: 10,
            cook_time: 20,
            total_time: 30,
            servings: Servings {
                quantity: 6,
                unit: ServingUnit::Pieces,
            },
            ingredients: vec![ingredient("farine"), ingredient(""), ingredient("sucre")],
            instructions: vec![],
        };
        assert_eq!(recipe.degraded_ingredients().collect::<Vec<_>>(), vec![1]);
    }
}
