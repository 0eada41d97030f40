//! Turns French schema.org `Recipe` JSON-LD documents into typed records.
//!
//! Each `recipeIngredient` line is segmented into quantity, unit and name,
//! `recipeYield` into a serving count and kind, and `PT<N>M` durations into
//! minutes. A document either yields a complete [`Recipe`] or an
//! [`ImportError`] naming the field that failed.
//!
//! ```
//! use muffin_import::parse_ingredient_line;
//!
//! let ingredient = parse_ingredient_line("2 gousses d'ail").unwrap();
//! assert_eq!(ingredient.quantity, Some(2.0));
//! assert_eq!(ingredient.unit.as_deref(), Some("gousses"));
//! assert_eq!(ingredient.name, "ail");
//! ```

pub mod assembler;
pub mod config;
pub mod duration;
pub mod error;
pub mod extractors;
pub mod ingredient;
pub mod lexicon;
pub mod model;
pub mod name;
pub mod normalize;
pub mod pipelines;
pub mod quantity;
pub mod servings;
pub mod sink;

pub use assembler::{assemble, assemble_str, recipe_id};
pub use config::{load_config, BatchConfig, ImportConfig};
pub use duration::parse_duration_minutes;
pub use error::{Field, ImportError, ParseError};
pub use ingredient::parse_ingredient_line;
pub use lexicon::{match_unit, UnitCategory, UnitMatch, UNIT_FORMS};
pub use model::{Ingredient, Recipe, ServingUnit, Servings};
pub use name::cleanse_name;
pub use normalize::normalize;
pub use pipelines::{BatchReport, FailedDocument};
pub use quantity::parse_quantity;
pub use servings::parse_servings;
pub use sink::{JsonLinesSink, MemorySink, RecipeSink};
