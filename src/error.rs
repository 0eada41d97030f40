use std::fmt;

use thiserror::Error;

/// Errors raised by the individual field parsers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Quantity token is not an integer, a decimal or a simple fraction
    #[error("Invalid quantity: {0:?}")]
    NumericFormat(String),

    /// Ingredient line could not be segmented at all
    #[error("Cannot parse ingredient line: {0:?}")]
    IngredientParse(String),

    /// Yield phrase does not start with an integer, or the integer overflows u32
    #[error("Servings without a valid leading count: {0:?}")]
    ServingsFormat(String),

    /// Yield phrase contains neither a piece nor a person keyword
    #[error("Unrecognized servings unit: {0:?}")]
    ServingsUnitUnrecognized(String),

    /// Duration is not of the form PT<minutes>M
    #[error("Invalid duration: {0:?}")]
    DurationFormat(String),

    /// Source identifier has no recipe_<digits> part
    #[error("No recipe id in source identifier: {0:?}")]
    IdentifierFormat(String),
}

/// Location inside a recipe document where assembly failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Identifier,
    Yield,
    PrepTime,
    CookTime,
    TotalTime,
    /// Zero-based position in `recipeIngredient`
    Ingredient(usize),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Identifier => write!(f, "source identifier"),
            Field::Yield => write!(f, "recipeYield"),
            Field::PrepTime => write!(f, "prepTime"),
            Field::CookTime => write!(f, "cookTime"),
            Field::TotalTime => write!(f, "totalTime"),
            Field::Ingredient(index) => write!(f, "recipeIngredient[{index}]"),
        }
    }
}

/// Errors that can occur during recipe import operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// A field of the document failed to parse
    #[error("Failed to parse {field}: {source}")]
    Field {
        field: Field,
        #[source]
        source: ParseError,
    },

    /// Document is not valid JSON or misses a required recipe field
    #[error("Invalid recipe document: {0}")]
    Document(#[from] serde_json::Error),

    /// No Recipe node in the JSON-LD value
    #[error("No Recipe node found in JSON-LD document")]
    NoRecipeNode,

    /// Reading documents or writing outputs failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A batch worker panicked or was cancelled
    #[error("Worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ImportError {
    pub(crate) fn field(field: Field) -> impl FnOnce(ParseError) -> ImportError {
        move |source| ImportError::Field { field, source }
    }
}
