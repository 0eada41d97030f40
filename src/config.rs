use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main import configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Directory holding the raw JSON-LD documents
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    /// JSON-lines file receiving assembled recipes
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Failed-list: one `source<TAB>error` line per rejected document
    #[serde(default = "default_failed_log")]
    pub failed_log: PathBuf,
    /// Inventory of distinct raw ingredient lines
    #[serde(default = "default_ingredients_out")]
    pub ingredients_out: PathBuf,
    /// Batch processing settings
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Configuration for batch processing
#[derive(Debug, Deserialize, Clone)]
pub struct BatchConfig {
    /// Maximum number of documents processed concurrently
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// File name prefix of recipe documents
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// File extension of recipe documents, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            file_prefix: default_file_prefix(),
            extension: default_extension(),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output: default_output(),
            failed_log: default_failed_log(),
            ingredients_out: default_ingredients_out(),
            batch: BatchConfig::default(),
        }
    }
}

// Default value functions
fn default_input_dir() -> PathBuf {
    PathBuf::from("data/raw_recipes")
}

fn default_output() -> PathBuf {
    PathBuf::from("data/recipes.jsonl")
}

fn default_failed_log() -> PathBuf {
    PathBuf::from("data/failed_recipes.txt")
}

fn default_ingredients_out() -> PathBuf {
    PathBuf::from("data/raw_ingredients.txt")
}

fn default_workers() -> usize {
    4
}

fn default_file_prefix() -> String {
    "recipe_".to_string()
}

fn default_extension() -> String {
    "json".to_string()
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MUFFIN__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MUFFIN__BATCH__WORKERS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Reject settings the batch pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch.workers == 0 {
            return Err(ConfigError::Message(
                "batch.workers must be greater than 0".to_string(),
            ));
        }
        if self.batch.extension.starts_with('.') {
            return Err(ConfigError::Message(format!(
                "batch.extension '{}' must not start with a dot",
                self.batch.extension
            )));
        }
        Ok(())
    }
}

/// Load configuration from file and environment variables
///
/// See [`ImportConfig::load`] for the precedence rules.
pub fn load_config() -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: MUFFIN__BATCH__WORKERS
        .add_source(
            Environment::with_prefix("MUFFIN")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: ImportConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}
