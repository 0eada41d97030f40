//! Destinations for assembled recipes.

use async_trait::async_trait;
use log::debug;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::ImportError;
use crate::model::Recipe;

/// Receives assembled recipes, e.g. a database or an index writer.
#[async_trait]
pub trait RecipeSink: Send {
    /// Sink name for logging (e.g., "jsonl", "memory")
    fn sink_name(&self) -> &str;

    async fn store(&mut self, recipe: &Recipe) -> Result<(), ImportError>;

    /// Flush anything buffered. Called once after the last recipe.
    async fn finish(&mut self) -> Result<(), ImportError> {
        Ok(())
    }
}

/// Writes one JSON object per line.
pub struct JsonLinesSink {
    writer: BufWriter<File>,
    written: usize,
}

impl JsonLinesSink {
    /// Create (or truncate) the output file.
    pub async fn create(path: &Path) -> Result<Self, ImportError> {
        let file = File::create(path).await?;
        Ok(Self {
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

#[async_trait]
impl RecipeSink for JsonLinesSink {
    fn sink_name(&self) -> &str {
        "jsonl"
    }

    async fn store(&mut self, recipe: &Recipe) -> Result<(), ImportError> {
        let mut line = serde_json::to_vec(recipe)?;
        line.push(b'\n');
        self.writer.write_all(&line).await?;
        self.written += 1;
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), ImportError> {
        self.writer.flush().await?;
        debug!("Wrote {} recipes", self.written);
        Ok(())
    }
}

/// Keeps recipes in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub recipes: Vec<Recipe>,
}

#[async_trait]
impl RecipeSink for MemorySink {
    fn sink_name(&self) -> &str {
        "memory"
    }

    async fn store(&mut self, recipe: &Recipe) -> Result<(), ImportError> {
        self.recipes.push(recipe.clone());
        Ok(())
    }
}

/// Hand every recipe to `sink`, then finish it.
pub async fn store_all(
    sink: &mut dyn RecipeSink,
    recipes: &[Recipe],
) -> Result<(), ImportError> {
    debug!("Storing {} recipes into {}", recipes.len(), sink.sink_name());
    for recipe in recipes {
        sink.store(recipe).await?;
    }
    sink.finish().await
}
