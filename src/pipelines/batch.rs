use log::{debug, error, info, warn};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::assembler::assemble_str;
use crate::config::BatchConfig;
use crate::error::ImportError;
use crate::model::Recipe;

/// Failed-list source for a worker lost before it reported its document.
const UNKNOWN_SOURCE: &str = "<unknown>";

/// A document that could not be turned into a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDocument {
    pub source: String,
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Assembled recipes, sorted by id
    pub recipes: Vec<Recipe>,
    /// Rejected documents, sorted by source
    pub failures: Vec<FailedDocument>,
    /// Number of ingredients across all recipes whose name came out empty
    pub degraded: usize,
}

/// List the recipe documents of `dir`, sorted by file name.
pub async fn discover(dir: &Path, config: &BatchConfig) -> Result<Vec<PathBuf>, ImportError> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut paths = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(&config.file_prefix))
            && path
                .extension()
                .is_some_and(|ext| ext == config.extension.as_str());
        if matches && entry.file_type().await?.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    debug!("Found {} documents in {}", paths.len(), dir.display());
    Ok(paths)
}

/// Assemble every document in `paths`, at most `config.workers` at a time.
///
/// Documents are independent: one failing never stops the others, it is
/// recorded in the report instead. This includes a panic while assembling.
pub async fn run(paths: Vec<PathBuf>, config: &BatchConfig) -> BatchReport {
    run_with(paths, config, assemble_str).await
}

async fn run_with<F>(paths: Vec<PathBuf>, config: &BatchConfig, assemble: F) -> BatchReport
where
    F: Fn(&str, &str) -> Result<Recipe, ImportError> + Copy + Send + 'static,
{
    let permits = Arc::new(Semaphore::new(config.workers.max(1)));
    let mut tasks = JoinSet::new();

    for path in paths {
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            // The semaphore is never closed
            let _permit = permits.acquire_owned().await.ok();
            let source = path.display().to_string();
            let result = match tokio::fs::read_to_string(&path).await {
                Ok(json) => {
                    let identifier = source.clone();
                    tokio::task::spawn_blocking(move || assemble(&json, &identifier))
                        .await
                        .unwrap_or_else(|e| Err(ImportError::Task(e)))
                }
                Err(e) => Err(ImportError::Io(e)),
            };
            (source, result)
        });
    }

    let mut report = BatchReport::default();
    while let Some(joined) = tasks.join_next().await {
        let (source, result) = match joined {
            Ok(done) => done,
            Err(e) => {
                error!("Batch worker failed: {}", e);
                (UNKNOWN_SOURCE.to_string(), Err(ImportError::Task(e)))
            }
        };
        match result {
            Ok(recipe) => {
                debug!("Assembled recipe {} from {}", recipe.id, source);
                report.degraded += recipe.degraded_ingredients().count();
                report.recipes.push(recipe);
            }
            Err(e) => {
                warn!("Failed to import {}: {}", source, e);
                report.failures.push(FailedDocument {
                    source,
                    error: e.to_string(),
                });
            }
        }
    }

    report.recipes.sort_by_key(|recipe| recipe.id);
    report.failures.sort_by(|a, b| a.source.cmp(&b.source));
    info!(
        "Batch finished: {} recipes, {} failures, {} degraded ingredients",
        report.recipes.len(),
        report.failures.len(),
        report.degraded
    );
    report
}

/// Write the failed-list, one `source<TAB>error` line per document.
pub async fn write_failed_list(path: &Path, failures: &[FailedDocument]) -> Result<(), ImportError> {
    let lines = failures
        .iter()
        .map(|failure| format!("{}\t{}", failure.source, failure.error));
    write_lines(path, lines).await
}

/// Write one line per item, replacing the file.
pub async fn write_lines<I, S>(path: &Path, lines: I) -> Result<(), ImportError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

#[derive(Deserialize)]
struct IngredientLines {
    #[serde(rename = "recipeIngredient", default)]
    recipe_ingredient: Vec<String>,
}

/// Collect the distinct raw `recipeIngredient` lines of all documents.
///
/// Used to review what the unit lexicon and the name cleanser will face.
/// Unreadable documents are skipped.
pub async fn collect_raw_ingredients(paths: &[PathBuf]) -> BTreeSet<String> {
    let mut all = BTreeSet::new();

    for path in paths {
        let parsed = match tokio::fs::read_to_string(path).await {
            Ok(json) => serde_json::from_str::<IngredientLines>(&json).map_err(ImportError::from),
            Err(e) => Err(ImportError::Io(e)),
        };
        match parsed {
            Ok(doc) => all.extend(doc.recipe_ingredient),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    info!(
        "Collected {} distinct ingredient lines from {} documents",
        all.len(),
        paths.len()
    );
    all
}
