use std::path::Path;

use anyhow::Context as _;
use thiserror::Error;

/// Schema problems that make the catalog unusable. Raised once at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog source is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("catalog has no usable records after cleaning")]
    EmptyCatalog,
}

/// Add context to catalog read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read catalog from: {}", path.display())
}

/// Add context to artifact write errors
pub fn write_context(artifact: &str, path: &Path) -> String {
    format!("Failed to write {} artifact to: {}", artifact, path.display())
}

/// Wrap result with catalog read context
pub fn with_read_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(read_context(path))
}
