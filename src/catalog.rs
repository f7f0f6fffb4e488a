//! Catalog loading
//!
//! The host supplies the full record list once, as the JSON array the page
//! embeds. Records are validated only as far as serde requires: `title`,
//! `author` and `url` must be strings, `tags` may be missing.

use crate::BookRecord;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Catalog-specific errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog text is not a valid record array
    #[error("Invalid catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Parse a JSON array of records
///
/// # Examples
/// ```
/// let books = bookshelf::catalog::from_json_str(
///     r#"[{"title": "Dune", "author": "Herbert", "url": "https://example.com/dune"}]"#,
/// ).unwrap();
/// assert_eq!(books.len(), 1);
/// assert!(books[0].tags.is_empty());
/// ```
///
/// # Errors
///
/// Returns `CatalogError::JsonError` if the text is not an array of records.
pub fn from_json_str(json: &str) -> Result<Arc<[BookRecord]>, CatalogError> {
    let records: Vec<BookRecord> = serde_json::from_str(json)?;
    Ok(records.into())
}

/// Read and parse a JSON catalog file
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or parsed.
pub fn load(path: impl AsRef<Path>) -> Result<Arc<[BookRecord]>, CatalogError> {
    let text = fs::read_to_string(path)?;
    from_json_str(&text)
}
