//! Bookshelf - client-side search and display for a static book catalog
//!
//! This library filters an immutable list of book records by free text,
//! renders the visible set in one of three display modes and keeps the
//! user's view preferences in a key-value store across sessions.
//!
//! Hosts plug in two ports: a [`ui::DisplaySurface`] that receives markup and
//! a [`db::KeyValueStore`] that persists preferences.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::browse::BrowseSession;
use crate::config::BookshelfConfig;
use crate::db::{KeyValueStore, MemoryStore, SledStore};
use crate::ui::DisplaySurface;

pub mod browse;
pub mod catalog;
pub mod config;
pub mod db;
pub mod prefs;
pub mod render;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the library
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// Key-value store error
    #[error("Database error: {0}")]
    DbError(#[from] db::DbError),
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
}

/// A single catalog entry supplied by the host page
///
/// Records are never mutated after loading. A missing `tags` field is
/// treated as an empty list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BookRecord {
    /// Create a new record
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
            tags,
        }
    }

    /// Whether the record carries at least one tag
    #[must_use]
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

/// Boxed preference backend chosen at startup
pub type DynStore = Box<dyn KeyValueStore>;

/// Load a catalog file and start a session over the configured store
///
/// The preference store is opened at [`BookshelfConfig::resolved_store_path`].
/// If it cannot be opened, the session falls back to in-memory preferences
/// for its lifetime; only catalog problems are reported.
///
/// # Errors
///
/// Returns `BookshelfError::CatalogError` if the catalog cannot be read or parsed.
pub fn open_session<D: DisplaySurface>(
    config: &BookshelfConfig,
    catalog_path: impl AsRef<Path>,
    surface: D,
) -> Result<BrowseSession<DynStore, D>, BookshelfError> {
    let records = catalog::load(catalog_path)?;
    let store = open_store(config);
    Ok(BrowseSession::from_config(records, store, surface, config))
}

fn open_store(config: &BookshelfConfig) -> DynStore {
    let opened = config
        .resolved_store_path()
        .map_err(BookshelfError::from)
        .and_then(|path| SledStore::open(path).map_err(BookshelfError::from));

    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "preference store unavailable, keeping preferences in memory");
            Box::new(MemoryStore::new())
        }
    }
}
