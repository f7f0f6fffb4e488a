//! Persisted view preferences
//!
//! The display mode and the ordering flag live under two independent keys
//! in a [`KeyValueStore`]. Reads fall back to defaults per key and writes
//! never fail from the caller's point of view: storage problems are logged
//! and the in-memory state stays authoritative for the session.

use crate::config::BookshelfConfig;
use crate::db::KeyValueStore;
use crate::render::ViewMode;
use serde::{Deserialize, Serialize};

/// Current display mode and ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub mode: ViewMode,
    pub reversed: bool,
}

impl ViewState {
    /// Create a view state
    #[must_use]
    pub const fn new(mode: ViewMode, reversed: bool) -> Self {
        Self { mode, reversed }
    }
}

/// Storage keys used for the two preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceKeys {
    pub view: String,
    pub reversed: String,
}

impl Default for PreferenceKeys {
    fn default() -> Self {
        Self {
            view: "bookshelf-view".to_string(),
            reversed: "bookshelf-reversed".to_string(),
        }
    }
}

impl From<&BookshelfConfig> for PreferenceKeys {
    fn from(config: &BookshelfConfig) -> Self {
        Self {
            view: config.view_key.clone(),
            reversed: config.reversed_key.clone(),
        }
    }
}

/// Reads and writes [`ViewState`] through a key-value backend
pub struct PreferenceStore<S> {
    store: S,
    keys: PreferenceKeys,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Wrap a backend using the default keys
    pub fn new(store: S) -> Self {
        Self::with_keys(store, PreferenceKeys::default())
    }

    /// Wrap a backend using custom keys
    pub const fn with_keys(store: S, keys: PreferenceKeys) -> Self {
        Self { store, keys }
    }

    /// Keys this store reads and writes
    #[must_use]
    pub const fn keys(&self) -> &PreferenceKeys {
        &self.keys
    }

    /// Underlying backend
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.store
    }

    /// Give back the underlying backend
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Restore the last saved view state
    ///
    /// Each key falls back independently: a missing, unreadable or malformed
    /// mode yields [`ViewMode::Card`], and anything other than `"true"` for
    /// the ordering flag yields `false`.
    pub fn load(&self) -> ViewState {
        let mode = self
            .read(&self.keys.view)
            .and_then(|raw| match raw.parse::<ViewMode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::debug!(key = %self.keys.view, error = %e, "ignoring stored view mode");
                    None
                }
            })
            .unwrap_or_default();

        let reversed = match self.read(&self.keys.reversed).as_deref() {
            Some("true") => true,
            Some("false") | None => false,
            Some(other) => {
                tracing::debug!(key = %self.keys.reversed, value = other, "ignoring stored order flag");
                false
            }
        };

        ViewState { mode, reversed }
    }

    /// Persist both preferences
    ///
    /// Failures are logged and swallowed; a failed mode write does not stop
    /// the flag write.
    pub fn save(&self, state: ViewState) {
        self.write(&self.keys.view, state.mode.as_str());
        self.write(&self.keys.reversed, if state.reversed { "true" } else { "false" });
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read preference, using default");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, value, error = %e, "failed to persist preference");
        }
    }
}
