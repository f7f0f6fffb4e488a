//! Key-value storage backends for bookshelf
//!
//! The preference layer only needs string get/set semantics, so storage is
//! hidden behind the [`KeyValueStore`] trait. Two backends ship with the
//! crate:
//!
//! - [`SledStore`]: durable, uses a sled tree on disk
//! - [`MemoryStore`]: in-process, can simulate unavailable storage

use sled::{Db, Tree};
use std::path::Path;

pub mod error;
pub mod memory;

pub use error::DbError;
pub use memory::MemoryStore;

/// Name of the sled tree holding preference keys
const PREFERENCES_TREE: &str = "preferences";

/// String key-value storage
///
/// Both operations take `&self`: backends are shared by a single session and
/// handle their own interior mutability.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, DbError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), DbError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, DbError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DbError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, DbError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DbError> {
        (**self).set(key, value)
    }
}

/// Sled-backed store that survives restarts
pub struct SledStore {
    db: Db,
    prefs: Tree,
}

impl SledStore {
    /// Opens or creates a store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use bookshelf::db::SledStore;
    /// let store = SledStore::open("prefs_db").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the database cannot be opened or the preference
    /// tree cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let db = sled::open(path)?;
        let prefs = db.open_tree(PREFERENCES_TREE)?;
        Ok(Self { db, prefs })
    }

    /// Number of stored keys
    #[must_use]
    pub fn count(&self) -> usize {
        self.prefs.len()
    }

    /// Remove every stored key
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the tree cannot be cleared or flushed.
    pub fn clear(&self) -> Result<(), DbError> {
        self.prefs.clear()?;
        self.flush()
    }

    /// Flush pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the flush fails.
    pub fn flush(&self) -> Result<(), DbError> {
        self.db.flush()?;
        Ok(())
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>, DbError> {
        match self.prefs.get(key.as_bytes())? {
            Some(value) => String::from_utf8(value.to_vec())
                .map(Some)
                .map_err(|source| DbError::InvalidValue {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DbError> {
        self.prefs.insert(key.as_bytes(), value.as_bytes())?;
        self.flush()
    }
}
