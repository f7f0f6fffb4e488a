//! Free-text search over the book catalog
//!
//! Filtering is a pure function of the catalog, the query and the ordering
//! flag. See [`filter::filter`].

pub mod filter;

pub use filter::{BookFilterExt, filter, matches};
