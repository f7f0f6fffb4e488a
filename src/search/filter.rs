//! Record filtering used by the browse session
//!
//! A record matches a query when the lowercased query is a substring of the
//! lowercased title, author or any tag. Matching never reorders: results keep
//! catalog order, and reversal is applied only after matching.
//!
//! # Iterator Adapter
//!
//! [`BookFilterExt`] adds the same predicate to any iterator of record
//! references:
//!
//! ```
//! use bookshelf::BookRecord;
//! use bookshelf::search::filter::BookFilterExt;
//!
//! let books = vec![
//!     BookRecord::new("Dune", "Herbert", "https://example.com/dune", vec!["scifi".into()]),
//!     BookRecord::new("Hamlet", "Shakespeare", "https://example.com/hamlet", vec![]),
//! ];
//!
//! let titles: Vec<&str> = books.iter().matching("SCI").map(|b| b.title.as_str()).collect();
//! assert_eq!(titles, ["Dune"]);
//! ```

use crate::BookRecord;

/// Whether `record` contains `needle` in its title, author or tags
///
/// `needle` must already be lowercase.
#[must_use]
pub fn matches(record: &BookRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.author.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Compute the visible set for a query and ordering flag
///
/// # Arguments
/// * `records` - Full catalog in its original order
/// * `query` - Free text; empty matches every record
/// * `reversed` - If true, the matched sequence is returned back to front
///
/// # Returns
/// References into `records`, forming an ordered subsequence of it (or the
/// exact reverse of one)
#[must_use]
pub fn filter<'a>(records: &'a [BookRecord], query: &str, reversed: bool) -> Vec<&'a BookRecord> {
    let mut visible: Vec<&BookRecord> = records.iter().matching(query).collect();
    if reversed {
        visible.reverse();
    }
    visible
}

/// Iterator returned by [`BookFilterExt::matching`]
pub struct Matching<I> {
    inner: I,
    needle: Option<String>,
}

impl<'a, I> Iterator for Matching<I>
where
    I: Iterator<Item = &'a BookRecord>,
{
    type Item = &'a BookRecord;

    fn next(&mut self) -> Option<Self::Item> {
        match &self.needle {
            None => self.inner.next(),
            Some(needle) => self.inner.find(|record| matches(record, needle)),
        }
    }
}

/// Extension trait for filtering iterators of book records by free text
pub trait BookFilterExt<'a>: Iterator<Item = &'a BookRecord> + Sized {
    /// Keep records matching `query`, lazily and in order
    ///
    /// An empty query keeps everything.
    fn matching(self, query: &str) -> Matching<Self> {
        let needle = (!query.is_empty()).then(|| query.to_lowercase());
        Matching {
            inner: self,
            needle,
        }
    }
}

impl<'a, I> BookFilterExt<'a> for I where I: Iterator<Item = &'a BookRecord> {}
