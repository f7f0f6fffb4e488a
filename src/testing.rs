//! Testing utilities for bookshelf
//!
//! Sample records and fixtures shared by unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::BookRecord;

/// "Dune" by Herbert, tagged `scifi`
#[must_use]
pub fn dune() -> BookRecord {
    BookRecord::new("Dune", "Herbert", "https://example.com/dune", vec!["scifi".into()])
}

/// "Hamlet" by Shakespeare, no tags
#[must_use]
pub fn hamlet() -> BookRecord {
    BookRecord::new("Hamlet", "Shakespeare", "https://example.com/hamlet", vec![])
}

/// A small catalog mixing tagged and untagged records
#[must_use]
pub fn sample_catalog() -> Vec<BookRecord> {
    vec![
        dune(),
        hamlet(),
        BookRecord::new(
            "The Rust Programming Language",
            "Klabnik",
            "https://doc.rust-lang.org/book/",
            vec!["rust".into(), "programming".into()],
        ),
        BookRecord::new(
            "Structure and Interpretation of Computer Programs",
            "Abelson",
            "https://example.com/sicp",
            vec!["lisp".into(), "classic".into()],
        ),
        BookRecord::new("Neuromancer", "Gibson", "https://example.com/neuromancer", vec![
            "scifi".into(),
            "cyberpunk".into(),
        ]),
    ]
}
