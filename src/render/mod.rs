//! Markup rendering for the visible book set
//!
//! [`render`] turns an ordered set of records into one markup block per book,
//! shaped by the current [`ViewMode`]. [`present`] pushes the result to a
//! [`DisplaySurface`] together with the count and the empty-state flag.
//!
//! Every record field goes through [`escape`] before it is embedded, the url
//! included.

mod escape;
mod mode;

pub use escape::escape;
pub use mode::{UnknownViewMode, ViewMode};

use crate::BookRecord;
use crate::ui::DisplaySurface;
use std::fmt::Write;

/// Text shown by the empty-state indicator
pub const EMPTY_STATE_MESSAGE: &str = "No books found matching your search.";

/// Markup fragment and count produced for one visible set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedView {
    /// Concatenated markup blocks, empty when nothing matched
    pub markup: String,
    /// Number of records in the visible set
    pub count: usize,
}

impl RenderedView {
    /// Whether the empty-state indicator should be shown instead of the list
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Render the visible set in the given mode
///
/// # Examples
/// ```
/// use bookshelf::BookRecord;
/// use bookshelf::render::{render, ViewMode};
///
/// let dune = BookRecord::new("Dune", "Herbert", "https://example.com/dune", vec![]);
/// let view = render(&[&dune], ViewMode::Compact);
/// assert_eq!(view.count, 1);
/// assert!(view.markup.contains(">View</a>"));
/// ```
#[must_use]
pub fn render(visible: &[&BookRecord], mode: ViewMode) -> RenderedView {
    let mut markup = String::new();
    for book in visible {
        render_book(&mut markup, book, mode);
    }
    RenderedView {
        markup,
        count: visible.len(),
    }
}

/// Render and hand the result to a display surface
///
/// The surface receives the markup, the count and whether the empty-state
/// indicator should replace the list.
pub fn present<D: DisplaySurface + ?Sized>(
    visible: &[&BookRecord],
    mode: ViewMode,
    surface: &mut D,
) -> RenderedView {
    let view = render(visible, mode);
    tracing::debug!(count = view.count, mode = %mode, "rendering book list");
    surface.display(&view.markup, view.count, view.is_empty());
    view
}

fn render_book(out: &mut String, book: &BookRecord, mode: ViewMode) {
    let title = escape(&book.title);
    let author = escape(&book.author);
    let url = escape(&book.url);
    let tags = tags_markup(&book.tags);

    // Writing to a String cannot fail
    let _ = match mode {
        ViewMode::Card => write!(
            out,
            r#"<div class="book-card"><div class="title">{title}</div><div class="author">{author}</div>{tags}<a href="{url}" class="link" target="_blank" rel="noopener">View Resource &rarr;</a></div>"#
        ),
        ViewMode::List => write!(
            out,
            r#"<div class="book-card"><div class="book-info"><div class="title">{title}</div><div class="author">{author}</div>{tags}</div><a href="{url}" class="link" target="_blank" rel="noopener">View &rarr;</a></div>"#
        ),
        ViewMode::Compact => write!(
            out,
            r#"<div class="book-card"><div class="title">{title}</div><div class="author">{author}</div>{tags}<a href="{url}" class="link" target="_blank" rel="noopener">View</a></div>"#
        ),
    };
}

fn tags_markup(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let chips: String = tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">#{}</span>"#, escape(tag)))
        .collect();
    format!(r#"<div class="tags">{chips}</div>"#)
}
