//! In-memory display surface

use super::traits::DisplaySurface;
use crate::render::ViewMode;

/// Surface that keeps every display region as plain fields
///
/// Useful for tests and for hosts that diff regions themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    /// Current results container markup
    pub markup: String,
    /// Current count element text
    pub count_text: String,
    /// Whether the empty-state indicator is visible
    pub empty_state_visible: bool,
    /// Current results container class
    pub layout_class: String,
    /// Buttons currently marked active
    pub active_modes: Vec<ViewMode>,
    /// Number of `display` calls received
    pub renders: usize,
}

impl RecordingSurface {
    /// Create a blank surface
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the book list region is visible
    #[must_use]
    pub const fn list_visible(&self) -> bool {
        !self.empty_state_visible
    }
}

impl DisplaySurface for RecordingSurface {
    fn display(&mut self, markup: &str, count: usize, empty: bool) {
        self.markup = markup.to_string();
        self.count_text = count.to_string();
        self.empty_state_visible = empty;
        self.renders += 1;
    }

    fn set_layout(&mut self, class: &str) {
        self.layout_class = class.to_string();
    }

    fn set_active_mode(&mut self, mode: ViewMode) {
        self.active_modes = ViewMode::ALL
            .into_iter()
            .filter(|candidate| *candidate == mode)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_records_regions() {
        let mut surface = RecordingSurface::new();
        surface.display("<div></div>", 3, false);

        assert_eq!(surface.markup, "<div></div>");
        assert_eq!(surface.count_text, "3");
        assert!(surface.list_visible());
        assert_eq!(surface.renders, 1);
    }

    #[test]
    fn test_empty_state_exclusive_with_list() {
        let mut surface = RecordingSurface::new();
        surface.display("", 0, true);

        assert!(surface.empty_state_visible);
        assert!(!surface.list_visible());
    }

    #[test]
    fn test_active_mode_is_exclusive() {
        let mut surface = RecordingSurface::new();
        surface.set_active_mode(ViewMode::Card);
        surface.set_active_mode(ViewMode::Compact);

        assert_eq!(surface.active_modes, vec![ViewMode::Compact]);
    }

    #[test]
    fn test_surface_through_mut_reference() {
        fn apply_layout<D: DisplaySurface>(mut surface: D) {
            surface.set_layout("books-list");
        }

        let mut surface = RecordingSurface::new();
        apply_layout(&mut surface);
        assert_eq!(surface.layout_class, "books-list");
    }
}
