//! Core traits for the display abstraction layer

use crate::render::ViewMode;

/// Output port for the three display regions the library owns
///
/// Implementations map these calls onto a real surface: DOM nodes in a
/// browser, a webview bridge, or plain fields in tests. The library never
/// reads anything back from the surface.
pub trait DisplaySurface {
    /// Replace the results container contents and the count text
    ///
    /// `empty` is true exactly when `count` is zero; the empty-state
    /// indicator should then be shown and the list hidden.
    fn display(&mut self, markup: &str, count: usize, empty: bool);

    /// Set the structural class of the results container
    fn set_layout(&mut self, class: &str);

    /// Mark `mode` as the only active mode button
    fn set_active_mode(&mut self, mode: ViewMode);
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn display(&mut self, markup: &str, count: usize, empty: bool) {
        (**self).display(markup, count, empty);
    }

    fn set_layout(&mut self, class: &str) {
        (**self).set_layout(class);
    }

    fn set_active_mode(&mut self, mode: ViewMode) {
        (**self).set_active_mode(mode);
    }
}
