//! Controller state and input events

use super::debounce::Debouncer;
use crate::prefs::ViewState;
use crate::render::ViewMode;
use std::time::Duration;

/// Everything the session mutates in response to events
#[derive(Debug, Clone)]
pub struct ControllerState {
    /// Current text of the search input
    pub query: String,
    /// Display mode and ordering
    pub view: ViewState,
    /// Pending debounced search
    pub debounce: Debouncer,
}

impl ControllerState {
    /// Fresh state with an empty query
    #[must_use]
    pub const fn new(view: ViewState, debounce_window: Duration) -> Self {
        Self {
            query: String::new(),
            view,
            debounce: Debouncer::new(debounce_window),
        }
    }
}

/// User input delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search text changed
    Input(String),
    /// A mode button was activated
    SelectMode(ViewMode),
    /// The order toggle was activated
    ToggleOrder,
    /// Timer callback; lets a due debounced search run
    Tick,
}
