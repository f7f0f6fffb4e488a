//! Browse module - the interaction controller
//!
//! Turns host events (text input, mode buttons, order toggle, timer ticks)
//! into filtered, rendered output. The module is UI-agnostic: output goes
//! through [`crate::ui::DisplaySurface`] and preferences through
//! [`crate::db::KeyValueStore`].
//!
//! - `session`: [`BrowseSession`], owns state and handles events
//! - `state`: [`ControllerState`] and [`UiEvent`]
//! - `debounce`: single-slot cancellable search timer

pub mod debounce;
pub mod session;
pub mod state;

pub use debounce::Debouncer;
pub use session::BrowseSession;
pub use state::{ControllerState, UiEvent};
