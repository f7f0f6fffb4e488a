//! Display abstraction layer
//!
//! The library owns three regions of the host page: the results container,
//! the count element and the empty-state element. It also drives the
//! container's layout class and the active mode button. All of that goes
//! through the [`DisplaySurface`] trait, so filtering and rendering stay
//! testable without a real page.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  BrowseSession / render      │
//! └──────────────┬───────────────┘
//!                │ DisplaySurface
//!        ┌───────┴────────┐
//!        ▼                ▼
//! ┌─────────────┐  ┌──────────────────┐
//! │ DOM bridge  │  │ RecordingSurface │
//! │ (host)      │  │ (tests)          │
//! └─────────────┘  └──────────────────┘
//! ```

mod traits;

pub mod mock;

pub use mock::RecordingSurface;
pub use traits::DisplaySurface;
