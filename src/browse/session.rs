//! Browse session - wires user input to filtering and rendering
//!
//! # Workflow
//!
//! ```text
//! start()
//!   load ViewState → apply layout + active button → render("")
//!     ↓
//! ┌─→ Event?
//! │   ├─ Input(text)     → query = text, arm debounce (no render)
//! │   ├─ Tick            → debounce due? render(captured text)
//! │   ├─ SelectMode(m)   → persist, apply layout + button, render now
//! │   └─ ToggleOrder     → persist, render now
//! └───┘
//! ```
//!
//! A debounced search reads the view state current at firing time; only its
//! query text is fixed at the keystroke that armed it.

use super::state::{ControllerState, UiEvent};
use crate::BookRecord;
use crate::config::BookshelfConfig;
use crate::db::KeyValueStore;
use crate::prefs::{PreferenceKeys, PreferenceStore, ViewState};
use crate::render::{self, RenderedView, ViewMode};
use crate::search::filter;
use crate::ui::DisplaySurface;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Interactive session over an immutable catalog
pub struct BrowseSession<S, D> {
    records: Arc<[BookRecord]>,
    prefs: PreferenceStore<S>,
    surface: D,
    state: ControllerState,
}

impl<S: KeyValueStore, D: DisplaySurface> BrowseSession<S, D> {
    /// Start a session
    ///
    /// Restores the saved view state, reflects it on the surface and renders
    /// the full catalog with an empty query.
    pub fn start(
        records: Arc<[BookRecord]>,
        prefs: PreferenceStore<S>,
        surface: D,
        debounce_window: Duration,
    ) -> Self {
        let view = prefs.load();
        tracing::debug!(mode = %view.mode, reversed = view.reversed, "starting browse session");

        let mut session = Self {
            records,
            prefs,
            surface,
            state: ControllerState::new(view, debounce_window),
        };
        session.apply_mode();
        session.refresh();
        session
    }

    /// Start a session using keys and debounce window from configuration
    pub fn from_config(
        records: Arc<[BookRecord]>,
        store: S,
        surface: D,
        config: &BookshelfConfig,
    ) -> Self {
        let prefs = PreferenceStore::with_keys(store, PreferenceKeys::from(config));
        Self::start(records, prefs, surface, config.debounce())
    }

    /// Dispatch one event
    ///
    /// Returns true if the event caused a render.
    pub fn handle(&mut self, event: UiEvent, now: Instant) -> bool {
        match event {
            UiEvent::Input(text) => {
                self.on_input(text, now);
                false
            }
            UiEvent::SelectMode(mode) => {
                self.select_mode(mode);
                true
            }
            UiEvent::ToggleOrder => {
                self.toggle_order();
                true
            }
            UiEvent::Tick => self.on_tick(now),
        }
    }

    /// Record new search text and (re)arm the debounce
    pub fn on_input(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.state.query.clone_from(&text);
        if self.state.debounce.arm(text, now) {
            tracing::trace!("replaced pending search");
        }
    }

    /// Run the pending search if its quiet period has elapsed
    ///
    /// Returns true if a render happened.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        match self.state.debounce.fire_due(now) {
            Some(query) => {
                self.refresh_with(&query);
                true
            }
            None => false,
        }
    }

    /// Switch display mode, persist it and re-render immediately
    pub fn select_mode(&mut self, mode: ViewMode) {
        self.state.view.mode = mode;
        self.prefs.save(self.state.view);
        self.apply_mode();
        self.refresh();
    }

    /// Flip the ordering, persist it and re-render immediately
    pub fn toggle_order(&mut self) {
        self.state.view.reversed = !self.state.view.reversed;
        self.prefs.save(self.state.view);
        self.refresh();
    }

    /// Re-render with the current query and view state
    pub fn refresh(&mut self) -> RenderedView {
        let visible = filter(&self.records, &self.state.query, self.state.view.reversed);
        render::present(&visible, self.state.view.mode, &mut self.surface)
    }

    fn refresh_with(&mut self, query: &str) -> RenderedView {
        let visible = filter(&self.records, query, self.state.view.reversed);
        render::present(&visible, self.state.view.mode, &mut self.surface)
    }

    fn apply_mode(&mut self) {
        let mode = self.state.view.mode;
        self.surface.set_layout(mode.layout_class());
        self.surface.set_active_mode(mode);
    }

    /// Visible set for the current query and view state
    #[must_use]
    pub fn visible(&self) -> Vec<&BookRecord> {
        filter(&self.records, &self.state.query, self.state.view.reversed)
    }

    /// Time left before a pending search fires, for scheduling the next tick
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.state.debounce.time_until_due(now)
    }

    /// Current controller state
    #[must_use]
    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Current view state
    #[must_use]
    pub const fn view(&self) -> ViewState {
        self.state.view
    }

    /// Catalog this session filters
    #[must_use]
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// Display surface
    #[must_use]
    pub const fn surface(&self) -> &D {
        &self.surface
    }

    /// Preference store
    #[must_use]
    pub const fn preferences(&self) -> &PreferenceStore<S> {
        &self.prefs
    }

    /// End the session, returning the backend and the surface
    pub fn into_parts(self) -> (S, D) {
        (self.prefs.into_inner(), self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::testing::{dune, hamlet, sample_catalog};
    use crate::ui::mock::RecordingSurface;

    const WINDOW: Duration = Duration::from_millis(150);

    fn session_with(
        records: Vec<BookRecord>,
        store: MemoryStore,
    ) -> BrowseSession<MemoryStore, RecordingSurface> {
        BrowseSession::start(
            records.into(),
            PreferenceStore::new(store),
            RecordingSurface::new(),
            WINDOW,
        )
    }

    fn shown_titles(session: &BrowseSession<MemoryStore, RecordingSurface>) -> Vec<String> {
        let markup = &session.surface().markup;
        let mut found: Vec<(usize, String)> = session
            .records()
            .iter()
            .filter_map(|b| {
                markup
                    .find(&format!(r#"<div class="title">{}</div>"#, b.title))
                    .map(|at| (at, b.title.clone()))
            })
            .collect();
        found.sort();
        found.into_iter().map(|(_, title)| title).collect()
    }

    #[test]
    fn test_start_renders_everything_with_defaults() {
        let session = session_with(sample_catalog(), MemoryStore::new());
        let surface = session.surface();

        assert_eq!(session.view(), ViewState::default());
        assert_eq!(surface.renders, 1);
        assert_eq!(surface.count_text, "5");
        assert_eq!(surface.layout_class, "books-grid");
        assert_eq!(surface.active_modes, vec![ViewMode::Card]);
        assert!(!surface.empty_state_visible);
    }

    #[test]
    fn test_start_restores_saved_state() {
        let store = MemoryStore::with_entries([
            ("bookshelf-view", "list"),
            ("bookshelf-reversed", "true"),
        ]);
        let session = session_with(vec![dune(), hamlet()], store);

        assert_eq!(session.view(), ViewState::new(ViewMode::List, true));
        assert_eq!(session.surface().layout_class, "books-list");
        assert_eq!(session.surface().active_modes, vec![ViewMode::List]);
        assert_eq!(shown_titles(&session), ["Hamlet", "Dune"]);
    }

    #[test]
    fn test_input_is_not_rendered_synchronously() {
        let mut session = session_with(sample_catalog(), MemoryStore::new());
        let now = Instant::now();

        assert!(!session.handle(UiEvent::Input("dune".into()), now));
        assert_eq!(session.surface().renders, 1);
        assert_eq!(session.surface().count_text, "5");
        assert_eq!(session.state().query, "dune");
    }

    #[test]
    fn test_burst_of_input_renders_once_with_last_text() {
        let mut session = session_with(sample_catalog(), MemoryStore::new());
        let start = Instant::now();

        for (i, text) in ["h", "ha", "ham"].into_iter().enumerate() {
            let at = start + Duration::from_millis(50 * i as u64);
            session.handle(UiEvent::Input(text.into()), at);
            assert!(!session.handle(UiEvent::Tick, at));
        }

        let last_input = start + Duration::from_millis(100);
        assert!(!session.handle(UiEvent::Tick, last_input + Duration::from_millis(149)));
        assert!(session.handle(UiEvent::Tick, last_input + WINDOW));
        assert!(!session.handle(UiEvent::Tick, last_input + WINDOW * 3));

        assert_eq!(session.surface().renders, 2);
        assert_eq!(session.surface().count_text, "1");
        assert_eq!(shown_titles(&session), ["Hamlet"]);
    }

    #[test]
    fn test_debounced_search_reads_view_state_at_firing() {
        let mut session = session_with(sample_catalog(), MemoryStore::new());
        let start = Instant::now();

        session.on_input("scifi", start);
        session.toggle_order();
        session.select_mode(ViewMode::Compact);
        assert!(session.on_tick(start + WINDOW));

        assert_eq!(shown_titles(&session), ["Neuromancer", "Dune"]);
        assert!(session.surface().markup.contains(">View</a>"));
    }

    #[test]
    fn test_select_mode_persists_and_renders_immediately() {
        let store = MemoryStore::new();
        let mut session = BrowseSession::start(
            vec![dune(), hamlet()].into(),
            PreferenceStore::new(&store),
            RecordingSurface::new(),
            WINDOW,
        );

        let card_markup = session.surface().markup.clone();
        session.select_mode(ViewMode::Compact);

        assert_eq!(store.peek("bookshelf-view"), Some("compact".to_string()));
        assert_eq!(session.surface().renders, 2);
        assert_eq!(session.surface().layout_class, "books-compact");
        assert_eq!(session.surface().active_modes, vec![ViewMode::Compact]);
        assert_ne!(session.surface().markup, card_markup);
        assert_eq!(session.surface().count_text, "2");
    }

    #[test]
    fn test_mode_change_uses_latest_text_without_waiting() {
        let mut session = session_with(sample_catalog(), MemoryStore::new());
        let now = Instant::now();

        session.on_input("herbert", now);
        session.select_mode(ViewMode::List);

        assert_eq!(session.surface().count_text, "1");
        assert_eq!(shown_titles(&session), ["Dune"]);
    }

    #[test]
    fn test_toggle_order_persists_and_reverses() {
        let store = MemoryStore::new();
        let mut session = BrowseSession::start(
            vec![dune(), hamlet()].into(),
            PreferenceStore::new(&store),
            RecordingSurface::new(),
            WINDOW,
        );

        assert!(session.handle(UiEvent::ToggleOrder, Instant::now()));
        assert_eq!(store.peek("bookshelf-reversed"), Some("true".to_string()));
        assert_eq!(session.visible()[0].title, "Hamlet");

        session.toggle_order();
        assert_eq!(store.peek("bookshelf-reversed"), Some("false".to_string()));
        assert_eq!(session.visible()[0].title, "Dune");
    }

    #[test]
    fn test_no_match_shows_empty_state() {
        let mut session = session_with(sample_catalog(), MemoryStore::new());
        let now = Instant::now();

        session.on_input("no such book", now);
        session.on_tick(now + WINDOW);

        let surface = session.surface();
        assert!(surface.markup.is_empty());
        assert_eq!(surface.count_text, "0");
        assert!(surface.empty_state_visible);
    }

    #[test]
    fn test_unavailable_storage_keeps_session_state() {
        let mut session = session_with(sample_catalog(), MemoryStore::unavailable());

        session.select_mode(ViewMode::List);
        session.toggle_order();

        assert_eq!(session.view(), ViewState::new(ViewMode::List, true));
        assert_eq!(session.surface().layout_class, "books-list");
        assert!(session.preferences().backend().is_empty());
    }

    #[test]
    fn test_time_until_due() {
        let mut session = session_with(sample_catalog(), MemoryStore::new());
        let now = Instant::now();
        assert_eq!(session.time_until_due(now), None);

        session.on_input("d", now);
        assert_eq!(session.time_until_due(now), Some(WINDOW));
    }

    #[test]
    fn test_from_config() {
        let config = BookshelfConfig {
            debounce_ms: 10,
            view_key: "v".to_string(),
            reversed_key: "r".to_string(),
            store_path: None,
        };
        let store = MemoryStore::with_entries([("v", "compact")]);
        let session = BrowseSession::from_config(
            sample_catalog().into(),
            store,
            RecordingSurface::new(),
            &config,
        );

        assert_eq!(session.view().mode, ViewMode::Compact);
        assert_eq!(session.state().debounce.window(), Duration::from_millis(10));
    }

    #[test]
    fn test_into_parts() {
        let mut session = session_with(vec![dune()], MemoryStore::new());
        session.select_mode(ViewMode::List);

        let (store, surface) = session.into_parts();
        assert_eq!(store.peek("bookshelf-view"), Some("list".to_string()));
        assert_eq!(surface.renders, 2);
    }
}
