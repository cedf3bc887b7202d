//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are pure functions following Elm architecture.

use crate::content::ContentStore;
use crate::model::{Chapter, SessionError, VerseEntry};
use crate::state::{ActiveFilter, BrowseSession, SearchState};
use tracing::{debug, info};

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Screen**: List ⇄ Detail (via `open_selected`/`open_at` and `close_detail`)
/// - **Filter**: None / Chapter / Search, replaced wholesale by `set_filter`
/// - **Search input**: Inactive ⇄ Typing (see `SearchState`)
///
/// The list renders `visible` positions; positions always index the full
/// store so the detail pager runs over the unfiltered sequence.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full corpus. Never filtered or reordered.
    store: ContentStore,

    /// Filter applied to the list screen.
    filter: ActiveFilter,

    /// Positions (into `store`) that pass `filter`, in store order.
    visible: Vec<usize>,

    /// Selected row in `visible`. Meaningless when `visible` is empty.
    selected: usize,

    /// Search field state.
    pub search: SearchState,

    /// Which screen is showing.
    pub screen: Screen,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Vertical scroll of the help overlay.
    pub help_scroll_offset: u16,

    /// Which optional fields the detail screen shows.
    pub display: DisplayOptions,
}

impl AppState {
    /// Create new AppState on the list screen with no filter.
    pub fn new(store: ContentStore) -> Self {
        let visible = (0..store.len()).collect();
        Self {
            store,
            filter: ActiveFilter::None,
            visible,
            selected: 0,
            search: SearchState::Inactive,
            screen: Screen::List,
            help_visible: false,
            help_scroll_offset: 0,
            display: DisplayOptions::default(),
        }
    }

    /// The full, unfiltered corpus.
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Filter applied to the list screen.
    pub fn filter(&self) -> &ActiveFilter {
        &self.filter
    }

    // ===== Filtering =====

    /// Replace the active filter and reset the selection to the first row.
    pub fn set_filter(&mut self, filter: ActiveFilter) {
        self.visible = filter.positions(self.store.entries());
        self.selected = 0;
        debug!(
            query = %filter.query(),
            shown = self.visible.len(),
            total = self.store.len(),
            "Filter applied"
        );
        self.filter = filter;
    }

    /// Show the full list again.
    pub fn clear_filter(&mut self) {
        self.set_filter(ActiveFilter::None);
    }

    /// Filter the list to `chapter`.
    pub fn select_chapter(&mut self, chapter: Chapter) {
        self.set_filter(ActiveFilter::Chapter(chapter));
    }

    /// Advance the chapter filter (1 when no chapter is selected).
    pub fn next_chapter(&mut self) {
        let chapter = self
            .filter
            .chapter()
            .map(Chapter::next)
            .unwrap_or_else(Chapter::first);
        self.select_chapter(chapter);
    }

    /// Step the chapter filter back (18 when no chapter is selected).
    pub fn prev_chapter(&mut self) {
        let chapter = self
            .filter
            .chapter()
            .map(Chapter::prev)
            .unwrap_or_else(Chapter::last);
        self.select_chapter(chapter);
    }

    /// Re-filter from the query currently being typed.
    pub fn apply_search_input(&mut self) {
        if let Some(query) = self.search.query() {
            let filter = ActiveFilter::search(query);
            if filter != self.filter {
                self.set_filter(filter);
            }
        }
    }

    // ===== Visible list =====

    /// Full-list positions shown on the list screen.
    pub fn visible_positions(&self) -> &[usize] {
        &self.visible
    }

    /// Visible entries with their full-list positions.
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &VerseEntry)> + '_ {
        self.visible
            .iter()
            .filter_map(move |&p| self.store.get(p).map(|e| (p, e)))
    }

    /// Selected row, or `None` when nothing is visible.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.visible.is_empty()).then_some(self.selected)
    }

    /// Full-list position of the selected row.
    pub fn selected_position(&self) -> Option<usize> {
        self.visible.get(self.selected).copied()
    }

    /// Move the selection down one row, stopping at the last.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    /// Move the selection up one row, stopping at the first.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the first visible row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Select the last visible row.
    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }

    /// Move the selection by `delta` rows, clamped to the visible list.
    pub fn select_by(&mut self, delta: isize) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    // ===== Detail screen =====

    /// Open the detail screen on the selected row.
    ///
    /// With nothing visible this is a no-op, except over an empty store
    /// where it reports [`SessionError::InvalidState`].
    pub fn open_selected(&mut self) -> Result<(), SessionError> {
        match self.selected_position() {
            Some(position) => self.open_at(position),
            None if self.store.is_empty() => Err(SessionError::InvalidState),
            None => {
                debug!("Open requested with no visible entries");
                Ok(())
            }
        }
    }

    /// Open the detail screen on `position` in the full list.
    ///
    /// `position` must come from this state's store.
    pub fn open_at(&mut self, position: usize) -> Result<(), SessionError> {
        let session = BrowseSession::open(self.store.shared(), position)?;
        info!(position, total = session.len(), "Opened detail view");
        self.screen = Screen::Detail(DetailView::new(session));
        Ok(())
    }

    /// Return to the list. The list selection follows the last entry shown
    /// if that entry is visible under the current filter.
    pub fn close_detail(&mut self) {
        if let Screen::Detail(detail) = &self.screen {
            let position = detail.session.position();
            debug!(position, "Closed detail view");
            if let Some(row) = self.visible.iter().position(|&p| p == position) {
                self.selected = row;
            }
        }
        self.screen = Screen::List;
    }

    /// Detail screen state, if it is showing.
    pub fn detail(&self) -> Option<&DetailView> {
        match &self.screen {
            Screen::Detail(detail) => Some(detail),
            Screen::List => None,
        }
    }

    /// Mutable detail screen state, if it is showing.
    pub fn detail_mut(&mut self) -> Option<&mut DetailView> {
        match &mut self.screen {
            Screen::Detail(detail) => Some(detail),
            Screen::List => None,
        }
    }

    /// Whether the detail screen is showing.
    pub fn is_detail(&self) -> bool {
        matches!(self.screen, Screen::Detail(_))
    }
}

// ===== Screen =====

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// Filterable list of entries.
    #[default]
    List,
    /// Pager over the full list. Owns its session.
    Detail(DetailView),
}

/// Detail screen state: the browse session plus body scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Pager over the full list.
    pub session: BrowseSession,
    /// Lines scrolled past in the body. Reset on every page change.
    pub scroll: u16,
}

impl DetailView {
    /// Detail view at the top of `session`'s current entry.
    pub fn new(session: BrowseSession) -> Self {
        Self { session, scroll: 0 }
    }
}

// ===== DisplayOptions =====

/// Optional fields on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Show the romanized reading.
    pub show_romanization: bool,
    /// Show commentary when it is not blank.
    pub show_commentary: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_romanization: true,
            show_commentary: true,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
