//! Screen layout.
//!
//! Pure area arithmetic plus the top-level `render_layout` that hands each
//! area to its widget. The event loop uses the same arithmetic to size
//! paging and scrolling, so key handling and drawing never disagree.

use crate::state::{ActiveFilter, AppState, Screen};
use crate::view::constants::{
    CHAPTER_BAR_HEIGHT, DETAIL_HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT,
    TITLE_BAR_HEIGHT,
};
use crate::view::{chapter_bar, detail, help, list, search_input::SearchInput, status_bar, Palette};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

// ===== Areas =====

/// Areas of the list screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListAreas {
    /// Title bar.
    pub title: Rect,
    /// Chapter selector.
    pub chapters: Rect,
    /// Present while typing or while a search filter is active.
    pub search: Option<Rect>,
    /// Entry list.
    pub list: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Areas of the detail screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailAreas {
    /// Position header.
    pub header: Rect,
    /// Entry body.
    pub body: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Whether the search field takes up a row band.
pub fn search_visible(state: &AppState) -> bool {
    state.search.is_typing() || matches!(state.filter(), ActiveFilter::Search(_))
}

/// Split `area` for the list screen.
pub fn list_areas(area: Rect, state: &AppState) -> ListAreas {
    let show_search = search_visible(state);
    let search_height = if show_search { SEARCH_INPUT_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_BAR_HEIGHT),
            Constraint::Length(CHAPTER_BAR_HEIGHT),
            Constraint::Length(search_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ListAreas {
        title: chunks[0],
        chapters: chunks[1],
        search: show_search.then_some(chunks[2]),
        list: chunks[3],
        status: chunks[4],
    }
}

/// Split `area` for the detail screen.
pub fn detail_areas(area: Rect) -> DetailAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DETAIL_HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    DetailAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Rows of the list visible at once, used for page up/down.
pub fn list_page_height(area: Rect, state: &AppState) -> usize {
    usize::from(list_areas(area, state).list.height)
}

// ===== Rendering =====

/// Render the current screen and, on top, the help overlay if visible.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let area = frame.area();

    match &state.screen {
        Screen::List => render_list_screen(frame, area, state, palette),
        Screen::Detail(view) => {
            let areas = detail_areas(area);
            detail::render_header(frame, areas.header, &view.session, palette);
            detail::render_body(frame, areas.body, view, state.display, palette);
            status_bar::render(frame, areas.status, &status_bar::detail_text(view), palette);
        }
    }

    if state.help_visible {
        help::render_help_overlay(frame, state.help_scroll_offset, palette);
    }
}

fn render_list_screen(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let areas = list_areas(area, state);

    let title = Paragraph::new(Line::from(title_text(state.store().len()))).style(palette.title);
    frame.render_widget(title, areas.title);

    chapter_bar::render_chapter_bar(frame, areas.chapters, state.filter().chapter(), palette);

    if let Some(search_area) = areas.search {
        frame.render_widget(
            SearchInput::new(&state.search, state.filter(), palette),
            search_area,
        );
    }

    list::render_list(frame, areas.list, state, palette);
    status_bar::render(frame, areas.status, &status_bar::list_text(state), palette);
}

/// Title bar text.
pub fn title_text(total: usize) -> String {
    format!("versebook | {} verses", total)
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
