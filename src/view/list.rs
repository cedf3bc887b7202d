//! Verse list widget for the list screen.

use crate::state::AppState;
use crate::view::Palette;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

/// Shown in place of the list when the filter matches nothing.
pub const EMPTY_MESSAGE: &str = "No verses match the current filter";

/// Render the visible entries with the selected row highlighted.
///
/// Each row shows the entry's Korean text. Ratatui's `ListState` keeps the
/// selected row on screen, so long lists scroll with the selection.
pub fn render_list(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let Some(selected) = state.selected_index() else {
        let empty = Paragraph::new(Line::from(EMPTY_MESSAGE)).style(palette.muted);
        frame.render_widget(empty, area);
        return;
    };

    let items: Vec<ListItem> = state
        .visible_entries()
        .map(|(_, entry)| ListItem::new(Line::from(entry.korean())))
        .collect();

    let list = List::new(items)
        .highlight_style(palette.selection)
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
