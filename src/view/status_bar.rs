//! Status bar text for both screens.

use crate::state::{AppState, DetailView};
use crate::view::Palette;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// List screen status: active filter, shown/total counts, key hints.
pub fn list_text(state: &AppState) -> String {
    let shown = state.visible_positions().len();
    let total = state.store().len();
    let hints = if state.search.is_typing() {
        "Enter: keep | Esc: clear"
    } else {
        "Enter: open | /: search | ?: help | q: quit"
    };

    match state.filter().label() {
        Some(label) => format!("{} | {}/{} | {}", label, shown, total, hints),
        None => format!("All | {}/{} | {}", shown, total, hints),
    }
}

/// Detail screen status: text size and key hints.
pub fn detail_text(view: &DetailView) -> String {
    format!(
        "Text size {} | h/l: prev/next | +/-: size | Esc: back",
        view.session.font_size().get()
    )
}

/// Render `text` as the status bar.
pub fn render(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let paragraph = Paragraph::new(Line::from(text.to_string())).style(palette.muted);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::model::Chapter;
    use crate::state::{ActiveFilter, SearchState};

    fn state() -> AppState {
        AppState::new(ContentStore::load())
    }

    #[test]
    fn unfiltered_list_status() {
        insta::assert_snapshot!(
            list_text(&state()),
            @"All | 25/25 | Enter: open | /: search | ?: help | q: quit"
        );
    }

    #[test]
    fn chapter_filter_status() {
        let mut state = state();
        state.select_chapter(Chapter::new(2).unwrap());
        insta::assert_snapshot!(
            list_text(&state),
            @"Chapter 2 | 3/25 | Enter: open | /: search | ?: help | q: quit"
        );
    }

    #[test]
    fn search_filter_status_while_typing() {
        let mut state = state();
        state.search = SearchState::typing("zzz");
        state.apply_search_input();
        insta::assert_snapshot!(
            list_text(&state),
            @r#"Search "zzz" | 0/25 | Enter: keep | Esc: clear"#
        );
    }

    #[test]
    fn cleared_filter_restores_counts() {
        let mut state = state();
        state.set_filter(ActiveFilter::search("zzz"));
        state.clear_filter();
        assert!(list_text(&state).starts_with("All | 25/25"));
    }

    #[test]
    fn detail_status_reports_text_size() {
        let mut state = state();
        state.open_at(0).unwrap();
        let view = state.detail_mut().unwrap();
        view.session.increase_font_size();

        insta::assert_snapshot!(
            detail_text(view),
            @"Text size 18 | h/l: prev/next | +/-: size | Esc: back"
        );
    }
}
