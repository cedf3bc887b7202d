//! Search input widget for rendering the search bar.

use crate::state::{ActiveFilter, SearchState};
use crate::view::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
/// Renders the editable query while typing, or the applied search
/// read-only once typing has finished.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    filter: &'a ActiveFilter,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState, filter: &'a ActiveFilter, palette: &'a Palette) -> Self {
        Self {
            search_state,
            filter,
            palette,
        }
    }
}

/// Split `query` around the character at `cursor`.
///
/// Returns (before, under cursor, after). Past the end the cursor sits on
/// a blank cell.
fn split_at_cursor(query: &str, cursor: usize) -> (String, String, String) {
    let before: String = query.chars().take(cursor).collect();
    let mut rest = query.chars().skip(cursor);
    let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = rest.collect();
    (before, under, after)
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match (self.search_state, self.filter) {
            (SearchState::Typing { query, cursor }, _) => {
                let (before, under, after) = split_at_cursor(query, *cursor);

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(
                        under,
                        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
                    ),
                    Span::raw(after),
                ]);
                let paragraph = Paragraph::new(line).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.palette.highlight)
                        .title("Search"),
                );

                paragraph.render(area, buf);
            }
            (SearchState::Inactive, ActiveFilter::Search(query)) => {
                let paragraph = Paragraph::new(Line::from(query.as_str())).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.palette.border)
                        .title("Search (active, / to edit, Esc to clear)"),
                );

                paragraph.render(area, buf);
            }
            (SearchState::Inactive, _) => {
                // No search input to show
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &SearchState, filter: &ActiveFilter) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(50, 3)).unwrap();
        let palette = Palette::default();
        terminal
            .draw(|frame| {
                frame.render_widget(SearchInput::new(state, filter, &palette), frame.area());
            })
            .unwrap();
        terminal
    }

    fn text(terminal: &Terminal<TestBackend>) -> String {
        crate::test_harness::buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn split_at_cursor_in_middle() {
        assert_eq!(
            split_at_cursor("마음물", 1),
            ("마".to_string(), "음".to_string(), "물".to_string())
        );
    }

    #[test]
    fn split_at_cursor_past_end_is_blank() {
        assert_eq!(
            split_at_cursor("마음", 2),
            ("마음".to_string(), " ".to_string(), String::new())
        );
    }

    #[test]
    fn typing_state_shows_query_and_title() {
        let state = SearchState::Typing {
            query: "햇살".to_string(),
            cursor: 1,
        };
        let terminal = render(&state, &ActiveFilter::None);
        let text = text(&terminal);

        assert!(text.contains("Search"));
        assert!(text.contains("햇살"));
    }

    #[test]
    fn typing_cursor_cell_is_reversed() {
        let state = SearchState::Typing {
            query: "ab".to_string(),
            cursor: 1,
        };
        let terminal = render(&state, &ActiveFilter::None);
        let cell = &terminal.backend().buffer()[(2, 1)];

        assert_eq!(cell.symbol(), "b");
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn applied_search_renders_read_only() {
        let filter = ActiveFilter::search("물");
        let terminal = render(&SearchState::Inactive, &filter);
        let text = text(&terminal);

        assert!(text.contains("Search (active"));
        assert!(text.contains('물'));
    }

    #[test]
    fn inactive_without_search_renders_nothing() {
        let terminal = render(&SearchState::Inactive, &ActiveFilter::None);
        assert!(text(&terminal).trim().is_empty());
    }
}
