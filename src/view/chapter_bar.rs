//! Chapter selector bar.
//!
//! One tab per chapter using ratatui's Tabs widget. The active chapter
//! filter, if any, is highlighted.

use crate::model::Chapter;
use crate::view::Palette;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the chapter bar.
///
/// # Behavior
/// - Shows tabs `1` through `18` in order
/// - Highlights `active` if a chapter filter is applied
/// - Without an active chapter no tab is highlighted
pub fn render_chapter_bar(frame: &mut Frame, area: Rect, active: Option<Chapter>, palette: &Palette) {
    let titles: Vec<Line> = Chapter::all()
        .map(|chapter| Line::from(chapter.to_string()))
        .collect();

    let mut tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border)
                .title("Chapters"),
        )
        .style(palette.muted)
        .padding("", "")
        .divider(" ");

    // Tabs always highlights some index, so mute it with no chapter active.
    if let Some(chapter) = active {
        tabs = tabs
            .highlight_style(palette.highlight)
            .select(usize::from(chapter.get() - 1));
    } else {
        tabs = tabs.highlight_style(palette.muted);
    }

    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(active: Option<Chapter>, palette: &Palette) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|frame| render_chapter_bar(frame, frame.area(), active, palette))
            .unwrap();
        terminal
    }

    /// Column of `label` in the middle row, skipping the left border.
    fn column_of(terminal: &Terminal<TestBackend>, label: &str) -> u16 {
        let text = crate::test_harness::buffer_to_string(terminal.backend().buffer());
        let row = text.lines().nth(1).unwrap();
        let needle = format!(" {} ", label);
        let byte = row.find(&needle).unwrap();
        row[..byte].chars().count() as u16 + 1
    }

    #[test]
    fn shows_all_chapters_in_order() {
        let terminal = render(None, &Palette::default());
        let text = crate::test_harness::buffer_to_string(terminal.backend().buffer());
        let row = text.lines().nth(1).unwrap();

        let first = row.find("1 2 3").expect("chapters 1-3 in order");
        let last = row.find("17 18").expect("chapters 17-18 in order");
        assert!(first < last);
    }

    #[test]
    fn block_has_title() {
        let terminal = render(None, &Palette::default());
        let text = crate::test_harness::buffer_to_string(terminal.backend().buffer());
        assert!(text.lines().next().unwrap().contains("Chapters"));
    }

    #[test]
    fn active_chapter_is_highlighted() {
        let palette = Palette::with_color_config(ColorConfig::enabled());
        let chapter = Chapter::new(12).unwrap();
        let terminal = render(Some(chapter), &palette);
        let x = column_of(&terminal, "12");

        let cell = &terminal.backend().buffer()[(x, 1)];
        assert_eq!(cell.symbol(), "1");
        assert_eq!(terminal.backend().buffer()[(x + 1, 1)].symbol(), "2");
        assert_eq!(cell.fg, palette.highlight.fg.unwrap());
    }

    #[test]
    fn no_highlight_without_active_chapter() {
        let palette = Palette::with_color_config(ColorConfig::enabled());
        let terminal = render(None, &palette);
        let x = column_of(&terminal, "2");

        let cell = &terminal.backend().buffer()[(x, 1)];
        assert_ne!(cell.fg, palette.highlight.fg.unwrap());
    }
}
