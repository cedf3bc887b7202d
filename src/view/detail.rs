//! Detail screen: one entry at a time with a pager header.
//!
//! The session's text size maps to the width of the reading column. Body
//! text is wrapped here rather than by `Paragraph`, so the wrapped height
//! used for scroll bounds is exactly what gets drawn.

use crate::model::VerseEntry;
use crate::state::{BrowseSession, DetailView, DisplayOptions, FontSize};
use crate::view::constants::MIN_READING_WIDTH;
use crate::view::Palette;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// ===== Geometry =====

/// Width of the reading column for `font_size` within `area_width`.
///
/// `area_width * 16 / font_size`, never wider than the area and never
/// narrower than [`MIN_READING_WIDTH`] (or the area, if that is smaller).
pub fn reading_width(area_width: u16, font_size: FontSize) -> u16 {
    let size = u32::from(font_size.get().max(1));
    let base = u32::from(FontSize::DEFAULT.get());
    let scaled = (u32::from(area_width) * base / size).min(u32::from(area_width));
    let floor = MIN_READING_WIDTH.min(area_width);
    u16::try_from(scaled).unwrap_or(area_width).max(floor)
}

/// Greedy word wrap by display width.
///
/// Words wider than `width` are broken between characters. Always returns
/// at least one line.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let gap = usize::from(!current.is_empty());

        if current_width + gap + word_width <= width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += gap + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrapped, styled body lines for `entry` in a column `width` wide.
///
/// Sections: Korean, Japanese, romanization (optional), commentary
/// (optional, skipped when blank), separated by blank lines.
pub fn body_lines(
    entry: &VerseEntry,
    display: DisplayOptions,
    width: u16,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut sections: Vec<(&str, Style)> = vec![
        (entry.korean(), palette.korean),
        (entry.japanese(), palette.japanese),
    ];
    if display.show_romanization && !entry.english().trim().is_empty() {
        sections.push((entry.english(), palette.romanization));
    }
    if display.show_commentary && entry.has_commentary() {
        sections.push((entry.commentary(), palette.commentary));
    }

    let mut lines = Vec::new();
    for (i, (text, style)) in sections.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(
            wrap_text(text, width)
                .into_iter()
                .map(|line| Line::styled(line, style)),
        );
    }
    lines
}

/// Largest useful scroll offset for the body in `body_area`.
pub fn max_scroll(view: &DetailView, display: DisplayOptions, body_area: Rect) -> u16 {
    let width = reading_width(body_area.width, view.session.font_size());
    let height = body_lines(view.session.current(), display, width, &Palette::default()).len();
    u16::try_from(height)
        .unwrap_or(u16::MAX)
        .saturating_sub(body_area.height)
}

// ===== Rendering =====

/// Header text: 1-based position over the total, with arrows marking
/// which directions can still be paged.
pub fn header_text(session: &BrowseSession) -> String {
    let prev = if session.has_prev() { "<" } else { " " };
    let next = if session.has_next() { ">" } else { " " };
    format!(
        "{} {} / {} {}",
        prev,
        session.position() + 1,
        session.len(),
        next
    )
}

/// Render the pager header, centered.
pub fn render_header(frame: &mut Frame, area: Rect, session: &BrowseSession, palette: &Palette) {
    let header = Paragraph::new(Line::from(header_text(session)))
        .style(palette.title)
        .centered();
    frame.render_widget(header, area);
}

/// Render the current entry in a centered column sized by the text size.
pub fn render_body(
    frame: &mut Frame,
    area: Rect,
    view: &DetailView,
    display: DisplayOptions,
    palette: &Palette,
) {
    let width = reading_width(area.width, view.session.font_size());
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);

    let lines = body_lines(view.session.current(), display, width, palette);
    let body = Paragraph::new(lines).scroll((view.scroll, 0));
    frame.render_widget(body, column);
}

// ===== Tests =====

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
