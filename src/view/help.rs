//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by screen.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use crate::view::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: heading, then (keys, description) rows.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "List",
        &[
            ("j/↓  k/↑", "Move selection"),
            ("g/Home  G/End", "First / last entry"),
            ("Ctrl+d/PgDn  Ctrl+u/PgUp", "Page down / up"),
            ("Enter", "Open selected entry"),
        ],
    ),
    (
        "Filter",
        &[
            ("/  Ctrl+f", "Search Korean text"),
            ("]  [", "Next / previous chapter"),
            ("1-9", "Jump to chapter"),
            ("x  Esc", "Clear filter"),
            ("Enter (typing)", "Keep search"),
            ("Esc (typing)", "Cancel search"),
        ],
    ),
    (
        "Detail",
        &[
            ("h/←  l/→", "Previous / next entry"),
            ("+  =", "Larger text"),
            ("-", "Smaller text"),
            ("j/↓  k/↑", "Scroll"),
            ("Esc  q", "Back to list"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q  Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
///
/// The scroll_offset parameter controls which line is shown at the top.
pub fn render_help_overlay(frame: &mut Frame, scroll_offset: u16, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        palette.muted,
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Largest useful scroll offset for the overlay on a screen of `area`.
///
/// Counts wrapped rows inside the popup's borders, so scrolling stops once
/// the last shortcut reaches the bottom row.
pub fn max_scroll(area: Rect) -> u16 {
    let popup = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);
    let inner_width = usize::from(popup.width.saturating_sub(2).max(1));
    let inner_height = popup.height.saturating_sub(2);
    let rows: usize = build_help_content(&Palette::default())
        .iter()
        .map(|line| line.width().div_ceil(inner_width).max(1))
        .sum();
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner_height)
}

/// Build the help content lines grouped by section.
fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let heading_style = palette.title.add_modifier(Modifier::UNDERLINED);
    let desc_style = Style::default();
    let key_width = SECTIONS
        .iter()
        .flat_map(|(_, rows)| rows.iter())
        .map(|(keys, _)| keys.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (i, (heading, rows)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*heading, heading_style)));
        for (keys, desc) in rows.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<width$}  ", keys, width = key_width), palette.key),
                Span::styled(*desc, desc_style),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
