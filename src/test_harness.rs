//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::content::ContentStore;
use crate::state::AppState;
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Captures the visual output character by character, preserving layout.
/// Cells hidden behind a double-width character (Hangul, kana) are skipped
/// so Korean and Japanese text reads back contiguously. Trailing spaces and
/// empty lines are removed.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut hidden = 0;
        for x in area.left()..area.right() {
            if hidden > 0 {
                hidden -= 1;
                continue;
            }
            let symbol = buffer[(x, y)].symbol();
            line.push_str(symbol);
            hidden = symbol.width().saturating_sub(1);
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Bundled corpus on an 80x24 terminal.
    pub fn new() -> Self {
        Self::with_store(ContentStore::load(), 80, 24)
    }

    /// Bundled corpus on a terminal of the given size.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self::with_store(ContentStore::load(), width, height)
    }

    /// Arbitrary store on a terminal of the given size.
    pub fn with_store(store: ContentStore, width: u16, height: u16) -> Self {
        Self::with_state(AppState::new(store), width, height)
    }

    /// Pre-built state (e.g. from startup options).
    pub fn with_state(state: AppState, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("TestBackend terminal: {e}"));
        Self {
            app: TuiApp::new_for_test(terminal, state),
            running: true,
        }
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys
    ///
    /// Continues sending keys until the sequence is exhausted or app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .unwrap_or_else(|e: TuiError| panic!("Rendering should succeed in test harness: {e}"));
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn buffer_to_string_reads_wide_chars_contiguously() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 2));
        buffer.set_string(0, 0, "마음 ab", Style::default());

        assert_eq!(buffer_to_string(&buffer), "마음 ab");
    }

    #[test]
    fn buffer_to_string_drops_blank_rows() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 5, 3));
        buffer.set_string(0, 2, "x", Style::default());

        assert_eq!(buffer_to_string(&buffer), "x");
    }

    #[test]
    fn harness_stops_after_quit() {
        let mut harness = AcceptanceTestHarness::new();
        assert!(harness.send_key(KeyCode::Char('q')));
        assert!(!harness.is_running());
        assert!(harness.send_key(KeyCode::Char('j')));
    }
}
