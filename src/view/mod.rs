//! TUI rendering and terminal management (impure shell)

mod chapter_bar;
pub mod constants;
mod detail;
mod help;
mod layout;
mod list;
mod search_input;
mod status_bar;
mod styles;

pub use detail::{reading_width, wrap_text};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Palette};

use crate::config::keybindings::KeyBindings;
use crate::content::ContentStore;
use crate::model::{AppError, KeyAction};
use crate::state::{
    handle_detail_action, handle_list_action, search_input_handler, ActiveFilter, AppState,
    DisplayOptions,
};
use constants::FALLBACK_SIZE;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    palette: Palette,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, palette: Palette) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            palette,
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main event loop
    ///
    /// Returns when user quits (q on the list screen, or Ctrl+C).
    /// Blocks on input; redraws after every key or resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                // Ignore key release/repeat reports on platforms that send them
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.clamp_scroll_offsets();
                    self.draw()?;
                }
                _ => {}
            }
        }
    }

    /// Handle a keyboard event. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Special case: Escape closes help overlay if visible (before key binding dispatch)
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        // Character input while typing a search (before key binding dispatch)
        if self.app_state.search.is_typing() && self.handle_search_key(key) {
            return false;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false,
        };

        // Help overlay captures everything but its own toggle, scrolling and quit
        if self.app_state.help_visible {
            self.handle_help_action(action);
            return false;
        }

        if action == KeyAction::Help {
            self.app_state.help_visible = true;
            self.app_state.help_scroll_offset = 0;
            return false;
        }

        if self.app_state.is_detail() {
            let max_scroll = self.detail_max_scroll();
            handle_detail_action(&mut self.app_state, action, max_scroll);
            false
        } else if action == KeyAction::Quit {
            info!("Quit requested");
            true
        } else {
            let page_height = layout::list_page_height(self.screen_area(), &self.app_state);
            handle_list_action(&mut self.app_state, action, page_height);
            false
        }
    }

    /// Edit the query being typed. Returns false for keys that should fall
    /// through to the regular bindings.
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        let search = std::mem::take(&mut self.app_state.search);
        let (search, edited) = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                (search_input_handler::handle_char_input(search, ch), true)
            }
            KeyCode::Backspace => (search_input_handler::handle_backspace(search), true),
            KeyCode::Left => (search_input_handler::handle_cursor_left(search), false),
            KeyCode::Right => (search_input_handler::handle_cursor_right(search), false),
            KeyCode::Enter => {
                debug!(query = %self.app_state.filter().query(), "Search kept");
                self.app_state.search = search_input_handler::finish_search_input(search);
                return true;
            }
            KeyCode::Esc => {
                self.app_state.search = search_input_handler::finish_search_input(search);
                self.app_state.clear_filter();
                return true;
            }
            KeyCode::Up | KeyCode::Down => {
                // Leave typing and let the list move
                self.app_state.search = search_input_handler::finish_search_input(search);
                return false;
            }
            _ => {
                self.app_state.search = search;
                return false;
            }
        };

        self.app_state.search = search;
        if edited {
            self.app_state.apply_search_input();
        }
        true
    }

    fn handle_help_action(&mut self, action: KeyAction) {
        let max = help::max_scroll(self.screen_area());
        let offset = &mut self.app_state.help_scroll_offset;
        match action {
            KeyAction::Help | KeyAction::Back | KeyAction::Quit => {
                self.app_state.help_visible = false;
            }
            KeyAction::MoveDown => *offset = offset.saturating_add(1).min(max),
            KeyAction::MoveUp => *offset = offset.saturating_sub(1),
            KeyAction::MoveToTop => *offset = 0,
            KeyAction::MoveToBottom => *offset = max,
            _ => {}
        }
    }

    /// Terminal area, falling back to 80x24 if the backend can't say.
    fn screen_area(&self) -> Rect {
        let (width, height) = match self.terminal.size() {
            Ok(size) if size.width > 0 && size.height > 0 => (size.width, size.height),
            _ => FALLBACK_SIZE,
        };
        Rect::new(0, 0, width, height)
    }

    fn detail_max_scroll(&self) -> u16 {
        let body = layout::detail_areas(self.screen_area()).body;
        self.app_state
            .detail()
            .map(|view| detail::max_scroll(view, self.app_state.display, body))
            .unwrap_or(0)
    }

    /// Keep the detail body and help overlay scroll valid after the
    /// terminal changes size.
    fn clamp_scroll_offsets(&mut self) {
        let max_scroll = self.detail_max_scroll();
        if let Some(view) = self.app_state.detail_mut() {
            view.scroll = view.scroll.min(max_scroll);
        }
        let help_max = help::max_scroll(self.screen_area());
        self.app_state.help_scroll_offset = self.app_state.help_scroll_offset.min(help_max);
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let palette = &self.palette;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, palette);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            palette: Palette::default(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a single frame to the backend.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// ===== Startup =====

/// How the TUI should look when it first appears.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Filter applied before the first frame.
    pub initial_filter: ActiveFilter,
    /// Full-list position to open in the detail view immediately.
    pub open_position: Option<usize>,
    /// Optional fields on the detail screen.
    pub display: DisplayOptions,
    /// Disable colors regardless of `NO_COLOR`.
    pub no_color: bool,
}

/// Build the initial state from startup options.
///
/// `open_position` must be a valid position in `store`.
pub fn initial_state(store: ContentStore, options: &StartupOptions) -> Result<AppState, AppError> {
    let mut state = AppState::new(store);
    state.display = options.display;
    if options.initial_filter.is_active() {
        state.set_filter(options.initial_filter.clone());
    }
    if let Some(position) = options.open_position {
        state.open_at(position)?;
    }
    Ok(state)
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the
/// terminal on exit even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_options(store: ContentStore, options: StartupOptions) -> Result<(), TuiError> {
    let state = initial_state(store, &options)?;
    let palette = Palette::with_color_config(ColorConfig::from_env_and_args(options.no_color));
    let mut app = TuiApp::new(state, palette)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
