//! Color configuration and the style palette shared by all widgets.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for every text role on screen.
///
/// With colors disabled only modifiers (bold, italic, reversed) remain, so
/// selection and emphasis stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Title bar and headers.
    pub title: Style,
    /// Korean text.
    pub korean: Style,
    /// Japanese text.
    pub japanese: Style,
    /// Romanized reading.
    pub romanization: Style,
    /// Commentary.
    pub commentary: Style,
    /// Selected list row.
    pub selection: Style,
    /// Active chapter and search border.
    pub highlight: Style,
    /// Hints and secondary text.
    pub muted: Style,
    /// Block borders.
    pub border: Style,
    /// Key names in the help overlay.
    pub key: Style,
}

impl Palette {
    /// Build the palette for a color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                korean: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                japanese: Style::default().fg(Color::LightYellow),
                romanization: Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
                commentary: Style::default().fg(Color::Green),
                selection: Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                highlight: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                border: Style::default().fg(Color::Cyan),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                korean: Style::default().add_modifier(Modifier::BOLD),
                japanese: Style::default(),
                romanization: Style::default().add_modifier(Modifier::ITALIC),
                commentary: Style::default(),
                selection: Style::default().add_modifier(Modifier::REVERSED),
                highlight: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default().add_modifier(Modifier::DIM),
                border: Style::default(),
                key: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::enabled())
    }
}

// ===== Tests =====
