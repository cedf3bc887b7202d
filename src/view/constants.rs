//! Layout dimension constants for TUI rendering.

/// Height of the title bar in lines.
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Height of the chapter selector bar (border + content).
pub const CHAPTER_BAR_HEIGHT: u16 = 3;

/// Height of the search input widget in lines.
///
/// Shown while typing or while a search filter is active.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the detail header (position and pager arrows).
pub const DETAIL_HEADER_HEIGHT: u16 = 1;

/// Narrowest reading column the detail screen will shrink to.
pub const MIN_READING_WIDTH: u16 = 10;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Fallback terminal size when the backend cannot report one.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);
