//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// The same action may mean different things on the list and detail
/// screens; the dispatcher decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Vertical movement
    /// List: move selection up. Detail: scroll body up. Default: k/↑
    MoveUp,
    /// List: move selection down. Detail: scroll body down. Default: j/↓
    MoveDown,
    /// Move selection up by one page. Default: Page Up/Ctrl+u
    PageUp,
    /// Move selection down by one page. Default: Page Down/Ctrl+d
    PageDown,
    /// Jump to first visible entry. Default: g/Home
    MoveToTop,
    /// Jump to last visible entry. Default: G/End
    MoveToBottom,

    // List → detail
    /// Open the detail view on the selected entry. Default: Enter
    OpenSelected,

    // Filtering
    /// Activate search input. Default: /
    StartSearch,
    /// Advance chapter filter, wrapping 18 → 1. Default: ]
    NextChapter,
    /// Step chapter filter back, wrapping 1 → 18. Default: [
    PrevChapter,
    /// Filter to a specific chapter. Field: chapter number (1-9 from digit keys)
    SelectChapter(u8),
    /// Drop any active filter. Default: x
    ClearFilter,

    // Detail pager
    /// Show the previous entry. Default: h/←
    PrevEntry,
    /// Show the next entry. Default: l/→
    NextEntry,
    /// Increase text size by one step. Default: +/=
    IncreaseFontSize,
    /// Decrease text size by one step. Default: -
    DecreaseFontSize,

    // Application
    /// Detail: close back to list. List: clear filter. Default: Esc
    Back,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// List: exit the application. Detail: close back to list. Default: q
    Quit,
}
