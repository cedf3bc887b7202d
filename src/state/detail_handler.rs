//! Detail screen action handler (pure).
//!
//! Maps the pager, text size and back actions 1:1 onto the open
//! BrowseSession. No-op when the list screen is showing.

use crate::model::KeyAction;
use crate::state::AppState;

/// Apply `action` to the detail screen.
///
/// `max_scroll` bounds body scrolling; the view computes it from the
/// wrapped body height. Quit on this screen closes the detail view.
pub fn handle_detail_action(state: &mut AppState, action: KeyAction, max_scroll: u16) {
    if matches!(action, KeyAction::Back | KeyAction::Quit) {
        state.close_detail();
        return;
    }

    let Some(detail) = state.detail_mut() else {
        return;
    };

    match action {
        KeyAction::PrevEntry => {
            if detail.session.has_prev() {
                detail.session.prev();
                detail.scroll = 0;
            }
        }
        KeyAction::NextEntry => {
            if detail.session.has_next() {
                detail.session.next();
                detail.scroll = 0;
            }
        }
        KeyAction::IncreaseFontSize => detail.session.increase_font_size(),
        KeyAction::DecreaseFontSize => detail.session.decrease_font_size(),
        KeyAction::MoveUp => detail.scroll = detail.scroll.saturating_sub(1),
        KeyAction::MoveDown => detail.scroll = detail.scroll.saturating_add(1).min(max_scroll),
        KeyAction::MoveToTop => detail.scroll = 0,
        KeyAction::MoveToBottom => detail.scroll = max_scroll,
        _ => {}
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "detail_handler_tests.rs"]
mod tests;
