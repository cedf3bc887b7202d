//! List screen action handler (pure).
//!
//! Maps domain KeyActions to AppState transitions while the list is
//! showing. Detail-only actions are ignored here.

use crate::model::{Chapter, KeyAction};
use crate::state::{search_input_handler, AppState};
use tracing::warn;

/// Apply `action` to the list screen.
///
/// `page_height` is the number of list rows on screen, used for paging.
/// Quit is handled by the caller.
pub fn handle_list_action(state: &mut AppState, action: KeyAction, page_height: usize) {
    let page = page_height.max(1) as isize;

    match action {
        KeyAction::MoveUp => state.select_prev(),
        KeyAction::MoveDown => state.select_next(),
        KeyAction::PageUp => state.select_by(-page),
        KeyAction::PageDown => state.select_by(page),
        KeyAction::MoveToTop => state.select_first(),
        KeyAction::MoveToBottom => state.select_last(),

        KeyAction::OpenSelected => {
            if let Err(err) = state.open_selected() {
                warn!(error = %err, "Could not open detail view");
            }
        }

        KeyAction::StartSearch => {
            let current = match state.filter() {
                crate::state::ActiveFilter::Search(query) => query.clone(),
                _ => String::new(),
            };
            state.search = search_input_handler::activate_search_input(
                std::mem::take(&mut state.search),
                &current,
            );
        }
        KeyAction::NextChapter => state.next_chapter(),
        KeyAction::PrevChapter => state.prev_chapter(),
        KeyAction::SelectChapter(n) => match Chapter::new(n) {
            Ok(chapter) => state.select_chapter(chapter),
            Err(err) => warn!(error = %err, "Ignoring chapter selection"),
        },
        KeyAction::ClearFilter | KeyAction::Back => state.clear_filter(),

        // Detail-only or handled by the caller
        KeyAction::PrevEntry
        | KeyAction::NextEntry
        | KeyAction::IncreaseFontSize
        | KeyAction::DecreaseFontSize
        | KeyAction::Help
        | KeyAction::Quit => {}
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "list_handler_tests.rs"]
mod tests;
