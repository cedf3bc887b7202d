//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod browse;
pub mod detail_handler;
pub mod filter;
pub mod list_handler;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, DetailView, DisplayOptions, Screen};
pub use browse::{BrowseSession, FontSize};
pub use detail_handler::handle_detail_action;
pub use filter::{filter, matching_positions, ActiveFilter};
pub use list_handler::handle_list_action;
pub use search::SearchState;
