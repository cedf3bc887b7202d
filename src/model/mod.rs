//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod chapter;
pub mod error;
pub mod key_action;
pub mod verse;

// Re-export for convenience
pub use chapter::{Chapter, InvalidChapter, CHAPTER_COUNT};
pub use error::{AppError, SessionError};
pub use key_action::KeyAction;
pub use verse::VerseEntry;
