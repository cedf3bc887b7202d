//! Search input state machine.
//!
//! SearchState is a sum type with two states:
//! - Inactive: search field not focused
//! - Typing: user is editing the query
//!
//! The query being typed is applied to the list live, so there is no
//! separate "submitted" state; once typing ends the query lives on in
//! [`ActiveFilter::Search`](crate::state::ActiveFilter::Search).

// ===== SearchState =====

/// Search input state.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Search field not focused.
    #[default]
    Inactive,
    /// User is typing. `cursor` counts characters, not bytes.
    Typing {
        /// Text typed so far.
        query: String,
        /// Character index of the insertion point.
        cursor: usize,
    },
}

impl SearchState {
    /// Start typing with `query` prefilled and the cursor at its end.
    pub fn typing(query: impl Into<String>) -> Self {
        let query = query.into();
        let cursor = query.chars().count();
        Self::Typing { query, cursor }
    }

    /// Whether the search field has focus.
    pub fn is_typing(&self) -> bool {
        matches!(self, Self::Typing { .. })
    }

    /// Query being typed, if any.
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Typing { query, .. } => Some(query),
            Self::Inactive => None,
        }
    }
}

/// Byte offset of the `cursor`-th character in `s`, or `s.len()` past the end.
pub(crate) fn byte_offset(s: &str, cursor: usize) -> usize {
    s.char_indices()
        .nth(cursor)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}
