//! List filtering (pure).
//!
//! A filter is a plain, case-sensitive substring test against each entry's
//! Korean text. Chapter selection is the same test with the query `"n-"`,
//! so there is no anchoring and no numeric parsing: chapter 1 also matches
//! `"11-1"`, chapter 2 also matches `"12-1"`.

use crate::model::{Chapter, VerseEntry};

// ===== Filtering =====

/// Entries whose Korean text contains `query`, in their original order.
///
/// An empty query keeps every entry. Accepts any sequence of entry
/// references, so a filtered result can be filtered again.
pub fn filter<'a, I>(query: &str, entries: I) -> Vec<&'a VerseEntry>
where
    I: IntoIterator<Item = &'a VerseEntry>,
{
    entries.into_iter().filter(|e| e.matches(query)).collect()
}

/// Positions (into `entries`) of the entries [`filter`] would keep.
///
/// The list screen renders from these so that a selection can be mapped
/// back to its position in the full, unfiltered sequence.
pub fn matching_positions(query: &str, entries: &[VerseEntry]) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.matches(query))
        .map(|(position, _)| position)
        .collect()
}

// ===== ActiveFilter =====

/// The filter currently applied to the list screen.
///
/// Chapter buttons and the search field drive one shared filter; picking
/// one replaces the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    /// No filter: the full list is shown.
    #[default]
    None,
    /// Chapter selector, query `"n-"`.
    Chapter(Chapter),
    /// Free-text search. Never holds an empty string.
    Search(String),
}

impl ActiveFilter {
    /// Search filter for `query`, or [`ActiveFilter::None`] when empty.
    pub fn search(query: impl Into<String>) -> Self {
        let query = query.into();
        if query.is_empty() {
            Self::None
        } else {
            Self::Search(query)
        }
    }

    /// Substring this filter matches against.
    pub fn query(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Chapter(chapter) => chapter.tag(),
            Self::Search(query) => query.clone(),
        }
    }

    /// Whether anything is filtered out.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Selected chapter, if the filter came from a chapter selector.
    pub fn chapter(&self) -> Option<Chapter> {
        match self {
            Self::Chapter(chapter) => Some(*chapter),
            _ => None,
        }
    }

    /// Status-bar label for an active filter.
    pub fn label(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Chapter(chapter) => Some(format!("Chapter {}", chapter)),
            Self::Search(query) => Some(format!("Search \"{}\"", query)),
        }
    }

    /// Apply this filter to `entries`, returning matching positions.
    pub fn positions(&self, entries: &[VerseEntry]) -> Vec<usize> {
        matching_positions(&self.query(), entries)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
