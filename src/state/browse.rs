//! Detail-view pager and text size state (pure).
//!
//! A [`BrowseSession`] pages over the full, unfiltered entry sequence it was
//! opened with. Boundary presses and shrinking past the size floor are
//! no-ops, never errors.

use crate::model::{SessionError, VerseEntry};
use std::sync::Arc;

// ===== FontSize =====

/// Text size in abstract units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u16);

impl FontSize {
    /// Size every session starts at.
    pub const DEFAULT: FontSize = FontSize(16);
    /// Decreasing is only applied while the size is above this value.
    pub const MIN: FontSize = FontSize(10);
    /// Change applied by one increase or decrease.
    pub const STEP: u16 = 2;

    /// Size in units.
    pub fn get(self) -> u16 {
        self.0
    }

    /// One step larger. Grows on every call until it reaches the cap of
    /// `u16::MAX`, where it stays.
    pub fn increased(self) -> Self {
        Self(self.0.saturating_add(Self::STEP))
    }

    /// One step smaller, or unchanged once at or below [`FontSize::MIN`].
    pub fn decreased(self) -> Self {
        if self.0 > Self::MIN.0 {
            Self(self.0 - Self::STEP)
        } else {
            self
        }
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ===== BrowseSession =====

/// Pager over a fixed entry sequence plus the text size of the detail view.
///
/// # Invariants
///
/// - `entries` is non-empty
/// - `0 <= position < entries.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseSession {
    entries: Arc<[VerseEntry]>,
    position: usize,
    font_size: FontSize,
}

impl BrowseSession {
    /// Open a session at `start` within `entries`.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidState`] if `entries` is empty; no session is
    /// constructed and the caller should not show a detail view.
    ///
    /// # Panics
    ///
    /// `start` must be a position obtained from the same `entries`
    /// sequence. Passing `start >= entries.len()` is a caller bug and
    /// panics rather than being clamped.
    pub fn open(entries: Arc<[VerseEntry]>, start: usize) -> Result<Self, SessionError> {
        if entries.is_empty() {
            return Err(SessionError::InvalidState);
        }
        assert!(
            start < entries.len(),
            "start position {} out of range for {} entries",
            start,
            entries.len()
        );
        Ok(Self {
            entries,
            position: start,
            font_size: FontSize::DEFAULT,
        })
    }

    /// Entry at the current position.
    pub fn current(&self) -> &VerseEntry {
        &self.entries[self.position]
    }

    /// Current position, 0-based into the full sequence.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the paged sequence. Always at least 1.
    // A session is never empty, so there is no `is_empty`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True while `position > 0`.
    pub fn has_prev(&self) -> bool {
        self.position > 0
    }

    /// True while `position < len - 1`.
    pub fn has_next(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    /// Step back one entry. No-op on the first entry.
    pub fn prev(&mut self) {
        if self.has_prev() {
            self.position -= 1;
        }
    }

    /// Step forward one entry. No-op on the last entry.
    pub fn next(&mut self) {
        if self.has_next() {
            self.position += 1;
        }
    }

    /// Current text size.
    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    /// Grow the text one step.
    pub fn increase_font_size(&mut self) {
        self.font_size = self.font_size.increased();
    }

    /// Shrink the text one step, stopping at [`FontSize::MIN`].
    pub fn decrease_font_size(&mut self) {
        self.font_size = self.font_size.decreased();
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "browse_tests.rs"]
mod tests;
