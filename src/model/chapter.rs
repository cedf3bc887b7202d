//! Chapter numbers and their filter tags.
//!
//! Chapter selection is a coarse filter: chapter `n` becomes the query
//! `"n-"`, which is matched as a plain substring of each entry's Korean
//! text. `"1-"` therefore also matches tags such as `"11-2"`.

use std::fmt;

/// Number of chapter selectors offered by the list screen.
pub const CHAPTER_COUNT: u8 = 18;

/// A chapter number in `1..=CHAPTER_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chapter(u8);

impl Chapter {
    /// Smart constructor: validates the chapter range.
    pub fn new(number: u8) -> Result<Self, InvalidChapter> {
        if (1..=CHAPTER_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(InvalidChapter::OutOfRange(number))
        }
    }

    /// Chapter 1.
    pub fn first() -> Self {
        Self(1)
    }

    /// Chapter 18.
    pub fn last() -> Self {
        Self(CHAPTER_COUNT)
    }

    /// Chapter number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Filter query for this chapter, e.g. `"3-"`.
    pub fn tag(self) -> String {
        format!("{}-", self.0)
    }

    /// Next chapter, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        if self.0 >= CHAPTER_COUNT {
            Self::first()
        } else {
            Self(self.0 + 1)
        }
    }

    /// Previous chapter, wrapping from the first to the last.
    pub fn prev(self) -> Self {
        if self.0 <= 1 {
            Self::last()
        } else {
            Self(self.0 - 1)
        }
    }

    /// All chapters in ascending order.
    pub fn all() -> impl Iterator<Item = Chapter> {
        (1..=CHAPTER_COUNT).map(Chapter)
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected chapter number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidChapter {
    /// Chapter number outside `1..=CHAPTER_COUNT`.
    #[error("chapter {0} is outside 1..={max}", max = CHAPTER_COUNT)]
    OutOfRange(u8),
}
