//! Verse entry value type.

use serde::Serialize;
use std::fmt;

/// One verse record: Korean translation, Japanese original, English
/// romanization and commentary.
///
/// Entries are immutable after construction. The Korean text is the
/// entry's canonical display string and the key used for filtering; it
/// embeds the chapter tag (e.g. `"3-2"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VerseEntry {
    korean: String,
    japanese: String,
    english: String,
    commentary: String,
}

impl VerseEntry {
    /// Build an entry. Every field is required; empty strings are allowed.
    pub fn new(
        korean: impl Into<String>,
        japanese: impl Into<String>,
        english: impl Into<String>,
        commentary: impl Into<String>,
    ) -> Self {
        Self {
            korean: korean.into(),
            japanese: japanese.into(),
            english: english.into(),
            commentary: commentary.into(),
        }
    }

    /// Korean translation, including the chapter tag.
    pub fn korean(&self) -> &str {
        &self.korean
    }

    /// Japanese original.
    pub fn japanese(&self) -> &str {
        &self.japanese
    }

    /// Romanized reading of the Japanese original.
    pub fn english(&self) -> &str {
        &self.english
    }

    /// Commentary; may be empty.
    pub fn commentary(&self) -> &str {
        &self.commentary
    }

    /// Whether the commentary has anything besides whitespace.
    pub fn has_commentary(&self) -> bool {
        !self.commentary.trim().is_empty()
    }

    /// Case-sensitive substring match against the Korean display string.
    pub fn matches(&self, query: &str) -> bool {
        self.korean.contains(query)
    }
}

/// Displays the canonical (Korean) string.
impl fmt::Display for VerseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.korean)
    }
}
