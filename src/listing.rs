//! Non-interactive listing for `--list`.
//!
//! Writes the entries the list screen would show, either as numbered plain
//! text or as a JSON array. Positions are 1-based and refer to the full
//! list, so they can be fed back to `--open`.

use crate::content::ContentStore;
use crate::model::{AppError, VerseEntry};
use crate::state::DisplayOptions;
use serde::Serialize;
use std::io::Write;

/// Output format for `--list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingFormat {
    /// Numbered lines, indented fields underneath.
    Plain,
    /// Pretty-printed JSON array.
    Json,
}

#[derive(Debug, Serialize)]
struct ListingRecord<'a> {
    position: usize,
    #[serde(flatten)]
    entry: &'a VerseEntry,
}

/// Write the entries at `positions` (0-based, into `store`) to `out`.
///
/// Plain output honors `display`; JSON always carries every field.
/// Positions outside the store are skipped.
pub fn write_listing<W: Write>(
    out: &mut W,
    store: &ContentStore,
    positions: &[usize],
    format: ListingFormat,
    display: DisplayOptions,
) -> Result<(), AppError> {
    let records: Vec<ListingRecord> = positions
        .iter()
        .filter_map(|&p| store.get(p).map(|entry| ListingRecord { position: p + 1, entry }))
        .collect();

    match format {
        ListingFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }
        ListingFormat::Plain => {
            for record in &records {
                write_plain(out, record, display)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn write_plain<W: Write>(
    out: &mut W,
    record: &ListingRecord,
    display: DisplayOptions,
) -> std::io::Result<()> {
    let entry = record.entry;
    writeln!(out, "{}. {}", record.position, entry.korean())?;
    writeln!(out, "   {}", entry.japanese())?;
    if display.show_romanization {
        writeln!(out, "   {}", entry.english())?;
    }
    if display.show_commentary && entry.has_commentary() {
        writeln!(out, "   {}", entry.commentary())?;
    }
    Ok(())
}
