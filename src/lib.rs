//! versebook
//!
//! Terminal browser for a bundled corpus of short Korean verses with
//! Japanese renderings, romanization and commentary.
//!
//! Pure core (`model`, `content`, `state`) with an impure shell (`view`,
//! `logging`, `listing`) following the Elm architecture.

pub mod config;
pub mod content;
pub mod listing;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
