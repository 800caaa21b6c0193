//! Lyrics presentation and export
//!
//! This module provides:
//! - millisecond offset formatting for display and export tags
//! - the `.lrc` encoder and file writer

pub mod lrc;
pub mod timestamp;

pub use lrc::LrcFile;
pub use timestamp::format_ms;

use crate::api::models::Lyrics;

/// Display rows for a set of lyrics: `(m:ss, words)` in input order.
pub fn display_lines(lyrics: &Lyrics) -> Vec<(String, &str)> {
    lyrics
        .lines
        .iter()
        .map(|l| (format_ms(l.start_time), l.words.as_str()))
        .collect()
}
