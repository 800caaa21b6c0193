//! LRC export
//!
//! Produces a minimal timed-lyrics file:
//! [00:0:12]First line
//! [00:1:05]Second line
//!
//! Lines keep their input order and are joined with `\n`, without a trailing newline.

use crate::api::models::{Lyrics, Track};
use crate::lyrics::timestamp::lrc_tag;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// An export ready to be written somewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LrcFile {
    pub filename: String,
    pub content: Vec<u8>,
}

impl LrcFile {
    /// Export the lyrics of a looked-up track, if it has any.
    pub fn for_track(track: &Track) -> Option<Self> {
        encode(
            track.lyrics.as_ref(),
            &track.track_info.name,
            &track.track_info.artist_names(),
        )
    }
}

/// Encode lyrics into an `.lrc` file. Returns `None` when there are no lyrics.
pub fn encode(lyrics: Option<&Lyrics>, track_name: &str, artist_names: &[&str]) -> Option<LrcFile> {
    let lyrics = lyrics?;

    let content = lyrics
        .lines
        .iter()
        .map(|line| format!("{}{}", lrc_tag(line.start_time), line.words))
        .collect::<Vec<_>>()
        .join("\n");

    Some(LrcFile {
        filename: format!("{} - {}.lrc", track_name, artist_names.join(", ")),
        content: content.into_bytes(),
    })
}

/// Write `file` into `dir`, returning the final path.
///
/// Path separators in the filename are replaced so the file always lands in `dir`.
pub fn save(file: &LrcFile, dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
    let name: String = file
        .filename
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let path = dir.join(name);
    fs::write(&path, &file.content).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
