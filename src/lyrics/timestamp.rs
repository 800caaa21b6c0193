//! Millisecond offsets to display labels
//!
//! Display form is `m:ss`: minutes unpadded and unbounded, seconds padded.
//! The export tag wraps that in a literal `[00:` prefix, giving `[00:m:ss]`.

/// Format a millisecond offset as `m:ss`, truncating sub-second precision.
pub fn format_ms(ms: u64) -> String {
    let total_secs = ms / 1000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Timed tag used at the start of each exported line.
///
/// The leading `00:` is constant text, not an hours field.
pub fn lrc_tag(ms: u64) -> String {
    format!("[00:{}]", format_ms(ms))
}
