//! User-supplied URLs
//!
//! Two entry points: a pasted source URL (`https://open.spotify.com/track/<id>?si=..`)
//! and a page URL (`/track?q=<id>`) that carries the identifier in `q`.

use reqwest::Url;
use thiserror::Error;

const LOCAL_ORIGIN: &str = "http://localhost/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("The URL cannot be empty")]
    Empty,

    #[error("Please enter a valid Spotify URL")]
    InvalidUrl,

    #[error("Failed to extract track ID from URL")]
    NoTrackId,
}

/// Extract the track identifier from a pasted source URL.
pub fn track_id_from_source(input: &str, base: &str) -> Result<String, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }

    let without_params = strip_query(input);
    if !without_params.starts_with(base) {
        return Err(InputError::InvalidUrl);
    }

    match without_params.rsplit('/').next() {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(InputError::NoTrackId),
    }
}

/// Page URL that opens the lookup for `track_id`.
pub fn page_url(track_id: &str) -> String {
    format!("/track?q={}", urlencoding::encode(track_id))
}

/// Read the track identifier out of a page URL's `q` parameter.
///
/// `q` may hold a bare identifier or a whole source URL; either way the last
/// non-empty path segment wins. Relative page URLs are accepted.
/// Returns `Ok(None)` when there is no usable identifier.
pub fn track_id_from_page(page_url: &str) -> anyhow::Result<Option<String>> {
    let url = if page_url.starts_with('/') {
        Url::parse(LOCAL_ORIGIN)?.join(page_url)?
    } else {
        Url::parse(page_url)?
    };

    let Some((_, q)) = url.query_pairs().find(|(k, _)| k == "q") else {
        return Ok(None);
    };

    let id = strip_query(q.trim())
        .split('/')
        .filter(|s| !s.is_empty())
        .next_back()
        .map(str::to_string);
    Ok(id)
}

fn strip_query(s: &str) -> &str {
    s.split('?').next().unwrap_or(s)
}
