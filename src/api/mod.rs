//! Lyrics backend access
//!
//! This module provides:
//! - the [`LyricsApi`] seam and its reqwest implementation
//! - typed track/lyrics models
//! - validation of untrusted response payloads into those models

pub mod client;
pub mod error;
pub mod models;
pub mod validate;

pub use client::HttpLyricsApi;
pub use error::TrackError;
pub use models::Track;

/// Status and body of a lookup response, before any interpretation.
///
/// `body` is only read for 2xx responses and is empty otherwise.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: reqwest::StatusCode,
    pub body: String,
}

/// Something that can answer a lyrics lookup for a source URL.
///
/// Implementations only report transport errors; status codes are left to the caller.
pub trait LyricsApi {
    async fn fetch_track(&self, song_url: &str) -> anyhow::Result<RawResponse>;
}
