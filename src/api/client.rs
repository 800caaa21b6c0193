//! HTTP client for the lyrics backend
//!
//! The backend exposes a single endpoint:
//! `GET {base}/api/lyrics?song_url={source url}` returning track info and,
//! when available, timed lyrics.

use crate::api::{LyricsApi, RawResponse};
use crate::config::ApiConfig;
use anyhow::Context;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpLyricsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLyricsApi {
    const LYRICS_PATH: &'static str = "/api/lyrics";

    pub fn new(cfg: &ApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("build reqwest client")?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn lyrics_url(&self, song_url: &str) -> String {
        format!(
            "{}{}?song_url={}",
            self.base_url,
            Self::LYRICS_PATH,
            urlencoding::encode(song_url)
        )
    }
}

impl LyricsApi for HttpLyricsApi {
    async fn fetch_track(&self, song_url: &str) -> anyhow::Result<RawResponse> {
        let url = self.lyrics_url(song_url);
        tracing::debug!(%url, "requesting track");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("send lyrics request")?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "lyrics api error status, body skipped");
            return Ok(RawResponse {
                status,
                body: String::new(),
            });
        }
        let body = response.text().await.context("read lyrics response body")?;

        tracing::debug!(%status, bytes = body.len(), "lyrics response");
        Ok(RawResponse { status, body })
    }
}
