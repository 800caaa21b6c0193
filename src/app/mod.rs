pub mod state;

use crate::api::validate::validate;
use crate::api::{LyricsApi, Track, TrackError};
use crate::input;
use state::{LookupState, Ticket, Toast};
use tokio::sync::mpsc;

/// Drives a page URL through lookup and validation into a [`LookupState`].
pub struct TrackLookup<A> {
    api: A,
    track_base_url: String,
    state: LookupState,
    generation: u64,
    toasts: Option<mpsc::UnboundedSender<Toast>>,
}

impl<A: LyricsApi> TrackLookup<A> {
    pub fn new(api: A, track_base_url: impl Into<String>) -> Self {
        Self {
            api,
            track_base_url: track_base_url.into(),
            state: LookupState::Idle,
            generation: 0,
            toasts: None,
        }
    }

    /// Send a toast for every failure to `tx`.
    pub fn with_toasts(mut self, tx: mpsc::UnboundedSender<Toast>) -> Self {
        self.toasts = Some(tx);
        self
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Run one lookup for `page_url` to completion.
    pub async fn lookup(&mut self, page_url: &str) -> &LookupState {
        let ticket = self.begin();
        let result = self.fetch(page_url).await;
        self.complete(ticket, result);
        &self.state
    }

    /// Start a new lookup. Any earlier ticket becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = LookupState::Loading;
        Ticket {
            generation: self.generation,
        }
    }

    /// Apply a finished lookup. Returns `false` and changes nothing if `ticket` is stale.
    pub fn complete(&mut self, ticket: Ticket, result: Result<Track, TrackError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "dropping stale lookup result"
            );
            return false;
        }

        self.state = match result {
            Ok(track) => {
                tracing::info!(track = %track.track_info.name, "track ready");
                LookupState::Ready(track)
            }
            Err(e) => {
                tracing::warn!(code = e.code(), "lookup failed: {}", e);
                if let Some(tx) = &self.toasts {
                    let _ = tx.send(Toast::error(e.to_string()));
                }
                LookupState::Failed(e)
            }
        };
        true
    }

    /// Resolve `page_url` to a validated track without touching state.
    pub async fn fetch(&self, page_url: &str) -> Result<Track, TrackError> {
        let track_id = match input::track_id_from_page(page_url) {
            Ok(Some(id)) => id,
            Ok(None) => return Err(TrackError::NoTrackId),
            Err(e) => {
                tracing::warn!("unreadable page url {:?}: {:#}", page_url, e);
                return Err(TrackError::Unknown);
            }
        };

        let source_url = format!("{}{}", self.track_base_url, track_id);
        let response = self.api.fetch_track(&source_url).await.map_err(|e| {
            tracing::warn!("lyrics request failed: {:#}", e);
            TrackError::Unknown
        })?;

        if !response.status.is_success() {
            tracing::debug!(status = %response.status, "lyrics api returned an error status");
            return Err(TrackError::FetchFailed);
        }

        let raw: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!("lyrics response is not json: {}", e);
            TrackError::Unknown
        })?;

        validate(&raw, &source_url)
    }
}
