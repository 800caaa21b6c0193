use thiserror::Error;

/// Why a track lookup failed, as surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrackError {
    #[error("No track ID found in URL")]
    NoTrackId,

    #[error("Failed to fetch track data")]
    FetchFailed,

    #[error("Failed to parse track data")]
    ParseFailed,

    #[error("An unknown error occurred")]
    Unknown,
}

impl TrackError {
    /// HTTP-like status shown next to the message.
    pub fn code(self) -> u16 {
        match self {
            TrackError::NoTrackId | TrackError::FetchFailed | TrackError::ParseFailed => 404,
            TrackError::Unknown => 500,
        }
    }
}
