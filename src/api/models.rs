use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub name: String,
    pub external_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub url: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Album {
    pub name: String,
    pub external_url: String,
    pub image: Image,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackInfo {
    pub name: String,
    pub external_url: String,
    /// 30s audio preview, when the source offers one.
    pub preview_url: Option<String>,
    pub artists: Vec<Artist>,
    pub album: Album,
}

impl TrackInfo {
    pub fn artist_names(&self) -> Vec<&str> {
        self.artists.iter().map(|a| a.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LyricLine {
    pub words: String,
    /// Offset from track start in milliseconds
    pub start_time: u64,
    /// Not consumed anywhere yet; kept so the model mirrors the API payload.
    pub end_time: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lyrics {
    pub has_lipsync: bool,
    pub lines: Vec<LyricLine>,
}

/// A validated lookup result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    /// Source URL the lookup was made for.
    pub url: String,
    pub track_info: TrackInfo,
    pub lyrics: Option<Lyrics>,
}
