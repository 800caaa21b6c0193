use super::Config;

pub const API_BASE_URL: &str = "http://localhost:4321";
pub const API_TIMEOUT_SECS: u64 = 10;
pub const TRACK_BASE_URL: &str = "https://open.spotify.com/track/";

pub fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Config written on first run.
pub fn defaults() -> Config {
    Config::default()
}
