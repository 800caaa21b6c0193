//! Shape checks for the lookup API payload
//!
//! The payload is walked depth-first and the first violation stops the walk.
//! Callers only ever see [`TrackError::ParseFailed`]; the failing path is logged.

use crate::api::error::TrackError;
use crate::api::models::{Album, Artist, Image, LyricLine, Lyrics, Track, TrackInfo};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{path}: {reason}")]
struct SchemaError {
    path: String,
    reason: &'static str,
}

type Object = Map<String, Value>;

/// Validate a raw API response into a [`Track`] for `source_url`.
///
/// Any `url` key in `raw` is ignored; the result always carries `source_url`.
pub fn validate(raw: &Value, source_url: &str) -> Result<Track, TrackError> {
    parse_track(raw, source_url).map_err(|e| {
        tracing::debug!(error = %e, "track payload rejected");
        TrackError::ParseFailed
    })
}

fn parse_track(raw: &Value, source_url: &str) -> Result<Track, SchemaError> {
    if source_url.is_empty() {
        return Err(fail("url", "expected non-empty string"));
    }
    let obj = object(raw, "$")?;

    let track_info = parse_track_info(field(obj, "track_info", "$")?, "track_info")?;
    let lyrics = match obj.get("lyrics") {
        None | Some(Value::Null) => None,
        Some(v) => Some(parse_lyrics(v, "lyrics")?),
    };

    Ok(Track {
        url: source_url.to_string(),
        track_info,
        lyrics,
    })
}

fn parse_track_info(v: &Value, path: &str) -> Result<TrackInfo, SchemaError> {
    let obj = object(v, path)?;

    let name = non_empty_str(obj, "name", path)?;
    let external_url = non_empty_str(obj, "external_url", path)?;
    let preview_url = match obj.get("preview_url") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(fail(&join(path, "preview_url"), "expected string or null")),
    };

    let artists_path = join(path, "artists");
    let artists = array(field(obj, "artists", path)?, &artists_path)?
        .iter()
        .enumerate()
        .map(|(i, a)| parse_artist(a, &format!("{}[{}]", artists_path, i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TrackInfo {
        name,
        external_url,
        preview_url,
        artists,
        album: parse_album(field(obj, "album", path)?, &join(path, "album"))?,
    })
}

fn parse_artist(v: &Value, path: &str) -> Result<Artist, SchemaError> {
    let obj = object(v, path)?;
    Ok(Artist {
        name: non_empty_str(obj, "name", path)?,
        external_url: non_empty_str(obj, "external_url", path)?,
    })
}

fn parse_album(v: &Value, path: &str) -> Result<Album, SchemaError> {
    let obj = object(v, path)?;
    Ok(Album {
        name: non_empty_str(obj, "name", path)?,
        external_url: non_empty_str(obj, "external_url", path)?,
        image: parse_image(field(obj, "image", path)?, &join(path, "image"))?,
    })
}

fn parse_image(v: &Value, path: &str) -> Result<Image, SchemaError> {
    let obj = object(v, path)?;
    Ok(Image {
        url: non_empty_str(obj, "url", path)?,
        width: dimension(obj, "width", path)?,
        height: dimension(obj, "height", path)?,
    })
}

fn parse_lyrics(v: &Value, path: &str) -> Result<Lyrics, SchemaError> {
    let obj = object(v, path)?;

    let has_lipsync = field(obj, "has_lipsync", path)?
        .as_bool()
        .ok_or_else(|| fail(&join(path, "has_lipsync"), "expected boolean"))?;

    let lines_path = join(path, "lines");
    let lines = array(field(obj, "lines", path)?, &lines_path)?
        .iter()
        .enumerate()
        .map(|(i, l)| parse_line(l, &format!("{}[{}]", lines_path, i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Lyrics { has_lipsync, lines })
}

fn parse_line(v: &Value, path: &str) -> Result<LyricLine, SchemaError> {
    let obj = object(v, path)?;
    Ok(LyricLine {
        words: non_empty_str(obj, "words", path)?,
        start_time: millis(obj, "start_time", path)?,
        end_time: millis(obj, "end_time", path)?,
    })
}

fn object<'a>(v: &'a Value, path: &str) -> Result<&'a Object, SchemaError> {
    v.as_object().ok_or_else(|| fail(path, "expected object"))
}

fn array<'a>(v: &'a Value, path: &str) -> Result<&'a Vec<Value>, SchemaError> {
    v.as_array().ok_or_else(|| fail(path, "expected array"))
}

fn field<'a>(obj: &'a Object, key: &str, path: &str) -> Result<&'a Value, SchemaError> {
    obj.get(key).ok_or_else(|| fail(&join(path, key), "missing"))
}

fn non_empty_str(obj: &Object, key: &str, path: &str) -> Result<String, SchemaError> {
    match field(obj, key, path)? {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        _ => Err(fail(&join(path, key), "expected non-empty string")),
    }
}

fn millis(obj: &Object, key: &str, path: &str) -> Result<u64, SchemaError> {
    field(obj, key, path)?
        .as_u64()
        .ok_or_else(|| fail(&join(path, key), "expected non-negative integer"))
}

fn dimension(obj: &Object, key: &str, path: &str) -> Result<f64, SchemaError> {
    field(obj, key, path)?
        .as_f64()
        .ok_or_else(|| fail(&join(path, key), "expected number"))
}

fn join(path: &str, key: &str) -> String {
    if path == "$" {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn fail(path: &str, reason: &'static str) -> SchemaError {
    SchemaError {
        path: path.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://open.spotify.com/track/abc123";

    fn payload() -> Value {
        json!({
            "track_info": {
                "name": "Song",
                "external_url": "https://open.spotify.com/track/abc123",
                "preview_url": "https://p.scdn.co/mp3-preview/xyz",
                "artists": [
                    { "name": "A", "external_url": "https://open.spotify.com/artist/a" },
                    { "name": "B", "external_url": "https://open.spotify.com/artist/b" }
                ],
                "album": {
                    "name": "Album",
                    "external_url": "https://open.spotify.com/album/x",
                    "image": { "url": "https://i.scdn.co/image/x", "width": 640, "height": 640 }
                }
            },
            "lyrics": {
                "has_lipsync": true,
                "lines": [
                    { "words": "Hello", "start_time": 0, "end_time": 1500 },
                    { "words": "World", "start_time": 65000, "end_time": 67000 }
                ]
            }
        })
    }

    #[test]
    fn test_valid_payload() {
        let track = validate(&payload(), URL).unwrap();
        assert_eq!(track.url, URL);
        assert_eq!(track.track_info.name, "Song");
        assert_eq!(track.track_info.artist_names(), vec!["A", "B"]);
        assert_eq!(track.track_info.album.image.width, 640.0);
        let lyrics = track.lyrics.unwrap();
        assert!(lyrics.has_lipsync);
        assert_eq!(lyrics.lines.len(), 2);
        assert_eq!(lyrics.lines[1].start_time, 65000);
    }

    #[test]
    fn test_missing_track_name_fails() {
        let mut raw = payload();
        raw["track_info"].as_object_mut().unwrap().remove("name");
        assert_eq!(validate(&raw, URL), Err(TrackError::ParseFailed));

        let err = parse_track(&raw, URL).unwrap_err();
        assert_eq!(err.path, "track_info.name");
    }

    #[test]
    fn test_empty_string_fails() {
        let mut raw = payload();
        raw["track_info"]["album"]["image"]["url"] = json!("");
        assert_eq!(validate(&raw, URL), Err(TrackError::ParseFailed));

        let mut raw = payload();
        raw["track_info"]["external_url"] = json!(42);
        assert_eq!(validate(&raw, URL), Err(TrackError::ParseFailed));
    }

    #[test]
    fn test_null_lyrics_is_absent() {
        let mut raw = payload();
        raw["lyrics"] = Value::Null;
        let track = validate(&raw, URL).unwrap();
        assert!(track.lyrics.is_none());

        raw.as_object_mut().unwrap().remove("lyrics");
        assert!(validate(&raw, URL).unwrap().lyrics.is_none());
    }

    #[test]
    fn test_empty_lines_is_not_absent() {
        let mut raw = payload();
        raw["lyrics"]["lines"] = json!([]);
        let lyrics = validate(&raw, URL).unwrap().lyrics.unwrap();
        assert!(lyrics.lines.is_empty());
    }

    #[test]
    fn test_invalid_lyrics_object_fails() {
        let mut raw = payload();
        raw["lyrics"] = json!({ "lines": [] });
        assert_eq!(validate(&raw, URL), Err(TrackError::ParseFailed));

        let mut raw = payload();
        raw["lyrics"] = json!("none");
        assert_eq!(validate(&raw, URL), Err(TrackError::ParseFailed));
    }

    #[test]
    fn test_first_bad_element_aborts() {
        let mut raw = payload();
        raw["lyrics"]["lines"][1]["words"] = json!("");
        raw["track_info"]["artists"][1] = json!({ "name": "B" });

        let err = parse_track(&raw, URL).unwrap_err();
        assert_eq!(err.path, "track_info.artists[1].external_url");
    }

    #[test]
    fn test_negative_time_fails() {
        let mut raw = payload();
        raw["lyrics"]["lines"][0]["start_time"] = json!(-5);
        let err = parse_track(&raw, URL).unwrap_err();
        assert_eq!(err.path, "lyrics.lines[0].start_time");
    }

    #[test]
    fn test_end_before_start_is_accepted() {
        let mut raw = payload();
        raw["lyrics"]["lines"][0]["end_time"] = json!(0);
        raw["lyrics"]["lines"][0]["start_time"] = json!(900);
        assert!(validate(&raw, URL).is_ok());
    }

    #[test]
    fn test_preview_url_nullable() {
        let mut raw = payload();
        raw["track_info"]["preview_url"] = Value::Null;
        assert_eq!(validate(&raw, URL).unwrap().track_info.preview_url, None);

        raw["track_info"].as_object_mut().unwrap().remove("preview_url");
        assert_eq!(validate(&raw, URL).unwrap().track_info.preview_url, None);

        raw["track_info"]["preview_url"] = json!(false);
        assert_eq!(validate(&raw, URL), Err(TrackError::ParseFailed));
    }

    #[test]
    fn test_image_size_any_number() {
        let mut raw = payload();
        raw["lyrics"] = Value::Null;
        raw["track_info"]["album"]["image"] = json!({ "url": "u", "width": 640.0, "height": 640.5 });
        let image = validate(&raw, URL).unwrap().track_info.album.image;
        assert_eq!(image.width, 640.0);
        assert_eq!(image.height, 640.5);

        raw["track_info"]["album"]["image"]["width"] = json!(-1);
        assert_eq!(validate(&raw, URL).unwrap().track_info.album.image.width, -1.0);

        raw["track_info"]["album"]["image"]["height"] = json!("640");
        let err = parse_track(&raw, URL).unwrap_err();
        assert_eq!(err.path, "track_info.album.image.height");
    }

    #[test]
    fn test_empty_artists_ok() {
        let mut raw = payload();
        raw["track_info"]["artists"] = json!([]);
        assert!(validate(&raw, URL).unwrap().track_info.artists.is_empty());
    }

    #[test]
    fn test_payload_url_ignored() {
        let mut raw = payload();
        raw["url"] = json!("https://elsewhere.example/track/zzz");
        assert_eq!(validate(&raw, URL).unwrap().url, URL);

        assert_eq!(validate(&payload(), ""), Err(TrackError::ParseFailed));
    }

    #[test]
    fn test_idempotent() {
        let raw = payload();
        assert_eq!(validate(&raw, URL), validate(&raw, URL));
    }
}
