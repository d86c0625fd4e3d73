use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::ranking::{self, Notation, SortMethod};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Response of the client-credentials grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner: PlaylistOwner,
    #[serde(default)]
    pub tracks: PlaylistTracksRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<PlaylistSummary>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub tracks: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

/// A playlist entry's track object. Local files have no id, podcast
/// episodes have `type == "episode"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyTrack {
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<SpotifyTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPlaylistResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub tracks: PlaylistTracksPage,
}

/// A playlist with every page of its tracks fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub tracks: Vec<SpotifyTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub tempo: f64,
    pub key: i32,
    pub mode: i32,
    pub danceability: f64,
    pub energy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSeveralAudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricsRecord {
    #[serde(rename = "plainLyrics")]
    pub plain_lyrics: Option<String>,
    #[serde(default)]
    pub instrumental: bool,
}

/// A playlist track with everything the rankers work on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub artist: String,
    /// Pitch class, 0 = C .. 11 = B
    pub key: Option<i32>,
    /// 1 = major, 0 = minor
    pub mode: Option<i32>,
    /// Beats per minute
    pub tempo: Option<f64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub notation: Option<Notation>,
    pub lyrics: Option<String>,
    pub tokens: Option<Vec<String>>,
}

impl Track {
    pub fn new(id: impl Into<String>, name: impl Into<String>, artist: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            uri: format!("spotify:track:{}", id),
            id,
            name: name.into(),
            artist: artist.into(),
            ..Default::default()
        }
    }

    /// Lyric tokens, empty when lyrics are unavailable.
    pub fn tokens(&self) -> &[String] {
        self.tokens.as_deref().unwrap_or(&[])
    }

    pub fn tonality(&self) -> Option<&'static str> {
        match self.mode {
            Some(1) => Some("major"),
            Some(0) => Some("minor"),
            _ => None,
        }
    }
}

const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub artist: String,
    pub bpm: String,
    pub key: String,
    pub camelot: String,
    pub lyrics: String,
}

impl TrackTableRow {
    pub fn from_track(position: usize, track: &Track) -> Self {
        Self {
            position,
            name: track.name.clone(),
            artist: track.artist.clone(),
            bpm: track
                .tempo
                .map(|t| format!("{:.1}", t))
                .unwrap_or_else(|| "-".to_string()),
            key: match (track.key, track.tonality()) {
                (Some(k), Some(t)) if (0..12).contains(&k) => {
                    format!("{} {}", PITCH_CLASSES[k as usize], t)
                }
                _ => "-".to_string(),
            },
            camelot: track
                .notation
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            lyrics: if track.tokens().is_empty() {
                "no".to_string()
            } else {
                format!("{} words", track.tokens().len())
            },
        }
    }
}

/// A playlist after enrichment and sorting, as served over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortedPlaylist {
    pub id: String,
    pub name: String,
    pub method: Option<SortMethod>,
    pub tracks: Vec<Track>,
}

impl SortedPlaylist {
    /// Re-orders the tracks with `method`; see [`ranking::sort_tracks`].
    pub fn sorted_by(self, method: SortMethod, reference: Option<usize>) -> Self {
        Self {
            method: Some(method),
            tracks: ranking::sort_tracks(self.tracks, method, reference),
            ..self
        }
    }
}
