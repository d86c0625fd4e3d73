use std::time::Duration;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{SpotifyTrack, Track};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Extracts a playlist id from a bare id, a `spotify:playlist:` URI or an
/// `open.spotify.com/playlist/` link.
pub fn parse_playlist_id(input: &str) -> Option<String> {
    let input = input.trim();
    let id = if let Some(rest) = input.strip_prefix("spotify:playlist:") {
        rest
    } else if let Some(pos) = input.find("/playlist/") {
        let rest = &input[pos + "/playlist/".len()..];
        rest.split(['?', '/', '#']).next().unwrap_or_default()
    } else {
        input
    };

    (!id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())).then(|| id.to_string())
}

/// Converts a playlist entry into a [`Track`].
///
/// Entries without an id (local files) and podcast episodes are skipped.
pub fn track_from_item(item: &SpotifyTrack) -> Option<Track> {
    if item.kind.as_deref().is_some_and(|k| k != "track") {
        return None;
    }
    let id = item.id.as_deref()?;
    let artist = item
        .artists
        .first()
        .map(|a| a.name.clone())
        .unwrap_or_default();

    Some(Track {
        uri: item.uri.clone(),
        ..Track::new(id, item.name.clone(), artist)
    })
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
