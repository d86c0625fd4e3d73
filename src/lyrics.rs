//! Lyrics lookup against an LRCLIB-compatible API.
//!
//! `GET {LYRICS_API_URL}/get?track_name=..&artist_name=..` answers with a
//! record carrying `plainLyrics`, or `404` when the song is unknown.

use reqwest::{Client, StatusCode};

use crate::{Res, config, spotify::client::send_with_retry, types::LyricsRecord};

/// Fetches the plain-text lyrics of a song.
///
/// Returns `Ok(None)` when the service does not know the song or marks it as
/// instrumental. Rate limiting is retried like Spotify requests.
pub async fn fetch_lyrics(client: &Client, track_name: &str, artist_name: &str) -> Res<Option<String>> {
    let api_url = format!("{uri}/get", uri = config::lyrics_apiurl());

    let response = send_with_retry(
        client
            .get(&api_url)
            .query(&[("track_name", track_name), ("artist_name", artist_name)]),
    )
    .await?;

    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    let record = response.error_for_status()?.json::<LyricsRecord>().await?;
    if record.instrumental {
        return Ok(None);
    }

    Ok(record.plain_lyrics.filter(|l| !l.trim().is_empty()))
}
