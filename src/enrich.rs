//! Turns raw playlist entries into [`Track`]s the rankers can work on.

use reqwest::Client;

use crate::{
    Res, lyrics, ranking, spotify,
    types::{AudioFeatures, Playlist, SortedPlaylist, Track},
    utils, warning,
};

/// Number of lyrics lookups in flight at once.
pub const LYRICS_CONCURRENCY: usize = 20;

/// Copies the audio analysis onto a track and derives its Camelot notation.
pub fn apply_audio_features(track: &mut Track, features: &AudioFeatures) {
    track.tempo = Some(features.tempo);
    track.key = Some(features.key);
    track.mode = Some(features.mode);
    track.danceability = Some(features.danceability);
    track.energy = Some(features.energy);
    track.notation = ranking::to_notation(features.key, features.mode);
}

/// Stores raw lyrics on a track together with their tokens.
pub fn apply_lyrics(track: &mut Track, lyrics: Option<String>) {
    track.tokens = ranking::tokenize_lyrics(lyrics.as_deref());
    track.lyrics = lyrics;
}

/// Builds the tracks of a playlist with audio features and lyrics attached.
///
/// Audio features are fetched in concurrent batches. Lyrics take one request
/// per track, at most [`LYRICS_CONCURRENCY`] at a time. Lookups that fail
/// leave the affected fields empty; the playlist order is kept.
pub async fn enrich_playlist(token: &str, playlist: &Playlist) -> Vec<Track> {
    let mut tracks: Vec<Track> = playlist
        .tracks
        .iter()
        .filter_map(utils::track_from_item)
        .collect();

    let pb = utils::spinner(format!(
        "Fetching audio features for {} tracks...",
        tracks.len()
    ));

    let ids: Vec<String> = tracks.iter().map(|t| t.id.clone()).collect();
    let features = spotify::features::get_audio_features(token, &ids).await;
    for track in tracks.iter_mut() {
        if let Some(f) = features.get(&track.id) {
            apply_audio_features(track, f);
        }
    }

    pb.set_message(format!("Fetching lyrics for {} tracks...", tracks.len()));

    let client = Client::new();
    for chunk in tracks.chunks_mut(LYRICS_CONCURRENCY) {
        let handles: Vec<_> = chunk
            .iter()
            .map(|track| {
                let client = client.clone();
                let (name, artist) = (track.name.clone(), track.artist.clone());
                tokio::spawn(async move { lyrics::fetch_lyrics(&client, &name, &artist).await })
            })
            .collect();

        for (track, handle) in chunk.iter_mut().zip(handles) {
            let lyrics = match handle.await {
                Ok(Ok(lyrics)) => lyrics,
                Ok(Err(e)) => {
                    warning!("No lyrics for {} - {}: {}", track.artist, track.name, e);
                    None
                }
                Err(e) => {
                    warning!("Task join error: {}", e);
                    None
                }
            };
            apply_lyrics(track, lyrics);
        }
    }

    pb.finish_and_clear();
    tracks
}

/// Fetches a playlist by id (or link) and enriches its tracks.
///
/// Uses the logged-in user's token when there is one and an application
/// token otherwise. The tracks keep their playlist order.
pub async fn fetch_enriched(playlist: &str) -> Res<SortedPlaylist> {
    let playlist_id =
        utils::parse_playlist_id(playlist).ok_or_else(|| format!("Invalid playlist id: {}", playlist))?;
    let token = spotify::auth::any_token().await?;
    let playlist = spotify::playlists::get_playlist(&token, &playlist_id).await?;
    let tracks = enrich_playlist(&token, &playlist).await;

    Ok(SortedPlaylist {
        id: playlist.id,
        name: playlist.name,
        method: None,
        tracks,
    })
}
