use std::collections::HashMap;

use reqwest::Client;

use crate::{
    config,
    spotify::client::get_json,
    types::{AudioFeatures, GetSeveralAudioFeaturesResponse},
    warning,
};

/// Maximum number of ids `GET /audio-features` accepts per request.
pub const AUDIO_FEATURES_BATCH: usize = 100;

/// Retrieves audio features for up to 100 tracks in one request.
///
/// Tracks Spotify has no analysis for come back as `null` and are simply
/// missing from the result.
pub async fn get_several_audio_features(
    token: &str,
    track_ids: &[String],
) -> Result<Vec<AudioFeatures>, reqwest::Error> {
    let api_url = format!(
        "{url}/audio-features?ids={ids}",
        url = &config::spotify_apiurl(),
        ids = track_ids.join(",")
    );

    let client = Client::new();
    let res: GetSeveralAudioFeaturesResponse = get_json(&client, &api_url, token).await?;
    Ok(res.audio_features.into_iter().flatten().collect())
}

/// Retrieves audio features for any number of tracks, keyed by track id.
///
/// Ids are split into batches that are requested concurrently. A failing
/// batch is reported as a warning and its tracks stay without features.
pub async fn get_audio_features(token: &str, track_ids: &[String]) -> HashMap<String, AudioFeatures> {
    let mut handles = Vec::new();

    for chunk in track_ids.chunks(AUDIO_FEATURES_BATCH) {
        let chunk = chunk.to_vec();
        let token = token.to_string();
        let handle =
            tokio::spawn(async move { get_several_audio_features(&token, &chunk).await });
        handles.push(handle);
    }

    let mut features = HashMap::new();
    for handle in handles {
        match handle.await {
            Ok(Ok(batch)) => {
                features.extend(batch.into_iter().map(|f| (f.id.clone(), f)));
            }
            Ok(Err(e)) => warning!("Failed to fetch audio features: {}", e),
            Err(e) => warning!("Task join error: {}", e),
        }
    }

    features
}
