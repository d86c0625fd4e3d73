use playsort::enrich::{apply_audio_features, apply_lyrics};
use playsort::management::is_expired_at;
use playsort::types::{AudioFeatures, SpotifyTrack, Token, Track, TrackArtist};
use playsort::utils::*;

// Helper function to create a playlist entry as returned by Spotify
fn create_test_item(id: Option<&str>, name: &str, kind: Option<&str>) -> SpotifyTrack {
    SpotifyTrack {
        id: id.map(str::to_string),
        name: name.to_string(),
        uri: id
            .map(|id| format!("spotify:track:{}", id))
            .unwrap_or_else(|| format!("spotify:local:{}", name)),
        artists: vec![
            TrackArtist {
                id: Some("artist_1".to_string()),
                name: "Daft Punk".to_string(),
            },
            TrackArtist {
                id: Some("artist_2".to_string()),
                name: "Pharrell Williams".to_string(),
            },
        ],
        kind: kind.map(str::to_string),
    }
}

fn create_test_token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "playlist-read-private".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should be deterministic - same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));

    // Different input should produce different output
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // SHA256 is 32 bytes, unpadded base64url of that is 43 characters
    assert_eq!(challenge.len(), 43);
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[test]
fn test_generate_code_challenge_known_value() {
    // RFC 7636, appendix B
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        generate_code_challenge(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_parse_playlist_id() {
    let id = "37i9dQZF1DXcBWIGoYBM5M";

    assert_eq!(parse_playlist_id(id), Some(id.to_string()));
    assert_eq!(
        parse_playlist_id(&format!("  spotify:playlist:{}  ", id)),
        Some(id.to_string())
    );
    assert_eq!(
        parse_playlist_id(&format!(
            "https://open.spotify.com/playlist/{}?si=abc123",
            id
        )),
        Some(id.to_string())
    );
    assert_eq!(
        parse_playlist_id(&format!("https://open.spotify.com/playlist/{}/", id)),
        Some(id.to_string())
    );
}

#[test]
fn test_parse_playlist_id_invalid() {
    assert_eq!(parse_playlist_id(""), None);
    assert_eq!(parse_playlist_id("spotify:playlist:"), None);
    assert_eq!(parse_playlist_id("https://open.spotify.com/playlist/"), None);
    assert_eq!(parse_playlist_id("not a playlist"), None);
    assert_eq!(parse_playlist_id("../etc/passwd"), None);
}

#[test]
fn test_track_from_item() {
    let item = create_test_item(Some("abc123"), "Get Lucky", Some("track"));
    let track = track_from_item(&item).unwrap();

    assert_eq!(track.id, "abc123");
    assert_eq!(track.name, "Get Lucky");
    assert_eq!(track.uri, "spotify:track:abc123");
    // Only the first artist is kept
    assert_eq!(track.artist, "Daft Punk");
    assert_eq!(track.tempo, None);
    assert_eq!(track.notation, None);
    assert_eq!(track.tokens, None);
}

#[test]
fn test_track_from_item_skips_local_files_and_episodes() {
    assert!(track_from_item(&create_test_item(None, "Demo.mp3", Some("track"))).is_none());
    assert!(track_from_item(&create_test_item(Some("ep1"), "Podcast", Some("episode"))).is_none());
    // Missing type is treated as a track
    assert!(track_from_item(&create_test_item(Some("xyz"), "Song", None)).is_some());
}

#[test]
fn test_track_from_item_without_artists() {
    let mut item = create_test_item(Some("abc"), "Unknown", None);
    item.artists.clear();

    let track = track_from_item(&item).unwrap();
    assert_eq!(track.artist, "");
}

#[test]
fn test_is_expired_at() {
    let token = create_test_token(1000, 3600);

    assert!(!is_expired_at(&token, 1000));
    assert!(!is_expired_at(&token, 4359));
    // Considered expired four minutes ahead of time
    assert!(is_expired_at(&token, 4360));
    assert!(is_expired_at(&token, 10_000));
}

#[test]
fn test_apply_audio_features() {
    let mut track = Track::new("t1", "Song", "Artist");
    let features = AudioFeatures {
        id: "t1".to_string(),
        tempo: 121.98,
        key: 9,
        mode: 0,
        danceability: 0.8,
        energy: 0.65,
    };

    apply_audio_features(&mut track, &features);

    assert_eq!(track.tempo, Some(121.98));
    assert_eq!(track.key, Some(9));
    assert_eq!(track.mode, Some(0));
    assert_eq!(track.danceability, Some(0.8));
    assert_eq!(track.energy, Some(0.65));
    assert_eq!(track.notation.map(|n| n.to_string()), Some("8A".to_string()));
}

#[test]
fn test_apply_audio_features_unknown_key() {
    let mut track = Track::new("t1", "Noise", "Artist");
    let features = AudioFeatures {
        id: "t1".to_string(),
        tempo: 90.0,
        key: -1,
        mode: 1,
        danceability: 0.1,
        energy: 0.9,
    };

    apply_audio_features(&mut track, &features);

    assert_eq!(track.key, Some(-1));
    assert_eq!(track.notation, None);
}

#[test]
fn test_apply_lyrics() {
    let lyrics = "We're up all night to get lucky, up all night to get lucky again";
    let mut track = Track::new("t1", "Get Lucky", "Daft Punk");

    apply_lyrics(&mut track, Some(lyrics.to_string()));

    assert_eq!(track.lyrics.as_deref(), Some(lyrics));
    let tokens = track.tokens.as_ref().unwrap();
    assert!(tokens.contains(&"night".to_string()));
    assert!(tokens.contains(&"lucky".to_string()));
    assert!(!tokens.contains(&"all".to_string()));
}

#[test]
fn test_apply_lyrics_too_short_or_missing() {
    let mut track = Track::new("t1", "Short", "Artist");

    apply_lyrics(&mut track, Some("la la la".to_string()));
    assert_eq!(track.lyrics.as_deref(), Some("la la la"));
    assert_eq!(track.tokens, None);

    apply_lyrics(&mut track, None);
    assert_eq!(track.lyrics, None);
    assert_eq!(track.tokens, None);
}
