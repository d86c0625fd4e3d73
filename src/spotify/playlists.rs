use reqwest::Client;

use crate::{
    config,
    spotify::client::get_json,
    types::{
        GetPlaylistResponse, GetUserPlaylistsResponse, Playlist, PlaylistSummary,
        PlaylistTracksPage,
    },
};

/// Page size for `/me/playlists`; 50 is the API maximum.
const PLAYLISTS_PAGE_LIMIT: u32 = 50;

/// Retrieves every playlist owned or followed by the authenticated user.
///
/// Follows the `next` links of `GET /me/playlists` until the last page.
/// Requires a user token; the client-credentials token has no user context.
pub async fn get_user_playlists(token: &str) -> Result<Vec<PlaylistSummary>, reqwest::Error> {
    let client = Client::new();
    let mut next = Some(format!(
        "{uri}/me/playlists?limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = PLAYLISTS_PAGE_LIMIT
    ));
    let mut playlists = Vec::new();

    while let Some(url) = next {
        let page: GetUserPlaylistsResponse = get_json(&client, &url, token).await?;
        playlists.extend(page.items);
        next = page.next;
    }

    Ok(playlists)
}

/// Retrieves a playlist together with all of its tracks.
///
/// `GET /playlists/{id}` embeds only the first page of tracks; the remaining
/// pages are fetched through `tracks.next`. Entries whose track is `null`
/// (removed from the catalog) are dropped.
pub async fn get_playlist(token: &str, playlist_id: &str) -> Result<Playlist, reqwest::Error> {
    let client = Client::new();
    let url = format!(
        "{uri}/playlists/{id}",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let first: GetPlaylistResponse = get_json(&client, &url, token).await?;
    let mut tracks = Vec::new();
    let mut page = first.tracks;

    loop {
        tracks.extend(page.items.into_iter().filter_map(|item| item.track));
        match page.next {
            Some(next) => page = get_json::<PlaylistTracksPage>(&client, &next, token).await?,
            None => break,
        }
    }

    Ok(Playlist {
        id: first.id,
        name: first.name,
        description: first.description,
        tracks,
    })
}
