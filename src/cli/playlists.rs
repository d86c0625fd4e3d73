use tabled::Table;

use crate::{
    error, spotify, success,
    types::{PlaylistSummary, PlaylistTableRow},
    utils, warning,
};

/// Lists the playlists of the logged-in user, optionally filtered by name.
pub async fn list_playlists(search: Option<String>) {
    let token = match spotify::auth::user_token().await {
        Ok(t) => t,
        Err(e) => error!("{}", e),
    };

    let pb = utils::spinner("Fetching playlists...");
    let playlists = match spotify::playlists::get_user_playlists(&token).await {
        Ok(p) => p,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };
    pb.finish_and_clear();

    let playlists = filter_playlists(playlists, search.as_deref());
    if playlists.is_empty() {
        warning!("No playlists found.");
        return;
    }

    success!("Found {} playlists", playlists.len());
    let rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            id: p.id,
            name: p.name,
            owner: p.owner.display_name.unwrap_or(p.owner.id),
            tracks: p.tracks.total,
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn filter_playlists(mut playlists: Vec<PlaylistSummary>, search: Option<&str>) -> Vec<PlaylistSummary> {
    if let Some(search) = search {
        let term = search.to_lowercase();
        playlists.retain(|p| p.name.to_lowercase().contains(&term));
    }
    playlists
}
