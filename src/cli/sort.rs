use std::path::PathBuf;

use tabled::Table;

use crate::{
    config, enrich, error, export, info,
    ranking::SortMethod,
    success,
    types::{SortedPlaylist, TrackTableRow},
    warning,
};

async fn load(playlist: &str) -> SortedPlaylist {
    info!("Fetching playlist {}", playlist);
    match enrich::fetch_enriched(playlist).await {
        Ok(p) => p,
        Err(e) => error!("Failed to fetch playlist: {}", e),
    }
}

fn print_tracks(playlist: &SortedPlaylist) {
    let rows: Vec<TrackTableRow> = playlist
        .tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow::from_track(i + 1, t))
        .collect();

    let title = match playlist.method {
        Some(method) => format!("{} (sorted by {})", playlist.name, method),
        None => playlist.name.clone(),
    };
    println!("{}\n{}\n", title, Table::new(rows));
}

fn warn_missing(playlist: &SortedPlaylist, method: SortMethod) {
    let missing = playlist
        .tracks
        .iter()
        .filter(|t| match method {
            SortMethod::Bpm => t.tempo.is_none(),
            SortMethod::Camelot => t.notation.is_none(),
            SortMethod::Wordplay => t.tokens().is_empty(),
        })
        .count();

    if missing > 0 {
        warning!(
            "{} of {} tracks lack the data to sort by {} and were placed deterministically.",
            missing,
            playlist.tracks.len(),
            method
        );
    }
}

fn check_reference(playlist: &SortedPlaylist, method: SortMethod, reference: Option<usize>) {
    if method != SortMethod::Wordplay {
        return;
    }
    if let Some(reference) = reference {
        if reference >= playlist.tracks.len() {
            warning!(
                "Reference track {} is out of range (playlist has {} tracks); keeping playlist order.",
                reference,
                playlist.tracks.len()
            );
        }
    }
}

/// Shows a playlist with its enriched tracks in playlist order.
pub async fn show(playlist: String) {
    let playlist = load(&playlist).await;
    print_tracks(&playlist);
}

/// Shows a playlist sorted by `method`.
pub async fn sort(playlist: String, method: SortMethod, reference: Option<usize>) {
    let playlist = load(&playlist).await;
    check_reference(&playlist, method, reference);
    warn_missing(&playlist, method);
    print_tracks(&playlist.sorted_by(method, reference));
}

/// Sorts a playlist and writes the plain-text export.
///
/// Without `output` the file is named after the method and placed in
/// `EXPORT_DIR`.
pub async fn export(
    playlist: String,
    method: SortMethod,
    reference: Option<usize>,
    output: Option<PathBuf>,
) {
    let playlist = load(&playlist).await;
    check_reference(&playlist, method, reference);
    let playlist = playlist.sorted_by(method, reference);

    let written = match output {
        Some(path) => export::write_to(&path, &playlist.name, &playlist.tracks)
            .await
            .map(|_| path),
        None => {
            export::write(
                &config::export_dir(),
                Some(method),
                &playlist.name,
                &playlist.tracks,
            )
            .await
        }
    };

    match written {
        Ok(path) => success!(
            "Exported {} tracks to {}",
            playlist.tracks.len(),
            path.display()
        ),
        Err(e) => error!("Failed to write export: {}", e),
    }
}
