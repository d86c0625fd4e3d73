//! Plain-text export of a sorted playlist.
//!
//! ```text
//! Playlist Name: Friday Mix
//! Track Name: Strobe, BPM: 128, Camelot Key: 8A
//! Track Name: Intro, BPM: unknown, Camelot Key: unknown
//!
//! ```

use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use crate::{ranking::SortMethod, types::Track};

const UNKNOWN: &str = "unknown";

pub fn file_name(method: Option<SortMethod>) -> String {
    match method {
        Some(method) => format!("sorted_playlist_{}.txt", method),
        None => "sorted_playlist.txt".to_string(),
    }
}

/// Tempo as reported by Spotify, unrounded (`128`, `99.99999`).
fn format_bpm(tempo: Option<f64>) -> String {
    match tempo {
        Some(bpm) => bpm.to_string(),
        None => UNKNOWN.to_string(),
    }
}

/// Renders the export text: a header line, one line per track and a
/// trailing blank line.
pub fn render(playlist_name: &str, tracks: &[Track]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Playlist Name: {}", playlist_name);
    for track in tracks {
        let camelot = track
            .notation
            .map(|n| n.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());
        let _ = writeln!(
            out,
            "Track Name: {}, BPM: {}, Camelot Key: {}",
            track.name,
            format_bpm(track.tempo),
            camelot
        );
    }
    out.push('\n');
    out
}

/// Writes the rendered export into `dir` and returns the file path.
pub async fn write(
    dir: &Path,
    method: Option<SortMethod>,
    playlist_name: &str,
    tracks: &[Track],
) -> std::io::Result<PathBuf> {
    async_fs::create_dir_all(dir).await?;
    let path = dir.join(file_name(method));
    async_fs::write(&path, render(playlist_name, tracks)).await?;
    Ok(path)
}

/// Writes the rendered export to an explicit file path.
pub async fn write_to(path: &Path, playlist_name: &str, tracks: &[Track]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        async_fs::create_dir_all(parent).await?;
    }
    async_fs::write(path, render(playlist_name, tracks)).await
}
