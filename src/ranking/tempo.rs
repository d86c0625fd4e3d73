use crate::types::Track;

/// Orders tracks by ascending tempo.
///
/// The sort is stable; tracks without a tempo go to the end.
pub fn rank_by_tempo(mut tracks: Vec<Track>) -> Vec<Track> {
    tracks.sort_by(|a, b| match (a.tempo, b.tempo) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    tracks
}
