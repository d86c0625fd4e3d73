//! # Ranking Module
//!
//! Orders the tracks of a playlist. Three methods are available:
//!
//! - **bpm**: ascending tempo ([`rank_by_tempo`])
//! - **camelot**: position on the Camelot wheel, so that neighbouring tracks
//!   are in harmonically compatible keys ([`rank_by_notation`])
//! - **wordplay**: lyrical similarity to a reference track, using TF-IDF
//!   vectors and cosine similarity ([`sort_by_similarity`])
//!
//! All functions are pure and synchronous. They never fail: tracks lacking the
//! data a method needs are placed deterministically instead of rejected.

mod notation;
mod similarity;
mod tempo;
mod tokenize;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::types::Track;

pub use notation::{Letter, Notation, ParseNotationError, rank_by_notation, to_notation};
pub use similarity::{
    SimilarityMatrix, TfIdf, cosine_similarity, rank_by_similarity, similarity_matrix,
    sort_by_similarity,
};
pub use tempo::rank_by_tempo;
pub use tokenize::{MIN_LYRICS_CHARS, is_stop_word, tokenize, tokenize_lyrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    /// Ascending tempo
    Bpm,
    /// Camelot wheel position
    Camelot,
    /// Lyrical similarity
    Wordplay,
}

impl SortMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMethod::Bpm => "bpm",
            SortMethod::Camelot => "camelot",
            SortMethod::Wordplay => "wordplay",
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bpm" => Ok(SortMethod::Bpm),
            "camelot" => Ok(SortMethod::Camelot),
            "wordplay" => Ok(SortMethod::Wordplay),
            other => Err(format!("Unknown sorting method: {}", other)),
        }
    }
}

/// Sorts `tracks` with the given method.
///
/// `reference` selects the track the `wordplay` method compares against and
/// is ignored by the other methods.
pub fn sort_tracks(tracks: Vec<Track>, method: SortMethod, reference: Option<usize>) -> Vec<Track> {
    match method {
        SortMethod::Bpm => rank_by_tempo(tracks),
        SortMethod::Camelot => rank_by_notation(tracks),
        SortMethod::Wordplay => sort_by_similarity(tracks, reference),
    }
}
