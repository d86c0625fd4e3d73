//! Lyrical similarity between tracks.
//!
//! Every call builds its own TF-IDF vector space from the documents it is
//! given: the vocabulary, document frequencies and weights live only for the
//! duration of that call. Documents are token sequences as produced by
//! [`tokenize`](super::tokenize).

use std::collections::BTreeMap;

use crate::types::Track;

/// Square, symmetric matrix of cosine similarities in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

/// TF-IDF weights of a corpus.
///
/// Term frequency is the raw count of a term in a document, the inverse
/// document frequency is smoothed as `ln((1 + n) / (1 + df)) + 1`.
#[derive(Debug, Clone)]
pub struct TfIdf {
    vocabulary: BTreeMap<String, usize>,
    vectors: Vec<Vec<f64>>,
}

impl TfIdf {
    pub fn fit<D: AsRef<[String]>>(documents: &[D]) -> Self {
        let mut vocabulary: BTreeMap<String, usize> = BTreeMap::new();
        for document in documents {
            for token in document.as_ref() {
                if !vocabulary.contains_key(token) {
                    vocabulary.insert(token.clone(), 0);
                }
            }
        }
        // index terms in lexical order so vectors are reproducible
        for (index, slot) in vocabulary.values_mut().enumerate() {
            *slot = index;
        }

        let counts: Vec<Vec<f64>> = documents
            .iter()
            .map(|document| {
                let mut counts = vec![0.0; vocabulary.len()];
                for token in document.as_ref() {
                    counts[vocabulary[token]] += 1.0;
                }
                counts
            })
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = (0..vocabulary.len())
            .map(|term| {
                let df = counts.iter().filter(|c| c[term] > 0.0).count() as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vectors = counts
            .into_iter()
            .map(|counts| counts.iter().zip(&idf).map(|(tf, idf)| tf * idf).collect())
            .collect();

        Self {
            vocabulary,
            vectors,
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn vector(&self, document: usize) -> &[f64] {
        &self.vectors[document]
    }

    /// Index of `term` in the document vectors, if it occurs in the corpus.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity, `0.0` if either vector is all zeros.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let (norm_a, norm_b) = (norm(a), norm(b));
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Pairwise cosine similarity of the TF-IDF vectors of `documents`.
///
/// The diagonal is exactly `1.0` for documents with at least one token and
/// `0.0` for empty ones; an empty document is similar to nothing, itself
/// included.
pub fn similarity_matrix<D: AsRef<[String]>>(documents: &[D]) -> SimilarityMatrix {
    let n = documents.len();
    if n <= 1 {
        let rows = documents
            .iter()
            .map(|d| vec![if d.as_ref().is_empty() { 0.0 } else { 1.0 }])
            .collect();
        return SimilarityMatrix { rows };
    }

    let tfidf = TfIdf::fit(documents);
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        rows[i][i] = if documents[i].as_ref().is_empty() { 0.0 } else { 1.0 };
        for j in (i + 1)..n {
            let sim = cosine_similarity(tfidf.vector(i), tfidf.vector(j));
            rows[i][j] = sim;
            rows[j][i] = sim;
        }
    }
    SimilarityMatrix { rows }
}

/// Orders document indices by descending similarity to `reference`.
///
/// Without a reference the first document is used. Ties keep their original
/// index order. A corpus of zero or one documents is returned as is without
/// building a vector space, and so is a reference outside the corpus.
pub fn rank_by_similarity<D: AsRef<[String]>>(
    documents: &[D],
    reference: Option<usize>,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..documents.len()).collect();
    let reference = reference.unwrap_or(0);
    if documents.len() <= 1 || reference >= documents.len() {
        return order;
    }

    let matrix = similarity_matrix(documents);
    let row = matrix.row(reference);
    order.sort_by(|&a, &b| row[b].total_cmp(&row[a]));
    order
}

/// Reorders tracks by lyrical similarity to the track at `reference`
/// (the first track when `None`).
pub fn sort_by_similarity(tracks: Vec<Track>, reference: Option<usize>) -> Vec<Track> {
    let documents: Vec<&[String]> = tracks.iter().map(Track::tokens).collect();
    let order = rank_by_similarity(&documents, reference);

    let mut slots: Vec<Option<Track>> = tracks.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect()
}
