use std::{collections::HashSet, sync::LazyLock};

use unicode_segmentation::UnicodeSegmentation;

/// Lyrics shorter than this many characters are treated as unavailable.
pub const MIN_LYRICS_CHARS: usize = 50;

/// English stop words (the NLTK corpus list).
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Splits text into lower-cased word tokens.
///
/// Word boundaries follow Unicode text segmentation (UAX #29). Tokens that
/// contain anything but alphanumeric characters, such as contractions, are
/// dropped, as are English stop words. Tokens keep their order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .unicode_words()
        .filter(|word| word.chars().all(char::is_alphanumeric))
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Tokenizes raw lyrics as fetched for a track.
///
/// Returns `None` when there are no lyrics or they are too short to be
/// meaningful; such tracks rank with an empty token set.
pub fn tokenize_lyrics(lyrics: Option<&str>) -> Option<Vec<String>> {
    let lyrics = lyrics?;
    if lyrics.chars().count() < MIN_LYRICS_CHARS {
        return None;
    }
    Some(tokenize(lyrics))
}
