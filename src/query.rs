//! Query normalization and tokenization.
//!
//! Queries are lowercased, stripped of punctuation, and split into
//! stop-word-filtered tokens before scoring. No stemming, no synonym
//! expansion here — synonyms are handled as a scoring bonus in `ranking`.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Punctuation treated as a word separator in queries.
const SEPARATORS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<',
    '>',
];

/// Filler words that carry no search intent.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["the", "and", "for", "with", "from", "that", "this", "your", "about"]
        .into_iter()
        .collect()
});

/// Lowercase, replace separator punctuation with spaces, collapse whitespace
/// runs, trim. Pure and locale-independent beyond simple lowercasing.
pub fn clean_query(query: &str) -> String {
    let lowered = query.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a cleaned query into stop-word-filtered tokens.
/// An empty or punctuation-only query yields no tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    clean_query(query)
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}
