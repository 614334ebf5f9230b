//! Word normalization and forward tokenization.
//!
//! Text is lowercased and split on every character that is not alphanumeric.
//! The index stores each word under all of its prefixes so a partially typed
//! query word still matches ("alp" finds "alpha").

#[cfg(test)]
#[path = "tokenize_test.rs"]
mod tokenize_test;

/// Split `text` into lowercase words, in order of appearance.
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Unique query words in order of first appearance.
#[must_use]
pub fn query_terms(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for word in words(query) {
        if !terms.contains(&word) {
            terms.push(word);
        }
    }
    terms
}

/// Every non-empty prefix of `word`, shortest first, split on char boundaries.
pub fn forward(word: &str) -> impl Iterator<Item = &str> {
    word.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .map(move |end| &word[..end])
}
