//! Target Items
//!
//! Normalization of caller-supplied vocabulary items before matching.

use super::token::Tokenizer;

/// Infinitive marker dropped from multi-word targets ("to run" -> "run").
const INFINITIVE_MARKER: &str = "to";

/// Lemmatize a target item, dropping a leading infinitive marker.
///
/// A lone "to" is kept so the word itself can still be looked up.
pub fn target_lemmas(tokenizer: &Tokenizer, target: &str) -> Vec<String> {
    let mut lemmas = tokenizer.lemmas(target.trim());
    if lemmas.len() >= 2 && lemmas[0] == INFINITIVE_MARKER {
        lemmas.remove(0);
    }
    lemmas
}

/// Split a vocabulary list on newlines and commas into trimmed, non-empty items.
///
/// Order is preserved and duplicates are kept; the engine collapses them.
pub fn parse_target_list(text: &str) -> Vec<String> {
    text.split(|c| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
