//! Transcript Matching
//!
//! Lemma position index over a tokenized transcript, with the three lookups
//! the coverage engine dispatches to: single lemma membership, contiguous
//! phrase match, and gapped phrasal-verb match.

use std::collections::HashMap;

use super::token::Token;

/// Tokens of one transcript plus a lemma -> positions index.
#[derive(Debug, Clone, Default)]
pub struct LemmaIndex {
    tokens: Vec<Token>,
    positions: HashMap<String, Vec<usize>>,
}

impl LemmaIndex {
    /// Build the index from a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut positions: HashMap<String, Vec<usize>> = HashMap::new();
        for token in &tokens {
            positions
                .entry(token.lemma.clone())
                .or_default()
                .push(token.index);
        }
        Self { tokens, positions }
    }

    /// Number of tokens in the transcript.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the transcript produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in transcript order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Ordinal positions of a lemma, in ascending order.
    pub fn positions(&self, lemma: &str) -> &[usize] {
        self.positions.get(lemma).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the lemma occurs anywhere in the transcript.
    pub fn contains(&self, lemma: &str) -> bool {
        self.positions.contains_key(lemma)
    }

    /// Whether the lemmas occur as an unbroken run of tokens.
    pub fn contains_phrase<S: AsRef<str>>(&self, phrase: &[S]) -> bool {
        if phrase.is_empty() || phrase.len() > self.tokens.len() {
            return false;
        }
        self.tokens.windows(phrase.len()).any(|window| {
            window
                .iter()
                .zip(phrase)
                .all(|(token, lemma)| token.lemma == lemma.as_ref())
        })
    }

    /// Whether `particle` follows some occurrence of `verb` with at most
    /// `max_gap` tokens in between.
    pub fn contains_gapped(&self, verb: &str, particle: &str, max_gap: usize) -> bool {
        let Some(last) = self.tokens.len().checked_sub(1) else {
            return false;
        };
        self.positions(verb).iter().any(|&pos| {
            let from = pos + 1;
            let to = last.min(pos.saturating_add(1).saturating_add(max_gap));
            from <= to && self.tokens[from..=to].iter().any(|t| t.lemma == particle)
        })
    }
}
