//! Tokenizer
//!
//! Turns free text into an ordered stream of lemmatized tokens:
//! 1. Segment into words (letters/digits, internal apostrophes)
//! 2. NFKC-normalize and strip the English possessive (`'s`, `'`)
//! 3. Lower-case
//! 4. Lemmatize (irregular table, then Snowball stemming)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::lemma::Lemmatizer;

/// Word segmentation: runs of letters, marks and digits, joined by internal
/// apostrophes, with an optional trailing apostrophe ("students'").
static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{M}\p{N}]+(?:['’＇][\p{L}\p{M}\p{N}]+)*['’＇]?")
        .expect("word pattern is valid")
});

/// A lemmatized word from a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Normalized root form
    pub lemma: String,
    /// Byte offset of the surface word in the source text
    pub start: usize,
    /// Byte offset one past the end of the surface word
    pub end: usize,
    /// Ordinal position in the token stream
    pub index: usize,
}

/// Lemmatizing tokenizer shared by transcripts and target items.
///
/// Holds no per-call state; every call walks its own match iterator, so one
/// tokenizer can serve many threads at once.
#[derive(Default)]
pub struct Tokenizer {
    lemmatizer: Lemmatizer,
}

impl Tokenizer {
    /// Create an English tokenizer.
    pub fn new() -> Self {
        Self {
            lemmatizer: Lemmatizer::english(),
        }
    }

    /// Tokenize text, keeping offsets and ordinal positions.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        WORD_RE
            .find_iter(text)
            .filter_map(|m| {
                self.lemma_for(m.as_str())
                    .map(|lemma| (lemma, m.start(), m.end()))
            })
            .enumerate()
            .map(|(index, (lemma, start, end))| Token {
                lemma,
                start,
                end,
                index,
            })
            .collect()
    }

    /// Tokenize text into lemmas only.
    pub fn lemmas(&self, text: &str) -> Vec<String> {
        WORD_RE
            .find_iter(text)
            .filter_map(|m| self.lemma_for(m.as_str()))
            .collect()
    }

    /// Run one surface word through the normalization pipeline.
    fn lemma_for(&self, word: &str) -> Option<String> {
        let normalized: String = word.nfkc().collect();
        let stripped = strip_possessive(&normalized);
        if stripped.is_empty() {
            return None;
        }
        self.lemmatizer.lemmatize(&stripped.to_lowercase())
    }
}

/// Strip a trailing English possessive: "John's" -> "John", "students'" -> "students".
pub fn strip_possessive(word: &str) -> &str {
    if let Some(base) = word
        .strip_suffix(|c: char| c == 's' || c == 'S')
        .and_then(|rest| rest.strip_suffix(is_apostrophe))
    {
        return base;
    }
    word.strip_suffix(is_apostrophe).unwrap_or(word)
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '’')
}
