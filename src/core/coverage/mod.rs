//! Lexical Coverage
//!
//! Checks whether target vocabulary items (words, phrases, phrasal verbs)
//! occur in a transcript, under lemma-level matching:
//! - `token`: lemmatizing tokenizer (possessive strip, lower-case, stemming)
//! - `lemma`: irregular-form table + Snowball English stemmer
//! - `matcher`: lemma position index with phrase and gapped lookups
//! - `engine`: per-target dispatch and the `compute_coverage` entry point
//! - `report`: missing-words list, ratio and transcript stats

pub mod config;
pub mod engine;
pub mod error;
pub mod lemma;
pub mod matcher;
pub mod report;
pub mod targets;
pub mod token;

pub use config::CoverageConfig;
pub use engine::{compute_coverage, EnglishCoverageEngine, MatchKind};
pub use error::{CoverageError, Result};
pub use matcher::LemmaIndex;
pub use report::{CoverageReport, TranscriptStats};
pub use targets::parse_target_list;
pub use token::{Token, Tokenizer};
