//! lexcover - English lexical coverage engine
//!
//! Checks whether the target vocabulary of a lesson (words, phrases and
//! phrasal verbs) occurs in a generated or teacher-submitted transcript.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

pub use crate::core::coverage::{
    compute_coverage, CoverageConfig, CoverageError, CoverageReport, EnglishCoverageEngine,
    MatchKind,
};
