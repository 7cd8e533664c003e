//! Coverage Report
//!
//! Shapes engine output for transcript validation responses: per-target
//! coverage, the missing-words list, and rough transcript statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::engine::{EnglishCoverageEngine, MatchKind};

/// Size and speaking-time estimate for a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptStats {
    /// Number of word tokens
    pub word_count: usize,
    /// Estimated speaking time, rounded up to whole seconds
    pub estimated_duration_secs: u64,
}

impl TranscriptStats {
    /// Estimate stats from a word count and speaking rate.
    pub fn new(word_count: usize, speaking_rate_wpm: u32) -> Self {
        let rate = u64::from(speaking_rate_wpm.max(1));
        let words = word_count as u64;
        Self {
            word_count,
            estimated_duration_secs: (words * 60).div_ceil(rate),
        }
    }
}

/// Coverage of a target vocabulary list by one transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Target -> present, in first-occurrence order
    pub coverage: IndexMap<String, bool>,
    /// Targets not found, in input order
    pub missing: Vec<String>,
    /// Number of distinct targets found
    pub covered: usize,
    /// Number of distinct targets
    pub total: usize,
    /// `covered / total`, 1.0 for an empty target list
    pub ratio: f64,
    pub stats: TranscriptStats,
    /// How each target matched, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<IndexMap<String, MatchKind>>,
}

impl CoverageReport {
    /// Build a report for the transcript and targets.
    pub fn build<S: AsRef<str>>(
        engine: &EnglishCoverageEngine,
        transcript: &str,
        targets: &[S],
    ) -> Self {
        let index = engine.index(transcript);
        let matches = engine.match_targets(&index, targets);
        let stats = TranscriptStats::new(index.len(), engine.speaking_rate_wpm());
        Self::from_matches(matches, stats)
    }

    /// Build a report that also carries the match kind of every target.
    pub fn build_explained<S: AsRef<str>>(
        engine: &EnglishCoverageEngine,
        transcript: &str,
        targets: &[S],
    ) -> Self {
        let index = engine.index(transcript);
        let matches = engine.match_targets(&index, targets);
        let stats = TranscriptStats::new(index.len(), engine.speaking_rate_wpm());
        let mut report = Self::from_matches(matches.clone(), stats);
        report.matches = Some(matches);
        report
    }

    fn from_matches(matches: IndexMap<String, MatchKind>, stats: TranscriptStats) -> Self {
        let coverage: IndexMap<String, bool> = matches
            .into_iter()
            .map(|(target, kind)| (target, kind.is_present()))
            .collect();
        let missing: Vec<String> = coverage
            .iter()
            .filter(|(_, present)| !**present)
            .map(|(target, _)| target.clone())
            .collect();
        let total = coverage.len();
        let covered = total - missing.len();
        let ratio = if total == 0 {
            1.0
        } else {
            covered as f64 / total as f64
        };

        Self {
            coverage,
            missing,
            covered,
            total,
            ratio,
            stats,
            matches: None,
        }
    }

    /// Whether every target was found.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
