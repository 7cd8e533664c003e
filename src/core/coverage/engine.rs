//! English Coverage Engine
//!
//! Decides, for each target word or phrase, whether it occurs in a transcript:
//! 1. Lemmatize the target (dropping a leading "to")
//! 2. Single lemma: membership in the transcript's lemma index
//! 3. Several lemmas: contiguous phrase match
//! 4. Verb + particle that did not match contiguously: gapped phrasal-verb match

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::config::{
    CoverageConfig, DEFAULT_MAX_GAP, DEFAULT_PARTICLES, DEFAULT_SPEAKING_RATE_WPM,
};
use super::error::{CoverageError, Result};
use super::matcher::LemmaIndex;
use super::targets::target_lemmas;
use super::token::Tokenizer;

static DEFAULT_ENGINE: Lazy<EnglishCoverageEngine> = Lazy::new(EnglishCoverageEngine::default);

/// How a target was found in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Single lemma present
    Single,
    /// All lemmas present as an unbroken run
    Contiguous,
    /// Phrasal verb with its particle a few tokens later
    Gapped,
    /// Not found
    Absent,
}

impl MatchKind {
    /// Whether the target counts as covered.
    pub fn is_present(self) -> bool {
        self != Self::Absent
    }
}

/// Lexical coverage engine for English transcripts.
///
/// Immutable after construction and safe to share across threads.
pub struct EnglishCoverageEngine {
    tokenizer: Tokenizer,
    particles: HashSet<String>,
    max_gap: usize,
    speaking_rate_wpm: u32,
}

impl EnglishCoverageEngine {
    /// Build an engine from configuration.
    ///
    /// Particles are lemmatized with the transcript pipeline; each must reduce
    /// to exactly one lemma.
    pub fn new(config: &CoverageConfig) -> Result<Self> {
        if config.speaking_rate_wpm == 0 {
            return Err(CoverageError::InvalidConfig(
                "speaking_rate_wpm must be greater than zero".to_string(),
            ));
        }

        let tokenizer = Tokenizer::new();
        let mut particles = HashSet::with_capacity(config.particles.len());
        for particle in &config.particles {
            let mut lemmas = tokenizer.lemmas(particle);
            if lemmas.len() != 1 {
                return Err(CoverageError::InvalidConfig(format!(
                    "particle {particle:?} must be a single word"
                )));
            }
            particles.extend(lemmas.pop());
        }

        info!(
            max_gap = config.max_gap,
            particles = particles.len(),
            "Coverage engine ready"
        );

        Ok(Self {
            tokenizer,
            particles,
            max_gap: config.max_gap,
            speaking_rate_wpm: config.speaking_rate_wpm,
        })
    }

    /// Maximum tokens allowed between a phrasal verb and its particle.
    pub fn max_gap(&self) -> usize {
        self.max_gap
    }

    /// Configured speaking rate in words per minute.
    pub fn speaking_rate_wpm(&self) -> u32 {
        self.speaking_rate_wpm
    }

    /// Whether a lemma is a phrasal-verb particle.
    pub fn is_particle(&self, lemma: &str) -> bool {
        self.particles.contains(lemma)
    }

    /// The tokenizer used for transcripts and targets.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize and index a transcript.
    pub fn index(&self, transcript: &str) -> LemmaIndex {
        LemmaIndex::new(self.tokenizer.tokenize(transcript))
    }

    /// Presence of each distinct target in the transcript, in first-occurrence order.
    pub fn compute_coverage<S: AsRef<str>>(
        &self,
        transcript: &str,
        targets: &[S],
    ) -> IndexMap<String, bool> {
        self.explain(transcript, targets)
            .into_iter()
            .map(|(target, kind)| (target, kind.is_present()))
            .collect()
    }

    /// Like [`compute_coverage`](Self::compute_coverage), reporting how each target matched.
    pub fn explain<S: AsRef<str>>(
        &self,
        transcript: &str,
        targets: &[S],
    ) -> IndexMap<String, MatchKind> {
        let index = self.index(transcript);
        let matches = self.match_targets(&index, targets);
        debug!(
            tokens = index.len(),
            targets = matches.len(),
            covered = matches.values().filter(|k| k.is_present()).count(),
            "Computed coverage"
        );
        matches
    }

    /// Match targets against an already indexed transcript.
    pub fn match_targets<S: AsRef<str>>(
        &self,
        index: &LemmaIndex,
        targets: &[S],
    ) -> IndexMap<String, MatchKind> {
        let mut matches = IndexMap::with_capacity(targets.len());
        for target in targets {
            let target = target.as_ref();
            if matches.contains_key(target) {
                continue;
            }
            let kind = self.classify(index, target);
            matches.insert(target.to_string(), kind);
        }
        matches
    }

    /// Decide how (or whether) one target occurs in the indexed transcript.
    pub fn classify(&self, index: &LemmaIndex, target: &str) -> MatchKind {
        let lemmas = target_lemmas(&self.tokenizer, target);
        let kind = match lemmas.as_slice() {
            [] => MatchKind::Absent,
            [lemma] => {
                if index.contains(lemma) {
                    MatchKind::Single
                } else {
                    MatchKind::Absent
                }
            }
            phrase if index.contains_phrase(phrase) => MatchKind::Contiguous,
            [verb, particle]
                if self.is_particle(particle)
                    && index.contains_gapped(verb, particle, self.max_gap) =>
            {
                MatchKind::Gapped
            }
            _ => MatchKind::Absent,
        };
        trace!(item = target, ?lemmas, ?kind, "Classified target");
        kind
    }
}

impl Default for EnglishCoverageEngine {
    fn default() -> Self {
        let tokenizer = Tokenizer::new();
        let particles = DEFAULT_PARTICLES
            .iter()
            .flat_map(|p| tokenizer.lemmas(p))
            .collect();
        Self {
            tokenizer,
            particles,
            max_gap: DEFAULT_MAX_GAP,
            speaking_rate_wpm: DEFAULT_SPEAKING_RATE_WPM,
        }
    }
}

impl fmt::Debug for EnglishCoverageEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnglishCoverageEngine")
            .field("max_gap", &self.max_gap)
            .field("particles", &self.particles.len())
            .field("speaking_rate_wpm", &self.speaking_rate_wpm)
            .finish_non_exhaustive()
    }
}

/// Compute coverage with the default engine configuration.
pub fn compute_coverage<S: AsRef<str>>(transcript: &str, targets: &[S]) -> IndexMap<String, bool> {
    DEFAULT_ENGINE.compute_coverage(transcript, targets)
}
