//! Coverage Configuration

use serde::{Deserialize, Serialize};

/// Default maximum number of tokens allowed between a verb and its particle.
pub const DEFAULT_MAX_GAP: usize = 3;

/// Default speaking rate used for transcript duration estimates.
pub const DEFAULT_SPEAKING_RATE_WPM: u32 = 150;

/// Particles that turn a two-word target into a phrasal verb.
pub const DEFAULT_PARTICLES: &[&str] = &[
    "up", "off", "out", "in", "into", "on", "over", "away", "back", "down", "through", "around",
    "after", "for", "from",
];

/// Tunables for an [`EnglishCoverageEngine`](super::EnglishCoverageEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    /// Maximum tokens between a phrasal verb and its particle.
    pub max_gap: usize,
    /// Phrasal-verb particles (single words).
    pub particles: Vec<String>,
    /// Words per minute for duration estimates.
    pub speaking_rate_wpm: u32,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            max_gap: DEFAULT_MAX_GAP,
            particles: DEFAULT_PARTICLES.iter().map(|p| p.to_string()).collect(),
            speaking_rate_wpm: DEFAULT_SPEAKING_RATE_WPM,
        }
    }
}
