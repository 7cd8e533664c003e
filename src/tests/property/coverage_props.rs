//! Property-based tests for the coverage engine
//!
//! Tests invariants:
//! - One entry per distinct target, in first-occurrence order
//! - Same inputs give the same output
//! - Appending text never turns a covered target into a missing one
//! - Single-word coverage equals lemma membership
//! - Lemmatizing a lemma returns it unchanged
//! - Tokenization never panics and numbers tokens sequentially

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::coverage::lemma::Lemmatizer;
use crate::core::coverage::{compute_coverage, EnglishCoverageEngine, Tokenizer};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Words mixing regular, irregular, particle and function-word forms
const WORD_POOL: &[&str] = &[
    "run", "ran", "running", "sleep", "slept", "look", "looked", "up", "off", "this", "word",
    "big", "red", "car", "cars", "to", "the", "John's", "went", "go", "children", "child",
    "turn", "lights", "back", "very",
];

/// Inflections whose stem is itself an irregular form
const STEM_TRAPS: &[&str] = &["shots", "founded", "fells", "spats", "lights", "feeds"];

const SEPARATORS: &[&str] = &[" ", ", ", ". ", " - ", "\n"];

fn arb_word() -> impl Strategy<Value = String> {
    prop::sample::select(WORD_POOL).prop_map(str::to_string)
}

/// Transcript built from pool words with assorted separators
fn arb_transcript() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (arb_word(), prop::sample::select(SEPARATORS)),
        0..40,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect::<String>()
    })
}

/// Targets of one to three pool words, optionally "to"-prefixed or padded
fn arb_target() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(arb_word(), 1..=3),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(words, infinitive, padded)| {
            let mut target = words.join(" ");
            if infinitive {
                target = format!("to {target}");
            }
            if padded {
                target = format!("  {target} ");
            }
            target
        })
}

fn arb_targets() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_target(), 0..12)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_one_entry_per_distinct_target(
        transcript in arb_transcript(),
        targets in arb_targets(),
    ) {
        let coverage = compute_coverage(&transcript, &targets);

        let mut seen = HashSet::new();
        let expected: Vec<&String> = targets.iter().filter(|t| seen.insert(*t)).collect();
        let actual: Vec<&String> = coverage.keys().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_idempotent(
        transcript in arb_transcript(),
        targets in arb_targets(),
    ) {
        let first = compute_coverage(&transcript, &targets);
        let second = compute_coverage(&transcript, &targets);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_appending_text_keeps_coverage(
        transcript in arb_transcript(),
        extra in arb_transcript(),
        targets in arb_targets(),
    ) {
        let before = compute_coverage(&transcript, &targets);
        let after = compute_coverage(&format!("{transcript} {extra}"), &targets);

        for (target, present) in &before {
            if *present {
                prop_assert!(after[target], "{:?} lost coverage", target);
            }
        }
    }

    #[test]
    fn prop_single_word_is_lemma_membership(
        transcript in arb_transcript(),
        word in arb_word(),
    ) {
        let tokenizer = Tokenizer::new();
        let transcript_lemmas: HashSet<String> = tokenizer.lemmas(&transcript).into_iter().collect();
        let word_lemmas = tokenizer.lemmas(&word);
        prop_assume!(word_lemmas.len() == 1);

        let coverage = compute_coverage(&transcript, &[word.as_str()]);
        prop_assert_eq!(coverage[word.as_str()], transcript_lemmas.contains(&word_lemmas[0]));
    }

    #[test]
    fn prop_lemma_is_stable(
        word in prop_oneof![arb_word(), prop::sample::select(STEM_TRAPS).prop_map(str::to_string)],
    ) {
        let lemmatizer = Lemmatizer::english();
        for lemma in Tokenizer::new().lemmas(&word) {
            prop_assert_eq!(lemmatizer.lemmatize(&lemma), Some(lemma.clone()));
        }
    }

    #[test]
    fn prop_shared_engine_matches_fresh_engine(
        transcript in arb_transcript(),
        targets in arb_targets(),
    ) {
        let fresh = EnglishCoverageEngine::default();
        prop_assert_eq!(
            fresh.compute_coverage(&transcript, &targets),
            compute_coverage(&transcript, &targets)
        );
    }

    #[test]
    fn prop_tokenize_any_text(text in ".{0,200}") {
        let tokens = Tokenizer::new().tokenize(&text);
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.index, i);
            prop_assert!(token.start < token.end);
            prop_assert!(text.is_char_boundary(token.start));
            prop_assert!(text.is_char_boundary(token.end));
            prop_assert!(!token.lemma.is_empty());
        }
    }
}
