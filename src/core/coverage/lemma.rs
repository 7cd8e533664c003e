//! Lemmatization
//!
//! Reduces a lower-cased English word to the root form used for matching.
//! Irregular inflections are first mapped to their base form through a lookup
//! table, then everything goes through the Snowball English stemmer so that
//! regular inflections ("running", "looked", "cars") collapse as well.
//!
//! The two steps repeat until the word stops changing, so a lemma is always a
//! fixed point: stemming "shots" yields the irregular form "shot", which must
//! still reach "shoot" just like the bare target "shot" does.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};

/// Upper bound on table+stem rounds; real words settle in two or three.
const MAX_ROUNDS: usize = 8;

// ============================================================================
// Constants - Irregular Forms
// ============================================================================

/// Irregular verb forms as `(base, &[inflected forms])`.
///
/// Forms that are far more common as another part of speech ("left", "saw",
/// "rose", "bit", "ground", "wound", "bound", "lay") are deliberately absent.
const IRREGULAR_VERBS: &[(&str, &[&str])] = &[
    ("be", &["am", "is", "are", "was", "were", "been"]),
    ("have", &["has", "had"]),
    ("do", &["does", "did", "done"]),
    ("go", &["goes", "went", "gone"]),
    ("arise", &["arose", "arisen"]),
    ("awake", &["awoke", "awoken"]),
    ("beat", &["beaten"]),
    ("become", &["became"]),
    ("begin", &["began", "begun"]),
    ("bend", &["bent"]),
    ("bite", &["bitten"]),
    ("bleed", &["bled"]),
    ("blow", &["blew", "blown"]),
    ("break", &["broke", "broken"]),
    ("breed", &["bred"]),
    ("bring", &["brought"]),
    ("build", &["built"]),
    ("burn", &["burnt"]),
    ("buy", &["bought"]),
    ("catch", &["caught"]),
    ("choose", &["chose", "chosen"]),
    ("come", &["came"]),
    ("creep", &["crept"]),
    ("deal", &["dealt"]),
    ("dig", &["dug"]),
    ("draw", &["drew", "drawn"]),
    ("dream", &["dreamt"]),
    ("drink", &["drank", "drunk"]),
    ("drive", &["drove", "driven"]),
    ("eat", &["ate", "eaten"]),
    ("fall", &["fell", "fallen"]),
    ("feed", &["fed"]),
    ("feel", &["felt"]),
    ("fight", &["fought"]),
    ("find", &["found"]),
    ("flee", &["fled"]),
    ("fly", &["flew", "flown"]),
    ("forbid", &["forbade", "forbidden"]),
    ("forget", &["forgot", "forgotten"]),
    ("forgive", &["forgave", "forgiven"]),
    ("freeze", &["froze", "frozen"]),
    ("get", &["got", "gotten"]),
    ("give", &["gave", "given"]),
    ("grow", &["grew", "grown"]),
    ("hang", &["hung"]),
    ("hear", &["heard"]),
    ("hide", &["hid", "hidden"]),
    ("hold", &["held"]),
    ("keep", &["kept"]),
    ("kneel", &["knelt"]),
    ("know", &["knew", "known"]),
    ("lead", &["led"]),
    ("lean", &["leant"]),
    ("leap", &["leapt"]),
    ("learn", &["learnt"]),
    ("lend", &["lent"]),
    ("lie", &["lain"]),
    ("light", &["lit"]),
    ("lose", &["lost"]),
    ("make", &["made"]),
    ("mean", &["meant"]),
    ("meet", &["met"]),
    ("pay", &["paid"]),
    ("ride", &["rode", "ridden"]),
    ("ring", &["rang", "rung"]),
    ("rise", &["risen"]),
    ("run", &["ran"]),
    ("say", &["said", "says"]),
    ("see", &["seen"]),
    ("seek", &["sought"]),
    ("sell", &["sold"]),
    ("send", &["sent"]),
    ("shake", &["shook", "shaken"]),
    ("shine", &["shone"]),
    ("shoot", &["shot"]),
    ("show", &["shown"]),
    ("shrink", &["shrank", "shrunk"]),
    ("sing", &["sang", "sung"]),
    ("sink", &["sank", "sunk"]),
    ("sit", &["sat"]),
    ("sleep", &["slept"]),
    ("slide", &["slid"]),
    ("speak", &["spoke", "spoken"]),
    ("speed", &["sped"]),
    ("spend", &["spent"]),
    ("spin", &["spun"]),
    ("spit", &["spat"]),
    ("spring", &["sprang", "sprung"]),
    ("stand", &["stood"]),
    ("steal", &["stole", "stolen"]),
    ("stick", &["stuck"]),
    ("sting", &["stung"]),
    ("stink", &["stank", "stunk"]),
    ("strike", &["struck", "stricken"]),
    ("swear", &["swore", "sworn"]),
    ("sweep", &["swept"]),
    ("swim", &["swam", "swum"]),
    ("swing", &["swung"]),
    ("take", &["took", "taken"]),
    ("teach", &["taught"]),
    ("tear", &["tore", "torn"]),
    ("tell", &["told"]),
    ("think", &["thought"]),
    ("throw", &["threw", "thrown"]),
    ("understand", &["understood"]),
    ("wake", &["woke", "woken"]),
    ("wear", &["wore", "worn"]),
    ("weave", &["wove", "woven"]),
    ("weep", &["wept"]),
    ("win", &["won"]),
    ("write", &["wrote", "written"]),
];

/// Irregular plurals the stemmer cannot relate to their singular.
const IRREGULAR_NOUNS: &[(&str, &[&str])] = &[
    ("man", &["men"]),
    ("woman", &["women"]),
    ("child", &["children"]),
    ("foot", &["feet"]),
    ("tooth", &["teeth"]),
    ("mouse", &["mice"]),
    ("goose", &["geese"]),
    ("ox", &["oxen"]),
];

/// Inflected form -> base form.
static IRREGULAR_FORMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    IRREGULAR_VERBS
        .iter()
        .chain(IRREGULAR_NOUNS)
        .flat_map(|(base, forms)| forms.iter().map(move |form| (*form, *base)))
        .collect()
});

// ============================================================================
// Lemmatizer
// ============================================================================

/// Maps a lower-cased word to its lemma.
pub struct Lemmatizer {
    stemmer: Stemmer,
}

impl Lemmatizer {
    /// Create an English lemmatizer.
    pub fn english() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Lemmatize a single lower-cased word.
    ///
    /// Returns `None` when nothing is left after stemming. The result is
    /// stable: lemmatizing a lemma returns it unchanged.
    pub fn lemmatize(&self, word: &str) -> Option<String> {
        let mut current = word.to_string();
        for _ in 0..MAX_ROUNDS {
            let next = self.step(&current);
            if next.is_empty() {
                return None;
            }
            if next == current {
                break;
            }
            current = next;
        }
        Some(current)
    }

    /// One round: irregular table, then Snowball.
    fn step(&self, word: &str) -> String {
        self.stemmer.stem(Self::base_form(word)).into_owned()
    }

    /// Base form for irregular inflections, or the word itself.
    pub fn base_form(word: &str) -> &str {
        IRREGULAR_FORMS.get(word).copied().unwrap_or(word)
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_past_tense() {
        let lemmatizer = Lemmatizer::english();
        assert_eq!(lemmatizer.lemmatize("ran"), lemmatizer.lemmatize("run"));
        assert_eq!(lemmatizer.lemmatize("slept"), lemmatizer.lemmatize("sleep"));
        assert_eq!(lemmatizer.lemmatize("went"), lemmatizer.lemmatize("go"));
        assert_eq!(lemmatizer.lemmatize("written"), lemmatizer.lemmatize("writing"));
    }

    #[test]
    fn test_regular_inflections() {
        let lemmatizer = Lemmatizer::english();
        assert_eq!(lemmatizer.lemmatize("running").as_deref(), Some("run"));
        assert_eq!(lemmatizer.lemmatize("looked").as_deref(), Some("look"));
        assert_eq!(lemmatizer.lemmatize("cars").as_deref(), Some("car"));
    }

    #[test]
    fn test_irregular_plurals() {
        let lemmatizer = Lemmatizer::english();
        assert_eq!(lemmatizer.lemmatize("children"), lemmatizer.lemmatize("child"));
        assert_eq!(lemmatizer.lemmatize("feet"), lemmatizer.lemmatize("foot"));
    }

    #[test]
    fn test_ambiguous_forms_untouched() {
        assert_eq!(Lemmatizer::base_form("left"), "left");
        assert_eq!(Lemmatizer::base_form("saw"), "saw");
    }

    #[test]
    fn test_stemmed_output_reaches_irregular_base() {
        let lemmatizer = Lemmatizer::english();
        for (plain, inflected) in [
            ("shot", "shots"),
            ("found", "founded"),
            ("fell", "fells"),
            ("spat", "spats"),
        ] {
            assert_eq!(
                lemmatizer.lemmatize(plain),
                lemmatizer.lemmatize(inflected),
                "{plain} vs {inflected}"
            );
        }
        assert_eq!(lemmatizer.lemmatize("shots").as_deref(), Some("shoot"));
    }

    #[test]
    fn test_lemma_is_fixed_point() {
        let lemmatizer = Lemmatizer::english();
        for word in ["shots", "founded", "fells", "running", "generously", "children"] {
            let lemma = lemmatizer.lemmatize(word).unwrap();
            assert_eq!(lemmatizer.lemmatize(&lemma).as_deref(), Some(lemma.as_str()));
        }
    }

    #[test]
    fn test_plural_of_irregular_form_is_covered() {
        let coverage = crate::core::coverage::compute_coverage(
            "He took two shots. They founded a school.",
            &["shot", "found", "shots", "to found"],
        );
        assert!(coverage.values().all(|present| *present), "{coverage:?}");
    }

    #[test]
    fn test_no_form_listed_twice() {
        let total: usize = IRREGULAR_VERBS
            .iter()
            .chain(IRREGULAR_NOUNS)
            .map(|(_, forms)| forms.len())
            .sum();
        assert_eq!(IRREGULAR_FORMS.len(), total);
    }
}
