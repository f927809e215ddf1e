//! Phrase catalogs: the immutable pool a game draws its board from.

pub mod manifest;
pub mod phrase;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::rng::{shuffled, RandomSource};
use crate::error::CatalogError;
pub use phrase::{Phrase, PhraseKind};

/// Largest magnitude a phrase weight may have.
pub const MAX_PHRASE_WEIGHT: i32 = 1_000;

/// A titled group of phrases shown together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub phrases: Vec<Phrase>,
}

impl Section {
    pub fn new(title: impl Into<String>, description: impl Into<String>, phrases: Vec<Phrase>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            phrases,
        }
    }
}

/// An ordered, validated set of phrases with unique labels,
/// optionally partitioned into sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    phrases: Vec<Phrase>,
    sections: Vec<Section>,
}

impl Catalog {
    /// Build an unsectioned catalog.
    pub fn new(phrases: Vec<Phrase>) -> Result<Self, CatalogError> {
        validate(&phrases)?;
        Ok(Self {
            phrases,
            sections: Vec::new(),
        })
    }

    /// Build a catalog from sections. The flat list is the sections' phrases
    /// in order; labels must be unique across all sections.
    pub fn sectioned(sections: Vec<Section>) -> Result<Self, CatalogError> {
        let phrases: Vec<Phrase> = sections
            .iter()
            .flat_map(|s| s.phrases.iter().cloned())
            .collect();
        validate(&phrases)?;
        Ok(Self { phrases, sections })
    }

    /// Flat list in catalog order.
    pub fn all_phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Section groups. Empty for unsectioned catalogs.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_sectioned(&self) -> bool {
        !self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&Phrase> {
        self.phrases.iter().find(|p| p.label == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Phrases flagged optimal, in catalog order.
    pub fn optimal_phrases(&self) -> impl Iterator<Item = &Phrase> {
        self.phrases.iter().filter(|p| p.optimal)
    }

    /// A fresh permutation of the flat list. The catalog itself never reorders.
    pub fn shuffle(&self, rng: &mut dyn RandomSource) -> Vec<Phrase> {
        shuffled(&self.phrases, rng)
    }
}

fn validate(phrases: &[Phrase]) -> Result<(), CatalogError> {
    check_phrases(phrases).inspect_err(|err| log::warn!("catalog rejected: {err}"))
}

fn check_phrases(phrases: &[Phrase]) -> Result<(), CatalogError> {
    if phrases.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen = HashSet::with_capacity(phrases.len());
    for p in phrases {
        if !seen.insert(p.label.as_str()) {
            return Err(CatalogError::DuplicateLabel(p.label.clone()));
        }
        if p.weight.unsigned_abs() > MAX_PHRASE_WEIGHT as u32 {
            return Err(CatalogError::WeightOutOfRange {
                label: p.label.clone(),
                weight: p.weight,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;
    use proptest::prelude::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Phrase::relevant("Define the incident", 25, "incident").optimal(),
            Phrase::relevant("Specify environment", 25, "environment").optimal(),
            Phrase::helpful("Use numbered steps", 10, "style"),
            Phrase::weak("Apologize first", 4, "style"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_labels() {
        let err = Catalog::new(vec![
            Phrase::helpful("Same", 1, "a"),
            Phrase::weak("Same", 2, "b"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateLabel(l) if l == "Same"));
    }

    #[test]
    fn rejects_duplicates_across_sections() {
        let err = Catalog::sectioned(vec![
            Section::new("A", "", vec![Phrase::helpful("X", 1, "a")]),
            Section::new("B", "", vec![Phrase::helpful("X", 1, "b")]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateLabel(_)));
    }

    #[test]
    fn rejects_weights_past_the_limit() {
        let err = Catalog::new(vec![
            Phrase::relevant("Huge", i32::MAX, "plan"),
            Phrase::relevant("Fine", 25, "plan"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::WeightOutOfRange { ref label, weight } if label == "Huge" && weight == i32::MAX));

        assert!(Catalog::new(vec![Phrase::distractor("Floor", i32::MIN, "risky")]).is_err());
        assert!(Catalog::new(vec![
            Phrase::relevant("Top", MAX_PHRASE_WEIGHT, "plan"),
            Phrase::distractor("Bottom", -MAX_PHRASE_WEIGHT, "risky"),
        ])
        .is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn sections_flatten_in_order() {
        let cat = Catalog::sectioned(vec![
            Section::new("Framing", "What is wrong", vec![
                Phrase::relevant("a", 1, "incident"),
                Phrase::relevant("b", 1, "incident"),
            ]),
            Section::new("Style", "How to answer", vec![Phrase::helpful("c", 1, "style")]),
        ])
        .unwrap();
        let labels: Vec<_> = cat.all_phrases().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "c"]);
        assert!(cat.is_sectioned());
        assert_eq!(cat.sections()[1].title, "Style");
    }

    #[test]
    fn lookup_and_optimal() {
        let cat = sample();
        assert!(cat.contains("Use numbered steps"));
        assert!(cat.get("nope").is_none());
        assert_eq!(cat.optimal_phrases().count(), 2);
    }

    #[test]
    fn shuffle_leaves_source_untouched() {
        let cat = sample();
        let before = cat.clone();
        let _ = cat.shuffle(&mut Rng::new(99));
        assert_eq!(cat, before);
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(seed in any::<u64>(), n in 1usize..40) {
            let phrases: Vec<Phrase> = (0..n)
                .map(|i| Phrase::helpful(format!("phrase {i}"), i as i32, "style"))
                .collect();
            let cat = Catalog::new(phrases).unwrap();
            let out = cat.shuffle(&mut Rng::new(seed));
            prop_assert_eq!(out.len(), cat.len());
            let mut a: Vec<_> = out.iter().map(|p| p.label.clone()).collect();
            let mut b: Vec<_> = cat.all_phrases().iter().map(|p| p.label.clone()).collect();
            a.sort();
            b.sort();
            prop_assert_eq!(a, b);
        }
    }
}
