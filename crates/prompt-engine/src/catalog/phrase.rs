use serde::{Deserialize, Serialize};

/// Role a phrase plays in a prompt. Closed set, shared by every catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseKind {
    /// Directly addresses the task.
    Relevant,
    /// Improves structure or tone.
    Helpful,
    /// Asks the assistant to clarify first.
    Clarifying,
    /// Not wrong, just low impact.
    Weak,
    /// Actively hurts the prompt.
    Distractor,
}

impl PhraseKind {
    pub const ALL: [PhraseKind; 5] = [
        PhraseKind::Relevant,
        PhraseKind::Helpful,
        PhraseKind::Clarifying,
        PhraseKind::Weak,
        PhraseKind::Distractor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhraseKind::Relevant => "relevant",
            PhraseKind::Helpful => "helpful",
            PhraseKind::Clarifying => "clarifying",
            PhraseKind::Weak => "weak",
            PhraseKind::Distractor => "distractor",
        }
    }
}

/// A selectable phrase. The label is its identity within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub label: String,
    /// Signed score contribution.
    pub weight: i32,
    /// Free-text tag used for coverage bonuses (e.g. "incident", "style").
    pub category: String,
    #[serde(rename = "type")]
    pub kind: PhraseKind,
    /// Part of the single ideal answer set.
    #[serde(default)]
    pub optimal: bool,
}

impl Phrase {
    pub fn new(
        label: impl Into<String>,
        weight: i32,
        category: impl Into<String>,
        kind: PhraseKind,
    ) -> Self {
        Self {
            label: label.into(),
            weight,
            category: category.into(),
            kind,
            optimal: false,
        }
    }

    /// Shorthand for [`PhraseKind::Relevant`].
    pub fn relevant(label: impl Into<String>, weight: i32, category: impl Into<String>) -> Self {
        Self::new(label, weight, category, PhraseKind::Relevant)
    }

    /// Shorthand for [`PhraseKind::Helpful`].
    pub fn helpful(label: impl Into<String>, weight: i32, category: impl Into<String>) -> Self {
        Self::new(label, weight, category, PhraseKind::Helpful)
    }

    /// Shorthand for [`PhraseKind::Clarifying`].
    pub fn clarifying(label: impl Into<String>, weight: i32, category: impl Into<String>) -> Self {
        Self::new(label, weight, category, PhraseKind::Clarifying)
    }

    /// Shorthand for [`PhraseKind::Weak`].
    pub fn weak(label: impl Into<String>, weight: i32, category: impl Into<String>) -> Self {
        Self::new(label, weight, category, PhraseKind::Weak)
    }

    /// Shorthand for [`PhraseKind::Distractor`].
    pub fn distractor(label: impl Into<String>, weight: i32, category: impl Into<String>) -> Self {
        Self::new(label, weight, category, PhraseKind::Distractor)
    }

    /// Mark this phrase as part of the ideal answer.
    pub fn optimal(mut self) -> Self {
        self.optimal = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_not_optimal() {
        let p = Phrase::helpful("Use numbered steps", 10, "style");
        assert_eq!(p.kind, PhraseKind::Helpful);
        assert!(!p.optimal);
        assert!(p.optimal().optimal);
    }

    #[test]
    fn deserializes_type_field_and_missing_optimal() {
        let json = r#"{ "label": "Be vague", "weight": -8, "category": "distractor", "type": "distractor" }"#;
        let p: Phrase = serde_json::from_str(json).unwrap();
        assert_eq!(p.kind, PhraseKind::Distractor);
        assert_eq!(p.weight, -8);
        assert!(!p.optimal);
    }

    #[test]
    fn kind_names_match_serde() {
        for kind in PhraseKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
