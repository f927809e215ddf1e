//! Coaching feedback: a message ladder over the result, and the optimal
//! phrases a player left on the board.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{Catalog, Phrase};
use crate::scoring::GameResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachTier {
    pub min_percentage: i32,
    pub message: String,
}

/// Ordered message tiers. Checked top-down: the perfect message (if any),
/// then tiers from the highest threshold, then the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachLadder {
    #[serde(default)]
    pub perfect: Option<String>,
    #[serde(deserialize_with = "sorted_tiers")]
    tiers: Vec<CoachTier>,
    pub fallback: String,
}

impl CoachLadder {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            perfect: None,
            tiers: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Message shown when a full round is all optimal picks.
    pub fn with_perfect(mut self, message: impl Into<String>) -> Self {
        self.perfect = Some(message.into());
        self
    }

    /// Add a tier reached at `min_percentage` or above.
    pub fn tier(mut self, min_percentage: i32, message: impl Into<String>) -> Self {
        self.tiers.push(CoachTier {
            min_percentage,
            message: message.into(),
        });
        sort_descending(&mut self.tiers);
        self
    }

    pub fn tiers(&self) -> &[CoachTier] {
        &self.tiers
    }

    pub fn message(&self, result: &GameResult) -> &str {
        if let Some(perfect) = &self.perfect {
            if result.is_perfect() {
                return perfect;
            }
        }
        self.tiers
            .iter()
            .find(|t| result.percentage >= t.min_percentage)
            .map(|t| t.message.as_str())
            .unwrap_or(&self.fallback)
    }

    /// Ladder for games with a single optimal answer set.
    pub fn flat_optimal() -> Self {
        Self::new("Keep practicing! Focus on the goal, environment, context, and plan.")
            .with_perfect("Perfect! You found the optimal prompt combination!")
            .tier(90, "Excellent! You're very close to the perfect prompt.")
            .tier(75, "Great job! Strong prompt with room for refinement.")
            .tier(50, "Good start. Try to identify the highest-impact phrases.")
    }

    /// Ladder for category-coverage games.
    pub fn category_coverage() -> Self {
        Self::new("Needs work. Replace distractors and include core elements.")
            .tier(90, "Excellent: clear framing, evidence, constraints, and a safe plan.")
            .tier(75, "Strong craft; small refinements could boost clarity.")
            .tier(50, "Decent. Cover the essentials and remove risky language.")
    }
}

fn sort_descending(tiers: &mut [CoachTier]) {
    tiers.sort_by(|a, b| b.min_percentage.cmp(&a.min_percentage));
}

fn sorted_tiers<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<CoachTier>, D::Error> {
    let mut tiers = Vec::<CoachTier>::deserialize(deserializer)?;
    sort_descending(&mut tiers);
    Ok(tiers)
}

impl Default for CoachLadder {
    fn default() -> Self {
        Self::flat_optimal()
    }
}

/// Optimal phrases missed by a selection, in catalog order.
pub fn missed_optimal<'a>(selection: &[Phrase], catalog: &'a Catalog) -> Vec<&'a Phrase> {
    let chosen: HashSet<&str> = selection.iter().map(|p| p.label.as_str()).collect();
    catalog
        .optimal_phrases()
        .filter(|p| !chosen.contains(p.label.as_str()))
        .collect()
}

/// "Next time, consider" entries sharing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedGroup {
    pub category: String,
    /// Category with its first letter upper-cased.
    pub heading: String,
    pub phrases: Vec<Phrase>,
}

/// [`missed_optimal`] grouped by category, groups ordered by first appearance.
pub fn missed_by_category(selection: &[Phrase], catalog: &Catalog) -> Vec<MissedGroup> {
    let mut groups: Vec<MissedGroup> = Vec::new();
    for p in missed_optimal(selection, catalog) {
        match groups.iter_mut().find(|g| g.category == p.category) {
            Some(group) => group.phrases.push(p.clone()),
            None => groups.push(MissedGroup {
                category: p.category.clone(),
                heading: capitalize(&p.category),
                phrases: vec![p.clone()],
            }),
        }
    }
    groups
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{score, ScoringConfig};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Phrase::relevant("Define the incident", 25, "incident").optimal(),
            Phrase::relevant("Summarize symptoms", 20, "symptoms"),
            Phrase::relevant("Specify environment", 25, "environment").optimal(),
            Phrase::relevant("State constraints", 25, "constraints").optimal(),
            Phrase::helpful("Use numbered steps", 10, "style"),
            Phrase::relevant("Provide a safe plan", 25, "plan").optimal(),
            Phrase::weak("Apologize first", 4, "style"),
            Phrase::weak("Thank the assistant", 3, "style"),
            Phrase::weak("Restart first", 2, "plan"),
            Phrase::weak("Say you are frustrated", 3, "style"),
        ])
        .unwrap()
    }

    fn pick(cat: &Catalog, labels: &[&str]) -> Vec<Phrase> {
        labels.iter().map(|l| cat.get(l).unwrap().clone()).collect()
    }

    #[test]
    fn perfect_beats_percentage() {
        let cat = catalog();
        let sel: Vec<Phrase> = cat.optimal_phrases().cloned().collect();
        let r = score(&sel, 10, &ScoringConfig::default());
        assert_eq!(
            CoachLadder::flat_optimal().message(&r),
            "Perfect! You found the optimal prompt combination!"
        );
        // Even slow, four optimal picks are still perfect.
        let slow = score(&sel, 500, &ScoringConfig::default());
        assert_eq!(slow.percentage, 83);
        assert!(CoachLadder::flat_optimal().message(&slow).starts_with("Perfect"));
    }

    #[test]
    fn lone_optimal_pick_gets_no_perfect_message() {
        let cat = catalog();
        let r = score(&pick(&cat, &["Define the incident"]), 5, &ScoringConfig::default());
        // 25 + 20 => 45/120
        assert_eq!(r.percentage, 38);
        assert_eq!(CoachLadder::flat_optimal().message(&r), CoachLadder::flat_optimal().fallback);
    }

    #[test]
    fn tiers_checked_from_the_top() {
        let cat = catalog();
        let ladder = CoachLadder::flat_optimal();
        let config = ScoringConfig::default();

        // 25+25+25+20 = 95, +20 => 115/120 = 96%
        let r = score(&pick(&cat, &["Define the incident", "Specify environment", "State constraints", "Summarize symptoms"]), 0, &config);
        assert_eq!(r.percentage, 96);
        assert!(ladder.message(&r).starts_with("Excellent"));

        // 25+20+10+4 = 59, +20 => 79/120 = 66%
        let r = score(&pick(&cat, &["Define the incident", "Summarize symptoms", "Use numbered steps", "Apologize first"]), 0, &config);
        assert_eq!(r.percentage, 66);
        assert!(ladder.message(&r).starts_with("Good start"));
    }

    #[test]
    fn low_scores_get_fallback() {
        let cat = catalog();
        let sel = pick(&cat, &["Apologize first", "Thank the assistant", "Restart first", "Say you are frustrated"]);
        let r = score(&sel, 5, &ScoringConfig::default());
        assert_eq!(r.optimal_count, 0);
        assert_eq!(CoachLadder::flat_optimal().message(&r), CoachLadder::flat_optimal().fallback);
    }

    #[test]
    fn tiers_sort_regardless_of_insert_order() {
        let ladder = CoachLadder::new("low").tier(50, "mid").tier(90, "top");
        assert_eq!(ladder.tiers()[0].min_percentage, 90);
    }

    #[test]
    fn ladder_from_json_checks_highest_tier_first() {
        let json = r#"{
            "tiers": [
                { "min_percentage": 50, "message": "mid" },
                { "min_percentage": 90, "message": "top" }
            ],
            "fallback": "low"
        }"#;
        let ladder: CoachLadder = serde_json::from_str(json).unwrap();
        assert_eq!(ladder.tiers()[0].min_percentage, 90);

        let sel: Vec<Phrase> = catalog().optimal_phrases().cloned().collect();
        let r = score(&sel, 0, &ScoringConfig::default());
        assert_eq!(r.percentage, 100);
        assert_eq!(ladder.message(&r), "top");

        let back: CoachLadder = serde_json::from_str(&serde_json::to_string(&ladder).unwrap()).unwrap();
        assert_eq!(back, ladder);
    }

    #[test]
    fn coverage_ladder_has_no_perfect_tier() {
        let config = ScoringConfig::category_coverage();
        let sel: Vec<Phrase> = ["incident", "symptoms", "environment", "plan"]
            .iter()
            .map(|c| Phrase::relevant(format!("{c} phrase"), 25, *c).optimal())
            .collect();
        let r = score(&sel, 0, &config);
        assert!(CoachLadder::category_coverage().message(&r).starts_with("Excellent"));
    }

    #[test]
    fn missed_two_of_four_in_catalog_order() {
        let cat = catalog();
        let sel = pick(&cat, &["Provide a safe plan", "Summarize symptoms", "Specify environment", "Apologize first"]);
        let missed: Vec<_> = missed_optimal(&sel, &cat).iter().map(|p| p.label.as_str()).collect();
        assert_eq!(missed, ["Define the incident", "State constraints"]);
    }

    #[test]
    fn nothing_missed_when_all_found() {
        let cat = catalog();
        let sel: Vec<Phrase> = cat.optimal_phrases().cloned().collect();
        assert!(missed_optimal(&sel, &cat).is_empty());
        assert!(missed_by_category(&sel, &cat).is_empty());
    }

    #[test]
    fn groups_by_category_with_heading() {
        let cat = Catalog::new(vec![
            Phrase::relevant("a", 25, "plan").optimal(),
            Phrase::relevant("b", 25, "goal").optimal(),
            Phrase::relevant("c", 25, "plan").optimal(),
        ])
        .unwrap();
        let groups = missed_by_category(&[], &cat);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].heading, "Plan");
        assert_eq!(groups[0].phrases.len(), 2);
        assert_eq!(groups[1].category, "goal");
    }

    #[test]
    fn capitalize_handles_empty() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("environment"), "Environment");
    }
}
