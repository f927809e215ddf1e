use std::collections::{BTreeSet, HashSet};

use crate::catalog::{Phrase, PhraseKind};
use crate::error::ScoreError;
use crate::scoring::config::ScoringConfig;
use crate::scoring::result::{GameResult, KindTally};

/// Precondition for [`score`]: exactly `max_selections` picks, unique by label.
/// `score` does not call this; it is for callers that want to refuse bad input.
pub fn check_selection(selection: &[Phrase], config: &ScoringConfig) -> Result<(), ScoreError> {
    let mut seen = HashSet::with_capacity(selection.len());
    for p in selection {
        if !seen.insert(p.label.as_str()) {
            return Err(ScoreError::DuplicateLabel(p.label.clone()));
        }
    }
    if selection.len() != config.max_selections {
        return Err(ScoreError::WrongSize {
            expected: config.max_selections,
            actual: selection.len(),
        });
    }
    Ok(())
}

/// Score a selection submitted after `elapsed_seconds`.
///
/// Pure: same inputs, same result. Repeated labels are dropped (first one
/// wins) before anything is summed. The time bonus is the only component
/// rounded on its own; everything else is integral.
pub fn score(selection: &[Phrase], elapsed_seconds: u32, config: &ScoringConfig) -> GameResult {
    let picks = dedup_by_label(selection);

    let mut base_score: i32 = 0;
    let mut optimal_count = 0;
    let mut categories = BTreeSet::new();
    let mut breakdown: Vec<KindTally> = PhraseKind::ALL
        .iter()
        .map(|&kind| KindTally {
            kind,
            count: 0,
            points: 0,
        })
        .collect();

    for p in &picks {
        base_score = base_score.saturating_add(p.weight);
        if p.optimal {
            optimal_count += 1;
        }
        categories.insert(p.category.as_str());
        if let Some(tally) = breakdown.iter_mut().find(|t| t.kind == p.kind) {
            tally.count += 1;
            tally.points = tally.points.saturating_add(p.weight);
        }
    }
    breakdown.retain(|t| t.count > 0);

    let essentials_present = config
        .essential_categories
        .iter()
        .filter(|c| categories.contains(c.as_str()))
        .count();
    let essentials_bonus = (essentials_present as i32).saturating_mul(config.essential_bonus);

    let diversity_bonus = if config.diversity_bonus != 0 && categories.len() >= config.diversity_threshold {
        config.diversity_bonus
    } else {
        0
    };

    let curve = &config.time_bonus;
    let gate_open = match &curve.gate {
        Some(gate) => picks.iter().filter(|p| p.kind == gate.kind).count() >= gate.min_count,
        None => true,
    };
    let time_bonus = if gate_open { curve.bonus(elapsed_seconds) } else { 0 };

    let raw = base_score
        .saturating_add(essentials_bonus)
        .saturating_add(diversity_bonus)
        .saturating_add(time_bonus);
    let total_score = if config.clamp_total {
        raw.clamp(0, config.max_possible.max(0))
    } else {
        raw
    };

    let percentage = if config.max_possible > 0 {
        (100.0 * total_score as f64 / config.max_possible as f64).round() as i32
    } else {
        0
    };

    GameResult {
        base_score,
        breakdown,
        essentials_bonus,
        diversity_bonus,
        time_bonus,
        total_score,
        max_possible: config.max_possible,
        percentage,
        optimal_count,
        max_selections: config.max_selections,
        distinct_categories: categories.len(),
        elapsed_seconds,
        selected_phrases: picks.into_iter().cloned().collect(),
    }
}

fn dedup_by_label(selection: &[Phrase]) -> Vec<&Phrase> {
    let mut seen = HashSet::with_capacity(selection.len());
    selection
        .iter()
        .filter(|p| seen.insert(p.label.as_str()))
        .collect()
}
