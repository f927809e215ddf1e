use serde::{Deserialize, Serialize};

use crate::catalog::PhraseKind;
use crate::core::selection::MAX_SELECTIONS;

/// Canonical ramp: full bonus up to 15s, nothing from 60s on.
pub const T_FAST: u32 = 15;
pub const T_SLOW: u32 = 60;
pub const B_MAX: i32 = 20;

/// Phrase categories the coverage preset rewards.
pub const ESSENTIAL_CATEGORIES: [&str; 6] = [
    "incident",
    "symptoms",
    "environment",
    "evidence",
    "constraints",
    "plan",
];

/// Past the slow threshold the bonus turns into a penalty that grows
/// linearly until `ceiling_secs`, then stays at `-max_penalty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlowPenalty {
    pub ceiling_secs: u32,
    pub max_penalty: i32,
}

/// The time bonus only applies when at least `min_count` picks are of `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindGate {
    pub kind: PhraseKind,
    pub min_count: usize,
}

/// Capped linear ramp from `max_bonus` at `fast_secs` down to 0 at `slow_secs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBonusCurve {
    pub fast_secs: u32,
    pub slow_secs: u32,
    pub max_bonus: i32,
    #[serde(default)]
    pub penalty: Option<SlowPenalty>,
    #[serde(default)]
    pub gate: Option<KindGate>,
}

impl TimeBonusCurve {
    pub fn ramp(fast_secs: u32, slow_secs: u32, max_bonus: i32) -> Self {
        Self {
            fast_secs,
            slow_secs,
            max_bonus,
            penalty: None,
            gate: None,
        }
    }

    pub fn with_penalty(mut self, ceiling_secs: u32, max_penalty: i32) -> Self {
        self.penalty = Some(SlowPenalty {
            ceiling_secs,
            max_penalty,
        });
        self
    }

    pub fn with_gate(mut self, kind: PhraseKind, min_count: usize) -> Self {
        self.gate = Some(KindGate { kind, min_count });
        self
    }

    /// Bonus for `elapsed` seconds, ignoring the gate. Each value is rounded
    /// half away from zero. Non-increasing in `elapsed`.
    pub fn bonus(&self, elapsed: u32) -> i32 {
        if elapsed <= self.fast_secs {
            return self.max_bonus;
        }
        if elapsed < self.slow_secs {
            let range = (self.slow_secs - self.fast_secs) as i64;
            let left = (self.slow_secs - elapsed) as i64;
            return round_ratio(self.max_bonus as i64 * left, range);
        }
        match &self.penalty {
            Some(p) if p.ceiling_secs > self.slow_secs => {
                let t = elapsed.min(p.ceiling_secs);
                let range = (p.ceiling_secs - self.slow_secs) as i64;
                let over = (t - self.slow_secs) as i64;
                round_ratio(-(p.max_penalty as i64) * over, range)
            }
            Some(p) => -p.max_penalty,
            None => 0,
        }
    }
}

/// `num / den` rounded half away from zero. The quotient is formed in one
/// division so exact halves stay exact.
fn round_ratio(num: i64, den: i64) -> i32 {
    (num as f64 / den as f64).round() as i32
}

impl Default for TimeBonusCurve {
    fn default() -> Self {
        Self::ramp(T_FAST, T_SLOW, B_MAX)
    }
}

/// One scoring formula. The engine is a single function; variants are presets of this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Exact number of picks a complete selection has.
    pub max_selections: usize,
    /// Denominator for the percentage and upper clamp bound.
    pub max_possible: i32,
    /// Awarded once per listed category present in the selection.
    pub essential_categories: Vec<String>,
    pub essential_bonus: i32,
    /// Awarded when the selection spans at least `diversity_threshold` distinct categories.
    pub diversity_threshold: usize,
    pub diversity_bonus: i32,
    pub time_bonus: TimeBonusCurve,
    /// Clamp the total to `[0, max_possible]`.
    pub clamp_total: bool,
}

impl ScoringConfig {
    /// Flat weight sum over a 4 × 25 optimal set, plus up to 20 for speed. Max 120.
    pub fn flat_optimal() -> Self {
        Self {
            max_selections: MAX_SELECTIONS,
            max_possible: 100 + B_MAX,
            essential_categories: Vec::new(),
            essential_bonus: 0,
            diversity_threshold: 0,
            diversity_bonus: 0,
            time_bonus: TimeBonusCurve::default(),
            clamp_total: false,
        }
    }

    /// Category coverage with distractor penalties, clamped to 0..=100.
    /// Speed only counts with 3+ relevant picks and turns negative after two minutes.
    pub fn category_coverage() -> Self {
        Self {
            max_selections: MAX_SELECTIONS,
            max_possible: 100,
            essential_categories: ESSENTIAL_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            essential_bonus: 3,
            diversity_threshold: 3,
            diversity_bonus: 2,
            time_bonus: TimeBonusCurve::ramp(0, 120, 10)
                .with_penalty(240, 10)
                .with_gate(PhraseKind::Relevant, 3),
            clamp_total: true,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::flat_optimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn canonical_ramp_points() {
        let c = TimeBonusCurve::default();
        assert_eq!(c.bonus(0), 20);
        assert_eq!(c.bonus(15), 20);
        assert_eq!(c.bonus(30), 13); // 20 * (1 - 15/45) = 13.33
        assert_eq!(c.bonus(59), 0); // 0.44
        assert_eq!(c.bonus(60), 0);
        assert_eq!(c.bonus(3_600), 0);
    }

    #[test]
    fn coverage_curve_turns_into_penalty() {
        let c = ScoringConfig::category_coverage().time_bonus;
        assert_eq!(c.bonus(0), 10);
        assert_eq!(c.bonus(6), 10); // 9.5 rounds away from zero
        assert_eq!(c.bonus(60), 5);
        assert_eq!(c.bonus(120), 0);
        assert_eq!(c.bonus(126), -1); // -0.5 rounds away from zero
        assert_eq!(c.bonus(180), -5);
        assert_eq!(c.bonus(240), -10);
        assert_eq!(c.bonus(10_000), -10);
    }

    #[test]
    fn degenerate_penalty_ceiling_is_flat() {
        let c = TimeBonusCurve::ramp(10, 20, 5).with_penalty(20, 3);
        assert_eq!(c.bonus(25), -3);
    }

    #[test]
    fn presets_differ_in_scale() {
        assert_eq!(ScoringConfig::default().max_possible, 120);
        assert_eq!(ScoringConfig::category_coverage().max_possible, 100);
        assert!(ScoringConfig::category_coverage().clamp_total);
    }

    proptest! {
        #[test]
        fn bonus_never_increases_with_time(a in 0u32..1_000, b in 0u32..1_000) {
            let (fast, slow) = (a.min(b), a.max(b));
            for curve in [
                TimeBonusCurve::default(),
                ScoringConfig::category_coverage().time_bonus,
            ] {
                prop_assert!(curve.bonus(fast) >= curve.bonus(slow));
            }
        }
    }
}
