use prompt_engine::*;

use crate::phrases;

/// Build the best prompt for a slow, crashing Windows laptop ticket.
/// Flat weight sum with a 20-point speed bonus.
pub struct TicketPrompt;

impl TicketPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Game for TicketPrompt {
    fn config(&self) -> GameConfig {
        GameConfig {
            scoring: ScoringConfig::flat_optimal(),
            coach: CoachLadder::flat_optimal(),
            // Board keeps its authored order; the shuffle button still works.
            shuffle_on_start: false,
            reshuffle_on_reset: false,
            ..GameConfig::default()
        }
    }

    fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(phrases::phrases())
    }

    fn scenario(&self) -> Scenario {
        Scenario {
            title: "Build Your Prompt".into(),
            instructions: "Craft the perfect IT ticket prompt with these phrases. Pick exactly four.".into(),
            situation: "User's Windows 11 laptop is very slow and crashes after an auto-update; \
                        fan is loud; large apps recently installed. Corporate build, BitLocker, \
                        standard user rights."
                .into(),
            tip: "Aim for diversity and include essentials: incident framing, context, evidence, \
                  constraints, and a safe plan."
                .into(),
            hints: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(clock: &ManualClock) -> GameSession {
        let game = TicketPrompt::new();
        GameSession::new(game.catalog().unwrap(), game.config(), Box::new(clock.clone()))
    }

    #[test]
    fn catalog_is_valid() {
        let catalog = TicketPrompt::new().catalog().unwrap();
        assert_eq!(catalog.len(), 30);
        assert!(catalog.all_phrases().iter().all(|p| p.weight >= 0));
    }

    #[test]
    fn optimal_set_is_worth_one_hundred() {
        let catalog = TicketPrompt::new().catalog().unwrap();
        let optimal: Vec<_> = catalog.optimal_phrases().collect();
        assert_eq!(optimal.len(), MAX_SELECTIONS);
        assert_eq!(optimal.iter().map(|p| p.weight).sum::<i32>(), 100);
    }

    #[test]
    fn board_keeps_authored_order() {
        let clock = ManualClock::new(0);
        let s = session(&clock);
        assert_eq!(s.board(), s.catalog().all_phrases());
    }

    #[test]
    fn fast_perfect_round_scores_max() {
        let clock = ManualClock::new(0);
        let mut s = session(&clock);
        let labels: Vec<String> = s.catalog().optimal_phrases().map(|p| p.label.clone()).collect();
        for label in &labels {
            s.toggle(label);
        }
        clock.advance(9_000);
        let r = s.submit().unwrap();
        assert_eq!(r.total_score, 120);
        assert_eq!(r.percentage, 100);
        assert!(s.coach_message().unwrap().starts_with("Perfect"));
    }

    #[test]
    fn slow_mixed_round_gets_hints() {
        let clock = ManualClock::new(0);
        let mut s = session(&clock);
        for label in [
            "Define the incident and desired outcome",
            "Summarize symptoms and timing",
            "Reply concisely without filler",
            "Suggest restarting the computer first",
        ] {
            assert!(s.toggle(label).changed());
        }
        clock.advance(75_000);
        let r = s.submit().unwrap();
        // 25 + 20 + 10 + 2, no speed bonus
        assert_eq!(r.total_score, 57);
        assert_eq!(r.percentage, 48);
        let report = s.report().unwrap();
        let headings: Vec<_> = report.missed.iter().map(|g| g.heading.as_str()).collect();
        assert_eq!(headings, ["Environment", "Constraints", "Plan"]);
        assert!(report.coach_message.starts_with("Keep practicing"));
    }
}
