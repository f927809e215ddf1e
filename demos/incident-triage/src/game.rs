use prompt_engine::*;

/// Brief an assistant on a production outage. Sectioned board with
/// distractors that cost points; essentials and diversity earn bonuses.
pub struct IncidentTriage;

impl IncidentTriage {
    pub fn new() -> Self {
        Self
    }
}

fn sections() -> Vec<Section> {
    vec![
        Section::new(
            "Frame the incident",
            "What is broken and who feels it.",
            vec![
                Phrase::relevant("State the impact: checkout returns HTTP 500 for ~30% of requests", 22, "incident")
                    .optimal(),
                Phrase::relevant("Say when it started: right after the 14:05 deploy", 18, "symptoms"),
                Phrase::helpful("Mention the on-call severity (SEV-2)", 6, "incident"),
                Phrase::weak("Note that customers are complaining on social media", 2, "symptoms"),
            ],
        ),
        Section::new(
            "Context & evidence",
            "Where it runs and what you have already seen.",
            vec![
                Phrase::relevant("Attach the error log excerpt and the failing trace ID", 20, "evidence").optimal(),
                Phrase::relevant("Name the service, region, and release (checkout v4.12, eu-west)", 18, "environment"),
                Phrase::helpful("Include the error-rate dashboard link", 6, "evidence"),
                Phrase::clarifying("Ask which extra metrics would narrow it down", 5, "clarifying"),
            ],
        ),
        Section::new(
            "Guardrails & plan",
            "Limits the answer must respect, and the shape of the answer.",
            vec![
                Phrase::relevant("Set constraints: no schema changes, leave the payment provider untouched", 20, "constraints")
                    .optimal(),
                Phrase::relevant("Ask for a safe plan: rollback criteria first, then root-cause steps", 22, "plan")
                    .optimal(),
                Phrase::helpful("Request a short status update customers can read", 5, "plan"),
                Phrase::helpful("Ask for numbered steps with owners", 4, "style"),
            ],
        ),
        Section::new(
            "Tempting shortcuts",
            "",
            vec![
                Phrase::distractor("Ask it to guess the root cause without the logs", -8, "risky"),
                Phrase::distractor("Tell it to disable the failing health checks", -12, "risky"),
                Phrase::distractor("Ask who on the team broke production", -10, "blame"),
                Phrase::distractor("Paste the production database password for context", -15, "security"),
                Phrase::distractor("Ask for a hotfix straight to main, skipping review", -10, "risky"),
            ],
        ),
    ]
}

impl Game for IncidentTriage {
    fn config(&self) -> GameConfig {
        GameConfig {
            scoring: ScoringConfig::category_coverage(),
            coach: CoachLadder::category_coverage(),
            shuffle_on_start: false,
            reshuffle_on_reset: false,
            ..GameConfig::default()
        }
    }

    fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::sectioned(sections())
    }

    fn scenario(&self) -> Scenario {
        Scenario {
            title: "Incident Triage".into(),
            instructions: "Pick four phrases for the prompt you would send during the outage.".into(),
            situation: "Checkout started failing minutes after a routine deploy. Error rate is climbing, \
                        the payment provider looks healthy, and the release owner is offline."
                .into(),
            tip: "Aim for diversity and include essentials: incident framing, context, evidence, \
                  constraints, and a safe plan."
                .into(),
            hints: vec![
                HintCategory::new("Incident", "What is failing and for whom"),
                HintCategory::new("Evidence", "Logs, traces, dashboards you already have"),
                HintCategory::new("Constraints", "What the fix must not touch"),
                HintCategory::new("Plan", "A safe order of operations, rollback first"),
            ],
        }
    }
}
