use prompt_engine::*;

/// Find the Outlook scheduling feature a colleague mentioned.
/// Every phrase scores; only four are optimal. Board reshuffles each round.
pub struct SchedulerPrompt;

impl SchedulerPrompt {
    pub fn new() -> Self {
        Self
    }
}

fn phrases() -> Vec<Phrase> {
    vec![
        // Optimal
        Phrase::relevant("Describe what you want to do: schedule meetings with availability polling", 25, "goal").optimal(),
        Phrase::relevant("State your Outlook version and platform (desktop, web, mobile)", 25, "environment").optimal(),
        Phrase::relevant("Mention your account type (Microsoft 365, Exchange, personal)", 25, "context").optimal(),
        Phrase::relevant("Ask how to find or enable this scheduling feature", 25, "plan").optimal(),
        // Good
        Phrase::relevant("Ask if the feature requires admin permissions or a specific license", 20, "permissions"),
        Phrase::relevant("Ask what the feature is officially called in Outlook", 18, "goal"),
        Phrase::relevant("Ask if it's available in your region or being rolled out", 18, "context"),
        Phrase::relevant("Mention where you've already looked (ribbon, settings, add-ins)", 15, "troubleshooting"),
        Phrase::relevant("Ask if it's a built-in feature or an add-in to install", 17, "context"),
        Phrase::relevant("Ask for a link to Microsoft's official instructions", 15, "plan"),
        // Decent
        Phrase::helpful("Mention you've searched the ribbon and calendar settings", 12, "troubleshooting"),
        Phrase::helpful("Ask if your IT department needs to enable it", 12, "permissions"),
        Phrase::helpful("Ask for a brief, focused answer", 10, "style"),
        Phrase::helpful("Request step-by-step bullet points", 10, "style"),
        Phrase::clarifying("Ask the AI to clarify anything it needs first", 10, "clarifying"),
        Phrase::helpful("Ask about alternative ways to poll for meeting times", 8, "plan"),
        Phrase::helpful("Ask if the feature has a different name in older versions", 8, "context"),
        Phrase::helpful("Ask for keyboard shortcuts to access it faster", 8, "style"),
        // Weak
        Phrase::weak("Explain exactly what your colleague said about it", 3, "context"),
        Phrase::weak("Ask what version your colleague is using", 3, "context"),
        Phrase::weak("Keep the tone casual and friendly", 5, "style"),
        Phrase::weak("Mention you're frustrated you can't find it", 4, "style"),
        Phrase::weak("Ask for screenshots showing where to click", 5, "plan"),
        Phrase::weak("Say you've been searching for a long time", 5, "context"),
        Phrase::weak("Ask whether Scheduler is new or old", 4, "context"),
        Phrase::weak("Thank the AI before it responds", 3, "style"),
        Phrase::weak("Try restarting Outlook before asking", 2, "troubleshooting"),
        Phrase::weak("Ask if updating Outlook might help", 2, "troubleshooting"),
        Phrase::weak("Ask if the feature works without internet", 4, "clarifying"),
    ]
}

impl Game for SchedulerPrompt {
    fn config(&self) -> GameConfig {
        GameConfig {
            seed: 0x5C4E_D01E,
            ..GameConfig::default()
        }
    }

    fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(phrases())
    }

    fn scenario(&self) -> Scenario {
        Scenario {
            title: "Build Your Prompt".into(),
            instructions: "Select 4 phrases to build the best prompt for solving this IT ticket.".into(),
            situation: "A colleague mentioned a new \"Scheduler\" feature in Outlook that helps find \
                        meeting times everyone can attend, but you can't find it anywhere in your app."
                .into(),
            tip: "Every phrase scores points, but only 4 are optimal. A perfect prompt covers: \
                  goal, environment, context, and plan."
                .into(),
            hints: vec![
                HintCategory::new("Goal", "Define what you're looking for and your objective"),
                HintCategory::new("Environment", "Specify your Outlook version and platform"),
                HintCategory::new("Context", "Mention your account type and what you've tried"),
                HintCategory::new("Plan", "Request step-by-step instructions to find the feature"),
            ],
        }
    }
}
