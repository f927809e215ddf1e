//! Phrase pool for the slow-laptop ticket.
//! No wrong answers here, just better and worse ones. The four optimal
//! phrases score 25 each for a perfect 100.

use prompt_engine::Phrase;

pub fn phrases() -> Vec<Phrase> {
    vec![
        // ── Optimal (25 each) ───────────────────────────────────────────
        Phrase::relevant("Define the incident and desired outcome", 25, "incident").optimal(),
        Phrase::relevant("Specify environment (OS build, security, permissions)", 25, "environment").optimal(),
        Phrase::relevant("State constraints (no admin rights, preserve data, minimal downtime)", 25, "constraints").optimal(),
        Phrase::relevant("Provide a safe prioritized step-by-step plan", 25, "plan").optimal(),
        // ── Good (15-20) ────────────────────────────────────────────────
        Phrase::relevant("Summarize symptoms and timing", 20, "symptoms"),
        Phrase::relevant("List evidence collected (Task Manager, Reliability Monitor, SMART)", 18, "evidence"),
        Phrase::relevant("Include rollback guidance if update regressed performance", 18, "plan"),
        Phrase::relevant("End with a concise ticket note summary", 15, "incident"),
        Phrase::relevant("Follow corporate security policies (BitLocker, antivirus)", 17, "constraints"),
        Phrase::relevant("Recommend escalation path if steps fail", 15, "plan"),
        // ── Decent (8-12) ───────────────────────────────────────────────
        Phrase::helpful("Mention recent changes (updates, new apps, config changes)", 12, "symptoms"),
        Phrase::helpful("Preserve data and avoid data loss", 12, "constraints"),
        Phrase::helpful("Minimize downtime for the user", 10, "constraints"),
        Phrase::helpful("Reply concisely without filler", 10, "style"),
        Phrase::helpful("Use numbered steps with short bullets", 10, "style"),
        Phrase::clarifying("Ask up to 5 clarifying questions first", 10, "clarifying"),
        Phrase::helpful("Suggest preventive measures for future", 8, "plan"),
        Phrase::helpful("Group steps by priority (critical, recommended, optional)", 8, "style"),
        Phrase::helpful("Add confidence ratings per step", 8, "style"),
        // ── Weak (2-5) ──────────────────────────────────────────────────
        Phrase::weak("Include user's personal opinions about IT", 3, "style"),
        Phrase::weak("Discuss system history from previous years", 3, "context"),
        Phrase::weak("Use empathetic language throughout", 5, "style"),
        Phrase::weak("Apologize for the inconvenience first", 4, "style"),
        Phrase::weak("Request screenshots of all error messages", 5, "evidence"),
        Phrase::weak("Ask about recent software installations", 5, "context"),
        Phrase::weak("Mention the ticket will be escalated if needed", 4, "plan"),
        Phrase::weak("Promise to follow up within 24 hours", 3, "style"),
        Phrase::weak("Suggest restarting the computer first", 2, "plan"),
        Phrase::weak("Recommend checking for Windows updates", 2, "plan"),
        Phrase::weak("Ask if the issue happens in Safe Mode", 4, "clarifying"),
    ]
}
