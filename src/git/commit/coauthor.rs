//! AI co-author detection from `Co-authored-by:` trailers

use regex::Regex;
use std::sync::LazyLock;

/// Agent names recognized in co-author trailers
pub const AI_AGENTS: [&str; 5] = ["Copilot", "Goose", "Claude", "Cursor", "Amp"];

static AI_AGENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let names = AI_AGENTS.join("|");
    Regex::new(&format!(r"(?im)Co-authored-by:\s+({names})\b"))
        .expect("co-author pattern is valid")
});

/// Agents credited in `message`, deduplicated, in order of first appearance.
///
/// Matching is case-insensitive; names come back in their canonical spelling.
/// Trailers are found anywhere in the text, including a subject line that had
/// the trailer squashed into it.
pub fn detect_ai_agents(message: &str) -> Vec<String> {
    let mut agents: Vec<String> = Vec::new();
    for captures in AI_AGENT_PATTERN.captures_iter(message) {
        let matched = &captures[1];
        let name = AI_AGENTS
            .iter()
            .find(|agent| agent.eq_ignore_ascii_case(matched))
            .copied()
            .unwrap_or(matched);
        if !agents.iter().any(|a| a == name) {
            agents.push(name.to_string());
        }
    }
    agents
}
