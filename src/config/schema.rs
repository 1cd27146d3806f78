use crate::scoring::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Application configuration: the angler roster plus optional scoring
/// overrides. Anything omitted falls back to the tournament defaults.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The fixed roster of eligible anglers. Every roster angler appears on
    /// the leaderboard, catches or not.
    #[serde(default = "default_roster")]
    pub roster: Vec<String>,

    /// Scoring rule overrides; `None` means the standing tournament rules.
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            scoring: None,
        }
    }
}

impl Config {
    /// The scoring rules in force: configured overrides, or the defaults.
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}

fn default_roster() -> Vec<String> {
    ["Austin", "Bo", "Buzz", "Jordan", "Kevin", "Matt", "Nick", "Sam"]
        .into_iter()
        .map(String::from)
        .collect()
}
