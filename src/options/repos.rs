use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::FocusTarget;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Repositories", inline)]
#[serde(default)]
/// Repository metadata source settings.
pub struct RepoOptions {
    /// GitHub account whose repositories are listed.
    #[schemars(title = "User")]
    pub user: String,
    /// API root.
    #[schemars(skip)]
    pub api_base: String,
    /// User agent sent with every request.
    #[schemars(skip)]
    pub user_agent: String,
    /// Topics selecting repositories for the left screen.
    #[schemars(skip)]
    pub left_topics: Vec<String>,
    /// Topics selecting repositories for the right screen.
    #[schemars(skip)]
    pub right_topics: Vec<String>,
}

impl Default for RepoOptions {
    fn default() -> Self {
        let topics = |list: &[&str]| {
            list.iter().map(|t| (*t).to_owned()).collect::<Vec<_>>()
        };
        Self {
            user: "FLOCK4H".into(),
            api_base: "https://api.github.com".into(),
            user_agent: "flock4h-room-app".into(),
            left_topics: topics(&[
                "solana",
                "base",
                "ethereum",
                "bitcoin",
                "tron",
                "trading",
                "crypto",
                "solana-bot",
                "sniper-bot",
            ]),
            right_topics: topics(&["hacking", "cybersecurity"]),
        }
    }
}

impl RepoOptions {
    /// Topic set for a focus target.
    #[must_use]
    pub fn topics(&self, target: FocusTarget) -> &[String] {
        match target {
            FocusTarget::Left => &self.left_topics,
            FocusTarget::Right => &self.right_topics,
        }
    }
}
