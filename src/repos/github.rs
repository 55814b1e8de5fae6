//! GitHub-backed repository listing.

use serde::Deserialize;

use super::RepoItem;
#[cfg(feature = "http")]
use super::RepoSource;
#[cfg(feature = "http")]
use crate::engine::FocusTarget;
#[cfg(feature = "http")]
use crate::error::VitrineError;
#[cfg(feature = "http")]
use crate::options::RepoOptions;

/// The subset of the GitHub repository payload the panels use.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GithubRepo {
    /// Repository id.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Web page.
    pub html_url: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Topic tags.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Star count.
    #[serde(default)]
    pub stargazers_count: u64,
    /// Last update, RFC 3339.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl GithubRepo {
    fn has_any_topic(&self, wanted: &[String]) -> bool {
        self.topics
            .iter()
            .any(|t| wanted.iter().any(|w| w.eq_ignore_ascii_case(t)))
    }
}

/// Keep repositories tagged with any of `topics` (case-insensitive),
/// most-starred first, then most recently updated.
#[must_use]
pub fn select_repos(repos: Vec<GithubRepo>, topics: &[String], user: &str) -> Vec<RepoItem> {
    let mut kept: Vec<GithubRepo> = repos
        .into_iter()
        .filter(|r| r.has_any_topic(topics))
        .collect();
    // RFC 3339 timestamps from the API share a format, so they sort as strings.
    kept.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    kept.into_iter()
        .map(|r| RepoItem {
            thumbnail_url: format!("https://opengraph.githubassets.com/1/{user}/{}", r.name),
            id: r.id,
            name: r.name,
            url: r.html_url,
            description: r.description,
            stars: r.stargazers_count,
            topics: r.topics,
        })
        .collect()
}

/// Lists a user's own repositories through the GitHub REST API.
///
/// Sends `GITHUB_TOKEN` as a bearer token when that variable is set.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct GithubRepoSource {
    options: RepoOptions,
    token: Option<String>,
}

#[cfg(feature = "http")]
impl GithubRepoSource {
    /// Source for `options.user`, picking up `GITHUB_TOKEN` from the
    /// environment.
    #[must_use]
    pub fn new(options: RepoOptions) -> Self {
        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());
        Self { options, token }
    }

    /// URL of the owner repository listing.
    #[must_use]
    pub fn list_url(&self) -> String {
        format!(
            "{}/users/{}/repos?per_page=100&type=owner&sort=updated",
            self.options.api_base.trim_end_matches('/'),
            self.options.user
        )
    }

    fn get(&self, url: &str) -> Result<String, VitrineError> {
        let mut request = ureq::get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", self.options.user_agent.as_str());
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        request
            .call()
            .map_err(|e| VitrineError::Fetch(format!("GET {url}: {e}")))?
            .into_body()
            .read_to_string()
            .map_err(|e| VitrineError::Fetch(format!("reading {url}: {e}")))
    }
}

#[cfg(feature = "http")]
impl RepoSource for GithubRepoSource {
    fn fetch(&self, target: FocusTarget) -> Result<Vec<RepoItem>, VitrineError> {
        let url = self.list_url();
        log::info!("listing repositories for {target:?} from {url}");
        let body = self.get(&url)?;
        let repos: Vec<GithubRepo> = serde_json::from_str(&body)?;
        let items = select_repos(repos, self.options.topics(target), &self.options.user);
        log::debug!("{} repositories match {target:?}", items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {"id": 1, "name": "sniper", "html_url": "https://github.com/u/sniper",
         "description": "bot", "topics": ["Solana", "bot"], "stargazers_count": 3,
         "updated_at": "2024-03-01T00:00:00Z"},
        {"id": 2, "name": "scanner", "html_url": "https://github.com/u/scanner",
         "description": null, "topics": ["hacking"], "stargazers_count": 9,
         "updated_at": "2024-01-01T00:00:00Z"},
        {"id": 3, "name": "wallet", "html_url": "https://github.com/u/wallet",
         "topics": ["bitcoin"], "stargazers_count": 3,
         "updated_at": "2024-05-01T00:00:00Z"},
        {"id": 4, "name": "dotfiles", "html_url": "https://github.com/u/dotfiles",
         "stargazers_count": 50}
    ]"#;

    fn topics(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| (*t).to_owned()).collect()
    }

    #[test]
    fn filters_by_topic_case_insensitively() {
        let repos: Vec<GithubRepo> = serde_json::from_str(PAYLOAD).unwrap();
        let items = select_repos(repos, &topics(&["solana", "bitcoin"]), "u");
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["wallet", "sniper"]);
    }

    #[test]
    fn orders_by_stars_then_recency() {
        let repos: Vec<GithubRepo> = serde_json::from_str(PAYLOAD).unwrap();
        let items = select_repos(repos, &topics(&["solana", "bitcoin", "hacking"]), "u");
        let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn untagged_repositories_are_dropped() {
        let repos: Vec<GithubRepo> = serde_json::from_str(PAYLOAD).unwrap();
        assert!(select_repos(repos, &topics(&["rust"]), "u").is_empty());
    }

    #[test]
    fn items_carry_fallback_thumbnail() {
        let repos: Vec<GithubRepo> = serde_json::from_str(PAYLOAD).unwrap();
        let items = select_repos(repos, &topics(&["hacking"]), "FLOCK4H");
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].thumbnail_url,
            "https://opengraph.githubassets.com/1/FLOCK4H/scanner"
        );
        assert_eq!(items[0].url, "https://github.com/u/scanner");
        assert_eq!(items[0].description, None);
    }

    #[cfg(feature = "http")]
    #[test]
    fn list_url_targets_owner_repositories() {
        let source = GithubRepoSource::new(RepoOptions {
            api_base: "https://example.test/".into(),
            user: "someone".into(),
            ..RepoOptions::default()
        });
        assert_eq!(
            source.list_url(),
            "https://example.test/users/someone/repos?per_page=100&type=owner&sort=updated"
        );
    }
}
