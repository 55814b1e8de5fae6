//! Repository metadata shown on the focused screen's panel.
//!
//! A [`RepoSource`] knows how to list repositories for a screen; the
//! [`RepoCatalog`] caches results per screen and runs fetches off the
//! frame loop.

mod catalog;
pub mod github;

pub use catalog::{FetchMode, RepoCatalog};
#[cfg(feature = "http")]
pub use github::GithubRepoSource;
pub use github::{select_repos, GithubRepo};

use crate::engine::FocusTarget;
use crate::error::VitrineError;

/// One repository card on a screen panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoItem {
    /// Stable numeric id.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Web page of the repository.
    pub url: String,
    /// Short description, if the owner wrote one.
    pub description: Option<String>,
    /// Preview image.
    pub thumbnail_url: String,
    /// Star count.
    pub stars: u64,
    /// Topic tags.
    pub topics: Vec<String>,
}

/// Lists repositories for a screen.
///
/// Implementations run on worker threads, hence `Send + Sync`.
pub trait RepoSource: Send + Sync {
    /// Fetch the repositories belonging to `target`'s screen.
    fn fetch(&self, target: FocusTarget) -> Result<Vec<RepoItem>, VitrineError>;
}
