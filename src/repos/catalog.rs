//! Per-screen cache of repository listings, filled off the frame loop.

use std::sync::{mpsc, Arc};

use rustc_hash::{FxHashMap, FxHashSet};

use super::{RepoItem, RepoSource};
use crate::engine::FocusTarget;
use crate::error::VitrineError;

/// Where fetches run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// On a named worker thread; results are collected by [`RepoCatalog::poll`].
    #[default]
    Background,
    /// On the calling thread, before [`RepoCatalog::request`] returns.
    Inline,
}

type Reply = (FocusTarget, Vec<RepoItem>);

/// Sends its result when dropped, so a worker that panics still reports
/// (an empty list) and the loading flag always clears.
struct ReplyGuard {
    target: FocusTarget,
    items: Vec<RepoItem>,
    tx: mpsc::Sender<Reply>,
}

impl Drop for ReplyGuard {
    fn drop(&mut self) {
        let items = std::mem::take(&mut self.items);
        // The catalog may already be gone.
        let _ = self.tx.send((self.target, items));
    }
}

fn fetch_or_empty(source: &dyn RepoSource, target: FocusTarget) -> Vec<RepoItem> {
    match source.fetch(target) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("repository fetch for {target:?} failed: {e}");
            Vec::new()
        }
    }
}

/// Fetches each screen's repositories at most once and caches them.
///
/// Switching screens never cancels a fetch; late results are still cached.
pub struct RepoCatalog {
    source: Arc<dyn RepoSource>,
    mode: FetchMode,
    items: FxHashMap<FocusTarget, Vec<RepoItem>>,
    pending: FxHashSet<FocusTarget>,
    tx: mpsc::Sender<Reply>,
    rx: mpsc::Receiver<Reply>,
}

impl RepoCatalog {
    /// Catalog over `source`.
    #[must_use]
    pub fn new(source: Arc<dyn RepoSource>, mode: FetchMode) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            mode,
            items: FxHashMap::default(),
            pending: FxHashSet::default(),
            tx,
            rx,
        }
    }

    /// Start fetching `target`'s repositories unless they are cached or
    /// already in flight.
    pub fn request(&mut self, target: FocusTarget) {
        if self.items.contains_key(&target) || self.pending.contains(&target) {
            return;
        }
        match self.mode {
            FetchMode::Inline => {
                let items = fetch_or_empty(self.source.as_ref(), target);
                let _ = self.items.insert(target, items);
            }
            FetchMode::Background => {
                let _ = self.pending.insert(target);
                if let Err(e) = self.spawn_fetch(target) {
                    log::warn!("{e}; showing no repositories for {target:?}");
                    let _ = self.pending.remove(&target);
                    let _ = self.items.insert(target, Vec::new());
                }
            }
        }
    }

    fn spawn_fetch(&self, target: FocusTarget) -> Result<(), VitrineError> {
        let source = Arc::clone(&self.source);
        let guard = ReplyGuard {
            target,
            items: Vec::new(),
            tx: self.tx.clone(),
        };
        let _ = std::thread::Builder::new()
            .name(format!("repo-fetch-{target:?}"))
            .spawn(move || {
                let mut guard = guard;
                guard.items = fetch_or_empty(source.as_ref(), target);
            })
            .map_err(VitrineError::ThreadSpawn)?;
        Ok(())
    }

    /// Collect finished fetches. Returns how many arrived.
    pub fn poll(&mut self) -> usize {
        let mut arrived = 0;
        while let Ok((target, items)) = self.rx.try_recv() {
            let _ = self.pending.remove(&target);
            let _ = self.items.entry(target).or_insert(items);
            arrived += 1;
        }
        arrived
    }

    /// Whether a fetch for `target` is in flight.
    #[must_use]
    pub fn is_loading(&self, target: FocusTarget) -> bool {
        self.pending.contains(&target)
    }

    /// Cached repositories for `target`, once fetched.
    #[must_use]
    pub fn items(&self, target: FocusTarget) -> Option<&[RepoItem]> {
        self.items.get(&target).map(Vec::as_slice)
    }
}
