use std::collections::HashSet;
use tokio::sync::RwLock;

/// Addresses already scheduled or visited during a single crawl.
///
/// Membership checks share a read lock; insertion takes the write lock.
/// Entries are never removed.
#[derive(Debug, Default)]
pub struct AddressSet {
    seen: RwLock<HashSet<String>>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contains(&self, url: &str) -> bool {
        self.seen.read().await.contains(url)
    }

    /// Records `url` as seen. Returns `true` only for the call that actually
    /// inserted it, so concurrent callers racing on one address get exactly
    /// one winner.
    pub async fn insert(&self, url: impl Into<String>) -> bool {
        self.seen.write().await.insert(url.into())
    }

    pub async fn len(&self) -> usize {
        self.seen.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.seen.read().await.is_empty()
    }
}
