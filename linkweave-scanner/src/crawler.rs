use crate::error::{Result, ScanError};
use crate::fetcher::Fetcher;
use crate::node::PageNode;
use crate::seen::AddressSet;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_MAX_DEPTH: usize = 2;

pub type ProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Depth-bounded crawler that builds a tree of first-discovered pages.
///
/// Every link on a page is resolved against that page's address and expanded
/// at most once per run. Siblings are expanded concurrently, but children are
/// always attached in the order their links appeared on the page.
pub struct Crawler<F> {
    fetcher: Arc<F>,
    max_depth: usize,
    progress_callback: Option<ProgressCallback>,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            max_depth: DEFAULT_MAX_DEPTH,
            progress_callback: None,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Crawls outward from `start_url`.
    ///
    /// Any fetch failure, at any depth, aborts the run and is returned as is.
    pub async fn crawl(&self, start_url: &str) -> Result<PageNode> {
        info!("Starting crawl of {} to depth {}", start_url, self.max_depth);
        let start = Instant::now();

        let seed = Url::parse(start_url)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", start_url, e)))?;

        let expansion = Expansion {
            fetcher: self.fetcher.clone(),
            seen: Arc::new(AddressSet::new()),
            progress_callback: self.progress_callback.clone(),
        };

        // The seed must never come back as someone's child.
        expansion.seen.insert(seed.as_str()).await;

        let root = expansion.clone().expand(seed, self.max_depth).await?;

        info!(
            "Crawl complete. {} unique links recorded in {:?}",
            expansion.seen.len().await,
            start.elapsed()
        );
        Ok(root)
    }
}

/// State shared by every expansion task of one run.
struct Expansion<F> {
    fetcher: Arc<F>,
    seen: Arc<AddressSet>,
    progress_callback: Option<ProgressCallback>,
}

impl<F> Clone for Expansion<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            seen: self.seen.clone(),
            progress_callback: self.progress_callback.clone(),
        }
    }
}

impl<F: Fetcher> Expansion<F> {
    fn expand(self, url: Url, depth: usize) -> BoxFuture<'static, Result<PageNode>> {
        Box::pin(async move {
            let mut node = PageNode::leaf(url.as_str());
            if depth == 0 {
                return Ok(node);
            }

            if let Some(ref callback) = self.progress_callback {
                callback(url.to_string());
            }

            let links = self.fetcher.fetch(&url).await?;
            debug!("{} links found on {} (depth budget {})", links.len(), url, depth);

            let mut tasks = JoinSet::new();
            let mut spawned = 0;

            for link in links {
                let child_url = match url.join(&link) {
                    Ok(child_url) => child_url,
                    Err(source) => {
                        let err = ScanError::MalformedLink {
                            link,
                            page: url.to_string(),
                            source,
                        };
                        warn!("Skipping link: {}", err);
                        continue;
                    }
                };

                if self.seen.contains(child_url.as_str()).await {
                    debug!("  -> Already seen {}", child_url);
                    continue;
                }
                // Marked before expansion starts, so a second link to the same
                // address (here or in a sibling task) is skipped.
                if !self.seen.insert(child_url.as_str()).await {
                    continue;
                }

                let index = spawned;
                spawned += 1;
                let child = self.clone().expand(child_url, depth - 1);
                tasks.spawn(async move { (index, child.await) });
            }

            // Slots are filled by discovery index, not completion order.
            // Returning early drops the JoinSet and aborts the remaining tasks.
            let mut slots: Vec<Option<PageNode>> = vec![None; spawned];
            while let Some(joined) = tasks.join_next().await {
                let (index, child) = joined?;
                slots[index] = Some(child?);
            }

            for child in slots.into_iter().flatten() {
                node.attach(child);
            }
            Ok(node)
        })
    }
}
