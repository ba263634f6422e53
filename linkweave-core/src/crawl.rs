use indicatif::{ProgressBar, ProgressStyle};
use linkweave_scanner::error::Result;
use linkweave_scanner::{Crawler, Fetcher, HttpFetcher, PageNode, ProgressCallback};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;
use url::Url;

/// Options for configuring a crawl operation
pub struct CrawlOptions {
    pub url: String,
    pub max_depth: usize,
    pub timeout_secs: u64,
    pub show_progress_bars: bool,
}

/// Extract the path component from a URL
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() || path == "/" {
                "/".to_string()
            } else {
                path
            }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Execute a crawl over HTTP with the given options
pub async fn execute_crawl(options: CrawlOptions) -> Result<PageNode> {
    let fetcher = HttpFetcher::with_timeout(options.timeout_secs)?;
    execute_crawl_with(fetcher, options).await
}

/// Execute a crawl with a caller-supplied fetcher
pub async fn execute_crawl_with<F: Fetcher>(fetcher: F, options: CrawlOptions) -> Result<PageNode> {
    let CrawlOptions {
        url,
        max_depth,
        timeout_secs,
        show_progress_bars,
    } = options;

    info!(target_url = %url, crawl_depth = max_depth, timeout_secs, "configuration");

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Starting crawl...");
        Some(pb)
    } else {
        None
    };

    let mut crawler = Crawler::new(fetcher).with_max_depth(max_depth);

    if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        let processed_count = Arc::new(AtomicUsize::new(0));
        let progress_callback: ProgressCallback = Arc::new(move |url: String| {
            let count = processed_count.fetch_add(1, Ordering::Relaxed) + 1;
            pb_clone.set_message(format!(
                "Crawling... {} pages fetched ({})",
                count,
                extract_url_path(&url)
            ));
        });
        crawler = crawler.with_progress_callback(progress_callback);
    }

    let outcome = crawler.crawl(&url).await;

    if let Some(pb) = progress_bar {
        match outcome {
            Ok(ref root) => {
                pb.finish_with_message(format!("Crawl complete! {} pages", root.node_count()))
            }
            Err(_) => pb.finish_and_clear(),
        }
    }

    outcome
}
