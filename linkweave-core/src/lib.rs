pub mod config;
pub mod crawl;
pub mod logging;
pub mod report;

pub use config::{CrawlConfig, LogSettings};
pub use crawl::{CrawlOptions, execute_crawl, execute_crawl_with, extract_url_path};
pub use report::{ReportFormat, render, render_json, render_tree};
