pub mod crawler;
pub mod error;
pub mod fetcher;
pub mod node;
pub mod seen;

pub use crawler::{Crawler, ProgressCallback, DEFAULT_MAX_DEPTH};
pub use error::ScanError;
pub use fetcher::{Fetcher, HttpFetcher};
pub use node::PageNode;
pub use seen::AddressSet;
