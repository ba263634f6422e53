use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Non-success status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Malformed link '{link}' on {page}: {source}")]
    MalformedLink {
        link: String,
        page: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

impl ScanError {
    /// Builds a fetch failure for fetchers that are not backed by reqwest.
    pub fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// True for errors raised by a `Fetcher`, which abort the whole run.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::HttpStatus { .. } | Self::Fetch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = ScanError::fetch("https://example.com/", "not found");
        assert_eq!(err.to_string(), "Failed to fetch https://example.com/: not found");
        assert!(err.is_fetch_error());
    }

    #[test]
    fn test_status_error_is_fetch_error() {
        let err = ScanError::HttpStatus {
            url: "https://example.com/missing".to_string(),
            status: 404,
        };
        assert!(err.is_fetch_error());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_malformed_link_is_not_fetch_error() {
        let source = url::Url::parse("https://example.com/")
            .unwrap()
            .join("http://[::1")
            .unwrap_err();
        let err = ScanError::MalformedLink {
            link: "http://[::1".to_string(),
            page: "https://example.com/".to_string(),
            source,
        };
        assert!(!err.is_fetch_error());
        assert!(err.to_string().starts_with("Malformed link 'http://[::1'"));
    }
}
