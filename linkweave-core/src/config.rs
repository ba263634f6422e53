use crate::report::ReportFormat;
use std::env;

pub const DEFAULT_DEPTH: usize = 2;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything a single crawl invocation needs, resolved from flags and env.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    pub url: String,
    pub depth: usize,
    pub timeout_secs: u64,
    pub format: ReportFormat,
    pub quiet: bool,
}

/// Logging settings taken from `ENV` and `LOG_LEVEL`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub production: bool,
    pub level: Option<String>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_values(env::var("ENV").ok(), env::var("LOG_LEVEL").ok())
    }

    pub fn from_values(environment: Option<String>, level: Option<String>) -> Self {
        Self {
            production: environment.as_deref() == Some("production"),
            level: level.filter(|l| !l.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_only_when_exact() {
        assert!(LogSettings::from_values(Some("production".into()), None).production);
        assert!(!LogSettings::from_values(Some("staging".into()), None).production);
        assert!(!LogSettings::from_values(None, None).production);
    }

    #[test]
    fn test_blank_level_is_unset() {
        let settings = LogSettings::from_values(None, Some("  ".into()));
        assert_eq!(settings.level, None);

        let settings = LogSettings::from_values(None, Some("warn".into()));
        assert_eq!(settings.level.as_deref(), Some("warn"));
    }
}
