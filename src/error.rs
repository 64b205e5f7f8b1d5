// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// Only one of these is ever fatal before the crawl starts: InvalidSeed.
// Http errors are caught by the scheduler and counted (the URL just
// contributes nothing). Csv/Json/Io errors come from the output sink and
// stop the crawl.
//
// Rust concepts:
// - thiserror: derives Display and std::error::Error for our enum
// - #[from]: lets the ? operator convert library errors automatically
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    /// The seed URL given on the command line can't be crawled
    #[error("invalid seed URL '{input}': {reason}")]
    InvalidSeed { input: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CrawlError {
    pub(crate) fn invalid_seed(input: &str, reason: impl Into<String>) -> Self {
        CrawlError::InvalidSeed {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
