// src/crawl/fetcher.rs
// =============================================================================
// Fetches one page at a time, politely.
//
// Politeness:
// - A Pacer enforces a minimum gap between the START of consecutive fetches
// - The very first fetch waits too (the clock starts when the fetcher is built)
// - Failed fetches still count as a fetch start
//
// Errors:
// - Any HTTP status, even 404 or 500, is a successful fetch: we record it
// - Only transport problems (DNS, connect, timeout, broken body, redirect
//   loop) are errors, and the scheduler just moves on
// - Nothing is retried
//
// Rust concepts:
// - async/await: the crawl is suspended while the request is in flight
// - tokio::time::Instant: works with tokio's paused clock in tests
// =============================================================================

use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

// Default gap between fetch starts, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 1000;

// Upper bound on redirect hops for a single fetch
const MAX_REDIRECTS: usize = 10;

// Settings for the HTTP side of the crawl
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Minimum time between the start of two fetches
    pub pacing: Duration,
    /// Per-request timeout; None means wait as long as the transport does
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            pacing: Duration::from_millis(DEFAULT_DELAY_MS),
            timeout: None,
            user_agent: format!("sitecrawl/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

// A fetched page: whatever status the server answered with, plus the body
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

// Minimum-interval rate limiter for a single sequential worker
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    last_start: Instant,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_start: Instant::now(),
        }
    }

    // Sleeps until `interval` has passed since the previous call
    pub async fn wait(&mut self) {
        let elapsed = self.last_start.elapsed();
        if elapsed < self.interval {
            tokio::time::sleep(self.interval - elapsed).await;
        }
        self.last_start = Instant::now();
    }
}

pub struct Fetcher {
    client: Client,
    pacer: Pacer,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS));

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            pacer: Pacer::new(config.pacing),
        })
    }

    // Waits for the pacer, then GETs the URL and reads the whole body
    pub async fn fetch(&mut self, url: &str) -> Result<FetchedPage> {
        self.pacer.wait().await;

        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(FetchedPage { status, body })
    }
}
