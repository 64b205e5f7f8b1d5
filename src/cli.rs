// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   sitecrawl https://example.com
//   sitecrawl https://example.com --delay-ms 500 -o pages.csv
//   sitecrawl https://example.com --format json -o pages.jsonl
//
// Rust concepts:
// - Structs: the parsed arguments live in one struct
// - Derive macros: clap generates the parser from the struct definition
// =============================================================================

use crate::crawl::{FetchConfig, DEFAULT_DELAY_MS};
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "sitecrawl",
    version,
    about = "Crawl one website and record every page's title and description",
    long_about = "sitecrawl starts from a seed URL, follows links that stay on the same site \
                  (www. and bare host count as one site), and writes one row per fetched page. \
                  Requests are made one at a time with a minimum delay between them."
)]
pub struct Cli {
    /// Seed URL to start crawling from (must be http or https)
    ///
    /// Example: sitecrawl https://example.com
    pub seed_url: String,

    /// Minimum delay between the start of two requests, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// File to write results to (overwritten if it exists)
    #[arg(short, long, value_name = "PATH", default_value = "output.csv")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Don't draw the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print debug logs (RUST_LOG overrides this)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    // Builds the fetcher settings from the flags
    pub fn fetch_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig {
            pacing: Duration::from_millis(self.delay_ms),
            timeout: self.timeout.map(Duration::from_secs),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<u64> for --timeout?
//    - clap makes Option fields optional flags
//    - None means the user didn't pass the flag at all
//    - That's different from 0, which would be a real (useless) timeout
//
// 2. What is value_enum?
//    - It tells clap to accept the variants of an enum as values
//    - OutputFormat::Csv becomes "csv", OutputFormat::Json becomes "json"
//    - Anything else is rejected with a helpful error message
// -----------------------------------------------------------------------------
