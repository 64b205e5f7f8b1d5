// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing) on stderr
// 3. Validate the seed URL BEFORE creating the output file
// 4. Run the crawl until the frontier is empty
// 5. Exit with proper code (0 = crawl completed, 2 = error)
//
// Rust concepts used:
// - async/await: Each fetch is awaited, one at a time
// - Result<T, E>: For error handling (T = success type, E = error type)
// - ? operator: Stops early and hands the error up to main
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - the crawl scheduler and its parts
mod error;         // src/error.rs - typed errors
mod output;        // src/output/ - CSV / JSON Lines writers
mod progress;      // src/progress.rs - progress bar

use clap::Parser;  // Parser trait enables the parse() method
use cli::Cli;
use crawl::{CrawlSummary, Crawler, SeedOrigin};
use progress::ProgressTracker;
use tracing::info;
use tracing_subscriber::EnvFilter;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Invalid seed, or the output file couldn't be written
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with the output file path message.
// RUST_LOG wins over --verbose when it's set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "sitecrawl=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl ran to completion
//   Err = invalid seed or output failure (main turns this into exit code 2)
async fn run(cli: Cli) -> Result<i32> {
    // A bad seed must fail before the output file exists
    let origin = SeedOrigin::parse(&cli.seed_url)?;

    println!("🔍 Starting crawl of {}", origin.seed_url());
    info!(
        "Same-site prefixes: {} and {}",
        origin.base_url(),
        origin.alternate_base_url()
    );

    let sink = output::create_sink(&cli.output, cli.format)
        .with_context(|| format!("could not create {}", cli.output.display()))?;

    let config = cli.fetch_config();
    let progress = ProgressTracker::new(!cli.no_progress);

    let mut crawler = Crawler::new(origin, &config, sink, progress)?;
    let summary = crawler
        .run()
        .await
        .with_context(|| format!("could not write {}", cli.output.display()))?;

    println!();
    println!(
        "✅ Crawling completed. Please check {}",
        cli.output.display()
    );
    print_summary(&summary);

    Ok(0)
}

fn print_summary(summary: &CrawlSummary) {
    println!("📊 Summary:");
    println!("   📄 Pages recorded: {}", summary.records);
    println!("   ❌ Fetch errors: {}", summary.fetch_errors);
    println!("   🚧 Other-site links skipped: {}", summary.out_of_scope);
    println!(
        "   🔗 Links queued: {} ({} repeats dropped)",
        summary.links_admitted, summary.duplicates
    );
}
