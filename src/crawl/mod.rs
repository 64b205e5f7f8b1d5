// src/crawl/mod.rs
// =============================================================================
// This module holds everything that decides what gets fetched, in what
// order, and exactly once.
//
// Submodules (leaves first):
// - origin: what counts as "the same site" as the seed
// - normalize: href -> canonical absolute URL
// - frontier: FIFO queue + visited set
// - fetcher: paced HTTP GETs
// - parser: title, description and links from HTML
// - scheduler: the loop tying it all together
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Same-site restriction (www. and bare host count as one site)
// - Polite crawling: one request at a time with a minimum gap
// =============================================================================

mod fetcher;
mod frontier;
mod normalize;
mod origin;
mod parser;
mod scheduler;

pub use fetcher::{FetchConfig, DEFAULT_DELAY_MS};
pub use origin::SeedOrigin;
pub use scheduler::{CrawlSummary, Crawler};
