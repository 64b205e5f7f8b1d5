// src/crawl/scheduler.rs
// =============================================================================
// The crawl loop. One Crawler owns one frontier, one fetcher and one sink.
//
// Each iteration:
// 1. Pop the oldest URL from the frontier
// 2. Mark it visited; if it already was, drop it and move on
// 3. Out of scope? Move on (no fetch, no record)
// 4. Wait for the pacer, fetch it
// 5. Fetch failed? Count it and move on (no record)
// 6. Parse the page, write a record, queue every http(s) link we haven't
//    visited yet
// Repeat until the frontier is empty, then finish the sink and move to Done.
// The loop runs off `state`, so a finished crawl stays finished.
//
// Only one fetch is ever in flight, so the pacer's interval is the crawl's
// global rate limit and the frontier needs no locking.
// =============================================================================

use super::fetcher::{FetchConfig, Fetcher};
use super::frontier::Frontier;
use super::normalize::resolve;
use super::origin::SeedOrigin;
use super::parser::{parse_page, PageSummary};
use crate::error::Result;
use crate::output::{CrawlRecord, RecordSink};
use crate::progress::ProgressTracker;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    /// Frontier still has work
    Running,
    /// Handling the URL that was just popped
    Draining,
    /// Frontier is empty and the sink has been finished
    Done,
}

// Counters reported when the crawl completes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Records written to the sink (successful in-scope fetches)
    pub records: usize,
    pub fetch_errors: usize,
    /// Popped URLs that belonged to another site
    pub out_of_scope: usize,
    /// Popped URLs that had already been visited
    pub duplicates: usize,
    /// Links pushed onto the frontier (the seed not included)
    pub links_admitted: usize,
}

pub struct Crawler<S: RecordSink> {
    origin: SeedOrigin,
    frontier: Frontier,
    fetcher: Fetcher,
    sink: S,
    progress: ProgressTracker,
    summary: CrawlSummary,
    state: CrawlState,
}

impl<S: RecordSink> Crawler<S> {
    // Sets up a crawl with the seed as the only frontier entry
    pub fn new(
        origin: SeedOrigin,
        config: &FetchConfig,
        sink: S,
        mut progress: ProgressTracker,
    ) -> Result<Self> {
        let fetcher = Fetcher::new(config)?;

        let mut frontier = Frontier::new();
        frontier.push(origin.seed_url().to_string());
        progress.link_discovered();

        Ok(Self {
            origin,
            frontier,
            fetcher,
            sink,
            progress,
            summary: CrawlSummary::default(),
            state: CrawlState::Running,
        })
    }

    // Runs until the frontier is empty. Once Done, further calls return
    // the same summary without touching the sink again.
    //
    // Fetch errors never end the crawl. Sink errors do.
    pub async fn run(&mut self) -> Result<CrawlSummary> {
        info!("Starting crawl of {}", self.origin.seed_url());

        while self.state != CrawlState::Done {
            match self.frontier.pop() {
                Some(url) => {
                    self.transition(CrawlState::Draining);
                    self.visit(url).await?;
                    self.transition(CrawlState::Running);
                }
                None => {
                    self.sink.finish()?;
                    self.progress.finish();
                    self.transition(CrawlState::Done);
                }
            }
        }

        info!(
            "Crawl complete: {} record(s), {} fetch error(s), {} URL(s) visited, {}/{} processed",
            self.summary.records,
            self.summary.fetch_errors,
            self.frontier.visited_count(),
            self.progress.processed(),
            self.progress.discovered(),
        );

        Ok(self.summary.clone())
    }

    // Handles one popped URL
    async fn visit(&mut self, url: String) -> Result<()> {
        if !self.frontier.mark_visited(url.clone()) {
            self.summary.duplicates += 1;
            return Ok(());
        }

        if !self.origin.in_scope(&url) {
            debug!("Skipping out-of-scope URL {}", url);
            self.summary.out_of_scope += 1;
            return Ok(());
        }

        let fetched = self.fetcher.fetch(&url).await;
        self.progress.page_processed();

        let page = match fetched {
            Ok(page) => page,
            Err(e) => {
                debug!("Failed to fetch {}: {}", url, e);
                self.summary.fetch_errors += 1;
                return Ok(());
            }
        };

        debug!(
            "Fetched {} [{}] ({} pending)",
            url,
            page.status,
            self.frontier.pending()
        );

        let PageSummary {
            title,
            description,
            links,
        } = parse_page(&page.body);

        self.sink.write_record(&CrawlRecord {
            url,
            status: Some(page.status),
            title,
            description,
        })?;
        self.summary.records += 1;

        for href in &links {
            if let Some(link) = resolve(href, &self.origin) {
                if self.frontier.admit(link) {
                    self.summary.links_admitted += 1;
                    self.progress.link_discovered();
                }
            }
        }

        Ok(())
    }

    fn transition(&mut self, next: CrawlState) {
        trace!("crawl state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
impl<S: RecordSink> Crawler<S> {
    fn state(&self) -> CrawlState {
        self.state
    }

    fn into_sink(self) -> S {
        self.sink
    }
}
