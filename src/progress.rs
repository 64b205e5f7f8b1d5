// src/progress.rs
// =============================================================================
// A rough progress bar for the crawl.
//
// We can't know how big a site is before crawling it, so the percentage is
//   processed / discovered
// where `discovered` grows every time a link is queued. The bar can move
// backwards when a page reveals lots of new links. It's an estimate, not a
// promise.
//
// `processed` counts every fetch attempt, including failed ones.
// =============================================================================

use indicatif::{ProgressBar, ProgressStyle};

pub struct ProgressTracker {
    bar: ProgressBar,
    processed: u64,
    discovered: u64,
}

impl ProgressTracker {
    // Creates a tracker; with visible=false nothing is drawn but counts still work
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::with_template("[{bar:30}] {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-"),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            processed: 0,
            discovered: 0,
        }
    }

    // A URL was added to the frontier
    pub fn link_discovered(&mut self) {
        self.discovered += 1;
        self.bar.set_length(self.discovered);
        self.redraw();
    }

    // A fetch finished (successfully or not)
    pub fn page_processed(&mut self) {
        self.processed += 1;
        self.bar.set_position(self.processed.min(self.discovered));
        self.redraw();
    }

    pub fn percent(&self) -> f64 {
        if self.discovered == 0 {
            return 0.0;
        }
        (self.processed as f64 / self.discovered as f64 * 100.0).min(100.0)
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn discovered(&self) -> u64 {
        self.discovered
    }

    pub fn finish(&self) {
        self.bar.finish();
    }

    fn redraw(&self) {
        self.bar.set_message(format!("{:.2}%", self.percent()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_starts_at_zero() {
        let tracker = ProgressTracker::new(false);
        assert_eq!(tracker.percent(), 0.0);
    }

    #[test]
    fn test_denominator_grows_with_discoveries() {
        let mut tracker = ProgressTracker::new(false);
        tracker.link_discovered();
        tracker.page_processed();
        assert_eq!(tracker.percent(), 100.0);

        // The first page revealed three more links
        for _ in 0..3 {
            tracker.link_discovered();
        }
        assert_eq!(tracker.percent(), 25.0);

        tracker.page_processed();
        assert_eq!(tracker.percent(), 50.0);
        assert_eq!(tracker.processed(), 2);
        assert_eq!(tracker.discovered(), 4);
    }

    #[test]
    fn test_percent_is_capped() {
        let mut tracker = ProgressTracker::new(false);
        tracker.link_discovered();
        tracker.page_processed();
        tracker.page_processed();
        assert_eq!(tracker.percent(), 100.0);
    }
}
