// src/crawl/frontier.rs
// =============================================================================
// The crawl frontier: a FIFO queue of URLs waiting to be fetched, plus the
// set of URLs we've already dequeued and decided on.
//
// Invariants:
// - pop() is strict FIFO, so the crawl is breadth-first
// - The same URL may sit in the queue more than once; duplicates are
//   thrown away when they reach the front (mark_visited returns false)
// - Every popped URL goes into `visited` exactly once, in scope or not
//
// Rust concepts:
// - VecDeque: push to the back, pop from the front
// - HashSet: O(1) "have we seen this?" lookups
// =============================================================================

use std::collections::{HashSet, VecDeque};

#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<String>,
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    // Adds a URL to the back of the queue (no checks)
    pub fn push(&mut self, url: String) {
        self.queue.push_back(url);
    }

    // Takes the oldest pending URL, or None when the crawl is finished
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    // Queues a discovered link unless it was already dequeued before
    //
    // Returns true if the link was queued.
    // Links that are queued but not yet visited can be queued again;
    // the duplicate is dropped when it's popped.
    pub fn admit(&mut self, url: String) -> bool {
        if self.visited.contains(&url) {
            return false;
        }
        self.push(url);
        true
    }

    // Records a URL as decided. Returns true only the first time, which is
    // the scheduler's one and only duplicate check.
    pub fn mark_visited(&mut self, url: String) -> bool {
        self.visited.insert(url)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
