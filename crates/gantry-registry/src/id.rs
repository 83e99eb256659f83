//! Atomic id generation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generates unique, strictly increasing ids with a single atomic increment.
///
/// No locking, no coordination: N concurrent calls produce N distinct values
/// with no duplicates and no gaps. Ids are monotonic per generator. The
/// counter is 64 bits wide; wrap-around is out of practical reach and is not
/// guarded against.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator that starts at zero.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a generator with an explicit first id.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns the next id.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Returns the id that the next call to [`next_id`](Self::next_id) would
    /// produce, without claiming it.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
