//! Single-entry, time-boxed cache in front of the board endpoint

use serde_json::Value;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct CachedBoard {
    pub data: Value,
    pub fetched_at: Instant,
}

/// Holds at most one board snapshot, invalidated purely by age
#[derive(Debug)]
pub struct BoardCache {
    entry: Option<CachedBoard>,
    ttl: Duration,
}

impl BoardCache {
    pub fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    /// The cached snapshot, if it is younger than the TTL at `now`
    pub fn get(&self, now: Instant) -> Option<&Value> {
        self.entry
            .as_ref()
            .filter(|entry| now.saturating_duration_since(entry.fetched_at) < self.ttl)
            .map(|entry| &entry.data)
    }

    pub fn store(&mut self, data: Value, now: Instant) {
        self.entry = Some(CachedBoard {
            data,
            fetched_at: now,
        });
    }
}
