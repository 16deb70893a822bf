//! Pending-request table.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::config::CorrelationConfig;
use crate::correlation::key::CorrelationKey;
use crate::observability::metrics;

/// Issue instants of requests still waiting for a response.
///
/// All access goes through one mutex, held only for the map operation.
/// A poisoned lock is recovered: a panic elsewhere must not disable logging.
///
/// The pending gauge is adjusted by deltas, so several tables in one process
/// add up instead of overwriting each other.
#[derive(Debug)]
pub struct PendingTable {
    entries: Mutex<HashMap<CorrelationKey, Instant>>,
    max_pending: usize,
    ttl: Duration,
}

impl PendingTable {
    pub fn new() -> Self {
        Self::from_config(&CorrelationConfig::default())
    }

    pub fn with_limits(max_pending: usize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_pending: max_pending.max(1),
            ttl,
        }
    }

    pub fn from_config(config: &CorrelationConfig) -> Self {
        Self::with_limits(config.max_pending, config.entry_ttl())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CorrelationKey, Instant>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Record `key` as issued at `issued`. Last write wins.
    ///
    /// When the table is full, stale entries go first, then the oldest one.
    pub fn insert(&self, key: CorrelationKey, issued: Instant) -> Option<Instant> {
        let (previous, evicted) = {
            let mut entries = self.lock();
            let mut evicted = 0;
            if !entries.contains_key(&key) && entries.len() >= self.max_pending {
                let before = entries.len();
                let ttl = self.ttl;
                entries.retain(|_, at| issued.saturating_duration_since(*at) <= ttl);
                evicted = before - entries.len();

                if entries.len() >= self.max_pending {
                    let oldest = entries
                        .iter()
                        .min_by_key(|(_, at)| **at)
                        .map(|(k, _)| k.clone());
                    if let Some(oldest) = oldest {
                        entries.remove(&oldest);
                        evicted += 1;
                    }
                }
            }
            let previous = entries.insert(key, issued);
            (previous, evicted)
        };

        if evicted > 0 {
            tracing::warn!(
                evicted,
                max_pending = self.max_pending,
                "Pending request table full"
            );
            metrics::record_evicted(evicted);
            metrics::record_pending_removed(evicted);
        }
        if previous.is_none() {
            metrics::record_pending_added(1);
        }
        previous
    }

    /// Remove and return the issue instant for `key`.
    pub fn take(&self, key: &CorrelationKey) -> Option<Instant> {
        let issued = self.lock().remove(key);
        if issued.is_some() {
            metrics::record_pending_removed(1);
        }
        issued
    }

    pub fn contains(&self, key: &CorrelationKey) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop entries issued more than `max_age` before `now`. Returns the count.
    pub fn evict_older_than(&self, max_age: Duration, now: Instant) -> usize {
        let evicted = {
            let mut entries = self.lock();
            let before = entries.len();
            entries.retain(|_, at| now.saturating_duration_since(*at) <= max_age);
            before - entries.len()
        };
        if evicted > 0 {
            metrics::record_evicted(evicted);
            metrics::record_pending_removed(evicted);
        }
        evicted
    }

    /// Drop entries older than the configured TTL.
    pub fn evict_expired(&self) -> usize {
        self.evict_older_than(self.ttl, Instant::now())
    }
}

impl Default for PendingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PendingTable {
    fn drop(&mut self) {
        let remaining = self.lock().len();
        if remaining > 0 {
            metrics::record_pending_removed(remaining);
        }
    }
}
