//! Background eviction of requests that never got a response.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::correlation::table::PendingTable;

/// Handle to a running sweeper task. Dropping it also stops the task.
#[derive(Debug)]
pub struct SweeperHandle {
    shutdown: broadcast::Sender<()>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stop the sweeper and wait for it to exit.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        let _ = self.task.await;
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn a task that calls [`PendingTable::evict_expired`] every `every`.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_sweeper(table: Arc<PendingTable>, every: Duration) -> SweeperHandle {
    let (shutdown, mut rx) = broadcast::channel(1);

    let task = tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::debug!(
            interval_ms = every.as_millis() as u64,
            ttl_secs = table.ttl().as_secs(),
            "Pending table sweeper started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let evicted = table.evict_expired();
                    if evicted > 0 {
                        tracing::debug!(
                            evicted,
                            remaining = table.len(),
                            "Evicted stale pending requests"
                        );
                    }
                }
                _ = rx.recv() => break,
            }
        }

        tracing::debug!("Pending table sweeper stopped");
    });

    SweeperHandle { shutdown, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::key::generate_key;
    use std::collections::HashMap;
    use std::time::Instant;

    #[tokio::test]
    async fn test_sweeper_evicts_stale_entries() {
        let table = Arc::new(PendingTable::with_limits(100, Duration::from_millis(100)));
        let stale = generate_key("GET", "/stale", &HashMap::new(), "");
        let fresh = generate_key("GET", "/fresh", &HashMap::new(), "");

        let issued = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .unwrap_or_else(Instant::now);
        table.insert(stale.clone(), issued);
        table.insert(fresh.clone(), Instant::now() + Duration::from_secs(60));

        let handle = spawn_sweeper(table.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(!table.contains(&stale));
        assert!(table.contains(&fresh));
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_task() {
        let table = Arc::new(PendingTable::new());
        let handle = spawn_sweeper(table, Duration::from_secs(3600));
        assert!(!handle.is_finished());
        handle.shutdown().await;
    }
}
