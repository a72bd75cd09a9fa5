//! SessionSweeper - Background eviction of expired intake sessions.
//!
//! Live sessions hold candidate details, so nothing is kept once a session
//! has sat unchanged past its retention window. The sweeper wakes on a fixed
//! interval and asks the store to drop whatever has expired.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `interval` | 60s | How often expired sessions are looked for |
//! | `retention.idle` | 30m | Lifetime of an untouched in-progress session |
//! | `retention.ended` | 5m | Lifetime of a completed or terminated session |

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::domain::intake::SessionRetention;
use crate::ports::SessionStore;

/// Background service that evicts expired sessions from a store.
pub struct SessionSweeper {
    store: Arc<dyn SessionStore>,
    retention: SessionRetention,
    interval: Duration,
}

impl SessionSweeper {
    pub fn new(store: Arc<dyn SessionStore>, retention: SessionRetention, interval: Duration) -> Self {
        Self {
            store,
            retention,
            interval,
        }
    }

    /// Run the sweep loop until the shutdown signal is received.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.interval);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        return;
                    }
                }

                _ = interval.tick() => {
                    self.sweep_once().await;
                }
            }
        }
    }

    /// Evict expired sessions once, returning how many were dropped.
    pub async fn sweep_once(&self) -> usize {
        let evicted = self.store.evict_expired(&self.retention).await;
        if evicted > 0 {
            tracing::info!(evicted, "Expired intake sessions evicted");
        }
        evicted
    }
}
