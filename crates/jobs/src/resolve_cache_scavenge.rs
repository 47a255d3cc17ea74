use holedns_application::ports::ResolveCachePort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically purges expired entries from the ResolveCache so a name
/// that stops being queried still releases memory (§4.3).
pub struct ResolveCacheScavengeJob {
    cache: Arc<dyn ResolveCachePort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl ResolveCacheScavengeJob {
    pub fn new(cache: Arc<dyn ResolveCachePort>, interval_secs: u64) -> Self {
        Self {
            cache,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "starting resolve cache scavenge job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("resolve cache scavenge job shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.cache.scavenge();
                        if removed > 0 {
                            debug!(removed, "resolve cache scavenge removed expired entries");
                        }
                    }
                }
            }
        });
    }
}
