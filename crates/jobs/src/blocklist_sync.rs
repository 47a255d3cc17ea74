use holedns_application::ports::BlocklistReloadPort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Periodically rebuilds the block cache from its configured sources
/// (§4.5, §10.4 `update_interval_seconds`). The first tick is consumed
/// immediately so a reload doesn't happen right after the startup build
/// already performed by the caller.
pub struct BlocklistSyncJob {
    reloader: Arc<dyn BlocklistReloadPort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl BlocklistSyncJob {
    pub fn new(reloader: Arc<dyn BlocklistReloadPort>, interval_secs: u64) -> Self {
        Self {
            reloader,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "starting blocklist sync job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("blocklist sync job shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        info!("blocklist sync job: reloading blocklist sources");
                        match self.reloader.reload().await {
                            Ok(()) => info!("blocklist sync job: reload completed"),
                            Err(e) => error!(error = %e, "blocklist sync job: reload failed"),
                        }
                    }
                }
            }
        });
    }
}
