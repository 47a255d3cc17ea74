use crate::{BlocklistSyncJob, ResolveCacheScavengeJob};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Composes the server's background jobs and starts them together,
/// wiring a shared shutdown token through whichever jobs are configured.
pub struct JobRunner {
    blocklist_sync: Option<BlocklistSyncJob>,
    resolve_cache_scavenge: Option<ResolveCacheScavengeJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            blocklist_sync: None,
            resolve_cache_scavenge: None,
            shutdown: None,
        }
    }

    pub fn with_blocklist_sync(mut self, job: BlocklistSyncJob) -> Self {
        self.blocklist_sync = Some(job);
        self
    }

    pub fn with_resolve_cache_scavenge(mut self, job: ResolveCacheScavengeJob) -> Self {
        self.resolve_cache_scavenge = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) {
        info!("starting background job runner");

        if let Some(job) = self.blocklist_sync {
            let job = match &self.shutdown {
                Some(token) => job.with_cancellation(token.clone()),
                None => job,
            };
            Arc::new(job).start().await;
        }

        if let Some(job) = self.resolve_cache_scavenge {
            let job = match &self.shutdown {
                Some(token) => job.with_cancellation(token.clone()),
                None => job,
            };
            Arc::new(job).start().await;
        }

        info!("all background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
