use std::sync::Arc;

use tracing::{error, info};

use crate::ports::BlocklistReloadPort;

/// `POST /blockcache/reload` (§6). Fires the rebuild in the background and
/// returns immediately — the control API only needs "accepted", not the
/// rebuild's outcome.
pub struct ReloadBlocklistUseCase {
    reload: Arc<dyn BlocklistReloadPort>,
}

impl ReloadBlocklistUseCase {
    pub fn new(reload: Arc<dyn BlocklistReloadPort>) -> Self {
        Self { reload }
    }

    pub fn trigger(&self) {
        let reload = Arc::clone(&self.reload);
        tokio::spawn(async move {
            match reload.reload().await {
                Ok(()) => info!("blocklist rebuild completed"),
                Err(e) => error!(error = %e, "blocklist rebuild failed, keeping prior cache"),
            }
        });
    }
}
