use std::sync::Arc;

use async_trait::async_trait;
use holedns_application::ports::BlocklistReloadPort;
use holedns_domain::config::BlockingConfig;
use holedns_domain::DomainError;

use crate::block_cache::BlockCache;

use super::builder::BlocklistBuilder;

/// Glue between the builder and the live [`BlockCache`]: on success the new
/// set is swapped in; on failure the prior cache is left untouched (§9
/// Open Question: preserve, don't empty).
pub struct BlocklistReloader {
    builder: BlocklistBuilder,
    block_cache: Arc<BlockCache>,
    config: BlockingConfig,
}

impl BlocklistReloader {
    pub fn new(block_cache: Arc<BlockCache>, config: BlockingConfig) -> Self {
        Self {
            builder: BlocklistBuilder::new(),
            block_cache,
            config,
        }
    }
}

#[async_trait]
impl BlocklistReloadPort for BlocklistReloader {
    async fn reload(&self) -> Result<(), DomainError> {
        let names = self.builder.build(&self.config).await?;
        self.block_cache.swap(names);
        Ok(())
    }
}
