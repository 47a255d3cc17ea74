use std::sync::Arc;

use holedns_domain::Fqdn;

use crate::ports::BlockCachePort;

/// `GET /blockcache/exists/{name}` / `GET /blockcache/length` (§6).
pub struct BlockCacheInspectUseCase {
    block_cache: Arc<dyn BlockCachePort>,
}

impl BlockCacheInspectUseCase {
    pub fn new(block_cache: Arc<dyn BlockCachePort>) -> Self {
        Self { block_cache }
    }

    pub fn exists(&self, name: &str) -> bool {
        match Fqdn::new(name) {
            Some(fqdn) => self.block_cache.contains(&fqdn),
            None => false,
        }
    }

    pub fn length(&self) -> usize {
        self.block_cache.len()
    }
}
