use std::collections::HashSet;
use std::sync::Arc;

use arc_swap::ArcSwap;
use holedns_application::ports::BlockCachePort;
use holedns_domain::Fqdn;
use rustc_hash::FxBuildHasher;

pub type NameSet = HashSet<String, FxBuildHasher>;

/// O(1) membership test over an immutable, atomically-swappable set of
/// blocked FQDNs (§4.1). Readers never block a concurrent rebuild and vice
/// versa: `swap` publishes a whole new `Arc<NameSet>` and old readers keep
/// whatever snapshot they already loaded.
pub struct BlockCache {
    inner: ArcSwap<NameSet>,
}

impl BlockCache {
    pub fn new(names: NameSet) -> Self {
        Self {
            inner: ArcSwap::from_pointee(names),
        }
    }

    pub fn empty() -> Self {
        Self::new(NameSet::default())
    }

    pub fn swap(&self, names: NameSet) {
        self.inner.store(Arc::new(names));
    }
}

impl BlockCachePort for BlockCache {
    fn contains(&self, fqdn: &Fqdn) -> bool {
        self.inner.load().contains(fqdn.as_str())
    }

    fn len(&self) -> usize {
        self.inner.load().len()
    }
}
