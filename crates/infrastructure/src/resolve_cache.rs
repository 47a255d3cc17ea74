use dashmap::DashMap;
use holedns_application::ports::{CachedAnswer, ResolveCachePort};
use holedns_domain::{DnsQuery, Fqdn};

/// TTL-aware positive/negative answer cache (§4.3). Expired entries are
/// purged lazily on `get`; `scavenge` additionally runs a background sweep
/// so a cache that stops being queried still releases memory.
pub struct ResolveCache {
    entries: DashMap<DnsQuery, CachedAnswer>,
}

impl ResolveCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Drops every entry whose TTL has elapsed. Intended to be called
    /// periodically by a maintenance job, not on the request hot path.
    pub fn scavenge(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, v| !v.is_expired());
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResolveCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolveCachePort for ResolveCache {
    fn get(&self, query: &DnsQuery) -> Option<CachedAnswer> {
        let entry = self.entries.get(query)?;
        if entry.is_expired() {
            drop(entry);
            self.entries.remove(query);
            return None;
        }
        Some(entry.clone())
    }

    fn put(&self, query: &DnsQuery, answer: CachedAnswer) {
        self.entries.insert(query.clone(), answer);
    }

    fn invalidate(&self, qname: &Fqdn) {
        self.entries.retain(|k, _| &k.qname != qname);
    }

    fn scavenge(&self) -> usize {
        self.scavenge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::ResponseCode;
    use holedns_domain::{QClass, RecordType};
    use std::time::{Duration, Instant};

    fn query() -> DnsQuery {
        DnsQuery::new(Fqdn::new("example.com").unwrap(), RecordType::A, QClass::In)
    }

    fn answer(ttl: Duration) -> CachedAnswer {
        CachedAnswer {
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            rcode: ResponseCode::NoError,
            expires_at: Instant::now() + ttl,
            negative: false,
        }
    }

    #[test]
    fn hit_within_ttl_then_miss_after_expiry() {
        let cache = ResolveCache::new();
        let q = query();
        cache.put(&q, answer(Duration::from_millis(50)));
        assert!(cache.get(&q).is_some());
        std::thread::sleep(Duration::from_millis(60));
        assert!(cache.get(&q).is_none());
    }

    #[test]
    fn invalidate_removes_all_qtypes_for_a_name() {
        let cache = ResolveCache::new();
        let q_a = query();
        let q_aaaa = DnsQuery::new(Fqdn::new("example.com").unwrap(), RecordType::Aaaa, QClass::In);
        cache.put(&q_a, answer(Duration::from_secs(60)));
        cache.put(&q_aaaa, answer(Duration::from_secs(60)));
        cache.invalidate(&Fqdn::new("example.com").unwrap());
        assert!(cache.get(&q_a).is_none());
        assert!(cache.get(&q_aaaa).is_none());
    }

    #[test]
    fn scavenge_drops_only_expired_entries() {
        let cache = ResolveCache::new();
        cache.put(&query(), answer(Duration::from_millis(10)));
        let fresh = DnsQuery::new(Fqdn::new("fresh.test").unwrap(), RecordType::A, QClass::In);
        cache.put(&fresh, answer(Duration::from_secs(60)));
        std::thread::sleep(Duration::from_millis(20));
        let removed = cache.scavenge();
        assert_eq!(removed, 1);
        assert_eq!(cache.len(), 1);
    }
}
