use std::collections::VecDeque;

use holedns_application::ports::QuestionCachePort;
use holedns_domain::QuestionCacheEntry;
use parking_lot::Mutex;

/// Fixed-capacity ring of recent queries (§4.2). A `parking_lot::Mutex`
/// guards the deque directly; entries are small and the critical section is
/// short enough that a lock beats lock-free bookkeeping here.
pub struct QuestionCache {
    entries: Mutex<VecDeque<QuestionCacheEntry>>,
    capacity: usize,
}

impl QuestionCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity,
        }
    }
}

impl QuestionCachePort for QuestionCache {
    fn append(&self, entry: QuestionCacheEntry) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    fn enumerate(&self) -> Vec<QuestionCacheEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    fn clear(&self) {
        self.entries.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holedns_domain::{Classification, RecordType};

    fn entry(qname: &str) -> QuestionCacheEntry {
        QuestionCacheEntry::new(
            "127.0.0.1".parse().unwrap(),
            qname,
            RecordType::A,
            Classification::AllowedResolved,
        )
    }

    #[test]
    fn evicts_oldest_on_overflow() {
        let cache = QuestionCache::new(2);
        cache.append(entry("q1"));
        cache.append(entry("q2"));
        cache.append(entry("q3"));
        let entries = cache.enumerate();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].qname, "q2");
        assert_eq!(entries[1].qname, "q3");
    }

    #[test]
    fn zero_capacity_disables_logging() {
        let cache = QuestionCache::new(0);
        cache.append(entry("q1"));
        assert!(cache.enumerate().is_empty());
    }

    #[test]
    fn clear_empties_the_ring() {
        let cache = QuestionCache::new(4);
        cache.append(entry("q1"));
        cache.clear();
        assert!(cache.enumerate().is_empty());
    }
}
