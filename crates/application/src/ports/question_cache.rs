use holedns_domain::QuestionCacheEntry;

/// Bounded ring of recent queries (§4.2). `append` evicts the oldest entry
/// when at capacity; `enumerate` returns a consistent oldest-first snapshot.
pub trait QuestionCachePort: Send + Sync {
    fn append(&self, entry: QuestionCacheEntry);

    fn enumerate(&self) -> Vec<QuestionCacheEntry>;

    fn clear(&self);
}
