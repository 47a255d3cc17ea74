use std::sync::Arc;

use holedns_domain::QuestionCacheEntry;

use crate::ports::QuestionCachePort;

/// `GET /questioncache` / `DELETE /questioncache` (§6).
pub struct QuestionCacheControlUseCase {
    question_cache: Arc<dyn QuestionCachePort>,
}

impl QuestionCacheControlUseCase {
    pub fn new(question_cache: Arc<dyn QuestionCachePort>) -> Self {
        Self { question_cache }
    }

    pub fn enumerate(&self) -> Vec<QuestionCacheEntry> {
        self.question_cache.enumerate()
    }

    pub fn clear(&self) {
        self.question_cache.clear();
    }
}
