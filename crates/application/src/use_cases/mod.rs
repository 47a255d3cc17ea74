mod activation_control;
mod block_cache_inspect;
mod handle_dns_query;
mod question_cache_control;
mod reload_blocklist;

pub use activation_control::ActivationControlUseCase;
pub use block_cache_inspect::BlockCacheInspectUseCase;
pub use handle_dns_query::{HandleDnsQueryUseCase, QueryOutcome};
pub use question_cache_control::QuestionCacheControlUseCase;
pub use reload_blocklist::ReloadBlocklistUseCase;
