mod activation;
mod block_cache;
mod blocklist_reload;
mod custom_records;
mod drbl;
mod question_cache;
mod resolve_cache;
mod resolver;

pub use activation::{ActivationPort, PauseDuration};
pub use block_cache::BlockCachePort;
pub use blocklist_reload::BlocklistReloadPort;
pub use custom_records::CustomRecordsPort;
pub use drbl::{DrblPort, PeerVerdict};
pub use question_cache::QuestionCachePort;
pub use resolve_cache::{CachedAnswer, ResolveCachePort};
pub use resolver::{Resolver, ResolverResponse};
