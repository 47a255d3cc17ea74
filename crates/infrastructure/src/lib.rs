pub mod activation;
pub mod block_cache;
pub mod blocklist;
pub mod custom_records;
pub mod dns;
pub mod drbl;
pub mod question_cache;
pub mod resolve_cache;

pub use activation::ActivationMachine;
pub use block_cache::BlockCache;
pub use blocklist::{BlocklistBuilder, BlocklistReloader};
pub use custom_records::CustomRecordsStore;
pub use dns::{DnsServerHandler, ListenerPair, UpstreamResolver};
pub use drbl::HttpDrblClient;
pub use question_cache::QuestionCache;
pub use resolve_cache::ResolveCache;
