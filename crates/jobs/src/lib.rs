pub mod blocklist_sync;
pub mod resolve_cache_scavenge;
pub mod runner;

pub use blocklist_sync::BlocklistSyncJob;
pub use resolve_cache_scavenge::ResolveCacheScavengeJob;
pub use runner::JobRunner;
