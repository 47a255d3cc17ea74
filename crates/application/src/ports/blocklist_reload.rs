use async_trait::async_trait;
use holedns_domain::DomainError;

/// Triggers an async BlockCache rebuild (§4.5, control API `POST
/// /blockcache/reload`). A failed reload must leave the prior cache in
/// place; this port only reports whether the rebuild itself succeeded.
#[async_trait]
pub trait BlocklistReloadPort: Send + Sync {
    async fn reload(&self) -> Result<(), DomainError>;
}
