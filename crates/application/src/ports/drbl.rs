use async_trait::async_trait;
use holedns_domain::Fqdn;

/// Aggregate weight peers assign to a name (§4.10). A peer that times out
/// or refuses contributes zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeerVerdict {
    pub aggregate_weight: u32,
}

#[async_trait]
pub trait DrblPort: Send + Sync {
    async fn verdict(&self, fqdn: &Fqdn) -> PeerVerdict;
}
