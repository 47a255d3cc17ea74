use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use holedns_domain::{DnsQuery, ResolveError};

/// A resolved upstream answer, carried far enough to populate both the
/// ResolveCache and the wire response (§4.4).
#[derive(Debug, Clone)]
pub struct ResolverResponse {
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub additional: Vec<Record>,
    pub rcode: ResponseCode,

    /// Minimum TTL across the answer/authority sections; `None` defers to
    /// the negative-cache default.
    pub min_ttl: Option<u32>,
}

#[async_trait]
pub trait Resolver: Send + Sync {
    /// Parallel-upstream, single-flight resolution (§4.4, §5). Implementors
    /// own the upstream fan-out and coalescing; callers see one future per
    /// logical query regardless of how many callers share its key.
    async fn resolve(&self, query: &DnsQuery) -> Result<ResolverResponse, ResolveError>;
}
