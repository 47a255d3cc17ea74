use holedns_domain::{CustomRecord, Fqdn};

/// Exact-match static answer set (§4.6). Highest priority of any lookup
/// stage; bypasses both the BlockCache and the Resolver.
pub trait CustomRecordsPort: Send + Sync {
    /// All records configured under `fqdn`, or empty if none match.
    fn lookup(&self, fqdn: &Fqdn) -> Vec<CustomRecord>;
}
