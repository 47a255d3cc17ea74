use crate::dns_record::{QClass, RecordType};
use crate::fqdn::Fqdn;

/// (qname, qtype, qclass) — the key used by the ResolveCache and by
/// single-flight coalescing in the Resolver (§3, ResolveCacheKey).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuery {
    pub qname: Fqdn,
    pub qtype: RecordType,
    pub qclass: QClass,
}

impl DnsQuery {
    pub fn new(qname: Fqdn, qtype: RecordType, qclass: QClass) -> Self {
        Self {
            qname,
            qtype,
            qclass,
        }
    }
}
