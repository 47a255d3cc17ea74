use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use holedns_domain::{DnsQuery, Fqdn};
use std::time::Instant;

/// A cached positive or negative answer (§4.3). `negative` marks NXDOMAIN /
/// NODATA responses, whose TTL is bounded by the SOA MINIMUM (or a
/// configured max) rather than the record TTLs.
#[derive(Debug, Clone)]
pub struct CachedAnswer {
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub additional: Vec<Record>,
    pub rcode: ResponseCode,
    pub expires_at: Instant,
    pub negative: bool,
}

impl CachedAnswer {
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

pub trait ResolveCachePort: Send + Sync {
    /// Returns `None` on miss or if the stored entry has expired.
    fn get(&self, query: &DnsQuery) -> Option<CachedAnswer>;

    fn put(&self, query: &DnsQuery, answer: CachedAnswer);

    /// Removes every cached key for `qname`, regardless of qtype/qclass.
    fn invalidate(&self, qname: &Fqdn);

    /// Drops every expired entry and returns how many were removed.
    /// Intended for periodic background maintenance, not the query path.
    fn scavenge(&self) -> usize;
}
