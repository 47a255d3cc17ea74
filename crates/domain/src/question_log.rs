use crate::dns_record::RecordType;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::net::IpAddr;

/// Terminal classification of a single DNS query, recorded into the
/// QuestionCache (§3, QuestionCacheEntry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Blocked,
    AllowedCustom,
    AllowedCached,
    AllowedResolved,
    Refused,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionCacheEntry {
    pub timestamp: DateTime<Utc>,
    pub remote_addr: IpAddr,
    pub qname: String,
    pub qtype: RecordType,
    pub classification: Classification,
}

impl QuestionCacheEntry {
    pub fn new(
        remote_addr: IpAddr,
        qname: impl Into<String>,
        qtype: RecordType,
        classification: Classification,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            remote_addr,
            qname: qname.into(),
            qtype,
            classification,
        }
    }
}
