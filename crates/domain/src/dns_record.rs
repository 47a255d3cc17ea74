use crate::fqdn::Fqdn;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// The record types this server reasons about directly. Anything else
/// forwarded to an upstream is carried opaquely by the resolver layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
    Soa,
    Ptr,
    Other(u16),
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::Aaaa => write!(f, "AAAA"),
            RecordType::Cname => write!(f, "CNAME"),
            RecordType::Mx => write!(f, "MX"),
            RecordType::Txt => write!(f, "TXT"),
            RecordType::Ns => write!(f, "NS"),
            RecordType::Soa => write!(f, "SOA"),
            RecordType::Ptr => write!(f, "PTR"),
            RecordType::Other(v) => write!(f, "TYPE{v}"),
        }
    }
}

impl serde::Serialize for RecordType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// DNS query class. Only IN and CH are accepted by the handler (§4.8.2);
/// anything else is refused before it reaches the cache/resolver layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QClass {
    In,
    Ch,
    Other(u16),
}

impl QClass {
    pub fn is_acceptable(self) -> bool {
        matches!(self, QClass::In | QClass::Ch)
    }
}

/// Static record data for a [`CustomRecord`], pre-parsed at config load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(String),
    Txt(String),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::Aaaa,
            RecordData::Cname(_) => RecordType::Cname,
            RecordData::Txt(_) => RecordType::Txt,
        }
    }
}

/// A static answer compiled from `customdnsrecords` at startup. Matched by
/// exact (case-insensitive) name equality; takes priority over both the
/// BlockCache and the Resolver (§4.6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomRecord {
    pub name: Fqdn,
    pub data: RecordData,
    pub ttl: u32,
}

impl CustomRecord {
    pub fn new(name: Fqdn, data: RecordData, ttl: u32) -> Self {
        Self { name, data, ttl }
    }
}
