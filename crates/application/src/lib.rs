pub mod ports;
pub mod use_cases;

pub use holedns_domain::DnsQuery;
