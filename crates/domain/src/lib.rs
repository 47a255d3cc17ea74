pub mod activation;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod fqdn;
pub mod question_log;

pub use activation::ActivationState;
pub use config::Config;
pub use dns_query::DnsQuery;
pub use dns_record::{CustomRecord, QClass, RecordData, RecordType};
pub use errors::{DomainError, ResolveError};
pub use fqdn::Fqdn;
pub use question_log::{Classification, QuestionCacheEntry};
