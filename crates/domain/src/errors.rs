use thiserror::Error;

/// Per-query resolution failures (§7). Never propagates past the request
/// task; the handler converts these into SERVFAIL/REFUSED responses.
#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    #[error("all upstreams timed out")]
    Timeout,
    #[error("upstream transport failure: {0}")]
    Network(String),
    #[error("upstream refused the query")]
    Refused,
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

/// The full error taxonomy (§7). `Config` and `Bind` are fatal at startup;
/// `SourceFetch` is recovered locally during a blocklist rebuild; `Resolve`
/// and `Protocol` are per-request; `Internal` wraps a caught panic.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("failed to fetch blocklist source {uri}: {reason}")]
    SourceFetch { uri: String, reason: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("malformed DNS message: {0}")]
    Protocol(String),

    #[error("internal error: {0}")]
    Internal(String),
}
