use serde::{Deserialize, Serialize};

/// `upstream` plus the timing knobs of §5 (per-upstream timeout, overall
/// resolve budget, client socket read/write timeout).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub servers: Vec<String>,

    pub query_timeout_ms: u64,

    pub resolve_budget_ms: u64,

    pub client_timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            servers: vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()],
            query_timeout_ms: 2_000,
            resolve_budget_ms: 5_000,
            client_timeout_ms: 5_000,
        }
    }
}
