use serde::{Deserialize, Serialize};

/// `sources` / `allowlist` / `customblock` / `blockttl` / `matchsubdomains`
/// (§6) plus the `FailIfZero` knob from §4.5 step 2.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BlockingConfig {
    pub sources: Vec<String>,

    pub allowlist: Vec<String>,

    pub customblock: Vec<String>,

    pub block_ttl: u32,

    pub match_subdomains: bool,

    pub fail_if_zero_sources: bool,

    pub source_fetch_timeout_ms: u64,
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            allowlist: Vec::new(),
            customblock: Vec::new(),
            block_ttl: 3600,
            match_subdomains: false,
            fail_if_zero_sources: false,
            source_fetch_timeout_ms: 10_000,
        }
    }
}
