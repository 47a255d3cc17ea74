use serde::{Deserialize, Serialize};

/// `drbl.*` (§6, §4.10): optional distributed real-time blocklist peer
/// consultation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DrblConfig {
    pub enabled: bool,

    pub peers_file: String,

    /// Aggregate peer weight at or above which a name is treated as BLOCKED.
    pub block_weight: u32,

    pub timeout_ms: u64,

    pub debug: bool,
}

impl Default for DrblConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            peers_file: String::new(),
            block_weight: 1,
            timeout_ms: 500,
            debug: false,
        }
    }
}
