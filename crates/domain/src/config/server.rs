use serde::{Deserialize, Serialize};

/// `bind` / `api` (§6): the DNS listen address and the control API's
/// separate listen address.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub api: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:53".to_string(),
            api: "127.0.0.1:8080".to_string(),
        }
    }
}
