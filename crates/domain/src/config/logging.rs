use serde::{Deserialize, Serialize};

/// Ambient: `log.level` / `log.format` (SPEC_FULL §10.1). Not part of the
/// distilled control surface, but every long-running service in this stack
/// carries a structured logging config.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,

    /// "pretty" (human-readable) or "json".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
