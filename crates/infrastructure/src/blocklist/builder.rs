use std::time::Duration;

use holedns_domain::config::BlockingConfig;
use holedns_domain::{DomainError, Fqdn};
use tracing::{info, warn};

use super::parser::parse_source_line;
use crate::block_cache::NameSet;

/// Fetches, parses, and compiles blocklist sources into a fresh [`NameSet`]
/// (§4.5). Pure with respect to everything but network/file I/O: identical
/// source bytes and config always produce an equal result.
pub struct BlocklistBuilder {
    http_client: reqwest::Client,
}

impl BlocklistBuilder {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .user_agent(concat!("holedns/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("static reqwest client configuration is valid"),
        }
    }

    pub async fn build(&self, config: &BlockingConfig) -> Result<NameSet, DomainError> {
        let allow: NameSet = config
            .allowlist
            .iter()
            .filter_map(|n| Fqdn::new(n))
            .map(|f| f.as_str().to_string())
            .collect();

        let timeout = Duration::from_millis(config.source_fetch_timeout_ms);
        let mut candidates: NameSet = NameSet::default();
        let mut succeeded = 0usize;

        for source in &config.sources {
            match self.fetch_source(source, timeout).await {
                Ok(text) => {
                    succeeded += 1;
                    for line in text.lines() {
                        for name in parse_source_line(line) {
                            candidates.insert(name);
                        }
                    }
                }
                Err(reason) => {
                    warn!(source = %source, error = %reason, "blocklist source fetch failed, continuing with remaining sources");
                }
            }
        }

        if config.fail_if_zero_sources && !config.sources.is_empty() && succeeded == 0 {
            return Err(DomainError::SourceFetch {
                uri: config.sources.join(", "),
                reason: "all blocklist sources failed and fail_if_zero_sources is set".to_string(),
            });
        }

        for custom in &config.customblock {
            if let Some(fqdn) = Fqdn::new(custom) {
                candidates.insert(fqdn.as_str().to_string());
            }
        }

        let mut result = NameSet::default();
        for name in candidates {
            if is_allowlisted(&name, &allow) {
                continue;
            }
            result.insert(name);
        }

        info!(
            sources = config.sources.len(),
            succeeded,
            blocked = result.len(),
            "blocklist build complete"
        );
        Ok(result)
    }

    async fn fetch_source(&self, uri: &str, timeout: Duration) -> Result<String, String> {
        if let Some(path) = uri.strip_prefix("file://") {
            return tokio::fs::read_to_string(path)
                .await
                .map_err(|e| e.to_string());
        }
        if uri.starts_with("http://") || uri.starts_with("https://") {
            let response = tokio::time::timeout(timeout, self.http_client.get(uri).send())
                .await
                .map_err(|_| "timed out".to_string())?
                .map_err(|e| e.to_string())?;
            if !response.status().is_success() {
                return Err(format!("HTTP {}", response.status()));
            }
            return tokio::time::timeout(timeout, response.text())
                .await
                .map_err(|_| "timed out reading body".to_string())?
                .map_err(|e| e.to_string());
        }
        tokio::fs::read_to_string(uri).await.map_err(|e| e.to_string())
    }
}

impl Default for BlocklistBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// True if `name` itself or any suffix-ancestor of it is in the allowlist
/// (§4.5 step 4).
fn is_allowlisted(name: &str, allow: &NameSet) -> bool {
    let Some(fqdn) = Fqdn::new(name) else {
        return false;
    };
    fqdn.ancestors().any(|ancestor| allow.contains(ancestor))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_sources(sources: Vec<String>) -> BlockingConfig {
        BlockingConfig {
            sources,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn file_source_is_parsed_and_allowlist_subtracted() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("holedns-test-source-{}.txt", std::process::id()));
        tokio::fs::write(&path, "0.0.0.0 ads.example.com\n# comment\nfoo.test\n")
            .await
            .unwrap();

        let mut config = config_with_sources(vec![format!("file://{}", path.display())]);
        config.allowlist = vec!["ads.example.com".to_string()];

        let builder = BlocklistBuilder::new();
        let names = builder.build(&config).await.unwrap();
        assert!(!names.contains("ads.example.com"));
        assert!(names.contains("foo.test"));

        tokio::fs::remove_file(&path).await.ok();
    }

    #[tokio::test]
    async fn customblock_entries_still_go_through_allowlist_subtraction() {
        let mut config = BlockingConfig::default();
        config.customblock = vec!["tracker.test".to_string(), "safe.test".to_string()];
        config.allowlist = vec!["safe.test".to_string()];

        let builder = BlocklistBuilder::new();
        let names = builder.build(&config).await.unwrap();
        assert!(names.contains("tracker.test"));
        assert!(!names.contains("safe.test"));
    }

    #[tokio::test]
    async fn fail_if_zero_sources_is_fatal_when_all_sources_fail() {
        let mut config = config_with_sources(vec!["file:///nonexistent/path/holedns.txt".to_string()]);
        config.fail_if_zero_sources = true;

        let builder = BlocklistBuilder::new();
        assert!(builder.build(&config).await.is_err());
    }
}
