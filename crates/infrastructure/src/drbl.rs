use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use holedns_application::ports::{DrblPort, PeerVerdict};
use holedns_domain::Fqdn;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PeerResponse {
    weight: u32,
}

/// Reference `DrblPort` adapter: consults each configured peer's
/// `GET /verdict/{fqdn}` endpoint in parallel, bounded by a shared timeout
/// (§4.10). A peer that times out or refuses contributes zero weight.
pub struct HttpDrblClient {
    client: reqwest::Client,
    peers: Vec<String>,
    timeout: Duration,
    debug: bool,
}

impl HttpDrblClient {
    pub fn new(peers: Vec<String>, timeout: Duration, debug: bool) -> Self {
        Self {
            client: reqwest::Client::new(),
            peers,
            timeout,
            debug,
        }
    }

    async fn query_peer(&self, peer: &str, fqdn: &Fqdn) -> u32 {
        let url = format!("{}/verdict/{}", peer.trim_end_matches('/'), fqdn.as_str());
        let request = self.client.get(&url).timeout(self.timeout).send();
        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => match response.json::<PeerResponse>().await {
                Ok(parsed) => parsed.weight,
                Err(e) => {
                    if self.debug {
                        debug!(peer, error = %e, "drbl peer returned an unparsable response");
                    }
                    0
                }
            },
            Ok(Err(e)) => {
                if self.debug {
                    debug!(peer, error = %e, "drbl peer request failed");
                }
                0
            }
            Err(_) => {
                if self.debug {
                    debug!(peer, "drbl peer timed out");
                }
                0
            }
        }
    }
}

#[async_trait]
impl DrblPort for HttpDrblClient {
    async fn verdict(&self, fqdn: &Fqdn) -> PeerVerdict {
        if self.peers.is_empty() {
            return PeerVerdict::default();
        }
        let weights = join_all(self.peers.iter().map(|peer| self.query_peer(peer, fqdn))).await;
        PeerVerdict {
            aggregate_weight: weights.into_iter().sum(),
        }
    }
}
