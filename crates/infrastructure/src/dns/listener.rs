use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hickory_server::ServerFuture;
use tokio::net::{TcpListener, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::server::DnsServerHandler;

/// Owns the UDP and TCP sockets for one `host:port` pair (§4.1, §10.1). Both
/// transports share the same [`DnsServerHandler`], so hot reload of the
/// block cache or custom records (both `ArcSwap`-backed behind the use case)
/// is visible to in-flight queries without restarting the listener.
pub struct ListenerPair {
    bind_addr: SocketAddr,
    tcp_accept_timeout: Duration,
}

impl ListenerPair {
    pub fn new(bind_addr: SocketAddr, tcp_accept_timeout: Duration) -> Self {
        Self {
            bind_addr,
            tcp_accept_timeout,
        }
    }

    /// Binds both sockets and serves until `shutdown` is cancelled.
    pub async fn run(
        &self,
        handler: Arc<DnsServerHandler>,
        shutdown: CancellationToken,
    ) -> std::io::Result<()> {
        let udp_socket = UdpSocket::bind(self.bind_addr).await?;
        let tcp_listener = TcpListener::bind(self.bind_addr).await?;

        info!(bind_address = %self.bind_addr, "dns listener bound");

        let mut server = ServerFuture::new(DelegatingHandler(handler));
        server.register_socket(udp_socket);
        server.register_listener(tcp_listener, self.tcp_accept_timeout);

        tokio::select! {
            result = server.block_until_done() => {
                if let Err(e) = result {
                    error!(error = %e, "dns server loop exited with an error");
                }
            }
            _ = shutdown.cancelled() => {
                info!("dns listener shutting down");
            }
        }

        Ok(())
    }
}

/// Clones cheaply so `hickory_server::ServerFuture` can own it while the
/// caller keeps its own `Arc` for lifecycle control.
#[derive(Clone)]
struct DelegatingHandler(Arc<DnsServerHandler>);

#[async_trait::async_trait]
impl hickory_server::server::RequestHandler for DelegatingHandler {
    async fn handle_request<R: hickory_server::server::ResponseHandler>(
        &self,
        request: &hickory_server::server::Request,
        response_handle: R,
    ) -> hickory_server::server::ResponseInfo {
        self.0.handle_request(request, response_handle).await
    }
}
