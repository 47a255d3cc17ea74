use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt, Shared};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable};
use holedns_application::ports::{Resolver, ResolverResponse};
use holedns_domain::{DnsQuery, ResolveError};
use tokio::net::UdpSocket;
use tracing::debug;

use super::record_type_map::{to_hickory_class, to_hickory_type};

static NEXT_QUERY_ID: AtomicU16 = AtomicU16::new(1);

type SharedResolve = Shared<BoxFuture<'static, Result<ResolverResponse, ResolveError>>>;

/// Parallel-upstream, single-flight resolver (§4.4, §5). Each distinct
/// (qname, qtype, qclass) has at most one in-flight upstream race at a
/// time; additional callers await the same [`Shared`] future.
pub struct UpstreamResolver {
    upstreams: Vec<SocketAddr>,
    query_timeout: Duration,
    resolve_budget: Duration,
    inflight: DashMap<DnsQuery, SharedResolve>,
}

impl UpstreamResolver {
    pub fn new(upstreams: Vec<SocketAddr>, query_timeout: Duration, resolve_budget: Duration) -> Self {
        Self {
            upstreams,
            query_timeout,
            resolve_budget,
            inflight: DashMap::new(),
        }
    }

    async fn race_upstreams(
        upstreams: Vec<SocketAddr>,
        query: DnsQuery,
        query_timeout: Duration,
    ) -> Result<ResolverResponse, ResolveError> {
        if upstreams.is_empty() {
            return Err(ResolveError::Network("no upstream servers configured".to_string()));
        }

        let mut futs = FuturesUnordered::new();
        for addr in &upstreams {
            let addr = *addr;
            let query = query.clone();
            futs.push(async move { query_one_upstream(addr, &query, query_timeout).await });
        }

        let mut negative: Option<ResolverResponse> = None;
        let mut last_err = ResolveError::Timeout;

        while let Some(result) = futs.next().await {
            match result {
                Ok(response) if response.rcode == ResponseCode::NoError && !response.answers.is_empty() => {
                    debug!("resolver: positive upstream answer wins the race");
                    return Ok(response);
                }
                Ok(response) => {
                    // Negative (NXDOMAIN / NODATA): remember it and keep racing in
                    // case a faster upstream still answers positively.
                    negative.get_or_insert(response);
                }
                Err(e) => last_err = e,
            }
        }

        match negative {
            Some(response) => Ok(response),
            None => Err(last_err),
        }
    }
}

#[async_trait]
impl Resolver for UpstreamResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<ResolverResponse, ResolveError> {
        let shared = self
            .inflight
            .entry(query.clone())
            .or_insert_with(|| {
                let upstreams = self.upstreams.clone();
                let q = query.clone();
                let timeout = self.query_timeout;
                async move { Self::race_upstreams(upstreams, q, timeout).await }
                    .boxed()
                    .shared()
            })
            .clone();

        let result = tokio::time::timeout(self.resolve_budget, shared).await;
        self.inflight.remove(query);

        match result {
            Ok(inner) => inner,
            Err(_) => Err(ResolveError::Timeout),
        }
    }
}

async fn query_one_upstream(
    addr: SocketAddr,
    query: &DnsQuery,
    timeout: Duration,
) -> Result<ResolverResponse, ResolveError> {
    let name = Name::from_utf8(query.qname.as_str())
        .map_err(|e| ResolveError::Malformed(e.to_string()))?;

    let mut wire_query = Query::new();
    wire_query.set_name(name);
    wire_query.set_query_type(to_hickory_type(query.qtype));
    wire_query.set_query_class(to_hickory_class(query.qclass));

    let mut message = Message::new();
    message.set_id(NEXT_QUERY_ID.fetch_add(1, Ordering::Relaxed));
    message.set_message_type(MessageType::Query);
    message.set_op_code(OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(wire_query);

    let request_bytes = message
        .to_bytes()
        .map_err(|e| ResolveError::Malformed(e.to_string()))?;

    let bind_addr: SocketAddr = if addr.is_ipv4() {
        "0.0.0.0:0".parse().unwrap()
    } else {
        "[::]:0".parse().unwrap()
    };

    let socket = tokio::time::timeout(timeout, UdpSocket::bind(bind_addr))
        .await
        .map_err(|_| ResolveError::Timeout)?
        .map_err(|e| ResolveError::Network(e.to_string()))?;
    socket
        .connect(addr)
        .await
        .map_err(|e| ResolveError::Network(e.to_string()))?;

    tokio::time::timeout(timeout, socket.send(&request_bytes))
        .await
        .map_err(|_| ResolveError::Timeout)?
        .map_err(|e| ResolveError::Network(e.to_string()))?;

    let mut buf = [0u8; 4096];
    let n = tokio::time::timeout(timeout, socket.recv(&mut buf))
        .await
        .map_err(|_| ResolveError::Timeout)?
        .map_err(|e| ResolveError::Network(e.to_string()))?;

    let response = Message::from_bytes(&buf[..n]).map_err(|e| ResolveError::Malformed(e.to_string()))?;

    let min_ttl = response
        .answers()
        .iter()
        .chain(response.name_servers().iter())
        .map(|r| r.ttl())
        .min();

    Ok(ResolverResponse {
        answers: response.answers().to_vec(),
        authority: response.name_servers().to_vec(),
        additional: response.additionals().to_vec(),
        rcode: response.response_code(),
        min_ttl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use holedns_domain::{Fqdn, QClass, RecordType};

    #[tokio::test]
    async fn empty_upstream_list_fails_fast() {
        let resolver = UpstreamResolver::new(Vec::new(), Duration::from_millis(100), Duration::from_secs(1));
        let query = DnsQuery::new(Fqdn::new("example.com").unwrap(), RecordType::A, QClass::In);
        let result = resolver.resolve(&query).await;
        assert!(result.is_err());
    }
}
