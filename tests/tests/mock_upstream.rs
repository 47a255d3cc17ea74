//! Exercises the real `UpstreamResolver` over loopback UDP sockets against
//! a small hand-rolled mock authoritative server, rather than mocking the
//! `Resolver` trait itself.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable};
use holedns_application::ports::Resolver;
use holedns_domain::{DnsQuery, Fqdn, QClass, RecordType};
use holedns_infrastructure::UpstreamResolver;
use tokio::net::UdpSocket;

/// Binds a loopback UDP socket that answers every query with a single A
/// record after an artificial delay, counting how many queries it saw.
async fn spawn_mock_upstream(answer: Ipv4Addr, delay: Duration, hit_counter: Arc<AtomicUsize>) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let local_addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = [0u8; 512];
        loop {
            let (n, peer) = match socket.recv_from(&mut buf).await {
                Ok(v) => v,
                Err(_) => break,
            };
            hit_counter.fetch_add(1, Ordering::SeqCst);

            let request = match Message::from_bytes(&buf[..n]) {
                Ok(m) => m,
                Err(_) => continue,
            };

            tokio::time::sleep(delay).await;

            let mut response = Message::new();
            response.set_id(request.id());
            response.set_message_type(MessageType::Response);
            response.set_op_code(OpCode::Query);
            response.set_response_code(ResponseCode::NoError);
            response.set_recursion_available(true);
            for query in request.queries() {
                response.add_query(query.clone());
                let record = Record::from_rdata(query.name().clone(), 300, RData::A(A(answer)));
                response.add_answer(record);
            }

            let bytes = response.to_bytes().unwrap();
            let _ = socket.send_to(&bytes, peer).await;
        }
    });

    local_addr
}

fn query() -> DnsQuery {
    DnsQuery::new(Fqdn::new("coalesce.test").unwrap(), RecordType::A, QClass::In)
}

/// Scenario 5: 100 concurrent resolves for the same key see a single
/// upstream query and all return the same answer well within the
/// resolve budget, despite the mock's artificial latency.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn single_flight_coalesces_concurrent_identical_queries() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream_addr = spawn_mock_upstream(
        "203.0.113.7".parse().unwrap(),
        Duration::from_millis(200),
        hits.clone(),
    )
    .await;

    let resolver = Arc::new(UpstreamResolver::new(
        vec![upstream_addr],
        Duration::from_secs(1),
        Duration::from_millis(500),
    ));

    let started = std::time::Instant::now();
    let mut handles = Vec::new();
    for _ in 0..100 {
        let resolver = resolver.clone();
        handles.push(tokio::spawn(async move { resolver.resolve(&query()).await }));
    }

    for handle in handles {
        let result = handle.await.unwrap();
        let response = result.expect("every caller should see the coalesced positive answer");
        assert_eq!(response.answers.len(), 1);
    }

    assert!(
        started.elapsed() < Duration::from_millis(450),
        "coalesced resolves should complete close to the mock's single 200ms delay, took {:?}",
        started.elapsed()
    );
    assert_eq!(hits.load(Ordering::SeqCst), 1, "mock upstream should see exactly one query");
}

/// Distinct keys are not coalesced: each gets its own upstream query.
#[tokio::test]
async fn distinct_queries_each_reach_the_upstream() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream_addr = spawn_mock_upstream("203.0.113.8".parse().unwrap(), Duration::from_millis(5), hits.clone()).await;

    let resolver = UpstreamResolver::new(vec![upstream_addr], Duration::from_secs(1), Duration::from_millis(500));

    let a = DnsQuery::new(Fqdn::new("one.test").unwrap(), RecordType::A, QClass::In);
    let b = DnsQuery::new(Fqdn::new("two.test").unwrap(), RecordType::A, QClass::In);

    resolver.resolve(&a).await.unwrap();
    resolver.resolve(&b).await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
