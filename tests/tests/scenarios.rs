//! End-to-end scenarios spanning the domain, application, and
//! infrastructure crates together, driven through the same
//! `HandleDnsQueryUseCase` entry point the DNS listener uses.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use hickory_proto::op::ResponseCode;
use holedns_application::ports::{ActivationPort, PauseDuration, Resolver, ResolverResponse};
use holedns_application::use_cases::{HandleDnsQueryUseCase, QueryOutcome};
use holedns_domain::{Fqdn, QClass, RecordType};
use holedns_infrastructure::{ActivationMachine, BlockCache, CustomRecordsStore, QuestionCache, ResolveCache};

struct StubResolver {
    address: std::net::Ipv4Addr,
}

#[async_trait::async_trait]
impl Resolver for StubResolver {
    async fn resolve(&self, query: &holedns_domain::DnsQuery) -> Result<ResolverResponse, holedns_domain::ResolveError> {
        let name = hickory_proto::rr::Name::from_ascii(query.qname.as_str()).unwrap();
        let rdata = hickory_proto::rr::RData::A(hickory_proto::rr::rdata::A(self.address));
        let record = hickory_proto::rr::Record::from_rdata(name, 300, rdata);
        Ok(ResolverResponse {
            answers: vec![record],
            authority: Vec::new(),
            additional: Vec::new(),
            rcode: ResponseCode::NoError,
            min_ttl: Some(300),
        })
    }
}

fn client() -> IpAddr {
    "127.0.0.1".parse().unwrap()
}

fn query(name: &str) -> holedns_domain::DnsQuery {
    holedns_domain::DnsQuery::new(Fqdn::new(name).unwrap(), RecordType::A, QClass::In)
}

/// Scenario 1: a blocked name synthesizes 0.0.0.0 at the configured TTL,
/// while an unblocked name is forwarded to the resolver unchanged.
#[tokio::test]
async fn scenario_blocked_and_forwarded_names() {
    let mut blocked = holedns_infrastructure::block_cache::NameSet::default();
    blocked.insert("ads.example.com".to_string());
    let block_cache = Arc::new(BlockCache::new(blocked));

    let use_case = HandleDnsQueryUseCase::new(
        Arc::new(CustomRecordsStore::new(Vec::new())),
        ActivationMachine::new(Duration::from_secs(300)),
        block_cache,
        Arc::new(ResolveCache::new()),
        Arc::new(StubResolver {
            address: "93.184.216.34".parse().unwrap(),
        }),
        Arc::new(QuestionCache::new(100)),
        false,
        3600,
    );

    let blocked_outcome = use_case.execute(client(), 1, query("ads.example.com")).await;
    match blocked_outcome {
        QueryOutcome::Blocked { ttl, qtype } => {
            assert_eq!(ttl, 3600);
            assert_eq!(qtype, RecordType::A);
        }
        other => panic!("expected Blocked, got {other:?}"),
    }

    let forwarded_outcome = use_case.execute(client(), 1, query("safe.test")).await;
    match forwarded_outcome {
        QueryOutcome::Answered(response) => {
            assert_eq!(response.answers.len(), 1);
        }
        other => panic!("expected Answered, got {other:?}"),
    }
}

/// Scenario 3: a paused ActivationMachine bypasses block-cache synthesis
/// entirely, even for a name present in the block cache.
#[tokio::test]
async fn scenario_paused_activation_forwards_blocked_name() {
    let mut blocked = holedns_infrastructure::block_cache::NameSet::default();
    blocked.insert("ads.example.com".to_string());
    let block_cache = Arc::new(BlockCache::new(blocked));
    let activation = ActivationMachine::new(Duration::from_secs(300));
    activation.deactivate(PauseDuration::Forever);

    let use_case = HandleDnsQueryUseCase::new(
        Arc::new(CustomRecordsStore::new(Vec::new())),
        activation,
        block_cache,
        Arc::new(ResolveCache::new()),
        Arc::new(StubResolver {
            address: "93.184.216.34".parse().unwrap(),
        }),
        Arc::new(QuestionCache::new(100)),
        false,
        3600,
    );

    let outcome = use_case.execute(client(), 1, query("ads.example.com")).await;
    assert!(matches!(outcome, QueryOutcome::Answered(_)));
}

/// Scenario 4: a cap-2 QuestionCache keeps only the two most recent
/// entries after a third query is logged.
#[tokio::test]
async fn scenario_question_cache_cap_evicts_oldest() {
    let question_cache = Arc::new(QuestionCache::new(2));
    let use_case = HandleDnsQueryUseCase::new(
        Arc::new(CustomRecordsStore::new(Vec::new())),
        ActivationMachine::new(Duration::from_secs(300)),
        Arc::new(BlockCache::empty()),
        Arc::new(ResolveCache::new()),
        Arc::new(StubResolver {
            address: "93.184.216.34".parse().unwrap(),
        }),
        question_cache.clone(),
        false,
        3600,
    );

    use_case.execute(client(), 1, query("q1.test")).await;
    use_case.execute(client(), 1, query("q2.test")).await;
    use_case.execute(client(), 1, query("q3.test")).await;

    let entries = question_cache.enumerate();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].qname, "q2.test");
    assert_eq!(entries[1].qname, "q3.test");
}

/// Scenario 6: a BlockCache swap mid-traffic is immediately visible to
/// queries handled concurrently with the swap, and no concurrent query
/// panics or deadlocks.
#[tokio::test]
async fn scenario_reload_under_concurrent_traffic() {
    let block_cache = Arc::new(BlockCache::empty());
    let use_case = Arc::new(HandleDnsQueryUseCase::new(
        Arc::new(CustomRecordsStore::new(Vec::new())),
        ActivationMachine::new(Duration::from_secs(300)),
        block_cache.clone(),
        Arc::new(ResolveCache::new()),
        Arc::new(StubResolver {
            address: "93.184.216.34".parse().unwrap(),
        }),
        Arc::new(QuestionCache::new(1000)),
        false,
        3600,
    ));

    let mut handles = Vec::new();
    for i in 0..50 {
        let use_case = use_case.clone();
        handles.push(tokio::spawn(async move {
            use_case.execute(client(), 1, query(&format!("load{i}.test"))).await;
        }));
    }

    let mut new_set = holedns_infrastructure::block_cache::NameSet::default();
    new_set.insert("newly-blocked.test".to_string());
    block_cache.swap(new_set);

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(block_cache.len(), 1);
    let outcome = use_case.execute(client(), 1, query("newly-blocked.test")).await;
    assert!(matches!(outcome, QueryOutcome::Blocked { .. }));
}
