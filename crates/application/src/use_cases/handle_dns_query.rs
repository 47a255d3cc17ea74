use std::net::IpAddr;
use std::sync::Arc;

use hickory_proto::op::ResponseCode;
use holedns_domain::{Classification, CustomRecord, DnsQuery, QuestionCacheEntry, RecordType, ResolveError};

use crate::ports::{
    ActivationPort, BlockCachePort, CachedAnswer, CustomRecordsPort, DrblPort, QuestionCachePort,
    ResolveCachePort, Resolver, ResolverResponse,
};

/// A fully-formed, ready-to-encode decision for one DNS question. The
/// wire-format adapter is responsible for turning this into a message;
/// this use case never touches wire bytes.
#[derive(Debug)]
pub enum QueryOutcome {
    /// Step 2: question count != 1 or qclass not in {IN, CH}.
    Refused,

    /// Step 3: exact-match static answer(s).
    Custom(Vec<CustomRecord>),

    /// Step 5: synthesized block answer. `qtype` decides A/AAAA/NXDOMAIN.
    Blocked { qtype: RecordType, ttl: u32 },

    /// Step 6/7: an answer sourced from the ResolveCache or freshly
    /// resolved, respectively.
    Answered(ResolverResponse),

    /// Resolver failed with `Timeout` or `Network`.
    ServFail,
}

/// Implements the strict per-message algorithm (steps 2-7; step 1, message
/// parsing/FormErr, happens at the wire-format boundary before a
/// [`DnsQuery`] exists).
pub struct HandleDnsQueryUseCase {
    custom_records: Arc<dyn CustomRecordsPort>,
    activation: Arc<dyn ActivationPort>,
    block_cache: Arc<dyn BlockCachePort>,
    resolve_cache: Arc<dyn ResolveCachePort>,
    resolver: Arc<dyn Resolver>,
    question_cache: Arc<dyn QuestionCachePort>,
    drbl: Option<Arc<dyn DrblPort>>,
    match_subdomains: bool,
    block_ttl: u32,
    drbl_block_weight: u32,
}

impl HandleDnsQueryUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        custom_records: Arc<dyn CustomRecordsPort>,
        activation: Arc<dyn ActivationPort>,
        block_cache: Arc<dyn BlockCachePort>,
        resolve_cache: Arc<dyn ResolveCachePort>,
        resolver: Arc<dyn Resolver>,
        question_cache: Arc<dyn QuestionCachePort>,
        match_subdomains: bool,
        block_ttl: u32,
    ) -> Self {
        Self {
            custom_records,
            activation,
            block_cache,
            resolve_cache,
            resolver,
            question_cache,
            drbl: None,
            match_subdomains,
            block_ttl,
            drbl_block_weight: 1,
        }
    }

    pub fn with_drbl(mut self, drbl: Arc<dyn DrblPort>, block_weight: u32) -> Self {
        self.drbl = Some(drbl);
        self.drbl_block_weight = block_weight;
        self
    }

    fn log(&self, remote_addr: IpAddr, query: &DnsQuery, classification: Classification) {
        self.question_cache.append(QuestionCacheEntry::new(
            remote_addr,
            query.qname.as_str(),
            query.qtype,
            classification,
        ));
    }

    fn is_blocked(&self, query: &DnsQuery) -> bool {
        if self.match_subdomains {
            query.qname.ancestors().any(|name| self.block_cache_contains(name))
        } else {
            self.block_cache_contains(query.qname.as_str())
        }
    }

    fn block_cache_contains(&self, name: &str) -> bool {
        match holedns_domain::Fqdn::new(name) {
            Some(fqdn) => self.block_cache.contains(&fqdn),
            None => false,
        }
    }

    async fn drbl_forces_block(&self, query: &DnsQuery) -> bool {
        let Some(drbl) = &self.drbl else {
            return false;
        };
        if !matches!(query.qtype, RecordType::A | RecordType::Aaaa) {
            return false;
        }
        let verdict = drbl.verdict(&query.qname).await;
        verdict.aggregate_weight >= self.drbl_block_weight
    }

    /// Steps 2-7 of the query-handling algorithm, given an already-parsed
    /// question. `question_count`/`qclass` are checked by the caller before
    /// constructing `query`; pass `question_count` through so step 2 can be
    /// enforced here.
    pub async fn execute(
        &self,
        remote_addr: IpAddr,
        question_count: usize,
        query: DnsQuery,
    ) -> QueryOutcome {
        if question_count != 1 || !query.qclass.is_acceptable() {
            self.log(remote_addr, &query, Classification::Refused);
            return QueryOutcome::Refused;
        }

        let custom = self.custom_records.lookup(&query.qname);
        if !custom.is_empty() {
            self.log(remote_addr, &query, Classification::AllowedCustom);
            return QueryOutcome::Custom(custom);
        }

        if !self.activation.is_active() {
            return self.resolve_and_log(remote_addr, &query, Classification::AllowedResolved).await;
        }

        if self.drbl_forces_block(&query).await || self.is_blocked(&query) {
            self.log(remote_addr, &query, Classification::Blocked);
            return QueryOutcome::Blocked {
                qtype: query.qtype,
                ttl: self.block_ttl,
            };
        }

        if let Some(cached) = self.resolve_cache.get(&query) {
            if !cached.is_expired() {
                self.log(remote_addr, &query, Classification::AllowedCached);
                return QueryOutcome::Answered(ResolverResponse {
                    answers: cached.answers,
                    authority: cached.authority,
                    additional: cached.additional,
                    rcode: cached.rcode,
                    min_ttl: None,
                });
            }
        }

        self.resolve_and_log(remote_addr, &query, Classification::AllowedResolved).await
    }

    async fn resolve_and_log(
        &self,
        remote_addr: IpAddr,
        query: &DnsQuery,
        classification: Classification,
    ) -> QueryOutcome {
        match self.resolver.resolve(query).await {
            Ok(response) => {
                if !matches!(classification, Classification::Blocked) {
                    self.populate_cache(query, &response);
                }
                self.log(remote_addr, query, classification);
                QueryOutcome::Answered(response)
            }
            Err(ResolveError::Timeout) | Err(ResolveError::Network(_)) => {
                self.log(remote_addr, query, classification);
                QueryOutcome::ServFail
            }
            Err(ResolveError::Refused) | Err(ResolveError::Malformed(_)) => {
                self.log(remote_addr, query, Classification::Refused);
                QueryOutcome::Refused
            }
        }
    }

    fn populate_cache(&self, query: &DnsQuery, response: &ResolverResponse) {
        let negative = response.rcode != ResponseCode::NoError || response.answers.is_empty();
        let ttl_secs = if negative {
            response.min_ttl.unwrap_or(60).min(60)
        } else {
            response.min_ttl.unwrap_or(60)
        };
        let expires_at = std::time::Instant::now() + std::time::Duration::from_secs(ttl_secs as u64);
        self.resolve_cache.put(
            query,
            CachedAnswer {
                answers: response.answers.clone(),
                authority: response.authority.clone(),
                additional: response.additional.clone(),
                rcode: response.rcode,
                expires_at,
                negative,
            },
        );
    }
}
