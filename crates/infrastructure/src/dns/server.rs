use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::Arc;

use hickory_proto::op::ResponseCode;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, TXT};
use hickory_proto::rr::{Name, RData, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use holedns_application::use_cases::{HandleDnsQueryUseCase, QueryOutcome};
use holedns_domain::{CustomRecord, DnsQuery, Fqdn, RecordData, RecordType};
use tracing::{debug, error};

use super::record_type_map::{from_hickory_class, from_hickory_type};

/// Bridges the wire protocol to [`HandleDnsQueryUseCase`] (§4.8). Message
/// parsing itself, and the FormErr it can produce, is handled by the
/// `hickory_server` decoder before this handler is ever invoked; this is
/// steps 2-7.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "failed to parse request info");
                return send_error(request, &mut response_handle, ResponseCode::FormErr).await;
            }
        };

        let query = &request_info.query;
        let qname_str = query.name().to_utf8();
        let qname_str = qname_str.trim_end_matches('.').to_string();
        let Some(fqdn) = Fqdn::new(&qname_str) else {
            return send_error(request, &mut response_handle, ResponseCode::FormErr).await;
        };

        let qtype = from_hickory_type(query.query_type());
        let qclass = from_hickory_class(query.query_class());
        let remote_addr = request.src().ip();
        let question_count = request.header().query_count() as usize;

        debug!(qname = %fqdn, ?qtype, client = %remote_addr, "dns query received");

        let dns_query = DnsQuery::new(fqdn, qtype, qclass);
        let outcome = self
            .use_case
            .execute(remote_addr, question_count, dns_query)
            .await;

        let name = Name::from_str(&qname_str).unwrap_or_else(|_| Name::root());
        let (rcode, answers, authority, additional) = render_outcome(outcome, &name);

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_response_code(rcode);
        header.set_recursion_available(true);
        let response = builder.build(header, answers.iter(), authority.iter(), &[], additional.iter());
        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

type RenderedResponse = (ResponseCode, Vec<Record>, Vec<Record>, Vec<Record>);

fn render_outcome(outcome: QueryOutcome, name: &Name) -> RenderedResponse {
    match outcome {
        QueryOutcome::Refused => (ResponseCode::Refused, Vec::new(), Vec::new(), Vec::new()),
        QueryOutcome::ServFail => (ResponseCode::ServFail, Vec::new(), Vec::new(), Vec::new()),
        QueryOutcome::Custom(records) => {
            let answers = records
                .iter()
                .map(|record| custom_record_to_wire(name, record))
                .collect();
            (ResponseCode::NoError, answers, Vec::new(), Vec::new())
        }
        QueryOutcome::Blocked { qtype, ttl } => synthesize_block_answer(name, qtype, ttl),
        QueryOutcome::Answered(response) => {
            (response.rcode, response.answers, response.authority, response.additional)
        }
    }
}

/// A→0.0.0.0, AAAA→::, else NXDOMAIN (§4.8 step 5).
fn synthesize_block_answer(name: &Name, qtype: RecordType, ttl: u32) -> RenderedResponse {
    match qtype {
        RecordType::A => {
            let rdata = RData::A(A(Ipv4Addr::UNSPECIFIED));
            (
                ResponseCode::NoError,
                vec![Record::from_rdata(name.clone(), ttl, rdata)],
                Vec::new(),
                Vec::new(),
            )
        }
        RecordType::Aaaa => {
            let rdata = RData::AAAA(AAAA(Ipv6Addr::UNSPECIFIED));
            (
                ResponseCode::NoError,
                vec![Record::from_rdata(name.clone(), ttl, rdata)],
                Vec::new(),
                Vec::new(),
            )
        }
        _ => (ResponseCode::NXDomain, Vec::new(), Vec::new(), Vec::new()),
    }
}

fn custom_record_to_wire(name: &Name, record: &CustomRecord) -> Record {
    let rdata = match &record.data {
        RecordData::A(addr) => RData::A(A(*addr)),
        RecordData::Aaaa(addr) => RData::AAAA(AAAA(*addr)),
        RecordData::Cname(target) => {
            let target_name = Name::from_str(target).unwrap_or_else(|_| Name::root());
            RData::CNAME(CNAME(target_name))
        }
        RecordData::Txt(text) => RData::TXT(TXT::new(vec![text.clone()])),
    };
    Record::from_rdata(name.clone(), record.ttl, rdata)
}

async fn send_error<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_recursion_available(true);
    let response = builder.build(header, &[], &[], &[], &[]);
    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
