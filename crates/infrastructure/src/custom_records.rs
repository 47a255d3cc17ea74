use std::collections::HashMap;

use holedns_application::ports::CustomRecordsPort;
use holedns_domain::{CustomRecord, Fqdn};

/// Exact-match static answer set compiled once at config load (§4.6).
pub struct CustomRecordsStore {
    by_name: HashMap<Fqdn, Vec<CustomRecord>>,
}

impl CustomRecordsStore {
    pub fn new(records: Vec<CustomRecord>) -> Self {
        let mut by_name: HashMap<Fqdn, Vec<CustomRecord>> = HashMap::new();
        for record in records {
            by_name.entry(record.name.clone()).or_default().push(record);
        }
        Self { by_name }
    }
}

impl CustomRecordsPort for CustomRecordsStore {
    fn lookup(&self, fqdn: &Fqdn) -> Vec<CustomRecord> {
        self.by_name.get(fqdn).cloned().unwrap_or_default()
    }
}
