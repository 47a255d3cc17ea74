use tracing::warn;

use crate::dns_record::{CustomRecord, RecordData};
use crate::fqdn::Fqdn;

/// Parses `customdnsrecords` lines into [`CustomRecord`]s.
///
/// Each line is `<name> <TYPE> <value>`, whitespace-separated, e.g.:
///
/// ```text
/// router.lan A 192.168.1.1
/// nas.lan AAAA fd00::1
/// mail.lan CNAME mailhost.example.com
/// info.lan TXT "hello"
/// ```
///
/// A line that fails to parse is logged and skipped — it never aborts
/// startup (§4.6 Open Question, resolved: skip-and-log).
pub fn parse_custom_records(lines: &[String]) -> Vec<CustomRecord> {
    let mut records = Vec::with_capacity(lines.len());
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_line(trimmed) {
            Some(record) => records.push(record),
            None => warn!(line = trimmed, "skipping malformed custom DNS record line"),
        }
    }
    records
}

fn parse_line(line: &str) -> Option<CustomRecord> {
    let mut parts = line.splitn(3, char::is_whitespace);
    let name = parts.next()?.trim();
    let rtype = parts.next()?.trim();
    let value = parts.next()?.trim();

    let fqdn = Fqdn::new(name)?;
    let data = match rtype.to_ascii_uppercase().as_str() {
        "A" => RecordData::A(value.parse().ok()?),
        "AAAA" => RecordData::Aaaa(value.parse().ok()?),
        "CNAME" => RecordData::Cname(Fqdn::new(value)?.as_str().to_string()),
        "TXT" => RecordData::Txt(value.trim_matches('"').to_string()),
        _ => return None,
    };

    Some(CustomRecord::new(fqdn, data, 3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_lines_of_each_type() {
        let lines = vec![
            "router.lan A 192.168.1.1".to_string(),
            "nas.lan AAAA fd00::1".to_string(),
            "mail.lan CNAME mailhost.example.com".to_string(),
            "info.lan TXT \"hello world\"".to_string(),
        ];
        let records = parse_custom_records(&lines);
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].name.as_str(), "router.lan");
        assert!(matches!(records[0].data, RecordData::A(_)));
        assert!(matches!(records[3].data, RecordData::Txt(ref s) if s == "hello world"));
    }

    #[test]
    fn skips_malformed_lines_without_panicking() {
        let lines = vec![
            "".to_string(),
            "# a comment".to_string(),
            "bad-line-no-type".to_string(),
            "bad.lan A not-an-ip".to_string(),
            "good.lan A 10.0.0.1".to_string(),
        ];
        let records = parse_custom_records(&lines);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_str(), "good.lan");
    }
}
