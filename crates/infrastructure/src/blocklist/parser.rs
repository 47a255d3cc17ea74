use holedns_domain::Fqdn;

const IGNORED_NAMES: &[&str] = &[
    "0.0.0.0",
    "127.0.0.1",
    "::",
    "::1",
    "localhost",
    "broadcasthost",
    "ip6-localhost",
    "ip6-loopback",
];

/// Parses one blocklist source line, recognizing both the hosts-file
/// format (`IP NAME [NAME...] [#comment]`) and the plain-domain format
/// (`NAME [#comment]`) (§4.5 step 3). Returns every valid name on the line;
/// invalid or ignorable tokens are silently dropped.
pub fn parse_source_line(raw: &str) -> Vec<String> {
    let line = match raw.split_once('#') {
        Some((before, _)) => before,
        None => raw,
    };
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Vec::new();
    };
    let rest: Vec<&str> = tokens.collect();

    let candidates: Vec<&str> = if first.parse::<std::net::IpAddr>().is_ok() {
        rest
    } else {
        std::iter::once(first).chain(rest).collect()
    };

    candidates
        .into_iter()
        .filter(|name| !IGNORED_NAMES.contains(&name.to_ascii_lowercase().as_str()))
        .filter_map(Fqdn::new)
        .map(|fqdn| fqdn.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hosts_file_line() {
        let names = parse_source_line("0.0.0.0 ads.example.com");
        assert_eq!(names, vec!["ads.example.com".to_string()]);
    }

    #[test]
    fn parses_plain_domain_line() {
        let names = parse_source_line("foo.test");
        assert_eq!(names, vec!["foo.test".to_string()]);
    }

    #[test]
    fn ignores_comments_and_loopback_literals() {
        assert!(parse_source_line("# a comment").is_empty());
        assert!(parse_source_line("0.0.0.0 localhost").is_empty());
        assert!(parse_source_line("127.0.0.1 localhost").is_empty());
    }

    #[test]
    fn strips_trailing_comment_and_whitespace() {
        let names = parse_source_line("0.0.0.0 ads.example.com   # tracker");
        assert_eq!(names, vec!["ads.example.com".to_string()]);
    }

    #[test]
    fn hosts_line_with_multiple_names() {
        let names = parse_source_line("0.0.0.0 a.test b.test");
        assert_eq!(names, vec!["a.test".to_string(), "b.test".to_string()]);
    }
}
