use std::fmt;

/// A DNS name normalized to lowercase ASCII with any trailing dot stripped.
///
/// Construction is the only place normalization happens; once built, an
/// `Fqdn` is always in canonical form and two `Fqdn`s are equal iff they
/// name the same domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fqdn(String);

impl Fqdn {
    /// Normalizes `raw` into an `Fqdn`. Returns `None` for the empty name
    /// (after trailing-dot stripping) since a zero-length name is never a
    /// valid lookup key.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_end_matches('.');
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Yields `self` and every suffix-ancestor, closest first: `a.b.c` then
    /// `b.c` then `c`. Used by suffix-match blocking/allowlisting.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        let s = self.0.as_str();
        AncestorIter { rest: Some(s) }
    }
}

struct AncestorIter<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for AncestorIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let cur = self.rest?;
        self.rest = cur.split_once('.').map(|(_, tail)| tail);
        Some(cur)
    }
}

impl fmt::Display for Fqdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fqdn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
