use holedns_domain::Fqdn;

/// Read side of the BlockCache (§4.1). Writers only ever replace the whole
/// handle via a rebuild; this port never exposes mutation.
pub trait BlockCachePort: Send + Sync {
    fn contains(&self, fqdn: &Fqdn) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
