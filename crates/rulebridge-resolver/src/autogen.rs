//! Names fabricated for IRIs that no declared prefix covers

use crate::bimap::BiMap;
use rulebridge_domain::Iri;

/// Stem of autogenerated prefixes (`autogen0:`, `autogen1:`, ...)
pub const AUTOGEN_PREFIX_STEM: &str = "autogen";

/// Prefix of synthetic names for IRIs without a remainder (`autogen:p0`, ...)
pub const AUTOGEN_NAME_STEM: &str = "autogen:p";

/// Session cache of autogenerated prefixes and names
///
/// Two bijections: namespace ↔ autoprefix, and IRI ↔ autoname. Both
/// counters only move forward until [`AutogenCache::clear`].
#[derive(Debug, Clone, Default)]
pub struct AutogenCache {
    prefixes: BiMap<String, String>,
    names: BiMap<Iri, String>,
    next_prefix: u64,
    next_name: u64,
}

impl AutogenCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Autoprefix for `namespace`, minting a fresh one on first sight
    pub fn prefix_for_namespace(&mut self, namespace: &str) -> String {
        if let Some(prefix) = self.prefixes.get_by_left(namespace) {
            return prefix.clone();
        }

        let prefix = format!("{}{}:", AUTOGEN_PREFIX_STEM, self.next_prefix);
        self.next_prefix += 1;
        tracing::debug!(namespace, prefix = %prefix, "autogenerated prefix");

        self.prefixes.insert(namespace.to_string(), prefix.clone());
        prefix
    }

    /// Namespace behind an autoprefix
    pub fn namespace_for_prefix(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get_by_right(prefix).map(String::as_str)
    }

    /// Synthetic name for `iri`, minting `autogen:pN` on first sight
    pub fn name_for_iri(&mut self, iri: &Iri) -> String {
        if let Some(name) = self.names.get_by_left(iri) {
            return name.clone();
        }

        let name = format!("{}{}", AUTOGEN_NAME_STEM, self.next_name);
        self.next_name += 1;
        tracing::debug!(iri = %iri, name = %name, "autogenerated name");

        self.names.insert(iri.clone(), name.clone());
        name
    }

    /// Remember that `name` was handed out for `iri`
    pub fn record_name(&mut self, iri: &Iri, name: &str) {
        if self.names.get_by_left(iri).map(String::as_str) != Some(name) {
            self.names.insert(iri.clone(), name.to_string());
        }
    }

    /// IRI previously handed out under `name`
    pub fn iri_for_name(&self, name: &str) -> Option<&Iri> {
        self.names.get_by_right(name)
    }

    /// Number of autoprefixes issued this session
    pub fn prefix_count(&self) -> u64 {
        self.next_prefix
    }

    /// Number of synthetic names issued this session
    pub fn name_count(&self) -> u64 {
        self.next_name
    }

    /// Forget everything and restart both counters
    pub fn clear(&mut self) {
        self.prefixes.clear();
        self.names.clear();
        self.next_prefix = 0;
        self.next_name = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_are_reused_per_namespace() {
        let mut cache = AutogenCache::new();
        assert_eq!(cache.prefix_for_namespace("http://a.org#"), "autogen0:");
        assert_eq!(cache.prefix_for_namespace("http://b.org#"), "autogen1:");
        assert_eq!(cache.prefix_for_namespace("http://a.org#"), "autogen0:");
        assert_eq!(cache.namespace_for_prefix("autogen1:"), Some("http://b.org#"));
        assert_eq!(cache.prefix_count(), 2);
    }

    #[test]
    fn test_names_are_reused_per_iri() {
        let mut cache = AutogenCache::new();
        let a = Iri::create("http://a.org/");
        let b = Iri::create("http://b.org/");
        assert_eq!(cache.name_for_iri(&a), "autogen:p0");
        assert_eq!(cache.name_for_iri(&b), "autogen:p1");
        assert_eq!(cache.name_for_iri(&a), "autogen:p0");
        assert_eq!(cache.iri_for_name("autogen:p1"), Some(&b));
    }

    #[test]
    fn test_clear_restarts_counters() {
        let mut cache = AutogenCache::new();
        cache.prefix_for_namespace("http://a.org#");
        cache.name_for_iri(&Iri::create("urn:x"));
        cache.clear();

        assert_eq!(cache.namespace_for_prefix("autogen0:"), None);
        assert_eq!(cache.iri_for_name("autogen:p0"), None);
        assert_eq!(cache.prefix_for_namespace("http://z.org#"), "autogen0:");
    }

    #[test]
    fn test_record_name() {
        let mut cache = AutogenCache::new();
        let iri = Iri::new("http://a.org#", "Foo");
        cache.record_name(&iri, "autogen0:Foo");
        cache.record_name(&iri, "autogen0:Foo");
        assert_eq!(cache.iri_for_name("autogen0:Foo"), Some(&iri));
    }
}
