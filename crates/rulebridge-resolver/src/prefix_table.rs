//! Explicit prefix ↔ namespace bindings

use rulebridge_domain::prefixed::{normalize_prefix, SEPARATOR};
use rulebridge_domain::Iri;
use std::collections::{BTreeMap, BTreeSet};

/// Prefix token of the default namespace
pub const DEFAULT_PREFIX: &str = ":";

/// Declared prefixes and the namespaces they stand for
///
/// Each prefix is bound to exactly one namespace; rebinding replaces it.
/// Several prefixes may share a namespace, in which case abbreviation picks
/// the shortest (then alphabetically first) one. The default namespace is
/// the binding of the empty prefix `:`.
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    bindings: BTreeMap<String, String>,
    by_namespace: BTreeMap<String, BTreeSet<String>>,
}

impl PrefixTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `prefix` to `namespace`
    ///
    /// A missing trailing `:` is added to the prefix.
    pub fn set_prefix(&mut self, prefix: &str, namespace: &str) {
        let prefix = normalize_prefix(prefix);
        if let Some(previous) = self.bindings.insert(prefix.clone(), namespace.to_string()) {
            self.unindex(&previous, &prefix);
        }
        self.by_namespace
            .entry(namespace.to_string())
            .or_default()
            .insert(prefix);
    }

    /// Bind the default namespace
    pub fn set_default_namespace(&mut self, namespace: &str) {
        self.set_prefix(DEFAULT_PREFIX, namespace);
    }

    /// The default namespace, if bound
    pub fn default_namespace(&self) -> Option<&str> {
        self.namespace(DEFAULT_PREFIX)
    }

    /// Namespace bound to `prefix`
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        if prefix.ends_with(SEPARATOR) {
            self.bindings.get(prefix).map(String::as_str)
        } else {
            self.bindings.get(&normalize_prefix(prefix)).map(String::as_str)
        }
    }

    /// Whether `prefix` is bound
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.namespace(prefix).is_some()
    }

    /// Expand a prefixed name to an IRI
    ///
    /// - `<full>` is taken as a full IRI
    /// - a name without `:` goes under the default namespace, or is parsed
    ///   as a full IRI when there is none
    /// - otherwise the prefix must be bound
    pub fn expand(&self, name: &str) -> Option<Iri> {
        if let Some(full) = name.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
            return Some(Iri::create(full));
        }

        match name.find(SEPARATOR) {
            None => match self.default_namespace() {
                Some(namespace) => Some(Iri::create(&format!("{}{}", namespace, name))),
                None => Some(Iri::create(name)),
            },
            Some(idx) => {
                let (prefix, rest) = name.split_at(idx + SEPARATOR.len_utf8());
                self.bindings
                    .get(prefix)
                    .map(|namespace| Iri::create(&format!("{}{}", namespace, rest)))
            }
        }
    }

    /// Abbreviate an IRI whose namespace is bound, e.g. `owl:Thing`
    pub fn abbreviate(&self, iri: &Iri) -> Option<String> {
        let prefix = self
            .by_namespace
            .get(iri.namespace())?
            .iter()
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))?;

        Some(format!("{}{}", prefix, iri.remainder().unwrap_or("")))
    }

    /// Short form of an IRI
    ///
    /// Names under the default namespace lose their leading `:`; IRIs with no
    /// bound namespace come back as `<full>`.
    pub fn short_form(&self, iri: &Iri) -> String {
        match self.abbreviate(iri) {
            Some(name) => match name.strip_prefix(DEFAULT_PREFIX) {
                Some(local) if !local.is_empty() => local.to_string(),
                _ => name,
            },
            None => iri.to_quoted_string(),
        }
    }

    /// Iterate over `(prefix, namespace)` bindings in prefix order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, n)| (p.as_str(), n.as_str()))
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table has no bindings
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop every binding, including the default namespace
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.by_namespace.clear();
    }

    fn unindex(&mut self, namespace: &str, prefix: &str) {
        if let Some(prefixes) = self.by_namespace.get_mut(namespace) {
            prefixes.remove(prefix);
            if prefixes.is_empty() {
                self.by_namespace.remove(namespace);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWL: &str = "http://www.w3.org/2002/07/owl#";

    #[test]
    fn test_expand_and_abbreviate() {
        let mut table = PrefixTable::new();
        table.set_prefix("owl", OWL);

        let iri = table.expand("owl:Thing").unwrap();
        assert_eq!(iri, Iri::new(OWL, "Thing"));
        assert_eq!(table.abbreviate(&iri).as_deref(), Some("owl:Thing"));
    }

    #[test]
    fn test_unknown_prefix() {
        let table = PrefixTable::new();
        assert_eq!(table.expand("nope:Thing"), None);
        assert_eq!(table.abbreviate(&Iri::new(OWL, "Thing")), None);
    }

    #[test]
    fn test_bare_names() {
        let mut table = PrefixTable::new();
        assert_eq!(table.expand("Foo"), Some(Iri::new("", "Foo")));

        table.set_default_namespace("http://ex.org#");
        assert_eq!(table.expand("Foo"), Some(Iri::new("http://ex.org#", "Foo")));
        assert_eq!(table.expand(":Foo"), Some(Iri::new("http://ex.org#", "Foo")));
    }

    #[test]
    fn test_bracketed_full_iri() {
        let table = PrefixTable::new();
        assert_eq!(table.expand("<http://a.org/x>"), Some(Iri::create("http://a.org/x")));
    }

    #[test]
    fn test_rebinding_replaces_namespace() {
        let mut table = PrefixTable::new();
        table.set_prefix("ex:", "http://one.org#");
        table.set_prefix("ex:", "http://two.org#");

        assert_eq!(table.namespace("ex"), Some("http://two.org#"));
        assert_eq!(table.abbreviate(&Iri::new("http://one.org#", "A")), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_shortest_prefix_wins() {
        let mut table = PrefixTable::new();
        table.set_prefix("owl2:", OWL);
        table.set_prefix("owl:", OWL);
        assert_eq!(table.abbreviate(&Iri::new(OWL, "Class")).as_deref(), Some("owl:Class"));
    }

    #[test]
    fn test_short_form() {
        let mut table = PrefixTable::new();
        table.set_default_namespace("http://ex.org#");
        table.set_prefix("owl:", OWL);

        assert_eq!(table.short_form(&Iri::new("http://ex.org#", "Foo")), "Foo");
        assert_eq!(table.short_form(&Iri::new(OWL, "Thing")), "owl:Thing");
        assert_eq!(table.short_form(&Iri::create("http://z.org#Q")), "<http://z.org#Q>");
    }

    #[test]
    fn test_namespace_without_remainder() {
        let mut table = PrefixTable::new();
        table.set_prefix("x:", "http://x.org/");
        let iri = Iri::create("http://x.org/");
        assert_eq!(table.abbreviate(&iri).as_deref(), Some("x:"));
        assert_eq!(table.expand("x:"), Some(iri));
    }
}
