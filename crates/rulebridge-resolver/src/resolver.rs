//! IRI ↔ prefixed name resolution

use crate::autogen::AutogenCache;
use crate::prefix_table::PrefixTable;
use crate::vocabulary::RESERVED_PREFIXES;
use crate::{ResolverConfig, ResolverError};
use rulebridge_domain::traits::{ObjectRenderer, OntologyHandle, OntologyObject, SimpleRenderer};
use rulebridge_domain::{Iri, PrefixedName};
use std::collections::BTreeMap;
use std::fmt;

/// Converts between IRIs and the prefixed names rules and queries use
///
/// Explicit bindings in the [`PrefixTable`] always win. IRIs they do not
/// cover get a name from the [`AutogenCache`]: either a fresh `autogenN:`
/// prefix for their namespace, or a synthetic `autogen:pN` name when the
/// IRI has no remainder. Every name handed out resolves back to the same
/// IRI until [`IriResolver::reset`].
///
/// One resolver serves one bridge session. It does no locking; share it
/// across threads only behind external synchronization.
///
/// # Examples
///
/// ```
/// use rulebridge_domain::Iri;
/// use rulebridge_resolver::IriResolver;
///
/// let mut resolver = IriResolver::with_default_namespace("ex");
/// let iri = Iri::new("http://x.org#", "Foo");
///
/// let name = resolver.iri_to_prefixed_name(&iri);
/// assert_eq!(name, "autogen0:Foo");
/// assert_eq!(resolver.prefixed_name_to_iri(&name), Some(iri));
/// ```
pub struct IriResolver {
    default_namespace: Option<String>,
    generated_namespace: String,
    configured_prefixes: BTreeMap<String, String>,
    prefixes: PrefixTable,
    autogen: AutogenCache,
    renderer: Box<dyn ObjectRenderer>,
}

impl IriResolver {
    /// Resolver with no default namespace
    pub fn new() -> Self {
        Self::build(ResolverConfig::default())
    }

    /// Resolver whose empty prefix is bound to `namespace`
    pub fn with_default_namespace(namespace: impl Into<String>) -> Self {
        Self::build(ResolverConfig::with_default_namespace(namespace))
    }

    /// Resolver built from a validated configuration
    pub fn from_config(config: ResolverConfig) -> Result<Self, ResolverError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Replace the renderer used by [`IriResolver::render`]
    pub fn with_renderer(mut self, renderer: impl ObjectRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    fn build(config: ResolverConfig) -> Self {
        let mut resolver = Self {
            default_namespace: config.default_namespace,
            generated_namespace: config.generated_namespace,
            configured_prefixes: config.prefixes,
            prefixes: PrefixTable::new(),
            autogen: AutogenCache::new(),
            renderer: Box::new(SimpleRenderer),
        };
        resolver.apply_configured_prefixes();
        resolver
    }

    /// The explicit prefix bindings
    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    /// Namespace currently bound to the empty prefix
    pub fn default_namespace(&self) -> Option<&str> {
        self.prefixes.default_namespace()
    }

    /// The autogeneration state of this session
    pub fn autogen(&self) -> &AutogenCache {
        &self.autogen
    }

    /// Forget every autogenerated prefix and name and restart the counters
    ///
    /// Explicit prefix bindings are kept.
    pub fn reset(&mut self) {
        tracing::debug!(
            prefixes = self.autogen.prefix_count(),
            names = self.autogen.name_count(),
            "resetting autogeneration cache"
        );
        self.autogen.clear();
    }

    /// Resolve a prefixed name
    ///
    /// Tried in order: a name this session autogenerated, the default
    /// namespace for unprefixed names, the prefix table, then autogenerated
    /// prefixes. `None` when nothing matches, including for `""`; `":"` is
    /// the default namespace itself.
    pub fn prefixed_name_to_iri(&self, prefixed_name: &str) -> Option<Iri> {
        if let Some(iri) = self.autogen.iri_for_name(prefixed_name) {
            return Some(iri.clone());
        }

        if prefixed_name.is_empty() {
            tracing::trace!("empty prefixed name");
            return None;
        }

        let name = PrefixedName::parse(prefixed_name);
        if !name.has_prefix() {
            return self.prefixes.expand(prefixed_name);
        }

        if let Some(iri) = self.prefixes.expand(prefixed_name) {
            return Some(iri);
        }

        match self.autogen.namespace_for_prefix(name.prefix()) {
            Some(namespace) => Some(Iri::create(&format!("{}{}", namespace, name.local_part()))),
            None => {
                tracing::trace!(prefixed_name, "unresolved prefixed name");
                None
            }
        }
    }

    /// Prefixed name for an IRI, autogenerating one if needed
    pub fn iri_to_prefixed_name(&mut self, iri: &Iri) -> String {
        if let Some(name) = self.prefixes.abbreviate(iri) {
            return name;
        }

        let namespace = iri.namespace();
        match iri.remainder() {
            Some(remainder) if namespace.is_empty() => {
                if self.prefixes.expand(remainder).as_ref() != Some(iri) {
                    self.autogen.record_name(iri, remainder);
                }
                remainder.to_string()
            }
            Some(remainder) => {
                let prefix = self.autogen.prefix_for_namespace(namespace);
                let name = format!("{}{}", prefix, remainder);
                self.autogen.record_name(iri, &name);
                name
            }
            None => self.autogen.name_for_iri(iri),
        }
    }

    /// Short form for display, e.g. `Person` for an IRI in the default
    /// namespace; falls back to [`IriResolver::iri_to_prefixed_name`]
    pub fn iri_to_short_form(&mut self, iri: &Iri) -> String {
        let short_form = self.prefixes.short_form(iri);
        if short_form.is_empty() || short_form.starts_with('<') {
            self.iri_to_prefixed_name(iri)
        } else {
            short_form
        }
    }

    /// IRI for a rule variable
    ///
    /// When the default namespace ends in a letter or digit, variables are
    /// fragment-only IRIs `#name`; otherwise they are named like any other
    /// local name.
    pub fn variable_name_to_iri(&self, variable_name: &str) -> Option<Iri> {
        match self.prefixes.default_namespace() {
            Some(namespace) if namespace.ends_with(|c: char| c.is_ascii_alphanumeric()) => {
                Some(Iri::new("", format!("#{}", variable_name)))
            }
            _ => self.prefixes.expand(variable_name),
        }
    }

    /// Variable name for an IRI, the inverse of
    /// [`IriResolver::variable_name_to_iri`]
    pub fn iri_to_variable_name(&mut self, iri: &Iri) -> String {
        let full = iri.to_string();
        if let Some(name) = full.strip_prefix('#') {
            return name.to_string();
        }
        if let Some(remainder) = iri.remainder() {
            if self.prefixes.default_namespace() == Some(iri.namespace()) {
                return remainder.to_string();
            }
        }
        self.iri_to_prefixed_name(iri)
    }

    /// Rebuild the prefix table from an ontology document
    ///
    /// Order: clear, default namespace, configured prefixes, the document's
    /// declarations, then the reserved vocabulary prefixes, which therefore
    /// override any redeclaration by the document.
    pub fn update_prefixes<O: OntologyHandle + ?Sized>(&mut self, ontology: &O) {
        self.prefixes.clear();
        self.apply_configured_prefixes();

        let imported = match ontology.document_prefixes() {
            Some(declarations) => {
                let count = declarations.len();
                for (prefix, namespace) in declarations {
                    self.prefixes.set_prefix(&prefix, &namespace);
                }
                count
            }
            None => 0,
        };

        for (prefix, namespace) in RESERVED_PREFIXES {
            self.prefixes.set_prefix(prefix, namespace);
        }

        tracing::info!(
            imported,
            total = self.prefixes.len(),
            "rebuilt prefix table"
        );
    }

    /// Bind `prefix` to `namespace` in the prefix table
    pub fn set_prefix(&mut self, prefix: &str, namespace: &str) {
        self.prefixes.set_prefix(prefix, namespace);
    }

    /// A fresh IRI under the default namespace, or the generated-IRI
    /// namespace when there is none
    ///
    /// The local name carries a random 128-bit UUID.
    pub fn generate_iri(&self) -> Iri {
        let namespace = self
            .prefixes
            .default_namespace()
            .unwrap_or(self.generated_namespace.as_str());
        let separator = if namespace.ends_with(['#', '/']) { "" } else { "#" };
        let token = uuid::Uuid::new_v4().simple();

        Iri::create(&format!("{}{}g{}", namespace, separator, token))
    }

    /// Render an ontology object with the configured renderer
    pub fn render(&self, object: &dyn OntologyObject) -> String {
        self.renderer.render(object)
    }

    fn apply_configured_prefixes(&mut self) {
        if let Some(namespace) = &self.default_namespace {
            self.prefixes.set_default_namespace(namespace);
        }
        for (prefix, namespace) in &self.configured_prefixes {
            self.prefixes.set_prefix(prefix, namespace);
        }
    }
}

impl Default for IriResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IriResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IriResolver")
            .field("default_namespace", &self.default_namespace)
            .field("generated_namespace", &self.generated_namespace)
            .field("prefixes", &self.prefixes)
            .field("autogen", &self.autogen)
            .finish_non_exhaustive()
    }
}
