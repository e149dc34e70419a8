//! Resolver configuration

use crate::vocabulary::{reserved_namespace, GENERATED_IRI_NAMESPACE};
use rulebridge_domain::prefixed::normalize_prefix;
use crate::ResolverError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration for an [`IriResolver`](crate::IriResolver)
///
/// # Examples
///
/// ```
/// use rulebridge_resolver::ResolverConfig;
///
/// let config = ResolverConfig::from_toml(r#"
///     default_namespace = "http://example.org/family#"
///
///     [prefixes]
///     "fam:" = "http://example.org/family#"
/// "#).unwrap();
///
/// assert_eq!(config.default_namespace.as_deref(), Some("http://example.org/family#"));
/// assert_eq!(config.prefixes.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Namespace bound to the empty prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,

    /// Namespace for generated IRIs when no default namespace is bound
    #[serde(default = "default_generated_namespace")]
    pub generated_namespace: String,

    /// Extra prefix bindings, re-applied on every prefix rebuild before the
    /// document's own declarations
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,
}

fn default_generated_namespace() -> String {
    GENERATED_IRI_NAMESPACE.to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_namespace: None,
            generated_namespace: default_generated_namespace(),
            prefixes: BTreeMap::new(),
        }
    }
}

impl ResolverConfig {
    /// Configuration with a default namespace and nothing else
    pub fn with_default_namespace(namespace: impl Into<String>) -> Self {
        Self {
            default_namespace: Some(namespace.into()),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ResolverError> {
        if let Some(namespace) = &self.default_namespace {
            if namespace.is_empty() {
                return Err(ResolverError::Config(
                    "default_namespace must not be empty".to_string(),
                ));
            }
        }
        if self.generated_namespace.is_empty() {
            return Err(ResolverError::Config(
                "generated_namespace must not be empty".to_string(),
            ));
        }
        for (prefix, namespace) in &self.prefixes {
            if prefix.chars().any(char::is_whitespace) {
                return Err(ResolverError::Config(format!(
                    "prefix '{}' contains whitespace",
                    prefix
                )));
            }
            if namespace.is_empty() {
                return Err(ResolverError::Config(format!(
                    "namespace for prefix '{}' must not be empty",
                    prefix
                )));
            }
            if let Some(reserved) = reserved_namespace(&normalize_prefix(prefix)) {
                if reserved != namespace {
                    return Err(ResolverError::Config(format!(
                        "prefix '{}' is reserved for {}",
                        prefix, reserved
                    )));
                }
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ResolverError> {
        let config: ResolverConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ResolverError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ResolverError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
