//! Rulebridge Resolver
//!
//! Bidirectional IRI ↔ prefixed name resolution for a rule-engine session.
//!
//! The resolver provides:
//! - Prefixed name → IRI lookup through declared, default and autogenerated
//!   prefixes
//! - IRI → prefixed name with on-demand prefix and name autogeneration
//! - Short forms and rule variable names
//! - Prefix table rebuilds from an ontology document, with the reserved
//!   rule/query vocabulary always re-applied last
//! - Fresh IRI generation
//!
//! # Examples
//!
//! ```
//! use rulebridge_domain::Iri;
//! use rulebridge_resolver::IriResolver;
//!
//! let mut resolver = IriResolver::new();
//! resolver.set_prefix("fam:", "http://example.org/family#");
//!
//! let alice = Iri::new("http://example.org/family#", "Alice");
//! assert_eq!(resolver.iri_to_prefixed_name(&alice), "fam:Alice");
//! assert_eq!(resolver.prefixed_name_to_iri("fam:Alice"), Some(alice));
//! ```
//!
//! # Configuration
//!
//! A resolver can be configured via TOML:
//!
//! ```toml
//! default_namespace = "http://example.org/family#"
//! generated_namespace = "http://swrl.stanford.edu/autogenerated"
//!
//! [prefixes]
//! "fam:" = "http://example.org/family#"
//! ```

#![warn(missing_docs)]

pub mod autogen;
mod bimap;
mod config;
mod error;
pub mod prefix_table;
mod resolver;
pub mod vocabulary;

pub use autogen::AutogenCache;
pub use config::ResolverConfig;
pub use error::ResolverError;
pub use prefix_table::PrefixTable;
pub use resolver::IriResolver;
