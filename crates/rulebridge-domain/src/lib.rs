//! Rulebridge Domain Layer
//!
//! Value types and boundary contracts shared by the rule-engine bridge.
//! Nothing here holds mutable session state; the resolver that does lives
//! in `rulebridge-resolver`.
//!
//! ## Key Concepts
//!
//! - **IRI**: canonical identifier, held as namespace + remainder
//! - **Prefixed name**: `prefix:localPart` alias for an IRI
//! - **Literal**: lexical form + datatype, compared by value
//! - **Result value**: one query result cell, a closed sum over 14 kinds
//!   with checked narrowing
//!
//! ## Architecture
//!
//! - Pure value types only
//! - Trait definitions for the ontology library and the rule engine

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod iri;
pub mod literal;
pub mod prefixed;
pub mod traits;
pub mod value;

// Re-exports for convenience
pub use iri::Iri;
pub use literal::{Literal, LiteralComparator, SemanticKey};
pub use prefixed::PrefixedName;
pub use value::{NarrowingError, ObjectRef, ResultValue, ValueKind};
