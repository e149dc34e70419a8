//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the resolver/value layer and
//! the ontology library and rule engine around it. Implementations live
//! outside this crate.

use crate::value::ObjectRef;
use crate::Iri;
use std::fmt;

/// Source of an ontology document's prefix declarations
///
/// Implemented by whatever wraps the loaded ontology.
pub trait OntologyHandle {
    /// Prefix → namespace declarations of the document
    ///
    /// Returns `None` when the document format has no prefix table at all
    /// (as opposed to an empty one).
    fn document_prefixes(&self) -> Option<Vec<(String, String)>>;
}

/// An ontology object that can be rendered as text
pub trait OntologyObject: fmt::Debug {
    /// IRI of the object if it is a named entity
    fn iri(&self) -> Option<&Iri>;

    /// Pre-computed rendering for anonymous objects
    fn rendering(&self) -> Option<String> {
        None
    }
}

impl OntologyObject for Iri {
    fn iri(&self) -> Option<&Iri> {
        Some(self)
    }
}

impl OntologyObject for ObjectRef {
    fn iri(&self) -> Option<&Iri> {
        ObjectRef::iri(self)
    }

    fn rendering(&self) -> Option<String> {
        match self {
            ObjectRef::Anonymous { rendering } => Some(rendering.clone()),
            ObjectRef::Named { .. } => None,
        }
    }
}

/// Turns ontology objects into text
pub trait ObjectRenderer {
    /// Render an object
    fn render(&self, object: &dyn OntologyObject) -> String;
}

/// Renderer that writes named objects as `<iri>`
///
/// Anonymous objects use their own rendering, or their debug form when
/// they have none.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl ObjectRenderer for SimpleRenderer {
    fn render(&self, object: &dyn OntologyObject) -> String {
        match (object.iri(), object.rendering()) {
            (Some(iri), _) => iri.to_quoted_string(),
            (None, Some(rendering)) => rendering,
            (None, None) => format!("{:?}", object),
        }
    }
}

/// Identifies one built-in atom invocation inside a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltInCall<'a> {
    /// Rule containing the atom
    pub rule_name: &'a str,
    /// Prefixed name of the built-in
    pub built_in_name: &'a str,
    /// Position of the atom within the rule
    pub built_in_index: usize,
    /// Whether the atom is in the rule head
    pub in_consequent: bool,
}

/// The surface a target rule engine calls back into
///
/// Implemented by the bridge; identifiers passed across it are the IRIs and
/// prefixed names produced by the resolver.
pub trait RuleEngineBridge {
    /// Inferred statement type
    type Axiom;

    /// Built-in argument type
    type Argument;

    /// Factory for statements and arguments
    type Factory;

    /// Identifier resolver handed to the engine
    type Resolver;

    /// Error type for bridge operations
    type Error;

    /// Submit a statement the engine inferred
    fn infer_axiom(&mut self, axiom: Self::Axiom) -> Result<(), Self::Error>;

    /// Evaluate a built-in predicate
    ///
    /// An empty result means the predicate is false. Otherwise each inner
    /// list is one argument binding for which it holds.
    fn invoke_built_in(
        &mut self,
        call: BuiltInCall<'_>,
        arguments: Vec<Self::Argument>,
    ) -> Result<Vec<Vec<Self::Argument>>, Self::Error>;

    /// Factory for building statements and arguments
    fn factory(&self) -> &Self::Factory;

    /// The bridge's identifier resolver
    fn resolver(&mut self) -> &mut Self::Resolver;

    /// Whether the active ontology changed since the last session reset
    fn has_ontology_changed(&self) -> bool;
}
