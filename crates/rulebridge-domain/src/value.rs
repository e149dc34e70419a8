//! Result values - one cell of a query result row
//!
//! [`ResultValue`] is a closed sum type over every kind of value a query can
//! produce. Each variant wraps its own payload type, and [`ResultValue::narrow`]
//! is the single narrowing operation: it is parameterized by the payload type,
//! which fixes the requested [`ValueKind`] at compile time.
//!
//! ```
//! use rulebridge_domain::{Literal, ResultValue, ValueKind};
//! use rulebridge_domain::value::{ClassResult, LiteralResult};
//!
//! let cell = ResultValue::literal(Literal::integer(5), "xsd:integer");
//! assert!(cell.is_literal());
//! assert_eq!(cell.narrow::<LiteralResult>().unwrap().literal().lexical(), "5");
//!
//! let err = cell.narrow::<ClassResult>().unwrap_err();
//! assert_eq!(err.requested, ValueKind::Class);
//! assert_eq!(err.actual, ValueKind::Literal);
//! ```

use crate::literal::{Literal, LiteralComparator};
use crate::Iri;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// The kind of a result value
///
/// Exactly one kind applies to any value. Declaration order is the order
/// used when sorting values of different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    /// Typed literal
    Literal,
    /// Named entity of unspecified kind
    Entity,
    /// Anonymous expression of unspecified kind
    Expression,
    /// Named class
    Class,
    /// Class expression
    ClassExpression,
    /// Individual, named or anonymous
    Individual,
    /// Named individual
    NamedIndividual,
    /// Named object property
    ObjectProperty,
    /// Object property expression
    ObjectPropertyExpression,
    /// Named data property
    DataProperty,
    /// Data property expression
    DataPropertyExpression,
    /// Annotation property
    AnnotationProperty,
    /// Named datatype
    Datatype,
    /// Data range
    DataRange,
}

impl ValueKind {
    /// Every kind, in declaration order
    pub const ALL: [ValueKind; 14] = [
        ValueKind::Literal,
        ValueKind::Entity,
        ValueKind::Expression,
        ValueKind::Class,
        ValueKind::ClassExpression,
        ValueKind::Individual,
        ValueKind::NamedIndividual,
        ValueKind::ObjectProperty,
        ValueKind::ObjectPropertyExpression,
        ValueKind::DataProperty,
        ValueKind::DataPropertyExpression,
        ValueKind::AnnotationProperty,
        ValueKind::Datatype,
        ValueKind::DataRange,
    ];

    /// Human-readable kind name
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Literal => "literal",
            ValueKind::Entity => "entity",
            ValueKind::Expression => "expression",
            ValueKind::Class => "class",
            ValueKind::ClassExpression => "class expression",
            ValueKind::Individual => "individual",
            ValueKind::NamedIndividual => "named individual",
            ValueKind::ObjectProperty => "object property",
            ValueKind::ObjectPropertyExpression => "object property expression",
            ValueKind::DataProperty => "data property",
            ValueKind::DataPropertyExpression => "data property expression",
            ValueKind::AnnotationProperty => "annotation property",
            ValueKind::Datatype => "datatype",
            ValueKind::DataRange => "data range",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested a kind the value does not have
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{actual} result value is not a {requested} result value")]
pub struct NarrowingError {
    /// Kind the caller asked for
    pub requested: ValueKind,
    /// Kind the value actually has
    pub actual: ValueKind,
}

/// Reference to an ontology object owned elsewhere
///
/// Named entities are identified by IRI and carry the prefixed name the
/// resolver gave them; anonymous expressions carry their rendering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectRef {
    /// Named entity
    Named {
        /// Entity IRI
        iri: Iri,
        /// Prefixed name of the IRI
        prefixed_name: String,
    },
    /// Anonymous expression
    Anonymous {
        /// Textual rendering of the expression
        rendering: String,
    },
}

impl ObjectRef {
    /// Reference a named entity
    pub fn named(iri: Iri, prefixed_name: impl Into<String>) -> Self {
        ObjectRef::Named {
            iri,
            prefixed_name: prefixed_name.into(),
        }
    }

    /// Reference an anonymous expression by its rendering
    pub fn anonymous(rendering: impl Into<String>) -> Self {
        ObjectRef::Anonymous {
            rendering: rendering.into(),
        }
    }

    /// IRI of a named entity
    pub fn iri(&self) -> Option<&Iri> {
        match self {
            ObjectRef::Named { iri, .. } => Some(iri),
            ObjectRef::Anonymous { .. } => None,
        }
    }

    /// Prefixed name for named entities, rendering for expressions
    pub fn label(&self) -> &str {
        match self {
            ObjectRef::Named { prefixed_name, .. } => prefixed_name,
            ObjectRef::Anonymous { rendering } => rendering,
        }
    }
}

/// A literal cell: the literal plus its datatype's prefixed name
///
/// Equality, hashing and ordering follow [`LiteralComparator`], so two
/// cells holding `"01"^^xsd:integer` and `"1"^^xsd:integer` are equal.
#[derive(Debug, Clone)]
pub struct LiteralResult {
    literal: Literal,
    datatype_prefixed_name: String,
}

impl LiteralResult {
    /// Wrap a literal
    pub fn new(literal: Literal, datatype_prefixed_name: impl Into<String>) -> Self {
        Self {
            literal,
            datatype_prefixed_name: datatype_prefixed_name.into(),
        }
    }

    /// The wrapped literal
    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    /// Prefixed name of the literal's datatype
    pub fn datatype_prefixed_name(&self) -> &str {
        &self.datatype_prefixed_name
    }
}

impl PartialEq for LiteralResult {
    fn eq(&self, other: &Self) -> bool {
        LiteralComparator.equals(&self.literal, &other.literal)
    }
}

impl Eq for LiteralResult {}

impl PartialOrd for LiteralResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LiteralResult {
    fn cmp(&self, other: &Self) -> Ordering {
        LiteralComparator.compare(&self.literal, &other.literal)
    }
}

impl Hash for LiteralResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        LiteralComparator.key(&self.literal).hash(state);
    }
}

/// Payload types that [`ResultValue::narrow`] can project to
pub trait Narrow: Sized {
    /// The kind this payload belongs to
    const KIND: ValueKind;

    /// Borrow the payload if `value` has this kind
    fn project(value: &ResultValue) -> Option<&Self>;
}

impl Narrow for LiteralResult {
    const KIND: ValueKind = ValueKind::Literal;

    fn project(value: &ResultValue) -> Option<&Self> {
        match value {
            ResultValue::Literal(inner) => Some(inner),
            _ => None,
        }
    }
}

macro_rules! object_results {
    ($($(#[$doc:meta])* $name:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $name(pub ObjectRef);

            impl $name {
                /// The referenced ontology object
                pub fn object(&self) -> &ObjectRef {
                    &self.0
                }
            }

            impl Narrow for $name {
                const KIND: ValueKind = ValueKind::$kind;

                fn project(value: &ResultValue) -> Option<&Self> {
                    match value {
                        ResultValue::$kind(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

object_results! {
    /// Entity cell
    EntityResult => Entity,
    /// Expression cell
    ExpressionResult => Expression,
    /// Class cell
    ClassResult => Class,
    /// Class expression cell
    ClassExpressionResult => ClassExpression,
    /// Individual cell
    IndividualResult => Individual,
    /// Named individual cell
    NamedIndividualResult => NamedIndividual,
    /// Object property cell
    ObjectPropertyResult => ObjectProperty,
    /// Object property expression cell
    ObjectPropertyExpressionResult => ObjectPropertyExpression,
    /// Data property cell
    DataPropertyResult => DataProperty,
    /// Data property expression cell
    DataPropertyExpressionResult => DataPropertyExpression,
    /// Annotation property cell
    AnnotationPropertyResult => AnnotationProperty,
    /// Datatype cell
    DatatypeResult => Datatype,
    /// Data range cell
    DataRangeResult => DataRange,
}

/// One query result cell
///
/// Values of different kinds are never equal; they order by [`ValueKind`]
/// first and by payload within a kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResultValue {
    /// Typed literal
    Literal(LiteralResult),
    /// Named entity of unspecified kind
    Entity(EntityResult),
    /// Expression of unspecified kind
    Expression(ExpressionResult),
    /// Named class
    Class(ClassResult),
    /// Class expression
    ClassExpression(ClassExpressionResult),
    /// Individual
    Individual(IndividualResult),
    /// Named individual
    NamedIndividual(NamedIndividualResult),
    /// Object property
    ObjectProperty(ObjectPropertyResult),
    /// Object property expression
    ObjectPropertyExpression(ObjectPropertyExpressionResult),
    /// Data property
    DataProperty(DataPropertyResult),
    /// Data property expression
    DataPropertyExpression(DataPropertyExpressionResult),
    /// Annotation property
    AnnotationProperty(AnnotationPropertyResult),
    /// Datatype
    Datatype(DatatypeResult),
    /// Data range
    DataRange(DataRangeResult),
}

impl ResultValue {
    /// Literal cell
    pub fn literal(literal: Literal, datatype_prefixed_name: impl Into<String>) -> Self {
        ResultValue::Literal(LiteralResult::new(literal, datatype_prefixed_name))
    }

    /// Non-literal cell of the given kind
    ///
    /// Returns `None` for [`ValueKind::Literal`], which needs a literal payload.
    pub fn object(kind: ValueKind, object: ObjectRef) -> Option<Self> {
        let value = match kind {
            ValueKind::Literal => return None,
            ValueKind::Entity => ResultValue::Entity(EntityResult(object)),
            ValueKind::Expression => ResultValue::Expression(ExpressionResult(object)),
            ValueKind::Class => ResultValue::Class(ClassResult(object)),
            ValueKind::ClassExpression => {
                ResultValue::ClassExpression(ClassExpressionResult(object))
            }
            ValueKind::Individual => ResultValue::Individual(IndividualResult(object)),
            ValueKind::NamedIndividual => {
                ResultValue::NamedIndividual(NamedIndividualResult(object))
            }
            ValueKind::ObjectProperty => ResultValue::ObjectProperty(ObjectPropertyResult(object)),
            ValueKind::ObjectPropertyExpression => {
                ResultValue::ObjectPropertyExpression(ObjectPropertyExpressionResult(object))
            }
            ValueKind::DataProperty => ResultValue::DataProperty(DataPropertyResult(object)),
            ValueKind::DataPropertyExpression => {
                ResultValue::DataPropertyExpression(DataPropertyExpressionResult(object))
            }
            ValueKind::AnnotationProperty => {
                ResultValue::AnnotationProperty(AnnotationPropertyResult(object))
            }
            ValueKind::Datatype => ResultValue::Datatype(DatatypeResult(object)),
            ValueKind::DataRange => ResultValue::DataRange(DataRangeResult(object)),
        };
        Some(value)
    }

    /// The kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            ResultValue::Literal(_) => ValueKind::Literal,
            ResultValue::Entity(_) => ValueKind::Entity,
            ResultValue::Expression(_) => ValueKind::Expression,
            ResultValue::Class(_) => ValueKind::Class,
            ResultValue::ClassExpression(_) => ValueKind::ClassExpression,
            ResultValue::Individual(_) => ValueKind::Individual,
            ResultValue::NamedIndividual(_) => ValueKind::NamedIndividual,
            ResultValue::ObjectProperty(_) => ValueKind::ObjectProperty,
            ResultValue::ObjectPropertyExpression(_) => ValueKind::ObjectPropertyExpression,
            ResultValue::DataProperty(_) => ValueKind::DataProperty,
            ResultValue::DataPropertyExpression(_) => ValueKind::DataPropertyExpression,
            ResultValue::AnnotationProperty(_) => ValueKind::AnnotationProperty,
            ResultValue::Datatype(_) => ValueKind::Datatype,
            ResultValue::DataRange(_) => ValueKind::DataRange,
        }
    }

    /// Whether this value has the given kind
    pub fn is(&self, kind: ValueKind) -> bool {
        self.kind() == kind
    }

    /// Narrow to the payload of kind `T::KIND`
    ///
    /// # Errors
    /// Returns [`NarrowingError`] naming both kinds when this value has a
    /// different kind.
    pub fn narrow<T: Narrow>(&self) -> Result<&T, NarrowingError> {
        T::project(self).ok_or(NarrowingError {
            requested: T::KIND,
            actual: self.kind(),
        })
    }

    /// The referenced ontology object, for every kind except literals
    pub fn object_ref(&self) -> Option<&ObjectRef> {
        match self {
            ResultValue::Literal(_) => None,
            ResultValue::Entity(v) => Some(&v.0),
            ResultValue::Expression(v) => Some(&v.0),
            ResultValue::Class(v) => Some(&v.0),
            ResultValue::ClassExpression(v) => Some(&v.0),
            ResultValue::Individual(v) => Some(&v.0),
            ResultValue::NamedIndividual(v) => Some(&v.0),
            ResultValue::ObjectProperty(v) => Some(&v.0),
            ResultValue::ObjectPropertyExpression(v) => Some(&v.0),
            ResultValue::DataProperty(v) => Some(&v.0),
            ResultValue::DataPropertyExpression(v) => Some(&v.0),
            ResultValue::AnnotationProperty(v) => Some(&v.0),
            ResultValue::Datatype(v) => Some(&v.0),
            ResultValue::DataRange(v) => Some(&v.0),
        }
    }

    /// Is this a literal?
    pub fn is_literal(&self) -> bool {
        self.is(ValueKind::Literal)
    }

    /// Is this an entity?
    pub fn is_entity(&self) -> bool {
        self.is(ValueKind::Entity)
    }

    /// Is this an expression?
    pub fn is_expression(&self) -> bool {
        self.is(ValueKind::Expression)
    }

    /// Is this a class?
    pub fn is_class(&self) -> bool {
        self.is(ValueKind::Class)
    }

    /// Is this a class expression?
    pub fn is_class_expression(&self) -> bool {
        self.is(ValueKind::ClassExpression)
    }

    /// Is this an individual?
    pub fn is_individual(&self) -> bool {
        self.is(ValueKind::Individual)
    }

    /// Is this a named individual?
    pub fn is_named_individual(&self) -> bool {
        self.is(ValueKind::NamedIndividual)
    }

    /// Is this an object property?
    pub fn is_object_property(&self) -> bool {
        self.is(ValueKind::ObjectProperty)
    }

    /// Is this an object property expression?
    pub fn is_object_property_expression(&self) -> bool {
        self.is(ValueKind::ObjectPropertyExpression)
    }

    /// Is this a data property?
    pub fn is_data_property(&self) -> bool {
        self.is(ValueKind::DataProperty)
    }

    /// Is this a data property expression?
    pub fn is_data_property_expression(&self) -> bool {
        self.is(ValueKind::DataPropertyExpression)
    }

    /// Is this an annotation property?
    pub fn is_annotation_property(&self) -> bool {
        self.is(ValueKind::AnnotationProperty)
    }

    /// Is this a datatype?
    pub fn is_datatype(&self) -> bool {
        self.is(ValueKind::Datatype)
    }

    /// Is this a data range?
    pub fn is_data_range(&self) -> bool {
        self.is(ValueKind::DataRange)
    }

    /// Narrow to a literal
    pub fn as_literal(&self) -> Result<&LiteralResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to an entity
    pub fn as_entity(&self) -> Result<&EntityResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to an expression
    pub fn as_expression(&self) -> Result<&ExpressionResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to a class
    pub fn as_class(&self) -> Result<&ClassResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to a class expression
    pub fn as_class_expression(&self) -> Result<&ClassExpressionResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to an individual
    pub fn as_individual(&self) -> Result<&IndividualResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to a named individual
    pub fn as_named_individual(&self) -> Result<&NamedIndividualResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to an object property
    pub fn as_object_property(&self) -> Result<&ObjectPropertyResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to an object property expression
    pub fn as_object_property_expression(
        &self,
    ) -> Result<&ObjectPropertyExpressionResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to a data property
    pub fn as_data_property(&self) -> Result<&DataPropertyResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to a data property expression
    pub fn as_data_property_expression(
        &self,
    ) -> Result<&DataPropertyExpressionResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to an annotation property
    pub fn as_annotation_property(&self) -> Result<&AnnotationPropertyResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to a datatype
    pub fn as_datatype(&self) -> Result<&DatatypeResult, NarrowingError> {
        self.narrow()
    }

    /// Narrow to a data range
    pub fn as_data_range(&self) -> Result<&DataRangeResult, NarrowingError> {
        self.narrow()
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Literal(lit) => write!(f, "{}", lit.literal()),
            other => match other.object_ref() {
                Some(object) => f.write_str(object.label()),
                None => Ok(()),
            },
        }
    }
}
