//! Typed literals and the shared semantic comparator
//!
//! A [`Literal`] is stored exactly as written: lexical form, datatype IRI and
//! optional language tag. [`LiteralComparator`] interprets the lexical form
//! under its datatype so that `"01"^^xsd:integer` and `"1"^^xsd:integer` are
//! the same value. Everything that needs value semantics (result values,
//! aggregation, ordering) goes through the comparator.

use crate::Iri;
use std::cmp::Ordering;
use std::fmt;

/// XML Schema namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

/// RDF namespace
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

const INTEGER_TYPES: &[&str] = &[
    "integer",
    "int",
    "long",
    "short",
    "byte",
    "nonNegativeInteger",
    "positiveInteger",
    "nonPositiveInteger",
    "negativeInteger",
    "unsignedLong",
    "unsignedInt",
    "unsignedShort",
    "unsignedByte",
];

const FRACTIONAL_TYPES: &[&str] = &["decimal", "float", "double"];

/// A typed literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    lexical: String,
    datatype: Iri,
    language: Option<String>,
}

impl Literal {
    /// Create a literal with an explicit datatype
    pub fn new(lexical: impl Into<String>, datatype: Iri) -> Self {
        Self {
            lexical: lexical.into(),
            datatype,
            language: None,
        }
    }

    /// Create a literal typed with an XML Schema datatype by local name
    ///
    /// ```
    /// use rulebridge_domain::Literal;
    ///
    /// let lit = Literal::xsd("42", "integer");
    /// assert_eq!(lit.datatype().to_string(), "http://www.w3.org/2001/XMLSchema#integer");
    /// ```
    pub fn xsd(lexical: impl Into<String>, local_name: &str) -> Self {
        Self::new(lexical, Iri::new(XSD_NAMESPACE, local_name))
    }

    /// `xsd:string` literal
    pub fn string(lexical: impl Into<String>) -> Self {
        Self::xsd(lexical, "string")
    }

    /// `rdf:langString` literal with a language tag
    pub fn lang_string(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Iri::new(RDF_NAMESPACE, "langString"),
            language: Some(language.into()),
        }
    }

    /// `xsd:integer` literal
    pub fn integer(value: i64) -> Self {
        Self::xsd(value.to_string(), "integer")
    }

    /// `xsd:double` literal
    pub fn double(value: f64) -> Self {
        let lexical = if value == f64::INFINITY {
            "INF".to_string()
        } else if value == f64::NEG_INFINITY {
            "-INF".to_string()
        } else {
            value.to_string()
        };
        Self::xsd(lexical, "double")
    }

    /// `xsd:boolean` literal
    pub fn boolean(value: bool) -> Self {
        Self::xsd(value.to_string(), "boolean")
    }

    /// Lexical form exactly as written
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// Datatype IRI
    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }

    /// Language tag, if any
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Whether the datatype belongs to the xsd integer or decimal families
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.xsd_local_name(),
            Some(name) if INTEGER_TYPES.contains(&name) || FRACTIONAL_TYPES.contains(&name)
        )
    }

    fn xsd_local_name(&self) -> Option<&str> {
        if self.datatype.namespace() == XSD_NAMESPACE {
            self.datatype.remainder()
        } else {
            None
        }
    }

    fn is_text(&self) -> bool {
        if self.language.is_some() {
            return true;
        }
        match (self.datatype.namespace(), self.datatype.remainder()) {
            (XSD_NAMESPACE, Some("string")) => true,
            (RDF_NAMESPACE, Some("PlainLiteral" | "langString")) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.lexical)?;
        match &self.language {
            Some(language) => write!(f, "@{}", language),
            None => write!(f, "^^{}", self.datatype.to_quoted_string()),
        }
    }
}

/// Exact decimal number, stored as `±0.d1d2...dn × 10^exponent`
///
/// The form is normalized: no leading or trailing zero digits, and zero has
/// no digits and no sign. Structural equality is therefore numeric equality,
/// and precision is unbounded.
///
/// ```
/// use rulebridge_domain::literal::ExactDecimal;
///
/// let a = ExactDecimal::parse("0.10", false).unwrap();
/// let b = ExactDecimal::parse("+.1", false).unwrap();
/// let c = ExactDecimal::parse("0.10000000000000000001", false).unwrap();
/// assert_eq!(a, b);
/// assert!(a < c);
/// assert!(ExactDecimal::parse("1e3", false).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactDecimal {
    negative: bool,
    exponent: i64,
    digits: String,
}

impl ExactDecimal {
    /// Parse `[+-]digits[.digits]`, plus an `e`/`E` exponent when
    /// `allow_exponent` is set
    pub fn parse(lexical: &str, allow_exponent: bool) -> Option<Self> {
        let (negative, body) = match lexical.as_bytes().first() {
            Some(b'-') => (true, &lexical[1..]),
            Some(b'+') => (false, &lexical[1..]),
            _ => (false, lexical),
        };

        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(idx) if allow_exponent => (&body[..idx], body[idx + 1..].parse::<i64>().ok()?),
            Some(_) => return None,
            None => (body, 0),
        };

        let (integral, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if integral.is_empty() && fraction.is_empty() {
            return None;
        }
        if !integral.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let all = format!("{}{}", integral, fraction);
        let leading = all.bytes().take_while(|b| *b == b'0').count();
        let digits = all[leading..].trim_end_matches('0');
        if digits.is_empty() {
            return Some(Self::zero());
        }

        let exponent = i64::try_from(integral.len())
            .ok()?
            .checked_add(exponent)?
            .checked_sub(i64::try_from(leading).ok()?)?;

        Some(Self {
            negative,
            exponent,
            digits: digits.to_string(),
        })
    }

    fn zero() -> Self {
        Self {
            negative: false,
            exponent: 0,
            digits: String::new(),
        }
    }

    /// Whether the value is zero
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    fn signum(&self) -> i8 {
        match (self.is_zero(), self.negative) {
            (true, _) => 0,
            (false, true) => -1,
            (false, false) => 1,
        }
    }
}

impl PartialOrd for ExactDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign = self.signum().cmp(&other.signum());
        if sign != Ordering::Equal || self.is_zero() {
            return sign;
        }

        // Normalized digit strings compare like the fractions they spell
        let magnitude = self
            .exponent
            .cmp(&other.exponent)
            .then_with(|| self.digits.cmp(&other.digits));
        if self.negative {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

/// A numeric value on the extended number line
///
/// Floating-point values are held as the shortest decimal that reads back
/// as the same float, so they compare exactly against integers and
/// decimals. `NaN` sorts after everything and equals itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Number {
    /// `-INF`
    NegativeInfinity,
    /// Any finite value
    Finite(ExactDecimal),
    /// `INF`
    PositiveInfinity,
    /// `NaN`
    NaN,
}

/// Datatype family of a numeric literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericFamily {
    /// The xsd integer types
    Integer,
    /// `xsd:decimal`
    Decimal,
    /// `xsd:float` and `xsd:double`
    Floating,
}

/// The value a literal denotes, used as its equality, order and hash key
///
/// Variant order is the cross-family order: booleans, numbers, strings,
/// then everything else. Numbers order by value across their datatype
/// families; the family only breaks ties, so `1` and `1.0` are adjacent but
/// not equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SemanticKey {
    /// `xsd:boolean`
    Boolean(bool),
    /// Integer, decimal, float and double values
    Numeric {
        /// Numeric value
        value: Number,
        /// Datatype family
        family: NumericFamily,
    },
    /// Plain, `xsd:string` and language-tagged strings
    Text {
        /// Lexical form
        lexical: String,
        /// Lowercased language tag
        language: Option<String>,
    },
    /// Any other datatype, or a lexical form invalid for its datatype
    Other {
        /// Datatype IRI
        datatype: Iri,
        /// Lexical form
        lexical: String,
    },
}

fn integer_value(lexical: &str) -> Option<Number> {
    let unsigned = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    ExactDecimal::parse(lexical, false).map(Number::Finite)
}

fn floating_value(lexical: &str, single_precision: bool) -> Option<Number> {
    match lexical {
        "INF" | "+INF" => return Some(Number::PositiveInfinity),
        "-INF" => return Some(Number::NegativeInfinity),
        "NaN" => return Some(Number::NaN),
        _ => {}
    }

    // Shape check first: the float parser also takes `inf`, `nan` and `infinity`
    ExactDecimal::parse(lexical, true)?;

    let (value, shortest) = if single_precision {
        let value = lexical.parse::<f32>().ok()?;
        (f64::from(value), format!("{:e}", value))
    } else {
        let value = lexical.parse::<f64>().ok()?;
        (value, format!("{:e}", value))
    };

    if value.is_infinite() {
        return Some(if value > 0.0 {
            Number::PositiveInfinity
        } else {
            Number::NegativeInfinity
        });
    }
    ExactDecimal::parse(&shortest, true).map(Number::Finite)
}

fn numeric(value: Option<Number>, family: NumericFamily) -> Option<SemanticKey> {
    value.map(|value| SemanticKey::Numeric { value, family })
}

/// Semantic total order over literals
///
/// ```
/// use rulebridge_domain::{Literal, LiteralComparator};
/// use std::cmp::Ordering;
///
/// let comparator = LiteralComparator;
/// let a = Literal::xsd("01", "integer");
/// let b = Literal::xsd("1", "integer");
/// assert_eq!(comparator.compare(&a, &b), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralComparator;

impl LiteralComparator {
    /// Interpret a literal's lexical form under its datatype
    pub fn key(&self, literal: &Literal) -> SemanticKey {
        let lexical = literal.lexical.trim();

        if literal.is_text() {
            return SemanticKey::Text {
                lexical: literal.lexical.clone(),
                language: literal.language.as_ref().map(|l| l.to_lowercase()),
            };
        }

        let parsed = match literal.xsd_local_name() {
            Some("boolean") => match lexical {
                "true" | "1" => Some(SemanticKey::Boolean(true)),
                "false" | "0" => Some(SemanticKey::Boolean(false)),
                _ => None,
            },
            Some(name) if INTEGER_TYPES.contains(&name) => {
                numeric(integer_value(lexical), NumericFamily::Integer)
            }
            Some("decimal") => numeric(
                ExactDecimal::parse(lexical, false).map(Number::Finite),
                NumericFamily::Decimal,
            ),
            Some("float") => numeric(floating_value(lexical, true), NumericFamily::Floating),
            Some("double") => numeric(floating_value(lexical, false), NumericFamily::Floating),
            _ => None,
        };

        parsed.unwrap_or_else(|| SemanticKey::Other {
            datatype: literal.datatype.clone(),
            lexical: literal.lexical.clone(),
        })
    }

    /// Compare two literals by value
    pub fn compare(&self, a: &Literal, b: &Literal) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }

    /// Whether two literals denote the same value
    pub fn equals(&self, a: &Literal, b: &Literal) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}
