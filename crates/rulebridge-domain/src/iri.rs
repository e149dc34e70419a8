//! IRI module - canonical identifiers split into namespace and remainder

use std::fmt;

/// A canonical resource identifier
///
/// An IRI is held as a `(namespace, remainder)` pair. The namespace is
/// everything up to and including the final `#` or `/`; the remainder is the
/// local name after it. IRIs whose tail is not a usable local name (for
/// example `http://example.org/` or `urn:isbn:123`) have no remainder and
/// the whole string is the namespace.
///
/// Every constructor applies the same split, so the parts are a function
/// of the full string and equality, ordering and hashing agree with it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri {
    namespace: String,
    remainder: Option<String>,
}

impl Iri {
    /// Build an IRI from a namespace and a remainder
    ///
    /// The parts are joined and re-split with the rule of [`Iri::create`],
    /// so a remainder that is not a usable local name is folded into the
    /// namespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulebridge_domain::Iri;
    ///
    /// let iri = Iri::new("http://example.org/ont#", "Person");
    /// assert_eq!(iri.namespace(), "http://example.org/ont#");
    /// assert_eq!(iri.remainder(), Some("Person"));
    /// assert_eq!(iri.to_string(), "http://example.org/ont#Person");
    ///
    /// let numeric = Iri::new("http://example.org/ont#", "123");
    /// assert_eq!(numeric.remainder(), None);
    /// assert_eq!(numeric, Iri::create("http://example.org/ont#123"));
    /// ```
    pub fn new(namespace: impl Into<String>, remainder: impl AsRef<str>) -> Self {
        let mut full = namespace.into();
        full.push_str(remainder.as_ref());
        Self::create(&full)
    }

    /// Parse a full IRI string, splitting it at the final `#` or `/`
    ///
    /// # Examples
    ///
    /// ```
    /// use rulebridge_domain::Iri;
    ///
    /// let iri = Iri::create("http://example.org/people/alice");
    /// assert_eq!(iri.namespace(), "http://example.org/people/");
    /// assert_eq!(iri.remainder(), Some("alice"));
    ///
    /// let bare = Iri::create("Foo");
    /// assert_eq!(bare.namespace(), "");
    /// assert_eq!(bare.remainder(), Some("Foo"));
    /// ```
    pub fn create(full: &str) -> Self {
        let split_at = full.rfind(['#', '/']).map(|idx| idx + 1).unwrap_or(0);
        let (namespace, tail) = full.split_at(split_at);

        if is_local_name(tail) {
            Self {
                namespace: namespace.to_string(),
                remainder: Some(tail.to_string()),
            }
        } else {
            Self {
                namespace: full.to_string(),
                remainder: None,
            }
        }
    }

    /// Namespace part (may be empty)
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Remainder part, if the IRI has a separable local name
    pub fn remainder(&self) -> Option<&str> {
        self.remainder.as_deref()
    }

    /// The IRI wrapped in angle brackets, e.g. `<http://example.org/a>`
    pub fn to_quoted_string(&self) -> String {
        format!("<{}>", self)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.namespace)?;
        if let Some(remainder) = &self.remainder {
            f.write_str(remainder)?;
        }
        Ok(())
    }
}

impl From<&str> for Iri {
    fn from(full: &str) -> Self {
        Self::create(full)
    }
}

/// Whether `s` can stand as the local name of an IRI
///
/// Follows the XML NCName shape: a letter or `_` first, then letters,
/// digits, `_`, `-` or `.`.
fn is_local_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
