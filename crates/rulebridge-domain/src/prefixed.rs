//! Prefixed name module - `prefix:localPart` surface forms

use std::fmt;

/// Separator between prefix and local part
pub const SEPARATOR: char = ':';

/// A borrowed view over a prefixed name such as `owl:Thing`
///
/// Parsing never fails. A separator at position 0 (`:Foo`) or no separator
/// at all (`Foo`) both count as "no prefix"; callers then resolve the name
/// through the default namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixedName<'a> {
    raw: &'a str,
    separator: Option<usize>,
}

impl<'a> PrefixedName<'a> {
    /// Split a raw name at its first separator
    ///
    /// # Examples
    ///
    /// ```
    /// use rulebridge_domain::PrefixedName;
    ///
    /// let name = PrefixedName::parse("owl:Thing");
    /// assert_eq!(name.prefix(), "owl:");
    /// assert_eq!(name.local_part(), "Thing");
    ///
    /// let bare = PrefixedName::parse(":Thing");
    /// assert!(!bare.has_prefix());
    /// assert_eq!(bare.local_part(), "Thing");
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            separator: raw.find(SEPARATOR),
        }
    }

    /// The name exactly as written
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Whether a non-empty prefix segment is present
    pub fn has_prefix(&self) -> bool {
        matches!(self.separator, Some(idx) if idx > 0)
    }

    /// Prefix token including the trailing separator, or `""` if absent
    pub fn prefix(&self) -> &'a str {
        match self.separator {
            Some(idx) if idx > 0 => &self.raw[..=idx],
            _ => "",
        }
    }

    /// Text after the separator, or the whole name if there is none
    pub fn local_part(&self) -> &'a str {
        match self.separator {
            Some(idx) => &self.raw[idx + SEPARATOR.len_utf8()..],
            None => self.raw,
        }
    }
}

impl fmt::Display for PrefixedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Normalize a prefix token so it ends with the separator
///
/// ```
/// use rulebridge_domain::prefixed::normalize_prefix;
///
/// assert_eq!(normalize_prefix("owl"), "owl:");
/// assert_eq!(normalize_prefix("owl:"), "owl:");
/// assert_eq!(normalize_prefix(""), ":");
/// ```
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.ends_with(SEPARATOR) {
        prefix.to_string()
    } else {
        format!("{}{}", prefix, SEPARATOR)
    }
}
