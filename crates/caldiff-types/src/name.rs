use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// XML namespace of the iCalendar vocabulary (RFC 6321, xCal).
pub const ICALENDAR_NS: &str = "urn:ietf:params:xml:ns:icalendar-2.0";

/// Namespace-qualified name of a component, property, or parameter.
///
/// Equality, hashing, and ordering are structural: namespace first, then the
/// local name, both compared lexically. The derived `Ord` relies on the field
/// order below.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
    namespace: String,
    local: String,
}

impl QualifiedName {
    /// Create a name from an explicit namespace and local part.
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    /// A name in the iCalendar namespace. Local names are lower-cased the way
    /// xCal spells them (`DTSTART` becomes `dtstart`).
    pub fn ical(local: &str) -> Self {
        Self::new(ICALENDAR_NS, local.to_ascii_lowercase())
    }

    /// A name with no namespace.
    pub fn local(local: impl Into<String>) -> Self {
        Self::new("", local)
    }

    /// The namespace URI (possibly empty).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The local part.
    pub fn local_name(&self) -> &str {
        &self.local
    }

    /// Clark notation: `{namespace}local`, or just `local` without a namespace.
    pub fn to_clark(&self) -> String {
        self.to_string()
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifiedName({self})")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local)
        }
    }
}

impl FromStr for QualifiedName {
    type Err = TypeError;

    /// Parse Clark notation. A bare token has an empty namespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (namespace, local) = match s.strip_prefix('{') {
            Some(rest) => rest
                .split_once('}')
                .ok_or_else(|| TypeError::InvalidQualifiedName(s.to_string()))?,
            None => ("", s),
        };
        if local.is_empty() || local.contains(['{', '}']) {
            return Err(TypeError::InvalidQualifiedName(s.to_string()));
        }
        Ok(Self::new(namespace, local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ical_names_are_lowercased() {
        let name = QualifiedName::ical("DTSTAMP");
        assert_eq!(name.namespace(), ICALENDAR_NS);
        assert_eq!(name.local_name(), "dtstamp");
    }

    #[test]
    fn ordering_is_namespace_then_local() {
        let a = QualifiedName::new("a", "zzz");
        let b = QualifiedName::new("b", "aaa");
        assert!(a < b);

        let c = QualifiedName::new("a", "aaa");
        assert!(c < a);
    }

    #[test]
    fn clark_display() {
        assert_eq!(
            QualifiedName::ical("uid").to_string(),
            "{urn:ietf:params:xml:ns:icalendar-2.0}uid"
        );
        assert_eq!(QualifiedName::local("x-foo").to_string(), "x-foo");
    }

    #[test]
    fn parse_clark() {
        let name: QualifiedName = "{urn:example}summary".parse().unwrap();
        assert_eq!(name, QualifiedName::new("urn:example", "summary"));

        let bare: QualifiedName = "x-custom".parse().unwrap();
        assert_eq!(bare, QualifiedName::local("x-custom"));
    }

    #[test]
    fn parse_display_agree() {
        let name = QualifiedName::ical("last-modified");
        let parsed: QualifiedName = name.to_clark().parse().unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("{urn:example".parse::<QualifiedName>().is_err());
        assert!("{urn:example}".parse::<QualifiedName>().is_err());
        assert!("".parse::<QualifiedName>().is_err());
        assert!("a}b".parse::<QualifiedName>().is_err());
    }
}
