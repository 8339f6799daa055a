//! Names excluded from comparison.
//!
//! Stored calendar objects regenerate some properties on every write
//! (`dtstamp`, `last-modified`, ...). Comparing them would report a change on
//! every sync, so any element whose name is in the [`SkipSet`] is dropped while
//! wrapping and never appears on either side of a diff.

use std::collections::BTreeSet;

use caldiff_types::QualifiedName;
use serde::{Deserialize, Serialize};

/// Immutable set of qualified names excluded from comparison.
///
/// Build it once at startup and share it by reference or `Arc`; there are no
/// mutators, so concurrent reads need no synchronization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipSet {
    names: BTreeSet<QualifiedName>,
}

impl SkipSet {
    /// A set that skips nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from any collection of names.
    pub fn new(names: impl IntoIterator<Item = QualifiedName>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// The volatile iCalendar properties that differ between a local copy and
    /// its stored counterpart without any user-visible change.
    pub fn ical_defaults() -> Self {
        Self::new(
            ["prodid", "version", "created", "dtstamp", "last-modified"]
                .into_iter()
                .map(QualifiedName::ical),
        )
    }

    /// A copy of this set extended by one name.
    pub fn with(&self, name: QualifiedName) -> Self {
        let mut names = self.names.clone();
        names.insert(name);
        Self { names }
    }

    /// Returns `true` if elements with this name are excluded.
    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &QualifiedName> {
        self.names.iter()
    }
}

impl FromIterator<QualifiedName> for SkipSet {
    fn from_iter<I: IntoIterator<Item = QualifiedName>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_skips_nothing() {
        let skip = SkipSet::empty();
        assert!(skip.is_empty());
        assert!(!skip.contains(&QualifiedName::ical("dtstamp")));
    }

    #[test]
    fn ical_defaults_cover_volatile_properties() {
        let skip = SkipSet::ical_defaults();
        assert_eq!(skip.len(), 5);
        for name in ["prodid", "version", "created", "dtstamp", "last-modified"] {
            assert!(skip.contains(&QualifiedName::ical(name)), "{name} not skipped");
        }
        assert!(!skip.contains(&QualifiedName::ical("summary")));
    }

    #[test]
    fn membership_is_namespace_sensitive() {
        let skip = SkipSet::ical_defaults();
        assert!(!skip.contains(&QualifiedName::local("dtstamp")));
    }

    #[test]
    fn with_leaves_original_untouched() {
        let base = SkipSet::empty();
        let extended = base.with(QualifiedName::ical("sequence"));
        assert!(base.is_empty());
        assert!(extended.contains(&QualifiedName::ical("sequence")));
    }

    #[test]
    fn shared_across_threads() {
        let skip = std::sync::Arc::new(SkipSet::ical_defaults());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let skip = skip.clone();
                std::thread::spawn(move || skip.contains(&QualifiedName::ical("dtstamp")))
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
    }
}
