use std::cmp::Ordering;
use std::fmt;

use caldiff_types::QualifiedName;

use crate::change::{Change, Child};
use crate::error::DiffResult;

/// An element kind the sequence algorithm can align.
///
/// `try_cmp` is the single canonical comparison. Equality is defined as
/// `try_cmp(..) == Ordering::Equal` and must stay consistent with
/// `content_hash`.
pub trait Entity: Clone + fmt::Debug {
    /// The qualified name the walk aligns on.
    fn name(&self) -> &QualifiedName;

    /// Canonical ordering: name first, then content.
    fn try_cmp(&self, other: &Self) -> DiffResult<Ordering>;

    /// Compare names only.
    fn compare_names(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }

    /// Structural equality through the comparator.
    fn try_eq(&self, other: &Self) -> DiffResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }

    /// For two same-named elements: do they carry the same value, so that
    /// any difference lies in their children?
    fn same_value(&self, other: &Self) -> DiffResult<bool>;

    /// The Update record pairing `self` (left) with `other` (right), with
    /// nested records for the differing children.
    fn diff_pair(&self, other: &Self) -> DiffResult<Change>;

    fn content_hash(&self) -> u64;

    /// An owned copy for use as a change subject.
    fn to_child(&self) -> Child;
}
