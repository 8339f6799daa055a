//! Ordered entity sets: the sorted, immutable wrapper over a raw child list.

use std::cmp::Ordering;
use std::ops::Index;

use serde::Serialize;

use crate::change::Change;
use crate::entity::Entity;
use crate::error::DiffResult;
use crate::ordering::{compare_sequences, sequence_hash, try_sort};
use crate::sequence::diff_sequences;

/// A fixed-size array of wrapped children sorted by their canonical order.
///
/// Built once from a raw sequence; there are no mutators. Rebuilding means
/// constructing a new set.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct EntitySet<T> {
    children: Box<[T]>,
}

impl<T> Default for EntitySet<T> {
    fn default() -> Self {
        Self {
            children: Box::default(),
        }
    }
}

impl<T: Entity> EntitySet<T> {
    /// An empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap and sort a raw sequence. Elements for which `wrap` returns `None`
    /// are dropped.
    pub fn build<I, F>(raw: I, mut wrap: F) -> DiffResult<Self>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Option<T>,
    {
        Self::try_build(raw, |el| Ok(wrap(el)))
    }

    /// Like [`EntitySet::build`] for wrap functions that can fail. The first
    /// error from `wrap` or from the comparator aborts construction.
    pub fn try_build<I, F>(raw: I, mut wrap: F) -> DiffResult<Self>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> DiffResult<Option<T>>,
    {
        let mut children = Vec::new();
        for el in raw {
            if let Some(child) = wrap(el)? {
                children.push(child);
            }
        }

        let children = try_sort(children, &mut |a: &T, b: &T| a.try_cmp(b))?;
        Ok(Self {
            children: children.into_boxed_slice(),
        })
    }

    /// Number of children after skipping.
    pub fn size(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.children.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.children.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.children
    }

    /// Set-level canonical order: size, then element-wise.
    pub fn try_cmp(&self, other: &Self) -> DiffResult<Ordering> {
        compare_sequences(self.as_slice(), other.as_slice(), |a, b| a.try_cmp(b))
    }

    pub fn try_eq(&self, other: &Self) -> DiffResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }

    pub fn content_hash(&self) -> u64 {
        sequence_hash(self.children.iter().map(Entity::content_hash))
    }

    /// The change records that turn `that` into `self`.
    pub fn diff(&self, that: &Self) -> DiffResult<Vec<Change>> {
        diff_sequences(self, that)
    }
}

impl<T> Index<usize> for EntitySet<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.children[index]
    }
}

impl<'a, T> IntoIterator for &'a EntitySet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
