//! Canonical ordering and hashing helpers shared by every wrapper kind.
//!
//! Sequences order by size first, then element-wise by each element's own
//! comparator. Sequence hashes are `size + 1` plus the wrapping sum of the
//! element hashes: consistent with equality, not collision-free.

use std::cmp::Ordering;

use caldiff_types::{QualifiedName, Value};

use crate::error::{DiffError, DiffResult};

/// Compare two sequences: shorter first, then the first non-equal element.
pub fn compare_sequences<T, F>(a: &[T], b: &[T], mut cmp: F) -> DiffResult<Ordering>
where
    F: FnMut(&T, &T) -> DiffResult<Ordering>,
{
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        ord => return Ok(ord),
    }
    for (x, y) in a.iter().zip(b) {
        match cmp(x, y)? {
            Ordering::Equal => continue,
            ord => return Ok(ord),
        }
    }
    Ok(Ordering::Equal)
}

/// Stable merge sort with a fallible comparator. The first comparator error
/// is returned as soon as it happens.
pub fn try_sort<T, F>(mut items: Vec<T>, cmp: &mut F) -> DiffResult<Vec<T>>
where
    F: FnMut(&T, &T) -> DiffResult<Ordering>,
{
    if items.len() <= 1 {
        return Ok(items);
    }
    let tail = items.split_off(items.len() / 2);
    let head = try_sort(items, cmp)?;
    let tail = try_sort(tail, cmp)?;

    let mut out = Vec::with_capacity(head.len() + tail.len());
    let mut head = head.into_iter().peekable();
    let mut tail = tail.into_iter().peekable();
    loop {
        let take_tail = match (head.peek(), tail.peek()) {
            (Some(a), Some(b)) => cmp(b, a)? == Ordering::Less,
            _ => break,
        };
        if take_tail {
            out.extend(tail.next());
        } else {
            out.extend(head.next());
        }
    }
    // At most one side still has elements.
    out.extend(head);
    out.extend(tail);
    Ok(out)
}

/// Additive sequence hash.
pub fn sequence_hash<I>(hashes: I) -> u64
where
    I: ExactSizeIterator<Item = u64>,
{
    let seed = (hashes.len() as u64).wrapping_add(1);
    hashes.fold(seed, u64::wrapping_add)
}

/// Order two leaf values, reporting incomparable ones against the leaf name.
pub(crate) fn compare_values(
    name: &QualifiedName,
    a: &Value,
    b: &Value,
) -> DiffResult<Ordering> {
    a.try_compare(b).ok_or_else(|| DiffError::InvalidLeaf {
        name: name.clone(),
        reason: format!("cannot order {} value against {} value", a.kind(), b.kind()),
    })
}
