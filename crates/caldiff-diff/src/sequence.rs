//! The sequence alignment walk.
//!
//! Two cursors step forward through two sets sorted by the same canonical
//! order. Equal elements are matched silently; elements present on one side
//! only become Add (left) or Delete (right) records; same-named elements that
//! differ become an Update, or a Delete/Add replace pair when both cursors have
//! room left and the values themselves differ.
//!
//! This is a linear, single-pass alignment and not a minimum edit script. A
//! property whose value changed away from the last position is always reported
//! as a replace pair, never as a move.
//!
//! # Invariants
//!
//! - Every iteration advances at least one cursor, so the walk takes at most
//!   `left.size() + right.size()` comparison steps.
//! - Every element of either side is either matched or named by exactly one
//!   record.

use std::cmp::Ordering;

use tracing::trace;

use crate::change::Change;
use crate::entity::Entity;
use crate::error::DiffResult;
use crate::set::EntitySet;

/// Counters collected during one walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Loop iterations that compared a left and a right element.
    pub steps: usize,
    /// Pairs matched silently.
    pub matched: usize,
    pub added: usize,
    pub deleted: usize,
    /// Pairs reported as one Update record.
    pub updated: usize,
}

impl DiffStats {
    /// Elements accounted for, counting both sides of matched and updated pairs.
    pub fn consumed(&self) -> usize {
        2 * (self.matched + self.updated) + self.added + self.deleted
    }
}

/// Align `left` against `right` and return the change records.
pub fn diff_sequences<T: Entity>(
    left: &EntitySet<T>,
    right: &EntitySet<T>,
) -> DiffResult<Vec<Change>> {
    diff_sequences_with_stats(left, right).map(|(changes, _)| changes)
}

/// [`diff_sequences`], also returning the walk counters.
pub fn diff_sequences_with_stats<T: Entity>(
    left: &EntitySet<T>,
    right: &EntitySet<T>,
) -> DiffResult<(Vec<Change>, DiffStats)> {
    let this = left.as_slice();
    let that = right.as_slice();

    let mut changes = Vec::new();
    let mut stats = DiffStats::default();
    let mut i = 0;
    let mut j = 0;

    while i < this.len() && j < that.len() {
        stats.steps += 1;
        let this_one = &this[i];
        let that_one = &that[j];

        let ord = this_one.try_cmp(that_one)?;
        if ord == Ordering::Equal {
            trace!(i, j, name = %this_one.name(), "matched");
            stats.matched += 1;
            i += 1;
            j += 1;
            continue;
        }

        if this_one.compare_names(that_one) == Ordering::Equal {
            let last_on_either_side = i + 1 == this.len() || j + 1 == that.len();

            if last_on_either_side || this_one.same_value(that_one)? {
                trace!(i, j, name = %this_one.name(), last_on_either_side, "update");
                changes.push(this_one.diff_pair(that_one)?);
                stats.updated += 1;
            } else {
                trace!(i, j, name = %this_one.name(), "replace");
                changes.push(Change::delete(that_one.to_child()));
                changes.push(Change::add(this_one.to_child()));
                stats.deleted += 1;
                stats.added += 1;
            }
            i += 1;
            j += 1;
        } else if ord == Ordering::Less {
            trace!(i, j, name = %this_one.name(), "add");
            changes.push(Change::add(this_one.to_child()));
            stats.added += 1;
            i += 1;
        } else {
            trace!(i, j, name = %that_one.name(), "delete");
            changes.push(Change::delete(that_one.to_child()));
            stats.deleted += 1;
            j += 1;
        }
    }

    // Left-overs on the left were never seen on the right.
    for this_one in &this[i..] {
        changes.push(Change::add(this_one.to_child()));
        stats.added += 1;
    }

    for that_one in &that[j..] {
        changes.push(Change::delete(that_one.to_child()));
        stats.deleted += 1;
    }

    Ok((changes, stats))
}
