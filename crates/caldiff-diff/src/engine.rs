//! Top-level entry points.

use std::sync::Arc;

use caldiff_types::Component;
use tracing::debug;

use crate::change::{Change, ChangeSet};
use crate::component::ComponentWrapper;
use crate::entity::Entity;
use crate::error::DiffResult;
use crate::skip::SkipSet;

/// Diff two component trees.
///
/// When both roots are the same kind, the result is the property-set diff
/// followed by the sub-component diff. Roots of different kinds have nothing
/// to align: the right root is deleted and the left root added. A root whose
/// kind is skipped counts as absent.
pub fn diff_components(
    left: &Component,
    right: &Component,
    skip: &SkipSet,
) -> DiffResult<ChangeSet> {
    let this = ComponentWrapper::wrap(left, skip)?;
    let that = ComponentWrapper::wrap(right, skip)?;

    let changes = match (this, that) {
        (Some(this), Some(that)) if this.name() == that.name() => this.diff(&that)?,
        (Some(this), Some(that)) => vec![
            Change::delete(that.to_child()),
            Change::add(this.to_child()),
        ],
        (Some(this), None) => vec![Change::add(this.to_child())],
        (None, Some(that)) => vec![Change::delete(that.to_child())],
        (None, None) => Vec::new(),
    };

    let set = ChangeSet::new(changes);
    debug!(
        left_root = %left.name,
        right_root = %right.name,
        changes = set.len(),
        additions = set.additions(),
        deletions = set.deletions(),
        updates = set.updates(),
        total = set.total_recursive(),
        "component diff complete"
    );
    Ok(set)
}

/// A diff entry point bound to one skip set.
///
/// The skip set is built once and shared read-only, so a `Differ` can be
/// cloned into worker threads and used for unrelated document pairs
/// concurrently.
#[derive(Clone, Debug, Default)]
pub struct Differ {
    skip: Arc<SkipSet>,
}

impl Differ {
    pub fn new(skip: SkipSet) -> Self {
        Self {
            skip: Arc::new(skip),
        }
    }

    /// Use an already shared skip set.
    pub fn from_shared(skip: Arc<SkipSet>) -> Self {
        Self { skip }
    }

    pub fn skip_set(&self) -> &SkipSet {
        &self.skip
    }

    /// Diff two component trees with this differ's skip set.
    pub fn diff(&self, left: &Component, right: &Component) -> DiffResult<ChangeSet> {
        diff_components(left, right, &self.skip)
    }
}
