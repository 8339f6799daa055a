//! Structural diff engine for calendar objects.
//!
//! Reconciles two versions of a component tree and produces the change
//! records (add, delete, update) that turn the right-hand version into the
//! left-hand one. Every level of the tree is handled the same way: children
//! are wrapped into a sorted [`EntitySet`], and two sets are aligned by a
//! single forward walk with two cursors.
//!
//! # Key Types
//!
//! - [`SkipSet`] -- Names excluded from comparison (`dtstamp`, `prodid`, ...)
//! - [`EntitySet`] / [`Entity`] -- Sorted, immutable wrapper over a child list
//! - [`WrappedLeaf`] -- A property or parameter prepared for comparison
//! - [`ComponentWrapper`] -- A component's property and sub-component sets
//! - [`Change`] / [`ChangeSet`] -- Output records for a patch applier
//! - [`Differ`] -- Shareable entry point holding one skip set

pub mod change;
pub mod component;
pub mod engine;
pub mod entity;
pub mod error;
pub mod leaf;
pub mod ordering;
pub mod sequence;
pub mod set;
pub mod skip;

pub use change::{diff_children, Change, ChangeKind, ChangeSet, Child};
pub use component::ComponentWrapper;
pub use engine::{diff_components, Differ};
pub use entity::Entity;
pub use error::{DiffError, DiffResult};
pub use leaf::WrappedLeaf;
pub use sequence::{diff_sequences, diff_sequences_with_stats, DiffStats};
pub use set::EntitySet;
pub use skip::SkipSet;
