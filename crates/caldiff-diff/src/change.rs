//! Change records: the output handed to a patch applier.

use std::cmp::Ordering;
use std::fmt;

use caldiff_types::QualifiedName;
use serde::Serialize;

use crate::component::ComponentWrapper;
use crate::entity::Entity;
use crate::error::{DiffError, DiffResult};
use crate::leaf::WrappedLeaf;
use crate::sequence::diff_sequences;
use crate::set::EntitySet;

/// Either side of a change: a leaf (property or parameter) or a component.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Child {
    Leaf(WrappedLeaf),
    Composite(ComponentWrapper),
}

impl Child {
    pub fn as_leaf(&self) -> Option<&WrappedLeaf> {
        match self {
            Child::Leaf(leaf) => Some(leaf),
            Child::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&ComponentWrapper> {
        match self {
            Child::Composite(component) => Some(component),
            Child::Leaf(_) => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            Child::Leaf(leaf) => format!("property {}", leaf.name()),
            Child::Composite(component) => format!("component {}", component.name()),
        }
    }

    fn mismatch(&self, other: &Child) -> DiffError {
        DiffError::StructureMismatch {
            left: self.describe(),
            right: other.describe(),
        }
    }
}

impl Entity for Child {
    fn name(&self) -> &QualifiedName {
        match self {
            Child::Leaf(leaf) => leaf.name(),
            Child::Composite(component) => component.name(),
        }
    }

    fn try_cmp(&self, other: &Self) -> DiffResult<Ordering> {
        match (self, other) {
            (Child::Leaf(a), Child::Leaf(b)) => a.try_cmp(b),
            (Child::Composite(a), Child::Composite(b)) => a.try_cmp(b),
            _ => Err(self.mismatch(other)),
        }
    }

    fn same_value(&self, other: &Self) -> DiffResult<bool> {
        match (self, other) {
            (Child::Leaf(a), Child::Leaf(b)) => a.same_value(b),
            (Child::Composite(a), Child::Composite(b)) => a.same_value(b),
            _ => Err(self.mismatch(other)),
        }
    }

    fn diff_pair(&self, other: &Self) -> DiffResult<Change> {
        match (self, other) {
            (Child::Leaf(a), Child::Leaf(b)) => a.diff_pair(b),
            (Child::Composite(a), Child::Composite(b)) => a.diff_pair(b),
            _ => Err(self.mismatch(other)),
        }
    }

    fn content_hash(&self) -> u64 {
        match self {
            Child::Leaf(leaf) => leaf.content_hash(),
            Child::Composite(component) => component.content_hash(),
        }
    }

    fn to_child(&self) -> Child {
        self.clone()
    }
}

/// Diff two sets of mixed subjects. Comparing a leaf against a component
/// anywhere in the walk aborts with [`DiffError::StructureMismatch`].
pub fn diff_children(left: &EntitySet<Child>, right: &EntitySet<Child>) -> DiffResult<Vec<Change>> {
    diff_sequences(left, right)
}

/// What a change record asks the applier to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Add,
    Delete,
    Update,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Add => write!(f, "add"),
            ChangeKind::Delete => write!(f, "delete"),
            ChangeKind::Update => write!(f, "update"),
        }
    }
}

/// One change record.
///
/// - `Add`: `subject` is present on the left only.
/// - `Delete`: `subject` is present on the right only.
/// - `Update`: `subject` is the left element and `previous` the right element
///   it replaces; `nested` holds the parameter or child detail.
#[derive(Clone, Debug, Serialize)]
pub struct Change {
    pub kind: ChangeKind,
    pub subject: Child,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Child>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<Change>,
}

impl Change {
    pub fn add(subject: Child) -> Self {
        Self {
            kind: ChangeKind::Add,
            subject,
            previous: None,
            nested: Vec::new(),
        }
    }

    pub fn delete(subject: Child) -> Self {
        Self {
            kind: ChangeKind::Delete,
            subject,
            previous: None,
            nested: Vec::new(),
        }
    }

    pub fn update(subject: Child, previous: Child, nested: Vec<Change>) -> Self {
        Self {
            kind: ChangeKind::Update,
            subject,
            previous: Some(previous),
            nested,
        }
    }

    /// Name of the changed element.
    pub fn name(&self) -> &QualifiedName {
        self.subject.name()
    }

    pub fn is_add(&self) -> bool {
        self.kind == ChangeKind::Add
    }

    pub fn is_delete(&self) -> bool {
        self.kind == ChangeKind::Delete
    }

    pub fn is_update(&self) -> bool {
        self.kind == ChangeKind::Update
    }

    /// This record plus all nested records, at any depth.
    pub fn count_recursive(&self) -> usize {
        1 + self.nested.iter().map(Change::count_recursive).sum::<usize>()
    }
}

/// The full result of a diff call.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ChangeSet {
    /// Top-level change records in walk order.
    pub changes: Vec<Change>,
}

impl ChangeSet {
    pub fn new(changes: Vec<Change>) -> Self {
        Self { changes }
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of top-level changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of top-level Add records.
    pub fn additions(&self) -> usize {
        self.changes.iter().filter(|c| c.is_add()).count()
    }

    /// Number of top-level Delete records.
    pub fn deletions(&self) -> usize {
        self.changes.iter().filter(|c| c.is_delete()).count()
    }

    /// Number of top-level Update records.
    pub fn updates(&self) -> usize {
        self.changes.iter().filter(|c| c.is_update()).count()
    }

    /// Records at every depth.
    pub fn total_recursive(&self) -> usize {
        self.changes.iter().map(Change::count_recursive).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    pub fn into_inner(self) -> Vec<Change> {
        self.changes
    }
}

impl IntoIterator for ChangeSet {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skip::SkipSet;
    use caldiff_types::{Component, Parameter, Property, Value};

    fn leaf(name: &str, value: &str) -> Child {
        let prop = Property::new(QualifiedName::ical(name), value);
        Child::Leaf(WrappedLeaf::property(&prop, &SkipSet::empty()).unwrap().unwrap())
    }

    fn composite(name: &str) -> Child {
        let comp = Component::new(QualifiedName::ical(name));
        Child::Composite(ComponentWrapper::wrap(&comp, &SkipSet::empty()).unwrap().unwrap())
    }

    #[test]
    fn leaf_against_composite_is_structure_mismatch() {
        let err = leaf("summary", "x").try_cmp(&composite("valarm")).unwrap_err();
        assert_eq!(
            err,
            DiffError::StructureMismatch {
                left: "property {urn:ietf:params:xml:ns:icalendar-2.0}summary".into(),
                right: "component {urn:ietf:params:xml:ns:icalendar-2.0}valarm".into(),
            }
        );
    }

    #[test]
    fn mixed_sets_abort_the_walk() {
        let left = EntitySet::build([leaf("summary", "x")], Some).unwrap();
        let right = EntitySet::build([composite("valarm")], Some).unwrap();
        assert!(matches!(
            diff_children(&left, &right),
            Err(DiffError::StructureMismatch { .. })
        ));
    }

    #[test]
    fn large_mixed_set_fails_to_build() {
        let children = (0..64).map(|i| {
            if i % 2 == 0 {
                leaf(&format!("x-{i:02}"), "v")
            } else {
                composite(&format!("x-{i:02}"))
            }
        });
        assert!(matches!(
            EntitySet::build(children, Some),
            Err(DiffError::StructureMismatch { .. })
        ));
    }

    #[test]
    fn homogeneous_children_diff_normally() {
        let left = EntitySet::build([leaf("location", "a"), leaf("summary", "x")], Some).unwrap();
        let right = EntitySet::build([leaf("summary", "x")], Some).unwrap();
        let changes = diff_children(&left, &right).unwrap();
        assert_eq!(changes.len(), 1);
        assert!(changes[0].is_add());
        assert_eq!(changes[0].name(), &QualifiedName::ical("location"));
    }

    #[test]
    fn change_set_counters() {
        let set = ChangeSet::new(vec![
            Change::add(leaf("a", "1")),
            Change::delete(leaf("b", "1")),
            Change::update(
                leaf("c", "2"),
                leaf("c", "1"),
                vec![Change::add(leaf("p", "x")), Change::delete(leaf("q", "y"))],
            ),
        ]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.additions(), 1);
        assert_eq!(set.deletions(), 1);
        assert_eq!(set.updates(), 1);
        assert_eq!(set.total_recursive(), 5);
    }

    #[test]
    fn serializes_for_an_applier() {
        let prop = Property::new(QualifiedName::local("x-level"), Value::Integer(3))
            .with_parameter(Parameter::new(QualifiedName::local("scale"), "ten"));
        let wrapped = WrappedLeaf::property(&prop, &SkipSet::empty()).unwrap().unwrap();
        let change = Change::add(Child::Leaf(wrapped));

        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "add",
                "subject": {
                    "leaf": {
                        "name": { "namespace": "", "local": "x-level" },
                        "value": { "integer": 3 },
                        "parameters": [
                            {
                                "name": { "namespace": "", "local": "scale" },
                                "value": { "text": "ten" }
                            }
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(ChangeKind::Add.to_string(), "add");
        assert_eq!(ChangeKind::Delete.to_string(), "delete");
        assert_eq!(ChangeKind::Update.to_string(), "update");
    }
}
