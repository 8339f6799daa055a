//! Component wrappers: a property set plus a sub-component set, diffed
//! recursively with the same sequence walk at every level.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use caldiff_types::{Component, QualifiedName, Value};
use serde::Serialize;

use crate::change::{Change, Child};
use crate::entity::Entity;
use crate::error::DiffResult;
use crate::leaf::WrappedLeaf;
use crate::ordering::compare_values;
use crate::set::EntitySet;
use crate::skip::SkipSet;

/// Properties that identify a component instance across versions.
const IDENTITY_PROPERTIES: [&str; 2] = ["uid", "recurrence-id"];

/// A wrapped component: its properties and its sub-components, each sorted.
///
/// Properties are never matched against sub-components; the two sets are
/// diffed independently.
#[derive(Clone, Debug, Serialize)]
pub struct ComponentWrapper {
    name: QualifiedName,
    #[serde(skip_serializing_if = "EntitySet::is_empty")]
    properties: EntitySet<WrappedLeaf>,
    #[serde(skip_serializing_if = "EntitySet::is_empty")]
    components: EntitySet<ComponentWrapper>,
}

impl ComponentWrapper {
    /// Wrap a component tree, or `None` if its kind is skipped. Skipped
    /// properties, parameters, and sub-components are dropped at every level.
    pub fn wrap(component: &Component, skip: &SkipSet) -> DiffResult<Option<Self>> {
        if skip.contains(&component.name) {
            return Ok(None);
        }
        let properties =
            EntitySet::try_build(&component.properties, |p| WrappedLeaf::property(p, skip))?;
        let components =
            EntitySet::try_build(&component.components, |c| Self::wrap(c, skip))?;
        Ok(Some(Self {
            name: component.name.clone(),
            properties,
            components,
        }))
    }

    pub fn properties(&self) -> &EntitySet<WrappedLeaf> {
        &self.properties
    }

    pub fn components(&self) -> &EntitySet<ComponentWrapper> {
        &self.components
    }

    /// Value of the first property with this local name in the iCalendar
    /// namespace, if present.
    pub fn property_value(&self, local: &str) -> Option<&Value> {
        let name = QualifiedName::ical(local);
        self.properties
            .iter()
            .find(|p| p.name() == &name)
            .map(WrappedLeaf::value)
    }

    /// The change records that turn `that` into `self`: property changes
    /// first, then sub-component changes.
    pub fn diff(&self, that: &Self) -> DiffResult<Vec<Change>> {
        let mut changes = self.properties.diff(&that.properties)?;
        changes.extend(self.components.diff(&that.components)?);
        Ok(changes)
    }
}

impl Entity for ComponentWrapper {
    fn name(&self) -> &QualifiedName {
        &self.name
    }

    fn try_cmp(&self, other: &Self) -> DiffResult<Ordering> {
        match self.name.cmp(&other.name) {
            Ordering::Equal => {}
            ord => return Ok(ord),
        }
        match self.properties.try_cmp(&other.properties)? {
            Ordering::Equal => {}
            ord => return Ok(ord),
        }
        self.components.try_cmp(&other.components)
    }

    /// Two components carry the same value when their identifying properties
    /// agree. Components without any identifying property (`valarm`,
    /// `standard`, ...) are always the same value.
    fn same_value(&self, other: &Self) -> DiffResult<bool> {
        for local in IDENTITY_PROPERTIES {
            match (self.property_value(local), other.property_value(local)) {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    if compare_values(&QualifiedName::ical(local), a, b)? != Ordering::Equal {
                        return Ok(false);
                    }
                }
                _ => return Ok(false),
            }
        }
        Ok(true)
    }

    fn diff_pair(&self, other: &Self) -> DiffResult<Change> {
        let nested = self.diff(other)?;
        Ok(Change::update(self.to_child(), other.to_child(), nested))
    }

    fn content_hash(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.name.hash(&mut h);
        self.properties.content_hash().hash(&mut h);
        self.components.content_hash().hash(&mut h);
        h.finish()
    }

    fn to_child(&self) -> Child {
        Child::Composite(self.clone())
    }
}
