//! Wrapped leaves: properties and parameters prepared for comparison.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use caldiff_types::{Parameter, Property, QualifiedName, Value};
use serde::Serialize;

use crate::change::{Change, Child};
use crate::entity::Entity;
use crate::error::{DiffError, DiffResult};
use crate::ordering::compare_values;
use crate::set::EntitySet;
use crate::skip::SkipSet;

/// One named value plus its parameters, sorted.
///
/// Properties and parameters share this shape; a parameter simply has an empty
/// parameter set.
#[derive(Clone, Debug, Serialize)]
pub struct WrappedLeaf {
    name: QualifiedName,
    value: Value,
    #[serde(skip_serializing_if = "EntitySet::is_empty")]
    parameters: EntitySet<WrappedLeaf>,
}

impl WrappedLeaf {
    /// Wrap a property, or `None` if its name is skipped. Skipped parameters
    /// are dropped from the wrapped parameter set.
    ///
    /// Fails with [`DiffError::InvalidLeaf`] if the property or one of its
    /// kept parameters carries a value that cannot be ordered.
    pub fn property(property: &Property, skip: &SkipSet) -> DiffResult<Option<Self>> {
        if skip.contains(&property.name) {
            return Ok(None);
        }
        ensure_comparable(&property.name, &property.value)?;
        let parameters =
            EntitySet::try_build(&property.parameters, |p| Self::parameter(p, skip))?;
        Ok(Some(Self {
            name: property.name.clone(),
            value: property.value.clone(),
            parameters,
        }))
    }

    /// Wrap a parameter, or `None` if its name is skipped.
    pub fn parameter(parameter: &Parameter, skip: &SkipSet) -> DiffResult<Option<Self>> {
        if skip.contains(&parameter.name) {
            return Ok(None);
        }
        Self::from_parameter(parameter).map(Some)
    }

    /// Wrap a parameter without consulting a skip set.
    pub fn from_parameter(parameter: &Parameter) -> DiffResult<Self> {
        ensure_comparable(&parameter.name, &parameter.value)?;
        Ok(Self {
            name: parameter.name.clone(),
            value: parameter.value.clone(),
            parameters: EntitySet::empty(),
        })
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn parameters(&self) -> &EntitySet<WrappedLeaf> {
        &self.parameters
    }
}

/// Values that can never be ordered are rejected before any set is sorted.
fn ensure_comparable(name: &QualifiedName, value: &Value) -> DiffResult<()> {
    if value.is_incomparable() {
        return Err(DiffError::InvalidLeaf {
            name: name.clone(),
            reason: format!("{} value is NaN", value.kind()),
        });
    }
    Ok(())
}

impl Entity for WrappedLeaf {
    fn name(&self) -> &QualifiedName {
        &self.name
    }

    fn try_cmp(&self, other: &Self) -> DiffResult<Ordering> {
        match self.name.cmp(&other.name) {
            Ordering::Equal => {}
            ord => return Ok(ord),
        }
        match compare_values(&self.name, &self.value, &other.value)? {
            Ordering::Equal => {}
            ord => return Ok(ord),
        }
        self.parameters.try_cmp(&other.parameters)
    }

    fn same_value(&self, other: &Self) -> DiffResult<bool> {
        Ok(compare_values(&self.name, &self.value, &other.value)? == Ordering::Equal)
    }

    fn diff_pair(&self, other: &Self) -> DiffResult<Change> {
        let nested = self.parameters.diff(&other.parameters)?;
        Ok(Change::update(self.to_child(), other.to_child(), nested))
    }

    fn content_hash(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.name.hash(&mut h);
        self.value.hash_into(&mut h);
        self.parameters.content_hash().hash(&mut h);
        h.finish()
    }

    fn to_child(&self) -> Child {
        Child::Leaf(self.clone())
    }
}
