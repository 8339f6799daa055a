//! The raw calendar object tree handed to the diff engine.
//!
//! These types carry no ordering guarantees: children appear in whatever
//! order the producer (a parser, a store, a test) supplied them. The engine
//! sorts its own wrapped copies.

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::name::QualifiedName;
use crate::value::Value;

/// A property parameter, e.g. `tzid` on `dtstart`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: QualifiedName,
    pub value: Value,
}

impl Parameter {
    pub fn new(name: QualifiedName, value: impl Into<Value>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A named, typed property with its parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: QualifiedName,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl Property {
    pub fn new(name: QualifiedName, value: impl Into<Value>) -> Self {
        Self {
            name,
            value: value.into(),
            parameters: Vec::new(),
        }
    }

    /// Builder: append a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A calendar component (`vcalendar`, `vevent`, `valarm`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: QualifiedName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

impl Component {
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            properties: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Builder: append a property.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Builder: append a sub-component.
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Parse the JSON fixture form of a component tree.
    pub fn from_json(s: &str) -> Result<Self, TypeError> {
        serde_json::from_str(s).map_err(|e| TypeError::Serialization(e.to_string()))
    }

    /// Render the JSON fixture form of a component tree.
    pub fn to_json_pretty(&self) -> Result<String, TypeError> {
        serde_json::to_string_pretty(self).map_err(|e| TypeError::Serialization(e.to_string()))
    }
}
