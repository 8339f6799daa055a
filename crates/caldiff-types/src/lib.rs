//! Foundation types for caldiff.
//!
//! This crate provides the naming, value, and object-model types shared by the
//! diff engine and its callers. Every other caldiff crate depends on
//! `caldiff-types`.
//!
//! # Key Types
//!
//! - [`QualifiedName`] — (namespace, local-name) pair naming a component, property, or parameter
//! - [`Value`] — Typed property/parameter value following the xCal value types
//! - [`Component`] / [`Property`] / [`Parameter`] — The raw calendar object tree

pub mod error;
pub mod model;
pub mod name;
pub mod value;

pub use error::TypeError;
pub use model::{Component, Parameter, Property};
pub use name::{QualifiedName, ICALENDAR_NS};
pub use value::Value;
