//! Declarative entity metamodel
//!
//! Entity types and their properties are declared explicitly and registered
//! in a [`Metamodel`]. Property paths are validated against this registry
//! instead of being discovered through runtime reflection.

pub mod entity;
pub mod property;
pub mod registry;
pub mod type_key;

pub use entity::EntityDescriptor;
pub use property::{Cardinality, Property, PropertyDescriptor};
pub use registry::Metamodel;
pub use type_key::TypeKey;
