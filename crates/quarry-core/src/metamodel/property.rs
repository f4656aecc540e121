//! Property declarations
//!
//! A `Property` describes one field of an entity: its name, value type,
//! cardinality, and an optional accessor descriptor.

use super::type_key::TypeKey;

/// Cardinality of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Single value
    One,
    /// Collection-like property; the declared value type is the element type
    Many,
}

/// Declarative accessor information for a property
///
/// Stands in for the original framework's bean property descriptor. Absent
/// when the entity exposes no accessor for the property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    name: &'static str,
    readable: bool,
    writable: bool,
}

impl PropertyDescriptor {
    /// Descriptor for a read-only accessor
    pub fn read_only(name: &'static str) -> Self {
        Self {
            name,
            readable: true,
            writable: false,
        }
    }

    /// Descriptor for a read-write accessor
    pub fn read_write(name: &'static str) -> Self {
        Self {
            name,
            readable: true,
            writable: true,
        }
    }

    /// Accessor name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the property can be read through an accessor
    pub fn is_readable(&self) -> bool {
        self.readable
    }

    /// Whether the property can be written through an accessor
    pub fn is_writable(&self) -> bool {
        self.writable
    }
}

/// A declared property of an entity type
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: &'static str,
    value_type: TypeKey,
    cardinality: Cardinality,
    descriptor: Option<PropertyDescriptor>,
}

impl Property {
    /// Declare a single-valued property of type `T`
    pub fn of<T: 'static>(name: &'static str) -> Self {
        Self {
            name,
            value_type: TypeKey::of::<T>(),
            cardinality: Cardinality::One,
            descriptor: None,
        }
    }

    /// Declare a collection-like property with element type `T`
    pub fn collection_of<T: 'static>(name: &'static str) -> Self {
        Self {
            name,
            value_type: TypeKey::of::<T>(),
            cardinality: Cardinality::Many,
            descriptor: None,
        }
    }

    /// Attach an accessor descriptor
    pub fn with_descriptor(mut self, descriptor: PropertyDescriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    /// Property name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared value type (element type for collections)
    pub fn value_type(&self) -> TypeKey {
        self.value_type
    }

    /// Cardinality of the property
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Check whether this is a collection-like property
    pub fn is_collection(&self) -> bool {
        self.cardinality == Cardinality::Many
    }

    /// Accessor descriptor, if one was declared
    pub fn descriptor(&self) -> Option<&PropertyDescriptor> {
        self.descriptor.as_ref()
    }
}
