//! Entity descriptors
//!
//! An `EntityDescriptor` binds a type key to its ordered property list.

use crate::errors::{QuarryError, Result};

use super::property::Property;
use super::type_key::TypeKey;

/// Declared metadata for one entity type
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    key: TypeKey,
    properties: Vec<Property>,
}

impl EntityDescriptor {
    /// Start a descriptor for type `T` with no properties
    pub fn new<T: 'static>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            properties: Vec::new(),
        }
    }

    /// Declare a property
    ///
    /// # Errors
    ///
    /// Returns `DuplicateProperty` if a property with the same name was
    /// already declared on this entity.
    pub fn property(mut self, property: Property) -> Result<Self> {
        if self.properties.iter().any(|p| p.name() == property.name()) {
            return Err(QuarryError::DuplicateProperty {
                type_name: self.key.simple_name().to_string(),
                property: property.name().to_string(),
            });
        }
        self.properties.push(property);
        Ok(self)
    }

    /// Type key of the described entity
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Declared properties, in declaration order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Look up a property by name
    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metamodel::property::PropertyDescriptor;

    struct Person;
    struct Address;

    #[test]
    fn test_build_descriptor() {
        let descriptor = EntityDescriptor::new::<Person>()
            .property(Property::of::<String>("name"))
            .unwrap()
            .property(Property::of::<Address>("address"))
            .unwrap();

        assert_eq!(descriptor.key(), TypeKey::of::<Person>());
        assert_eq!(descriptor.properties().len(), 2);
        assert!(descriptor.find_property("address").is_some());
        assert!(descriptor.find_property("missing").is_none());
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let result = EntityDescriptor::new::<Person>()
            .property(Property::of::<String>("name"))
            .unwrap()
            .property(
                Property::of::<String>("name")
                    .with_descriptor(PropertyDescriptor::read_only("name")),
            );

        assert!(matches!(
            result,
            Err(QuarryError::DuplicateProperty { .. })
        ));
    }
}
