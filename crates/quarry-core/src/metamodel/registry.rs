//! Metamodel registry
//!
//! Holds the entity descriptors known to the framework. Built once at
//! startup and read-only afterwards.

use std::collections::HashMap;

use crate::errors::{QuarryError, Result};

use super::entity::EntityDescriptor;
use super::type_key::TypeKey;

/// Registry of entity descriptors keyed by type
#[derive(Debug, Clone, Default)]
pub struct Metamodel {
    entities: HashMap<TypeKey, EntityDescriptor>,
}

impl Metamodel {
    /// Create an empty metamodel
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEntity` if a descriptor for the same type was
    /// already registered.
    pub fn register(&mut self, descriptor: EntityDescriptor) -> Result<()> {
        let key = descriptor.key();
        if self.entities.contains_key(&key) {
            return Err(QuarryError::DuplicateEntity {
                type_name: key.simple_name().to_string(),
            });
        }
        tracing::debug!(
            entity = %key,
            properties = descriptor.properties().len(),
            "registered entity descriptor"
        );
        self.entities.insert(key, descriptor);
        Ok(())
    }

    /// Get the descriptor for a type key
    ///
    /// # Errors
    ///
    /// Returns `EntityNotRegistered` if the type is unknown.
    pub fn entity(&self, key: TypeKey) -> Result<&EntityDescriptor> {
        self.entities
            .get(&key)
            .ok_or_else(|| QuarryError::EntityNotRegistered {
                type_name: key.simple_name().to_string(),
            })
    }

    /// Get the descriptor for a type key, if registered
    pub fn find_entity(&self, key: TypeKey) -> Option<&EntityDescriptor> {
        self.entities.get(&key)
    }

    /// Check whether a type is registered
    pub fn contains(&self, key: TypeKey) -> bool {
        self.entities.contains_key(&key)
    }

    /// Number of registered entity types
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check whether the metamodel is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metamodel::property::Property;

    struct Person;
    struct Address;

    #[test]
    fn test_register_and_lookup() {
        let mut metamodel = Metamodel::new();
        metamodel
            .register(
                EntityDescriptor::new::<Person>()
                    .property(Property::of::<String>("name"))
                    .unwrap(),
            )
            .unwrap();

        assert_eq!(metamodel.len(), 1);
        assert!(metamodel.contains(TypeKey::of::<Person>()));
        assert!(!metamodel.contains(TypeKey::of::<Address>()));

        let descriptor = metamodel.entity(TypeKey::of::<Person>()).unwrap();
        assert!(descriptor.find_property("name").is_some());
    }

    #[test]
    fn test_unknown_entity_errors() {
        let metamodel = Metamodel::new();
        let result = metamodel.entity(TypeKey::of::<Person>());
        assert!(matches!(
            result,
            Err(QuarryError::EntityNotRegistered { .. })
        ));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut metamodel = Metamodel::new();
        metamodel
            .register(EntityDescriptor::new::<Person>())
            .unwrap();
        let result = metamodel.register(EntityDescriptor::new::<Person>());
        assert!(matches!(result, Err(QuarryError::DuplicateEntity { .. })));
    }
}
