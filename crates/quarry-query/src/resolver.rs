//! Entity path resolution strategy
//!
//! The resolver produces the root path object to begin navigation from.
//! Root constructors are registered per entity type.

use std::collections::HashMap;

use quarry_core::errors::{QuarryError, Result};
use quarry_core::metamodel::TypeKey;

use crate::segment::PathSegment;

/// Strategy producing a root path for an entity type
pub trait EntityPathResolver {
    /// Create the root path object for the given entity type
    ///
    /// # Errors
    ///
    /// Returns `UnresolvableRoot` if no path is known for the type.
    fn create_path(&self, root: TypeKey) -> Result<PathSegment>;
}

/// Registry-backed resolver mapping entity types to root constructors
#[derive(Debug, Clone, Default)]
pub struct SimpleEntityPathResolver {
    roots: HashMap<TypeKey, fn() -> PathSegment>,
}

impl SimpleEntityPathResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self {
            roots: HashMap::new(),
        }
    }

    /// Register the root constructor for entity type `T`
    ///
    /// Registering the same type again replaces the previous constructor.
    pub fn register<T: 'static>(&mut self, constructor: fn() -> PathSegment) {
        self.roots.insert(TypeKey::of::<T>(), constructor);
    }

    /// Number of registered root types
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Check whether no roots are registered
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl EntityPathResolver for SimpleEntityPathResolver {
    fn create_path(&self, root: TypeKey) -> Result<PathSegment> {
        let constructor =
            self.roots
                .get(&root)
                .ok_or_else(|| QuarryError::UnresolvableRoot {
                    type_name: root.simple_name().to_string(),
                })?;
        Ok(constructor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmentKind;

    struct Person;
    struct Address;

    fn person_root() -> PathSegment {
        PathSegment::root::<Person>(&[])
    }

    #[test]
    fn test_create_path_for_registered_root() {
        let mut resolver = SimpleEntityPathResolver::new();
        resolver.register::<Person>(person_root);

        let root = resolver.create_path(TypeKey::of::<Person>()).unwrap();
        assert_eq!(root.kind(), SegmentKind::Root);
        assert!(root.type_key().is::<Person>());
    }

    #[test]
    fn test_unregistered_root_errors() {
        let resolver = SimpleEntityPathResolver::new();
        let result = resolver.create_path(TypeKey::of::<Address>());
        assert!(matches!(
            result,
            Err(QuarryError::UnresolvableRoot { .. })
        ));
    }
}
