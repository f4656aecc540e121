//! Type identity for metamodel entries
//!
//! A `TypeKey` names a concrete Rust type. Equality and hashing use the
//! `TypeId` only; the captured type name is carried for diagnostics.

use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// Identity of a Rust type within the metamodel
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Create the key for a concrete type
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Get the underlying TypeId
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Get the fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the unqualified type name (module path stripped)
    pub fn simple_name(&self) -> &'static str {
        // Generic types keep everything after the last path separator of
        // the outer type, which is good enough for diagnostics.
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    /// Check whether this key identifies the given type
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for TypeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    struct Person;
    struct Address;

    fn hash_of(key: &TypeKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_same_type_same_key() {
        let a = TypeKey::of::<Person>();
        let b = TypeKey::of::<Person>();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_different_types_differ() {
        assert_ne!(TypeKey::of::<Person>(), TypeKey::of::<Address>());
    }

    #[test]
    fn test_simple_name_strips_module_path() {
        let key = TypeKey::of::<Person>();
        assert_eq!(key.simple_name(), "Person");
        assert!(key.name().contains("Person"));
    }

    #[test]
    fn test_is_checks_identity() {
        let key = TypeKey::of::<Person>();
        assert!(key.is::<Person>());
        assert!(!key.is::<Address>());
    }
}
