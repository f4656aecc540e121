//! Error taxonomy for Quarry
//!
//! One structured error enum shared by every member crate. Variants carry
//! enough context to diagnose a misconfigured metamodel or resource set
//! without a debugger.

use thiserror::Error;

/// Result type alias using QuarryError
pub type Result<T> = std::result::Result<T, QuarryError>;

/// Comprehensive error taxonomy for Quarry operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuarryError {
    // ===== Property path errors =====
    /// Property path string is empty
    #[error("Property path must not be empty")]
    EmptyPath,

    /// Property path contains an empty segment (e.g. "address..city")
    #[error("Property path '{path}' contains an empty segment")]
    EmptySegment { path: String },

    /// Segment does not name a property on the type being navigated
    #[error("No property '{segment}' found on type {type_name} (path '{path}')")]
    PropertyNotFound {
        type_name: String,
        segment: String,
        path: String,
    },

    /// Intermediate segment resolves to a type with no registered properties
    #[error("Property '{segment}' of type {type_name} is not navigable (path '{path}')")]
    NotNavigable {
        type_name: String,
        segment: String,
        path: String,
    },

    // ===== Metamodel errors =====
    /// Entity type has not been registered in the metamodel
    #[error("Entity type not registered in metamodel: {type_name}")]
    EntityNotRegistered { type_name: String },

    /// Entity type registered twice
    #[error("Entity type already registered: {type_name}")]
    DuplicateEntity { type_name: String },

    /// Property name declared twice on the same entity
    #[error("Duplicate property '{property}' on type {type_name}")]
    DuplicateProperty {
        type_name: String,
        property: String,
    },

    // ===== Reification errors =====
    /// No root path constructor registered for the requested type
    #[error("No root path registered for type {type_name}")]
    UnresolvableRoot { type_name: String },

    /// Constructed path object has no entry for an expected segment.
    /// Indicates the metamodel and the declared path tables disagree.
    #[error("Constructed path for {type_name} has no segment '{segment}' (path '{path}')")]
    SegmentMissing {
        type_name: String,
        segment: String,
        path: String,
    },

    // ===== Population configuration errors =====
    /// Resources were never configured on the factory
    #[error("Resources must be configured before creating a populator")]
    ResourcesNotConfigured,

    /// No reader strategy was supplied
    #[error("No resource reader configured; supply one via a concrete factory variant")]
    ReaderNotConfigured,

    // ===== Registry errors =====
    /// A repository is already registered for the entity name
    #[error("Repository already registered for entity '{entity}'")]
    DuplicateRepository { entity: String },

    /// No repository registered for the entity name
    #[error("No repository registered for entity '{entity}'")]
    RepositoryNotFound { entity: String },

    // ===== Resource errors =====
    /// Resource document failed structural validation
    #[error("Invalid resource '{name}': {reason}")]
    InvalidResource { name: String, reason: String },

    /// Resource contents could not be read
    #[error("Failed to read resource '{name}': {reason}")]
    ResourceIo { name: String, reason: String },

    /// A record could not be deserialized into the target entity
    #[error("Failed to deserialize record for entity '{entity}': {reason}")]
    Deserialization { entity: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = QuarryError::PropertyNotFound {
            type_name: "Person".to_string(),
            segment: "citty".to_string(),
            path: "address.citty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("citty"));
        assert!(msg.contains("Person"));
        assert!(msg.contains("address.citty"));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(QuarryError::EmptyPath, QuarryError::EmptyPath);
        assert_ne!(
            QuarryError::EmptyPath,
            QuarryError::ResourcesNotConfigured
        );
    }
}
