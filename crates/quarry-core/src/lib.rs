//! Quarry Core - Metamodel and property-path kernel
//!
//! This crate provides the foundational pieces of the Quarry repository
//! framework:
//! - A declarative entity metamodel (no runtime reflection)
//! - Dotted property-path parsing and validation against the metamodel
//! - The shared error taxonomy
//! - The logging facility

pub mod errors;
pub mod logging_facility;
pub mod metamodel;
pub mod path;

// Re-export commonly used types
pub use errors::{QuarryError, Result};
pub use metamodel::{
    Cardinality, EntityDescriptor, Metamodel, Property, PropertyDescriptor, TypeKey,
};
pub use path::{PropertyPath, ResolvedSegment};
