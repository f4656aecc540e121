//! Resource reader strategies
//!
//! A resource document carries a schema version, the target entity name,
//! and the raw records to insert. Readers parse and validate documents;
//! validation is strict, with no lenient fallback.

use serde::{Deserialize, Serialize};

use quarry_core::errors::{QuarryError, Result};

use crate::resource::Resource;

/// Supported resource document schema version
pub const RESOURCE_SCHEMA_VERSION: u32 = 0;

/// Parsed resource document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDocument {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Name of the entity the records belong to
    pub entity: String,

    /// Raw records, deserialized by the target repository
    pub records: Vec<serde_json::Value>,
}

/// Strategy for reading a resource into a document
pub trait ResourceReader {
    /// Read and validate the document held by the resource
    fn read(&self, resource: &Resource) -> Result<ResourceDocument>;
}

/// Reader for JSON resource documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResourceReader;

impl ResourceReader for JsonResourceReader {
    fn read(&self, resource: &Resource) -> Result<ResourceDocument> {
        let contents = resource.read_to_string()?;
        let document: ResourceDocument =
            serde_json::from_str(&contents).map_err(|e| QuarryError::InvalidResource {
                name: resource.name(),
                reason: format!("JSON parse error: {}", e),
            })?;
        validate_document(resource, &document)?;
        Ok(document)
    }
}

/// Reader for YAML resource documents
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlResourceReader;

impl ResourceReader for YamlResourceReader {
    fn read(&self, resource: &Resource) -> Result<ResourceDocument> {
        let contents = resource.read_to_string()?;
        let document: ResourceDocument =
            serde_yaml::from_str(&contents).map_err(|e| QuarryError::InvalidResource {
                name: resource.name(),
                reason: format!("YAML parse error: {}", e),
            })?;
        validate_document(resource, &document)?;
        Ok(document)
    }
}

/// Validate a parsed document
fn validate_document(resource: &Resource, document: &ResourceDocument) -> Result<()> {
    if document.schema_version != RESOURCE_SCHEMA_VERSION {
        return Err(QuarryError::InvalidResource {
            name: resource.name(),
            reason: format!(
                "Unsupported schema_version: {}. Expected {}",
                document.schema_version, RESOURCE_SCHEMA_VERSION
            ),
        });
    }

    if document.entity.trim().is_empty() {
        return Err(QuarryError::InvalidResource {
            name: resource.name(),
            reason: "Entity name must not be empty".to_string(),
        });
    }

    Ok(())
}
