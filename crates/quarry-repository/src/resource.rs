//! Resource locations
//!
//! A `Resource` names a unit of external data the populator loads at
//! startup: a file on disk or inline contents (handy in tests). Contents
//! get a stable SHA256 digest for provenance logging.

use std::path::PathBuf;

use sha2::{Digest, Sha256};

use quarry_core::errors::{QuarryError, Result};

/// External data location consumed during population
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// A file on disk
    File(PathBuf),
    /// Inline contents with a display name
    Inline { name: String, contents: String },
}

impl Resource {
    /// Create a file-backed resource
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Create an inline resource
    pub fn inline(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self::Inline {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Display name of the resource
    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Inline { name, .. } => name.clone(),
        }
    }

    /// Read the full contents of the resource
    ///
    /// # Errors
    ///
    /// Returns `ResourceIo` if a file-backed resource cannot be read.
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Self::File(path) => {
                std::fs::read_to_string(path).map_err(|e| QuarryError::ResourceIo {
                    name: self.name(),
                    reason: e.to_string(),
                })
            }
            Self::Inline { contents, .. } => Ok(contents.clone()),
        }
    }

    /// SHA256 hex digest of the resource contents
    pub fn digest(&self) -> Result<String> {
        let contents = self.read_to_string()?;
        let mut hasher = Sha256::new();
        hasher.update(contents.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
