//! Dotted property-path parsing
//!
//! Parses expressions like `address.city` against a root entity type and
//! the metamodel. Validation is strict: every segment must resolve to a
//! declared property, and every intermediate segment must be navigable.

use crate::errors::{QuarryError, Result};
use crate::metamodel::{Cardinality, Metamodel, PropertyDescriptor, TypeKey};

/// One resolved step of a property path
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSegment {
    name: String,
    owner: TypeKey,
    value_type: TypeKey,
    cardinality: Cardinality,
    descriptor: Option<PropertyDescriptor>,
}

impl ResolvedSegment {
    /// Property name of this segment
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type declaring this segment's property
    pub fn owner(&self) -> TypeKey {
        self.owner
    }

    /// Value type of the property (element type for collections)
    pub fn value_type(&self) -> TypeKey {
        self.value_type
    }

    /// Cardinality of the property
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Check whether this segment is collection-like
    pub fn is_collection(&self) -> bool {
        self.cardinality == Cardinality::Many
    }

    /// Accessor descriptor of the property, if declared
    pub fn descriptor(&self) -> Option<&PropertyDescriptor> {
        self.descriptor.as_ref()
    }
}

/// A validated, immutable property path from a root entity type to a leaf
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPath {
    root: TypeKey,
    segments: Vec<ResolvedSegment>,
    dot_path: String,
}

impl PropertyPath {
    /// Parse and validate a dotted path against the metamodel
    ///
    /// Collection segments step into their element type before the next
    /// segment is resolved.
    ///
    /// # Errors
    ///
    /// - `EmptyPath` / `EmptySegment` for malformed expressions
    /// - `EntityNotRegistered` if the root type is unknown
    /// - `PropertyNotFound` if a segment names no declared property
    /// - `NotNavigable` if an intermediate segment's value type has no
    ///   registered descriptor
    pub fn parse(metamodel: &Metamodel, root: TypeKey, dot_path: &str) -> Result<Self> {
        if dot_path.trim().is_empty() {
            return Err(QuarryError::EmptyPath);
        }

        let names: Vec<&str> = dot_path.split('.').collect();
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(QuarryError::EmptySegment {
                path: dot_path.to_string(),
            });
        }

        let mut segments = Vec::with_capacity(names.len());
        let mut current = root;

        for (index, name) in names.iter().enumerate() {
            let descriptor = metamodel.entity(current)?;
            let property = descriptor.find_property(name).ok_or_else(|| {
                QuarryError::PropertyNotFound {
                    type_name: current.simple_name().to_string(),
                    segment: name.to_string(),
                    path: dot_path.to_string(),
                }
            })?;

            segments.push(ResolvedSegment {
                name: name.to_string(),
                owner: current,
                value_type: property.value_type(),
                cardinality: property.cardinality(),
                descriptor: property.descriptor().cloned(),
            });

            let is_last = index == names.len() - 1;
            if !is_last {
                // Intermediate steps must land on a registered entity type
                if !metamodel.contains(property.value_type()) {
                    return Err(QuarryError::NotNavigable {
                        type_name: property.value_type().simple_name().to_string(),
                        segment: name.to_string(),
                        path: dot_path.to_string(),
                    });
                }
                current = property.value_type();
            }
        }

        Ok(Self {
            root,
            segments,
            dot_path: names.join("."),
        })
    }

    /// Root entity type the path starts from
    pub fn root_type(&self) -> TypeKey {
        self.root
    }

    /// Resolved segments, root-first (never empty)
    pub fn segments(&self) -> &[ResolvedSegment] {
        &self.segments
    }

    /// Leaf segment of the path
    pub fn leaf(&self) -> &ResolvedSegment {
        // parse() guarantees at least one segment
        &self.segments[self.segments.len() - 1]
    }

    /// Canonical dotted representation
    pub fn to_dot_path(&self) -> &str {
        &self.dot_path
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A parsed path always has at least one segment
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.root.simple_name(), self.dot_path)
    }
}
