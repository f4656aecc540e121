//! Property-path information for query binding
//!
//! `PathInfo` wraps a validated [`PropertyPath`] and exposes the accessors
//! a query-binding layer needs, plus reification into a typed
//! [`PathSegment`] chain.

use std::hash::{Hash, Hasher};

use quarry_core::errors::{QuarryError, Result};
use quarry_core::metamodel::{Metamodel, PropertyDescriptor, TypeKey};
use quarry_core::path::PropertyPath;

use crate::resolver::EntityPathResolver;
use crate::segment::PathSegment;

/// Immutable property-path value type
///
/// Equality and hashing are defined solely by the root parent type and the
/// canonical dotted path, independent of any parse artifacts.
#[derive(Debug, Clone)]
pub struct PathInfo {
    path: PropertyPath,
}

impl PathInfo {
    /// Create path information for a dotted path against root type `T`
    ///
    /// # Errors
    ///
    /// Propagates the path validation error when the expression does not
    /// resolve to declared properties.
    pub fn of<T: 'static>(metamodel: &Metamodel, dot_path: &str) -> Result<Self> {
        Self::of_key(metamodel, TypeKey::of::<T>(), dot_path)
    }

    /// Create path information for a dotted path against a type key
    pub fn of_key(metamodel: &Metamodel, root: TypeKey, dot_path: &str) -> Result<Self> {
        Ok(Self {
            path: PropertyPath::parse(metamodel, root, dot_path)?,
        })
    }

    /// Reuse an already-parsed property path
    pub fn from_path(path: PropertyPath) -> Self {
        Self { path }
    }

    /// The wrapped property path
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// Root type the path is rooted at
    pub fn root_parent_type(&self) -> TypeKey {
        self.path.root_type()
    }

    /// Value type of the leaf property
    pub fn leaf_type(&self) -> TypeKey {
        self.path.leaf().value_type()
    }

    /// Type declaring the leaf property
    pub fn leaf_parent_type(&self) -> TypeKey {
        self.path.leaf().owner()
    }

    /// Name of the leaf property
    pub fn leaf_property(&self) -> &str {
        self.path.leaf().name()
    }

    /// Accessor descriptor of the leaf property, if one exists
    pub fn leaf_property_descriptor(&self) -> Option<&PropertyDescriptor> {
        self.path.leaf().descriptor()
    }

    /// Canonical dotted representation
    pub fn to_dot_path(&self) -> &str {
        self.path.to_dot_path()
    }

    /// Reify the property chain into a typed path segment
    ///
    /// Walks from the root: the base for the first segment comes from the
    /// resolver; each further step is obtained from the statically-declared
    /// nested table of the previously constructed segment. A collection-like
    /// base is substituted by its element path before continuing.
    ///
    /// Deterministic for a fixed resolver; safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// - `UnresolvableRoot` if the resolver knows no path for the root type
    /// - `SegmentMissing` if a constructed path lacks an expected segment,
    ///   which indicates the metamodel and the declared path tables disagree
    pub fn reify(&self, resolver: &dyn EntityPathResolver) -> Result<PathSegment> {
        let mut base: Option<PathSegment> = None;

        for segment in self.path.segments() {
            let current = match base.take() {
                Some(b) if b.is_collection() => b.any(),
                Some(b) => b,
                None => resolver.create_path(segment.owner())?,
            };

            let next = current.nested(segment.name()).ok_or_else(|| {
                QuarryError::SegmentMissing {
                    type_name: current.type_key().simple_name().to_string(),
                    segment: segment.name().to_string(),
                    path: self.to_dot_path().to_string(),
                }
            })?;

            base = Some(next);
        }

        // A parsed path always has at least one segment
        base.ok_or(QuarryError::EmptyPath)
    }
}

impl From<PropertyPath> for PathInfo {
    fn from(path: PropertyPath) -> Self {
        Self::from_path(path)
    }
}

impl PartialEq for PathInfo {
    fn eq(&self, other: &Self) -> bool {
        self.root_parent_type() == other.root_parent_type()
            && self.to_dot_path() == other.to_dot_path()
    }
}

impl Eq for PathInfo {}

impl Hash for PathInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root_parent_type().hash(state);
        self.to_dot_path().hash(state);
    }
}

impl std::fmt::Display for PathInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PathInfo({})", self.path)
    }
}
