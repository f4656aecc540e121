//! Typed path segments
//!
//! A `PathSegment` is the navigable, typed path object produced for query
//! construction. Navigation uses a statically-declared table mapping
//! property names to path-construction functions, declared once per entity
//! by the typed-query layer.

use quarry_core::metamodel::TypeKey;

/// Constructs a child segment from its parent
pub type SegmentFn = fn(&PathSegment) -> PathSegment;

/// Shape of a path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Entry point produced by a path resolver; carries no property name
    Root,
    /// Terminal value segment
    Scalar,
    /// Navigable entity segment
    Entity,
    /// Collection-like segment; navigation continues through its element path
    Collection,
}

/// A typed, navigable path object
///
/// Equality considers the value type, dotted path, and kind; the nested
/// table is a construction detail and does not participate.
#[derive(Debug, Clone)]
pub struct PathSegment {
    ty: TypeKey,
    dot_path: String,
    kind: SegmentKind,
    nested: &'static [(&'static str, SegmentFn)],
}

impl PathSegment {
    /// Create the root path for entity type `T`
    pub fn root<T: 'static>(nested: &'static [(&'static str, SegmentFn)]) -> Self {
        Self {
            ty: TypeKey::of::<T>(),
            dot_path: String::new(),
            kind: SegmentKind::Root,
            nested,
        }
    }

    /// Create a terminal segment of value type `T` under `parent`
    pub fn scalar<T: 'static>(parent: &PathSegment, name: &str) -> Self {
        Self {
            ty: TypeKey::of::<T>(),
            dot_path: parent.extend(name),
            kind: SegmentKind::Scalar,
            nested: &[],
        }
    }

    /// Create a navigable entity segment of type `T` under `parent`
    pub fn entity<T: 'static>(
        parent: &PathSegment,
        name: &str,
        nested: &'static [(&'static str, SegmentFn)],
    ) -> Self {
        Self {
            ty: TypeKey::of::<T>(),
            dot_path: parent.extend(name),
            kind: SegmentKind::Entity,
            nested,
        }
    }

    /// Create a collection segment with element type `T` under `parent`
    ///
    /// `element_nested` is the nested table of the element type; it becomes
    /// reachable through [`PathSegment::any`].
    pub fn collection<T: 'static>(
        parent: &PathSegment,
        name: &str,
        element_nested: &'static [(&'static str, SegmentFn)],
    ) -> Self {
        Self {
            ty: TypeKey::of::<T>(),
            dot_path: parent.extend(name),
            kind: SegmentKind::Collection,
            nested: element_nested,
        }
    }

    fn extend(&self, name: &str) -> String {
        if self.dot_path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.dot_path, name)
        }
    }

    /// Look up and construct the child segment for a property name
    ///
    /// Returns `None` when the declared table has no entry for the name,
    /// which signals a mismatch between metamodel and path tables.
    pub fn nested(&self, name: &str) -> Option<PathSegment> {
        self.nested
            .iter()
            .find(|(declared, _)| *declared == name)
            .map(|(_, construct)| construct(self))
    }

    /// Element path of a collection segment
    ///
    /// Keeps the dotted path and element type, exposing the element's
    /// nested table for further navigation. Meaningful only on
    /// [`SegmentKind::Collection`] segments; on any other kind it returns
    /// an identical segment.
    pub fn any(&self) -> PathSegment {
        match self.kind {
            SegmentKind::Collection => Self {
                ty: self.ty,
                dot_path: self.dot_path.clone(),
                kind: SegmentKind::Entity,
                nested: self.nested,
            },
            _ => self.clone(),
        }
    }

    /// Value type of this segment (element type for collections)
    pub fn type_key(&self) -> TypeKey {
        self.ty
    }

    /// Dotted path from the root ("" for root segments)
    pub fn dot_path(&self) -> &str {
        &self.dot_path
    }

    /// Kind of this segment
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Check whether this segment is collection-like
    pub fn is_collection(&self) -> bool {
        self.kind == SegmentKind::Collection
    }
}

impl PartialEq for PathSegment {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.dot_path == other.dot_path && self.kind == other.kind
    }
}

impl Eq for PathSegment {}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.dot_path.is_empty() {
            write!(f, "{}", self.ty)
        } else {
            write!(f, "{}.{}", self.ty, self.dot_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person;
    struct Address;
    struct Order;

    static PERSON_PATHS: &[(&str, SegmentFn)] = &[
        ("name", person_name),
        ("address", person_address),
        ("orders", person_orders),
    ];
    static ADDRESS_PATHS: &[(&str, SegmentFn)] = &[("city", address_city)];
    static ORDER_PATHS: &[(&str, SegmentFn)] = &[("total", order_total)];

    fn person_name(parent: &PathSegment) -> PathSegment {
        PathSegment::scalar::<String>(parent, "name")
    }
    fn person_address(parent: &PathSegment) -> PathSegment {
        PathSegment::entity::<Address>(parent, "address", ADDRESS_PATHS)
    }
    fn person_orders(parent: &PathSegment) -> PathSegment {
        PathSegment::collection::<Order>(parent, "orders", ORDER_PATHS)
    }
    fn address_city(parent: &PathSegment) -> PathSegment {
        PathSegment::scalar::<String>(parent, "city")
    }
    fn order_total(parent: &PathSegment) -> PathSegment {
        PathSegment::scalar::<u64>(parent, "total")
    }

    fn person_root() -> PathSegment {
        PathSegment::root::<Person>(PERSON_PATHS)
    }

    #[test]
    fn test_root_segment() {
        let root = person_root();
        assert_eq!(root.kind(), SegmentKind::Root);
        assert_eq!(root.dot_path(), "");
        assert!(root.type_key().is::<Person>());
    }

    #[test]
    fn test_nested_navigation_builds_dot_path() {
        let root = person_root();
        let address = root.nested("address").unwrap();
        assert_eq!(address.kind(), SegmentKind::Entity);
        assert_eq!(address.dot_path(), "address");

        let city = address.nested("city").unwrap();
        assert_eq!(city.kind(), SegmentKind::Scalar);
        assert_eq!(city.dot_path(), "address.city");
        assert!(city.type_key().is::<String>());
    }

    #[test]
    fn test_unknown_name_returns_none() {
        let root = person_root();
        assert!(root.nested("street").is_none());
    }

    #[test]
    fn test_scalar_has_no_children() {
        let root = person_root();
        let name = root.nested("name").unwrap();
        assert!(name.nested("anything").is_none());
    }

    #[test]
    fn test_collection_any_exposes_element_paths() {
        let root = person_root();
        let orders = root.nested("orders").unwrap();
        assert!(orders.is_collection());
        // The collection itself does not navigate further
        let element = orders.any();
        assert_eq!(element.kind(), SegmentKind::Entity);
        assert_eq!(element.dot_path(), "orders");

        let total = element.nested("total").unwrap();
        assert_eq!(total.dot_path(), "orders.total");
        assert!(total.type_key().is::<u64>());
    }

    #[test]
    fn test_equality_ignores_nested_tables() {
        let a = person_root().nested("address").unwrap();
        let b = person_root().nested("address").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, person_root().nested("name").unwrap());
    }

    #[test]
    fn test_display() {
        let city = person_root()
            .nested("address")
            .unwrap()
            .nested("city")
            .unwrap();
        assert_eq!(city.to_string(), "String.address.city");
        assert_eq!(person_root().to_string(), "Person");
    }
}
