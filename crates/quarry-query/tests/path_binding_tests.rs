// Integration tests for property-path binding
// Covers construction, accessors, equality, and reification against a
// statically-declared path model for Person/Address/Order.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use quarry_core::errors::QuarryError;
use quarry_core::metamodel::{
    EntityDescriptor, Metamodel, Property, PropertyDescriptor, TypeKey,
};
use quarry_query::{
    EntityPathResolver, PathInfo, PathSegment, SegmentFn, SegmentKind, SimpleEntityPathResolver,
};

struct Person;
struct Address;
struct Order;

fn metamodel() -> Metamodel {
    let mut metamodel = Metamodel::new();
    metamodel
        .register(
            EntityDescriptor::new::<Person>()
                .property(
                    Property::of::<String>("name")
                        .with_descriptor(PropertyDescriptor::read_write("name")),
                )
                .unwrap()
                .property(Property::of::<Address>("address"))
                .unwrap()
                .property(Property::collection_of::<Order>("orders"))
                .unwrap(),
        )
        .unwrap();
    metamodel
        .register(
            EntityDescriptor::new::<Address>()
                .property(
                    Property::of::<String>("city")
                        .with_descriptor(PropertyDescriptor::read_write("city")),
                )
                .unwrap(),
        )
        .unwrap();
    metamodel
        .register(
            EntityDescriptor::new::<Order>()
                .property(Property::of::<u64>("total"))
                .unwrap(),
        )
        .unwrap();
    metamodel
}

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

fn resolver() -> SimpleEntityPathResolver {
    let mut resolver = SimpleEntityPathResolver::new();
    resolver.register::<Person>(person_root);
    resolver
}

fn hash_of(info: &PathInfo) -> u64 {
    let mut hasher = DefaultHasher::new();
    info.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_nested_path_accessors() {
    // Given: a Person with nested property address.city: String
    let metamodel = metamodel();

    // When: we resolve the path "address.city"
    let info = PathInfo::of::<Person>(&metamodel, "address.city").unwrap();

    // Then: all accessors report the resolved chain
    assert_eq!(info.root_parent_type(), TypeKey::of::<Person>());
    assert!(info.leaf_type().is::<String>());
    assert_eq!(info.leaf_parent_type(), TypeKey::of::<Address>());
    assert_eq!(info.leaf_property(), "city");
    assert_eq!(info.to_dot_path(), "address.city");

    let descriptor = info.leaf_property_descriptor().unwrap();
    assert_eq!(descriptor.name(), "city");
    assert!(descriptor.is_readable());
}

#[test]
fn test_leaf_descriptor_absent_without_accessor() {
    let metamodel = metamodel();
    let info = PathInfo::of::<Person>(&metamodel, "orders.total").unwrap();
    assert!(info.leaf_property_descriptor().is_none());
}

#[test]
fn test_nonexistent_property_fails_construction() {
    let metamodel = metamodel();
    let result = PathInfo::of::<Person>(&metamodel, "address.street");
    assert!(matches!(result, Err(QuarryError::PropertyNotFound { .. })));
}

#[test]
fn test_reify_single_segment_matches_strategy_output() {
    // Given: a single-segment path and the root produced by the strategy
    let metamodel = metamodel();
    let resolver = resolver();
    let info = PathInfo::of::<Person>(&metamodel, "name").unwrap();

    // When: the path is reified
    let reified = info.reify(&resolver).unwrap();

    // Then: it is the exact segment the strategy's root constructs for "name"
    let expected = person_root().nested("name").unwrap();
    assert_eq!(reified, expected);
    assert_eq!(reified.dot_path(), "name");
    assert_eq!(reified.kind(), SegmentKind::Scalar);
}

#[test]
fn test_reify_nested_path() {
    let metamodel = metamodel();
    let resolver = resolver();
    let info = PathInfo::of::<Person>(&metamodel, "address.city").unwrap();

    let reified = info.reify(&resolver).unwrap();
    assert_eq!(reified.dot_path(), "address.city");
    assert!(reified.type_key().is::<String>());
}

#[test]
fn test_reify_substitutes_collection_element_path() {
    let metamodel = metamodel();
    let resolver = resolver();
    let info = PathInfo::of::<Person>(&metamodel, "orders.total").unwrap();

    let reified = info.reify(&resolver).unwrap();
    assert_eq!(reified.dot_path(), "orders.total");
    assert!(reified.type_key().is::<u64>());
    assert_eq!(reified.kind(), SegmentKind::Scalar);
}

#[test]
fn test_reify_is_deterministic() {
    let metamodel = metamodel();
    let resolver = resolver();
    let info = PathInfo::of::<Person>(&metamodel, "orders.total").unwrap();

    let first = info.reify(&resolver).unwrap();
    let second = info.reify(&resolver).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_reify_unknown_root_errors() {
    // Address has no registered root constructor
    let metamodel = metamodel();
    let resolver = resolver();
    let info = PathInfo::of::<Address>(&metamodel, "city").unwrap();

    let result = info.reify(&resolver);
    assert!(matches!(result, Err(QuarryError::UnresolvableRoot { .. })));
}

#[test]
fn test_reify_reports_metamodel_path_mismatch() {
    // Given: a metamodel declaring a property the path tables do not
    struct Sparse;
    let mut metamodel = Metamodel::new();
    metamodel
        .register(
            EntityDescriptor::new::<Sparse>()
                .property(Property::of::<String>("label"))
                .unwrap(),
        )
        .unwrap();

    fn sparse_root() -> PathSegment {
        // Intentionally missing the "label" entry
        PathSegment::root::<Sparse>(&[])
    }
    let mut resolver = SimpleEntityPathResolver::new();
    resolver.register::<Sparse>(sparse_root);

    let info = PathInfo::of::<Sparse>(&metamodel, "label").unwrap();

    // When/Then: reification surfaces the mismatch
    let result = info.reify(&resolver);
    assert!(matches!(result, Err(QuarryError::SegmentMissing { .. })));
}

mod equality_properties {
    use super::*;
    use proptest::prelude::*;

    const VALID_PATHS: &[&str] = &["name", "address", "address.city", "orders", "orders.total"];

    proptest! {
        #[test]
        fn prop_same_inputs_are_equal(index in 0..VALID_PATHS.len()) {
            let metamodel = metamodel();
            let path = VALID_PATHS[index];

            let a = PathInfo::of::<Person>(&metamodel, path).unwrap();
            let b = PathInfo::of::<Person>(&metamodel, path).unwrap();

            prop_assert_eq!(&a, &b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }

        #[test]
        fn prop_different_paths_are_unequal(
            a_index in 0..VALID_PATHS.len(),
            b_index in 0..VALID_PATHS.len(),
        ) {
            prop_assume!(a_index != b_index);
            let metamodel = metamodel();

            let a = PathInfo::of::<Person>(&metamodel, VALID_PATHS[a_index]).unwrap();
            let b = PathInfo::of::<Person>(&metamodel, VALID_PATHS[b_index]).unwrap();

            prop_assert_ne!(a, b);
        }
    }
}
