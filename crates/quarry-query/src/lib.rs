//! Quarry Query - Typed path binding for query construction
//!
//! Provides:
//! - `PathSegment`, a typed navigable path object built from
//!   statically-declared property tables (no runtime reflection)
//! - `EntityPathResolver`, the strategy producing root paths per entity type
//! - `PathInfo`, the property-path value type query binding works with

pub mod path_info;
pub mod resolver;
pub mod segment;

// Re-export key types
pub use path_info::PathInfo;
pub use resolver::{EntityPathResolver, SimpleEntityPathResolver};
pub use segment::{PathSegment, SegmentFn, SegmentKind};
