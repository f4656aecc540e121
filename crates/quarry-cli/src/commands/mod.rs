//! CLI command implementations

pub mod resources;
