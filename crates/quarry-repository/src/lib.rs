//! Quarry Repository - Repositories and startup population
//!
//! Provides:
//! - Resource locations with stable content digests
//! - Reader strategies for JSON and YAML resource documents
//! - An in-memory repository registry
//! - The population action and the context-ready startup trigger

pub mod context;
pub mod factory;
pub mod populator;
pub mod reader;
pub mod registry;
pub mod resource;

// Re-export key types
pub use context::{ContextId, ContextReadyEvent};
pub use factory::{JsonReaderFactory, ReaderFactory, RepositoryPopulatorFactory, YamlReaderFactory};
pub use populator::{
    EventPublisher, PopulationReport, RepositoriesPopulatedEvent, RepositoryPopulator,
    ResourceReaderPopulator,
};
pub use reader::{JsonResourceReader, ResourceDocument, ResourceReader, YamlResourceReader};
pub use registry::{Entity, InMemoryRepository, RecordSink, RepositoryRegistry};
pub use resource::Resource;
