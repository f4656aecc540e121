//! Startup population trigger
//!
//! The factory holds the population configuration and an opaque owner
//! token. When a context-ready event arrives from the owning context, it
//! creates the populator and runs exactly one population pass. Events from
//! other contexts are ignored, as are re-deliveries after completion.

use std::sync::Arc;

use quarry_core::errors::{QuarryError, Result};

use crate::context::{ContextId, ContextReadyEvent};
use crate::populator::{
    EventPublisher, PopulationReport, RepositoryPopulator, ResourceReaderPopulator,
};
use crate::reader::{JsonResourceReader, ResourceReader, YamlResourceReader};
use crate::registry::RepositoryRegistry;
use crate::resource::Resource;

/// Supplies the reader strategy for created populators
///
/// Concrete factory variants implement this; a factory without one cannot
/// create a populator.
pub trait ReaderFactory {
    /// Produce a fresh reader strategy
    fn resource_reader(&self) -> Box<dyn ResourceReader>;
}

/// Reader factory for JSON resource documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReaderFactory;

impl ReaderFactory for JsonReaderFactory {
    fn resource_reader(&self) -> Box<dyn ResourceReader> {
        Box::new(JsonResourceReader)
    }
}

/// Reader factory for YAML resource documents
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlReaderFactory;

impl ReaderFactory for YamlReaderFactory {
    fn resource_reader(&self) -> Box<dyn ResourceReader> {
        Box::new(YamlResourceReader)
    }
}

/// Factory wiring repository population to context startup
pub struct RepositoryPopulatorFactory {
    owner: ContextId,
    resources: Option<Vec<Resource>>,
    reader_factory: Option<Box<dyn ReaderFactory>>,
    publisher: Option<Arc<dyn EventPublisher>>,
    completed: bool,
}

impl RepositoryPopulatorFactory {
    /// Create a factory owned by the given context, with no reader strategy
    pub fn new(owner: ContextId) -> Self {
        Self {
            owner,
            resources: None,
            reader_factory: None,
            publisher: None,
            completed: false,
        }
    }

    /// Concrete variant reading JSON resource documents
    pub fn json(owner: ContextId) -> Self {
        let mut factory = Self::new(owner);
        factory.set_reader_factory(Box::new(JsonReaderFactory));
        factory
    }

    /// Concrete variant reading YAML resource documents
    pub fn yaml(owner: ContextId) -> Self {
        let mut factory = Self::new(owner);
        factory.set_reader_factory(Box::new(YamlReaderFactory));
        factory
    }

    /// Identity of the owning context
    pub fn owner(&self) -> ContextId {
        self.owner
    }

    /// Supply the reader strategy hook
    pub fn set_reader_factory(&mut self, reader_factory: Box<dyn ReaderFactory>) {
        self.reader_factory = Some(reader_factory);
    }

    /// Configure the resources to load, in population order
    pub fn set_resources(&mut self, resources: Vec<Resource>) {
        self.resources = Some(resources);
    }

    /// Attach an event publisher handed to created populators
    pub fn set_event_publisher(&mut self, publisher: Arc<dyn EventPublisher>) {
        self.publisher = Some(publisher);
    }

    /// Whether a population pass has completed for the owning context
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Create the population action from the current configuration
    ///
    /// # Errors
    ///
    /// - `ReaderNotConfigured` if no reader strategy was supplied
    /// - `ResourcesNotConfigured` if resources were never configured
    pub fn create_populator(&self) -> Result<ResourceReaderPopulator> {
        let reader_factory = self
            .reader_factory
            .as_ref()
            .ok_or(QuarryError::ReaderNotConfigured)?;
        let resources = self
            .resources
            .as_ref()
            .ok_or(QuarryError::ResourcesNotConfigured)?;

        let mut populator = ResourceReaderPopulator::new(reader_factory.resource_reader())
            .with_resources(resources.clone());
        if let Some(publisher) = &self.publisher {
            populator.set_event_publisher(publisher.clone());
        }
        Ok(populator)
    }

    /// Handle a context-ready event
    ///
    /// Runs one population pass when the event originates from the owning
    /// context and no pass has completed yet; otherwise the event is
    /// ignored and `Ok(None)` is returned. The completion flag is set only
    /// after a successful pass, so a failed pass may be retried by a
    /// re-delivered event.
    pub fn on_context_ready(
        &mut self,
        event: &ContextReadyEvent,
        registry: &mut RepositoryRegistry,
    ) -> Result<Option<PopulationReport>> {
        if event.context_id() != self.owner {
            tracing::debug!(
                owner = %self.owner,
                event_context = %event.context_id(),
                "ignoring context-ready event from foreign context"
            );
            return Ok(None);
        }

        if self.completed {
            tracing::warn!(
                owner = %self.owner,
                "context-ready event re-delivered after population; ignoring"
            );
            return Ok(None);
        }

        let populator = self.create_populator()?;
        let report = populator.populate(registry)?;
        self.completed = true;

        tracing::info!(
            owner = %self.owner,
            resources = report.resources,
            records = report.records,
            "repositories populated"
        );

        Ok(Some(report))
    }
}

impl std::fmt::Debug for RepositoryPopulatorFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryPopulatorFactory")
            .field("owner", &self.owner)
            .field("resources", &self.resources)
            .field("completed", &self.completed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_populator_requires_reader() {
        let mut factory = RepositoryPopulatorFactory::new(ContextId::new());
        factory.set_resources(Vec::new());

        let result = factory.create_populator();
        assert_eq!(result.unwrap_err(), QuarryError::ReaderNotConfigured);
    }

    #[test]
    fn test_create_populator_requires_resources() {
        let factory = RepositoryPopulatorFactory::yaml(ContextId::new());

        let result = factory.create_populator();
        assert_eq!(result.unwrap_err(), QuarryError::ResourcesNotConfigured);
    }

    #[test]
    fn test_create_populator_copies_resource_set() {
        let resources = vec![
            Resource::inline("a.yaml", "first"),
            Resource::inline("b.yaml", "second"),
        ];
        let mut factory = RepositoryPopulatorFactory::yaml(ContextId::new());
        factory.set_resources(resources.clone());

        let populator = factory.create_populator().unwrap();
        assert_eq!(populator.resources(), resources.as_slice());
    }
}
