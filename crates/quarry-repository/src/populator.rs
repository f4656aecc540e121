//! Population action
//!
//! A populator loads records from configured resources into the repository
//! registry, in configured order, logging each resource's digest. A
//! successful pass can notify an event publisher.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use quarry_core::errors::Result;

use crate::reader::ResourceReader;
use crate::registry::RepositoryRegistry;
use crate::resource::Resource;

/// Outcome of one population pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationReport {
    /// Number of resources processed
    pub resources: usize,
    /// Number of records inserted
    pub records: usize,
}

/// Notification published after a successful population pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoriesPopulatedEvent {
    /// Number of resources processed
    pub resources: usize,
    /// Number of records inserted
    pub records: usize,
    /// When the pass finished
    pub at: DateTime<Utc>,
}

/// Receiver for population notifications
pub trait EventPublisher {
    /// Publish a populated event
    fn publish(&self, event: &RepositoriesPopulatedEvent);
}

/// A unit of work loading initial data into repositories
pub trait RepositoryPopulator {
    /// Run one population pass against the registry
    fn populate(&self, registry: &mut RepositoryRegistry) -> Result<PopulationReport>;
}

/// Populator reading resources through a pluggable reader strategy
pub struct ResourceReaderPopulator {
    reader: Box<dyn ResourceReader>,
    resources: Vec<Resource>,
    publisher: Option<Arc<dyn EventPublisher>>,
}

impl ResourceReaderPopulator {
    /// Create a populator with the given reader strategy and no resources
    pub fn new(reader: Box<dyn ResourceReader>) -> Self {
        Self {
            reader,
            resources: Vec::new(),
            publisher: None,
        }
    }

    /// Configure the resources to load, in population order
    pub fn set_resources(&mut self, resources: Vec<Resource>) {
        self.resources = resources;
    }

    /// Builder-style resource configuration
    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.set_resources(resources);
        self
    }

    /// Configured resources, in population order
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Attach an event publisher notified after successful passes
    pub fn set_event_publisher(&mut self, publisher: Arc<dyn EventPublisher>) {
        self.publisher = Some(publisher);
    }
}

impl RepositoryPopulator for ResourceReaderPopulator {
    fn populate(&self, registry: &mut RepositoryRegistry) -> Result<PopulationReport> {
        let mut records = 0;

        for resource in &self.resources {
            let digest = resource.digest()?;
            tracing::info!(
                resource = %resource.name(),
                digest = %digest,
                "populating from resource"
            );

            let document = self.reader.read(resource)?;
            let sink = registry.sink_mut(&document.entity)?;
            for record in document.records {
                sink.insert_record(record)?;
                records += 1;
            }
        }

        let report = PopulationReport {
            resources: self.resources.len(),
            records,
        };

        if let Some(publisher) = &self.publisher {
            publisher.publish(&RepositoriesPopulatedEvent {
                resources: report.resources,
                records: report.records,
                at: Utc::now(),
            });
        }

        Ok(report)
    }
}

impl std::fmt::Debug for ResourceReaderPopulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceReaderPopulator")
            .field("resources", &self.resources)
            .finish()
    }
}
