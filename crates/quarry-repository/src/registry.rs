//! Repository registry
//!
//! In-memory repositories keyed by entity name, with an object-safe sink
//! interface the populator feeds raw records through.

use std::any::Any;
use std::collections::HashMap;
use std::hash::Hash;

use serde::de::DeserializeOwned;

use quarry_core::errors::{QuarryError, Result};

/// Contract an entity type must satisfy to be stored in a repository
pub trait Entity: DeserializeOwned + 'static {
    /// The unique identifier of this entity
    type Id: Eq + Hash + Clone + std::fmt::Display;

    /// Stable entity name used in resource documents and registry lookups
    fn entity_name() -> &'static str;

    /// Identifier of this instance
    fn id(&self) -> Self::Id;
}

/// HashMap-backed repository for one entity type
///
/// Not thread-safe; population runs synchronously on the delivering thread.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Entity> {
    items: HashMap<T::Id, T>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Save an entity, replacing any previous entity with the same id
    pub fn save(&mut self, entity: T) {
        self.items.insert(entity.id(), entity);
    }

    /// Find an entity by id
    pub fn find_by_id(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    /// Number of stored entities
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Check whether the repository is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over stored entities (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Object-safe population target
///
/// Erases the entity type so the populator can route raw records by
/// entity name alone.
pub trait RecordSink {
    /// Entity name this sink accepts records for
    fn entity_name(&self) -> &'static str;

    /// Deserialize and store one raw record
    fn insert_record(&mut self, record: serde_json::Value) -> Result<()>;

    /// Number of stored records
    fn record_count(&self) -> usize;

    /// Downcast support for typed access
    fn as_any(&self) -> &dyn Any;
}

impl<T: Entity> RecordSink for InMemoryRepository<T> {
    fn entity_name(&self) -> &'static str {
        T::entity_name()
    }

    fn insert_record(&mut self, record: serde_json::Value) -> Result<()> {
        let entity: T =
            serde_json::from_value(record).map_err(|e| QuarryError::Deserialization {
                entity: T::entity_name().to_string(),
                reason: e.to_string(),
            })?;
        self.save(entity);
        Ok(())
    }

    fn record_count(&self) -> usize {
        self.count()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Registry of repositories available for population
#[derive(Default)]
pub struct RepositoryRegistry {
    sinks: HashMap<&'static str, Box<dyn RecordSink>>,
}

impl RepositoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            sinks: HashMap::new(),
        }
    }

    /// Register a repository for its entity type
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRepository` if one is already registered for the
    /// entity name.
    pub fn register<T: Entity>(&mut self, repository: InMemoryRepository<T>) -> Result<()> {
        let name = T::entity_name();
        if self.sinks.contains_key(name) {
            return Err(QuarryError::DuplicateRepository {
                entity: name.to_string(),
            });
        }
        self.sinks.insert(name, Box::new(repository));
        Ok(())
    }

    /// Get the population sink for an entity name
    ///
    /// # Errors
    ///
    /// Returns `RepositoryNotFound` if no repository is registered.
    pub fn sink_mut(&mut self, entity: &str) -> Result<&mut (dyn RecordSink + 'static)> {
        self.sinks
            .get_mut(entity)
            .map(|sink| sink.as_mut())
            .ok_or_else(|| QuarryError::RepositoryNotFound {
                entity: entity.to_string(),
            })
    }

    /// Get typed access to a registered repository
    ///
    /// # Errors
    ///
    /// Returns `RepositoryNotFound` if no repository is registered for `T`.
    pub fn repository<T: Entity>(&self) -> Result<&InMemoryRepository<T>> {
        let name = T::entity_name();
        self.sinks
            .get(name)
            .and_then(|sink| sink.as_any().downcast_ref::<InMemoryRepository<T>>())
            .ok_or_else(|| QuarryError::RepositoryNotFound {
                entity: name.to_string(),
            })
    }

    /// Check whether a repository is registered for the entity name
    pub fn contains(&self, entity: &str) -> bool {
        self.sinks.contains_key(entity)
    }

    /// Number of registered repositories
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl std::fmt::Debug for RepositoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.sinks.keys().copied().collect();
        names.sort_unstable();
        f.debug_struct("RepositoryRegistry")
            .field("entities", &names)
            .finish()
    }
}
