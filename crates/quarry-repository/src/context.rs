//! Application-context identity
//!
//! The trigger stores an opaque owner token and compares it against the
//! token carried by context-ready events, so population only runs for the
//! context the trigger is attached to.

use uuid::Uuid;

/// Opaque identity token for an application context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(Uuid);

impl ContextId {
    /// Generate a fresh context identity using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle notification: a context finished initializing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextReadyEvent {
    context_id: ContextId,
}

impl ContextReadyEvent {
    /// Create an event originating from the given context
    pub fn new(context_id: ContextId) -> Self {
        Self { context_id }
    }

    /// Identity of the originating context
    pub fn context_id(&self) -> ContextId {
        self.context_id
    }
}
