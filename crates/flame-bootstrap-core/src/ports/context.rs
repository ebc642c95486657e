//! Pipeline context serialization.
//!
//! The toolkit context is opaque here; it only needs to survive the trip to
//! the engine running inside Flame, which reads it back from
//! `TOOLKIT_CONTEXT`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BootstrapError, BootstrapResult};

/// Opaque toolkit context (project, entity, step, task, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineContext(pub Value);

impl PipelineContext {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a context from its JSON text.
    pub fn from_json(text: &str) -> BootstrapResult<Self> {
        serde_json::from_str(text)
            .map(Self)
            .map_err(|e| BootstrapError::ContextSerialization(e.to_string()))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Turns a context into the string stored in `TOOLKIT_CONTEXT`.
#[cfg_attr(test, mockall::automock)]
pub trait ContextSerializer {
    fn serialize(&self, context: &PipelineContext) -> BootstrapResult<String>;
}

/// Compact JSON serialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonContextSerializer;

impl ContextSerializer for JsonContextSerializer {
    fn serialize(&self, context: &PipelineContext) -> BootstrapResult<String> {
        serde_json::to_string(context.as_value())
            .map_err(|e| BootstrapError::ContextSerialization(e.to_string()))
    }
}
