use serde_json::Value;
use std::collections::HashMap;

/// Trait for custom-field value lookup.
///
/// The host's field storage is consumed as an opaque collaborator: one
/// synchronous call per render, no side effects expected on this side.
pub trait FieldSource: Send + Sync {
    /// Fetch the value stored under `field_name`, if any.
    fn get(&self, field_name: &str) -> Option<Value>;
}

/// In-memory field storage, used for tests and embedding hosts that
/// already hold the field data.
#[derive(Debug, Default)]
pub struct InMemoryFieldSource {
    fields: HashMap<String, Value>,
}

impl InMemoryFieldSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace a field value.
    pub fn set(&mut self, field_name: impl Into<String>, value: Value) {
        self.fields.insert(field_name.into(), value);
    }
}

impl From<HashMap<String, Value>> for InMemoryFieldSource {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl FieldSource for InMemoryFieldSource {
    fn get(&self, field_name: &str) -> Option<Value> {
        self.fields.get(field_name).cloned()
    }
}
