//! Pass state export.
//!
//! Passes opt into graph serialization by writing key/value pairs into a
//! [`PassState`] from [`RenderPass::export_state`]. No schema is imposed.
//!
//! [`RenderPass::export_state`]: super::RenderPass::export_state

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassState {
    values: Map<String, Value>,
}

impl PassState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: impl Into<String>, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.values.insert(key.into(), value);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_key() {
        let mut state = PassState::new();
        state.set("radius", &2.0_f32).unwrap();
        state.set("radius", &4.0_f32).unwrap();
        assert_eq!(state.len(), 1);
        assert_eq!(state.get("radius"), Some(&Value::from(4.0)));
    }

    #[test]
    fn into_value_is_object() {
        let mut state = PassState::new();
        state.set("enabled", &true).unwrap();
        assert_eq!(state.into_value(), serde_json::json!({ "enabled": true }));
    }
}
