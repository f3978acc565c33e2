//! Pass List
//!
//! `PassList` holds the passes of one graph and fans out the calls a graph
//! compiler makes to every pass: scene changes, readiness checks and state
//! export.
//!
//! Passes are kept in insertion order. Edge resolution, execution order and
//! transient aliasing belong to the compiler and are not computed here.

use serde_json::{Value, json};

use super::node::RenderPass;
use super::state::PassState;
use crate::errors::{PassError, Result};
use crate::scene::SceneRef;

pub struct PassList {
    passes: Vec<Box<dyn RenderPass>>,
}

impl Default for PassList {
    fn default() -> Self {
        Self::new()
    }
}

impl PassList {
    #[must_use]
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            passes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a pass.
    ///
    /// Names should be unique; lookups by name return the first match.
    pub fn add(&mut self, pass: Box<dyn RenderPass>) -> &mut Self {
        if self.get(pass.name()).is_some() {
            log::warn!("PassList: duplicate pass name '{}'", pass.name());
        }
        self.passes.push(pass);
        self
    }

    /// Appends a pass (chained).
    #[must_use]
    pub fn with_pass(mut self, pass: Box<dyn RenderPass>) -> Self {
        self.add(pass);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn RenderPass> {
        self.passes
            .iter()
            .find(|p| p.name() == name)
            .map(|p| &**p)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn RenderPass + 'static)> {
        self.passes
            .iter_mut()
            .find(|p| p.name() == name)
            .map(|p| &mut **p)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn RenderPass> {
        self.passes.iter().map(|p| &**p)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.passes.clear();
    }

    /// Hands `scene` to every pass, in insertion order.
    pub fn set_scene(&mut self, scene: Option<&SceneRef>) {
        log::debug!(
            "PassList: setting scene {:?} on {} passes",
            scene.map(|s| s.id),
            self.passes.len()
        );
        for pass in &mut self.passes {
            pass.set_scene(scene.cloned());
        }
    }

    /// Names of the passes that are not ready to execute.
    #[must_use]
    pub fn invalid_passes(&self) -> Vec<&str> {
        self.passes
            .iter()
            .filter(|p| !p.is_valid())
            .map(|p| p.name())
            .collect()
    }

    /// Validation error of every pass that is not ready, in insertion order.
    #[must_use]
    pub fn validate_all(&self) -> Vec<PassError> {
        self.passes
            .iter()
            .filter_map(|p| p.validate().err())
            .collect()
    }

    /// Serializes every pass as `{ "name": .., "state": {..} }`.
    pub fn export_json(&self) -> Result<Value> {
        let mut out = Vec::with_capacity(self.passes.len());
        for pass in &self.passes {
            let mut state = PassState::new();
            pass.export_state(&mut state)?;
            out.push(json!({
                "name": pass.name(),
                "state": state.into_value(),
            }));
        }
        Ok(Value::Array(out))
    }
}
