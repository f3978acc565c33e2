//! Shared pass state.
//!
//! [`PassCore`] is the base every concrete pass embeds: its name, the scene it
//! currently holds, and the input/output binding tables. The default methods
//! of [`RenderPass`](super::RenderPass) drive it; concrete passes rarely call
//! it directly except for [`PassCore::notify_io_changed`].

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::errors::{PassError, Result, SlotDirection, SlotMismatch};
use crate::graph::slot::{PassIoDeclaration, SlotDescriptor};
use crate::resource::GpuResource;
use crate::scene::SceneRef;
use crate::settings::BindingSettings;

/// Invoked with the pass name after the pass's IO declaration changed.
pub type IoChangedCallback = Box<dyn FnMut(&str)>;

type BindingTable = FxHashMap<String, Arc<GpuResource>>;

pub struct PassCore {
    name: String,
    scene: Option<SceneRef>,
    inputs: BindingTable,
    outputs: BindingTable,
    settings: BindingSettings,
    on_io_changed: Option<IoChangedCallback>,
}

impl PassCore {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scene: None,
            inputs: FxHashMap::default(),
            outputs: FxHashMap::default(),
            settings: BindingSettings::default(),
            on_io_changed: None,
        }
    }

    /// Initial scene. Does not fire `on_scene_changed`: the owning pass is
    /// still being constructed.
    #[must_use]
    pub fn with_scene(mut self, scene: Option<SceneRef>) -> Self {
        self.scene = scene;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: BindingSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_change_callback(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_io_changed = Some(Box::new(callback));
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &BindingSettings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub fn scene(&self) -> Option<&SceneRef> {
        self.scene.as_ref()
    }

    /// Swaps in a new scene and returns the previous one.
    pub fn replace_scene(&mut self, scene: Option<SceneRef>) -> Option<SceneRef> {
        std::mem::replace(&mut self.scene, scene)
    }

    // ── Bindings ───────────────────────────────────────────────────────────

    /// Binds `resource` to the slot `name` of `decl`.
    ///
    /// All-or-nothing: on error the table is untouched.
    pub fn bind(
        &mut self,
        direction: SlotDirection,
        decl: &PassIoDeclaration,
        name: &str,
        resource: &Arc<GpuResource>,
    ) -> Result<()> {
        let slot = match direction {
            SlotDirection::Input => decl.input(name),
            SlotDirection::Output => decl.output(name),
        };

        let checked = slot
            .ok_or(SlotMismatch::UnknownSlot)
            .and_then(|slot| slot.check(resource.desc(), &self.settings));

        if let Err(reason) = checked {
            return Err(PassError::BindingRejected {
                pass: self.name.clone(),
                slot: name.to_owned(),
                direction,
                reason,
            });
        }

        self.table_mut(direction).insert(name.to_owned(), Arc::clone(resource));
        Ok(())
    }

    #[must_use]
    pub fn binding(&self, direction: SlotDirection, name: &str) -> Option<&Arc<GpuResource>> {
        self.table(direction).get(name)
    }

    /// Removes a binding, returning the resource that was bound.
    pub fn unbind(&mut self, direction: SlotDirection, name: &str) -> Option<Arc<GpuResource>> {
        self.table_mut(direction).remove(name)
    }

    pub fn clear_bindings(&mut self) {
        self.inputs.clear();
        self.outputs.clear();
    }

    /// Number of bound slots in one direction.
    #[must_use]
    pub fn binding_count(&self, direction: SlotDirection) -> usize {
        self.table(direction).len()
    }

    // ── Validation ─────────────────────────────────────────────────────────

    /// Checks every required slot of `decl` against the current bindings.
    pub fn validate(&self, decl: &PassIoDeclaration) -> Result<()> {
        let mut missing = Vec::new();
        let mut mismatched = Vec::new();

        for (direction, slots) in [
            (SlotDirection::Input, &decl.inputs),
            (SlotDirection::Output, &decl.outputs),
        ] {
            for slot in slots.iter().filter(|s| s.required) {
                match self.table(direction).get(&slot.name) {
                    None => missing.push(qualified(direction, slot)),
                    Some(res) if !slot.accepts(res.desc(), &self.settings) => {
                        mismatched.push(qualified(direction, slot));
                    }
                    Some(_) => {}
                }
            }
        }

        if missing.is_empty() && mismatched.is_empty() {
            Ok(())
        } else {
            Err(PassError::InvalidPassState {
                pass: self.name.clone(),
                missing,
                mismatched,
            })
        }
    }

    // ── IO change notification ─────────────────────────────────────────────

    /// Call after a configuration change altered the pass's declaration.
    ///
    /// Drops bindings whose slot disappeared or no longer accepts the bound
    /// resource, then fires the change callback once.
    pub fn notify_io_changed(&mut self, decl: &PassIoDeclaration) {
        let dups = decl.duplicate_names();
        if !dups.is_empty() {
            log::warn!("Pass '{}' declares duplicate slot names: {:?}", self.name, dups);
        }

        let settings = self.settings;
        let before = self.inputs.len() + self.outputs.len();
        self.inputs.retain(|name, res| {
            decl.input(name).is_some_and(|slot| slot.accepts(res.desc(), &settings))
        });
        self.outputs.retain(|name, res| {
            decl.output(name).is_some_and(|slot| slot.accepts(res.desc(), &settings))
        });
        let dropped = before - (self.inputs.len() + self.outputs.len());

        log::debug!(
            "Pass '{}' IO changed: {} inputs, {} outputs, {} stale bindings dropped",
            self.name,
            decl.inputs.len(),
            decl.outputs.len(),
            dropped
        );

        if let Some(callback) = self.on_io_changed.as_mut() {
            callback(&self.name);
        }
    }

    #[inline]
    fn table(&self, direction: SlotDirection) -> &BindingTable {
        match direction {
            SlotDirection::Input => &self.inputs,
            SlotDirection::Output => &self.outputs,
        }
    }

    #[inline]
    fn table_mut(&mut self, direction: SlotDirection) -> &mut BindingTable {
        match direction {
            SlotDirection::Input => &mut self.inputs,
            SlotDirection::Output => &mut self.outputs,
        }
    }
}

fn qualified(direction: SlotDirection, slot: &SlotDescriptor) -> String {
    match direction {
        SlotDirection::Input => format!("in:{}", slot.name),
        SlotDirection::Output => format!("out:{}", slot.name),
    }
}

impl fmt::Debug for PassCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassCore")
            .field("name", &self.name)
            .field("scene", &self.scene.as_ref().map(|s| s.id))
            .field("inputs", &self.inputs.keys().collect::<Vec<_>>())
            .field("outputs", &self.outputs.keys().collect::<Vec<_>>())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
