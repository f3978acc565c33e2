//! Render Pass Trait
//!
//! Defines the contract every pass must fulfil to take part in a render graph.
//! A pass is a leaf: it knows nothing about other passes. The graph compiler
//! reads its declaration, binds resources for each resolved edge, and asks
//! whether it is ready before scheduling it.
//!
//! # Compiler protocol
//!
//! ```text
//! io_declaration()  ──►  bind_input / bind_output (per edge)  ──►  is_valid()
//!                                                                     │
//! set_scene() on scene load (fan-out) ──► on_scene_changed()          ▼
//!                                                             schedule / refuse
//! ```

use std::sync::Arc;

use super::core::PassCore;
use super::slot::PassIoDeclaration;
use super::state::PassState;
use crate::errors::{Result, SlotDirection};
use crate::resource::GpuResource;
use crate::scene::SceneRef;

/// Render pass trait.
///
/// Implementors provide [`core`](Self::core)/[`core_mut`](Self::core_mut) and
/// [`io_declaration`](Self::io_declaration); everything else has a default
/// built on [`PassCore`].
///
/// # Design
/// - Binding fails softly: `bind_*` return `false` and leave state unchanged.
/// - Validity is recomputed on every call against the *current* declaration,
///   so late re-binding is always reflected.
/// - `on_scene_changed` and `export_state` are opt-in hooks.
pub trait RenderPass {
    fn core(&self) -> &PassCore;

    fn core_mut(&mut self) -> &mut PassCore;

    /// Currently supported input and output slots.
    ///
    /// Must be free of side effects and stable between calls unless the
    /// pass's configuration changed (see [`PassCore::notify_io_changed`]).
    fn io_declaration(&self) -> PassIoDeclaration;

    /// Name assigned at construction, used for debugging and error reports.
    fn name(&self) -> &str {
        self.core().name()
    }

    // ── Binding ────────────────────────────────────────────────────────────

    fn try_bind_input(&mut self, name: &str, resource: &Arc<GpuResource>) -> Result<()> {
        let decl = self.io_declaration();
        self.core_mut().bind(SlotDirection::Input, &decl, name, resource)
    }

    fn try_bind_output(&mut self, name: &str, resource: &Arc<GpuResource>) -> Result<()> {
        let decl = self.io_declaration();
        self.core_mut().bind(SlotDirection::Output, &decl, name, resource)
    }

    /// Binds `resource` to input slot `name`.
    ///
    /// Returns `false` without touching the binding table if the slot is not
    /// declared or the resource does not satisfy it.
    fn bind_input(&mut self, name: &str, resource: &Arc<GpuResource>) -> bool {
        match self.try_bind_input(name, resource) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("{e} (resource '{}')", resource.label());
                false
            }
        }
    }

    /// Output counterpart of [`bind_input`](Self::bind_input).
    fn bind_output(&mut self, name: &str, resource: &Arc<GpuResource>) -> bool {
        match self.try_bind_output(name, resource) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("{e} (resource '{}')", resource.label());
                false
            }
        }
    }

    fn input(&self, name: &str) -> Option<&Arc<GpuResource>> {
        self.core().binding(SlotDirection::Input, name)
    }

    fn output(&self, name: &str) -> Option<&Arc<GpuResource>> {
        self.core().binding(SlotDirection::Output, name)
    }

    fn unbind_input(&mut self, name: &str) -> Option<Arc<GpuResource>> {
        self.core_mut().unbind(SlotDirection::Input, name)
    }

    fn unbind_output(&mut self, name: &str) -> Option<Arc<GpuResource>> {
        self.core_mut().unbind(SlotDirection::Output, name)
    }

    fn clear_bindings(&mut self) {
        self.core_mut().clear_bindings();
    }

    // ── Validation ─────────────────────────────────────────────────────────

    /// Like [`is_valid`](Self::is_valid) but reports which required slots
    /// are unbound or mismatched.
    fn validate(&self) -> Result<()> {
        self.core().validate(&self.io_declaration())
    }

    /// `true` iff every required slot holds a conforming resource.
    ///
    /// The compiler calls this after binding and must not execute a pass
    /// that returns `false`.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    // ── Scene ──────────────────────────────────────────────────────────────

    /// Replaces the scene reference, then calls
    /// [`on_scene_changed`](Self::on_scene_changed) exactly once.
    fn set_scene(&mut self, scene: Option<SceneRef>) {
        self.core_mut().replace_scene(scene);
        self.on_scene_changed();
    }

    fn scene(&self) -> Option<&SceneRef> {
        self.core().scene()
    }

    /// Rebuild scene-dependent resources here. No-op by default.
    fn on_scene_changed(&mut self) {}

    // ── Serialization ──────────────────────────────────────────────────────

    /// Contribute pass-specific key/value state when the graph is serialized.
    /// No-op by default.
    fn export_state(&self, _state: &mut PassState) -> Result<()> {
        Ok(())
    }
}
