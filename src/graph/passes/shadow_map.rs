//! Shadow Map Pass
//!
//! Renders scene depth from a light into a square `Depth32Float` target.
//! Scene-dependent state (which scene the caster list was built for) is
//! rebuilt in [`RenderPass::on_scene_changed`].
//!
//! # Slots
//!
//! | Direction | Name      | Kind   | Constraint                        | Required |
//! |-----------|-----------|--------|-----------------------------------|----------|
//! | input     | `casters` | buffer | any size                          | no       |
//! | output    | `depth`   | 2D     | `Depth32Float`, `resolution`²     | yes      |

use wgpu::TextureFormat;

use crate::errors::Result;
use crate::graph::core::PassCore;
use crate::graph::node::RenderPass;
use crate::graph::slot::{PassIoDeclaration, SlotDescriptor};
use crate::graph::state::PassState;

pub const DEFAULT_SHADOW_RESOLUTION: u32 = 2048;

pub struct ShadowMapPass {
    core: PassCore,
    resolution: u32,
    /// Id of the scene the caster data was last built for.
    scene_id: Option<u32>,
    rebuilds: u32,
}

impl ShadowMapPass {
    pub const INPUT_CASTERS: &'static str = "casters";
    pub const OUTPUT_DEPTH: &'static str = "depth";

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_core(PassCore::new(name), DEFAULT_SHADOW_RESOLUTION)
    }

    /// A scene already present on `core` counts as built; no rebuild is
    /// recorded for it.
    #[must_use]
    pub fn with_core(core: PassCore, resolution: u32) -> Self {
        let scene_id = core.scene().map(|s| s.id);
        Self {
            core,
            resolution,
            scene_id,
            rebuilds: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn set_resolution(&mut self, resolution: u32) {
        if self.resolution == resolution {
            return;
        }
        self.resolution = resolution;
        let decl = self.io_declaration();
        self.core.notify_io_changed(&decl);
    }

    #[inline]
    #[must_use]
    pub fn scene_id(&self) -> Option<u32> {
        self.scene_id
    }

    /// How many times scene-dependent state has been rebuilt.
    #[inline]
    #[must_use]
    pub fn rebuilds(&self) -> u32 {
        self.rebuilds
    }
}

impl RenderPass for ShadowMapPass {
    fn core(&self) -> &PassCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PassCore {
        &mut self.core
    }

    fn io_declaration(&self) -> PassIoDeclaration {
        PassIoDeclaration::new()
            .with_input(SlotDescriptor::buffer(Self::INPUT_CASTERS).optional())
            .with_output(
                SlotDescriptor::texture(Self::OUTPUT_DEPTH)
                    .format(TextureFormat::Depth32Float)
                    .size(self.resolution, self.resolution),
            )
    }

    fn on_scene_changed(&mut self) {
        self.scene_id = self.core.scene().map(|s| s.id);
        self.rebuilds += 1;
        log::debug!(
            "ShadowMapPass '{}': rebuilt for scene {:?}",
            self.core.name(),
            self.scene_id
        );
    }

    fn export_state(&self, state: &mut PassState) -> Result<()> {
        state.set("resolution", &self.resolution)?;
        state.set("scene_id", &self.scene_id)?;
        state.set("rebuilds", &self.rebuilds)?;
        Ok(())
    }
}
