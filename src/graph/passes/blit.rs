//! Blit Pass
//!
//! Copies a color texture into a result texture of the same format, with an
//! optional coverage mask.
//!
//! # Slots
//!
//! | Direction | Name     | Kind | Format            | Required |
//! |-----------|----------|------|-------------------|----------|
//! | input     | `color`  | 2D   | configurable      | yes      |
//! | input     | `mask`   | 2D   | `R8Unorm`         | no       |
//! | output    | `result` | 2D   | same as `color`   | yes      |
//!
//! Sizes are unconstrained. Changing the format through
//! [`BlitPass::set_format`] re-declares both slots and drops bindings that
//! no longer fit.

use wgpu::TextureFormat;

use crate::errors::Result;
use crate::graph::core::PassCore;
use crate::graph::node::RenderPass;
use crate::graph::slot::{PassIoDeclaration, SlotDescriptor};
use crate::graph::state::PassState;

pub struct BlitPass {
    core: PassCore,
    format: TextureFormat,
}

impl BlitPass {
    pub const INPUT_COLOR: &'static str = "color";
    pub const INPUT_MASK: &'static str = "mask";
    pub const OUTPUT_RESULT: &'static str = "result";

    /// `Rgba8Unorm` blit with default binding settings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_core(PassCore::new(name), TextureFormat::Rgba8Unorm)
    }

    /// Builds the pass around a pre-configured core (scene, settings,
    /// change callback).
    #[must_use]
    pub fn with_core(core: PassCore, format: TextureFormat) -> Self {
        Self { core, format }
    }

    #[inline]
    #[must_use]
    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn set_format(&mut self, format: TextureFormat) {
        if self.format == format {
            return;
        }
        self.format = format;
        let decl = self.io_declaration();
        self.core.notify_io_changed(&decl);
    }
}

impl RenderPass for BlitPass {
    fn core(&self) -> &PassCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PassCore {
        &mut self.core
    }

    fn io_declaration(&self) -> PassIoDeclaration {
        PassIoDeclaration::new()
            .with_input(SlotDescriptor::texture(Self::INPUT_COLOR).format(self.format))
            .with_input(
                SlotDescriptor::texture(Self::INPUT_MASK)
                    .format(TextureFormat::R8Unorm)
                    .optional(),
            )
            .with_output(SlotDescriptor::texture(Self::OUTPUT_RESULT).format(self.format))
    }

    fn export_state(&self, state: &mut PassState) -> Result<()> {
        state.set("format", &format!("{:?}", self.format))?;
        state.set("has_mask", &self.input(Self::INPUT_MASK).is_some())?;
        Ok(())
    }
}
