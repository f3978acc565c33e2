//! Slot Declarations
//!
//! A pass advertises what it consumes and produces as a [`PassIoDeclaration`]:
//! two ordered lists of [`SlotDescriptor`]s. The graph compiler matches output
//! names to input names to build edges, then binds concrete resources.
//!
//! # Wildcards
//!
//! Every dimension hint uses `0` for "don't care", and a `None` format means
//! any format. Only the constrained fields are compared against a resource.

use smallvec::SmallVec;

use crate::errors::SlotMismatch;
use crate::resource::{ResourceDesc, ResourceKind};
use crate::settings::BindingSettings;

/// Inline capacity covering the slot count of typical passes.
pub type SlotList = SmallVec<[SlotDescriptor; 4]>;

/// A named, typed resource requirement.
///
/// Built with a small builder API:
///
/// ```rust,ignore
/// let slot = SlotDescriptor::texture("depth")
///     .format(wgpu::TextureFormat::Depth32Float)
///     .size(2048, 2048);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDescriptor {
    /// Unique among the inputs (or among the outputs) of one pass. Case-sensitive.
    pub name: String,
    pub kind: ResourceKind,
    /// For buffers this is the size in bytes.
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub sample_count: u32,
    pub format: Option<wgpu::TextureFormat>,
    /// When `true` the pass cannot execute without this slot bound.
    pub required: bool,
}

impl SlotDescriptor {
    /// Unconstrained, required slot of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            width: 0,
            height: 0,
            depth: 0,
            sample_count: 0,
            format: None,
            required: true,
        }
    }

    /// Required 2D texture slot.
    #[must_use]
    pub fn texture(name: impl Into<String>) -> Self {
        Self::new(name, ResourceKind::TEXTURE_2D)
    }

    #[must_use]
    pub fn buffer(name: impl Into<String>) -> Self {
        Self::new(name, ResourceKind::Buffer)
    }

    #[must_use]
    pub fn format(mut self, format: wgpu::TextureFormat) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn samples(mut self, sample_count: u32) -> Self {
        self.sample_count = sample_count;
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Checks a resource's runtime shape against this slot.
    ///
    /// Fields are checked in declaration order and the first mismatch is
    /// reported.
    pub fn check(
        &self,
        desc: &ResourceDesc,
        settings: &BindingSettings,
    ) -> Result<(), SlotMismatch> {
        if self.kind != desc.kind {
            return Err(SlotMismatch::KindMismatch {
                expected: self.kind,
                actual: desc.kind,
            });
        }
        if !extent_matches(self.width, desc.width) {
            return Err(SlotMismatch::WidthMismatch {
                expected: self.width,
                actual: desc.width,
            });
        }
        if !extent_matches(self.height, desc.height) {
            return Err(SlotMismatch::HeightMismatch {
                expected: self.height,
                actual: desc.height,
            });
        }
        if !extent_matches(self.depth, desc.depth) {
            return Err(SlotMismatch::DepthMismatch {
                expected: self.depth,
                actual: desc.depth,
            });
        }
        if !settings.sample_count_compatible(self.sample_count, desc.sample_count) {
            return Err(SlotMismatch::SampleCountMismatch {
                expected: self.sample_count,
                actual: desc.sample_count,
            });
        }
        if let Some(expected) = self.format {
            let fits = desc
                .format
                .is_some_and(|actual| settings.formats_compatible(expected, actual));
            if !fits {
                return Err(SlotMismatch::FormatMismatch {
                    expected,
                    actual: desc.format,
                });
            }
        }
        Ok(())
    }

    /// Convenience wrapper over [`check`](Self::check).
    #[inline]
    #[must_use]
    pub fn accepts(&self, desc: &ResourceDesc, settings: &BindingSettings) -> bool {
        self.check(desc, settings).is_ok()
    }
}

#[inline]
fn extent_matches(expected: u32, actual: u32) -> bool {
    expected == 0 || expected == actual
}

/// The input and output slots a pass currently supports.
///
/// Describes capability, not current binding. Passes build a fresh value on
/// every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassIoDeclaration {
    pub inputs: SlotList,
    pub outputs: SlotList,
}

impl PassIoDeclaration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an input slot (builder style).
    #[must_use]
    pub fn with_input(mut self, slot: SlotDescriptor) -> Self {
        self.inputs.push(slot);
        self
    }

    /// Appends an output slot (builder style).
    #[must_use]
    pub fn with_output(mut self, slot: SlotDescriptor) -> Self {
        self.outputs.push(slot);
        self
    }

    #[must_use]
    pub fn input(&self, name: &str) -> Option<&SlotDescriptor> {
        self.inputs.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn output(&self, name: &str) -> Option<&SlotDescriptor> {
        self.outputs.iter().find(|s| s.name == name)
    }

    /// Names declared more than once within the inputs or within the outputs.
    ///
    /// An input and an output sharing a name is allowed and not reported.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut dups = Vec::new();
        for list in [&self.inputs, &self.outputs] {
            for (i, slot) in list.iter().enumerate() {
                let seen_before = list[..i].iter().any(|s| s.name == slot.name);
                if seen_before && !dups.contains(&slot.name) {
                    dups.push(slot.name.clone());
                }
            }
        }
        dups
    }
}
