//! GPU Resource Handles
//!
//! A [`GpuResource`] is the opaque handle the graph compiler hands to a pass.
//! The pass never touches the device object behind it here; it only inspects
//! the runtime shape ([`ResourceDesc`]) to decide whether the handle fits a
//! declared slot.
//!
//! Handles are shared through `Arc`: the same resource is routinely bound as
//! the output of one pass and the input of the next.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_RESOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Broad resource category a slot asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Texture(wgpu::TextureDimension),
    Buffer,
}

impl ResourceKind {
    pub const TEXTURE_2D: Self = Self::Texture(wgpu::TextureDimension::D2);
}

/// Runtime shape of a resource.
///
/// For buffers `width` is the size in bytes and the remaining extents are 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceDesc {
    pub kind: ResourceKind,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub sample_count: u32,
    pub format: Option<wgpu::TextureFormat>,
}

impl ResourceDesc {
    /// Single-sampled 2D texture.
    #[must_use]
    pub fn texture_2d(width: u32, height: u32, format: wgpu::TextureFormat) -> Self {
        Self {
            kind: ResourceKind::TEXTURE_2D,
            width,
            height,
            depth: 1,
            sample_count: 1,
            format: Some(format),
        }
    }

    /// Single-sampled 3D texture.
    #[must_use]
    pub fn texture_3d(width: u32, height: u32, depth: u32, format: wgpu::TextureFormat) -> Self {
        Self {
            kind: ResourceKind::Texture(wgpu::TextureDimension::D3),
            width,
            height,
            depth,
            sample_count: 1,
            format: Some(format),
        }
    }

    #[must_use]
    pub fn buffer(size: u32) -> Self {
        Self {
            kind: ResourceKind::Buffer,
            width: size,
            height: 1,
            depth: 1,
            sample_count: 1,
            format: None,
        }
    }

    #[must_use]
    pub fn with_sample_count(mut self, sample_count: u32) -> Self {
        self.sample_count = sample_count;
        self
    }
}

/// Opaque handle to a GPU-visible texture or buffer.
#[derive(Debug)]
pub struct GpuResource {
    id: u64,
    label: String,
    desc: ResourceDesc,
}

impl GpuResource {
    /// Creates a new shared handle with a process-unique id.
    #[must_use]
    pub fn new(label: impl Into<String>, desc: ResourceDesc) -> Arc<Self> {
        Arc::new(Self {
            id: NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed),
            label: label.into(),
            desc,
        })
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    #[must_use]
    pub fn desc(&self) -> &ResourceDesc {
        &self.desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = GpuResource::new("a", ResourceDesc::buffer(64));
        let b = GpuResource::new("b", ResourceDesc::buffer(64));
        assert_ne!(a.id(), b.id());
        assert_eq!(a.label(), "a");
    }

    #[test]
    fn buffer_desc_has_no_format() {
        let desc = ResourceDesc::buffer(256);
        assert_eq!(desc.kind, ResourceKind::Buffer);
        assert_eq!(desc.width, 256);
        assert!(desc.format.is_none());
    }
}
