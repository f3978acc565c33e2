//! Binding Settings
//!
//! Controls how strictly a resource's runtime shape is matched against a
//! slot's constraints.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use myth_pass::{BindingSettings, PassCore};
//!
//! // Default: exact format match, sample count 0 is a full wildcard
//! let core = PassCore::new("Blit");
//!
//! // Accept Rgba8UnormSrgb where Rgba8Unorm is declared (and vice versa)
//! let core = PassCore::new("Blit").with_settings(BindingSettings {
//!     allow_srgb_views: true,
//!     ..Default::default()
//! });
//! ```

/// Constraint-matching policy used by a pass's bind operations.
///
/// | Setting               | `false` (default)               | `true`                                   |
/// |-----------------------|---------------------------------|------------------------------------------|
/// | `allow_srgb_views`    | formats must match exactly      | sRGB and linear variants are equivalent  |
/// | `strict_sample_count` | `sample_count == 0` accepts any | `sample_count == 0` accepts only 1       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindingSettings {
    /// Treat a format and its sRGB counterpart as compatible. The device
    /// layer is then expected to create a reinterpreting view.
    pub allow_srgb_views: bool,

    /// Make an unconstrained sample count mean "single-sampled" instead of
    /// "anything". Useful for passes that sample their inputs directly and
    /// cannot read multisampled textures.
    pub strict_sample_count: bool,
}

impl BindingSettings {
    /// Returns `true` when `actual` may be bound where `expected` is declared.
    #[inline]
    #[must_use]
    pub fn formats_compatible(
        &self,
        expected: wgpu::TextureFormat,
        actual: wgpu::TextureFormat,
    ) -> bool {
        if expected == actual {
            return true;
        }
        self.allow_srgb_views && expected.remove_srgb_suffix() == actual.remove_srgb_suffix()
    }

    /// Returns `true` when a resource with `actual` samples fits a slot
    /// declaring `expected` samples.
    #[inline]
    #[must_use]
    pub fn sample_count_compatible(&self, expected: u32, actual: u32) -> bool {
        match expected {
            0 if self.strict_sample_count => actual == 1,
            0 => true,
            n => n == actual,
        }
    }
}
