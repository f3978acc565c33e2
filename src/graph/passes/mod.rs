pub mod blit;
pub mod shadow_map;

pub use blit::BlitPass;
pub use shadow_map::{DEFAULT_SHADOW_RESOLUTION, ShadowMapPass};
