#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Render graph pass contract.
//!
//! A pass declares named input/output resource slots, accepts bound
//! resources that satisfy those slots, reports whether it is ready to
//! execute, and reacts to scene changes. Graph compilation and scheduling
//! live outside this crate.

pub mod errors;
pub mod graph;
pub mod resource;
pub mod scene;
pub mod settings;

pub use errors::{PassError, Result, SlotDirection, SlotMismatch};
pub use graph::{
    BlitPass, PassCore, PassIoDeclaration, PassList, PassState, RenderPass, ShadowMapPass,
    SlotDescriptor,
};
pub use resource::{GpuResource, ResourceDesc, ResourceKind};
pub use scene::{Scene, SceneRef};
pub use settings::BindingSettings;
