//! Render graph pass contract
//!
//! Provides:
//! - RenderPass: the trait every pass implements
//! - PassCore: name, scene and binding tables shared by all passes
//! - SlotDescriptor / PassIoDeclaration: declared resource requirements
//! - PassState: key/value sink for graph serialization
//! - PassList: fans compiler calls out to every pass of a graph
//! - passes: reference pass implementations

pub mod core;
pub mod list;
pub mod node;
pub mod passes;
pub mod slot;
pub mod state;

pub use self::core::{IoChangedCallback, PassCore};
pub use list::PassList;
pub use node::RenderPass;
pub use passes::{BlitPass, ShadowMapPass};
pub use slot::{PassIoDeclaration, SlotDescriptor, SlotList};
pub use state::PassState;
