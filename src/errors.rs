//! Error Types
//!
//! This module defines the error types produced by the pass contract.
//!
//! # Overview
//!
//! Binding and validation never panic and never raise: the [`RenderPass`]
//! methods the graph compiler calls return plain booleans. The `try_*` and
//! `validate` variants return [`PassError`] so that callers who need the
//! reason (logging, editor tooling) can get it.
//!
//! - [`PassError::BindingRejected`]: slot absent or constraint mismatch.
//! - [`PassError::InvalidPassState`]: required slots unbound or mismatched.
//! - [`PassError::Json`]: pass state could not be serialized.
//!
//! [`RenderPass`]: crate::graph::RenderPass

use std::fmt;

use thiserror::Error;

use crate::resource::ResourceKind;

/// Which binding table an operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotDirection {
    Input,
    Output,
}

impl fmt::Display for SlotDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

/// Reason a resource does not fit a slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotMismatch {
    /// The slot is not part of the pass's current declaration.
    #[error("slot is not declared")]
    UnknownSlot,

    #[error("kind mismatch: slot expects {expected:?}, resource is {actual:?}")]
    KindMismatch {
        expected: ResourceKind,
        actual: ResourceKind,
    },

    #[error("width mismatch: slot expects {expected}, resource has {actual}")]
    WidthMismatch { expected: u32, actual: u32 },

    #[error("height mismatch: slot expects {expected}, resource has {actual}")]
    HeightMismatch { expected: u32, actual: u32 },

    #[error("depth mismatch: slot expects {expected}, resource has {actual}")]
    DepthMismatch { expected: u32, actual: u32 },

    #[error("sample count mismatch: slot expects {expected}, resource has {actual}")]
    SampleCountMismatch { expected: u32, actual: u32 },

    /// `actual` is `None` for resources without a texel format (buffers).
    #[error("format mismatch: slot expects {expected:?}, resource has {actual:?}")]
    FormatMismatch {
        expected: wgpu::TextureFormat,
        actual: Option<wgpu::TextureFormat>,
    },
}

/// The main error type for pass binding and validation.
#[derive(Error, Debug)]
pub enum PassError {
    // ========================================================================
    // Binding
    // ========================================================================
    /// A bind call was refused; the binding table is unchanged.
    #[error("pass '{pass}' rejected {direction} '{slot}': {reason}")]
    BindingRejected {
        pass: String,
        slot: String,
        direction: SlotDirection,
        reason: SlotMismatch,
    },

    // ========================================================================
    // Validation
    // ========================================================================
    /// One or more required slots are unbound or hold a non-conforming
    /// resource. Slot names are prefixed with `in:` or `out:`.
    #[error("pass '{pass}' is not ready: missing {missing:?}, mismatched {mismatched:?}")]
    InvalidPassState {
        pass: String,
        missing: Vec<String>,
        mismatched: Vec<String>,
    },

    // ========================================================================
    // Serialization
    // ========================================================================
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, PassError>`.
pub type Result<T> = std::result::Result<T, PassError>;
