//! Error types for the schematic core.
//!
//! This module provides a unified error type [`SchematicError`] that covers
//! every rejected edit, failed compile stage and malformed persistence
//! document. All of them are recoverable: a half-drawn schematic is a normal
//! authoring state.

use thiserror::Error;

use crate::circuit::{ComponentId, NetId, Terminal, WireId};

/// Result type alias using [`SchematicError`].
pub type Result<T> = std::result::Result<T, SchematicError>;

/// Unified error type for all schematic operations.
#[derive(Error, Debug)]
pub enum SchematicError {
    // ============ Compile Errors ============
    /// A non-ground terminal has no net
    #[error("Terminal {terminal} of component '{component}' is not connected")]
    UnconnectedTerminal { component: ComponentId, terminal: usize },

    /// Designator does not match `<Prefix>-<positive integer>`
    #[error("Component '{component}' has malformed designator '{designator}'")]
    MalformedDesignator {
        component: ComponentId,
        designator: String,
    },

    /// Designator already used by an earlier component
    #[error("Component '{component}' reuses designator '{designator}'")]
    DuplicateDesignator {
        component: ComponentId,
        designator: String,
    },

    /// Missing ground reference (only when the configuration requires one)
    #[error("Schematic has no connected ground component")]
    MissingGround,

    // ============ Connection Errors ============
    /// Both endpoints already belong to different nets
    #[error("Cannot join net {net_a} and net {net_b}: remove a wire and reconnect instead")]
    NetMergeUnsupported { net_a: NetId, net_b: NetId },

    /// A wire would start and end on the same terminal
    #[error("Cannot connect terminal {terminal} to itself")]
    SameTerminal { terminal: Terminal },

    // ============ Reference Errors ============
    /// Component id not present in the registry
    #[error("Component '{id}' not found")]
    UnknownComponent { id: ComponentId },

    /// Wire id not present in the registry
    #[error("Wire '{id}' not found")]
    UnknownWire { id: WireId },

    /// Terminal index out of range for the component
    #[error("Component '{component}' has no terminal {terminal} (it has {count})")]
    InvalidTerminal {
        component: ComponentId,
        terminal: usize,
        count: usize,
    },

    // ============ Edit Errors ============
    /// Deleting a component that still carries nets
    #[error("Component '{id}' still has connections and cannot be deleted")]
    ComponentConnected { id: ComponentId },

    /// Parameters of one kind given to a component of another
    #[error("Component '{id}' is a {expected}, not a {found}")]
    KindMismatch {
        id: ComponentId,
        expected: &'static str,
        found: &'static str,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{param}' for component '{component}': {message}")]
    InvalidParameter {
        component: ComponentId,
        param: String,
        message: String,
    },

    // ============ Persistence Errors ============
    /// Document violates a registry invariant
    #[error("Invalid schematic document: {message}")]
    InvalidDocument { message: String },

    /// JSON encoding or decoding failed
    #[error("Schematic JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchematicError {
    /// Create an unknown component error
    pub fn unknown_component(id: &ComponentId) -> Self {
        Self::UnknownComponent { id: id.clone() }
    }

    /// Create an unknown wire error
    pub fn unknown_wire(id: &WireId) -> Self {
        Self::UnknownWire { id: id.clone() }
    }

    /// Create an invalid document error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Whether this error came from one of the compile stages.
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            Self::UnconnectedTerminal { .. }
                | Self::MissingGround
                | Self::MalformedDesignator { .. }
                | Self::DuplicateDesignator { .. }
        )
    }
}
