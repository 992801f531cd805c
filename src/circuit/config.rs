//! Schematic configuration.

use crate::WIRE_PREFIX;

/// Configuration for a [`Schematic`](super::Schematic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchematicConfig {
    /// Prefix of generated wire ids (`wire-1`, `wire-2`, ...).
    pub wire_prefix: String,
    /// Fail compile when no connected ground component exists.
    pub require_ground: bool,
}

impl Default for SchematicConfig {
    fn default() -> Self {
        Self {
            wire_prefix: WIRE_PREFIX.to_string(),
            require_ground: false,
        }
    }
}

impl SchematicConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix used for generated wire ids.
    pub fn with_wire_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.wire_prefix = prefix.into();
        self
    }

    /// Require a connected ground reference before export.
    ///
    /// Off by default: the simulator picks its own reference node when the
    /// schematic has none.
    pub fn with_require_ground(mut self, require: bool) -> Self {
        self.require_ground = require;
        self
    }
}
