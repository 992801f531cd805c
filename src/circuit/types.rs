//! Core types for schematic representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a component, text of the form `<prefix>-<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub String);

impl ComponentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        ComponentId(s.to_string())
    }
}

/// Identifier of a wire, text of the form `wire-<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireId(pub String);

impl WireId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WireId {
    fn from(s: &str) -> Self {
        WireId(s.to_string())
    }
}

/// A net identifier. Always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetId(pub usize);

impl NetId {
    /// The first id handed out on an empty schematic.
    pub const FIRST: NetId = NetId(1);

    /// Wrap a raw value, rejecting zero.
    pub fn new(raw: usize) -> Option<Self> {
        (raw > 0).then_some(NetId(raw))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A connection point, addressed by component and 1-based index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Terminal {
    pub component: ComponentId,
    pub index: usize,
}

impl Terminal {
    pub fn new(component: impl Into<ComponentId>, index: usize) -> Self {
        Self {
            component: component.into(),
            index,
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.component, self.index)
    }
}

/// A canvas coordinate. Opaque to the core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Where the front end drew a component. Never interpreted here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    /// Rotation in degrees
    pub angle: i32,
}

/// A wire between two terminals.
///
/// The wire's net is not stored on the record; it is read from the
/// resolver through its start terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    pub id: WireId,
    pub start: Terminal,
    pub end: Terminal,
    /// Bend points drawn by the user
    pub waypoints: Vec<Point>,
}

impl Wire {
    /// Whether either end of this wire sits on `terminal`.
    pub fn touches(&self, terminal: &Terminal) -> bool {
        self.start == *terminal || self.end == *terminal
    }

    pub fn endpoints(&self) -> [&Terminal; 2] {
        [&self.start, &self.end]
    }
}
