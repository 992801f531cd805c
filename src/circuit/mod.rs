//! Schematic connectivity and net resolution.
//!
//! This module owns the editable schematic: the component and wire
//! registries, the net resolver that keeps terminal nets consistent as wires
//! come and go, the staged compile check, and the netlist handed to the
//! simulator. All topology edits go through [`Schematic`] methods; nothing
//! outside `resolver` writes a net id.

mod config;
mod document;
mod graph;
mod ids;
mod netlist;
mod resolver;
mod types;
mod validate;

pub use config::SchematicConfig;
pub use document::{ComponentRecord, SchematicDocument, WireRecord};
pub use graph::Schematic;
pub use ids::is_well_formed_designator;
pub use netlist::{Netlist, NetlistEntry};
pub use types::*;
pub use validate::validate_schematic;
