//! # Schematic Core
//!
//! Connectivity and netlist-resolution engine for an interactive
//! schematic-capture editor.
//!
//! This library provides:
//! - Component and wire registries with generated ids and designators
//! - Incremental net assignment as wires are drawn and deleted
//! - A staged compile check that gates export to a simulator
//! - Netlist flattening and a plain JSON save format
//!
//! ## Architecture
//!
//! - [`circuit`] - The [`Schematic`] and everything that edits or reads its topology
//! - [`components`] - Component kinds and their electrical parameters
//! - [`error`] - The [`SchematicError`] type
//!
//! ## Usage
//!
//! ```
//! use schematic_core::{ComponentKind, Schematic, Terminal};
//!
//! let mut sch = Schematic::new();
//! let r1 = sch.add_component(ComponentKind::Resistor);
//! let gnd = sch.add_component(ComponentKind::Ground);
//! sch.connect(Terminal::new(r1.clone(), 1), Terminal::new(gnd.clone(), 1))?;
//! sch.connect(Terminal::new(r1.clone(), 2), Terminal::new(gnd, 1))?;
//!
//! sch.compile()?;
//! let netlist = sch.get_netlist()?;
//! assert_eq!(netlist.len(), 1);
//! # Ok::<(), schematic_core::SchematicError>(())
//! ```
//!
//! ## Net Resolution
//!
//! Net ids are stored once per terminal. Drawing a wire gives both ends the
//! same id: a fresh one if neither end had one, otherwise the existing one.
//! A wire between two different nets is refused. Deleting a wire clears an
//! end's id once nothing else is attached there. [`Schematic::compile`]
//! renumbers nets to `1..=N` when editing has left gaps.
//!
//! The library never installs a logger; hosts see its `log` records through
//! whatever logger they set up.

pub mod circuit;
pub mod components;
pub mod error;

// Re-export main types for convenience
pub use circuit::{
    ComponentId, NetId, Netlist, NetlistEntry, Schematic, SchematicConfig, Terminal, WireId,
};
pub use components::{Component, ComponentKind, Parameters};
pub use error::{Result, SchematicError};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSchematic;

/// Default prefix of generated wire ids.
pub const WIRE_PREFIX: &str = "wire";

/// Id and designator prefix of ground components.
pub const GROUND_PREFIX: &str = "Ground";
