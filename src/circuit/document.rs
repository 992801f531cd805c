//! Persistence document.
//!
//! A plain snapshot of the registries with the key names the editor's save
//! files use. Loading re-checks every invariant the resolver would have kept,
//! so a hand-edited or truncated file is rejected rather than half-loaded.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::config::SchematicConfig;
use super::graph::Schematic;
use super::types::{ComponentId, NetId, Placement, Point, Terminal, Wire, WireId};
use crate::components::{Component, Parameters};
use crate::error::{Result, SchematicError};

/// Saved form of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: ComponentId,
    pub designator: String,
    #[serde(flatten)]
    pub parameters: Parameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node1: Option<NetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node2: Option<NetId>,
    #[serde(default)]
    pub crd_x: i32,
    #[serde(default)]
    pub crd_y: i32,
    #[serde(default)]
    pub angle: i32,
}

/// Saved form of a wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRecord {
    pub id: WireId,
    pub sta_comp: ComponentId,
    pub sta_tmnl: usize,
    pub end_comp: ComponentId,
    pub end_tmnl: usize,
    pub net_id: Option<NetId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<Point>,
}

/// Everything needed to rebuild a [`Schematic`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchematicDocument {
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
    #[serde(default)]
    pub wires: Vec<WireRecord>,
}

impl Schematic {
    /// Snapshot the registries.
    pub fn to_document(&self) -> SchematicDocument {
        let components = self
            .components()
            .map(|c| {
                let node = |index| self.nets.get(&Terminal::new(c.id.clone(), index));
                ComponentRecord {
                    id: c.id.clone(),
                    designator: c.designator.clone(),
                    parameters: c.parameters,
                    node1: node(1),
                    node2: if c.terminal_count() > 1 { node(2) } else { None },
                    crd_x: c.placement.x,
                    crd_y: c.placement.y,
                    angle: c.placement.angle,
                }
            })
            .collect();

        let wires = self
            .wires()
            .map(|w| WireRecord {
                id: w.id.clone(),
                sta_comp: w.start.component.clone(),
                sta_tmnl: w.start.index,
                end_comp: w.end.component.clone(),
                end_tmnl: w.end.index,
                net_id: self.nets.get(&w.start),
                waypoints: w.waypoints.clone(),
            })
            .collect();

        SchematicDocument { components, wires }
    }

    /// Rebuild a schematic from a document, rejecting anything that breaks
    /// a registry invariant.
    pub fn from_document(document: SchematicDocument, config: SchematicConfig) -> Result<Self> {
        let mut schematic = Schematic::with_config(config);
        let mut assignments: HashMap<Terminal, NetId> = HashMap::new();

        for record in document.components {
            if schematic.component_index(&record.id).is_some() {
                return Err(SchematicError::invalid_document(format!(
                    "duplicate component id '{}'",
                    record.id
                )));
            }
            record.parameters.check(&record.id)?;

            let mut component = Component::new(
                record.id.clone(),
                record.designator,
                record.parameters.kind(),
            );
            component.parameters = record.parameters;
            component.placement = Placement {
                x: record.crd_x,
                y: record.crd_y,
                angle: record.angle,
            };

            for (index, node) in [(1, record.node1), (2, record.node2)] {
                let Some(net) = node else { continue };
                if !component.has_terminal(index) {
                    return Err(SchematicError::invalid_document(format!(
                        "component '{}' has no terminal {index} but node{index} is set",
                        record.id
                    )));
                }
                if net.get() == 0 {
                    return Err(SchematicError::invalid_document(format!(
                        "component '{}' uses net id 0",
                        record.id
                    )));
                }
                assignments.insert(Terminal::new(record.id.clone(), index), net);
            }
            schematic.components.push(component);
        }

        let mut wire_ids = HashSet::new();
        let mut wired: HashSet<Terminal> = HashSet::new();
        for record in document.wires {
            if !wire_ids.insert(record.id.clone()) {
                return Err(SchematicError::invalid_document(format!(
                    "duplicate wire id '{}'",
                    record.id
                )));
            }
            let start = Terminal::new(record.sta_comp, record.sta_tmnl);
            let end = Terminal::new(record.end_comp, record.end_tmnl);
            schematic.check_terminal(&start)?;
            schematic.check_terminal(&end)?;
            if start == end {
                return Err(SchematicError::SameTerminal { terminal: start });
            }

            let net = record.net_id.ok_or_else(|| {
                SchematicError::invalid_document(format!("wire '{}' has no net id", record.id))
            })?;
            for terminal in [&start, &end] {
                if assignments.get(terminal) != Some(&net) {
                    return Err(SchematicError::invalid_document(format!(
                        "wire '{}' is on net {net} but terminal {terminal} is not",
                        record.id
                    )));
                }
            }

            wired.insert(start.clone());
            wired.insert(end.clone());
            schematic.wires.push(Wire {
                id: record.id,
                start,
                end,
                waypoints: record.waypoints,
            });
        }

        if let Some(orphan) = schematic.terminals().find(|t| {
            assignments.contains_key(t) && !wired.contains(t)
        }) {
            return Err(SchematicError::invalid_document(format!(
                "terminal {orphan} is on a net but no wire reaches it"
            )));
        }

        schematic.restore_nets(assignments);
        Ok(schematic)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// Load from JSON with the default configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_config(json, SchematicConfig::default())
    }

    pub fn from_json_with_config(json: &str, config: SchematicConfig) -> Result<Self> {
        let document: SchematicDocument = serde_json::from_str(json)?;
        Self::from_document(document, config)
    }
}
