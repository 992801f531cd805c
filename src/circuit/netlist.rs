//! Netlist export.

use serde::{Deserialize, Serialize};

use super::graph::Schematic;
use super::types::{NetId, Terminal};
use super::validate::validate_schematic;
use crate::components::Parameters;
use crate::error::{Result, SchematicError};

/// One simulated component: its label, the nets on its two terminals, and
/// its electrical parameters. No id, coordinates or angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetlistEntry {
    pub designator: String,
    pub node1: NetId,
    pub node2: NetId,
    #[serde(flatten)]
    pub parameters: Parameters,
}

/// The ordered records handed to the simulator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Netlist {
    pub entries: Vec<NetlistEntry>,
}

impl Netlist {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NetlistEntry> {
        self.entries.iter()
    }

    /// Number of distinct nets referenced.
    pub fn net_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|e| [e.node1, e.node2])
            .collect::<std::collections::BTreeSet<_>>()
            .len()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a Netlist {
    type Item = &'a NetlistEntry;
    type IntoIter = std::slice::Iter<'a, NetlistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Schematic {
    /// Flatten the schematic into simulator records.
    ///
    /// Fails with the same error [`compile`](Self::compile) would report.
    /// Never modifies the schematic: if nets still have gaps, the entries
    /// use the numbering `compile` would give them.
    pub fn get_netlist(&self) -> Result<Netlist> {
        validate_schematic(self)?;

        let renumbered = (!self.nets_are_dense()).then(|| self.canonical_assignment());
        let net = |terminal: Terminal| -> Result<NetId> {
            let found = match &renumbered {
                Some(map) => map.get(&terminal).copied(),
                None => self.nets.get(&terminal),
            };
            found.ok_or(SchematicError::UnconnectedTerminal {
                component: terminal.component,
                terminal: terminal.index,
            })
        };

        let entries = self
            .components()
            .filter(|c| !c.is_ground())
            .map(|c| {
                Ok(NetlistEntry {
                    designator: c.designator.clone(),
                    node1: net(Terminal::new(c.id.clone(), 1))?,
                    node2: net(Terminal::new(c.id.clone(), 2))?,
                    parameters: c.parameters,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Netlist { entries })
    }
}
