//! Incremental net resolution.
//!
//! Each connected terminal carries a [`NetId`]. The ids live in one map,
//! [`NetMap`], and only the functions in this file write to it. A wire's net
//! is read through its start terminal, so wires and terminals cannot
//! disagree.
//!
//! Connecting two terminals either allocates a fresh net, extends an existing
//! one, or reuses the shared one. Joining two different nets is refused.
//! Removing a wire clears a terminal's net once no wire touches it.
//!
//! Net ids may have gaps while editing. [`Schematic::canonicalize`] regroups
//! terminals by wire connectivity and renumbers the groups `1..=N`.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{debug, info, warn};

use super::graph::Schematic;
use super::types::{NetId, Point, Terminal, Wire, WireId};
use crate::error::{Result, SchematicError};

/// Terminal to net assignment.
#[derive(Debug, Clone, Default)]
pub(super) struct NetMap {
    by_terminal: HashMap<Terminal, NetId>,
}

impl NetMap {
    pub(super) fn get(&self, terminal: &Terminal) -> Option<NetId> {
        self.by_terminal.get(terminal).copied()
    }

    fn assign(&mut self, terminal: Terminal, net: NetId) {
        self.by_terminal.insert(terminal, net);
    }

    fn clear(&mut self, terminal: &Terminal) -> Option<NetId> {
        self.by_terminal.remove(terminal)
    }

    fn ids(&self) -> BTreeSet<NetId> {
        self.by_terminal.values().copied().collect()
    }

    /// Smallest positive id not used by any terminal.
    fn next_free(&self) -> NetId {
        let used = self.ids();
        let mut candidate = NetId::FIRST;
        while used.contains(&candidate) {
            candidate = NetId(candidate.0 + 1);
        }
        candidate
    }
}

/// Minimal union-find over dense indices.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            // Keep the earlier index as root so group order stays stable
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }
}

impl Schematic {
    // ============ Mutations ============

    /// Draw a wire between two terminals.
    ///
    /// See [`connect_with_waypoints`](Self::connect_with_waypoints).
    pub fn connect(&mut self, a: Terminal, b: Terminal) -> Result<WireId> {
        self.connect_with_waypoints(a, b, Vec::new())
    }

    /// Draw a wire between two terminals, keeping the user's bend points.
    ///
    /// - neither terminal on a net: both join the smallest unused net id
    /// - one on a net: the other joins it
    /// - both on the same net: nothing changes but the wire is still added
    /// - on different nets: [`SchematicError::NetMergeUnsupported`], and
    ///   nothing changes
    pub fn connect_with_waypoints(
        &mut self,
        a: Terminal,
        b: Terminal,
        waypoints: Vec<Point>,
    ) -> Result<WireId> {
        self.check_terminal(&a)?;
        self.check_terminal(&b)?;
        if a == b {
            return Err(SchematicError::SameTerminal { terminal: a });
        }

        let net = match (self.nets.get(&a), self.nets.get(&b)) {
            (None, None) => {
                let net = self.nets.next_free();
                debug!("New net {net} for {a} and {b}");
                net
            }
            (Some(net), None) => {
                debug!("{b} joins net {net}");
                net
            }
            (None, Some(net)) => {
                debug!("{a} joins net {net}");
                net
            }
            (Some(net_a), Some(net_b)) if net_a == net_b => net_a,
            (Some(net_a), Some(net_b)) => {
                warn!("Refusing to join net {net_a} ({a}) with net {net_b} ({b})");
                return Err(SchematicError::NetMergeUnsupported { net_a, net_b });
            }
        };

        let id = WireId(self.generate_wire_id());
        self.nets.assign(a.clone(), net);
        self.nets.assign(b.clone(), net);
        self.wires.push(Wire {
            id: id.clone(),
            start: a,
            end: b,
            waypoints,
        });
        Ok(id)
    }

    /// Remove a wire. An endpoint leaves its net once no other wire
    /// touches it.
    pub fn disconnect(&mut self, id: &WireId) -> Result<Wire> {
        let idx = self
            .wires
            .iter()
            .position(|w| w.id == *id)
            .ok_or_else(|| SchematicError::unknown_wire(id))?;
        let wire = self.wires.remove(idx);

        for terminal in wire.endpoints() {
            if self.wires_at(terminal) == 0 {
                if let Some(net) = self.nets.clear(terminal) {
                    debug!("{terminal} left net {net}");
                }
            }
        }
        debug!("Removed wire '{id}'");
        Ok(wire)
    }

    /// Renumber nets densely.
    ///
    /// Terminals joined by wires form one group. Groups are numbered from 1
    /// in the order their first terminal appears (components in registration
    /// order, lower terminal index first). Returns the number of nets.
    pub fn canonicalize(&mut self) -> usize {
        let groups = self.connected_groups();
        let mut changed = 0usize;
        for (idx, group) in groups.iter().enumerate() {
            let net = NetId(idx + 1);
            for terminal in group {
                if self.nets.get(terminal) != Some(net) {
                    changed += 1;
                }
                self.nets.assign(terminal.clone(), net);
            }
        }
        info!(
            "Canonicalized {} nets ({} terminals relabelled)",
            groups.len(),
            changed
        );
        groups.len()
    }

    /// Used by document import once every record has been checked.
    pub(super) fn restore_nets(&mut self, assignments: HashMap<Terminal, NetId>) {
        self.nets = NetMap {
            by_terminal: assignments,
        };
    }

    // ============ Queries ============

    /// Number of wires touching `terminal`.
    pub fn count_wires_at_terminal(&self, terminal: &Terminal) -> Result<usize> {
        self.check_terminal(terminal)?;
        Ok(self.wires_at(terminal))
    }

    fn wires_at(&self, terminal: &Terminal) -> usize {
        self.wires.iter().filter(|w| w.touches(terminal)).count()
    }

    /// The net `terminal` is on, if any.
    pub fn net_of(&self, terminal: &Terminal) -> Result<Option<NetId>> {
        self.check_terminal(terminal)?;
        Ok(self.nets.get(terminal))
    }

    /// The net a wire carries.
    pub fn wire_net(&self, id: &WireId) -> Result<Option<NetId>> {
        let wire = self.wire(id)?;
        Ok(self.nets.get(&wire.start))
    }

    /// Distinct net ids currently assigned, ascending.
    pub fn net_ids_in_use(&self) -> Vec<NetId> {
        self.nets.ids().into_iter().collect()
    }

    /// Member terminals of every net, terminals in registration order.
    pub fn nets(&self) -> BTreeMap<NetId, Vec<Terminal>> {
        let mut nets: BTreeMap<NetId, Vec<Terminal>> = BTreeMap::new();
        for terminal in self.terminals() {
            if let Some(net) = self.nets.get(&terminal) {
                nets.entry(net).or_default().push(terminal);
            }
        }
        nets
    }

    /// Wires carrying `net`, in drawing order.
    pub fn wires_on_net(&self, net: NetId) -> Vec<&Wire> {
        self.wires
            .iter()
            .filter(|w| self.nets.get(&w.start) == Some(net))
            .collect()
    }

    /// Whether the ids in use are exactly `1..=N`, one per connected group.
    pub fn nets_are_dense(&self) -> bool {
        let groups = self.connected_groups();
        let mut ids = BTreeSet::new();
        for group in &groups {
            let group_ids: BTreeSet<NetId> =
                group.iter().filter_map(|t| self.nets.get(t)).collect();
            if group_ids.len() != 1 {
                return false;
            }
            ids.extend(group_ids);
        }
        ids.len() == groups.len() && ids.iter().enumerate().all(|(i, net)| net.0 == i + 1)
    }

    /// The net each connected terminal would carry after [`canonicalize`],
    /// without touching the schematic.
    ///
    /// [`canonicalize`]: Self::canonicalize
    pub(super) fn canonical_assignment(&self) -> HashMap<Terminal, NetId> {
        self.connected_groups()
            .into_iter()
            .enumerate()
            .flat_map(|(idx, group)| group.into_iter().map(move |t| (t, NetId(idx + 1))))
            .collect()
    }

    /// Connected terminals grouped by wire connectivity, groups ordered by
    /// their first terminal.
    fn connected_groups(&self) -> Vec<Vec<Terminal>> {
        let order: Vec<Terminal> = self
            .terminals()
            .filter(|t| self.nets.get(t).is_some())
            .collect();
        let index: HashMap<&Terminal, usize> =
            order.iter().enumerate().map(|(i, t)| (t, i)).collect();

        let mut sets = DisjointSet::new(order.len());
        for wire in &self.wires {
            if let (Some(&a), Some(&b)) = (index.get(&wire.start), index.get(&wire.end)) {
                sets.union(a, b);
            }
        }

        let mut group_of_root: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<Terminal>> = Vec::new();
        for (i, terminal) in order.iter().enumerate() {
            let root = sets.find(i);
            let group = *group_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(terminal.clone());
        }
        groups
    }
}
