//! Component and wire registries.

use log::{debug, warn};

use super::config::SchematicConfig;
use super::resolver::NetMap;
use super::types::{ComponentId, Placement, Terminal, Wire, WireId};
use crate::components::{Component, ComponentKind, Parameters};
use crate::error::{Result, SchematicError};

/// An editable schematic.
///
/// Components and wires are kept in registration order, which is the order
/// compile reports errors in, canonicalize numbers nets in, and the netlist
/// lists components in.
#[derive(Debug, Clone, Default)]
pub struct Schematic {
    pub(super) config: SchematicConfig,
    pub(super) components: Vec<Component>,
    pub(super) wires: Vec<Wire>,
    /// Terminal nets. Written only by the resolver.
    pub(super) nets: NetMap,
}

impl Schematic {
    /// Create an empty schematic with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty schematic with a custom configuration.
    pub fn with_config(config: SchematicConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SchematicConfig {
        &self.config
    }

    // ============ Components ============

    /// Place a new component of `kind` with default parameters.
    ///
    /// The id and designator are both the smallest free `<prefix>-<n>`.
    pub fn add_component(&mut self, kind: ComponentKind) -> ComponentId {
        self.add_component_at(kind, Placement::default())
    }

    /// Place a new component at a front-end supplied position.
    pub fn add_component_at(&mut self, kind: ComponentKind, placement: Placement) -> ComponentId {
        let id = ComponentId(self.generate_id(kind.prefix()));
        let designator = self.generate_designator(kind.prefix());
        debug!("Adding {kind} '{id}' as '{designator}'");

        let mut component = Component::new(id.clone(), designator, kind);
        component.placement = placement;
        self.components.push(component);
        id
    }

    /// Delete a component. Refused while any of its terminals is on a net.
    pub fn remove_component(&mut self, id: &ComponentId) -> Result<Component> {
        let idx = self
            .component_index(id)
            .ok_or_else(|| SchematicError::unknown_component(id))?;

        let component = &self.components[idx];
        let connected = component
            .terminals()
            .any(|t| self.nets.get(&Terminal::new(id.clone(), t)).is_some());
        if connected {
            warn!("Refusing to delete '{id}': it still has connections");
            return Err(SchematicError::ComponentConnected { id: id.clone() });
        }

        debug!("Removing component '{id}'");
        Ok(self.components.remove(idx))
    }

    /// Change a component's designator. Any text is accepted here;
    /// compile reports malformed or duplicate designators.
    pub fn set_designator(&mut self, id: &ComponentId, designator: impl Into<String>) -> Result<()> {
        let component = self.component_mut(id)?;
        component.designator = designator.into();
        Ok(())
    }

    /// Replace a component's electrical parameters. The kind cannot change.
    pub fn set_parameters(&mut self, id: &ComponentId, parameters: Parameters) -> Result<()> {
        let component = self.component_mut(id)?;
        if component.kind() != parameters.kind() {
            return Err(SchematicError::KindMismatch {
                id: id.clone(),
                expected: component.kind().name(),
                found: parameters.kind().name(),
            });
        }
        parameters.check(id)?;
        component.parameters = parameters;
        Ok(())
    }

    pub fn set_placement(&mut self, id: &ComponentId, placement: Placement) -> Result<()> {
        self.component_mut(id)?.placement = placement;
        Ok(())
    }

    pub fn component(&self, id: &ComponentId) -> Result<&Component> {
        self.components
            .iter()
            .find(|c| c.id == *id)
            .ok_or_else(|| SchematicError::unknown_component(id))
    }

    fn component_mut(&mut self, id: &ComponentId) -> Result<&mut Component> {
        self.components
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| SchematicError::unknown_component(id))
    }

    /// Components in registration order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub(super) fn component_index(&self, id: &ComponentId) -> Option<usize> {
        self.components.iter().position(|c| c.id == *id)
    }

    /// All terminals of all components, components in registration order
    /// and terminal 1 first.
    pub fn terminals(&self) -> impl Iterator<Item = Terminal> + '_ {
        self.components
            .iter()
            .flat_map(|c| c.terminals().map(move |t| Terminal::new(c.id.clone(), t)))
    }

    /// Make sure `terminal` names an existing component and a valid index.
    pub(super) fn check_terminal(&self, terminal: &Terminal) -> Result<&Component> {
        let component = self.component(&terminal.component)?;
        if !component.has_terminal(terminal.index) {
            return Err(SchematicError::InvalidTerminal {
                component: terminal.component.clone(),
                terminal: terminal.index,
                count: component.terminal_count(),
            });
        }
        Ok(component)
    }

    // ============ Wires ============

    pub fn wire(&self, id: &WireId) -> Result<&Wire> {
        self.wires
            .iter()
            .find(|w| w.id == *id)
            .ok_or_else(|| SchematicError::unknown_wire(id))
    }

    /// Wires in the order they were drawn.
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.wires.iter()
    }

    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.wires.is_empty()
    }
}
