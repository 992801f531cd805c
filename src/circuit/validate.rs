//! Schematic validation ("compile").

use log::info;

use super::graph::Schematic;
use super::types::Terminal;
use crate::error::{Result, SchematicError};

/// Validate a schematic for export without modifying it.
///
/// Checks:
/// - Every terminal of every non-ground component is on a net
/// - A ground component is connected, when the configuration asks for one
/// - Non-ground designators are well formed and unique
///
/// Net numbering is not checked here; [`Schematic::compile`] fixes it and
/// [`Schematic::get_netlist`] works around it.
pub fn validate_schematic(schematic: &Schematic) -> Result<()> {
    check_connectivity(schematic)?;
    schematic.validate_designators()
}

fn check_connectivity(schematic: &Schematic) -> Result<()> {
    for component in schematic.components().filter(|c| !c.is_ground()) {
        for index in component.terminals() {
            let terminal = Terminal::new(component.id.clone(), index);
            if schematic.nets.get(&terminal).is_none() {
                return Err(SchematicError::UnconnectedTerminal {
                    component: component.id.clone(),
                    terminal: index,
                });
            }
        }
    }

    if schematic.config.require_ground {
        let grounded = schematic
            .components()
            .filter(|c| c.is_ground())
            .any(|c| schematic.nets.get(&Terminal::new(c.id.clone(), 1)).is_some());
        if !grounded {
            return Err(SchematicError::MissingGround);
        }
    }

    Ok(())
}

impl Schematic {
    /// Prepare the schematic for simulation.
    ///
    /// 1. Every non-ground terminal must be connected. Nothing changes on
    ///    failure.
    /// 2. Nets are renumbered with [`canonicalize`](Self::canonicalize) if
    ///    they are not already `1..=N`. This stage cannot fail.
    /// 3. Designators must be well formed and unique. Nothing changes on
    ///    failure.
    ///
    /// Calling it again without edits in between gives the same result and
    /// changes nothing.
    pub fn compile(&mut self) -> Result<()> {
        check_connectivity(self)?;

        if !self.nets_are_dense() {
            self.canonicalize();
        }

        self.validate_designators()?;

        info!(
            "Compiled schematic: {} components, {} wires, {} nets",
            self.component_count(),
            self.wire_count(),
            self.net_ids_in_use().len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{NetId, SchematicConfig};
    use crate::components::ComponentKind;

    fn t(id: &crate::circuit::ComponentId, index: usize) -> Terminal {
        Terminal::new(id.clone(), index)
    }

    #[test]
    fn test_unconnected_terminal_reported_in_order() {
        let mut sch = Schematic::new();
        let r1 = sch.add_component(ComponentKind::Resistor);
        let r2 = sch.add_component(ComponentKind::Resistor);
        sch.connect(t(&r1, 1), t(&r2, 1)).unwrap();

        let err = sch.compile().unwrap_err();
        assert!(matches!(
            err,
            SchematicError::UnconnectedTerminal { ref component, terminal: 2 } if *component == r1
        ));
    }

    #[test]
    fn test_ground_exempt_from_connectivity() {
        let mut sch = Schematic::new();
        let r1 = sch.add_component(ComponentKind::Resistor);
        sch.add_component(ComponentKind::Ground);
        sch.connect(t(&r1, 1), t(&r1, 2)).unwrap();
        assert!(sch.compile().is_ok());
    }

    #[test]
    fn test_compile_canonicalizes_gaps() {
        let mut sch = Schematic::new();
        let r1 = sch.add_component(ComponentKind::Resistor);
        let r2 = sch.add_component(ComponentKind::Resistor);
        let r3 = sch.add_component(ComponentKind::Resistor);
        let scratch = sch.connect(t(&r3, 1), t(&r3, 2)).unwrap(); // net 1
        sch.connect(t(&r1, 1), t(&r2, 1)).unwrap(); // net 2
        sch.connect(t(&r1, 2), t(&r2, 2)).unwrap(); // net 3
        sch.disconnect(&scratch).unwrap();
        sch.remove_component(&r3).unwrap();

        sch.compile().unwrap();
        assert_eq!(sch.net_ids_in_use(), vec![NetId(1), NetId(2)]);
        assert_eq!(sch.net_of(&t(&r1, 1)).unwrap(), Some(NetId(1)));
        assert_eq!(sch.net_of(&t(&r1, 2)).unwrap(), Some(NetId(2)));
    }

    #[test]
    fn test_compile_is_idempotent() {
        let mut sch = Schematic::new();
        let r1 = sch.add_component(ComponentKind::Resistor);
        let r2 = sch.add_component(ComponentKind::Resistor);
        sch.connect(t(&r1, 1), t(&r2, 1)).unwrap();
        sch.connect(t(&r1, 2), t(&r2, 2)).unwrap();
        sch.set_designator(&r2, "R-1").unwrap();

        let first = sch.compile().unwrap_err().to_string();
        let nets = sch.nets();
        let second = sch.compile().unwrap_err().to_string();
        assert_eq!(first, second);
        assert_eq!(sch.nets(), nets);

        sch.set_designator(&r2, "R-2").unwrap();
        assert!(sch.compile().is_ok());
        let nets = sch.nets();
        assert!(sch.compile().is_ok());
        assert_eq!(sch.nets(), nets);
    }

    #[test]
    fn test_require_ground() {
        let mut sch = Schematic::with_config(SchematicConfig::new().with_require_ground(true));
        let r1 = sch.add_component(ComponentKind::Resistor);
        let g = sch.add_component(ComponentKind::Ground);
        sch.connect(t(&r1, 1), t(&r1, 2)).unwrap();
        assert!(matches!(sch.compile(), Err(SchematicError::MissingGround)));

        sch.connect(t(&r1, 2), t(&g, 1)).unwrap();
        assert!(sch.compile().is_ok());
    }

    #[test]
    fn test_validate_schematic_is_read_only() {
        let mut sch = Schematic::new();
        let r1 = sch.add_component(ComponentKind::Resistor);
        let r2 = sch.add_component(ComponentKind::Resistor);
        let scratch = sch.connect(t(&r2, 1), t(&r2, 2)).unwrap();
        sch.connect(t(&r1, 1), t(&r1, 2)).unwrap();
        sch.disconnect(&scratch).unwrap();
        sch.remove_component(&r2).unwrap();

        // net 2 alone is not dense, but validation leaves it be
        validate_schematic(&sch).unwrap();
        assert_eq!(sch.net_ids_in_use(), vec![NetId(2)]);
    }
}
