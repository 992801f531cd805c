//! End-to-end editing scenarios against the public API.

use std::collections::BTreeSet;

use schematic_core::components::Resistor;
use schematic_core::{
    ComponentId, ComponentKind, NetId, Parameters, Schematic, SchematicError, Terminal,
};

fn t(id: &ComponentId, index: usize) -> Terminal {
    Terminal::new(id.clone(), index)
}

/// Every wire agrees with both of its endpoints.
fn assert_wires_consistent(sch: &Schematic) {
    for wire in sch.wires() {
        let net = sch.wire_net(&wire.id).unwrap();
        assert!(net.is_some(), "wire {} has no net", wire.id);
        assert_eq!(sch.net_of(&wire.start).unwrap(), net);
        assert_eq!(sch.net_of(&wire.end).unwrap(), net);
    }
}

#[test]
fn test_unconnected_resistors_do_not_compile() {
    let mut sch = Schematic::new();
    let r1 = sch.add_component(ComponentKind::Resistor);
    let r2 = sch.add_component(ComponentKind::Resistor);
    assert_eq!(r1.as_str(), "R-1");
    assert_eq!(r2.as_str(), "R-2");

    let err = sch.compile().unwrap_err();
    assert!(matches!(
        err,
        SchematicError::UnconnectedTerminal { ref component, terminal: 1 } if *component == r1
    ));
    assert!(err.is_compile_error());
    assert!(sch.get_netlist().is_err());
}

#[test]
fn test_partial_wiring_with_ground() {
    let mut sch = Schematic::new();
    let r1 = sch.add_component(ComponentKind::Resistor);
    let r2 = sch.add_component(ComponentKind::Resistor);
    let g = sch.add_component(ComponentKind::Ground);

    sch.connect(t(&r1, 1), t(&r2, 1)).unwrap();
    assert_eq!(sch.net_of(&t(&r1, 1)).unwrap(), Some(NetId(1)));
    assert_eq!(sch.net_of(&t(&r2, 1)).unwrap(), Some(NetId(1)));

    sch.connect(t(&r1, 2), t(&g, 1)).unwrap();
    assert_eq!(sch.net_of(&t(&r1, 2)).unwrap(), Some(NetId(2)));

    // R-2 terminal 2 still loose
    assert!(matches!(
        sch.compile(),
        Err(SchematicError::UnconnectedTerminal { ref component, terminal: 2 }) if *component == r2
    ));
}

#[test]
fn test_series_circuit_through_ground() {
    let mut sch = Schematic::new();
    let r1 = sch.add_component(ComponentKind::Resistor);
    let r2 = sch.add_component(ComponentKind::Resistor);
    let g = sch.add_component(ComponentKind::Ground);
    sch.set_parameters(&r2, Parameters::Resistor(Resistor::new(330.0)))
        .unwrap();

    sch.connect(t(&r1, 1), t(&r2, 1)).unwrap();
    sch.connect(t(&r1, 2), t(&g, 1)).unwrap();
    sch.connect(t(&r2, 2), t(&g, 1)).unwrap();
    assert!(sch.nets_are_dense());

    let before = sch.nets();
    sch.compile().unwrap();
    assert_eq!(sch.nets(), before, "dense nets must not be relabelled");

    let netlist = sch.get_netlist().unwrap();
    let designators: Vec<&str> = netlist.iter().map(|e| e.designator.as_str()).collect();
    assert_eq!(designators, vec!["R-1", "R-2"]);
    assert_eq!(netlist.net_count(), 2);
    assert_eq!(netlist.entries[1].node1, NetId(1));
    assert_eq!(netlist.entries[1].node2, NetId(2));
    assert_eq!(
        netlist.entries[1].parameters,
        Parameters::Resistor(Resistor::new(330.0))
    );
}

#[test]
fn test_joining_two_nets_is_refused() {
    let json = r#"{
        "components": [
            {"id": "R-3", "designator": "R-3", "kind": "resistor", "value": 100.0, "node1": 5},
            {"id": "R-4", "designator": "R-4", "kind": "resistor", "value": 100.0, "node1": 7},
            {"id": "R-5", "designator": "R-5", "kind": "resistor", "value": 100.0, "node1": 5},
            {"id": "R-6", "designator": "R-6", "kind": "resistor", "value": 100.0, "node1": 7}
        ],
        "wires": [
            {"id": "wire-1", "sta_comp": "R-3", "sta_tmnl": 1, "end_comp": "R-5", "end_tmnl": 1, "net_id": 5},
            {"id": "wire-2", "sta_comp": "R-4", "sta_tmnl": 1, "end_comp": "R-6", "end_tmnl": 1, "net_id": 7}
        ]
    }"#;
    let mut sch = Schematic::from_json(json).unwrap();
    let r3 = ComponentId::from("R-3");
    let r4 = ComponentId::from("R-4");

    let err = sch.connect(t(&r3, 1), t(&r4, 1)).unwrap_err();
    assert!(matches!(
        err,
        SchematicError::NetMergeUnsupported {
            net_a: NetId(5),
            net_b: NetId(7)
        }
    ));
    assert_eq!(sch.wire_count(), 2);
    assert_eq!(sch.net_of(&t(&r3, 1)).unwrap(), Some(NetId(5)));
    assert_eq!(sch.net_of(&t(&r4, 1)).unwrap(), Some(NetId(7)));
}

#[test]
fn test_fresh_net_never_collides() {
    let mut sch = Schematic::new();
    let r: Vec<ComponentId> = (0..6)
        .map(|_| sch.add_component(ComponentKind::Resistor))
        .collect();
    sch.connect(t(&r[0], 1), t(&r[1], 1)).unwrap();
    sch.connect(t(&r[2], 1), t(&r[3], 1)).unwrap();

    let before: BTreeSet<NetId> = sch.net_ids_in_use().into_iter().collect();
    sch.connect(t(&r[4], 1), t(&r[5], 1)).unwrap();
    let fresh = sch.net_of(&t(&r[4], 1)).unwrap().unwrap();
    assert!(!before.contains(&fresh));
}

#[test]
fn test_random_edit_sequences_canonicalize_densely() {
    // Small linear congruential generator so the sequence is reproducible
    let mut seed: u64 = 0x5eed;
    let mut next = move |bound: usize| {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((seed >> 33) as usize) % bound
    };

    for _round in 0..20 {
        let mut sch = Schematic::new();
        let comps: Vec<ComponentId> = (0..8)
            .map(|i| {
                if i == 0 {
                    sch.add_component(ComponentKind::Ground)
                } else {
                    sch.add_component(ComponentKind::Resistor)
                }
            })
            .collect();
        let terminal = |i: usize, pick: usize| {
            let id = &comps[i];
            let count = if i == 0 { 1 } else { 2 };
            Terminal::new(id.clone(), 1 + pick % count)
        };

        for _step in 0..40 {
            if sch.wire_count() > 0 && next(3) == 0 {
                let victim = sch.wires().nth(next(sch.wire_count())).unwrap().id.clone();
                sch.disconnect(&victim).unwrap();
            } else {
                let a = terminal(next(comps.len()), next(2));
                let b = terminal(next(comps.len()), next(2));
                let before = sch.nets();
                match sch.connect(a, b) {
                    Ok(_) => {}
                    Err(SchematicError::SameTerminal { .. })
                    | Err(SchematicError::NetMergeUnsupported { .. }) => {
                        assert_eq!(sch.nets(), before, "refused connect changed nets");
                    }
                    Err(e) => panic!("unexpected error: {e}"),
                }
            }
            assert_wires_consistent(&sch);
        }

        let groups = sch.canonicalize();
        let ids: Vec<NetId> = sch.net_ids_in_use();
        let expected: Vec<NetId> = (1..=groups).map(NetId).collect();
        assert_eq!(ids, expected);
        assert!(sch.nets_are_dense());
        assert_wires_consistent(&sch);

        // Every terminal on a net has a wire, every wired terminal has a net
        for term in sch.terminals() {
            let wires = sch.count_wires_at_terminal(&term).unwrap();
            let net = sch.net_of(&term).unwrap();
            assert_eq!(wires > 0, net.is_some(), "terminal {term}");
        }

        // Reload keeps the exact state
        let reloaded = Schematic::from_json(&sch.to_json().unwrap()).unwrap();
        assert_eq!(reloaded.nets(), sch.nets());
    }
}

#[test]
fn test_compile_and_netlist_agree() {
    let mut sch = Schematic::new();
    let v = sch.add_component(ComponentKind::DcVoltage);
    let d = sch.add_component(ComponentKind::Diode);
    let c = sch.add_component(ComponentKind::Capacitor);
    let g = sch.add_component(ComponentKind::Ground);

    sch.connect(t(&v, 1), t(&d, 1)).unwrap();
    sch.connect(t(&d, 2), t(&c, 1)).unwrap();
    assert_eq!(sch.get_netlist().is_ok(), sch.clone().compile().is_ok());

    sch.connect(t(&c, 2), t(&g, 1)).unwrap();
    sch.connect(t(&v, 2), t(&g, 1)).unwrap();
    sch.set_designator(&d, "diode").unwrap();
    assert!(sch.get_netlist().is_err());
    assert!(sch.clone().compile().is_err());

    assert_eq!(sch.repair_designators(), vec![d.clone()]);
    assert_eq!(sch.component(&d).unwrap().designator, "D-1");
    let netlist = sch.get_netlist().unwrap();
    sch.compile().unwrap();
    assert_eq!(sch.get_netlist().unwrap(), netlist);
    assert_eq!(netlist.len(), 3);
}

#[test]
fn test_delete_after_unwiring() {
    let mut sch = Schematic::new();
    let r1 = sch.add_component(ComponentKind::Resistor);
    let r2 = sch.add_component(ComponentKind::Resistor);
    let w = sch.connect(t(&r1, 2), t(&r2, 1)).unwrap();

    assert_eq!(sch.count_wires_at_terminal(&t(&r1, 2)).unwrap(), 1);
    assert!(sch.remove_component(&r1).is_err());

    sch.disconnect(&w).unwrap();
    assert!(sch.remove_component(&r1).is_ok());
    assert!(matches!(
        sch.count_wires_at_terminal(&t(&r1, 2)),
        Err(SchematicError::UnknownComponent { .. })
    ));
}
