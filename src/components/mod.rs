//! Component records and their electrical parameters.
//!
//! Every component kind the editor can place:
//! - Linear: Resistor, Capacitor, Inductor
//! - Nonlinear: Diode
//! - Sources: AC/DC voltage, AC/DC current
//! - Ground (one terminal, no parameters)
//!
//! The kind set is closed. Parameters carry only electrical fields; how a
//! kind is drawn belongs to the front end.

mod diode;
mod linear;
mod sources;

pub use diode::Diode;
pub use linear::{Capacitor, Inductor, Resistor};
pub use sources::{AcSource, DcSource};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::circuit::{ComponentId, Placement};
use crate::error::{Result, SchematicError};

/// Component kinds supported by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Resistor,
    Capacitor,
    Inductor,
    Diode,
    AcVoltage,
    DcVoltage,
    AcCurrent,
    DcCurrent,
    Ground,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::Resistor,
        ComponentKind::Capacitor,
        ComponentKind::Inductor,
        ComponentKind::Diode,
        ComponentKind::AcVoltage,
        ComponentKind::DcVoltage,
        ComponentKind::AcCurrent,
        ComponentKind::DcCurrent,
        ComponentKind::Ground,
    ];

    /// Prefix used for both ids and designators of this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            ComponentKind::Resistor => "R",
            ComponentKind::Capacitor => "C",
            ComponentKind::Inductor => "L",
            ComponentKind::Diode => "D",
            ComponentKind::AcVoltage => "Uac",
            ComponentKind::DcVoltage => "Udc",
            ComponentKind::AcCurrent => "Iac",
            ComponentKind::DcCurrent => "Idc",
            ComponentKind::Ground => crate::GROUND_PREFIX,
        }
    }

    /// Human-readable name, also the `kind` tag in documents.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Resistor => "resistor",
            ComponentKind::Capacitor => "capacitor",
            ComponentKind::Inductor => "inductor",
            ComponentKind::Diode => "diode",
            ComponentKind::AcVoltage => "ac_voltage",
            ComponentKind::DcVoltage => "dc_voltage",
            ComponentKind::AcCurrent => "ac_current",
            ComponentKind::DcCurrent => "dc_current",
            ComponentKind::Ground => "ground",
        }
    }

    /// Look a kind up by its name or its prefix.
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s) || k.prefix() == s)
    }

    pub fn terminal_count(self) -> usize {
        if self.is_ground() {
            1
        } else {
            2
        }
    }

    /// Ground is exempt from the connectivity and designator checks.
    pub fn is_ground(self) -> bool {
        self == ComponentKind::Ground
    }

    pub fn default_parameters(self) -> Parameters {
        match self {
            ComponentKind::Resistor => Parameters::Resistor(Resistor::default()),
            ComponentKind::Capacitor => Parameters::Capacitor(Capacitor::default()),
            ComponentKind::Inductor => Parameters::Inductor(Inductor::default()),
            ComponentKind::Diode => Parameters::Diode(Diode::default()),
            ComponentKind::AcVoltage => Parameters::AcVoltage(AcSource::default()),
            ComponentKind::DcVoltage => Parameters::DcVoltage(DcSource::default()),
            ComponentKind::AcCurrent => Parameters::AcCurrent(AcSource::default()),
            ComponentKind::DcCurrent => Parameters::DcCurrent(DcSource::default()),
            ComponentKind::Ground => Parameters::Ground,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific electrical parameters, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Parameters {
    Resistor(Resistor),
    Capacitor(Capacitor),
    Inductor(Inductor),
    Diode(Diode),
    AcVoltage(AcSource),
    DcVoltage(DcSource),
    AcCurrent(AcSource),
    DcCurrent(DcSource),
    Ground,
}

impl Parameters {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Parameters::Resistor(_) => ComponentKind::Resistor,
            Parameters::Capacitor(_) => ComponentKind::Capacitor,
            Parameters::Inductor(_) => ComponentKind::Inductor,
            Parameters::Diode(_) => ComponentKind::Diode,
            Parameters::AcVoltage(_) => ComponentKind::AcVoltage,
            Parameters::DcVoltage(_) => ComponentKind::DcVoltage,
            Parameters::AcCurrent(_) => ComponentKind::AcCurrent,
            Parameters::DcCurrent(_) => ComponentKind::DcCurrent,
            Parameters::Ground => ComponentKind::Ground,
        }
    }

    /// All numeric fields as `(name, value)` pairs.
    pub fn fields(&self) -> Vec<(&'static str, f64)> {
        match self {
            Parameters::Resistor(r) => vec![("value", r.value)],
            Parameters::Capacitor(c) => {
                vec![("value", c.value), ("initial_voltage", c.initial_voltage)]
            }
            Parameters::Inductor(l) => {
                vec![("value", l.value), ("initial_current", l.initial_current)]
            }
            Parameters::Diode(d) => vec![
                ("forward_voltage", d.forward_voltage),
                ("reverse_current", d.reverse_current),
            ],
            Parameters::AcVoltage(s) | Parameters::AcCurrent(s) => vec![
                ("amplitude", s.amplitude),
                ("frequency", s.frequency),
                ("phase", s.phase),
            ],
            Parameters::DcVoltage(s) | Parameters::DcCurrent(s) => vec![("amplitude", s.amplitude)],
            Parameters::Ground => Vec::new(),
        }
    }

    /// Reject NaN and infinite values, which the document format cannot carry.
    pub fn check(&self, component: &ComponentId) -> Result<()> {
        for (param, value) in self.fields() {
            if !value.is_finite() {
                return Err(SchematicError::InvalidParameter {
                    component: component.clone(),
                    param: param.to_string(),
                    message: format!("{value} is not a finite number"),
                });
            }
        }
        Ok(())
    }
}

/// A placed component.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    /// User-facing label, expected to look like `R-3`
    pub designator: String,
    pub parameters: Parameters,
    pub placement: Placement,
}

impl Component {
    /// Create a component with the kind's default parameters.
    pub fn new(id: ComponentId, designator: String, kind: ComponentKind) -> Self {
        Self {
            id,
            designator,
            parameters: kind.default_parameters(),
            placement: Placement::default(),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.parameters.kind()
    }

    pub fn is_ground(&self) -> bool {
        self.kind().is_ground()
    }

    pub fn terminal_count(&self) -> usize {
        self.kind().terminal_count()
    }

    /// 1-based terminal indices of this component.
    pub fn terminals(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.terminal_count()
    }

    pub fn has_terminal(&self, index: usize) -> bool {
        self.terminals().contains(&index)
    }
}
