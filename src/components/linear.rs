//! Linear passive components: Resistor, Capacitor, Inductor.

use serde::{Deserialize, Serialize};

/// Electrical parameters of a resistor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resistor {
    /// Resistance in ohms
    pub value: f64,
}

impl Resistor {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Default for Resistor {
    fn default() -> Self {
        Self::new(1_000.0)
    }
}

/// Electrical parameters of a capacitor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capacitor {
    /// Capacitance in farads
    pub value: f64,
    /// Voltage across the plates at t = 0
    #[serde(default)]
    pub initial_voltage: f64,
}

impl Capacitor {
    pub fn new(value: f64, initial_voltage: f64) -> Self {
        Self {
            value,
            initial_voltage,
        }
    }
}

impl Default for Capacitor {
    fn default() -> Self {
        Self::new(1e-6, 0.0)
    }
}

/// Electrical parameters of an inductor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inductor {
    /// Inductance in henries
    pub value: f64,
    /// Current through the coil at t = 0
    #[serde(default)]
    pub initial_current: f64,
}

impl Inductor {
    pub fn new(value: f64, initial_current: f64) -> Self {
        Self {
            value,
            initial_current,
        }
    }
}

impl Default for Inductor {
    fn default() -> Self {
        Self::new(1e-3, 0.0)
    }
}
