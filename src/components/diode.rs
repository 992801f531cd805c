//! Diode parameters, passed through to the simulator untouched.

use serde::{Deserialize, Serialize};

/// Electrical parameters of a diode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diode {
    /// Forward voltage drop, typically 0.6-0.7V for silicon
    pub forward_voltage: f64,
    /// Reverse leakage current in amperes
    pub reverse_current: f64,
}

impl Diode {
    pub fn new(forward_voltage: f64, reverse_current: f64) -> Self {
        Self {
            forward_voltage,
            reverse_current,
        }
    }
}

impl Default for Diode {
    fn default() -> Self {
        Self::new(0.7, 1e-9)
    }
}
