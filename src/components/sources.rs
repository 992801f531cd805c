//! Voltage and current sources.
//!
//! The same parameter shapes serve both voltage and current sources; the
//! component kind decides which quantity the amplitude is.

use serde::{Deserialize, Serialize};

/// A sinusoidal source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcSource {
    /// Peak value (volts or amperes)
    pub amplitude: f64,
    /// Frequency in Hz
    pub frequency: f64,
    /// Phase offset in degrees
    #[serde(default)]
    pub phase: f64,
}

impl AcSource {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }
}

impl Default for AcSource {
    fn default() -> Self {
        Self::new(1.0, 50.0, 0.0)
    }
}

/// A constant source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcSource {
    /// Source value (volts or amperes)
    pub amplitude: f64,
}

impl DcSource {
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl Default for DcSource {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ac_source_phase_defaults_to_zero() {
        let src: AcSource =
            serde_json::from_str(r#"{"amplitude": 2.0, "frequency": 60.0}"#).unwrap();
        assert_abs_diff_eq!(src.amplitude, 2.0);
        assert_abs_diff_eq!(src.frequency, 60.0);
        assert_abs_diff_eq!(src.phase, 0.0);
    }
}
