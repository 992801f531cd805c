//! Id and designator allocation.
//!
//! Both ids and designators have the shape `<prefix>-<n>`. New ones take
//! the smallest `n >= 1` not already used, so freed numbers are reused.
//! A linear probe is fine at hand-drawn schematic sizes.

use std::collections::HashSet;

use log::debug;

use super::graph::Schematic;
use super::types::ComponentId;
use crate::error::{Result, SchematicError};

/// Whether `designator` looks like `<Prefix>-<positive integer>`.
///
/// The number is written without leading zeros, so `R-01` is rejected
/// rather than treated as distinct from `R-1`.
pub fn is_well_formed_designator(designator: &str) -> bool {
    let Some((prefix, number)) = designator.split_once('-') else {
        return false;
    };
    !prefix.is_empty()
        && !number.is_empty()
        && !number.starts_with('0')
        && number.bytes().all(|b| b.is_ascii_digit())
        && number.parse::<u64>().is_ok()
}

/// Smallest `<prefix>-<n>` not in `used`.
fn smallest_unused<'a>(prefix: &str, used: impl Iterator<Item = &'a str>) -> String {
    let used: HashSet<&str> = used.collect();
    let mut n = 1usize;
    loop {
        let candidate = format!("{prefix}-{n}");
        if !used.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}

impl Schematic {
    /// Generate a fresh component id with `prefix`.
    pub fn generate_id(&self, prefix: &str) -> String {
        smallest_unused(prefix, self.components.iter().map(|c| c.id.as_str()))
    }

    /// Generate a fresh wire id with the configured wire prefix.
    pub fn generate_wire_id(&self) -> String {
        smallest_unused(
            &self.config.wire_prefix,
            self.wires.iter().map(|w| w.id.as_str()),
        )
    }

    /// Generate a fresh designator with `prefix`.
    pub fn generate_designator(&self, prefix: &str) -> String {
        smallest_unused(
            prefix,
            self.components.iter().map(|c| c.designator.as_str()),
        )
    }

    /// Check every non-ground designator is well formed and unique.
    ///
    /// Reports the first offending component in registration order.
    pub fn validate_designators(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for component in self.components.iter().filter(|c| !c.is_ground()) {
            if !is_well_formed_designator(&component.designator) {
                return Err(SchematicError::MalformedDesignator {
                    component: component.id.clone(),
                    designator: component.designator.clone(),
                });
            }
        }
        for component in self.components.iter().filter(|c| !c.is_ground()) {
            if !seen.insert(component.designator.as_str()) {
                return Err(SchematicError::DuplicateDesignator {
                    component: component.id.clone(),
                    designator: component.designator.clone(),
                });
            }
        }
        Ok(())
    }

    /// Give every non-ground component with a malformed designator a fresh
    /// one built from its kind's prefix. Returns the ids that changed.
    ///
    /// Ground labels such as `GND` are left alone, as validation ignores them.
    pub fn repair_designators(&mut self) -> Vec<ComponentId> {
        let mut repaired = Vec::new();
        for idx in 0..self.components.len() {
            let component = &self.components[idx];
            if component.is_ground() || is_well_formed_designator(&component.designator) {
                continue;
            }
            let fresh = self.generate_designator(self.components[idx].kind().prefix());
            let component = &mut self.components[idx];
            debug!(
                "Repairing designator of '{}': '{}' -> '{}'",
                component.id, component.designator, fresh
            );
            component.designator = fresh;
            repaired.push(component.id.clone());
        }
        repaired
    }
}
