//! WASM bindings for Schematic Core.
//!
//! This module provides JavaScript-friendly bindings for a browser-based
//! schematic editor. The editor does its own hit-testing and hands over
//! component ids and terminal numbers.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSchematic } from 'schematic_core';
//!
//! await init();
//!
//! const sch = new WasmSchematic();
//! const r1 = sch.add_component('resistor');
//! const gnd = sch.add_component('ground');
//! sch.connect(r1, 1, gnd, 1);
//! sch.connect(r1, 2, gnd, 1);
//!
//! sch.compile();
//! const netlist = JSON.parse(sch.netlist_json());
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{ComponentId, Schematic, Terminal, WireId};
use crate::components::ComponentKind;
use crate::error::SchematicError;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: SchematicError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible handle to an editable schematic.
#[wasm_bindgen]
pub struct WasmSchematic {
    schematic: Schematic,
}

#[wasm_bindgen]
impl WasmSchematic {
    /// Create an empty schematic.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSchematic {
        WasmSchematic {
            schematic: Schematic::new(),
        }
    }

    /// Load a schematic from its saved JSON form.
    #[wasm_bindgen]
    pub fn from_json(json: &str) -> Result<WasmSchematic, JsValue> {
        let schematic = Schematic::from_json(json).map_err(to_js)?;
        Ok(WasmSchematic { schematic })
    }

    /// Place a component by kind name (`"resistor"`) or prefix (`"R"`).
    ///
    /// # Returns
    /// The new component's id.
    #[wasm_bindgen]
    pub fn add_component(&mut self, kind: &str) -> Result<String, JsValue> {
        let kind = ComponentKind::from_name(kind)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown component kind '{kind}'")))?;
        Ok(self.schematic.add_component(kind).0)
    }

    #[wasm_bindgen]
    pub fn remove_component(&mut self, id: &str) -> Result<(), JsValue> {
        self.schematic
            .remove_component(&ComponentId::from(id))
            .map(|_| ())
            .map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn set_designator(&mut self, id: &str, designator: &str) -> Result<(), JsValue> {
        self.schematic
            .set_designator(&ComponentId::from(id), designator)
            .map_err(to_js)
    }

    /// Draw a wire between two terminals.
    ///
    /// # Returns
    /// The new wire's id, or the reason the wire was refused.
    #[wasm_bindgen]
    pub fn connect(
        &mut self,
        comp_a: &str,
        terminal_a: usize,
        comp_b: &str,
        terminal_b: usize,
    ) -> Result<String, JsValue> {
        self.schematic
            .connect(
                Terminal::new(comp_a, terminal_a),
                Terminal::new(comp_b, terminal_b),
            )
            .map(|id| id.0)
            .map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn disconnect(&mut self, wire_id: &str) -> Result<(), JsValue> {
        self.schematic
            .disconnect(&WireId::from(wire_id))
            .map(|_| ())
            .map_err(to_js)
    }

    /// Number of wires on a terminal, for deciding whether a delete will
    /// orphan a net.
    #[wasm_bindgen]
    pub fn count_wires_at_terminal(&self, comp: &str, terminal: usize) -> Result<usize, JsValue> {
        self.schematic
            .count_wires_at_terminal(&Terminal::new(comp, terminal))
            .map_err(to_js)
    }

    /// Run the compile stages. Throws the first problem found.
    #[wasm_bindgen]
    pub fn compile(&mut self) -> Result<(), JsValue> {
        self.schematic.compile().map_err(to_js)
    }

    /// Fix malformed designators. Returns how many changed.
    #[wasm_bindgen]
    pub fn repair_designators(&mut self) -> usize {
        self.schematic.repair_designators().len()
    }

    /// The netlist as a JSON array.
    #[wasm_bindgen]
    pub fn netlist_json(&self) -> Result<String, JsValue> {
        self.schematic
            .get_netlist()
            .and_then(|n| n.to_json())
            .map_err(to_js)
    }

    /// The saved JSON form.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.schematic.to_json().map_err(to_js)
    }
}

impl Default for WasmSchematic {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
