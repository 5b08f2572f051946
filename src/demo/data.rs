//! Demo Dataset - Periodic Elements
//!
//! A small row type with a nested field, so the demo exercises dotted
//! property paths.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::path::{PropertyPath, ValueAccess};

/// Physical data nested inside an element row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    pub weight: f64,
}

/// One periodic element row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicElement {
    pub position: u32,
    pub name: String,
    pub data: ElementData,
    pub symbol: String,
}

impl PeriodicElement {
    pub fn new(position: u32, name: &str, weight: f64, symbol: &str) -> Self {
        Self {
            position,
            name: name.to_string(),
            data: ElementData { weight },
            symbol: symbol.to_string(),
        }
    }
}

impl ValueAccess for PeriodicElement {
    fn value_at(&self, path: &PropertyPath) -> Option<Value> {
        match path.as_str() {
            "position" => Some(json!(self.position)),
            "name" => Some(json!(self.name)),
            "symbol" => Some(json!(self.symbol)),
            "data.weight" => Some(json!(self.data.weight)),
            _ => None,
        }
    }
}

/// The demo rows, deliberately out of positional order
pub fn sample_elements() -> Vec<PeriodicElement> {
    vec![
        PeriodicElement::new(1, "Hydrogen", 1.0079, "H"),
        PeriodicElement::new(3, "Lithium", 6.941, "Li"),
        PeriodicElement::new(2, "Helium", 4.0026, "He"),
        PeriodicElement::new(4, "Beryllium", 9.0122, "Be"),
        PeriodicElement::new(5, "Boron", 10.811, "B"),
        PeriodicElement::new(6, "Carbon", 12.0107, "C"),
        PeriodicElement::new(7, "Nitrogen", 14.0067, "N"),
        PeriodicElement::new(8, "Oxygen", 15.9994, "O"),
        PeriodicElement::new(9, "Fluorine", 18.9984, "F"),
        PeriodicElement::new(10, "Neon", 20.1797, "Ne"),
    ]
}
