//! # Gear Calculations
//!
//! This module contains the gear calculation engines. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Option<*Result>` - Pure calculation function;
//!   `None` means the input is incomplete (module ≤ 0 or no teeth)
//!
//! ## Available Calculations
//!
//! - [`geometry`] - Diameters, tooth depths and span measurement from design data
//! - [`reverse`] - Profile shift from a measured tip diameter
//! - [`module_estimate`] - Standard module from a measured tip diameter
//! - [`form`] - Event-driven parameter state with span-count override handling

pub mod form;
pub mod geometry;
pub mod module_estimate;
pub mod reverse;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use form::GeometryForm;
pub use geometry::{recommend_span_teeth, GeometryInput, GeometryResult};
pub use module_estimate::ModuleEstimate;
pub use reverse::{ReverseInput, ReverseResult, ShiftClass};

/// Which direction a calculation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CalculationMode {
    /// Design parameters to dimensions
    #[default]
    Geometry,
    /// Measured tip diameter to profile shift
    Reverse,
}

/// Enum wrapper for all calculation types.
///
/// Lets a batch of mixed calculations live in one collection with clean
/// tagged serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Forward gear geometry calculation
    Geometry(GeometryInput),
    /// Profile-shift reverse calculation
    Reverse(ReverseInput),
}

/// Output of [`CalculationItem::evaluate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    Geometry(GeometryResult),
    Reverse(ReverseResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Geometry(g) => &g.label,
            CalculationItem::Reverse(r) => &r.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Geometry(_) => "Geometry",
            CalculationItem::Reverse(_) => "Reverse",
        }
    }

    /// Direction of this calculation
    pub fn mode(&self) -> CalculationMode {
        match self {
            CalculationItem::Geometry(_) => CalculationMode::Geometry,
            CalculationItem::Reverse(_) => CalculationMode::Reverse,
        }
    }

    /// Run the matching engine. `None` for incomplete input.
    ///
    /// `shift_tolerance` is the band a reverse result classifies as standard.
    pub fn evaluate(&self, shift_tolerance: f64) -> Option<CalculationOutcome> {
        match self {
            CalculationItem::Geometry(g) => geometry::calculate(g).map(CalculationOutcome::Geometry),
            CalculationItem::Reverse(r) => {
                reverse::calculate_with_tolerance(r, shift_tolerance).map(CalculationOutcome::Reverse)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_dispatch() {
        let item = CalculationItem::Reverse(ReverseInput {
            label: "R-1".to_string(),
            measured_tip_diameter_mm: 46.0,
            ..ReverseInput::default()
        });
        assert_eq!(item.label(), "R-1");
        assert_eq!(item.calc_type(), "Reverse");
        assert_eq!(item.mode(), CalculationMode::Reverse);

        match item.evaluate(reverse::DEFAULT_SHIFT_TOLERANCE) {
            Some(CalculationOutcome::Reverse(r)) => assert_eq!(r.profile_shift, 0.5),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_item_incomplete() {
        let item = CalculationItem::Geometry(GeometryInput {
            teeth: 0,
            ..GeometryInput::default()
        });
        assert!(item.evaluate(reverse::DEFAULT_SHIFT_TOLERANCE).is_none());
    }

    #[test]
    fn test_item_tolerance_reaches_reverse_class() {
        // x = 0.02
        let item = CalculationItem::Reverse(ReverseInput {
            measured_tip_diameter_mm: 44.08,
            ..ReverseInput::default()
        });
        match item.evaluate(0.05) {
            Some(CalculationOutcome::Reverse(r)) => assert_eq!(r.shift_class, ShiftClass::Standard),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_item_serialization() {
        let json = r#"{"type": "Geometry", "module_mm": 2.0, "teeth": 20, "pressure_angle_deg": 20.0}"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.mode(), CalculationMode::Geometry);

        let batch = vec![item.clone(), CalculationItem::Reverse(ReverseInput::default())];
        let out = serde_json::to_string(&batch).unwrap();
        let back: Vec<CalculationItem> = serde_json::from_str(&out).unwrap();
        assert_eq!(back, batch);
    }
}
