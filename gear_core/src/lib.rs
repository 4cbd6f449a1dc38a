//! # gear_core - Involute Gear Geometry Engine
//!
//! `gear_core` is the computational heart of Involute. It converts standard
//! gear-design parameters (module, tooth count, pressure angle, helix angle,
//! profile shift) into manufacturable and inspectable dimensions, and works
//! backwards from a measured outside diameter to the profile shift.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Absent, not failed**: Incomplete input yields `None`; strict checks are opt-in
//! - **One formula, one place**: Engines compose the functions in [`equations`]
//!
//! ## Quick Start
//!
//! ```rust
//! use gear_core::calculations::geometry::{calculate, GeometryInput};
//!
//! let gear = GeometryInput {
//!     profile_shift: 0.25,
//!     span_teeth: None,
//!     ..GeometryInput::default()
//! };
//!
//! let result = calculate(&gear).unwrap();
//! assert_eq!(result.standard_tip_diameter_mm, 44.0);
//!
//! // Serialize to JSON for display or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Geometry, reverse shift and module estimation engines
//! - [`equations`] - Involute and gear dimension formulas
//! - [`standards`] - Standard module series and pressure-angle presets
//! - [`units`] - Angle types and degree/minute/second conversion
//! - [`settings`] - Front-end defaults stored as JSON
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod settings;
pub mod standards;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    CalculationItem, CalculationMode, CalculationOutcome, GeometryForm, GeometryInput, GeometryResult,
    ModuleEstimate, ReverseInput, ReverseResult, ShiftClass,
};
pub use errors::{CalcError, CalcResult};
pub use settings::{load_settings, save_settings, GearSettings};
pub use standards::{nearest_module, PressureAngle, STANDARD_MODULES};
pub use units::{Degrees, Dms, Radians};
