//! # Gear Geometry Equations
//!
//! This module contains the closed-form involute gear formulas used by the
//! calculation engines. Keeping them in one place enables:
//! - Easy verification against gear standards and handbook tables
//! - One definition of each relation shared by forward and reverse paths
//! - Documentation of notation and angle conventions
//!
//! ## Modules
//!
//! - [`involute`] - Involute function, transverse pressure angle, span count
//! - [`gear`] - Diameters, tooth depths, base-tangent length and their inverses
//!
//! ## Conventions
//!
//! - **Angles**: radians at this layer; degree conversion happens in the engines
//! - **Lengths**: millimeters
//! - **Helix angle**: magnitude only, hand is not modeled
//!
//! ## References
//!
//! - ISO 53: Cylindrical gears - Standard basic rack tooth profile
//! - ISO 21771: Cylindrical involute gears and gear pairs - Concepts and geometry
//! - JIS B 1701-2: Cylindrical gears for general and heavy engineering - Module

pub mod gear;
pub mod involute;

// Re-export commonly used items
pub use involute::{involute, span_teeth_count, transverse_pressure_angle};

pub use gear::{
    addendum,
    base_diameter,
    base_tangent_length,
    dedendum,
    module_from_tip,
    pitch_diameter,
    profile_shift_from_tip,
    root_diameter,
    standard_tip_diameter,
    tip_diameter,
};
