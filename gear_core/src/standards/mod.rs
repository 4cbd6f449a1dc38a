//! # Gear Standards
//!
//! Fixed tables from the gear standards: the module series and the
//! pressure-angle presets. These are immutable process-wide constants.

pub mod modules;
pub mod pressure_angles;

pub use modules::{is_standard_module, nearest_module, STANDARD_MODULES};
pub use pressure_angles::PressureAngle;
