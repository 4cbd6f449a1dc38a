//! # Settings
//!
//! Defaults and display preferences for front ends, stored as JSON.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "geometry": { "module_mm": 2.0, "teeth": 20, "pressure_angle_deg": 20.0 },
//!   "reverse": { "module_mm": 2.0, "teeth": 20, "measured_tip_diameter_mm": 44.0 },
//!   "precision": { "length": 3, "coefficient": 4 },
//!   "shift_tolerance": 0.01
//! }
//! ```
//!
//! Missing sections fall back to their defaults.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gear_core::settings::{load_settings, GearSettings};
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("gearcalc.json"))
//!     .unwrap_or_else(|_| GearSettings::default());
//! println!("lengths shown to {} places", settings.precision.length);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{GeometryInput, ReverseInput};
use crate::calculations::reverse::DEFAULT_SHIFT_TOLERANCE;
use crate::errors::{CalcError, CalcResult};

/// Current schema version for settings files
pub const SETTINGS_VERSION: &str = "0.1.0";

/// Front-end defaults and preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearSettings {
    /// Schema version of the file this came from
    pub version: String,

    /// Starting values for geometry calculations
    pub geometry: GeometryInput,

    /// Starting values for reverse calculations
    pub reverse: ReverseInput,

    /// Decimal places for display
    pub precision: DisplayPrecision,

    /// |x| at or below this is reported as a standard gear
    pub shift_tolerance: f64,
}

impl Default for GearSettings {
    fn default() -> Self {
        GearSettings {
            version: SETTINGS_VERSION.to_string(),
            geometry: GeometryInput::default(),
            reverse: ReverseInput::default(),
            precision: DisplayPrecision::default(),
            shift_tolerance: DEFAULT_SHIFT_TOLERANCE,
        }
    }
}

/// Decimal places used when printing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPrecision {
    /// Lengths in millimeters
    pub length: usize,

    /// Dimensionless coefficients (profile shift)
    pub coefficient: usize,
}

impl Default for DisplayPrecision {
    fn default() -> Self {
        DisplayPrecision {
            length: 3,
            coefficient: 4,
        }
    }
}

impl DisplayPrecision {
    pub fn format_length(&self, value_mm: f64) -> String {
        format!("{:.*}", self.length, value_mm)
    }

    pub fn format_coefficient(&self, value: f64) -> String {
        format!("{:.*}", self.coefficient, value)
    }
}

/// Load settings from a JSON file.
///
/// # Errors
///
/// * `FileError` - File can't be read
/// * `SerializationError` - Invalid JSON
/// * `VersionMismatch` - File written by an incompatible version
pub fn load_settings(path: &Path) -> CalcResult<GearSettings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let settings: GearSettings =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&settings.version)?;

    debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// Save settings as pretty-printed JSON.
pub fn save_settings(settings: &GearSettings, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(settings).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    fs::write(path, json)
        .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))?;

    debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SETTINGS_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SETTINGS_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_reference_gear() {
        let s = GearSettings::default();
        assert_eq!(s.geometry.module_mm, 2.0);
        assert_eq!(s.geometry.teeth, 20);
        assert_eq!(s.geometry.span_teeth, Some(3));
        assert_eq!(s.reverse.measured_tip_diameter_mm, 44.0);
        assert_eq!(s.precision.length, 3);
        assert_eq!(s.shift_tolerance, 0.01);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gearcalc.json");

        let mut settings = GearSettings::default();
        settings.geometry.teeth = 37;
        settings.precision.length = 2;

        save_settings(&settings, &path).unwrap();
        let loaded = load_settings(&path).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "version": "0.1.0", "shift_tolerance": 0.02 }"#).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.shift_tolerance, 0.02);
        assert_eq!(loaded.geometry, GeometryInput::default());
        assert_eq!(loaded.precision, DisplayPrecision::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_settings(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_format() {
        let p = DisplayPrecision::default();
        assert_eq!(p.format_length(15.320878), "15.321");
        assert_eq!(p.format_coefficient(0.5), "0.5000");
    }
}
