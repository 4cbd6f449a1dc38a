//! # Profile-Shift Reverse Calculation
//!
//! Recovers the profile-shift coefficient of an existing gear from its
//! measured tip (outside) diameter.
//!
//! ## Assumptions
//!
//! - The measured diameter differs from nominal only through profile shift;
//!   tip turning tolerances and tip shortening are not modeled
//! - Module, tooth count and helix angle are known (see
//!   [`super::module_estimate`] when the module is not)
//!
//! ## Example
//!
//! ```rust
//! use gear_core::calculations::reverse::{calculate, ReverseInput, ShiftClass};
//!
//! let input = ReverseInput {
//!     label: "Worn pinion".to_string(),
//!     module_mm: 2.0,
//!     teeth: 20,
//!     helix_angle_deg: 0.0,
//!     measured_tip_diameter_mm: 46.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.standard_tip_diameter_mm, 44.0);
//! assert_eq!(result.profile_shift, 0.5);
//! assert_eq!(result.shift_class, ShiftClass::Positive);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations;
use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::units::{Degrees, Radians};

/// |x| at or below this is reported as a standard (unshifted) gear.
pub const DEFAULT_SHIFT_TOLERANCE: f64 = 0.01;

/// Input parameters for a profile-shift reverse calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Worn pinion",
///   "module_mm": 2.0,
///   "teeth": 20,
///   "helix_angle_deg": 0.0,
///   "measured_tip_diameter_mm": 44.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseInput {
    /// User label for this gear
    #[serde(default)]
    pub label: String,

    /// Normal module m_n in millimeters
    pub module_mm: f64,

    /// Number of teeth z
    pub teeth: u32,

    /// Helix angle β in degrees (0 for spur gears)
    #[serde(default)]
    pub helix_angle_deg: f64,

    /// Measured tip (outside) diameter in millimeters
    pub measured_tip_diameter_mm: f64,
}

impl Default for ReverseInput {
    fn default() -> Self {
        ReverseInput {
            label: String::new(),
            module_mm: 2.0,
            teeth: 20,
            helix_angle_deg: 0.0,
            measured_tip_diameter_mm: 44.0,
        }
    }
}

impl ReverseInput {
    /// Strict validation for callers that want to reject bad input up front.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.module_mm > 0.0) || !self.module_mm.is_finite() {
            return Err(CalcError::invalid_input(
                "module_mm",
                self.module_mm.to_string(),
                "Module must be positive",
            ));
        }
        if self.teeth == 0 {
            return Err(CalcError::invalid_input(
                "teeth",
                self.teeth.to_string(),
                "Tooth count must be at least 1",
            ));
        }
        if !(self.helix_angle_deg.abs() < 90.0) {
            return Err(CalcError::invalid_input(
                "helix_angle_deg",
                self.helix_angle_deg.to_string(),
                "Helix angle must be between -90° and 90°",
            ));
        }
        if !(self.measured_tip_diameter_mm > 0.0) {
            return Err(CalcError::invalid_input(
                "measured_tip_diameter_mm",
                self.measured_tip_diameter_mm.to_string(),
                "Measured diameter must be positive",
            ));
        }
        Ok(())
    }
}

/// How a gear's tip diameter compares to the unshifted gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftClass {
    /// x above tolerance: larger outside diameter than standard
    Positive,
    /// x below negative tolerance: smaller outside diameter than standard
    Negative,
    /// |x| within tolerance
    Standard,
}

impl ShiftClass {
    /// Classify a shift coefficient against a symmetric tolerance band.
    pub fn from_shift(profile_shift: f64, tolerance: f64) -> Self {
        if profile_shift > tolerance {
            ShiftClass::Positive
        } else if profile_shift < -tolerance {
            ShiftClass::Negative
        } else {
            ShiftClass::Standard
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ShiftClass::Positive => "Positive shift",
            ShiftClass::Negative => "Negative shift",
            ShiftClass::Standard => "Standard gear (x ≈ 0)",
        }
    }
}

/// Results from a profile-shift reverse calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "profile_shift": 0.5,
///   "pitch_diameter_mm": 40.0,
///   "standard_tip_diameter_mm": 44.0,
///   "tip_deviation_mm": 2.0,
///   "shift_class": "Positive"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseResult {
    /// Profile-shift coefficient x implied by the measurement
    pub profile_shift: f64,

    /// Reference (pitch) diameter d
    pub pitch_diameter_mm: f64,

    /// Tip diameter of the unshifted gear, d + 2m_n
    pub standard_tip_diameter_mm: f64,

    /// Measured minus standard tip diameter
    pub tip_deviation_mm: f64,

    /// Classification against the tolerance the result was calculated with
    pub shift_class: ShiftClass,
}

impl ReverseResult {
    /// Surface ±inf/NaN (helix angle near 90°) as an error.
    pub fn check_finite(&self) -> CalcResult<()> {
        ensure_finite(&[
            ("profile_shift", self.profile_shift),
            ("pitch_diameter_mm", self.pitch_diameter_mm),
            ("standard_tip_diameter_mm", self.standard_tip_diameter_mm),
        ])
    }
}

/// Calculate the profile shift implied by a measured tip diameter.
///
/// # Returns
///
/// * `Some(ReverseResult)` - Shift coefficient and standard tip diameter
/// * `None` - Module not positive or zero teeth (incomplete input)
pub fn calculate(input: &ReverseInput) -> Option<ReverseResult> {
    calculate_with_tolerance(input, DEFAULT_SHIFT_TOLERANCE)
}

/// [`calculate`] with `|x| <= tolerance` counted as a standard gear.
pub fn calculate_with_tolerance(input: &ReverseInput, tolerance: f64) -> Option<ReverseResult> {
    if !(input.module_mm > 0.0) || input.teeth == 0 {
        debug!(module_mm = input.module_mm, teeth = input.teeth, "incomplete reverse input");
        return None;
    }

    let mn = input.module_mm;
    let beta: Radians = Degrees(input.helix_angle_deg).into();

    let d = equations::pitch_diameter(mn, input.teeth, beta.0);
    let da0 = equations::standard_tip_diameter(d, mn);
    let x = equations::profile_shift_from_tip(input.measured_tip_diameter_mm, da0, mn);

    debug!(label = %input.label, d, da0, x, "profile shift calculated");

    Some(ReverseResult {
        profile_shift: x,
        pitch_diameter_mm: d,
        standard_tip_diameter_mm: da0,
        tip_deviation_mm: input.measured_tip_diameter_mm - da0,
        shift_class: ShiftClass::from_shift(x, tolerance),
    })
}
