//! # Gear Geometry Calculation
//!
//! Derives the reference circles, tooth depths and the base-tangent (span)
//! measurement of an involute cylindrical gear from its design parameters.
//!
//! ## Assumptions
//!
//! - ISO 53 basic rack: addendum 1.0·m_n, dedendum 1.25·m_n
//! - Helical gears are described in the normal system (m_n, α_n)
//! - Span measurement is taken normal to the tooth flank
//!
//! ## Span-tooth count
//!
//! The count `k` is either supplied by the caller or recommended from the
//! tooth count and transverse pressure angle. [`recommend_span_teeth`] and
//! [`calculate`] are separate so the caller decides when a fresh
//! recommendation replaces the current count; [`super::form::GeometryForm`]
//! implements that rule for interactive front ends.
//!
//! ## Example
//!
//! ```rust
//! use gear_core::calculations::geometry::{calculate, GeometryInput};
//!
//! let input = GeometryInput {
//!     label: "Pinion".to_string(),
//!     module_mm: 2.0,
//!     teeth: 20,
//!     pressure_angle_deg: 20.0,
//!     helix_angle_deg: 0.0,
//!     profile_shift: 0.0,
//!     span_teeth: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.pitch_diameter_mm, 40.0);
//! assert_eq!(result.span_teeth, 3);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::{self, involute};
use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::standards::PressureAngle;
use crate::units::{Degrees, Dms, Radians};

/// Input parameters for a gear geometry calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Pinion",
///   "module_mm": 2.0,
///   "teeth": 20,
///   "pressure_angle_deg": 20.0,
///   "helix_angle_deg": 0.0,
///   "profile_shift": 0.0,
///   "span_teeth": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryInput {
    /// User label for this gear (e.g., "Pinion", "G-2")
    #[serde(default)]
    pub label: String,

    /// Normal module m_n in millimeters
    pub module_mm: f64,

    /// Number of teeth z
    pub teeth: u32,

    /// Normal pressure angle α_n in degrees
    pub pressure_angle_deg: f64,

    /// Helix angle β in degrees (0 for spur gears)
    #[serde(default)]
    pub helix_angle_deg: f64,

    /// Profile-shift coefficient x (may be negative)
    #[serde(default)]
    pub profile_shift: f64,

    /// Span-tooth count k. `None` or a value below 1 means "recommend one".
    #[serde(default)]
    pub span_teeth: Option<i64>,
}

impl Default for GeometryInput {
    fn default() -> Self {
        GeometryInput {
            label: String::new(),
            module_mm: 2.0,
            teeth: 20,
            pressure_angle_deg: PressureAngle::Standard20.degrees(),
            helix_angle_deg: 0.0,
            profile_shift: 0.0,
            span_teeth: Some(3),
        }
    }
}

impl GeometryInput {
    /// Helix angle split into degrees/minutes/seconds.
    pub fn helix_dms(&self) -> Dms {
        Degrees(self.helix_angle_deg).into()
    }

    /// Explicit span-tooth count, if one is set and usable.
    pub fn explicit_span_teeth(&self) -> Option<u32> {
        self.span_teeth
            .filter(|&k| k >= 1)
            .map(|k| k.min(u32::MAX as i64) as u32)
    }

    /// Strict validation for callers that want to reject bad input up front.
    ///
    /// [`calculate`] itself never fails; it returns `None` for a
    /// non-positive module or zero teeth and lets extreme angles produce
    /// non-finite numbers.
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
        if !(self.pressure_angle_deg > 0.0 && self.pressure_angle_deg < 90.0) {
            return Err(CalcError::invalid_input(
                "pressure_angle_deg",
                self.pressure_angle_deg.to_string(),
                "Pressure angle must be between 0° and 90°",
            ));
        }
        if !(self.helix_angle_deg.abs() < 90.0) {
            return Err(CalcError::invalid_input(
                "helix_angle_deg",
                self.helix_angle_deg.to_string(),
                "Helix angle must be between -90° and 90°",
            ));
        }
        if !self.profile_shift.is_finite() {
            return Err(CalcError::invalid_input(
                "profile_shift",
                self.profile_shift.to_string(),
                "Profile shift must be a finite number",
            ));
        }
        Ok(())
    }
}

/// Results from a gear geometry calculation. All lengths in millimeters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "pitch_diameter_mm": 40.0,
///   "tip_diameter_mm": 44.0,
///   "root_diameter_mm": 35.0,
///   "base_diameter_mm": 37.5877,
///   "standard_tip_diameter_mm": 44.0,
///   "addendum_mm": 2.0,
///   "dedendum_mm": 2.5,
///   "whole_depth_mm": 4.5,
///   "transverse_pressure_angle_deg": 20.0,
///   "span_teeth": 3,
///   "span_teeth_recommended": true,
///   "base_tangent_length_mm": 15.3209
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryResult {
    /// Reference (pitch) diameter d = z·m_n/cos(β)
    pub pitch_diameter_mm: f64,

    /// Tip (outside) diameter d_a = d + 2h_a
    pub tip_diameter_mm: f64,

    /// Root diameter d_f = d − 2h_f
    pub root_diameter_mm: f64,

    /// Base diameter d_b = d·cos(α_t)
    pub base_diameter_mm: f64,

    /// Tip diameter of the same gear without profile shift, d + 2m_n
    pub standard_tip_diameter_mm: f64,

    /// Addendum h_a = m_n(1 + x)
    pub addendum_mm: f64,

    /// Dedendum h_f = m_n(1.25 − x)
    pub dedendum_mm: f64,

    /// Whole depth h = h_a + h_f
    pub whole_depth_mm: f64,

    /// Transverse pressure angle α_t in degrees
    pub transverse_pressure_angle_deg: f64,

    /// Span-tooth count actually used for W
    pub span_teeth: u32,

    /// True when `span_teeth` came from the recommendation
    pub span_teeth_recommended: bool,

    /// Base-tangent length W over `span_teeth` teeth
    pub base_tangent_length_mm: f64,
}

impl GeometryResult {
    /// Surface ±inf/NaN (helix or pressure angle near 90°) as an error.
    pub fn check_finite(&self) -> CalcResult<()> {
        ensure_finite(&[
            ("pitch_diameter_mm", self.pitch_diameter_mm),
            ("tip_diameter_mm", self.tip_diameter_mm),
            ("root_diameter_mm", self.root_diameter_mm),
            ("base_diameter_mm", self.base_diameter_mm),
            ("standard_tip_diameter_mm", self.standard_tip_diameter_mm),
            ("base_tangent_length_mm", self.base_tangent_length_mm),
        ])
    }
}

/// Recommended span-tooth count for a gear.
///
/// k = round( z·α_t/π + 0.5 ), never below one tooth.
///
/// Depends only on z, α_n and β, so callers recompute it whenever one of
/// those changes.
pub fn recommend_span_teeth(teeth: u32, pressure_angle_deg: f64, helix_angle_deg: f64) -> u32 {
    let alpha_n: Radians = Degrees(pressure_angle_deg).into();
    let beta: Radians = Degrees(helix_angle_deg).into();
    let alpha_t = involute::transverse_pressure_angle(alpha_n.0, beta.0);

    let k = involute::span_teeth_count(teeth, alpha_t).clamp(1, u32::MAX as i64) as u32;
    debug!(teeth, pressure_angle_deg, helix_angle_deg, k, "recommended span teeth");
    k
}

/// Calculate gear geometry.
///
/// # Returns
///
/// * `Some(GeometryResult)` - Derived dimensions
/// * `None` - Module not positive or zero teeth (incomplete input)
pub fn calculate(input: &GeometryInput) -> Option<GeometryResult> {
    if !(input.module_mm > 0.0) || input.teeth == 0 {
        debug!(module_mm = input.module_mm, teeth = input.teeth, "incomplete geometry input");
        return None;
    }

    let mn = input.module_mm;
    let z = input.teeth;
    let x = input.profile_shift;

    let alpha_n: Radians = Degrees(input.pressure_angle_deg).into();
    let beta: Radians = Degrees(input.helix_angle_deg).into();
    let alpha_t = involute::transverse_pressure_angle(alpha_n.0, beta.0);

    let d = equations::pitch_diameter(mn, z, beta.0);
    let db = equations::base_diameter(d, alpha_t);

    let ha = equations::addendum(mn, x);
    let hf = equations::dedendum(mn, x);

    let da = equations::tip_diameter(d, ha);
    let da0 = equations::standard_tip_diameter(d, mn);
    let df = equations::root_diameter(d, hf);

    let (k, recommended) = match input.explicit_span_teeth() {
        Some(k) => (k, false),
        None => (recommend_span_teeth(z, input.pressure_angle_deg, input.helix_angle_deg), true),
    };

    let w = equations::base_tangent_length(mn, z, k, alpha_n.0, alpha_t, x);

    debug!(label = %input.label, d, da, df, k, w, "gear geometry calculated");

    Some(GeometryResult {
        pitch_diameter_mm: d,
        tip_diameter_mm: da,
        root_diameter_mm: df,
        base_diameter_mm: db,
        standard_tip_diameter_mm: da0,
        addendum_mm: ha,
        dedendum_mm: hf,
        whole_depth_mm: ha + hf,
        transverse_pressure_angle_deg: Degrees::from(Radians(alpha_t)).0,
        span_teeth: k,
        span_teeth_recommended: recommended,
        base_tangent_length_mm: w,
    })
}
