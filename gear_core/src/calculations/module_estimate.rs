//! # Module Estimation
//!
//! Guesses the module of an unknown gear from its measured tip diameter by
//! assuming it is unshifted, then snaps the guess to the standard series.
//! The snapped module is meant to seed a [`super::reverse`] calculation,
//! which then attributes the remaining difference to profile shift.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::reverse::{self, ReverseInput, ReverseResult};
use crate::equations;
use crate::standards::nearest_module;
use crate::units::{Degrees, Radians};

/// A module estimate before and after snapping to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModuleEstimate {
    /// m = d_a / ( z/cos(β) + 2 )
    pub raw_module_mm: f64,

    /// Closest standard module
    pub module_mm: f64,

    /// `module_mm - raw_module_mm`
    pub deviation_mm: f64,
}

/// Estimate the module with the raw value and snapping detail.
///
/// Returns `None` unless `measured_tip_diameter_mm > 0` and `teeth > 0`.
pub fn estimate_detailed(measured_tip_diameter_mm: f64, teeth: u32, helix_angle_deg: f64) -> Option<ModuleEstimate> {
    if !(measured_tip_diameter_mm > 0.0) || teeth == 0 {
        return None;
    }

    let beta: Radians = Degrees(helix_angle_deg).into();
    let raw = equations::module_from_tip(measured_tip_diameter_mm, teeth, beta.0);
    let snapped = nearest_module(raw);

    debug!(measured_tip_diameter_mm, teeth, raw, snapped, "module estimated");

    Some(ModuleEstimate {
        raw_module_mm: raw,
        module_mm: snapped,
        deviation_mm: snapped - raw,
    })
}

/// Estimate the standard module of a gear from its measured tip diameter.
///
/// # Example
/// ```rust
/// use gear_core::calculations::module_estimate::estimate;
///
/// // 44 / (20 + 2) = 2.0
/// assert_eq!(estimate(44.0, 20, 0.0), Some(2.0));
/// assert_eq!(estimate(0.0, 20, 0.0), None);
/// ```
pub fn estimate(measured_tip_diameter_mm: f64, teeth: u32, helix_angle_deg: f64) -> Option<f64> {
    estimate_detailed(measured_tip_diameter_mm, teeth, helix_angle_deg).map(|e| e.module_mm)
}

/// Snap the module of `input` from its measured diameter, then rerun the
/// reverse calculation with it.
///
/// Returns the updated input alongside the results so the caller can show
/// the module that was chosen. `shift_tolerance` sets the band classified as
/// a standard gear.
pub fn estimate_and_reverse(
    input: &ReverseInput,
    shift_tolerance: f64,
) -> Option<(ReverseInput, ModuleEstimate, ReverseResult)> {
    let estimate = estimate_detailed(input.measured_tip_diameter_mm, input.teeth, input.helix_angle_deg)?;

    let updated = ReverseInput {
        module_mm: estimate.module_mm,
        ..input.clone()
    };
    let result = reverse::calculate_with_tolerance(&updated, shift_tolerance)?;

    Some((updated, estimate, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::reverse::ShiftClass;

    #[test]
    fn test_exact_standard_module() {
        let e = estimate_detailed(44.0, 20, 0.0).unwrap();
        assert_eq!(e.raw_module_mm, 2.0);
        assert_eq!(e.module_mm, 2.0);
        assert_eq!(e.deviation_mm, 0.0);
    }

    #[test]
    fn test_shifted_gear_snaps_to_true_module() {
        // m = 3, z = 25, x = +0.4: d_a = 75 + 6·1.4 = 83.4, raw = 83.4/27 = 3.089
        let e = estimate_detailed(83.4, 25, 0.0).unwrap();
        assert!((e.raw_module_mm - 3.0889).abs() < 1e-3);
        assert_eq!(e.module_mm, 3.0);
    }

    #[test]
    fn test_helical_estimate() {
        // m_n = 2.5, z = 30, β = 20°: d_a0 = 2.5·(30/cos20° + 2) = 84.8123
        let da = 2.5 * (30.0 / 20.0_f64.to_radians().cos() + 2.0);
        assert_eq!(estimate(da, 30, 20.0), Some(2.5));
        // Same diameter read as a spur gear lands on a different module
        assert_ne!(estimate(da, 30, 0.0), Some(2.5));
    }

    #[test]
    fn test_preconditions() {
        assert_eq!(estimate(-1.0, 20, 0.0), None);
        assert_eq!(estimate(44.0, 0, 0.0), None);
        assert_eq!(estimate(f64::NAN, 20, 0.0), None);
    }

    #[test]
    fn test_estimate_and_reverse() {
        let input = ReverseInput {
            label: "Unknown".to_string(),
            module_mm: 1.0,
            teeth: 25,
            helix_angle_deg: 0.0,
            measured_tip_diameter_mm: 83.4,
        };
        let (updated, estimate, result) = estimate_and_reverse(&input, reverse::DEFAULT_SHIFT_TOLERANCE).unwrap();
        assert_eq!(updated.module_mm, 3.0);
        assert_eq!(estimate.module_mm, 3.0);
        assert!((result.profile_shift - 0.4).abs() < 1e-9);
        assert_eq!(result.shift_class, ShiftClass::Positive);
        assert_eq!(updated.label, "Unknown");
    }

    #[test]
    fn test_estimate_and_reverse_uses_given_tolerance() {
        // m = 2, z = 20, x = 0.02: d_a = 44.08
        let input = ReverseInput {
            measured_tip_diameter_mm: 44.08,
            ..ReverseInput::default()
        };
        let (_, _, strict) = estimate_and_reverse(&input, 0.01).unwrap();
        assert_eq!(strict.shift_class, ShiftClass::Positive);

        let (_, _, loose) = estimate_and_reverse(&input, 0.05).unwrap();
        assert_eq!(loose.shift_class, ShiftClass::Standard);
    }
}
