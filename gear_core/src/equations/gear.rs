//! # Gear Dimension Formulas
//!
//! Reference-circle, tooth-depth and span-measurement formulas for involute
//! cylindrical gears with the basic rack of ISO 53 / JIS B 1701
//! (addendum 1.0·m, dedendum 1.25·m).
//!
//! ## Notation
//!
//! - `m_n` = Normal module (mm)
//! - `z` = Number of teeth
//! - `x` = Profile-shift coefficient
//! - `d` = Reference (pitch) diameter
//! - `d_a` = Tip (outside) diameter, `d_a0` the same with x = 0
//! - `d_f` = Root diameter
//! - `d_b` = Base diameter
//! - `h_a`, `h_f` = Addendum, dedendum
//! - `k`, `W` = Span-tooth count and base-tangent length
//!
//! Angles are radians, lengths millimeters.

use std::f64::consts::PI;

use super::involute::involute;

/// Addendum of the basic rack, in modules.
pub const ADDENDUM_COEFFICIENT: f64 = 1.0;

/// Dedendum of the basic rack, in modules (includes 0.25·m tip clearance).
pub const DEDENDUM_COEFFICIENT: f64 = 1.25;

// =============================================================================
// REFERENCE CIRCLES
// =============================================================================

/// Reference (pitch) diameter.
///
/// # Formula
/// d = z·m_n / cos(β)
///
/// # Example
/// ```rust
/// use gear_core::equations::gear::pitch_diameter;
///
/// assert_eq!(pitch_diameter(2.0, 20, 0.0), 40.0);
/// ```
#[inline]
pub fn pitch_diameter(module_mm: f64, teeth: u32, helix_angle: f64) -> f64 {
    teeth as f64 * module_mm / helix_angle.cos()
}

/// Base diameter.
///
/// # Formula
/// d_b = d·cos(α_t)
#[inline]
pub fn base_diameter(pitch_diameter_mm: f64, transverse_pressure_angle: f64) -> f64 {
    pitch_diameter_mm * transverse_pressure_angle.cos()
}

// =============================================================================
// TOOTH DEPTH
// =============================================================================

/// Addendum with profile shift.
///
/// # Formula
/// h_a = m_n·(1 + x)
#[inline]
pub fn addendum(module_mm: f64, profile_shift: f64) -> f64 {
    module_mm * (ADDENDUM_COEFFICIENT + profile_shift)
}

/// Dedendum with profile shift.
///
/// # Formula
/// h_f = m_n·(1.25 − x)
#[inline]
pub fn dedendum(module_mm: f64, profile_shift: f64) -> f64 {
    module_mm * (DEDENDUM_COEFFICIENT - profile_shift)
}

/// Tip diameter from pitch diameter and addendum.
///
/// # Formula
/// d_a = d + 2·h_a
#[inline]
pub fn tip_diameter(pitch_diameter_mm: f64, addendum_mm: f64) -> f64 {
    pitch_diameter_mm + 2.0 * addendum_mm
}

/// Tip diameter of the unshifted gear.
///
/// # Formula
/// d_a0 = d + 2·m_n
///
/// # Example
/// ```rust
/// use gear_core::equations::gear::standard_tip_diameter;
///
/// assert_eq!(standard_tip_diameter(40.0, 2.0), 44.0);
/// ```
#[inline]
pub fn standard_tip_diameter(pitch_diameter_mm: f64, module_mm: f64) -> f64 {
    pitch_diameter_mm + 2.0 * ADDENDUM_COEFFICIENT * module_mm
}

/// Root diameter from pitch diameter and dedendum.
///
/// # Formula
/// d_f = d − 2·h_f
#[inline]
pub fn root_diameter(pitch_diameter_mm: f64, dedendum_mm: f64) -> f64 {
    pitch_diameter_mm - 2.0 * dedendum_mm
}

// =============================================================================
// SPAN MEASUREMENT
// =============================================================================

/// Base-tangent length over `k` teeth, measured normal to the flank.
///
/// # Formula
/// W = m_n·cos(α_n)·( π·(k − 0.5) + z·inv(α_t) ) + 2·x·m_n·sin(α_n)
///
/// # Arguments
/// * `module_mm` - Normal module m_n
/// * `teeth` - Tooth count z
/// * `span_teeth` - Teeth spanned k (any value is accepted)
/// * `normal_pressure_angle` - α_n in radians
/// * `transverse_pressure_angle` - α_t in radians
/// * `profile_shift` - x
///
/// # Example
/// ```rust
/// use gear_core::equations::gear::base_tangent_length;
///
/// let a = 20.0_f64.to_radians();
/// // m = 2, z = 20, k = 3, spur, unshifted: W ≈ 15.3209 mm
/// let w = base_tangent_length(2.0, 20, 3, a, a, 0.0);
/// assert!((w - 15.3209).abs() < 1e-3);
/// ```
#[inline]
pub fn base_tangent_length(
    module_mm: f64,
    teeth: u32,
    span_teeth: u32,
    normal_pressure_angle: f64,
    transverse_pressure_angle: f64,
    profile_shift: f64,
) -> f64 {
    let span_term = PI * (span_teeth as f64 - 0.5);
    let involute_term = teeth as f64 * involute(transverse_pressure_angle);
    let shift_term = 2.0 * profile_shift * module_mm * normal_pressure_angle.sin();

    module_mm * normal_pressure_angle.cos() * (span_term + involute_term) + shift_term
}

// =============================================================================
// INVERSE RELATIONS
// =============================================================================

/// Profile shift implied by a tip diameter.
///
/// Closed-form inverse of d_a = d + 2·m_n·(1 + x):
///
/// # Formula
/// x = (d_a − d_a0) / (2·m_n)
#[inline]
pub fn profile_shift_from_tip(tip_diameter_mm: f64, standard_tip_diameter_mm: f64, module_mm: f64) -> f64 {
    (tip_diameter_mm - standard_tip_diameter_mm) / (2.0 * module_mm)
}

/// Module implied by an unshifted tip diameter.
///
/// Inverse of d_a0 = m_n·(z/cos(β) + 2):
///
/// # Formula
/// m = d_a / ( z/cos(β) + 2 )
///
/// # Example
/// ```rust
/// use gear_core::equations::gear::module_from_tip;
///
/// assert_eq!(module_from_tip(44.0, 20, 0.0), 2.0);
/// ```
#[inline]
pub fn module_from_tip(tip_diameter_mm: f64, teeth: u32, helix_angle: f64) -> f64 {
    tip_diameter_mm / (teeth as f64 / helix_angle.cos() + 2.0 * ADDENDUM_COEFFICIENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_pitch_diameter_spur_exact() {
        assert_eq!(pitch_diameter(2.5, 33, 0.0), 82.5);
    }

    #[test]
    fn test_pitch_diameter_helical() {
        // cos(60°) = 0.5 doubles the pitch diameter
        let d = pitch_diameter(2.0, 20, 60.0_f64.to_radians());
        assert!(approx_eq(d, 80.0), "d = {}", d);
    }

    #[test]
    fn test_depth_sums_to_2_25_modules() {
        for x in [-0.5, 0.0, 0.3, 1.0] {
            let h = addendum(3.0, x) + dedendum(3.0, x);
            assert!(approx_eq(h, 6.75), "x = {}, h = {}", x, h);
        }
    }

    #[test]
    fn test_tip_and_root_spur() {
        let d = pitch_diameter(2.0, 20, 0.0);
        assert!(approx_eq(tip_diameter(d, addendum(2.0, 0.0)), 44.0));
        assert!(approx_eq(root_diameter(d, dedendum(2.0, 0.0)), 35.0));
    }

    #[test]
    fn test_shifted_tip_matches_standard_plus_shift() {
        let d = pitch_diameter(2.0, 20, 0.0);
        let da = tip_diameter(d, addendum(2.0, 0.5));
        assert!(approx_eq(da, standard_tip_diameter(d, 2.0) + 2.0 * 0.5 * 2.0));
    }

    #[test]
    fn test_base_tangent_length_shift_term() {
        // Shifting by x adds 2·x·m·sin(α_n) to W
        let a = 20.0_f64.to_radians();
        let w0 = base_tangent_length(2.0, 20, 3, a, a, 0.0);
        let w1 = base_tangent_length(2.0, 20, 3, a, a, 0.25);
        assert!(approx_eq(w1 - w0, 2.0 * 0.25 * 2.0 * a.sin()));
    }

    #[test]
    fn test_base_tangent_length_per_tooth_is_base_pitch() {
        // Each extra spanned tooth adds one normal base pitch π·m·cos(α_n)
        let a = 20.0_f64.to_radians();
        let w3 = base_tangent_length(2.0, 20, 3, a, a, 0.0);
        let w4 = base_tangent_length(2.0, 20, 4, a, a, 0.0);
        assert!(approx_eq(w4 - w3, PI * 2.0 * a.cos()));
    }

    #[test]
    fn test_inverse_relations() {
        assert!(approx_eq(profile_shift_from_tip(46.0, 44.0, 2.0), 0.5));
        assert!(approx_eq(profile_shift_from_tip(43.0, 44.0, 2.0), -0.25));

        let beta = 20.0_f64.to_radians();
        let d = pitch_diameter(3.0, 31, beta);
        let da0 = standard_tip_diameter(d, 3.0);
        assert!(approx_eq(module_from_tip(da0, 31, beta), 3.0));
    }
}
