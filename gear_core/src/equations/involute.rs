//! # Involute Functions
//!
//! The involute function and the normal-to-transverse pressure angle
//! conversion. Both the forward and reverse engines build on these.
//!
//! ## Notation
//!
//! - `α_n` = Normal pressure angle (measured in the plane normal to the tooth)
//! - `α_t` = Transverse pressure angle (measured in the plane of rotation)
//! - `β` = Helix angle at the reference circle
//! - `inv(α)` = Involute function, `tan α − α`
//!
//! All angles here are radians.

use std::f64::consts::PI;

/// Involute function of a pressure angle.
///
/// # Formula
/// inv(α) = tan(α) − α
///
/// # Preconditions
/// `angle` must lie inside (−π/2, π/2). At ±π/2 the tangent diverges and the
/// result is meaningless; this is not checked.
///
/// # Example
/// ```rust
/// use gear_core::equations::involute::involute;
///
/// // inv(20°) = 0.014904
/// let inv20 = involute(20.0_f64.to_radians());
/// assert!((inv20 - 0.014904).abs() < 1e-6);
/// ```
#[inline]
pub fn involute(angle: f64) -> f64 {
    angle.tan() - angle
}

/// Transverse pressure angle of a helical gear.
///
/// # Formula
/// α_t = atan( tan(α_n) / cos(β) )
///
/// For a spur gear (β = 0) this is just α_n.
///
/// # Arguments
/// * `normal_pressure_angle` - α_n in radians
/// * `helix_angle` - β in radians, inside (−π/2, π/2)
///
/// # Example
/// ```rust
/// use gear_core::equations::involute::transverse_pressure_angle;
///
/// let alpha_n = 20.0_f64.to_radians();
/// assert!((transverse_pressure_angle(alpha_n, 0.0) - alpha_n).abs() < 1e-12);
///
/// // β = 30° widens α_t to about 22.796°
/// let alpha_t = transverse_pressure_angle(alpha_n, 30.0_f64.to_radians());
/// assert!((alpha_t.to_degrees() - 22.796).abs() < 1e-3);
/// ```
#[inline]
pub fn transverse_pressure_angle(normal_pressure_angle: f64, helix_angle: f64) -> f64 {
    (normal_pressure_angle.tan() / helix_angle.cos()).atan()
}

/// Theoretical span-tooth count for a base-tangent measurement.
///
/// # Formula
/// k = round( z·α_t/π + 0.5 )
///
/// Rounding is half away from zero. The result is returned as `i64` because
/// degenerate inputs (z = 0, negative angles) can push it below 1.
///
/// # Arguments
/// * `teeth` - Tooth count z
/// * `transverse_pressure_angle` - α_t in radians
#[inline]
pub fn span_teeth_count(teeth: u32, transverse_pressure_angle: f64) -> i64 {
    (teeth as f64 * transverse_pressure_angle / PI + 0.5).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_involute_table_values() {
        // Standard involute table values
        let inv_14_5 = involute(14.5_f64.to_radians());
        assert!(approx_eq(inv_14_5, 0.005545, 1e-6), "inv(14.5°) = {}", inv_14_5);

        let inv_25 = involute(25.0_f64.to_radians());
        assert!(approx_eq(inv_25, 0.029975, 1e-6), "inv(25°) = {}", inv_25);
    }

    #[test]
    fn test_involute_zero_and_odd() {
        assert_eq!(involute(0.0), 0.0);
        let a = 0.3;
        assert!(approx_eq(involute(-a), -involute(a), 1e-15));
    }

    #[test]
    fn test_transverse_angle_grows_with_helix() {
        let alpha_n = 20.0_f64.to_radians();
        let spur = transverse_pressure_angle(alpha_n, 0.0);
        let helical = transverse_pressure_angle(alpha_n, 15.0_f64.to_radians());
        assert!(helical > spur);
    }

    #[test]
    fn test_transverse_angle_symmetric_in_helix_hand() {
        let alpha_n = 20.0_f64.to_radians();
        let beta = 25.0_f64.to_radians();
        assert!(approx_eq(
            transverse_pressure_angle(alpha_n, beta),
            transverse_pressure_angle(alpha_n, -beta),
            1e-15
        ));
    }

    #[test]
    fn test_span_teeth_count_spur_20deg() {
        // z = 20, α = 20°: 20·0.349066/π + 0.5 = 2.722 → 3
        assert_eq!(span_teeth_count(20, 20.0_f64.to_radians()), 3);
        // z = 40, α = 20°: 4.944 → 5
        assert_eq!(span_teeth_count(40, 20.0_f64.to_radians()), 5);
    }

    #[test]
    fn test_span_teeth_count_zero_teeth() {
        // 0.5 rounds away from zero
        assert_eq!(span_teeth_count(0, 20.0_f64.to_radians()), 1);
    }
}
