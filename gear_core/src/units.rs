//! # Angle Units
//!
//! Type-safe wrappers for the angles that flow through gear calculations.
//! Design inputs are entered in degrees, the trigonometry runs in radians,
//! and helix angles are often read off drawings as degrees/minutes/seconds.
//!
//! Lengths stay plain `f64` millimeters with an `_mm` field suffix; every
//! length in this crate is in millimeters.
//!
//! ## Example
//!
//! ```rust
//! use gear_core::units::{Degrees, Dms, Radians};
//!
//! let helix = Degrees(15.5);
//! let rad: Radians = helix.into();
//! assert!((rad.0 - 15.5_f64.to_radians()).abs() < 1e-12);
//!
//! let dms: Dms = helix.into();
//! assert_eq!((dms.degrees, dms.minutes, dms.seconds), (15, 30, 0));
//! ```

use serde::{Deserialize, Serialize};

/// Guards `floor` against values like 19.999999999 that should read as 20.
const DMS_EPSILON: f64 = 1e-6;

// ============================================================================
// Decimal Angles
// ============================================================================

/// Angle in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Degrees / Minutes / Seconds
// ============================================================================

/// Angle split into whole degrees, minutes and seconds.
///
/// Only non-negative angles are representable; the sign (hand) of a helix is
/// not carried here.
///
/// ## JSON Example
///
/// ```json
/// { "degrees": 15, "minutes": 30, "seconds": 0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Dms {
    pub fn new(degrees: u32, minutes: u32, seconds: u32) -> Self {
        Dms {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Split a decimal-degree value. Negative input is clamped to zero.
    ///
    /// Seconds are rounded, so the result can read `60"` when the fraction
    /// sits just under a whole minute.
    pub fn from_decimal_degrees(value: f64) -> Self {
        let value = value.max(0.0);
        let d = (value + DMS_EPSILON).floor();
        let minutes_float = (value - d) * 60.0;
        let m = (minutes_float + DMS_EPSILON).floor().max(0.0);
        let s = ((minutes_float - m) * 60.0).round().max(0.0);

        Dms {
            degrees: d as u32,
            minutes: m as u32,
            seconds: s as u32,
        }
    }

    /// Decimal degrees: `d + m/60 + s/3600`
    pub fn to_decimal_degrees(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0
    }

    /// Replace the degrees field; a negative edit is clamped to 0.
    pub fn with_degrees(self, degrees: i64) -> Self {
        Dms {
            degrees: clamp_field(degrees),
            ..self
        }
    }

    /// Replace the minutes field; a negative edit is clamped to 0.
    pub fn with_minutes(self, minutes: i64) -> Self {
        Dms {
            minutes: clamp_field(minutes),
            ..self
        }
    }

    /// Replace the seconds field; a negative edit is clamped to 0.
    pub fn with_seconds(self, seconds: i64) -> Self {
        Dms {
            seconds: clamp_field(seconds),
            ..self
        }
    }
}

fn clamp_field(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

impl From<Degrees> for Dms {
    fn from(deg: Degrees) -> Self {
        Dms::from_decimal_degrees(deg.0)
    }
}

impl From<Dms> for Degrees {
    fn from(dms: Dms) -> Self {
        Degrees(dms.to_decimal_degrees())
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:02}\"", self.degrees, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARC_SECOND: f64 = 1.0 / 3600.0;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);

        let back: Degrees = rad.into();
        assert!((back.0 - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_whole_degree_does_not_underflow() {
        // 20.0 must not come out as 19°59'60"
        let dms = Dms::from_decimal_degrees(20.0);
        assert_eq!(dms, Dms::new(20, 0, 0));
    }

    #[test]
    fn test_to_dms_typical_helix() {
        // 15°30'45" = 15.5125
        let dms = Dms::from_decimal_degrees(15.5125);
        assert_eq!(dms, Dms::new(15, 30, 45));
    }

    #[test]
    fn test_just_below_whole_degree() {
        let dms = Dms::from_decimal_degrees(19.999_999_9);
        assert_eq!(dms.degrees, 20);
        assert_eq!(dms.minutes, 0);
    }

    #[test]
    fn test_negative_clamped() {
        assert_eq!(Dms::from_decimal_degrees(-12.5), Dms::default());
    }

    #[test]
    fn test_from_dms() {
        let deg: Degrees = Dms::new(8, 6, 34).into();
        assert!((deg.0 - (8.0 + 6.0 / 60.0 + 34.0 / 3600.0)).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip_within_one_arc_second() {
        let mut v = 0.0;
        while v < 45.0 {
            let back = Dms::from_decimal_degrees(v).to_decimal_degrees();
            assert!((back - v).abs() <= ARC_SECOND, "v = {}, back = {}", v, back);
            v += 0.123_457;
        }
    }

    #[test]
    fn test_field_edits_clamp() {
        let dms = Dms::new(10, 20, 30);
        assert_eq!(dms.with_degrees(-3), Dms::new(0, 20, 30));
        assert_eq!(dms.with_minutes(-1), Dms::new(10, 0, 30));
        assert_eq!(dms.with_seconds(45), Dms::new(10, 20, 45));
    }

    #[test]
    fn test_display() {
        assert_eq!(Dms::new(15, 5, 9).to_string(), "15°05'09\"");
    }

    #[test]
    fn test_arithmetic() {
        let a = Degrees(10.0);
        let b = Degrees(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let deg = Degrees(14.5);
        let json = serde_json::to_string(&deg).unwrap();
        assert_eq!(json, "14.5");

        let roundtrip: Degrees = serde_json::from_str(&json).unwrap();
        assert_eq!(deg, roundtrip);
    }
}
