//! Standard Pressure Angles
//!
//! The normal pressure angles offered for selection. 20° is the modern
//! standard, 14.5° survives on older equipment and 25° on heavily loaded gears.

use serde::{Deserialize, Serialize};

/// Standard normal pressure angle presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PressureAngle {
    /// 20° (ISO 53)
    #[default]
    #[serde(rename = "20")]
    Standard20,
    /// 14.5° (legacy)
    #[serde(rename = "14.5")]
    Legacy14_5,
    /// 25°
    #[serde(rename = "25")]
    Heavy25,
}

impl PressureAngle {
    /// All presets in selection order (standard first)
    pub const ALL: [PressureAngle; 3] = [
        PressureAngle::Standard20,
        PressureAngle::Legacy14_5,
        PressureAngle::Heavy25,
    ];

    /// Angle in degrees
    pub fn degrees(&self) -> f64 {
        match self {
            PressureAngle::Standard20 => 20.0,
            PressureAngle::Legacy14_5 => 14.5,
            PressureAngle::Heavy25 => 25.0,
        }
    }

    /// Display label for selection lists
    pub fn label(&self) -> &'static str {
        match self {
            PressureAngle::Standard20 => "20° (Standard)",
            PressureAngle::Legacy14_5 => "14.5° (Old Standard)",
            PressureAngle::Heavy25 => "25°",
        }
    }

    /// Preset matching `degrees` exactly, if any
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.degrees() == degrees)
    }
}

impl std::fmt::Display for PressureAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_20() {
        assert_eq!(PressureAngle::default().degrees(), 20.0);
    }

    #[test]
    fn test_from_degrees() {
        assert_eq!(PressureAngle::from_degrees(14.5), Some(PressureAngle::Legacy14_5));
        assert_eq!(PressureAngle::from_degrees(22.5), None);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PressureAngle::Legacy14_5).unwrap();
        assert_eq!(json, "\"14.5\"");
        let back: PressureAngle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PressureAngle::Legacy14_5);
    }
}
