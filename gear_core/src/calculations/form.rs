//! # Geometry Form State
//!
//! Editable parameter set for front ends that recalculate on every field
//! change. Each setter is one input event. Changing z, α_n or β refreshes
//! the recommended span-tooth count unless the user has set one explicitly;
//! an explicit count survives until the user clears it.
//!
//! ## Example
//!
//! ```rust
//! use gear_core::calculations::form::GeometryForm;
//!
//! let mut form = GeometryForm::default();
//! form.set_teeth(50);
//! assert_eq!(form.input().span_teeth, Some(6));
//!
//! form.set_span_teeth(Some(7));
//! form.set_teeth(60);
//! assert_eq!(form.input().span_teeth, Some(7));
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::geometry::{self, recommend_span_teeth, GeometryInput, GeometryResult};
use crate::units::{Degrees, Dms};

/// Gear parameters plus whether the span count is user-owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryForm {
    input: GeometryInput,
    span_locked: bool,
}

impl Default for GeometryForm {
    /// Default gear with the span count left to the recommendation.
    fn default() -> Self {
        GeometryForm::new(GeometryInput {
            span_teeth: None,
            ..GeometryInput::default()
        })
    }
}

impl GeometryForm {
    /// Start from `input`. A usable `span_teeth` in the input counts as an
    /// explicit choice; otherwise the recommendation is filled in.
    pub fn new(input: GeometryInput) -> Self {
        let span_locked = input.explicit_span_teeth().is_some();
        let mut form = GeometryForm { input, span_locked };
        if !span_locked {
            form.apply_recommendation();
        }
        form
    }

    /// Current parameters
    pub fn input(&self) -> &GeometryInput {
        &self.input
    }

    /// True while the span count is an explicit user choice
    pub fn is_span_locked(&self) -> bool {
        self.span_locked
    }

    /// Span count the recommendation would give for the current z, α_n, β
    pub fn recommended_span_teeth(&self) -> u32 {
        recommend_span_teeth(
            self.input.teeth,
            self.input.pressure_angle_deg,
            self.input.helix_angle_deg,
        )
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.input.label = label.into();
    }

    pub fn set_module(&mut self, module_mm: f64) {
        self.input.module_mm = module_mm;
    }

    pub fn set_profile_shift(&mut self, profile_shift: f64) {
        self.input.profile_shift = profile_shift;
    }

    pub fn set_teeth(&mut self, teeth: u32) {
        self.input.teeth = teeth;
        self.refresh_span();
    }

    pub fn set_pressure_angle(&mut self, pressure_angle_deg: f64) {
        self.input.pressure_angle_deg = pressure_angle_deg;
        self.refresh_span();
    }

    pub fn set_helix_angle(&mut self, helix_angle_deg: f64) {
        self.input.helix_angle_deg = helix_angle_deg;
        self.refresh_span();
    }

    /// Set the helix angle from a degrees/minutes/seconds entry.
    pub fn set_helix_dms(&mut self, dms: Dms) {
        self.set_helix_angle(Degrees::from(dms).0);
    }

    /// `Some(k >= 1)` locks the span count to `k`. `None` or a count below 1
    /// releases it and restores the recommendation.
    pub fn set_span_teeth(&mut self, span_teeth: Option<i64>) {
        match span_teeth.filter(|&k| k >= 1) {
            Some(k) => {
                self.input.span_teeth = Some(k);
                self.span_locked = true;
            }
            None => {
                self.span_locked = false;
                self.apply_recommendation();
            }
        }
    }

    /// Run the geometry calculation on the current parameters.
    ///
    /// While the span count is unlocked the engine picks it, so the result
    /// reports it as recommended.
    pub fn result(&self) -> Option<GeometryResult> {
        if self.span_locked {
            geometry::calculate(&self.input)
        } else {
            geometry::calculate(&GeometryInput {
                span_teeth: None,
                ..self.input.clone()
            })
        }
    }

    fn refresh_span(&mut self) {
        if !self.span_locked {
            self.apply_recommendation();
        }
    }

    fn apply_recommendation(&mut self) {
        let k = self.recommended_span_teeth();
        trace!(k, "applying recommended span teeth");
        self.input.span_teeth = Some(k as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_recommends_three() {
        let form = GeometryForm::default();
        assert!(!form.is_span_locked());
        assert_eq!(form.input().span_teeth, Some(3));
    }

    #[test]
    fn test_explicit_span_in_input_locks() {
        let form = GeometryForm::new(GeometryInput::default());
        assert!(form.is_span_locked());
        assert_eq!(form.input().span_teeth, Some(3));
    }

    #[test]
    fn test_unset_span_gets_recommendation() {
        let form = GeometryForm::new(GeometryInput {
            teeth: 50,
            span_teeth: None,
            ..GeometryInput::default()
        });
        assert!(!form.is_span_locked());
        assert_eq!(form.input().span_teeth, Some(6));
    }

    #[test]
    fn test_recommendation_follows_teeth_when_unlocked() {
        let mut form = GeometryForm::default();
        form.set_teeth(50);
        assert_eq!(form.input().span_teeth, Some(6));

        form.set_pressure_angle(14.5);
        assert_eq!(form.input().span_teeth, Some(form.recommended_span_teeth() as i64));
    }

    #[test]
    fn test_explicit_span_survives_parameter_changes() {
        let mut form = GeometryForm::default();
        form.set_span_teeth(Some(4));

        form.set_teeth(80);
        form.set_helix_angle(25.0);
        form.set_pressure_angle(25.0);
        assert_eq!(form.input().span_teeth, Some(4));
        assert_eq!(form.result().unwrap().span_teeth, 4);
    }

    #[test]
    fn test_clearing_span_with_zero_unlocks() {
        let mut form = GeometryForm::default();
        form.set_teeth(50);
        form.set_span_teeth(Some(0));
        assert!(!form.is_span_locked());
        assert_eq!(form.input().span_teeth, Some(6));
    }

    #[test]
    fn test_module_and_shift_do_not_touch_span() {
        let mut form = GeometryForm::default();
        form.set_teeth(50);
        form.set_module(4.0);
        form.set_profile_shift(0.3);
        assert_eq!(form.input().span_teeth, Some(6));
        let r = form.result().unwrap();
        assert_eq!(r.pitch_diameter_mm, 200.0);
    }

    #[test]
    fn test_result_flags_recommended_span_only_when_unlocked() {
        let mut form = GeometryForm::default();
        let r = form.result().unwrap();
        assert_eq!(r.span_teeth, 3);
        assert!(r.span_teeth_recommended);

        form.set_span_teeth(Some(3));
        let r = form.result().unwrap();
        assert_eq!(r.span_teeth, 3);
        assert!(!r.span_teeth_recommended);

        form.set_span_teeth(None);
        assert!(form.result().unwrap().span_teeth_recommended);
    }

    #[test]
    fn test_helix_from_dms() {
        let mut form = GeometryForm::default();
        form.set_helix_dms(Dms::new(15, 30, 0));
        assert!((form.input().helix_angle_deg - 15.5).abs() < 1e-12);
    }
}
