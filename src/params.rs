//! Design inputs for a truss and their validation.

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationErrors};
use crate::generate::generate;
use crate::truss::TrussGeometry;

/// The four user-facing inputs of a truss design.
///
/// Use the builder methods to adjust a design, then either
/// [`generate`](Self::generate) unconditionally or
/// [`try_generate`](Self::try_generate) to validate first.
///
/// # Examples
///
/// ```
/// use howetruss::TrussParameters;
///
/// let params = TrussParameters::new()
///     .with_width(12.0)
///     .with_pitch_degrees(22.5)
///     .with_max_vertical_spacing(2.0);
/// let truss = params.try_generate().expect("inputs are valid");
/// assert_eq!(truss.panel_count(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrussParameters {
    /// Overall span in metres.
    pub width: f64,

    /// Roof pitch in degrees from horizontal.
    ///
    /// Only values strictly between 0 and 90 describe a real roof.
    pub pitch_degrees: f64,

    /// Largest allowed distance between vertical members in metres.
    pub max_vertical_spacing: f64,

    /// Member cross-section size in millimetres.
    ///
    /// Only consumed by rendering; it never changes the generated geometry.
    pub member_size: f64,
}

impl Default for TrussParameters {
    fn default() -> Self {
        Self {
            width: 20.0,
            pitch_degrees: 17.0,
            max_vertical_spacing: 1.5,
            member_size: 50.0,
        }
    }
}

impl TrussParameters {
    /// Creates parameters with the default design.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overall span in metres.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the roof pitch in degrees.
    #[must_use]
    pub fn with_pitch_degrees(mut self, pitch_degrees: f64) -> Self {
        self.pitch_degrees = pitch_degrees;
        self
    }

    /// Sets the largest allowed spacing between vertical members in metres.
    #[must_use]
    pub fn with_max_vertical_spacing(mut self, max_vertical_spacing: f64) -> Self {
        self.max_vertical_spacing = max_vertical_spacing;
        self
    }

    /// Sets the member cross-section size in millimetres.
    #[must_use]
    pub fn with_member_size(mut self, member_size: f64) -> Self {
        self.member_size = member_size;
        self
    }

    /// Member size converted to metres, the unit of the generated coordinates.
    #[must_use]
    pub fn member_size_metres(&self) -> f64 {
        self.member_size / 1000.0
    }

    /// Check every field and report all that are out of range.
    ///
    /// Comparisons are written so that `NaN` fails every check.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] holding one [`ValidationError`] per rejected
    /// field, in declaration order.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        if !(self.width > 0.0) {
            errors.push(ValidationError::NonPositiveWidth(self.width));
        }
        if !(self.pitch_degrees > 0.0 && self.pitch_degrees < 90.0) {
            errors.push(ValidationError::PitchOutOfRange(self.pitch_degrees));
        }
        if !(self.max_vertical_spacing > 0.0) {
            errors.push(ValidationError::NonPositiveSpacing(
                self.max_vertical_spacing,
            ));
        }
        if !(self.member_size > 0.0) {
            errors.push(ValidationError::NonPositiveMemberSize(self.member_size));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Generate the truss without validating the inputs.
    #[must_use]
    pub fn generate(&self) -> TrussGeometry {
        generate(self.width, self.pitch_degrees, self.max_vertical_spacing)
    }

    /// Validate the inputs and generate the truss only when all of them pass.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationErrors`] from [`validate`](Self::validate); the
    /// generator is not run in that case.
    pub fn try_generate(&self) -> Result<TrussGeometry, ValidationErrors> {
        self.validate()?;
        Ok(self.generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InputField;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(TrussParameters::default().validate(), Ok(()));
    }

    #[test]
    fn pitch_bounds_are_exclusive() {
        for pitch in [0.0, 90.0, -5.0, 120.0, f64::NAN] {
            let errors = TrussParameters::new()
                .with_pitch_degrees(pitch)
                .validate()
                .expect_err("pitch rejected");
            assert_eq!(errors.len(), 1);
            assert!(errors.for_field(InputField::Pitch).is_some());
        }
        for pitch in [0.5, 1.0, 89.0, 89.9] {
            assert!(TrussParameters::new()
                .with_pitch_degrees(pitch)
                .validate()
                .is_ok());
        }
    }

    #[test]
    fn every_invalid_field_is_reported_in_order() {
        let errors = TrussParameters::new()
            .with_width(-1.0)
            .with_pitch_degrees(0.0)
            .with_max_vertical_spacing(0.0)
            .with_member_size(f64::NAN)
            .validate()
            .expect_err("all fields rejected");
        let fields: Vec<InputField> = errors.iter().map(ValidationError::field).collect();
        assert_eq!(
            fields,
            [
                InputField::Width,
                InputField::Pitch,
                InputField::MaxVerticalSpacing,
                InputField::MemberSize,
            ]
        );
    }

    #[test]
    fn member_size_does_not_change_geometry() {
        let thin = TrussParameters::new().with_member_size(10.0);
        let thick = TrussParameters::new().with_member_size(200.0);
        assert_eq!(thin.generate(), thick.generate());
        assert_eq!(thick.member_size_metres(), 0.2);
    }
}
