//! Error types produced while validating truss inputs or naming members.

use std::fmt;

use thiserror::Error;

/// The user-editable inputs of a truss design.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Overall span of the truss.
    Width,
    /// Roof pitch in degrees.
    Pitch,
    /// Largest allowed distance between vertical members.
    MaxVerticalSpacing,
    /// Cross-section size of the rendered members.
    MemberSize,
}

impl InputField {
    /// Human-readable label including the unit the field is entered in.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Width => "Truss Width (m)",
            Self::Pitch => "Pitch (degrees)",
            Self::MaxVerticalSpacing => "Max Vertical Member Spacing (m)",
            Self::MemberSize => "Member Size (mm)",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single rejected input value.
///
/// The display text is the message shown next to the offending field.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Returned when the width is zero, negative or not a number.
    #[error("Width must be greater than 0.")]
    NonPositiveWidth(f64),
    /// Returned when the pitch lies outside the open interval (0, 90) degrees.
    #[error("Pitch must be between 1 and 89 degrees.")]
    PitchOutOfRange(f64),
    /// Returned when the maximum vertical spacing is zero, negative or not a number.
    #[error("Spacing must be greater than 0.")]
    NonPositiveSpacing(f64),
    /// Returned when the member size is zero, negative or not a number.
    #[error("Member size must be greater than 0.")]
    NonPositiveMemberSize(f64),
}

impl ValidationError {
    /// The input this error refers to.
    #[must_use]
    pub const fn field(&self) -> InputField {
        match self {
            Self::NonPositiveWidth(_) => InputField::Width,
            Self::PitchOutOfRange(_) => InputField::Pitch,
            Self::NonPositiveSpacing(_) => InputField::MaxVerticalSpacing,
            Self::NonPositiveMemberSize(_) => InputField::MemberSize,
        }
    }

    /// The value that was rejected.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match *self {
            Self::NonPositiveWidth(value)
            | Self::PitchOutOfRange(value)
            | Self::NonPositiveSpacing(value)
            | Self::NonPositiveMemberSize(value) => value,
        }
    }
}

/// Every validation failure found in one set of inputs, in field order.
///
/// # Examples
///
/// ```
/// use howetruss::{InputField, TrussParameters};
///
/// let errors = TrussParameters::default()
///     .with_width(0.0)
///     .with_pitch_degrees(90.0)
///     .validate()
///     .expect_err("two fields are invalid");
/// assert_eq!(errors.len(), 2);
/// assert!(errors.for_field(InputField::MemberSize).is_none());
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{} invalid truss input(s)", .0.len())]
pub struct ValidationErrors(pub(crate) Vec<ValidationError>);

impl ValidationErrors {
    /// Number of rejected fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field was rejected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the individual errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// The error reported for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: InputField) -> Option<&ValidationError> {
        self.0.iter().find(|error| error.field() == field)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Error returned when a textual member identifier cannot be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseMemberIdError {
    /// The text is not of the form `kind:index`.
    #[error("member id `{0}` must have the form kind:index")]
    MissingSeparator(String),
    /// The kind prefix is not one of `bottom`, `top`, `vertical` or `diagonal`.
    #[error("unknown member kind `{0}`")]
    UnknownKind(String),
    /// The index suffix is not a non-negative integer.
    #[error("invalid member index `{0}`")]
    InvalidIndex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_field_prompts() {
        assert_eq!(
            ValidationError::PitchOutOfRange(95.0).to_string(),
            "Pitch must be between 1 and 89 degrees."
        );
        assert_eq!(
            ValidationError::NonPositiveSpacing(0.0).to_string(),
            "Spacing must be greater than 0."
        );
    }

    #[test]
    fn errors_know_their_field_and_value() {
        let error = ValidationError::NonPositiveMemberSize(-3.0);
        assert_eq!(error.field(), InputField::MemberSize);
        assert_eq!(error.value(), -3.0);
    }

    #[test]
    fn collection_summarises_count() {
        let errors = ValidationErrors(vec![
            ValidationError::NonPositiveWidth(0.0),
            ValidationError::NonPositiveSpacing(-1.0),
        ]);
        assert_eq!(errors.to_string(), "2 invalid truss input(s)");
        assert_eq!(
            errors.for_field(InputField::MaxVerticalSpacing),
            Some(&ValidationError::NonPositiveSpacing(-1.0))
        );
    }
}
