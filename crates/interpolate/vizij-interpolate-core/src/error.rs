//! Error types for interpolator construction

use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

/// Errors raised while building an interpolator.
///
/// Evaluation never fails; every variant surfaces at construction (or, for
/// the registry, at dispatch) and retrying with the same endpoints yields the
/// same error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum InterpolateError {
    /// Endpoint string is not a recognized color
    #[error("Invalid color format: {input:?}")]
    InvalidColorFormat { input: String },

    /// Endpoint string is not a valid SVG transform list
    #[error("Invalid transform {input:?}: {reason}")]
    InvalidTransform { input: String, reason: String },

    /// Endpoint has the wrong shape for a shape-specific interpolator
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// Registry dispatch found no built-in shape and no factory accepted the pair
    #[error("No interpolator found for {start} -> {end}")]
    NoInterpolatorFound { start: ValueKind, end: ValueKind },

    /// Value cannot be represented (e.g. JSON null)
    #[error("Invalid value: {reason}")]
    InvalidValue { reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl InterpolateError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidColorFormat { .. } | Self::InvalidTransform { .. } => "parse",
            Self::ShapeMismatch { .. } | Self::InvalidValue { .. } => "validation",
            Self::NoInterpolatorFound { .. } => "dispatch",
            Self::SerializationError { .. } => "serialization",
        }
    }

    pub(crate) fn invalid_transform(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidTransform {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for InterpolateError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let parse = InterpolateError::InvalidColorFormat {
            input: "nope".to_string(),
        };
        assert_eq!(parse.category(), "parse");

        let dispatch = InterpolateError::NoInterpolatorFound {
            start: ValueKind::Number,
            end: ValueKind::Array,
        };
        assert_eq!(dispatch.category(), "dispatch");
    }

    #[test]
    fn test_error_messages() {
        let err = InterpolateError::ShapeMismatch {
            expected: ValueKind::Color,
            actual: ValueKind::Number,
        };
        assert_eq!(err.to_string(), "Shape mismatch: expected color, got number");
    }

    #[test]
    fn test_serialization() {
        let error = InterpolateError::InvalidValue {
            reason: "null".to_string(),
        };
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: InterpolateError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }
}
