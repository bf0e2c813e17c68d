//! Domain errors for entity construction.

use std::fmt;

/// Validation errors raised at construction time.
///
/// Raised immediately by entity constructors, never deferred: a constructed
/// value always satisfies its invariants. Each variant names the field and
/// the constraint so callers can build user-facing messages without
/// re-deriving context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Constraint that was violated.
        message: String,
    },

    /// Strategy leg count outside the supported 1-2 range.
    LegCountOutOfRange {
        /// Number of legs supplied.
        count: usize,
    },
}

impl ValidationError {
    /// Convenience constructor for field-level violations.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::LegCountOutOfRange { count } => {
                write!(f, "Strategy must have 1-2 legs, got {count}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
