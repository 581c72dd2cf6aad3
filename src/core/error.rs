use thiserror::Error;

/// Errors that can occur while computing a tax result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PajakError {
    /// A required input field is missing, negative, or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(ValidationError),

    /// A category key does not name any known rate.
    #[error("unknown {kind} category '{value}'")]
    UnknownCategory {
        /// Which table was consulted (e.g. "PPh 23").
        kind: &'static str,
        /// The rejected key.
        value: String,
    },

    /// A nested selector (construction phase or scale) was required but absent.
    #[error("{selector} must be specified for this income type")]
    MissingSelector {
        /// Name of the missing selector.
        selector: &'static str,
    },

    /// A date string could not be parsed.
    #[error("invalid date '{value}': {reason}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Rate tables or thresholds are inconsistent.
    #[error("configuration error: {0}")]
    Config(String),
}

impl PajakError {
    /// Shorthand for an [`PajakError::InvalidInput`] with a field and message.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput(ValidationError::new(field, message))
    }
}

/// A single input validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending input field (e.g. "gross_income").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
