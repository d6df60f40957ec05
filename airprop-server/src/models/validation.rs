//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more required fields are absent (or blank, for text fields)
    Required { what: &'static str },

    /// A numeric field was supplied with a negative value
    Negative { field: &'static str },

    /// A partial update supplied no fields at all
    NoFields,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { what } => write!(f, "{} are required", what),
            Self::Negative { field } => write!(f, "{} must be non-negative", field),
            Self::NoFields => write!(f, "No fields to update"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Negative { field: "Rent" };
        assert_eq!(err.to_string(), "Rent must be non-negative");

        let err = ValidationError::Required {
            what: "Address, listing price, and rent",
        };
        assert_eq!(err.to_string(), "Address, listing price, and rent are required");
    }
}
