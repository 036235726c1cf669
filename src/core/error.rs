// src/core/error.rs

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenesisError {
    /// Typ- oder Formverletzung eines Spec-Feldes; `field` benennt das Feld.
    InvalidField { field: String, reason: String },
    ParseError(String),
    Io(String),
    Mismatch { field: &'static str, expected: String, actual: String },
    DuplicateNetwork(String),
    UnknownNetwork(String),
}

impl GenesisError {
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GenesisError::InvalidField { field: field.into(), reason: reason.into() }
    }
}

impl fmt::Display for GenesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenesisError::InvalidField { field, reason } => write!(f, "invalid field `{}`: {}", field, reason),
            GenesisError::ParseError(msg) => write!(f, "parse error: {}", msg),
            GenesisError::Io(msg) => write!(f, "io error: {}", msg),
            GenesisError::Mismatch { field, expected, actual } => {
                write!(f, "{} mismatch: expected {}, computed {}", field, expected, actual)
            }
            GenesisError::DuplicateNetwork(network) => write!(f, "network `{}` selected more than once", network),
            GenesisError::UnknownNetwork(network) => write!(f, "unknown network preset `{}`", network),
        }
    }
}

impl std::error::Error for GenesisError {}

impl From<serde_json::Error> for GenesisError {
    fn from(err: serde_json::Error) -> Self {
        GenesisError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for GenesisError {
    fn from(err: std::io::Error) -> Self {
        GenesisError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_names_field() {
        let err = GenesisError::invalid_field("initial_allocations[0].amount", "must be a non-negative integer");
        assert_eq!(
            err.to_string(),
            "invalid field `initial_allocations[0].amount`: must be a non-negative integer"
        );
    }

    #[test]
    fn test_json_error_converts_to_parse_error() {
        let err: GenesisError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, GenesisError::ParseError(_)));
    }
}
