use serde::Serialize;
use thiserror::Error;

/// Rejected user or upstream input. The value it was meant to replace is kept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: '{input}' is not a number")]
    NotANumber { field: &'static str, input: String },
    #[error("{field}: value must be finite")]
    NonFinite { field: &'static str },
    #[error("{field}: value must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field}: {value} is out of range ({reason})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Unknown line number: {0}")]
    UnknownLine(u32),
    #[error("Catalogue entry not found: {0}")]
    UnknownProduct(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for QuoteError {
    fn from(error: std::io::Error) -> Self {
        QuoteError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(error: serde_json::Error) -> Self {
        QuoteError::Json(error.to_string())
    }
}

impl Serialize for QuoteError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type QuoteResult<T> = Result<T, QuoteError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
