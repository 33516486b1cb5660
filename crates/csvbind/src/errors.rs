//! Error types for CSV encoding with field and row context

use csvbind_record::ValueKind;
use thiserror::Error;

/// Errors that can occur while encoding records as CSV
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// A field destined for output has no header annotation, or its label is empty
    #[error("field '{field}' is missing a header annotation")]
    MissingHeader { field: &'static str },

    /// A field destined for output has no ordinal annotation
    #[error("field '{field}' is missing an ordinal annotation")]
    MissingOrdinal { field: &'static str },

    /// An ordinal annotation's stored text does not parse as a column index
    #[error("field '{field}' has ordinal annotation '{value}', expected a non-negative integer")]
    InvalidOrdinal { field: &'static str, value: String },

    /// The configured date format is not a usable strftime pattern
    #[error("date format pattern '{pattern}' is not usable for the value being formatted")]
    DateFormat { pattern: String },

    /// An absent value on a field whose kind has no empty-text rendering
    #[error("row {row}, column '{column}': absent value on a {kind} field")]
    ValueConversion {
        row: usize,
        column: String,
        kind: ValueKind,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The built document cannot be represented in the selected encoding
    #[error("output is not representable as {encoding}: {message}")]
    Encoding {
        encoding: &'static str,
        message: String,
    },

    /// Sink write failure
    #[error("sink error: {0}")]
    Io(String),
}

impl EncodeError {
    /// Create a missing-header error for a field
    pub fn missing_header(field: &'static str) -> Self {
        Self::MissingHeader { field }
    }

    /// Create a missing-ordinal error for a field
    pub fn missing_ordinal(field: &'static str) -> Self {
        Self::MissingOrdinal { field }
    }

    /// Create an invalid-ordinal error carrying the raw annotation text
    pub fn invalid_ordinal(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidOrdinal {
            field,
            value: value.into(),
        }
    }

    /// Create a date-format error
    pub fn date_format(pattern: impl Into<String>) -> Self {
        Self::DateFormat {
            pattern: pattern.into(),
        }
    }

    /// Create a value-conversion error with row and column context
    pub fn value_conversion(row: usize, column: impl Into<String>, kind: ValueKind) -> Self {
        Self::ValueConversion {
            row,
            column: column.into(),
            kind,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an encoding error for a named character encoding
    pub fn encoding(encoding: &'static str, message: impl Into<String>) -> Self {
        Self::Encoding {
            encoding,
            message: message.into(),
        }
    }

    /// The field name this error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingHeader { field }
            | Self::MissingOrdinal { field }
            | Self::InvalidOrdinal { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EncodeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Result type alias for encoding operations
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_metadata_errors_name_the_field() {
        let err = EncodeError::missing_header("hire_date");
        assert!(err.to_string().contains("hire_date"));
        assert!(err.to_string().contains("header"));
        assert_eq!(err.field(), Some("hire_date"));

        let err = EncodeError::missing_ordinal("badge");
        assert!(err.to_string().contains("ordinal"));
        assert_eq!(err.field(), Some("badge"));
    }

    #[test]
    fn test_invalid_ordinal_carries_raw_text() {
        let err = EncodeError::invalid_ordinal("badge", "first");
        assert!(err.to_string().contains("'first'"));
        assert!(err.to_string().contains("non-negative integer"));
    }

    #[test]
    fn test_value_conversion_context() {
        let err = EncodeError::value_conversion(3, "Salary", ValueKind::Decimal);
        assert!(err.to_string().contains("row 3"));
        assert!(err.to_string().contains("'Salary'"));
        assert!(err.to_string().contains("decimal"));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = EncodeError::from(io);
        assert!(matches!(err, EncodeError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
