use std::fmt;
use thiserror::Error;

/// Why a digit string was rejected before realization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Nothing but a sign was supplied.
    Empty,
    NonDigit { character: char, position: usize },
    TooLong { length: usize, max: usize },
    /// Insignificant zero in front of a multi-digit sequence.
    LeadingZero,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatErrorKind::Empty => write!(f, "no digits after the sign"),
            FormatErrorKind::NonDigit {
                character,
                position,
            } => write!(f, "non-digit character {:?} at position {}", character, position),
            FormatErrorKind::TooLong { length, max } => {
                write!(f, "{} digits exceeds the maximum of {}", length, max)
            }
            FormatErrorKind::LeadingZero => write!(f, "leading zero before other digits"),
        }
    }
}

#[derive(Error, Debug)]
pub enum NumeralError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Malformed numeral '{value}': {kind}")]
    FormatError { value: String, kind: FormatErrorKind },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl NumeralError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        NumeralError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn format(value: impl Into<String>, kind: FormatErrorKind) -> Self {
        NumeralError::FormatError {
            value: value.into(),
            kind,
        }
    }

    /// Re-expresses a format error found in `source[offset..]` against the
    /// whole of `source`.
    pub fn within_source(self, source: &str, offset: usize) -> Self {
        match self {
            NumeralError::FormatError { kind, .. } => {
                let kind = match kind {
                    FormatErrorKind::NonDigit {
                        character,
                        position,
                    } => FormatErrorKind::NonDigit {
                        character,
                        position: position + offset,
                    },
                    other => other,
                };
                NumeralError::format(source, kind)
            }
            other => other,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, NumeralError::InvalidArgument { .. })
    }

    pub fn is_format_error(&self) -> bool {
        matches!(self, NumeralError::FormatError { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            NumeralError::InvalidArgument { .. } | NumeralError::FormatError { .. } => {
                ErrorCategory::Input
            }
            NumeralError::ConfigValidationError { .. }
            | NumeralError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            NumeralError::IoError(_)
            | NumeralError::SerializationError(_)
            | NumeralError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NumeralError::InvalidArgument { .. } => {
                "Provide a non-empty numeral such as 42 or -120".to_string()
            }
            NumeralError::FormatError {
                kind: FormatErrorKind::TooLong { max, .. },
                ..
            } => format!("Use at most {} significant digits", max),
            NumeralError::FormatError { .. } => {
                "Use only ASCII digits with an optional leading + or -".to_string()
            }
            NumeralError::IoError(_) => "Check that the input file exists and is readable".to_string(),
            NumeralError::SerializationError(_) | NumeralError::CsvError(_) => {
                "Check that the output destination is writable".to_string()
            }
            NumeralError::ConfigValidationError { field, .. }
            | NumeralError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NumeralError::InvalidArgument { .. } => "Empty input cannot be converted".to_string(),
            NumeralError::FormatError { value, kind } => {
                format!("'{}' is not a supported integer: {}", value, kind)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NumeralError>;
