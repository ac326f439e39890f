/// Error type for magnitude-namer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MagnitudeError {
    /// No naming rule covers this exponent (zero, not a multiple of 3, or a table miss).
    NotFound(u64),
    /// The input has no trailing alphabetic suffix, or its numeric part is not a number.
    InvalidFormat(String),
    /// The trailing letters do not belong to any naming tier.
    NoMatch(String),
    /// An exponent computation left the `u64` range.
    Overflow(String),
    /// File I/O error.
    IoError(String),
    /// CSV writing error.
    CsvError(String),
    /// JSON serialization error.
    JsonError(String),
}

impl std::fmt::Display for MagnitudeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MagnitudeError::NotFound(e) => write!(f, "No name defined for exponent: {}", e),
            MagnitudeError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            MagnitudeError::NoMatch(suffix) => write!(f, "Unrecognized suffix: {}", suffix),
            MagnitudeError::Overflow(msg) => write!(f, "Exponent overflow: {}", msg),
            MagnitudeError::IoError(msg) => write!(f, "IO error: {}", msg),
            MagnitudeError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            MagnitudeError::JsonError(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for MagnitudeError {}
