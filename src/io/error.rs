//! Error types for synthesis, record codecs and ticket bookkeeping

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum GenerationError {
    /// Attribute or request parameter failed validation
    ///
    /// Raised before any random draw takes place, so no partial state exists.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Encoded bytes could not be interpreted
    InvalidFormat {
        /// What was being decoded
        context: &'static str,
        /// Description of the malformed input
        reason: String,
    },

    /// Encoded record does not have the fixed size of its profile
    RecordLength {
        /// Record profile being decoded
        profile: &'static str,
        /// Size the profile requires
        expected: usize,
        /// Size that was supplied
        actual: usize,
    },

    /// Ticket bookkeeping rejected the operation
    Ticket {
        /// Description of the rejected operation
        reason: String,
    },

    /// Failed to encode a pixel buffer into an image container
    ImageEncode {
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl GenerationError {
    /// Whether this error rejects caller-supplied values
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Whether this error rejects malformed encoded bytes
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. } | Self::RecordLength { .. })
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidFormat { context, reason } => {
                write!(f, "Invalid {context}: {reason}")
            }
            Self::RecordLength {
                profile,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{profile} record must be {expected} bytes, got {actual}"
                )
            }
            Self::Ticket { reason } => write!(f, "Ticket rejected: {reason}"),
            Self::ImageEncode { source } => write!(f, "Failed to encode image: {source}"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageEncode { source } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageEncode { source: err }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed input error
pub fn format_error(context: &'static str, reason: &impl ToString) -> GenerationError {
    GenerationError::InvalidFormat {
        context,
        reason: reason.to_string(),
    }
}

/// Create a ticket bookkeeping error
pub fn ticket_error(reason: &impl ToString) -> GenerationError {
    GenerationError::Ticket {
        reason: reason.to_string(),
    }
}
