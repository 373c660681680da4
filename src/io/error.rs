//! Error types and path context for submission processing

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all stripe swap operations
#[derive(Debug)]
pub enum SwapError {
    /// Caller supplied a parameter that fails validation
    ///
    /// Raised before any computation, e.g. for a non-positive stripe width
    /// or an unrecognized direction selector.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Image bytes could not be decoded
    DecodeFailure {
        /// Where the bytes came from (file path or upload name)
        origin: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// The human verification challenge was answered wrongly too many times
    ChallengeMismatch {
        /// Number of challenges issued before giving up
        attempts: usize,
    },

    /// Failed to encode or save an image
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

    /// The CLI target is neither a supported image nor a directory
    UnsupportedTarget {
        /// Target path given on the command line
        path: PathBuf,
        /// Why the target was rejected
        reason: &'static str,
    },
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DecodeFailure { origin, source } => {
                write!(f, "Failed to decode image '{}': {source}", origin.display())
            }
            Self::ChallengeMismatch { attempts } => {
                write!(
                    f,
                    "Verification challenge failed after {attempts} attempt(s)"
                )
            }
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
            Self::UnsupportedTarget { path, reason } => {
                write!(f, "Unsupported target '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for SwapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DecodeFailure { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stripe swap results
pub type Result<T> = std::result::Result<T, SwapError>;

/// Attaches the path and operation to bare I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`SwapError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path context applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| SwapError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<image::ImageError> for SwapError {
    fn from(err: image::ImageError) -> Self {
        Self::DecodeFailure {
            origin: PathBuf::from("<memory>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SwapError {
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
) -> SwapError {
    SwapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
