//! Error types and path context management for filter operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all filter operations
#[derive(Debug)]
pub enum FilterError {
    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to decode an in-memory image byte stream
    ImageDecode {
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode the painted canvas
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Failed to save the painted canvas to disk
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

    /// The processing target is not a usable input
    InvalidTarget {
        /// Path that failed validation
        path: PathBuf,
        /// Explanation of why the target is unusable
        reason: &'static str,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageDecode { source } => {
                write!(f, "Failed to decode image data: {source}")
            }
            Self::ImageEncode { source } => {
                write!(f, "Failed to encode image data: {source}")
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
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::ImageDecode { source }
            | Self::ImageEncode { source }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidTarget { .. } => None,
        }
    }
}

/// Convenience type alias for filter results
pub type Result<T> = std::result::Result<T, FilterError>;

/// Attaches file path context to byte-stream errors
///
/// Decoding and encoding work on byte streams and know nothing about
/// files; callers that do know the file rewrite the path-less variants on
/// the way up.
pub trait WithPath<T> {
    /// Rewrite path-less error variants to carry `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with path context applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<FilterError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| match e.into() {
            FilterError::ImageDecode { source } => FilterError::ImageLoad {
                path: path.to_path_buf(),
                source,
            },
            FilterError::ImageEncode { source } => FilterError::ImageExport {
                path: path.to_path_buf(),
                source,
            },
            FilterError::FileSystem {
                operation, source, ..
            } => FilterError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            other => other,
        })
    }
}

impl From<image::ImageError> for FilterError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode { source: err }
    }
}

impl From<std::io::Error> for FilterError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid target error
pub fn invalid_target(path: &Path, reason: &'static str) -> FilterError {
    FilterError::InvalidTarget {
        path: path.to_path_buf(),
        reason,
    }
}
