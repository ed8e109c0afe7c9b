//! Input/output operations, configuration, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Filter constants and output naming defaults
pub mod configuration;
/// Error types and path context management
pub mod error;
/// Byte-stream image decoding and PNG encoding
pub mod image;
/// Batch progress reporting
pub mod progress;
