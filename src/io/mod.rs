//! Input/output operations around the transform
//!
//! This module contains everything that touches the outside world:
//! - Image decoding, encoding and histogram chart rendering
//! - Verification challenges and submission storage
//! - The submission pipeline and its command-line front end

/// Arithmetic verification challenge
pub mod challenge;
/// Command-line parsing and batch orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Image codec between bytes, files and pixel grids
pub mod image;
/// Batch progress display
pub mod progress;
/// Submission identifiers and artifact paths
pub mod storage;
/// Per-submission pipeline
pub mod upload;
/// Histogram chart rendering
pub mod visualization;
