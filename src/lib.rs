//! Stripe swapping for raster images behind an arithmetic verification gate
//!
//! A submission decodes an image, charts its per-channel intensity histogram,
//! exchanges alternating stripes of rows or columns, and stores the original,
//! the chart and the transformed result under a unique identifier.

#![forbid(unsafe_code)]

/// Per-channel histogram analysis of submitted images
pub mod analysis;
/// Input/output operations, submission pipeline and error handling
pub mod io;
/// Pixel grid representation
pub mod spatial;
/// The stripe swap transform and its parameters
pub mod transform;

pub use io::error::{Result, SwapError};
