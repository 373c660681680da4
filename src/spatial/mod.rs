//! Pixel grid data structures
//!
//! This module contains the in-memory image representation used by every
//! stage of a submission.

/// Pixel grid type and construction helpers
pub mod grid;

pub use grid::PixelGrid;
