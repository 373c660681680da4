//! Stripe swap transform
//!
//! This module contains the only geometric operation of the crate:
//! - Axis and stripe width parameters with validation
//! - The copy-then-swap block pair permutation

/// Axis selection and stripe width validation
pub mod axis;
/// Block pair exchange over a grid axis
pub mod stripes;

pub use axis::{Axis, StripeWidth};
pub use stripes::{swap_stripes, swapped_pair_count, transform};
