//! Pairwise stripe exchange along one axis of a grid
//!
//! The selected axis is cut into consecutive blocks of `stripe_width`
//! entries. Blocks `2k` and `2k + 1` form a pair and trade places when the
//! second block fits entirely inside the axis. A trailing block without a
//! complete partner stays where it is, so applying the exchange twice with
//! the same parameters always restores the input.

use log::debug;
use ndarray::{Array3, Slice, Zip};

use crate::io::error::Result;
use crate::spatial::PixelGrid;
use crate::transform::axis::{Axis, StripeWidth};

/// Number of block pairs that get exchanged on an axis of `axis_length`
pub const fn swapped_pair_count(axis_length: usize, stripe_width: StripeWidth) -> usize {
    match stripe_width.get().checked_mul(2) {
        Some(pair_length) => axis_length / pair_length,
        None => 0,
    }
}

/// Return a copy of `grid` with every complete stripe pair exchanged
///
/// The input is never modified. Only the coordinate along `axis` of an
/// element can change; the orthogonal coordinate and the channel index are
/// preserved.
pub fn swap_stripes<A: Clone>(grid: &Array3<A>, axis: Axis, stripe_width: StripeWidth) -> Array3<A> {
    let mut swapped = grid.to_owned();
    let nd_axis = axis.as_ndarray();
    let width = stripe_width.get();
    let pair_count = swapped_pair_count(swapped.len_of(nd_axis), stripe_width);

    debug!(
        "Exchanging {pair_count} stripe pair(s) of width {width} along {axis} (length {})",
        swapped.len_of(nd_axis)
    );

    for pair in 0..pair_count {
        let start = pair * 2 * width;
        let pair_view = swapped.slice_axis_mut(nd_axis, Slice::from(start..start + 2 * width));
        let (first, second) = pair_view.split_at(nd_axis, width);
        Zip::from(first).and(second).for_each(std::mem::swap);
    }

    swapped
}

/// Validate a raw stripe width and apply [`swap_stripes`] to a pixel grid
///
/// # Errors
///
/// Returns [`crate::SwapError::InvalidParameter`] if `stripe_width` is zero
/// or negative; no other failure is possible
pub fn transform(grid: &PixelGrid, axis: Axis, stripe_width: i64) -> Result<PixelGrid> {
    let width = StripeWidth::new(stripe_width)?;
    Ok(swap_stripes(grid, axis, width))
}
