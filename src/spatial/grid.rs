//! Pixel grid representation shared by the codec, transform and histogram
//!
//! A grid is a `[height, width, channels]` array of 8-bit samples. Decoded
//! images always carry exactly three channels (RGB).

use ndarray::Array3;

use crate::io::error::{Result, invalid_parameter};

/// Number of color channels in a decoded grid
pub const CHANNELS: usize = 3;

/// Row-major RGB pixel data indexed by (`row`, `col`, `channel`)
pub type PixelGrid = Array3<u8>;

/// Create a black grid with the given dimensions
pub fn blank_grid(height: usize, width: usize) -> PixelGrid {
    Array3::zeros((height, width, CHANNELS))
}

/// Build a grid from interleaved RGB bytes in row-major order
///
/// # Errors
///
/// Returns an error if `data` does not hold exactly `height * width * 3` bytes
pub fn grid_from_rgb(height: usize, width: usize, data: Vec<u8>) -> Result<PixelGrid> {
    let provided = data.len();
    Array3::from_shape_vec((height, width, CHANNELS), data).map_err(|e| {
        invalid_parameter(
            "pixel data",
            &format!("{provided} bytes"),
            &format!("cannot shape into {height}x{width}x{CHANNELS}: {e}"),
        )
    })
}

/// Get the (`height`, `width`) of a grid
pub fn dimensions<A>(grid: &Array3<A>) -> (usize, usize) {
    let (height, width, _) = grid.dim();
    (height, width)
}
