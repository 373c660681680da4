//! Image decoding and encoding between bytes, files and pixel grids

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::io::error::{Result, SwapError, WithPath, invalid_parameter};
use crate::spatial::PixelGrid;
use crate::spatial::grid::{CHANNELS, dimensions, grid_from_rgb};

/// Decode any supported image format into an RGB pixel grid
///
/// Alpha is discarded and grayscale is expanded to three channels.
///
/// # Errors
///
/// Returns [`SwapError::DecodeFailure`] if the bytes are not a readable image
pub fn decode_rgb(bytes: &[u8]) -> Result<PixelGrid> {
    let decoded = image::load_from_memory(bytes)?;
    image_to_grid(&decoded.to_rgb8())
}

/// Read and decode an image file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents are not a readable image
pub fn load_rgb(path: &Path) -> Result<PixelGrid> {
    let bytes = std::fs::read(path).with_path(path, "read image")?;
    decode_rgb(&bytes).map_err(|e| match e {
        SwapError::DecodeFailure { source, .. } => SwapError::DecodeFailure {
            origin: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Convert an RGB image buffer into a grid
///
/// # Errors
///
/// Returns an error if the buffer holds fewer samples than its dimensions claim
pub fn image_to_grid(img: &RgbImage) -> Result<PixelGrid> {
    let (width, height) = img.dimensions();
    grid_from_rgb(height as usize, width as usize, img.as_raw().clone())
}

/// Convert a grid back into an RGB image buffer
///
/// # Errors
///
/// Returns [`SwapError::InvalidParameter`] if the grid does not have exactly
/// three channels or its dimensions exceed `u32`
pub fn grid_to_image(grid: &PixelGrid) -> Result<RgbImage> {
    let (height, width) = dimensions(grid);
    let channels = grid.len_of(ndarray::Axis(2));
    if channels != CHANNELS {
        return Err(invalid_parameter(
            "channels",
            &channels,
            &format!("pixel grids must have {CHANNELS} channels"),
        ));
    }

    let to_u32 = |value: usize, name: &'static str| {
        u32::try_from(value).map_err(|e| invalid_parameter(name, &value, &e))
    };
    let width_px = to_u32(width, "width")?;
    let height_px = to_u32(height, "height")?;

    // Logical iteration order is row-major regardless of memory layout
    let raw: Vec<u8> = grid.iter().copied().collect();
    RgbImage::from_raw(width_px, height_px, raw).ok_or_else(|| {
        invalid_parameter(
            "pixel data",
            &grid.len(),
            &"buffer does not match image dimensions",
        )
    })
}

/// Encode a grid into the given image format
///
/// # Errors
///
/// Returns an error if the grid cannot be converted or the encoder fails
pub fn encode_grid(grid: &PixelGrid, format: ImageFormat) -> Result<Vec<u8>> {
    let img = DynamicImage::ImageRgb8(grid_to_image(grid)?);
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format)
        .map_err(|e| SwapError::ImageExport {
            path: format!("<{}>", format.extensions_str().first().unwrap_or(&"memory")).into(),
            source: e,
        })?;
    Ok(buffer.into_inner())
}

/// Save a grid to disk, picking the format from the file extension
///
/// # Errors
///
/// Returns an error if:
/// - The extension does not name a known image format
/// - The grid cannot be encoded
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn save_grid(grid: &PixelGrid, output_path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(output_path).map_err(|e| SwapError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    let encoded = encode_grid(grid, format).map_err(|e| match e {
        SwapError::ImageExport { source, .. } => SwapError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    std::fs::write(output_path, encoded).with_path(output_path, "write image")
}
