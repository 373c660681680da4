//! Histogram chart rendering
//!
//! Draws the three channel histograms as overlaid translucent bar charts on a
//! white canvas, one bar per intensity bin, all scaled to the tallest bin.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::analysis::ChannelHistogram;
use crate::io::configuration::{
    HISTOGRAM_ALPHA, HISTOGRAM_BACKGROUND, HISTOGRAM_BINS, HISTOGRAM_CHANNEL_COLORS,
    HISTOGRAM_HEIGHT, HISTOGRAM_WIDTH,
};
use crate::io::error::{Result, SwapError, WithPath, invalid_parameter};

/// Renders [`ChannelHistogram`]s into raster charts
#[derive(Debug, Clone, Copy)]
pub struct HistogramRenderer {
    width: u32,
    height: u32,
    alpha: f32,
}

impl Default for HistogramRenderer {
    fn default() -> Self {
        Self {
            width: HISTOGRAM_WIDTH,
            height: HISTOGRAM_HEIGHT,
            alpha: HISTOGRAM_ALPHA,
        }
    }
}

impl HistogramRenderer {
    /// Create a renderer with a custom canvas size
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidParameter`] if `width` is not a positive
    /// multiple of the bin count, `height` is zero, or `alpha` is outside `0..=1`
    pub fn new(width: u32, height: u32, alpha: f32) -> Result<Self> {
        let bins = HISTOGRAM_BINS as u32;
        if width == 0 || width % bins != 0 {
            return Err(invalid_parameter(
                "histogram width",
                &width,
                &format!("must be a positive multiple of {bins}"),
            ));
        }
        if height == 0 {
            return Err(invalid_parameter(
                "histogram height",
                &height,
                &"must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&alpha) {
            return Err(invalid_parameter(
                "histogram alpha",
                &alpha,
                &"must lie in 0..=1",
            ));
        }

        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    /// Canvas size as (`width`, `height`)
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Draw the chart in memory
    pub fn render(&self, histogram: &ChannelHistogram) -> RgbaImage {
        let bin_width = self.width / HISTOGRAM_BINS as u32;
        let max_count = histogram.max_count();

        // Bar heights in pixels per channel and bin
        let bar_heights: Vec<Vec<u32>> = histogram
            .channels()
            .map(|bins| {
                bins.iter()
                    .map(|&count| self.bar_height(count, max_count))
                    .collect()
            })
            .collect();

        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let bin = (x / bin_width) as usize;
            let from_bottom = self.height - y;

            let mut color = HISTOGRAM_BACKGROUND.map(f32::from);
            for (heights, bar_color) in bar_heights.iter().zip(HISTOGRAM_CHANNEL_COLORS) {
                let covered = heights
                    .get(bin)
                    .is_some_and(|&height| height >= from_bottom);
                if covered {
                    for (dst, src) in color.iter_mut().zip(bar_color) {
                        *dst = (*dst).mul_add(1.0 - self.alpha, f32::from(src) * self.alpha);
                    }
                }
            }

            Rgba(color.map(|c| c.round().clamp(0.0, 255.0) as u8))
        })
    }

    /// Render and save the chart as an image file, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The image cannot be saved to the specified path
    pub fn export(&self, histogram: &ChannelHistogram, output_path: &Path) -> Result<()> {
        let chart = self.render(histogram);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }

        chart.save(output_path).map_err(|e| SwapError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
    }

    fn bar_height(&self, count: u64, max_count: u64) -> u32 {
        if max_count == 0 {
            return 0;
        }
        let scaled = u128::from(count) * u128::from(self.height) / u128::from(max_count);
        u32::try_from(scaled).unwrap_or(self.height)
    }
}
