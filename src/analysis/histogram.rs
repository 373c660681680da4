//! Per-channel intensity histogram of a pixel grid

use ndarray::Axis;

use crate::io::configuration::HISTOGRAM_BINS;
use crate::spatial::PixelGrid;
use crate::spatial::grid::CHANNELS;

/// Intensity counts for the red, green and blue channels
///
/// Each channel has one bin per 8-bit intensity value. Built from the
/// original grid so that it reflects pre-transform pixel values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistogram {
    counts: [[u64; HISTOGRAM_BINS]; CHANNELS],
    pixel_count: u64,
}

impl ChannelHistogram {
    /// Count intensities of every pixel in `grid`
    ///
    /// Channels beyond the third are ignored.
    pub fn from_grid(grid: &PixelGrid) -> Self {
        let mut counts = [[0u64; HISTOGRAM_BINS]; CHANNELS];
        let mut pixel_count = 0;

        for pixel in grid.lanes(Axis(2)) {
            pixel_count += 1;
            for (channel, &value) in pixel.iter().take(CHANNELS).enumerate() {
                if let Some(bin) = counts
                    .get_mut(channel)
                    .and_then(|bins| bins.get_mut(usize::from(value)))
                {
                    *bin += 1;
                }
            }
        }

        Self {
            counts,
            pixel_count,
        }
    }

    /// Bins of one channel (0 = red, 1 = green, 2 = blue)
    pub fn channel(&self, index: usize) -> Option<&[u64; HISTOGRAM_BINS]> {
        self.counts.get(index)
    }

    /// Iterate over the three channels in RGB order
    pub fn channels(&self) -> impl Iterator<Item = &[u64; HISTOGRAM_BINS]> {
        self.counts.iter()
    }

    /// Tallest bin across all channels
    pub fn max_count(&self) -> u64 {
        self.counts
            .iter()
            .flat_map(|bins| bins.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Number of pixels that were counted
    pub const fn pixel_count(&self) -> u64 {
        self.pixel_count
    }
}
