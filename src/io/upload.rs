//! Submission pipeline: validated form parameters in, three artifacts out

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::analysis::ChannelHistogram;
use crate::io::error::{Result, SwapError};
use crate::io::image::{decode_rgb, save_grid};
use crate::io::storage::{SubmissionId, SubmissionPaths};
use crate::io::visualization::HistogramRenderer;
use crate::spatial::grid::dimensions;
use crate::transform::{Axis, StripeWidth, swap_stripes, swapped_pair_count};

/// Transform parameters taken from a submission form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionParams {
    /// Axis along which stripes are exchanged
    pub axis: Axis,
    /// Rows or columns per stripe
    pub stripe_width: StripeWidth,
}

impl SubmissionParams {
    /// Validate the raw `direction` selector and `stripe_width` form fields
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidParameter`] if the direction is not
    /// `"horizontal"` or `"vertical"`, or the width is not positive
    pub fn from_form(direction: &str, stripe_width: i64) -> Result<Self> {
        Ok(Self {
            axis: Axis::from_direction(direction)?,
            stripe_width: StripeWidth::new(stripe_width)?,
        })
    }
}

/// Outcome of one processed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Identifier prefixing every artifact
    pub id: SubmissionId,
    /// Where the artifacts were written
    pub paths: SubmissionPaths,
    /// Decoded image size as (`height`, `width`)
    pub dimensions: (usize, usize),
    /// Number of stripe pairs that were exchanged
    pub swapped_pairs: usize,
}

/// Processes uploaded images into stored originals, histograms and results
#[derive(Debug, Clone)]
pub struct UploadHandler {
    upload_dir: PathBuf,
    renderer: HistogramRenderer,
}

impl UploadHandler {
    /// Create a handler storing artifacts under `upload_dir`
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            renderer: HistogramRenderer::default(),
        }
    }

    /// Replace the histogram renderer
    #[must_use]
    pub fn with_renderer(mut self, renderer: HistogramRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Directory receiving the artifacts
    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Run one submission end to end
    ///
    /// The bytes are decoded before anything is written, so malformed uploads
    /// leave no files behind. The histogram is taken from the decoded original
    /// and the transform works on its own copy.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The bytes are not a decodable image
    /// - Any artifact cannot be written
    pub fn handle(
        &self,
        file_name: &str,
        bytes: &[u8],
        params: SubmissionParams,
        id: SubmissionId,
    ) -> Result<SubmissionReport> {
        let paths = SubmissionPaths::derive(&self.upload_dir, &id, file_name);

        let original = decode_rgb(bytes).map_err(|e| match e {
            SwapError::DecodeFailure { source, .. } => SwapError::DecodeFailure {
                origin: PathBuf::from(file_name),
                source,
            },
            other => other,
        })?;
        let (height, width) = dimensions(&original);
        debug!("Decoded '{file_name}' as {width}x{height} for submission {id}");

        paths.write_original(bytes)?;

        let histogram = ChannelHistogram::from_grid(&original);
        self.renderer.export(&histogram, &paths.histogram)?;

        let result = swap_stripes(&original, params.axis, params.stripe_width);
        save_grid(&result, &paths.result)?;

        let swapped_pairs =
            swapped_pair_count(result.len_of(params.axis.as_ndarray()), params.stripe_width);
        info!(
            "Submission {id}: swapped {swapped_pairs} {} stripe pair(s) of width {} -> {}",
            params.axis,
            params.stripe_width,
            paths.result.display()
        );

        Ok(SubmissionReport {
            id,
            paths,
            dimensions: (height, width),
            swapped_pairs,
        })
    }
}
