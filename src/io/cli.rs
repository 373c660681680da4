//! Command-line interface for verified stripe swap submissions

use crate::io::challenge::{ChallengeGate, Responder};
use crate::io::configuration::{
    DEFAULT_DIRECTION, DEFAULT_STRIPE_WIDTH, DEFAULT_UPLOAD_DIR, HISTOGRAM_SUFFIX, RESULT_SUFFIX,
    SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, SwapError, WithPath};
use crate::io::progress::ProgressManager;
use crate::io::storage::SubmissionId;
use crate::io::upload::{SubmissionParams, SubmissionReport, UploadHandler};
use clap::Parser;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "stripeswap")]
#[command(
    author,
    version,
    about = "Swap alternating image stripes and chart per-channel histograms"
)]
/// Command-line arguments for the stripe swap tool
pub struct Cli {
    /// Input image file or directory of images to submit
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Stripe direction: "horizontal" swaps rows, "vertical" swaps columns
    #[arg(short, long, default_value = DEFAULT_DIRECTION)]
    pub direction: String,

    /// Rows or columns per stripe
    #[arg(short = 'w', long, default_value_t = DEFAULT_STRIPE_WIDTH, allow_negative_numbers = true)]
    pub stripe_width: i64,

    /// Directory receiving originals, histograms and results
    #[arg(short, long, default_value = DEFAULT_UPLOAD_DIR)]
    pub output_dir: PathBuf,

    /// Seed for reproducible challenges; submission identifiers stay random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// A target file that could not be turned into a submission
#[derive(Debug)]
pub struct FileFailure {
    /// File that failed
    pub path: PathBuf,
    /// Why it failed
    pub error: SwapError,
}

/// Everything one verified session produced
///
/// Artifacts of successful files are on disk even when other files failed,
/// so both lists are always reported.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Submissions stored, in target order
    pub reports: Vec<SubmissionReport>,
    /// Files skipped because of an error, in target order
    pub failures: Vec<FileFailure>,
}

impl BatchOutcome {
    /// True when every collected file was stored
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Orchestrates one verified session over every image in the target
pub struct FileProcessor<R> {
    cli: Cli,
    gate: ChallengeGate,
    responder: R,
    id_rng: StdRng,
    progress_manager: Option<ProgressManager>,
}

impl<R: Responder> FileProcessor<R> {
    /// Create a processor answering challenges through `responder`
    pub fn new(cli: Cli, responder: R) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let gate = ChallengeGate::new(cli.seed);
        // Identifiers must not repeat across runs sharing an output directory
        let id_rng = StdRng::from_os_rng();

        Self {
            cli,
            gate,
            responder,
            id_rng,
            progress_manager,
        }
    }

    /// Validate parameters, pass the challenge and process every target file
    ///
    /// Parameters are checked before the challenge is issued and the challenge
    /// is passed before any file is read. A file that fails is recorded in
    /// [`BatchOutcome::failures`] and the remaining files are still processed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The direction or stripe width is invalid
    /// - The target is not a supported image or a directory
    /// - The verification challenge is failed
    pub fn process(&mut self) -> Result<BatchOutcome> {
        let params = SubmissionParams::from_form(&self.cli.direction, self.cli.stripe_width)?;
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("No images found in '{}'", self.cli.target.display());
            return Ok(BatchOutcome::default());
        }

        self.gate.pass(&mut self.responder)?;

        let handler = UploadHandler::new(self.cli.output_dir.clone());

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut outcome = BatchOutcome::default();
        for (index, file) in files.into_iter().enumerate() {
            match self.process_file(&handler, params, &file, index) {
                Ok(report) => outcome.reports.push(report),
                Err(error) => {
                    warn!("Skipping '{}': {error}", file.display());
                    outcome.failures.push(FileFailure { path: file, error });
                }
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(outcome)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_supported_image(target) {
                Ok(vec![target.clone()])
            } else {
                Err(SwapError::UnsupportedTarget {
                    path: target.clone(),
                    reason: "target file must be a PNG or JPEG image",
                })
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory entry")?.path();
                if path.is_file() && is_supported_image(&path) && !is_derived_artifact(&path) {
                    files.push(path);
                }
            }
            files.sort();
            debug!("Collected {} image(s) from '{}'", files.len(), target.display());
            Ok(files)
        } else {
            Err(SwapError::UnsupportedTarget {
                path: target.clone(),
                reason: "target must be an image file or directory",
            })
        }
    }

    fn process_file(
        &mut self,
        handler: &UploadHandler,
        params: SubmissionParams,
        input_path: &Path,
        index: usize,
    ) -> Result<SubmissionReport> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let file_name = input_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let id = SubmissionId::generate(&mut self.id_rng);
        let report = std::fs::read(input_path)
            .with_path(input_path, "read upload")
            .and_then(|bytes| handler.handle(&file_name, &bytes, params, id));

        // Failed files still advance the batch bar
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        report
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

// Outputs of earlier runs written into the scanned directory
fn is_derived_artifact(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(HISTOGRAM_SUFFIX) || stem.ends_with(RESULT_SUFFIX))
}
