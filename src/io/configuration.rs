//! Submission constants and runtime configuration defaults

// Form defaults
/// Direction used when none is given on the command line
pub const DEFAULT_DIRECTION: &str = "horizontal";
/// Stripe width used when none is given on the command line
pub const DEFAULT_STRIPE_WIDTH: i64 = 10;
/// Directory receiving originals, histograms and results
pub const DEFAULT_UPLOAD_DIR: &str = "static/uploads";

/// Direction selector that swaps stripes of rows
pub const DIRECTION_HORIZONTAL: &str = "horizontal";
/// Direction selector that swaps stripes of columns
pub const DIRECTION_VERTICAL: &str = "vertical";

// Histogram layout
/// Number of intensity bins per channel
pub const HISTOGRAM_BINS: usize = 256;
/// Rendered chart width in pixels (multiple of the bin count)
pub const HISTOGRAM_WIDTH: u32 = 512;
/// Rendered chart height in pixels
pub const HISTOGRAM_HEIGHT: u32 = 256;
/// Opacity of each channel's bars when overlaid
pub const HISTOGRAM_ALPHA: f32 = 0.5;
/// Chart background color
pub const HISTOGRAM_BACKGROUND: [u8; 4] = [255, 255, 255, 255];
/// Bar colors for the red, green and blue channels
pub const HISTOGRAM_CHANNEL_COLORS: [[u8; 3]; 3] = [[255, 0, 0], [0, 128, 0], [0, 0, 255]];

// Verification challenge
/// Smallest operand in an arithmetic challenge
pub const CHALLENGE_OPERAND_MIN: u32 = 1;
/// Largest operand in an arithmetic challenge
pub const CHALLENGE_OPERAND_MAX: u32 = 9;
/// Challenges issued before the session is rejected
pub const MAX_CHALLENGE_ATTEMPTS: usize = 3;

// Derived file naming
/// Suffix added to histogram file stems
pub const HISTOGRAM_SUFFIX: &str = "_hist";
/// Extension of rendered histogram files
pub const HISTOGRAM_EXTENSION: &str = "png";
/// Suffix added to result file stems
pub const RESULT_SUFFIX: &str = "_result";
/// Extension of transformed result files
pub const RESULT_EXTENSION: &str = "jpg";
/// File name used when sanitizing leaves nothing
pub const FALLBACK_FILE_NAME: &str = "upload";
/// Input extensions accepted when scanning a target
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
