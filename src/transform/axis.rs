//! Transform parameters: the partitioned axis and the stripe width

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::io::configuration::{DIRECTION_HORIZONTAL, DIRECTION_VERTICAL};
use crate::io::error::{Result, SwapError, invalid_parameter};

/// Dimension of the grid that is cut into stripes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Stripes are groups of whole rows (the "horizontal" direction)
    Rows,
    /// Stripes are groups of whole columns (the "vertical" direction)
    Columns,
}

impl Axis {
    /// Map a form direction selector onto an axis
    ///
    /// `"horizontal"` swaps along rows and `"vertical"` along columns.
    /// Matching is exact, like the selector values of the upload form.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidParameter`] for any other selector
    pub fn from_direction(direction: &str) -> Result<Self> {
        match direction {
            DIRECTION_HORIZONTAL => Ok(Self::Rows),
            DIRECTION_VERTICAL => Ok(Self::Columns),
            other => Err(invalid_parameter(
                "direction",
                &other,
                &format!("expected '{DIRECTION_HORIZONTAL}' or '{DIRECTION_VERTICAL}'"),
            )),
        }
    }

    /// The form selector naming this axis
    pub const fn direction(self) -> &'static str {
        match self {
            Self::Rows => DIRECTION_HORIZONTAL,
            Self::Columns => DIRECTION_VERTICAL,
        }
    }

    /// The matching `ndarray` axis of a `[height, width, channels]` grid
    pub const fn as_ndarray(self) -> ndarray::Axis {
        match self {
            Self::Rows => ndarray::Axis(0),
            Self::Columns => ndarray::Axis(1),
        }
    }
}

impl FromStr for Axis {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_direction(s)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.direction())
    }
}

/// Number of rows or columns in one stripe, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StripeWidth(NonZeroUsize);

impl StripeWidth {
    /// Validate a caller-supplied width
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidParameter`] if `value` is zero or negative,
    /// or does not fit in `usize`
    pub fn new(value: i64) -> Result<Self> {
        let width = usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| invalid_parameter("stripe_width", &value, &"must be at least 1"))?;
        Ok(Self(width))
    }

    /// The width as a plain count
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for StripeWidth {
    fn from(width: NonZeroUsize) -> Self {
        Self(width)
    }
}

impl fmt::Display for StripeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
