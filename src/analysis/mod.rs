//! Statistical analysis of submitted images

/// Per-channel intensity histograms
pub mod histogram;

pub use histogram::ChannelHistogram;
