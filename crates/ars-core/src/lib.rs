// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod diagnostics;
pub mod error;
pub mod interval;
pub mod stats;
pub mod validate;

pub use diagnostics::Diagnostics;
pub use error::ArsError;
pub use interval::ConfidenceInterval;
pub use stats::{mean, median, population_std, quantile};
pub use validate::validate_inputs;

/// Sample sizes below this are statistically unreliable for outlier removal
/// and sales-chasing detection; detectors attach an advisory warning.
pub const SMALL_SAMPLE_N: usize = 30;
