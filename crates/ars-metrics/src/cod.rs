// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::ratio::ratios;
use ars_core::{ArsError, median, validate_inputs};

/// Coefficient of Dispersion: the mean absolute deviation of ratios from
/// their median, as a percentage of the median.
///
/// COD measures horizontal equity in assessment: properties with a similar
/// fair market value should be similarly assessed. Lower COD means higher
/// uniformity.
pub fn cod(ratio: &[f64]) -> Result<f64, ArsError> {
    validate_inputs(&[ratio], true)?;

    let median_ratio = median(ratio);
    if median_ratio <= 0.0 {
        return Err(ArsError::numerical_issue(format!(
            "COD requires a positive median ratio; got {median_ratio}"
        )));
    }

    let n = ratio.len() as f64;
    let mean_abs_deviation = ratio
        .iter()
        .map(|r| (r - median_ratio).abs())
        .sum::<f64>()
        / n;

    Ok(100.0 / median_ratio * mean_abs_deviation)
}

/// COD computed from a raw (estimate, sale price) pair.
pub fn cod_pair(estimate: &[f64], sale_price: &[f64]) -> Result<f64, ArsError> {
    let ratio = ratios(estimate, sale_price)?;
    cod(&ratio)
}
