// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::ratio::ratios;
use ars_core::{ArsError, mean};

/// Price-Related Differential: the mean ratio divided by the sale-price
/// weighted mean ratio.
///
/// PRD measures vertical equity. Values above 1 indicate regressivity
/// (lower-value properties assessed at a higher ratio than higher-value
/// ones); values below 1 indicate progressivity.
pub fn prd(estimate: &[f64], sale_price: &[f64]) -> Result<f64, ArsError> {
    let ratio = ratios(estimate, sale_price)?;

    let weight_sum: f64 = sale_price.iter().sum();
    let weighted_mean = ratio
        .iter()
        .zip(sale_price)
        .map(|(r, w)| r * w)
        .sum::<f64>()
        / weight_sum;
    if weighted_mean <= 0.0 || !weighted_mean.is_finite() {
        return Err(ArsError::numerical_issue(format!(
            "PRD requires a positive finite weighted mean ratio; got {weighted_mean}"
        )));
    }

    Ok(mean(&ratio) / weighted_mean)
}
