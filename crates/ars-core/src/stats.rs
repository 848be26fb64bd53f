// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::ArsError;

/// Arithmetic mean. Callers must pass a non-empty sequence; every public
/// entry point validates length before reaching here.
pub fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

/// Median with even-length averaging. Callers must pass a non-empty sequence.
pub fn median(x: &[f64]) -> f64 {
    let mut sorted = x.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Quantile with linear interpolation between order statistics.
pub fn quantile(x: &[f64], q: f64) -> Result<f64, ArsError> {
    if x.is_empty() {
        return Err(ArsError::invalid_input(
            "quantile requires a non-empty sequence",
        ));
    }
    if !q.is_finite() || !(0.0..=1.0).contains(&q) {
        return Err(ArsError::invalid_input(format!(
            "quantile probability must be in [0, 1]; got {q}"
        )));
    }

    let mut sorted = x.to_vec();
    sorted.sort_by(f64::total_cmp);

    let position = q * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let fraction = position - below as f64;
    Ok(sorted[below] + fraction * (sorted[above] - sorted[below]))
}

/// Population standard deviation. Callers must pass a non-empty sequence.
pub fn population_std(x: &[f64]) -> f64 {
    let mu = mean(x);
    let variance = x.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / x.len() as f64;
    variance.sqrt()
}
