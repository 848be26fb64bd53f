// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use ars_core::{ArsError, validate_inputs};

/// Elementwise assessment ratios `estimate[i] / sale_price[i]`.
///
/// The ratio is the fundamental unit of assessment-performance analysis:
/// the estimated fair market value over the actual sale price, per property.
/// Both sequences are validated as a positive paired sample first.
pub fn ratios(estimate: &[f64], sale_price: &[f64]) -> Result<Vec<f64>, ArsError> {
    validate_inputs(&[estimate, sale_price], true)?;
    Ok(estimate
        .iter()
        .zip(sale_price)
        .map(|(e, s)| e / s)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::ratios;

    #[test]
    fn elementwise_quotients() {
        let out = ratios(&[2.0, 3.0, 5.0], &[4.0, 3.0, 2.0]).expect("valid pair");
        assert_eq!(out, vec![0.5, 1.0, 2.5]);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        ratios(&[1.0, 2.0], &[1.0, 2.0, 3.0]).expect_err("length mismatch must fail");
    }

    #[test]
    fn zero_sale_price_is_rejected() {
        ratios(&[1.0, 2.0], &[1.0, 0.0]).expect_err("zero sale price must fail");
    }
}
