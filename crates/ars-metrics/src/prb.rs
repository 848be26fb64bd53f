// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::ratio::ratios;
use ars_core::{ArsError, mean, median};

/// Fitted two-parameter ordinary least squares line `y = intercept + slope*x`.
///
/// Carries the sums needed for closed-form slope inference so the interval
/// engine can reuse the fit without re-running the regression.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OlsFit {
    pub slope: f64,
    pub intercept: f64,
    /// Residual sum of squares.
    pub sse: f64,
    /// Centered sum of squares of the regressor.
    pub sxx: f64,
    /// Residual degrees of freedom (n - 2).
    pub df: usize,
}

impl OlsFit {
    /// Standard error of the slope coefficient.
    pub fn slope_standard_error(&self) -> Result<f64, ArsError> {
        if self.df == 0 {
            return Err(ArsError::numerical_issue(
                "slope standard error requires residual degrees of freedom (n > 2)",
            ));
        }
        let residual_variance = self.sse / self.df as f64;
        Ok((residual_variance / self.sxx).sqrt())
    }
}

fn fit_line(x: &[f64], y: &[f64]) -> Result<OlsFit, ArsError> {
    let mean_x = mean(x);
    let mean_y = mean(y);

    let sxx = x.iter().map(|v| (v - mean_x).powi(2)).sum::<f64>();
    if sxx <= 0.0 {
        return Err(ArsError::numerical_issue(
            "rank-deficient regression: regressor has zero variance",
        ));
    }
    let sxy = x
        .iter()
        .zip(y)
        .map(|(xv, yv)| (xv - mean_x) * (yv - mean_y))
        .sum::<f64>();

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(ArsError::numerical_issue(format!(
            "non-finite regression coefficients: slope={slope}, intercept={intercept}"
        )));
    }

    let sse = x
        .iter()
        .zip(y)
        .map(|(xv, yv)| {
            let residual = yv - (intercept + slope * xv);
            residual * residual
        })
        .sum::<f64>();

    Ok(OlsFit {
        slope,
        intercept,
        sse,
        sxx,
        df: x.len().saturating_sub(2),
    })
}

/// Fits the PRB regression and returns the full line.
///
/// The response is each ratio's relative deviation from the median ratio;
/// the regressor is `log2((estimate/median_ratio + sale_price) / 2)`, a
/// proxy for value level. The regression includes an intercept and PRB is
/// the slope coefficient.
pub fn prb_fit(estimate: &[f64], sale_price: &[f64]) -> Result<OlsFit, ArsError> {
    let ratio = ratios(estimate, sale_price)?;
    let median_ratio = median(&ratio);
    if median_ratio <= 0.0 {
        return Err(ArsError::numerical_issue(format!(
            "PRB requires a positive median ratio; got {median_ratio}"
        )));
    }

    let lhs: Vec<f64> = ratio
        .iter()
        .map(|r| (r - median_ratio) / median_ratio)
        .collect();
    let rhs: Vec<f64> = estimate
        .iter()
        .zip(sale_price)
        .map(|(e, s)| ((e / median_ratio + s) / 2.0).log2())
        .collect();

    fit_line(&rhs, &lhs)
}

/// Price-Related Bias: the slope of the PRB regression.
///
/// A PRB of 0.02 means ratios increase by 2% on average when value doubles.
/// Positive values indicate progressivity, negative values regressivity.
pub fn prb(estimate: &[f64], sale_price: &[f64]) -> Result<f64, ArsError> {
    Ok(prb_fit(estimate, sale_price)?.slope)
}
