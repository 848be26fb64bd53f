// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use ars_core::{ArsError, ConfidenceInterval};
use ars_metrics::prb_fit;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// PRB point estimate with its closed-form confidence interval.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrbEstimate {
    pub prb: f64,
    pub ci: ConfidenceInterval,
}

/// Closed-form `(1 - alpha)` confidence interval for PRB.
///
/// PRB is an OLS slope, so its sampling distribution is already parametric:
/// `slope ± t(1 - alpha/2, n - 2) * SE(slope)`. Bootstrapping it would be
/// redundant and noisier than the exact interval.
pub fn prb_ci(estimate: &[f64], sale_price: &[f64], alpha: f64) -> Result<PrbEstimate, ArsError> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(ArsError::invalid_input(format!(
            "alpha must be in (0, 1); got {alpha}"
        )));
    }

    let fit = prb_fit(estimate, sale_price)?;
    let standard_error = fit.slope_standard_error()?;

    let t = StudentsT::new(0.0, 1.0, fit.df as f64)
        .map_err(|err| {
            ArsError::numerical_issue(format!(
                "Student's t distribution with {} degrees of freedom: {err}",
                fit.df
            ))
        })?
        .inverse_cdf(1.0 - alpha / 2.0);

    let half_width = t * standard_error;
    Ok(PrbEstimate {
        prb: fit.slope,
        ci: ConfidenceInterval::new(fit.slope - half_width, fit.slope + half_width)?,
    })
}
