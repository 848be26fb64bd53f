// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use ars_core::{ArsError, ConfidenceInterval, quantile, validate_inputs};
use ars_metrics::{cod_pair, prd};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;

const DEFAULT_NBOOT: usize = 1000;
const DEFAULT_ALPHA: f64 = 0.05;

/// Configuration for the non-parametric bootstrap.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct BootstrapConfig {
    pub nboot: usize,
    pub alpha: f64,
    /// Base seed for the resampling stream. `None` draws a fresh OS seed;
    /// a fixed value makes the interval fully deterministic.
    pub seed: Option<u64>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            nboot: DEFAULT_NBOOT,
            alpha: DEFAULT_ALPHA,
            seed: None,
        }
    }
}

impl BootstrapConfig {
    fn validate(&self) -> Result<(), ArsError> {
        if self.nboot == 0 {
            return Err(ArsError::invalid_input(
                "BootstrapConfig.nboot must be >= 1; got 0",
            ));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(ArsError::invalid_input(format!(
                "BootstrapConfig.alpha must be in (0, 1); got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// Metrics with a bootstrapped interval. PRB is excluded: its estimator has
/// a closed-form sampling distribution (see [`crate::prb_ci`]).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootMetric {
    Cod,
    Prd,
}

impl BootMetric {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cod => "cod",
            Self::Prd => "prd",
        }
    }

    fn compute(&self, estimate: &[f64], sale_price: &[f64]) -> Result<f64, ArsError> {
        match self {
            Self::Cod => cod_pair(estimate, sale_price),
            Self::Prd => prd(estimate, sale_price),
        }
    }
}

/// Non-parametric bootstrap confidence interval for a paired metric.
///
/// Draws `nboot` row-wise resamples of the (estimate, sale price) pairs with
/// replacement, recomputes the metric on each, and returns the
/// `(alpha/2, 1 - alpha/2)` empirical quantiles of the bootstrap
/// distribution. Each iteration derives its own RNG from the base seed, so a
/// fixed seed gives identical output regardless of how rayon schedules the
/// iterations.
pub fn boot_ci(
    metric: BootMetric,
    estimate: &[f64],
    sale_price: &[f64],
    config: &BootstrapConfig,
) -> Result<ConfidenceInterval, ArsError> {
    config.validate()?;
    validate_inputs(&[estimate, sale_price], true)?;

    let n = estimate.len();
    let base_seed = config
        .seed
        .unwrap_or_else(|| StdRng::from_entropy().next_u64());

    let estimates = (0..config.nboot)
        .into_par_iter()
        .map(|iteration| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(iteration as u64));
            let mut estimate_sample = Vec::with_capacity(n);
            let mut sale_price_sample = Vec::with_capacity(n);
            for _ in 0..n {
                let row = rng.gen_range(0..n);
                estimate_sample.push(estimate[row]);
                sale_price_sample.push(sale_price[row]);
            }
            metric.compute(&estimate_sample, &sale_price_sample)
        })
        .collect::<Result<Vec<f64>, ArsError>>()?;

    let lower = quantile(&estimates, config.alpha / 2.0)?;
    let upper = quantile(&estimates, 1.0 - config.alpha / 2.0)?;
    ConfidenceInterval::new(lower, upper)
}

/// Bootstrap confidence interval for COD.
pub fn cod_ci(
    estimate: &[f64],
    sale_price: &[f64],
    config: &BootstrapConfig,
) -> Result<ConfidenceInterval, ArsError> {
    boot_ci(BootMetric::Cod, estimate, sale_price, config)
}

/// Bootstrap confidence interval for PRD.
pub fn prd_ci(
    estimate: &[f64],
    sale_price: &[f64],
    config: &BootstrapConfig,
) -> Result<ConfidenceInterval, ArsError> {
    boot_ci(BootMetric::Prd, estimate, sale_price, config)
}
