// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use ars_core::{ArsError, Diagnostics, SMALL_SAMPLE_N, mean, population_std, validate_inputs};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::borrow::Cow;

const DEFAULT_BOUNDS: (f64, f64) = (0.98, 1.02);
const DEFAULT_GAP: f64 = 0.03;
const DEFAULT_SYNTHETIC_DRAWS: usize = 10_000;

/// Sales-chasing detection method.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChasingMethod {
    /// Largest empirical-CDF discontinuity near the ideal ratio.
    Cdf,
    /// Central-mass excess over a synthetic normal distribution.
    Dist,
    /// Both sub-detectors must agree.
    #[default]
    Both,
}

impl ChasingMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cdf => "cdf",
            Self::Dist => "dist",
            Self::Both => "both",
        }
    }
}

/// Policy for samples below the reliability threshold of 30 observations.
///
/// `WarnAndCompute` returns a degraded-but-real verdict alongside the
/// warning; `Suppress` withholds the verdict entirely. One explicit flag,
/// no silent branching.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SmallSamplePolicy {
    #[default]
    WarnAndCompute,
    Suppress,
}

/// Configuration for [`is_sales_chased`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ChasingConfig {
    pub method: ChasingMethod,
    /// Ratio band around the ideal value of 1 where chasing concentrates.
    pub bounds: (f64, f64),
    /// Sensitivity threshold shared by both sub-detectors.
    pub gap: f64,
    /// Synthetic sample size for the distribution-comparison method.
    pub synthetic_draws: usize,
    /// Seed for the synthetic normal draws. `None` draws a fresh OS seed.
    pub seed: Option<u64>,
    pub small_sample_policy: SmallSamplePolicy,
}

impl Default for ChasingConfig {
    fn default() -> Self {
        Self {
            method: ChasingMethod::default(),
            bounds: DEFAULT_BOUNDS,
            gap: DEFAULT_GAP,
            synthetic_draws: DEFAULT_SYNTHETIC_DRAWS,
            seed: None,
            small_sample_policy: SmallSamplePolicy::default(),
        }
    }
}

impl ChasingConfig {
    fn validate(&self) -> Result<(), ArsError> {
        if !self.gap.is_finite() || self.gap <= 0.0 || self.gap >= 1.0 {
            return Err(ArsError::invalid_input(format!(
                "ChasingConfig.gap must be in (0, 1); got {}",
                self.gap
            )));
        }
        let (low, high) = self.bounds;
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ArsError::invalid_input(format!(
                "ChasingConfig.bounds must be a strictly increasing pair; got ({low}, {high})"
            )));
        }
        if self.synthetic_draws == 0 {
            return Err(ArsError::invalid_input(
                "ChasingConfig.synthetic_draws must be >= 1; got 0",
            ));
        }
        Ok(())
    }
}

/// Chasing verdict with diagnostics. `chased` is `None` only when a small
/// sample was suppressed by policy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ChasingResult {
    pub chased: Option<bool>,
    pub diagnostics: Diagnostics,
}

#[derive(Clone, Copy, Debug)]
struct CdfScan {
    max_gap: f64,
    jump_ratio: f64,
    chased: bool,
}

#[derive(Clone, Copy, Debug)]
struct DistScan {
    pct_actual: f64,
    pct_ideal: f64,
    chased: bool,
}

fn scan_cdf(ratio: &[f64], bounds: (f64, f64), gap: f64) -> CdfScan {
    let mut sorted = ratio.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();

    // Empirical CDF with ties sharing the value of their last occurrence.
    let mut cdf = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let mut end = start;
        while end + 1 < n && sorted[end + 1] == sorted[start] {
            end += 1;
        }
        let value = (end + 1) as f64 / n as f64;
        for position in start..=end {
            cdf[position] = value;
        }
        start = end + 1;
    }

    let mut max_gap = 0.0;
    let mut jump_at = 0;
    for i in 0..n - 1 {
        let step = cdf[i + 1] - cdf[i];
        if step > max_gap {
            max_gap = step;
            jump_at = i;
        }
    }

    // The jump is located at the left edge of the largest discontinuity; it
    // must land strictly inside the bounds to count as chasing near 1.
    let jump_ratio = sorted[jump_at];
    CdfScan {
        max_gap,
        jump_ratio,
        chased: max_gap > gap && jump_ratio > bounds.0 && jump_ratio < bounds.1,
    }
}

fn fraction_in_bounds(values: &[f64], bounds: (f64, f64)) -> f64 {
    let inside = values
        .iter()
        .filter(|&&v| v >= bounds.0 && v <= bounds.1)
        .count();
    inside as f64 / values.len() as f64
}

fn scan_dist(
    ratio: &[f64],
    bounds: (f64, f64),
    gap: f64,
    draws: usize,
    rng: &mut StdRng,
) -> Result<DistScan, ArsError> {
    let mu = mean(ratio);
    let sigma = population_std(ratio);
    let normal = Normal::new(mu, sigma).map_err(|err| {
        ArsError::numerical_issue(format!(
            "synthetic normal distribution with mean={mu}, std={sigma}: {err}"
        ))
    })?;

    let synthetic: Vec<f64> = (0..draws).map(|_| normal.sample(rng)).collect();
    let pct_ideal = fraction_in_bounds(&synthetic, bounds);
    let pct_actual = fraction_in_bounds(ratio, bounds);

    Ok(DistScan {
        pct_actual,
        pct_ideal,
        chased: pct_actual - pct_ideal > gap,
    })
}

/// Detects likely sales chasing in a ratio distribution.
///
/// The CDF method looks for a discontinuity jump near the ideal ratio of 1:
/// chased samples show a "flat spot" where many ratios sit at the same
/// value. The distribution method compares the observed central mass against
/// a synthetic normal with the same mean and standard deviation: chased
/// ratios bunch up around 1 more than a natural distribution would. This is
/// a heuristic screen, not a statistical test.
pub fn is_sales_chased(ratio: &[f64], config: &ChasingConfig) -> Result<ChasingResult, ArsError> {
    config.validate()?;
    validate_inputs(&[ratio], true)?;

    let mut diagnostics = Diagnostics {
        n: ratio.len(),
        method: Cow::Borrowed(config.method.name()),
        ..Diagnostics::default()
    };

    if ratio.len() < SMALL_SAMPLE_N {
        diagnostics.warnings.push(format!(
            "sales-chasing detection is unreliable on a small sample (n={} < {SMALL_SAMPLE_N})",
            ratio.len()
        ));
        if config.small_sample_policy == SmallSamplePolicy::Suppress {
            diagnostics
                .notes
                .push("verdict suppressed by small-sample policy".to_string());
            return Ok(ChasingResult {
                chased: None,
                diagnostics,
            });
        }
    }

    let cdf_scan = match config.method {
        ChasingMethod::Cdf | ChasingMethod::Both => {
            let scan = scan_cdf(ratio, config.bounds, config.gap);
            diagnostics.notes.push(format!(
                "cdf_max_gap={:.4}, jump_ratio={:.4}",
                scan.max_gap, scan.jump_ratio
            ));
            Some(scan)
        }
        ChasingMethod::Dist => None,
    };

    let dist_scan = match config.method {
        ChasingMethod::Dist | ChasingMethod::Both => {
            let seed = config
                .seed
                .unwrap_or_else(|| StdRng::from_entropy().next_u64());
            diagnostics.seed = Some(seed);
            let mut rng = StdRng::seed_from_u64(seed);
            let scan = scan_dist(
                ratio,
                config.bounds,
                config.gap,
                config.synthetic_draws,
                &mut rng,
            )?;
            diagnostics.notes.push(format!(
                "pct_actual={:.4}, pct_ideal={:.4}",
                scan.pct_actual, scan.pct_ideal
            ));
            Some(scan)
        }
        ChasingMethod::Cdf => None,
    };

    let chased = match (cdf_scan, dist_scan) {
        (Some(cdf), None) => cdf.chased,
        (None, Some(dist)) => dist.chased,
        (Some(cdf), Some(dist)) => cdf.chased && dist.chased,
        (None, None) => unreachable!("every method runs at least one scan"),
    };

    Ok(ChasingResult {
        chased: Some(chased),
        diagnostics,
    })
}
