// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use ars_core::{ArsError, Diagnostics, SMALL_SAMPLE_N, quantile, validate_inputs};
use std::borrow::Cow;

const DEFAULT_IQR_MULT: f64 = 3.0;
const CENTRAL_BAND_LOWER: f64 = 0.05;
const CENTRAL_BAND_UPPER: f64 = 0.95;

/// Outlier classification method.
///
/// Each variant carries its own parameters, so an unrecognized method is
/// unrepresentable and bad parameters fail validation up front.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutlierMethod {
    /// Flag values outside `[Q1 - mult*IQR, Q3 + mult*IQR]`.
    Iqr { mult: f64 },
    /// Flag values outside the `[lower, upper]` quantile band.
    Quantile { lower: f64, upper: f64 },
}

impl Default for OutlierMethod {
    fn default() -> Self {
        Self::Iqr {
            mult: DEFAULT_IQR_MULT,
        }
    }
}

impl OutlierMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Iqr { .. } => "iqr",
            Self::Quantile { .. } => "quantile",
        }
    }

    fn validate(&self) -> Result<(), ArsError> {
        match *self {
            Self::Iqr { mult } => {
                if !mult.is_finite() || mult <= 0.0 {
                    return Err(ArsError::invalid_input(format!(
                        "OutlierMethod::Iqr mult must be finite and > 0; got {mult}"
                    )));
                }
            }
            Self::Quantile { lower, upper } => {
                if !lower.is_finite() || !upper.is_finite() {
                    return Err(ArsError::invalid_input(format!(
                        "OutlierMethod::Quantile bounds must be finite; got ({lower}, {upper})"
                    )));
                }
                if !(0.0..=1.0).contains(&lower) || !(0.0..=1.0).contains(&upper) || lower >= upper
                {
                    return Err(ArsError::invalid_input(format!(
                        "OutlierMethod::Quantile requires 0 <= lower < upper <= 1; got ({lower}, {upper})"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Outlier flags parallel to the input, with advisory diagnostics.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct OutlierResult {
    pub flags: Vec<bool>,
    pub diagnostics: Diagnostics,
}

fn quantile_flags(x: &[f64], lower: f64, upper: f64) -> Result<Vec<bool>, ArsError> {
    let low = quantile(x, lower)?;
    let high = quantile(x, upper)?;
    Ok(x.iter().map(|&v| v < low || v > high).collect())
}

fn iqr_flags(x: &[f64], mult: f64) -> Result<Vec<bool>, ArsError> {
    let q1 = quantile(x, 0.25)?;
    let q3 = quantile(x, 0.75)?;
    let band = mult * (q3 - q1);
    Ok(x.iter().map(|&v| v < q1 - band || v > q3 + band).collect())
}

/// Flags observations classified as outliers by the chosen method.
///
/// Advisory conditions are reported through `diagnostics.warnings` without
/// changing the flags: IQR-flagged values that still sit inside the central
/// 5-95% quantile band indicate a narrow or skewed distribution, and flagging
/// anything in a sample below 30 observations is statistically unreliable.
pub fn is_outlier(x: &[f64], method: &OutlierMethod) -> Result<OutlierResult, ArsError> {
    method.validate()?;
    validate_inputs(&[x], true)?;

    let flags = match *method {
        OutlierMethod::Iqr { mult } => iqr_flags(x, mult)?,
        OutlierMethod::Quantile { lower, upper } => quantile_flags(x, lower, upper)?,
    };

    let mut diagnostics = Diagnostics {
        n: x.len(),
        method: Cow::Borrowed(method.name()),
        ..Diagnostics::default()
    };

    if matches!(method, OutlierMethod::Iqr { .. }) {
        let central = quantile_flags(x, CENTRAL_BAND_LOWER, CENTRAL_BAND_UPPER)?;
        if flags
            .iter()
            .zip(&central)
            .any(|(&flagged, &outside_central)| flagged && !outside_central)
        {
            diagnostics.warnings.push(
                "some values flagged as outliers lie within the central 5-95% quantile band; \
                 check for a narrow or skewed distribution"
                    .to_string(),
            );
        }
    }

    let flagged_count = flags.iter().filter(|&&f| f).count();
    if flagged_count > 0 && x.len() < SMALL_SAMPLE_N {
        diagnostics.warnings.push(format!(
            "values flagged as outliers in a small sample (n={} < {SMALL_SAMPLE_N}); \
             use caution when removing values",
            x.len()
        ));
    }
    diagnostics
        .notes
        .push(format!("flagged={flagged_count} of n={}", x.len()));

    Ok(OutlierResult { flags, diagnostics })
}

#[cfg(test)]
mod tests {
    use super::{OutlierMethod, is_outlier};

    #[test]
    fn default_method_is_iqr_with_mult_three() {
        assert_eq!(OutlierMethod::default(), OutlierMethod::Iqr { mult: 3.0 });
    }

    #[test]
    fn clean_data_has_no_iqr_outliers() {
        let x: Vec<f64> = (0..50).map(|i| 0.9 + 0.004 * i as f64).collect();
        let out = is_outlier(&x, &OutlierMethod::default()).expect("valid input");
        assert!(out.flags.iter().all(|&f| !f));
        assert!(out.diagnostics.warnings.is_empty());
        assert_eq!(out.diagnostics.method, "iqr");
    }

    #[test]
    fn extreme_value_is_flagged_by_iqr() {
        let mut x: Vec<f64> = (0..40).map(|i| 0.9 + 0.005 * i as f64).collect();
        x.push(50.0);
        let out = is_outlier(&x, &OutlierMethod::default()).expect("valid input");
        assert!(out.flags[40]);
        assert_eq!(out.flags.iter().filter(|&&f| f).count(), 1);
    }

    #[test]
    fn full_range_quantile_band_flags_nothing() {
        let x: Vec<f64> = (0..40).map(|i| 1.0 + 0.01 * i as f64).collect();
        let out = is_outlier(
            &x,
            &OutlierMethod::Quantile {
                lower: 0.0,
                upper: 1.0,
            },
        )
        .expect("valid input");
        assert!(out.flags.iter().all(|&f| !f));
    }

    #[test]
    fn quantile_band_flags_both_tails() {
        let x: Vec<f64> = (0..100).map(|i| 1.0 + 0.01 * i as f64).collect();
        let out = is_outlier(
            &x,
            &OutlierMethod::Quantile {
                lower: 0.05,
                upper: 0.95,
            },
        )
        .expect("valid input");
        let flagged = out.flags.iter().filter(|&&f| f).count();
        // Roughly 5% below and 5% above the interpolated quantiles.
        assert!((6..=14).contains(&flagged), "flagged {flagged}");
        assert!(out.flags[0] && out.flags[99]);
        assert!(!out.flags[50]);
    }

    #[test]
    fn narrow_distribution_triggers_advisory_warning() {
        // IQR collapses to a point while the 5-95% band stays wide, so a
        // value close to the median is IQR-flagged yet inside the central
        // band.
        let mut x = vec![0.5; 10];
        x.push(0.99);
        x.extend(std::iter::repeat_n(1.0, 85));
        x.extend(std::iter::repeat_n(1.5, 4));
        let out = is_outlier(&x, &OutlierMethod::default()).expect("valid input");
        assert!(out.flags.iter().any(|&f| f));
        assert!(
            out.diagnostics
                .warnings
                .iter()
                .any(|w| w.contains("narrow or skewed"))
        );
    }

    #[test]
    fn small_flagged_sample_triggers_advisory_warning() {
        let mut x = vec![1.0; 9];
        x.push(10.0);
        let out = is_outlier(&x, &OutlierMethod::default()).expect("valid input");
        assert!(out.flags[9]);
        assert!(
            out.diagnostics
                .warnings
                .iter()
                .any(|w| w.contains("small sample"))
        );
    }

    #[test]
    fn small_clean_sample_stays_quiet() {
        let x = [1.0, 1.01, 0.99, 1.02, 0.98];
        let out = is_outlier(&x, &OutlierMethod::default()).expect("valid input");
        assert!(out.flags.iter().all(|&f| !f));
        assert!(out.diagnostics.warnings.is_empty());
    }

    #[test]
    fn bad_parameters_are_rejected() {
        let x = [1.0, 2.0, 3.0];
        is_outlier(&x, &OutlierMethod::Iqr { mult: 0.0 }).expect_err("mult=0 must fail");
        is_outlier(&x, &OutlierMethod::Iqr { mult: f64::NAN }).expect_err("NaN mult must fail");
        is_outlier(
            &x,
            &OutlierMethod::Quantile {
                lower: 0.9,
                upper: 0.1,
            },
        )
        .expect_err("reversed bounds must fail");
        is_outlier(
            &x,
            &OutlierMethod::Quantile {
                lower: -0.1,
                upper: 0.9,
            },
        )
        .expect_err("negative probability must fail");
    }

    #[test]
    fn invalid_data_is_rejected() {
        is_outlier(&[1.0, f64::NAN, 2.0], &OutlierMethod::default())
            .expect_err("NaN must be rejected");
        is_outlier(&[1.0], &OutlierMethod::default()).expect_err("length 1 must be rejected");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn result_serde_roundtrip() {
        let x: Vec<f64> = (0..32).map(|i| 1.0 + 0.01 * i as f64).collect();
        let out = is_outlier(&x, &OutlierMethod::default()).expect("valid input");
        let encoded = serde_json::to_string(&out).expect("result should serialize");
        let decoded: super::OutlierResult =
            serde_json::from_str(&encoded).expect("result should deserialize");
        assert_eq!(decoded, out);
    }
}
