// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::ArsError;

/// Two-sided confidence interval at a configured significance level.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn new(lower: f64, upper: f64) -> Result<Self, ArsError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(ArsError::numerical_issue(format!(
                "confidence interval bounds must be finite; got [{lower}, {upper}]"
            )));
        }
        if lower > upper {
            return Err(ArsError::numerical_issue(format!(
                "confidence interval bounds out of order: [{lower}, {upper}]"
            )));
        }
        Ok(Self { lower, upper })
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}
