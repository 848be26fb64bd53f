// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Error taxonomy for assessment ratio statistics.
///
/// `InvalidInput` covers caller-fixable problems surfaced before any
/// computation begins; `NumericalIssue` covers data-shape-dependent
/// degeneracies (zero median, rank-deficient regression) that are surfaced
/// rather than coerced to NaN.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("numerical issue: {0}")]
    NumericalIssue(String),
}

impl ArsError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn numerical_issue(msg: impl Into<String>) -> Self {
        Self::NumericalIssue(msg.into())
    }
}
