// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// IAAO acceptance band for COD: met iff `5 < COD <= 15`.
///
/// The lower bound is exclusive: a COD at exactly 5 suggests sales chasing
/// rather than genuinely uniform assessment, so it does not meet standard.
pub fn cod_met(x: f64) -> bool {
    x > 5.0 && x <= 15.0
}

/// IAAO acceptance band for PRD: met iff `0.98 < PRD <= 1.03`.
pub fn prd_met(x: f64) -> bool {
    x > 0.98 && x <= 1.03
}

/// IAAO acceptance band for PRB: met iff `-0.05 < PRB <= 0.05`.
pub fn prb_met(x: f64) -> bool {
    x > -0.05 && x <= 0.05
}

/// Quintos acceptance band for MKI: met iff `0.95 < MKI <= 1.05`.
///
/// KI has no acceptance band: it is read by sign (progressive above zero,
/// regressive below, equity at zero).
pub fn mki_met(x: f64) -> bool {
    x > 0.95 && x <= 1.05
}
