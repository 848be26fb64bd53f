// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::gini::gini_pair;
use ars_core::ArsError;

/// Kakwani Index: `gini(estimate) - gini(sale_price)`, both in sale-price
/// order.
///
/// KI < 0 is regressive, KI = 0 is vertical equity, KI > 0 is progressive.
/// The index is order-sensitive: swapping the roles of estimate and sale
/// price is not a sign flip, because the sort key stays with sale price.
pub fn ki(estimate: &[f64], sale_price: &[f64]) -> Result<f64, ArsError> {
    let (gini_estimate, gini_sale_price) = gini_pair(estimate, sale_price)?;
    Ok(gini_estimate - gini_sale_price)
}

/// Modified Kakwani Index: `gini(estimate) / gini(sale_price)`, both in
/// sale-price order.
///
/// MKI < 1 is regressive, MKI = 1 is vertical equity, MKI > 1 is progressive.
pub fn mki(estimate: &[f64], sale_price: &[f64]) -> Result<f64, ArsError> {
    let (gini_estimate, gini_sale_price) = gini_pair(estimate, sale_price)?;
    if gini_sale_price == 0.0 {
        return Err(ArsError::numerical_issue(
            "MKI is undefined when the sale price Gini coefficient is zero",
        ));
    }
    Ok(gini_estimate / gini_sale_price)
}
