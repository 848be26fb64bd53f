// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use ars_core::{ArsError, validate_inputs};

/// Discrete Gini coefficient of values already in the required order:
/// `G = (2 * Σ v[i]*(i+1) / Σv - (n+1)) / n`.
fn gini_of_sorted(values: &[f64]) -> Result<f64, ArsError> {
    let n = values.len() as f64;
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Err(ArsError::numerical_issue(format!(
            "Gini coefficient requires a positive value sum; got {total}"
        )));
    }

    let rank_weighted: f64 = values
        .iter()
        .enumerate()
        .map(|(i, v)| v * (i + 1) as f64)
        .sum();

    Ok((2.0 * rank_weighted / total - (n + 1.0)) / n)
}

/// Paired Gini coefficients for the Kakwani indices.
///
/// Both sequences are sorted by sale price ascending with a stable sort, so
/// ties keep their original order and repeated runs are reproducible. The
/// estimate Gini is computed in sale-price order, which is what makes the
/// Kakwani comparison order-sensitive.
pub fn gini_pair(estimate: &[f64], sale_price: &[f64]) -> Result<(f64, f64), ArsError> {
    validate_inputs(&[estimate, sale_price], true)?;

    let mut order: Vec<usize> = (0..sale_price.len()).collect();
    order.sort_by(|&a, &b| sale_price[a].total_cmp(&sale_price[b]));

    let estimate_sorted: Vec<f64> = order.iter().map(|&i| estimate[i]).collect();
    let sale_price_sorted: Vec<f64> = order.iter().map(|&i| sale_price[i]).collect();

    Ok((
        gini_of_sorted(&estimate_sorted)?,
        gini_of_sorted(&sale_price_sorted)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::{gini_of_sorted, gini_pair};

    #[test]
    fn equal_values_have_zero_inequality() {
        let g = gini_of_sorted(&[5.0, 5.0, 5.0, 5.0]).expect("positive values");
        assert!(g.abs() < 1e-12);
    }

    #[test]
    fn known_two_point_value() {
        // v = [1, 3]: G = (2*(1*1 + 3*2)/4 - 3)/2 = (3.5 - 3)/2 = 0.25
        let g = gini_of_sorted(&[1.0, 3.0]).expect("positive values");
        assert!((g - 0.25).abs() < 1e-12);
    }

    #[test]
    fn concentration_increases_gini() {
        let spread = gini_of_sorted(&[1.0, 2.0, 3.0, 4.0]).expect("positive values");
        let concentrated = gini_of_sorted(&[1.0, 1.0, 1.0, 97.0]).expect("positive values");
        assert!(concentrated > spread);
    }

    #[test]
    fn pair_sorts_by_sale_price_before_computing() {
        let estimate = [30.0, 10.0, 20.0];
        let sale_price = [300.0, 100.0, 200.0];
        let (g_est, g_sp) = gini_pair(&estimate, &sale_price).expect("valid pair");

        let (g_est_sorted, g_sp_sorted) =
            gini_pair(&[10.0, 20.0, 30.0], &[100.0, 200.0, 300.0]).expect("valid pair");
        assert!((g_est - g_est_sorted).abs() < 1e-12);
        assert!((g_sp - g_sp_sorted).abs() < 1e-12);
    }

    #[test]
    fn ties_keep_original_order() {
        // Two identical sale prices: the estimate Gini depends on which
        // estimate comes first, so stability is observable.
        let estimate = [10.0, 30.0, 20.0];
        let sale_price = [100.0, 100.0, 200.0];
        let (g_a, _) = gini_pair(&estimate, &sale_price).expect("valid pair");
        let (g_b, _) = gini_pair(&estimate, &sale_price).expect("valid pair");
        assert_eq!(g_a, g_b);

        let swapped_estimate = [30.0, 10.0, 20.0];
        let (g_swapped, _) = gini_pair(&swapped_estimate, &sale_price).expect("valid pair");
        assert!((g_a - g_swapped).abs() > 1e-12);
    }
}
