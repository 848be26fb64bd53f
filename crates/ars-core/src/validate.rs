// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::ArsError;

const NAN_VIOLATION: &str = "input sequences contain NaN values";
const LENGTH_VIOLATION: &str = "input sequences must have length greater than 1";
const FINITE_VIOLATION: &str = "input sequences contain non-finite values";
const POSITIVE_VIOLATION: &str = "input sequences must contain strictly positive values";
const EQUAL_LENGTH_VIOLATION: &str = "input sequences must all have equal length";

/// Validates one or more canonical numeric sequences before computation.
///
/// All violations across all sequences are collected, deduplicated, and
/// reported in a single [`ArsError::InvalidInput`] so a caller sees every
/// problem at once rather than just the first.
///
/// Checks per sequence: length > 1, no NaN, no infinities, and (when
/// `require_positive`) no values <= 0. Across sequences: equal lengths.
pub fn validate_inputs(sequences: &[&[f64]], require_positive: bool) -> Result<(), ArsError> {
    fn record(violation: &'static str, violations: &mut Vec<&'static str>) {
        if !violations.contains(&violation) {
            violations.push(violation);
        }
    }

    let mut violations: Vec<&'static str> = vec![];

    for sequence in sequences {
        if sequence.len() <= 1 {
            record(LENGTH_VIOLATION, &mut violations);
        }
        for &value in *sequence {
            if value.is_nan() {
                record(NAN_VIOLATION, &mut violations);
            } else if value.is_infinite() {
                record(FINITE_VIOLATION, &mut violations);
            } else if require_positive && value <= 0.0 {
                record(POSITIVE_VIOLATION, &mut violations);
            }
        }
    }

    if let Some(first) = sequences.first()
        && sequences.iter().any(|s| s.len() != first.len())
    {
        record(EQUAL_LENGTH_VIOLATION, &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArsError::invalid_input(violations.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_inputs;
    use crate::ArsError;

    #[test]
    fn accepts_well_formed_pairs() {
        let estimate = [1.0, 2.0, 3.0];
        let sale_price = [1.5, 2.5, 3.5];
        validate_inputs(&[&estimate, &sale_price], true).expect("valid pair should pass");
    }

    #[test]
    fn rejects_zero_when_positivity_required() {
        let ratio = [1.0, 2.0, 3.0, 0.0];
        let err = validate_inputs(&[&ratio], true).expect_err("zero must be rejected");
        assert!(err.to_string().contains("strictly positive"));
    }

    #[test]
    fn allows_non_positive_when_not_required() {
        let x = [-1.0, 0.0, 1.0];
        validate_inputs(&[&x], false).expect("non-positive values allowed when not required");
    }

    #[test]
    fn rejects_nan_and_infinity_separately() {
        let x = [1.0, f64::NAN, f64::INFINITY];
        let err = validate_inputs(&[&x], true).expect_err("NaN and Inf must be rejected");
        let message = err.to_string();
        assert!(message.contains("NaN"));
        assert!(message.contains("non-finite"));
    }

    #[test]
    fn rejects_short_sequences() {
        let x = [1.0];
        let err = validate_inputs(&[&x], true).expect_err("length 1 must be rejected");
        assert!(err.to_string().contains("length greater than 1"));
        let empty: [f64; 0] = [];
        validate_inputs(&[&empty], true).expect_err("empty must be rejected");
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let estimate = [1.0, 2.0, 3.0];
        let sale_price = [1.0, 2.0];
        let err =
            validate_inputs(&[&estimate, &sale_price], true).expect_err("mismatch must fail");
        assert!(err.to_string().contains("equal length"));
    }

    #[test]
    fn aggregates_all_violations_in_one_error() {
        let a = [1.0, f64::NAN, -2.0];
        let b = [1.0];
        let err = validate_inputs(&[&a, &b], true).expect_err("multiple violations must fail");
        let message = err.to_string();
        assert!(message.contains("NaN"));
        assert!(message.contains("strictly positive"));
        assert!(message.contains("length greater than 1"));
        assert!(message.contains("equal length"));
    }

    #[test]
    fn deduplicates_repeated_violations() {
        let a = [f64::NAN, f64::NAN, 1.0];
        let b = [f64::NAN, 2.0, 3.0];
        let err = validate_inputs(&[&a, &b], true).expect_err("NaN must be rejected");
        let message = err.to_string();
        assert_eq!(message.matches("NaN").count(), 1);
    }

    #[test]
    fn error_is_invalid_input_variant() {
        let x = [0.0, 1.0];
        let err = validate_inputs(&[&x], true).expect_err("zero must be rejected");
        assert!(matches!(err, ArsError::InvalidInput(_)));
    }
}
