// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::borrow::Cow;

/// Structured diagnostics attached to detector results.
///
/// Advisory conditions (small samples, narrow distributions) land in
/// `warnings` next to the primary result so callers and tests can assert on
/// them deterministically; they never replace or alter the numeric output.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostics {
    pub n: usize,
    pub method: Cow<'static, str>,
    pub seed: Option<u64>,
    pub notes: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            n: 0,
            method: Cow::Borrowed(""),
            seed: None,
            notes: vec![],
            warnings: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Diagnostics;
    use std::borrow::Cow;

    #[test]
    fn default_is_empty() {
        let diagnostics = Diagnostics::default();
        assert_eq!(diagnostics.n, 0);
        assert_eq!(diagnostics.method, Cow::Borrowed(""));
        assert!(diagnostics.seed.is_none());
        assert!(diagnostics.notes.is_empty());
        assert!(diagnostics.warnings.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_preserves_all_fields() {
        let diagnostics = Diagnostics {
            n: 1_000,
            method: Cow::Borrowed("cdf"),
            seed: Some(42),
            notes: vec!["cdf_max_gap=0.1000".to_string()],
            warnings: vec!["small sample".to_string()],
        };

        let encoded = serde_json::to_string(&diagnostics).expect("diagnostics should serialize");
        let decoded: Diagnostics =
            serde_json::from_str(&encoded).expect("diagnostics should deserialize");
        assert_eq!(decoded, diagnostics);
    }
}
