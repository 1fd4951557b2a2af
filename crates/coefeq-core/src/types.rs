//! Options and result types for coefficient comparison

use serde::{Deserialize, Serialize};

/// Options for the coefficient equality test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareOptions {
    /// Confidence level for the interval on the difference (default: 0.95)
    pub confidence_level: f64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
        }
    }
}

/// Result of comparing one coefficient across two fitted models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Difference between the two estimates (first minus second)
    pub difference: f64,
    /// Standardized test statistic
    pub z_value: f64,
    /// Two-sided p-value under the standard normal
    pub p_value: f64,
    /// Lower bound of the confidence interval on the difference
    pub ci_lower: f64,
    /// Upper bound of the confidence interval on the difference
    pub ci_upper: f64,
    /// Confidence level used
    pub confidence_level: f64,
    /// Test method description
    pub method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CompareOptions::default();
        assert_eq!(options.confidence_level, 0.95);
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = ComparisonResult {
            difference: -0.0364,
            z_value: -2.332,
            p_value: 0.0197,
            ci_lower: -0.0670,
            ci_upper: -0.0058,
            confidence_level: 0.95,
            method: "Paternoster z-test (ols)".into(),
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.difference, result.difference);
        assert_eq!(back.z_value, result.z_value);
        assert_eq!(back.p_value, result.p_value);
        assert_eq!(back.ci_lower, result.ci_lower);
        assert_eq!(back.ci_upper, result.ci_upper);
        assert_eq!(back.confidence_level, result.confidence_level);
        assert_eq!(back.method, result.method);
    }
}
