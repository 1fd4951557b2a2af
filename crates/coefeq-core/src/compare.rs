//! Equality test for regression coefficients across two fitted models
//!
//! Implements the Paternoster et al. (1998) z-test: the standardized
//! difference of two independently estimated coefficients,
//! z = (b1 - b2) / sqrt(se1^2 + se2^2), referred to the standard normal.

use tracing::warn;

use crate::errors::{CompareError, CompareResult, MissingIn};
use crate::model::{Coefficient, FittedModel};
use crate::types::{CompareOptions, ComparisonResult};

/// Compare a named coefficient across two fitted models
///
/// Both models must be of the same kind. For table-backed kinds (OLS, robust
/// OLS, fixed effects) the coefficient is looked up by name in both tables;
/// for group-time ATT models the name is ignored and the overall effects are
/// compared.
///
/// # Arguments
/// * `model_a` - First fitted model
/// * `model_b` - Second fitted model
/// * `coefficient` - Coefficient name, as labeled by the fitting library
/// * `options` - Test options (confidence level)
///
/// # Returns
/// `ComparisonResult` with the difference, z statistic, two-sided p-value,
/// and a confidence interval for the difference
pub fn compare_coefficients(
    model_a: &FittedModel,
    model_b: &FittedModel,
    coefficient: &str,
    options: &CompareOptions,
) -> CompareResult<ComparisonResult> {
    let level = options.confidence_level;
    // NaN fails both comparisons and is rejected here as well
    if !(level > 0.0 && level < 1.0) {
        return Err(CompareError::InvalidConfidenceLevel(level));
    }

    let (first, second) = match (model_a, model_b) {
        (
            FittedModel::GroupTimeAtt {
                estimate: b1,
                std_error: se1,
            },
            FittedModel::GroupTimeAtt {
                estimate: b2,
                std_error: se2,
            },
        ) => {
            if !coefficient.is_empty() {
                warn!(
                    coefficient,
                    "coefficient name is ignored for group-time ATT models; \
                     the overall effects are compared"
                );
            }
            (Coefficient::new(*b1, *se1), Coefficient::new(*b2, *se2))
        }
        (a, b) => match (a.coefficients(), b.coefficients()) {
            (Some(table_a), Some(table_b)) if a.kind() == b.kind() => {
                match (table_a.get(coefficient), table_b.get(coefficient)) {
                    (Some(ca), Some(cb)) => (*ca, *cb),
                    (None, Some(_)) => {
                        return Err(CompareError::CoefficientNotFound {
                            name: coefficient.to_string(),
                            missing: MissingIn::Left,
                        })
                    }
                    (Some(_), None) => {
                        return Err(CompareError::CoefficientNotFound {
                            name: coefficient.to_string(),
                            missing: MissingIn::Right,
                        })
                    }
                    (None, None) => {
                        return Err(CompareError::CoefficientNotFound {
                            name: coefficient.to_string(),
                            missing: MissingIn::Both,
                        })
                    }
                }
            }
            _ => {
                return Err(CompareError::TypeMismatch {
                    left: a.kind(),
                    right: b.kind(),
                })
            }
        },
    };

    let difference = first.estimate - second.estimate;
    let combined_variance =
        first.std_error * first.std_error + second.std_error * second.std_error;
    if !combined_variance.is_finite() || combined_variance <= 0.0 {
        return Err(CompareError::DegenerateVariance {
            variance: combined_variance,
        });
    }

    let se_difference = combined_variance.sqrt();
    let z_value = difference / se_difference;
    let p_value = 2.0 * normal_cdf(-z_value.abs());

    // Two-tailed critical value at the requested confidence level
    let quantile = normal_quantile(1.0 - (1.0 - level) / 2.0);

    Ok(ComparisonResult {
        difference,
        z_value,
        p_value,
        ci_lower: difference - quantile * se_difference,
        ci_upper: difference + quantile * se_difference,
        confidence_level: level,
        method: format!("Paternoster z-test ({})", model_a.kind()),
    })
}

/// Standard normal CDF via the complementary error function.
fn normal_cdf(x: f64) -> f64 {
    0.5 * statrs::function::erf::erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal quantile (inverse CDF).
fn normal_quantile(p: f64) -> f64 {
    use statrs::distribution::{ContinuousCDF, Normal};
    Normal::new(0.0, 1.0).unwrap().inverse_cdf(p)
}
