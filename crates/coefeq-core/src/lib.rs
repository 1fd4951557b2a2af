//! coefeq-core: Equality testing for regression coefficients
//!
//! This crate implements the Paternoster et al. (1998) z-test for the
//! equality of two regression coefficients taken from separately fitted
//! models. Callers supply two already-fitted model representations (OLS,
//! robust OLS, fixed effects, or an aggregated group-time ATT) and the name
//! of a coefficient present in both; the crate returns the difference, the
//! standardized test statistic, its two-sided p-value, and a confidence
//! interval for the difference.
//!
//! Model fitting is out of scope: [`FittedModel`] carries only the
//! coefficient estimates and standard errors produced elsewhere.
//!
//! # Example
//!
//! ```
//! use coefeq_core::{compare_coefficients, CoefficientTable, CompareOptions, FittedModel};
//!
//! let mut a = CoefficientTable::new();
//! a.insert("hp", -0.0682, 0.0101);
//! let mut b = CoefficientTable::new();
//! b.insert("hp", -0.0318, 0.0119);
//!
//! let result = compare_coefficients(
//!     &FittedModel::ols(a),
//!     &FittedModel::ols(b),
//!     "hp",
//!     &CompareOptions::default(),
//! )?;
//! assert!(result.p_value < 0.05);
//! # Ok::<(), coefeq_core::CompareError>(())
//! ```

pub mod compare;
pub mod errors;
pub mod model;
pub mod types;

pub use compare::compare_coefficients;
pub use errors::{CompareError, CompareResult, MissingIn};
pub use model::{Coefficient, CoefficientTable, FittedModel, ModelKind};
pub use types::{CompareOptions, ComparisonResult};
