//! Fitted-model representations used for coefficient extraction
//!
//! Models arrive here already fitted; this module only carries the pieces
//! the comparison needs (a name-keyed coefficient table, or the single
//! overall effect for aggregated group-time ATT estimators).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CompareError;

/// The supported model kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// Ordinary least squares
    Ols,
    /// OLS with robust (heteroskedasticity-consistent) standard errors
    RobustOls,
    /// Fixed-effects (within) regression
    FixedEffects,
    /// Aggregated group-time average treatment effect
    GroupTimeAtt,
}

impl ModelKind {
    /// Stable snake_case label for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Ols => "ols",
            ModelKind::RobustOls => "robust_ols",
            ModelKind::FixedEffects => "fixed_effects",
            ModelKind::GroupTimeAtt => "group_time_att",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = CompareError;

    /// Parse a runtime model-class label as reported by an external fitting
    /// library. Matching is case-insensitive and treats `-` as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "ols" => Ok(ModelKind::Ols),
            "robust_ols" | "robust" => Ok(ModelKind::RobustOls),
            "fixed_effects" | "fe" => Ok(ModelKind::FixedEffects),
            "group_time_att" | "att" => Ok(ModelKind::GroupTimeAtt),
            _ => Err(CompareError::UnsupportedModelType(s.to_string())),
        }
    }
}

/// Point estimate and standard error for a single coefficient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    /// Point estimate
    pub estimate: f64,
    /// Standard error of the estimate
    pub std_error: f64,
}

impl Coefficient {
    pub fn new(estimate: f64, std_error: f64) -> Self {
        Self {
            estimate,
            std_error,
        }
    }
}

/// Mapping from coefficient name to its estimate and standard error
///
/// Names are stored exactly as the fitting library labels them; for
/// factor/categorical terms that is typically the variable name concatenated
/// with the level label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTable {
    entries: BTreeMap<String, Coefficient>,
}

impl CoefficientTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a coefficient by name
    pub fn insert(&mut self, name: impl Into<String>, estimate: f64, std_error: f64) {
        self.entries
            .insert(name.into(), Coefficient::new(estimate, std_error));
    }

    /// Look up a coefficient by name
    pub fn get(&self, name: &str) -> Option<&Coefficient> {
        self.entries.get(name)
    }

    /// Whether a coefficient with this name is present
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Coefficient names, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Coefficient)> for CoefficientTable {
    fn from_iter<I: IntoIterator<Item = (String, Coefficient)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A fitted regression model, reduced to what coefficient comparison needs
///
/// The first three kinds expose a coefficient table keyed by name; the
/// group-time ATT kind carries a single pooled estimate with no name lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FittedModel {
    /// Ordinary least squares fit
    Ols { coefficients: CoefficientTable },
    /// OLS fit with robust standard errors
    RobustOls { coefficients: CoefficientTable },
    /// Fixed-effects (within) regression fit
    FixedEffects { coefficients: CoefficientTable },
    /// Aggregated group-time average treatment effect
    GroupTimeAtt { estimate: f64, std_error: f64 },
}

impl FittedModel {
    pub fn ols(coefficients: CoefficientTable) -> Self {
        FittedModel::Ols { coefficients }
    }

    pub fn robust_ols(coefficients: CoefficientTable) -> Self {
        FittedModel::RobustOls { coefficients }
    }

    pub fn fixed_effects(coefficients: CoefficientTable) -> Self {
        FittedModel::FixedEffects { coefficients }
    }

    pub fn group_time_att(estimate: f64, std_error: f64) -> Self {
        FittedModel::GroupTimeAtt {
            estimate,
            std_error,
        }
    }

    /// Build a table-backed model from a runtime kind label
    ///
    /// Fails with `UnsupportedModelType` for unknown labels, and for
    /// `group_time_att` (which carries no coefficient table; use
    /// [`FittedModel::group_time_att`]).
    pub fn from_kind_label(
        label: &str,
        coefficients: CoefficientTable,
    ) -> Result<Self, CompareError> {
        match label.parse::<ModelKind>()? {
            ModelKind::Ols => Ok(FittedModel::Ols { coefficients }),
            ModelKind::RobustOls => Ok(FittedModel::RobustOls { coefficients }),
            ModelKind::FixedEffects => Ok(FittedModel::FixedEffects { coefficients }),
            ModelKind::GroupTimeAtt => {
                Err(CompareError::UnsupportedModelType(label.to_string()))
            }
        }
    }

    /// The kind tag of this model
    pub fn kind(&self) -> ModelKind {
        match self {
            FittedModel::Ols { .. } => ModelKind::Ols,
            FittedModel::RobustOls { .. } => ModelKind::RobustOls,
            FittedModel::FixedEffects { .. } => ModelKind::FixedEffects,
            FittedModel::GroupTimeAtt { .. } => ModelKind::GroupTimeAtt,
        }
    }

    /// The coefficient table, if this kind supports name lookup
    pub fn coefficients(&self) -> Option<&CoefficientTable> {
        match self {
            FittedModel::Ols { coefficients }
            | FittedModel::RobustOls { coefficients }
            | FittedModel::FixedEffects { coefficients } => Some(coefficients),
            FittedModel::GroupTimeAtt { .. } => None,
        }
    }

    /// The single overall effect, for the group-time ATT kind
    pub fn overall_effect(&self) -> Option<Coefficient> {
        match self {
            FittedModel::GroupTimeAtt {
                estimate,
                std_error,
            } => Some(Coefficient::new(*estimate, *std_error)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_round_trip() {
        for kind in [
            ModelKind::Ols,
            ModelKind::RobustOls,
            ModelKind::FixedEffects,
            ModelKind::GroupTimeAtt,
        ] {
            assert_eq!(kind.as_str().parse::<ModelKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_label_aliases() {
        assert_eq!("OLS".parse::<ModelKind>().unwrap(), ModelKind::Ols);
        assert_eq!("robust".parse::<ModelKind>().unwrap(), ModelKind::RobustOls);
        assert_eq!("fe".parse::<ModelKind>().unwrap(), ModelKind::FixedEffects);
        assert_eq!("att".parse::<ModelKind>().unwrap(), ModelKind::GroupTimeAtt);
        assert_eq!(
            "Fixed-Effects".parse::<ModelKind>().unwrap(),
            ModelKind::FixedEffects
        );
    }

    #[test]
    fn test_unknown_kind_label() {
        let err = "glm".parse::<ModelKind>().unwrap_err();
        assert_eq!(err, CompareError::UnsupportedModelType("glm".into()));
    }

    #[test]
    fn test_table_lookup() {
        let mut table = CoefficientTable::new();
        table.insert("hp", -0.0682, 0.0101);
        table.insert("cyl6", -2.1, 0.9);

        assert!(table.contains("hp"));
        assert!(!table.contains("wt"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("hp").unwrap().estimate, -0.0682);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["cyl6", "hp"]);
    }

    #[test]
    fn test_from_kind_label() {
        let mut table = CoefficientTable::new();
        table.insert("x", 1.0, 0.1);

        let model = FittedModel::from_kind_label("robust_ols", table.clone()).unwrap();
        assert_eq!(model.kind(), ModelKind::RobustOls);
        assert!(model.coefficients().unwrap().contains("x"));

        assert!(matches!(
            FittedModel::from_kind_label("att", table.clone()),
            Err(CompareError::UnsupportedModelType(_))
        ));
        assert!(matches!(
            FittedModel::from_kind_label("quantile", table),
            Err(CompareError::UnsupportedModelType(_))
        ));
    }

    #[test]
    fn test_overall_effect() {
        let att = FittedModel::group_time_att(-0.05, 0.012);
        let effect = att.overall_effect().unwrap();
        assert_eq!(effect.estimate, -0.05);
        assert_eq!(effect.std_error, 0.012);
        assert!(att.coefficients().is_none());

        let ols = FittedModel::ols(CoefficientTable::new());
        assert!(ols.overall_effect().is_none());
    }
}
