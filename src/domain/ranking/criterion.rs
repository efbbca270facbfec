//! Criteria and their optimization direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Whether higher or lower values of a criterion are better.
///
/// Deserializes through [`FromStr`], so configuration may also spell the
/// directions `max`/`maximize` and `min`/`minimize`, in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CriterionDirection {
    /// Higher is better (maximize).
    Benefit,
    /// Lower is better (minimize).
    Cost,
}

impl CriterionDirection {
    /// Binary preference indicator for `difference = value(i) - value(j)`.
    ///
    /// Ties are asymmetric: a zero difference is NOT a preference on a
    /// benefit criterion but IS a preference on a cost criterion. Callers
    /// rely on this exact rule, including on the diagonal (i = j).
    pub fn indicator(self, difference: f64) -> u8 {
        let preferred = match self {
            CriterionDirection::Benefit => difference > 0.0,
            CriterionDirection::Cost => difference <= 0.0,
        };
        u8::from(preferred)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionDirection::Benefit => "benefit",
            CriterionDirection::Cost => "cost",
        }
    }
}

impl fmt::Display for CriterionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CriterionDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" | "max" | "maximize" => Ok(CriterionDirection::Benefit),
            "cost" | "min" | "minimize" => Ok(CriterionDirection::Cost),
            other => Err(ValidationError::invalid_format(
                "direction",
                format!("expected 'benefit' or 'cost', got '{}'", other),
            )),
        }
    }
}

impl TryFrom<String> for CriterionDirection {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Criterion metadata: a measured attribute and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    /// Stable key matching the position in each alternative's value vector.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Explanation shown alongside the criteria table.
    #[serde(default)]
    pub description: String,
    pub direction: CriterionDirection,
}

impl Criterion {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        direction: CriterionDirection,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: String::new(),
            direction,
        }
    }

    /// Creates a benefit (maximize) criterion.
    pub fn benefit(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(key, name, CriterionDirection::Benefit)
    }

    /// Creates a cost (minimize) criterion.
    pub fn cost(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(key, name, CriterionDirection::Cost)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Direction list in criterion order, as consumed by the engine.
    pub fn directions(criteria: &[Criterion]) -> Vec<CriterionDirection> {
        criteria.iter().map(|c| c.direction).collect()
    }

    /// The standard account-selection criteria: eight audience and
    /// engagement measures to maximize, followed by price to minimize.
    pub fn default_set() -> Vec<Criterion> {
        vec![
            Criterion::benefit("total_follower", "Total followers")
                .with_description("Number of accounts following the alternative"),
            Criterion::benefit("total_likes", "Total likes")
                .with_description("Likes accumulated across all content"),
            Criterion::benefit("overall_engagement", "Overall engagement")
                .with_description("Engagement rate as a fraction of audience"),
            Criterion::benefit("likes_rate", "Likes rate")
                .with_description("Likes per view as a fraction"),
            Criterion::benefit("shares_rate", "Shares rate")
                .with_description("Shares per view as a fraction"),
            Criterion::benefit("average_view", "Average views")
                .with_description("Mean views per post"),
            Criterion::benefit("average_likes", "Average likes")
                .with_description("Mean likes per post"),
            Criterion::benefit("average_share", "Average shares")
                .with_description("Mean shares per post"),
            Criterion::cost("price", "Price").with_description("Cost of an endorsement"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benefit_prefers_strict_improvement_only() {
        assert_eq!(CriterionDirection::Benefit.indicator(5.0), 1);
        assert_eq!(CriterionDirection::Benefit.indicator(0.0), 0);
        assert_eq!(CriterionDirection::Benefit.indicator(-5.0), 0);
    }

    #[test]
    fn cost_prefers_ties_and_lower_values() {
        assert_eq!(CriterionDirection::Cost.indicator(-5.0), 1);
        assert_eq!(CriterionDirection::Cost.indicator(0.0), 1);
        assert_eq!(CriterionDirection::Cost.indicator(5.0), 0);
    }

    #[test]
    fn direction_parses_aliases() {
        assert_eq!("Benefit".parse::<CriterionDirection>().unwrap(), CriterionDirection::Benefit);
        assert_eq!("min".parse::<CriterionDirection>().unwrap(), CriterionDirection::Cost);
        assert!("sideways".parse::<CriterionDirection>().is_err());
    }

    #[test]
    fn direction_serializes_lowercase() {
        let json = serde_json::to_string(&CriterionDirection::Cost).unwrap();
        assert_eq!(json, "\"cost\"");
    }

    #[test]
    fn default_set_has_eight_benefits_then_one_cost() {
        let directions = Criterion::directions(&Criterion::default_set());
        assert_eq!(directions.len(), 9);
        assert!(directions[..8].iter().all(|d| *d == CriterionDirection::Benefit));
        assert_eq!(directions[8], CriterionDirection::Cost);
    }

    #[test]
    fn direction_deserializes_aliases() {
        let direction: CriterionDirection = serde_json::from_str("\"MIN\"").unwrap();
        assert_eq!(direction, CriterionDirection::Cost);
        assert!(serde_json::from_str::<CriterionDirection>("\"up\"").is_err());
    }

    #[test]
    fn criterion_deserializes_without_description() {
        let json = r#"{"key": "price", "name": "Price", "direction": "cost"}"#;
        let criterion: Criterion = serde_json::from_str(json).unwrap();
        assert_eq!(criterion.direction, CriterionDirection::Cost);
        assert!(criterion.description.is_empty());
    }
}
