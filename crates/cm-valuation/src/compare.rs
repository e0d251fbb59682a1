//! Cross-Asset Comparison
//!
//! Puts Bitcoin risk and resource sustainability on one risk scale and
//! ranks the three asset classes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result};
use crate::model::{AssetClass, ComparisonReport, ValuationResult};

/// Convert a sustainability score (higher = better) to a risk (higher = worse)
pub fn sustainability_to_risk(sustainability: f64) -> f64 {
    100.0 - sustainability
}

/// Compare Bitcoin against oil and water.
///
/// `bitcoin.score` is a risk; `oil.score` and `water.score` are
/// sustainabilities and get inverted before ranking. Every figure must be
/// finite, otherwise the ranking is meaningless and a domain error is
/// returned.
pub fn compare(
    bitcoin: ValuationResult,
    oil: ValuationResult,
    water: ValuationResult,
) -> Result<ComparisonReport> {
    let values = [
        ensure_finite("bitcoin_value", bitcoin.value)?,
        ensure_finite("oil_value", oil.value)?,
        ensure_finite("water_value", water.value)?,
    ];
    let risks = [
        ensure_finite("bitcoin_risk", bitcoin.score)?,
        sustainability_to_risk(ensure_finite("oil_sustainability", oil.score)?),
        sustainability_to_risk(ensure_finite("water_sustainability", water.score)?),
    ];

    let report = ComparisonReport {
        values,
        risks,
        best_value_index: first_index_by(&values, |candidate, best| candidate > best),
        lowest_risk_index: first_index_by(&risks, |candidate, best| candidate < best),
    };

    tracing::debug!(
        best_value = %report.best_value(),
        lowest_risk = %report.lowest_risk(),
        "compared asset classes"
    );

    Ok(report)
}

/// Index of the first element that no later element strictly beats,
/// so ties resolve to the earliest index
fn first_index_by(items: &[f64; 3], beats: impl Fn(f64, f64) -> bool) -> usize {
    let mut best = 0;
    for (i, &candidate) in items.iter().enumerate().skip(1) {
        if beats(candidate, items[best]) {
            best = i;
        }
    }
    best
}

/// Headline conclusion of a comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Verdict {
    /// One asset has both the highest value and the lowest risk
    Dominates { asset: AssetClass },
    TradeOff {
        higher_value: AssetClass,
        more_stable: AssetClass,
    },
}

impl Verdict {
    pub fn from_report(report: &ComparisonReport) -> Self {
        if report.best_value_index == report.lowest_risk_index {
            Verdict::Dominates { asset: report.best_value() }
        } else {
            Verdict::TradeOff {
                higher_value: report.best_value(),
                more_stable: report.lowest_risk(),
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Dominates { asset } => {
                write!(f, "{} dominates in both value AND stability.", asset)
            }
            Verdict::TradeOff { higher_value, more_stable } => write!(
                f,
                "Trade-off detected - {} has higher value but {} is more stable.",
                higher_value, more_stable
            ),
        }
    }
}

impl ComparisonReport {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_report(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValuationError;

    #[test]
    fn test_sustainability_inverted_exactly() {
        let report = compare(
            ValuationResult::new(1.0, 42.5),
            ValuationResult::new(2.0, 70.0),
            ValuationResult::new(3.0, 90.0),
        )
        .unwrap();

        assert_eq!(report.risks[0], 42.5);
        assert_eq!(report.risks[1], 100.0 - 70.0);
        assert_eq!(report.risks[2], 100.0 - 90.0);
        assert_eq!(report.values, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_reference_scenario_dominance() {
        let report = compare(
            ValuationResult::new(356.16, 102.68),
            ValuationResult::new(2571.43, 50.0),
            ValuationResult::new(1_470_000.0, 90.0),
        )
        .unwrap();

        assert_eq!(report.best_value(), AssetClass::Water);
        assert_eq!(report.lowest_risk(), AssetClass::Water);
        assert_eq!(report.verdict(), Verdict::Dominates { asset: AssetClass::Water });
        assert_eq!(
            report.verdict().to_string(),
            "Water dominates in both value AND stability."
        );
    }

    #[test]
    fn test_trade_off() {
        let report = compare(
            ValuationResult::new(500.0, 20.0),
            ValuationResult::new(100.0, 90.0),
            ValuationResult::new(50.0, 30.0),
        )
        .unwrap();

        assert_eq!(report.best_value_index, 0);
        assert_eq!(report.lowest_risk_index, 1);
        assert_eq!(
            report.verdict().to_string(),
            "Trade-off detected - Bitcoin has higher value but Oil is more stable."
        );
    }

    #[test]
    fn test_ties_resolve_to_first_index() {
        let report = compare(
            ValuationResult::new(10.0, 50.0),
            ValuationResult::new(20.0, 50.0),
            ValuationResult::new(20.0, 50.0),
        )
        .unwrap();
        assert_eq!(report.best_value_index, 1);
        assert_eq!(report.lowest_risk_index, 0);

        let all_equal = compare(
            ValuationResult::new(7.0, 10.0),
            ValuationResult::new(7.0, 90.0),
            ValuationResult::new(7.0, 90.0),
        )
        .unwrap();
        assert_eq!(all_equal.best_value_index, 0);
        assert_eq!(all_equal.lowest_risk_index, 0);
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let err = compare(
            ValuationResult::new(f64::INFINITY, f64::NAN),
            ValuationResult::new(5.0, 50.0),
            ValuationResult::new(1.0, 50.0),
        )
        .unwrap_err();
        assert_eq!(err, ValuationError::Domain { field: "bitcoin_value", reason: "must be finite" });

        let nan_sustainability = compare(
            ValuationResult::new(1.0, 20.0),
            ValuationResult::new(5.0, 50.0),
            ValuationResult::new(1.0, f64::NAN),
        );
        assert_eq!(nan_sustainability.unwrap_err().field(), Some("water_sustainability"));
    }

    #[test]
    fn test_verdict_serializes_tagged() {
        let verdict = Verdict::TradeOff {
            higher_value: AssetClass::Oil,
            more_stable: AssetClass::Water,
        };
        assert_eq!(
            serde_json::to_value(verdict).unwrap(),
            serde_json::json!({"kind": "trade_off", "higher_value": "oil", "more_stable": "water"})
        );
    }
}
