//! Oil/Water Commodity Money Model
//!
//! Net reserve wealth scaled by years-to-depletion, with a step-banded
//! sustainability score.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_nonzero, Result};
use crate::model::{ResourceInputs, ResourceKind, ValuationResult};

/// Values are expressed in trillions of USD
pub const VALUE_SCALE_USD: f64 = 1e12;

/// `(depletion years strictly above, sustainability)`, checked in order
const SUSTAINABILITY_BANDS: [(f64, f64); 3] = [(100.0, 90.0), (50.0, 70.0), (20.0, 50.0)];

const UNSUSTAINABLE: f64 = 30.0;

/// Every intermediate metric of a resource evaluation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceBreakdown {
    pub kind: ResourceKind,
    /// Price minus extraction cost
    pub net_value_per_unit: f64,
    pub total_net_value: f64,
    /// Years to exhaustion at the current extraction rate; doubles as the scarcity factor
    pub depletion_years: f64,
    pub value: f64,
    pub sustainability: f64,
}

impl ResourceBreakdown {
    pub fn result(&self) -> ValuationResult {
        ValuationResult::new(self.value, self.sustainability)
    }
}

/// Reserve-based valuation model shared by oil and water
#[derive(Clone, Copy, Debug, Default)]
pub struct ResourceValuation;

impl ResourceValuation {
    /// Evaluate to a `(value, sustainability)` pair
    pub fn evaluate(inputs: &ResourceInputs) -> Result<ValuationResult> {
        Self::breakdown(inputs).map(|b| b.result())
    }

    /// Evaluate and keep every intermediate metric
    pub fn breakdown(inputs: &ResourceInputs) -> Result<ResourceBreakdown> {
        let reserves = ensure_finite("reserves", inputs.reserves)?;
        let extraction_rate = ensure_finite("extraction_rate", inputs.extraction_rate)?;
        let price_usd = ensure_finite("price_usd", inputs.price_usd)?;
        let extraction_cost_usd = ensure_finite("extraction_cost_usd", inputs.extraction_cost_usd)?;

        ensure_nonzero("extraction_rate", extraction_rate)?;

        let net_value_per_unit = price_usd - extraction_cost_usd;
        let total_net_value = reserves * net_value_per_unit;
        // A tiny rate can overflow the quotient even with finite inputs
        let depletion_years = ensure_finite("depletion_years", reserves / extraction_rate)?;
        let value = total_net_value * depletion_years / VALUE_SCALE_USD;
        let sustainability = sustainability(depletion_years);

        tracing::debug!(kind = %inputs.kind, depletion_years, value, sustainability, "evaluated resource");

        Ok(ResourceBreakdown {
            kind: inputs.kind,
            net_value_per_unit,
            total_net_value,
            depletion_years,
            value,
            sustainability,
        })
    }
}

/// Step-banded sustainability score. Band edges belong to the lower band.
pub fn sustainability(depletion_years: f64) -> f64 {
    SUSTAINABILITY_BANDS
        .iter()
        .find(|(years, _)| depletion_years > *years)
        .map_or(UNSUSTAINABLE, |(_, score)| *score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValuationError;

    fn oil() -> ResourceInputs {
        ResourceInputs {
            kind: ResourceKind::Oil,
            reserves: 1.5e12,
            extraction_rate: 35e9,
            price_usd: 80.0,
            extraction_cost_usd: 40.0,
        }
    }

    #[test]
    fn test_oil_reference() {
        let b = ResourceValuation::breakdown(&oil()).unwrap();

        assert!((b.net_value_per_unit - 40.0).abs() < 1e-12);
        assert!((b.total_net_value - 6e13).abs() < 1.0);
        assert!((b.depletion_years - 42.857).abs() < 1e-3);
        assert!((b.sustainability - 50.0).abs() < f64::EPSILON);
        assert!((b.value - 2571.43).abs() < 0.01);
    }

    #[test]
    fn test_water_reference() {
        let water = ResourceInputs {
            kind: ResourceKind::Water,
            reserves: 1.4e18,
            extraction_rate: 4e15,
            price_usd: 0.005,
            extraction_cost_usd: 0.002,
        };
        let result = ResourceValuation::evaluate(&water).unwrap();

        assert!((result.value - 1_470_000.0).abs() < 1.0);
        assert!((result.score - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_band_edges_fall_to_lower_band() {
        assert!((sustainability(100.0) - 70.0).abs() < f64::EPSILON);
        assert!((sustainability(50.0) - 50.0).abs() < f64::EPSILON);
        assert!((sustainability(20.0) - 30.0).abs() < f64::EPSILON);

        assert!((sustainability(100.000_1) - 90.0).abs() < f64::EPSILON);
        assert!((sustainability(0.0) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exact_hundred_years() {
        let inputs = ResourceInputs {
            reserves: 100.0,
            extraction_rate: 1.0,
            ..oil()
        };
        let b = ResourceValuation::breakdown(&inputs).unwrap();
        assert!((b.depletion_years - 100.0).abs() < f64::EPSILON);
        assert!((b.sustainability - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_kind_does_not_affect_arithmetic() {
        let water = ResourceInputs { kind: ResourceKind::Water, ..oil() };
        assert_eq!(
            ResourceValuation::evaluate(&oil()).unwrap(),
            ResourceValuation::evaluate(&water).unwrap()
        );
    }

    #[test]
    fn test_negative_margin_allowed() {
        let loss = ResourceInputs { extraction_cost_usd: 120.0, ..oil() };
        let b = ResourceValuation::breakdown(&loss).unwrap();
        assert!(b.net_value_per_unit < 0.0);
        assert!(b.value < 0.0);
    }

    #[test]
    fn test_zero_extraction_rate_rejected() {
        let stalled = ResourceInputs { extraction_rate: 0.0, ..oil() };
        assert_eq!(
            ResourceValuation::evaluate(&stalled),
            Err(ValuationError::Domain { field: "extraction_rate", reason: "must be non-zero" })
        );
    }

    #[test]
    fn test_overflowing_depletion_rejected() {
        let trickle = ResourceInputs {
            reserves: 1e10,
            extraction_rate: 1e-310,
            price_usd: 40.0,
            extraction_cost_usd: 40.0,
            ..oil()
        };
        assert_eq!(
            ResourceValuation::evaluate(&trickle),
            Err(ValuationError::Domain { field: "depletion_years", reason: "must be finite" })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let nan_price = ResourceInputs { price_usd: f64::NAN, ..oil() };
        assert_eq!(
            ResourceValuation::evaluate(&nan_price).unwrap_err().field(),
            Some("price_usd")
        );
    }
}
