//! Valuation Models
//!
//! Pure closed-form models for each asset class, plus the interpretation
//! bands used when reporting their scores.

mod bitcoin;
mod resource;

pub use bitcoin::{BitcoinBreakdown, BitcoinValuation};
pub use resource::{sustainability, ResourceBreakdown, ResourceValuation};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{BitcoinInputs, ResourceInputs, ValuationResult};

/// Evaluate Bitcoin to `(value, risk)`
pub fn evaluate_bitcoin(inputs: &BitcoinInputs) -> Result<ValuationResult> {
    BitcoinValuation::evaluate(inputs)
}

/// Evaluate oil or water to `(value, sustainability)`
pub fn evaluate_resource(inputs: &ResourceInputs) -> Result<ValuationResult> {
    ResourceValuation::evaluate(inputs)
}

/// Interpretation of a Bitcoin risk score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn from_risk(risk: f64) -> Self {
        if risk < 30.0 {
            RiskBand::Low
        } else if risk < 60.0 {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk - Stable CM System",
            RiskBand::Moderate => "Moderate Risk - Monitor Volatility",
            RiskBand::High => "High Risk - Significant Uncertainty",
        }
    }
}

/// Interpretation of a resource sustainability score.
///
/// Thresholds differ from the scoring bands: a score of exactly 70 reads as
/// moderate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SustainabilityBand {
    Sustainable,
    Moderate,
    Unsustainable,
}

impl SustainabilityBand {
    pub fn from_score(sustainability: f64) -> Self {
        if sustainability > 70.0 {
            SustainabilityBand::Sustainable
        } else if sustainability > 40.0 {
            SustainabilityBand::Moderate
        } else {
            SustainabilityBand::Unsustainable
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SustainabilityBand::Sustainable => "Sustainable Resource - Stable CM System",
            SustainabilityBand::Moderate => "Moderate Sustainability - Monitor Extraction",
            SustainabilityBand::Unsustainable => "Unsustainable - High Depletion Risk",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_bands() {
        assert_eq!(RiskBand::from_risk(-5.0), RiskBand::Low);
        assert_eq!(RiskBand::from_risk(29.99), RiskBand::Low);
        assert_eq!(RiskBand::from_risk(30.0), RiskBand::Moderate);
        assert_eq!(RiskBand::from_risk(59.99), RiskBand::Moderate);
        assert_eq!(RiskBand::from_risk(60.0), RiskBand::High);
        assert_eq!(RiskBand::from_risk(102.68), RiskBand::High);
    }

    #[test]
    fn test_sustainability_bands() {
        assert_eq!(SustainabilityBand::from_score(90.0), SustainabilityBand::Sustainable);
        assert_eq!(SustainabilityBand::from_score(70.0), SustainabilityBand::Moderate);
        assert_eq!(SustainabilityBand::from_score(50.0), SustainabilityBand::Moderate);
        assert_eq!(SustainabilityBand::from_score(30.0), SustainabilityBand::Unsustainable);
    }
}
