//! Bitcoin Commodity Money Model
//!
//! Stock-to-flow scarcity, weighted by hashrate as an energy-security proxy
//! and by market capitalization, plus an additive risk score.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_nonzero, Result};
use crate::model::{BitcoinInputs, ValuationResult};

/// Blocks mined per day at the ten-minute target
pub const BLOCKS_PER_DAY: f64 = 144.0;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Protocol supply cap in BTC
pub const MAX_SUPPLY: f64 = 21e6;

/// Hashrate (EH/s) that maps to an energy-security factor of 1
pub const HASHRATE_SCALE_EH: f64 = 100.0;

/// Hashrate (EH/s) at which the centralization risk reaches zero
pub const DECENTRALIZED_HASHRATE_EH: f64 = 1000.0;

/// Market caps are expressed in trillions of USD
pub const MARKET_CAP_SCALE_USD: f64 = 1e12;

const DEPLETION_WEIGHT: f64 = 40.0;
const INFLATION_WEIGHT: f64 = 30.0;
const CENTRALIZATION_WEIGHT: f64 = 30.0;

/// Every intermediate metric of a Bitcoin evaluation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BitcoinBreakdown {
    /// BTC issued per year
    pub annual_inflation: f64,
    pub stock_to_flow: f64,
    pub energy_security: f64,
    pub value: f64,
    pub depletion_risk: f64,
    pub inflation_risk: f64,
    /// Negative once hashrate exceeds 1000 EH/s
    pub centralization_risk: f64,
    /// Sum of the three sub-scores. Not clamped to [0, 100].
    pub risk: f64,
    /// Remainder of the 100-point scale (`100 - risk`); negative when risk exceeds 100
    pub stable_share: f64,
}

impl BitcoinBreakdown {
    pub fn result(&self) -> ValuationResult {
        ValuationResult::new(self.value, self.risk)
    }
}

/// Bitcoin valuation model
#[derive(Clone, Copy, Debug, Default)]
pub struct BitcoinValuation;

impl BitcoinValuation {
    /// Evaluate to a `(value, risk)` pair
    pub fn evaluate(inputs: &BitcoinInputs) -> Result<ValuationResult> {
        Self::breakdown(inputs).map(|b| b.result())
    }

    /// Evaluate and keep every intermediate metric
    pub fn breakdown(inputs: &BitcoinInputs) -> Result<BitcoinBreakdown> {
        let supply = ensure_finite("supply", inputs.supply)?;
        let hashrate_eh = ensure_finite("hashrate_eh", inputs.hashrate_eh)?;
        let block_reward = ensure_finite("block_reward", inputs.block_reward)?;
        let market_cap_usd = ensure_finite("market_cap_usd", inputs.market_cap_usd)?;

        ensure_nonzero("supply", supply)?;
        ensure_nonzero("block_reward", block_reward)?;
        let annual_inflation = annual_inflation_checked(block_reward)?;

        let stock_to_flow = supply / annual_inflation;
        let energy_security = hashrate_eh / HASHRATE_SCALE_EH;
        let value = stock_to_flow * energy_security * (market_cap_usd / MARKET_CAP_SCALE_USD);

        let depletion_risk = (supply / MAX_SUPPLY) * DEPLETION_WEIGHT;
        let inflation_risk = (annual_inflation / supply) * 100.0 * INFLATION_WEIGHT;
        let centralization_risk = (1.0 - hashrate_eh / DECENTRALIZED_HASHRATE_EH) * CENTRALIZATION_WEIGHT;
        let risk = depletion_risk + inflation_risk + centralization_risk;

        tracing::debug!(stock_to_flow, value, risk, "evaluated bitcoin");
        if !(0.0..=100.0).contains(&risk) {
            tracing::warn!(risk, "bitcoin risk score outside the nominal 0-100 range");
        }

        Ok(BitcoinBreakdown {
            annual_inflation,
            stock_to_flow,
            energy_security,
            value,
            depletion_risk,
            inflation_risk,
            centralization_risk,
            risk,
            stable_share: 100.0 - risk,
        })
    }

    /// Stock-to-flow ratio: supply over annual issuance
    pub fn stock_to_flow(supply: f64, block_reward: f64) -> Result<f64> {
        let supply = ensure_finite("supply", supply)?;
        let block_reward = ensure_finite("block_reward", block_reward)?;
        ensure_nonzero("block_reward", block_reward)?;
        let annual_inflation = annual_inflation_checked(block_reward)?;
        Ok(supply / annual_inflation)
    }
}

/// BTC issued per year at a fixed block reward
fn annual_inflation(block_reward: f64) -> f64 {
    block_reward * BLOCKS_PER_DAY * DAYS_PER_YEAR
}

/// Annual issuance as a denominator: non-zero and finite.
/// Huge finite rewards overflow to infinity here.
fn annual_inflation_checked(block_reward: f64) -> Result<f64> {
    let annual_inflation = ensure_nonzero("annual_inflation", annual_inflation(block_reward))?;
    ensure_finite("annual_inflation", annual_inflation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValuationError;

    fn reference() -> BitcoinInputs {
        BitcoinInputs {
            supply: 19.5e6,
            hashrate_eh: 500.0,
            block_reward: 6.25,
            market_cap_usd: 1.2e12,
        }
    }

    #[test]
    fn test_stock_to_flow() {
        let sf = BitcoinValuation::stock_to_flow(19.5e6, 6.25).unwrap();
        assert!((sf - 59.36).abs() < 0.01);
        assert!((annual_inflation(6.25) - 328_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_breakdown() {
        let b = BitcoinValuation::breakdown(&reference()).unwrap();

        assert!((b.energy_security - 5.0).abs() < 1e-12);
        assert!((b.value - 356.16).abs() < 0.01);
        assert!((b.depletion_risk - 37.142_857).abs() < 1e-5);
        assert!((b.inflation_risk - 50.538_46).abs() < 1e-4);
        assert!((b.centralization_risk - 15.0).abs() < 1e-12);
        assert!((b.stable_share + 2.68).abs() < 0.01);
    }

    #[test]
    fn test_risk_exceeds_100_unclamped() {
        let result = BitcoinValuation::evaluate(&reference()).unwrap();
        assert!((result.score - 102.68).abs() < 0.01);
        assert!(result.score > 100.0);
    }

    #[test]
    fn test_centralization_risk_goes_negative() {
        let inputs = BitcoinInputs { hashrate_eh: 2000.0, ..reference() };
        let b = BitcoinValuation::breakdown(&inputs).unwrap();
        assert!((b.centralization_risk + 30.0).abs() < 1e-12);
        assert!((b.risk - (b.depletion_risk + b.inflation_risk - 30.0)).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let a = BitcoinValuation::evaluate(&reference()).unwrap();
        let b = BitcoinValuation::evaluate(&reference()).unwrap();
        assert_eq!(a.value.to_bits(), b.value.to_bits());
        assert_eq!(a.score.to_bits(), b.score.to_bits());
    }

    #[test]
    fn test_zero_denominators_rejected() {
        let zero_supply = BitcoinInputs { supply: 0.0, ..reference() };
        assert_eq!(
            BitcoinValuation::evaluate(&zero_supply).unwrap_err().field(),
            Some("supply")
        );

        let zero_reward = BitcoinInputs { block_reward: 0.0, ..reference() };
        assert_eq!(
            BitcoinValuation::evaluate(&zero_reward).unwrap_err().field(),
            Some("block_reward")
        );

        assert!(BitcoinValuation::stock_to_flow(19.5e6, 0.0).is_err());
    }

    #[test]
    fn test_overflowing_issuance_rejected() {
        let huge_reward = BitcoinInputs { block_reward: 1e306, ..reference() };
        assert_eq!(
            BitcoinValuation::evaluate(&huge_reward),
            Err(ValuationError::Domain { field: "annual_inflation", reason: "must be finite" })
        );
        assert!(BitcoinValuation::stock_to_flow(19.5e6, 1e306).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let nan = BitcoinInputs { hashrate_eh: f64::NAN, ..reference() };
        assert_eq!(
            BitcoinValuation::evaluate(&nan),
            Err(ValuationError::Domain { field: "hashrate_eh", reason: "must be finite" })
        );

        let inf = BitcoinInputs { market_cap_usd: f64::INFINITY, ..reference() };
        assert!(BitcoinValuation::evaluate(&inf).is_err());
    }

    #[test]
    fn test_zero_hashrate_is_valid() {
        let inputs = BitcoinInputs { hashrate_eh: 0.0, ..reference() };
        let b = BitcoinValuation::breakdown(&inputs).unwrap();
        assert!(b.value.abs() < f64::EPSILON);
        assert!((b.centralization_risk - 30.0).abs() < 1e-12);
    }
}
