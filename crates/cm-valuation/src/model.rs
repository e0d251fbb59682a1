//! Domain Models
//!
//! Plain value records passed between the valuation models, the comparator
//! and the report renderer. All figures are `f64`: the formulas are fixed
//! closed-form index arithmetic, not money bookkeeping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValuationError;

/// The three asset classes, in comparison order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Bitcoin,
    Oil,
    Water,
}

impl AssetClass {
    /// Comparison order: Bitcoin, Oil, Water
    pub const ALL: [AssetClass; 3] = [AssetClass::Bitcoin, AssetClass::Oil, AssetClass::Water];

    pub fn index(self) -> usize {
        match self {
            AssetClass::Bitcoin => 0,
            AssetClass::Oil => 1,
            AssetClass::Water => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetClass::Bitcoin => "Bitcoin",
            AssetClass::Oil => "Oil",
            AssetClass::Water => "Water",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical resource valued by the reserve model.
///
/// Only selects labels and units; the arithmetic is identical for both kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Oil,
    Water,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Oil => "oil",
            ResourceKind::Water => "water",
        }
    }

    /// Unit in which reserves and extraction are measured
    pub fn unit(self) -> &'static str {
        match self {
            ResourceKind::Oil => "barrel",
            ResourceKind::Water => "liter",
        }
    }

    pub fn asset_class(self) -> AssetClass {
        match self {
            ResourceKind::Oil => AssetClass::Oil,
            ResourceKind::Water => AssetClass::Water,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResourceKind {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oil" => Ok(ResourceKind::Oil),
            "water" => Ok(ResourceKind::Water),
            other => Err(ValuationError::UnsupportedResource(other.to_string())),
        }
    }
}

/// Inputs to the Bitcoin model
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BitcoinInputs {
    /// BTC in circulation (e.g. 19.5e6); conventionally at most 21e6
    pub supply: f64,

    /// Network hashrate in EH/s
    pub hashrate_eh: f64,

    /// BTC issued per block
    pub block_reward: f64,

    /// Market capitalization in USD
    pub market_cap_usd: f64,
}

/// Inputs to the oil/water reserve model
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceInputs {
    pub kind: ResourceKind,

    /// Total reserves (barrels for oil, liters for water)
    pub reserves: f64,

    /// Annual extraction volume, same unit as reserves
    pub extraction_rate: f64,

    /// Market price per unit
    pub price_usd: f64,

    /// Cost to extract one unit
    pub extraction_cost_usd: f64,
}

/// Output pair of every valuation model.
///
/// `score` is a risk (higher = worse) for Bitcoin and a sustainability
/// (higher = better) for resources. Use [`crate::compare`] to put the two
/// on a common scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Commodity money value index
    pub value: f64,

    pub score: f64,
}

impl ValuationResult {
    pub fn new(value: f64, score: f64) -> Self {
        Self { value, score }
    }
}

/// Outcome of comparing the three asset classes.
///
/// The winning indices always name an entry of [`AssetClass::ALL`]: they are
/// set by [`crate::compare`] and checked again on deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawComparisonReport")]
pub struct ComparisonReport {
    /// Value indices in [`AssetClass::ALL`] order
    pub values: [f64; 3],

    /// Risk scores, uniformly higher = worse
    pub risks: [f64; 3],

    pub(crate) best_value_index: usize,

    pub(crate) lowest_risk_index: usize,
}

#[derive(Deserialize)]
struct RawComparisonReport {
    values: [f64; 3],
    risks: [f64; 3],
    best_value_index: usize,
    lowest_risk_index: usize,
}

impl TryFrom<RawComparisonReport> for ComparisonReport {
    type Error = ValuationError;

    fn try_from(raw: RawComparisonReport) -> Result<Self, Self::Error> {
        for (field, index) in [
            ("best_value_index", raw.best_value_index),
            ("lowest_risk_index", raw.lowest_risk_index),
        ] {
            if AssetClass::from_index(index).is_none() {
                return Err(ValuationError::Domain { field, reason: "must name an asset class" });
            }
        }

        Ok(Self {
            values: raw.values,
            risks: raw.risks,
            best_value_index: raw.best_value_index,
            lowest_risk_index: raw.lowest_risk_index,
        })
    }
}

impl ComparisonReport {
    pub fn best_value_index(&self) -> usize {
        self.best_value_index
    }

    pub fn lowest_risk_index(&self) -> usize {
        self.lowest_risk_index
    }

    pub fn best_value(&self) -> AssetClass {
        AssetClass::from_index(self.best_value_index).unwrap_or(AssetClass::Bitcoin)
    }

    pub fn lowest_risk(&self) -> AssetClass {
        AssetClass::from_index(self.lowest_risk_index).unwrap_or(AssetClass::Bitcoin)
    }
}
