//! # cm-valuation
//!
//! Commodity money (CM) valuation for three asset classes: Bitcoin, oil
//! and water. Each model is a closed-form function of a handful of figures
//! returning a value index and a score; a comparator puts the scores on a
//! common risk scale and ranks the assets.
//!
//! ## Data Flow
//!
//! ```text
//! ┌──────────────────┐   (value, risk)
//! │ BitcoinValuation │──────────────────┐
//! └──────────────────┘                  │      ┌────────────┐     ┌────────┐
//! ┌──────────────────┐ (value, sust.)   ├─────▶│  compare   │────▶│ report │
//! │ResourceValuation │──────────────────┤      │ 100 - sust.│     └────────┘
//! │  oil   /  water  │──────────────────┘      └────────────┘
//! └──────────────────┘
//! ```
//!
//! ## Reading the scores
//!
//! - Bitcoin's score is a **risk** (higher = worse) and is not clamped: the
//!   2024 reference figures already give ~102.7.
//! - Oil and water scores are **sustainability** (higher = better), banded
//!   on years to depletion: >100y = 90, >50y = 70, >20y = 50, else 30.

pub mod valuation;
pub mod compare;
pub mod report;
pub mod scenario;
pub mod svckit;
pub mod model;
pub mod error;

pub use error::{ValuationError, Result};
pub use model::{AssetClass, BitcoinInputs, ComparisonReport, ResourceInputs, ResourceKind, ValuationResult};
pub use valuation::{
    evaluate_bitcoin, evaluate_resource, BitcoinBreakdown, BitcoinValuation, ResourceBreakdown,
    ResourceValuation, RiskBand, SustainabilityBand,
};
pub use compare::{compare, Verdict};
pub use scenario::{CaseStudy, CaseStudyOutcome};

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{
        registry,
        BitcoinCmTool,
        ResourceCmTool,
        CompareCmTool,
        CaseStudyTool,
    };
}
