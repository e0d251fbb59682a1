//! Case Study Scenarios
//!
//! Bundles inputs for all three asset classes and runs them end to end:
//! evaluate each, compare, render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::compare::{compare, Verdict};
use crate::error::Result;
use crate::model::{BitcoinInputs, ComparisonReport, ResourceInputs, ResourceKind};
use crate::report;
use crate::valuation::{BitcoinBreakdown, BitcoinValuation, ResourceBreakdown, ResourceValuation};

/// Closing notes printed after every case study
pub const INTERPRETATION_GUIDE: [&str; 4] = [
    "High CM Value: Strong monetary properties",
    "Low Risk Score: Stable, sustainable system",
    "Trade-offs: Balance value vs stability",
    "Sustainability: Long-term viability indicator",
];

/// Inputs for one Bitcoin / oil / water comparison
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub bitcoin: BitcoinInputs,
    pub oil: ResourceInputs,
    pub water: ResourceInputs,
}

impl Default for CaseStudy {
    fn default() -> Self {
        Self::reference()
    }
}

impl CaseStudy {
    /// 2024 network figures and global oil / freshwater reserves
    pub fn reference() -> Self {
        Self {
            bitcoin: BitcoinInputs {
                supply: 19.5e6,
                hashrate_eh: 500.0,
                block_reward: 6.25,
                market_cap_usd: 1.2e12,
            },
            oil: ResourceInputs {
                kind: ResourceKind::Oil,
                reserves: 1.5e12,
                extraction_rate: 35e9,
                price_usd: 80.0,
                extraction_cost_usd: 40.0,
            },
            water: ResourceInputs {
                kind: ResourceKind::Water,
                reserves: 1.4e18,
                extraction_rate: 4e15,
                price_usd: 0.005,
                extraction_cost_usd: 0.002,
            },
        }
    }

    /// Evaluate all three assets and compare them.
    ///
    /// The first domain error aborts the run.
    pub fn run(&self) -> Result<CaseStudyOutcome> {
        let bitcoin = BitcoinValuation::breakdown(&self.bitcoin)?;
        let oil = ResourceValuation::breakdown(&self.oil)?;
        let water = ResourceValuation::breakdown(&self.water)?;

        let comparison = compare(bitcoin.result(), oil.result(), water.result())?;
        let verdict = comparison.verdict();

        tracing::info!(%verdict, "case study complete");

        Ok(CaseStudyOutcome {
            bitcoin,
            oil,
            water,
            comparison,
            verdict,
            generated_at: Utc::now(),
        })
    }
}

/// Everything a case study produces
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseStudyOutcome {
    pub bitcoin: BitcoinBreakdown,
    pub oil: ResourceBreakdown,
    pub water: ResourceBreakdown,
    pub comparison: ComparisonReport,
    pub verdict: Verdict,
    pub generated_at: DateTime<Utc>,
}

impl CaseStudyOutcome {
    /// Full console report: three single-asset sections, the comparison and
    /// the interpretation guide
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&report::bitcoin_report(&self.bitcoin));
        out.push('\n');
        out.push_str(&report::resource_report(&self.oil));
        out.push('\n');
        out.push_str(&report::resource_report(&self.water));
        out.push('\n');
        out.push_str(&report::comparison_report(&self.comparison));

        out.push_str("\n=== INTERPRETATION GUIDE ===\n");
        for (i, line) in INTERPRETATION_GUIDE.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, line));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssetClass;

    #[test]
    fn test_reference_case_study() {
        let outcome = CaseStudy::reference().run().unwrap();

        assert!((outcome.bitcoin.value - 356.16).abs() < 0.01);
        assert!((outcome.oil.value - 2571.43).abs() < 0.01);
        assert!((outcome.water.value - 1_470_000.0).abs() < 1.0);

        assert!((outcome.comparison.risks[1] - 50.0).abs() < f64::EPSILON);
        assert!((outcome.comparison.risks[2] - 10.0).abs() < f64::EPSILON);
        assert_eq!(outcome.verdict, Verdict::Dominates { asset: AssetClass::Water });
    }

    #[test]
    fn test_render_contains_all_sections() {
        let text = CaseStudy::reference().run().unwrap().render();

        assert!(text.contains("=== BITCOIN CM ANALYSIS ==="));
        assert!(text.contains("=== OIL CM ANALYSIS ==="));
        assert!(text.contains("=== WATER CM ANALYSIS ==="));
        assert!(text.contains("=== CM SYSTEM COMPARISON ==="));
        assert!(text.contains("CONCLUSION: Water dominates in both value AND stability."));
        assert!(text.contains("4. Sustainability: Long-term viability indicator"));
    }

    #[test]
    fn test_domain_error_aborts() {
        let mut study = CaseStudy::reference();
        study.oil.extraction_rate = 0.0;
        assert_eq!(study.run().unwrap_err().field(), Some("extraction_rate"));
    }

    #[test]
    fn test_deserialize_custom_scenario() {
        let mut json = serde_json::to_value(CaseStudy::reference()).unwrap();
        json["bitcoin"]["hashrate_eh"] = serde_json::json!(1500.0);
        let study: CaseStudy = serde_json::from_value(json).unwrap();
        let outcome = study.run().unwrap();
        assert!(outcome.bitcoin.centralization_risk < 0.0);
    }
}
