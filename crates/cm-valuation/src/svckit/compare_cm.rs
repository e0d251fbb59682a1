//! Compare CM Tool
//!
//! Ranks Bitcoin, oil and water from previously computed results.

use async_trait::async_trait;

use cm_toolkit::{
    Tool, ToolSchema, ToolCall, ToolResult, ParameterSchema,
    Result as ToolkitResult,
};

use crate::compare::compare;
use crate::model::ValuationResult;
use crate::report::comparison_report;

/// Tool for the three-way comparison
pub struct CompareCmTool;

#[async_trait]
impl Tool for CompareCmTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "compare_cm".into(),
            description: "Compare Bitcoin, oil and water as commodity money systems. Resource sustainability is converted to risk (100 - sustainability) before ranking.".into(),
            parameters: vec![
                ParameterSchema::number("bitcoin_value", "Bitcoin CM value index"),
                ParameterSchema::number("bitcoin_risk", "Bitcoin risk score (higher = worse)"),
                ParameterSchema::number("oil_value", "Oil CM value index"),
                ParameterSchema::number("oil_sustainability", "Oil sustainability score (higher = better)"),
                ParameterSchema::number("water_value", "Water CM value index"),
                ParameterSchema::number("water_sustainability", "Water sustainability score (higher = better)"),
            ],
            category: Some("analysis".into()),
            has_side_effects: false,
        }
    }
    
    async fn execute(&self, call: &ToolCall) -> ToolkitResult<ToolResult> {
        let bitcoin = ValuationResult::new(call.require_f64("bitcoin_value")?, call.require_f64("bitcoin_risk")?);
        let oil = ValuationResult::new(call.require_f64("oil_value")?, call.require_f64("oil_sustainability")?);
        let water = ValuationResult::new(call.require_f64("water_value")?, call.require_f64("water_sustainability")?);
        
        let report = match compare(bitcoin, oil, water) {
            Ok(r) => r,
            Err(e) => return Ok(ToolResult::failure("compare_cm", e.to_string())),
        };
        let verdict = report.verdict();
        
        let data = serde_json::json!({
            "report": report,
            "verdict": verdict,
            "conclusion": verdict.to_string(),
        });
        
        Ok(ToolResult::success("compare_cm", comparison_report(&report)).with_data(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trade_off_comparison() {
        let call = ToolCall::new("compare_cm")
            .arg("bitcoin_value", 356.16)
            .arg("bitcoin_risk", 102.68)
            .arg("oil_value", 2571.43)
            .arg("oil_sustainability", 90.0)
            .arg("water_value", 1470.0)
            .arg("water_sustainability", 50.0);
        
        let result = CompareCmTool.execute(&call).await.unwrap();
        assert!(result.success);
        assert!(result.output.contains("CONCLUSION: Oil dominates in both value AND stability."));
        
        let data = result.data.unwrap();
        assert_eq!(data["report"]["best_value_index"], 1);
        assert_eq!(data["report"]["lowest_risk_index"], 1);
        assert_eq!(data["verdict"]["kind"], "dominates");
        assert!((data["report"]["risks"][2].as_f64().unwrap() - 50.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_non_finite_scores_fail() {
        let call = ToolCall::new("compare_cm")
            .arg("bitcoin_value", "inf")
            .arg("bitcoin_risk", "NaN")
            .arg("oil_value", 5.0)
            .arg("oil_sustainability", 50.0)
            .arg("water_value", 1.0)
            .arg("water_sustainability", 50.0);

        let result = CompareCmTool.execute(&call).await.unwrap();
        assert!(!result.success);
        assert!(result.data.is_none());
        assert!(result.output.contains("bitcoin_value must be finite"));
    }
}
