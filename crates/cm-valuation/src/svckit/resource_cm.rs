//! Resource CM Tool
//!
//! Evaluates the oil/water reserve model.

use async_trait::async_trait;

use cm_toolkit::{
    Tool, ToolSchema, ToolCall, ToolResult, ParameterSchema, ToolkitError,
    Result as ToolkitResult,
};

use crate::error::ValuationError;
use crate::model::{ResourceInputs, ResourceKind};
use crate::report::resource_report;
use crate::valuation::{ResourceValuation, SustainabilityBand};

/// Tool for the oil/water valuation model
pub struct ResourceCmTool;

#[async_trait]
impl Tool for ResourceCmTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "resource_cm".into(),
            description: "Compute the commodity money value of oil or water reserves (net value x years to depletion) and a sustainability score.".into(),
            parameters: vec![
                ParameterSchema {
                    name: "kind".into(),
                    param_type: "string".into(),
                    description: "Resource: 'oil' or 'water'".into(),
                    required: true,
                    default: None,
                    enum_values: Some(vec![
                        serde_json::json!("oil"),
                        serde_json::json!("water"),
                    ]),
                },
                ParameterSchema::number("reserves", "Total reserves (barrels for oil, liters for water)"),
                ParameterSchema::number("extraction_rate", "Annual extraction volume"),
                ParameterSchema::number("price_usd", "Market price per unit"),
                ParameterSchema::number("extraction_cost_usd", "Cost to extract per unit"),
            ],
            category: Some("valuation".into()),
            has_side_effects: false,
        }
    }
    
    async fn execute(&self, call: &ToolCall) -> ToolkitResult<ToolResult> {
        let kind: ResourceKind = call
            .optional_str("kind")
            .ok_or_else(|| ToolkitError::ToolValidation("Missing required parameter: kind".into()))?
            .parse()
            .map_err(|e: ValuationError| ToolkitError::ToolValidation(e.to_string()))?;
        
        let inputs = ResourceInputs {
            kind,
            reserves: call.require_f64("reserves")?,
            extraction_rate: call.require_f64("extraction_rate")?,
            price_usd: call.require_f64("price_usd")?,
            extraction_cost_usd: call.require_f64("extraction_cost_usd")?,
        };
        
        let breakdown = match ResourceValuation::breakdown(&inputs) {
            Ok(b) => b,
            Err(e) => return Ok(ToolResult::failure("resource_cm", e.to_string())),
        };
        
        let data = serde_json::json!({
            "result": breakdown.result(),
            "breakdown": breakdown,
            "band": SustainabilityBand::from_score(breakdown.sustainability),
        });
        
        Ok(ToolResult::success("resource_cm", resource_report(&breakdown)).with_data(data))
    }
}
