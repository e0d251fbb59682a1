//! Bitcoin CM Tool
//!
//! Evaluates the Bitcoin commodity money model from network figures.

use async_trait::async_trait;

use cm_toolkit::{
    Tool, ToolSchema, ToolCall, ToolResult, ParameterSchema,
    Result as ToolkitResult,
};

use crate::model::BitcoinInputs;
use crate::report::bitcoin_report;
use crate::valuation::{BitcoinValuation, RiskBand};

/// Tool for the Bitcoin valuation model
pub struct BitcoinCmTool;

#[async_trait]
impl Tool for BitcoinCmTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "bitcoin_cm".into(),
            description: "Compute Bitcoin's commodity money value (stock-to-flow x energy security x market weight) and its risk score.".into(),
            parameters: vec![
                ParameterSchema::number("supply", "BTC in circulation (e.g., 19.5e6)"),
                ParameterSchema::number("hashrate_eh", "Network hashrate in EH/s (e.g., 500)"),
                ParameterSchema::number("block_reward", "BTC per block (e.g., 6.25)"),
                ParameterSchema::number("market_cap_usd", "Total market cap in USD (e.g., 1.2e12)"),
            ],
            category: Some("valuation".into()),
            has_side_effects: false,
        }
    }
    
    async fn execute(&self, call: &ToolCall) -> ToolkitResult<ToolResult> {
        let inputs = BitcoinInputs {
            supply: call.require_f64("supply")?,
            hashrate_eh: call.require_f64("hashrate_eh")?,
            block_reward: call.require_f64("block_reward")?,
            market_cap_usd: call.require_f64("market_cap_usd")?,
        };
        
        let breakdown = match BitcoinValuation::breakdown(&inputs) {
            Ok(b) => b,
            Err(e) => return Ok(ToolResult::failure("bitcoin_cm", e.to_string())),
        };
        
        let data = serde_json::json!({
            "result": breakdown.result(),
            "breakdown": breakdown,
            "band": RiskBand::from_risk(breakdown.risk),
        });
        
        Ok(ToolResult::success("bitcoin_cm", bitcoin_report(&breakdown)).with_data(data))
    }
}
