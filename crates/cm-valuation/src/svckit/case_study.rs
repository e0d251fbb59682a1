//! Case Study Tool
//!
//! Runs the reference Bitcoin / oil / water scenario end to end.

use async_trait::async_trait;

use cm_toolkit::{
    Tool, ToolSchema, ToolCall, ToolResult,
    Result as ToolkitResult,
};

use crate::scenario::CaseStudy;

/// Tool for the reference case study
pub struct CaseStudyTool;

#[async_trait]
impl Tool for CaseStudyTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "case_study".into(),
            description: "Evaluate the 2024 reference figures for Bitcoin, global oil and global freshwater, then compare them.".into(),
            parameters: vec![],
            category: Some("analysis".into()),
            has_side_effects: false,
        }
    }
    
    async fn execute(&self, _call: &ToolCall) -> ToolkitResult<ToolResult> {
        match CaseStudy::reference().run() {
            Ok(outcome) => {
                let data = serde_json::to_value(&outcome)?;
                Ok(ToolResult::success("case_study", outcome.render()).with_data(data))
            }
            Err(e) => Ok(ToolResult::failure("case_study", e.to_string())),
        }
    }
}
