//! Service Kit - Valuation Tools
//!
//! Domain tools that implement `cm_toolkit::Tool` for each valuation entry point.

mod bitcoin_cm;
mod resource_cm;
mod compare_cm;
mod case_study;

pub use bitcoin_cm::BitcoinCmTool;
pub use resource_cm::ResourceCmTool;
pub use compare_cm::CompareCmTool;
pub use case_study::CaseStudyTool;

use cm_toolkit::ToolRegistry;

/// Registry holding every valuation tool
pub fn registry() -> ToolRegistry {
    let mut tools = ToolRegistry::new();
    tools.register(BitcoinCmTool);
    tools.register(ResourceCmTool);
    tools.register(CompareCmTool);
    tools.register(CaseStudyTool);
    tools
}
