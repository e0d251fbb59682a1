//! Application State

use std::sync::Arc;

use cm_toolkit::ToolRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Tool registry with all valuation tools
    pub tools: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(tools: ToolRegistry) -> Self {
        Self { tools: Arc::new(tools) }
    }
}
