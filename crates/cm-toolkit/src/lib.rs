//! # cm-toolkit
//!
//! Tool abstraction shared by the commodity money valuation services.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ToolRegistry                           │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │  ToolCall   │──│  validate   │──│   Tool::execute     │  │
//! │  │   (JSON)    │  │  (schema)   │  │   -> ToolResult     │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Domain crates implement [`Tool`] for each entry point; the HTTP server
//! only ever talks to the registry.

pub mod tool;
pub mod error;

pub use error::{ToolkitError, Result};
pub use tool::{Tool, ToolCall, ToolResult, ToolRegistry, ToolSchema, ParameterSchema};
