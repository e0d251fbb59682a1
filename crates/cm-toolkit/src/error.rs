//! Error Types

use thiserror::Error;

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, ToolkitError>;

/// Tool framework error types
#[derive(Error, Debug)]
pub enum ToolkitError {
    /// Tool not found in registry
    #[error("Tool not found: {0}")]
    ToolNotFound(String),
    
    /// Tool validation failed
    #[error("Tool validation error: {0}")]
    ToolValidation(String),
    
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    
    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl ToolkitError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            ToolkitError::ToolNotFound(_) => "TOOL_NOT_FOUND",
            ToolkitError::ToolValidation(_) => "INVALID_ARGUMENTS",
            ToolkitError::Json(_) => "JSON_ERROR",
            ToolkitError::Other(_) => "INTERNAL_ERROR",
        }
    }
    
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            ToolkitError::ToolNotFound(name) => format!("The tool '{}' is not available.", name),
            ToolkitError::ToolValidation(msg) => format!("Invalid tool input: {}", msg),
            _ => "An unexpected error occurred.".into(),
        }
    }
}

impl From<anyhow::Error> for ToolkitError {
    fn from(err: anyhow::Error) -> Self {
        ToolkitError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_messages() {
        let err = ToolkitError::ToolNotFound("oracle".into());
        assert_eq!(err.code(), "TOOL_NOT_FOUND");
        assert_eq!(err.user_message(), "The tool 'oracle' is not available.");
        
        let err: ToolkitError = anyhow::anyhow!("boom").into();
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(err.to_string(), "boom");
    }
}
