//! Error Types for Commodity Money Valuation

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValuationError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// An input cannot be evaluated: a zero denominator or a non-finite value.
    #[error("Domain error: {field} {reason}")]
    Domain {
        field: &'static str,
        reason: &'static str,
    },
    
    #[error("Resource not supported: {0}")]
    UnsupportedResource(String),
}

impl ValuationError {
    pub(crate) fn zero(field: &'static str) -> Self {
        Self::Domain { field, reason: "must be non-zero" }
    }
    
    pub(crate) fn non_finite(field: &'static str) -> Self {
        Self::Domain { field, reason: "must be finite" }
    }
    
    /// Name of the offending input, if this is a domain error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Domain { field, .. } => Some(*field),
            Self::UnsupportedResource(_) => None,
        }
    }
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValuationError::non_finite(field))
    }
}

/// Reject a zero denominator.
pub(crate) fn ensure_nonzero(field: &'static str, value: f64) -> Result<f64> {
    if value == 0.0 {
        Err(ValuationError::zero(field))
    } else {
        Ok(value)
    }
}
