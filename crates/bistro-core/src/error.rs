//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                        │
//! │  ├── CoreError        - Parsing / general domain errors                │
//! │  └── ValidationError  - Order field validation failures                │
//! │                                                                         │
//! │  bistro-db errors (separate crate)                                     │
//! │  └── DbError          - Store failures, conflicts                      │
//! │                                                                         │
//! │  Flow: ValidationError → DbError::Validation → caller                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Text does not name a known order status.
    ///
    /// ## When This Occurs
    /// - Parsing a status from a query string or a legacy export
    #[error("Unknown order status: '{0}'")]
    UnknownStatus(String),

    /// Text does not name a known order type.
    #[error("Unknown order type: '{0}'")]
    UnknownOrderType(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur before an order ever reaches the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// A time window whose start is after its end.
    #[error("window start {start} is after end {end}")]
    InvertedWindow { start: i64, end: i64 },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownStatus("served".to_string());
        assert_eq!(err.to_string(), "Unknown order status: 'served'");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvertedWindow { start: 10, end: 5 };
        assert_eq!(err.to_string(), "window start 10 is after end 5");

        let err = ValidationError::Negative {
            field: "total".to_string(),
        };
        assert_eq!(err.to_string(), "total must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "total".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
