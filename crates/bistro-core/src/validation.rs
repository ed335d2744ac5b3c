//! # Validation Module
//!
//! Order validation run before anything reaches the store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (order management)                                    │
//! │  └── Builds Order from the till / kitchen display                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── total not negative                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── PRIMARY KEY uniqueness                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::validation::validate_total_cents;
//!
//! validate_total_cents(1250).unwrap();
//! assert!(validate_total_cents(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Order;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an order total in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (comped orders)
pub fn validate_total_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "total".to_string(),
        });
    }

    Ok(())
}

/// Validates every field of an order that has a rule.
///
/// `order_no` is free text: any string the caller assigns is stored as-is.
pub fn validate_order(order: &Order) -> ValidationResult<()> {
    validate_total_cents(order.total_cents)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderType;

    #[test]
    fn test_validate_total_cents() {
        assert!(validate_total_cents(0).is_ok());
        assert!(validate_total_cents(1099).is_ok());
        assert!(matches!(
            validate_total_cents(-100),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_validate_order() {
        let good = Order::new("T-7", OrderType::Takeaway, 800, 0);
        assert!(validate_order(&good).is_ok());

        // Order numbers carry no rules of their own
        for order_no in ["", " ", "WEB-2026-10-19-LOCATION-0042-ABCDEF", "A\t1"] {
            let order = Order::new(order_no, OrderType::Delivery, 0, 0);
            assert!(validate_order(&order).is_ok(), "{order_no:?} rejected");
        }

        let bad = Order::new("T-8", OrderType::Takeaway, -1, 0);
        assert!(matches!(
            validate_order(&bad),
            Err(ValidationError::Negative { .. })
        ));
    }
}
