//! # bistro-core: Pure Order Types for Bistro POS
//!
//! Domain types for restaurant orders, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bistro POS Order Store                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Order management / kitchen display (callers)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  report   │  │   money   │  │ validation│  │   │
//! │  │   │  Order    │  │ DailySales│  │   Money   │  │   rules   │  │   │
//! │  │   │  Status   │  │ Hourly    │  │  (cents)  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  bistro-db (Database Layer)                     │   │
//! │  │          SQLite queries, migrations, OrderRepository            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Order`, `OrderStatus`, `OrderType`, `ReportWindow`
//! - [`report`] - Reporting projections (daily, hourly, status, type)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Order validation
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::{Order, OrderStatus, OrderType};
//!
//! let order = Order::new("A-1001", OrderType::DineIn, 1250, 1_750_000_000_000);
//! assert_eq!(order.status, OrderStatus::New);
//! assert_eq!(order.total().to_string(), "$12.50");
//! assert!(order.status.is_pending());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use report::{DailySalesSummary, HourlySales, OrderStatusCount, OrderTypeStats};
pub use types::*;
