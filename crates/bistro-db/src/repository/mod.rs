//! # Repository Module
//!
//! Database repository implementations for the order store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Order management                                                      │
//! │       │                                                                 │
//! │       │  db.orders().get_pending_orders()                              │
//! │       ▼                                                                 │
//! │  OrderRepository                                                       │
//! │  ├── order.rs   lookups, insert, update, delete                        │
//! │  └── report.rs  daily / status / type / hourly aggregates              │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • Callers see typed Orders and projections, never rows                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`OrderRepository`](order::OrderRepository) - Order CRUD, lookups and reports

pub mod order;
pub mod report;
