//! # bistro-db: Order Store for Bistro POS
//!
//! Persistence and reporting for restaurant orders, backed by SQLite via sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro POS Data Flow                             │
//! │                                                                         │
//! │  Order management (kitchen display, till, back office)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     bistro-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │ OrderRepo     │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (order.rs)    │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ CRUD          │    │ 001_orders   │  │   │
//! │  │   │ Connection    │    │ Reports       │    │ ...          │  │   │
//! │  │   │ Management    │    │ (report.rs)   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database (orders table)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - `OrderRepository` (queries, mutations, reports)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bistro_db::{Database, DbConfig};
//! use bistro_core::{Order, OrderType, ReportWindow};
//!
//! let db = Database::new(DbConfig::new("path/to/bistro.db")).await?;
//!
//! let id = db.orders().insert(&Order::new("A-1", OrderType::DineIn, 1250, now_ms)).await?;
//! let today = ReportWindow::today();
//! let summary = db.orders().get_daily_sales_summary(today.start, today.end).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::order::OrderRepository;
