//! # Database Error Types
//!
//! Error types for order store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)        ValidationError (bistro-core)       │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  DbError (this module) ← Conflict vs. unavailable vs. query failure    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller decides: retry with a new id, abort, or surface the failure    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! - A lookup that finds nothing returns `Ok(None)`
//! - An update or delete that matches nothing returns `Ok(0)`

use bistro_core::ValidationError;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Order store errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Unique or primary key constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting an order with an explicit id that already exists
    /// - Any future UNIQUE index violation
    ///
    /// The existing row is never overwritten.
    #[error("Conflict on {field}: '{value}' already exists")]
    Conflict { field: String, value: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created or opened
    /// - File permissions issue
    /// - Pool already closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use until the acquire timeout).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Environment configuration could not be parsed.
    #[error("Invalid configuration for {0}")]
    InvalidConfig(String),

    /// Order rejected before reaching the store.
    #[error("Invalid order: {0}")]
    Validation(#[from] ValidationError),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a Conflict error.
    pub fn conflict(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::Conflict {
            field: field.into(),
            value: value.into(),
        }
    }

    /// `true` for uniqueness / primary key violations.
    pub fn is_conflict(&self) -> bool {
        matches!(self, DbError::Conflict { .. })
    }

    /// `true` when the store could not be reached at all.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, DbError::ConnectionFailed(_) | DbError::PoolExhausted)
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (unique/PK) → DbError::Conflict
/// sqlx::Error::Database (other)     → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut         → DbError::PoolExhausted
/// sqlx::Error::PoolClosed / Io      → DbError::ConnectionFailed
/// Other                             → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite: "UNIQUE constraint failed: orders.id"
                if matches!(db_err.kind(), ErrorKind::UniqueViolation)
                    || msg.contains("UNIQUE constraint failed")
                {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::Conflict {
                        field,
                        value: "unknown".to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
