//! # Order Repository
//!
//! Database operations for orders.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. TAKE ORDER                                                         │
//! │     └── insert() → id assigned, status: new                            │
//! │                                                                         │
//! │  2. KITCHEN                                                            │
//! │     └── get_pending_orders() → oldest first                            │
//! │     └── update_status(id, preparing / ready)                           │
//! │                                                                         │
//! │  3. HAND OVER                                                          │
//! │     └── update_status(id, completed)                                   │
//! │     └── (or cancelled at any point)                                    │
//! │                                                                         │
//! │  4. ADJUST                                                             │
//! │     └── update_total() / update() → affected-row count                 │
//! │                                                                         │
//! │  Nothing here enforces the arrows: status writes are last-write-wins.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//! History-style reads return newest first. Work-queue reads (by status,
//! pending) return oldest first. Ties on `created_at` fall back to `id` in
//! the same direction.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use bistro_core::validation::{validate_order, validate_total_cents};
use bistro_core::{Order, OrderStatus, OrderType};

/// `SELECT <all order columns> FROM orders <tail>`
macro_rules! select_orders {
    ($tail:literal) => {
        concat!(
            "SELECT id, order_no, customer_id, order_type, status, total_cents, created_at ",
            "FROM orders ",
            $tail
        )
    };
}

/// Repository for order database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = OrderRepository::new(pool);
///
/// let id = repo.insert(&Order::new("A-1", OrderType::DineIn, 1250, now_ms)).await?;
/// let order = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pub(crate) pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Gets every order, newest first.
    pub async fn get_all(&self) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(select_orders!(
            "ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Gets an order by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Order))` - Order found
    /// * `Ok(None)` - Order not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(select_orders!("WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    /// Gets an order by its ticket number.
    ///
    /// Exact match: no trimming or case-folding. If several orders share a
    /// number, the oldest is returned.
    pub async fn get_by_order_no(&self, order_no: &str) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(select_orders!(
            "WHERE order_no = ?1 ORDER BY created_at ASC, id ASC LIMIT 1"
        ))
        .bind(order_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Gets orders whose status is any of `statuses`, oldest first.
    ///
    /// An empty slice matches nothing and returns an empty vector without
    /// touching the database.
    pub async fn get_by_status(&self, statuses: &[OrderStatus]) -> DbResult<Vec<Order>> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(select_orders!("WHERE status IN ("));
        let mut separated = builder.separated(", ");
        for status in statuses {
            separated.push_bind(*status);
        }
        separated.push_unseparated(") ORDER BY created_at ASC, id ASC");

        let orders = builder
            .build_query_as::<Order>()
            .fetch_all(&self.pool)
            .await?;

        debug!(statuses = ?statuses, count = orders.len(), "Fetched orders by status");
        Ok(orders)
    }

    /// Gets a customer's orders, newest first.
    pub async fn get_by_customer_id(&self, customer_id: i64) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(select_orders!(
            "WHERE customer_id = ?1 ORDER BY created_at DESC, id DESC"
        ))
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Gets orders of one type, newest first.
    pub async fn get_by_type(&self, order_type: OrderType) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(select_orders!(
            "WHERE order_type = ?1 ORDER BY created_at DESC, id DESC"
        ))
        .bind(order_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Gets orders created within `[start, end]` (epoch millis, both
    /// inclusive), newest first.
    pub async fn get_by_date_range(&self, start: i64, end: i64) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(select_orders!(
            "WHERE created_at BETWEEN ?1 AND ?2 ORDER BY created_at DESC, id DESC"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Counts orders created within `[start, end]`, every status included.
    pub async fn get_order_count(&self, start: i64, end: i64) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE created_at BETWEEN ?1 AND ?2")
                .bind(start)
                .bind(end)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Gets the orders of one business day, newest first.
    ///
    /// The caller decides where the day starts and ends (usually
    /// [`ReportWindow::today`](bistro_core::ReportWindow::today)).
    pub async fn get_todays_orders(&self, start_of_day: i64, end_of_day: i64) -> DbResult<Vec<Order>> {
        self.get_by_date_range(start_of_day, end_of_day).await
    }

    /// Gets orders still needing attention (new, preparing, ready), oldest
    /// first so the kitchen works them in arrival order.
    pub async fn get_pending_orders(&self) -> DbResult<Vec<Order>> {
        self.get_by_status(&OrderStatus::PENDING).await
    }

    /// Counts every stored order (diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Sets only the status of an order.
    ///
    /// ## Returns
    /// Rows affected: `1` on success, `0` if no order has this id.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> DbResult<u64> {
        debug!(id = %id, status = %status, "Updating order status");

        let result = sqlx::query("UPDATE orders SET status = ?2 WHERE id = ?1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Sets only the total of an order.
    ///
    /// ## Returns
    /// * `Ok(1)` / `Ok(0)` - Rows affected
    /// * `Err(DbError::Validation)` - Negative total
    pub async fn update_total(&self, id: i64, total_cents: i64) -> DbResult<u64> {
        validate_total_cents(total_cents)?;

        debug!(id = %id, total_cents = %total_cents, "Updating order total");

        let result = sqlx::query("UPDATE orders SET total_cents = ?2 WHERE id = ?1")
            .bind(id)
            .bind(total_cents)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Inserts a new order.
    ///
    /// ## Arguments
    /// * `order` - Order to insert. `id: None` lets the store assign one.
    ///
    /// ## Returns
    /// * `Ok(id)` - The id of the new row
    /// * `Err(DbError::Conflict)` - `order.id` is already taken; the existing
    ///   row is left untouched
    /// * `Err(DbError::Validation)` - Negative total
    pub async fn insert(&self, order: &Order) -> DbResult<i64> {
        validate_order(order)?;

        debug!(id = ?order.id, order_no = %order.order_no, "Inserting order");

        let result = sqlx::query(
            r#"
            INSERT INTO orders (
                id, order_no, customer_id, order_type,
                status, total_cents, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4,
                ?5, ?6, ?7
            )
            "#,
        )
        .bind(order.id)
        .bind(&order.order_no)
        .bind(order.customer_id)
        .bind(order.order_type)
        .bind(order.status)
        .bind(order.total_cents)
        .bind(order.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::Conflict { field, .. } => DbError::Conflict {
                field,
                value: order.id.map(|id| id.to_string()).unwrap_or_default(),
            },
            other => other,
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Replaces every mutable field of an existing order.
    ///
    /// `created_at` is never rewritten.
    ///
    /// ## Returns
    /// Rows affected: `0` if the order has no id or the id doesn't exist.
    pub async fn update(&self, order: &Order) -> DbResult<u64> {
        validate_order(order)?;

        let Some(id) = order.id else {
            return Ok(0);
        };

        debug!(id = %id, order_no = %order.order_no, "Updating order");

        let result = sqlx::query(
            r#"
            UPDATE orders SET
                order_no = ?2,
                customer_id = ?3,
                order_type = ?4,
                status = ?5,
                total_cents = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&order.order_no)
        .bind(order.customer_id)
        .bind(order.order_type)
        .bind(order.status)
        .bind(order.total_cents)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the row backing `order`.
    ///
    /// Returns `0` for an order that was never persisted.
    pub async fn delete(&self, order: &Order) -> DbResult<u64> {
        match order.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(0),
        }
    }

    /// Deletes an order by ID.
    pub async fn delete_by_id(&self, id: i64) -> DbResult<u64> {
        debug!(id = %id, "Deleting order");

        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes every order.
    ///
    /// ## Warning
    /// Irreversible. Meant for administrative resets and tests only.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM orders")
            .execute(&self.pool)
            .await?;

        warn!(deleted = result.rows_affected(), "Deleted all orders");
        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
