//! # Order Reports
//!
//! Sales aggregates over a reporting window, as more methods on
//! [`OrderRepository`].
//!
//! ## Query Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHERE created_at BETWEEN :start AND :end      (inclusive, epoch ms)   │
//! │    AND status != 'cancelled'                   (all but status counts) │
//! │                                                                         │
//! │  daily   → COUNT(*), COALESCE(SUM(total_cents), 0)                     │
//! │  status  → GROUP BY status       ORDER BY count DESC, status ASC       │
//! │  type    → GROUP BY order_type   ORDER BY revenue DESC, type ASC       │
//! │  hourly  → GROUP BY strftime('%H', ..., 'localtime')  ORDER BY hour    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! SUM over zero rows is NULL in SQLite; every sum is wrapped in `COALESCE` so
//! an empty window yields zeros, never a missing value.

use tracing::debug;

use super::order::OrderRepository;
use crate::error::DbResult;
use bistro_core::{DailySalesSummary, HourlySales, OrderStatus, OrderStatusCount, OrderTypeStats};

impl OrderRepository {
    /// Order count, revenue and average order value over non-cancelled
    /// orders in `[start, end]`.
    ///
    /// ## Returns
    /// Always one summary. An empty window gives `{0, 0, 0}`.
    pub async fn get_daily_sales_summary(&self, start: i64, end: i64) -> DbResult<DailySalesSummary> {
        let (total_orders, total_revenue_cents): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COALESCE(SUM(total_cents), 0)
            FROM orders
            WHERE created_at BETWEEN ?1 AND ?2
              AND status != ?3
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(OrderStatus::Cancelled)
        .fetch_one(&self.pool)
        .await?;

        let summary = DailySalesSummary::from_totals(total_orders, total_revenue_cents);
        debug!(
            start,
            end,
            total_orders,
            total_revenue_cents,
            "Computed daily sales summary"
        );
        Ok(summary)
    }

    /// Number of orders per status in `[start, end]`, cancelled included.
    ///
    /// Only statuses that occur are returned. Sorted by count, busiest first;
    /// equal counts are ordered by status name.
    pub async fn get_order_status_counts(&self, start: i64, end: i64) -> DbResult<Vec<OrderStatusCount>> {
        let rows = sqlx::query_as::<_, OrderStatusCount>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM orders
            WHERE created_at BETWEEN ?1 AND ?2
            GROUP BY status
            ORDER BY count DESC, status ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        debug!(start, end, groups = rows.len(), "Computed order status counts");
        Ok(rows)
    }

    /// Order count and revenue per order type over non-cancelled orders in
    /// `[start, end]`, highest revenue first (ties by type name).
    pub async fn get_order_type_counts(&self, start: i64, end: i64) -> DbResult<Vec<OrderTypeStats>> {
        let rows = sqlx::query_as::<_, OrderTypeStats>(
            r#"
            SELECT
                order_type,
                COUNT(*) AS count,
                COALESCE(SUM(total_cents), 0) AS revenue_cents
            FROM orders
            WHERE created_at BETWEEN ?1 AND ?2
              AND status != ?3
            GROUP BY order_type
            ORDER BY revenue_cents DESC, order_type ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(OrderStatus::Cancelled)
        .fetch_all(&self.pool)
        .await?;

        debug!(start, end, groups = rows.len(), "Computed order type stats");
        Ok(rows)
    }

    /// Order count and revenue per local hour of day ("00"-"23") over
    /// non-cancelled orders in `[start, end]`, in hour order.
    ///
    /// Hours without orders are omitted; use
    /// [`fill_hours`](bistro_core::report::fill_hours) for a 24-bucket series.
    /// "Local" is the time zone of the process running SQLite.
    ///
    /// Timestamps are converted as fractional seconds, so pre-1970 values
    /// land in the right hour. Orders outside SQLite's date range (years
    /// 0000-9999) have no hour and are left out of this report.
    pub async fn get_hourly_sales(&self, start: i64, end: i64) -> DbResult<Vec<HourlySales>> {
        let rows = sqlx::query_as::<_, HourlySales>(
            r#"
            SELECT
                strftime('%H', created_at / 1000.0, 'unixepoch', 'localtime') AS hour,
                COUNT(*) AS order_count,
                COALESCE(SUM(total_cents), 0) AS revenue_cents
            FROM orders
            WHERE created_at BETWEEN ?1 AND ?2
              AND status != ?3
            GROUP BY hour
            HAVING hour IS NOT NULL
            ORDER BY hour ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(OrderStatus::Cancelled)
        .fetch_all(&self.pool)
        .await?;

        debug!(start, end, hours = rows.len(), "Computed hourly sales");
        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::super::order::tests::repo;
    use bistro_core::report::fill_hours;
    use bistro_core::{Order, OrderType, ReportWindow};
    use chrono::{Local, NaiveDate, TimeZone, Timelike};

    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    /// Epoch millis for a local wall-clock time on the test day.
    fn at(hour: u32, minute: u32) -> i64 {
        Local
            .from_local_datetime(&day().and_hms_opt(hour, minute, 0).unwrap())
            .single()
            .unwrap()
            .timestamp_millis()
    }

    /// A(10.00, new, 09h), B(20.00, cancelled, 09h), C(5.00, completed, 14h)
    async fn seed_scenario(repo: &OrderRepository) {
        let orders = [
            Order::new("A", OrderType::DineIn, 1000, at(9, 5)),
            Order::new("B", OrderType::Takeaway, 2000, at(9, 40)).with_status(OrderStatus::Cancelled),
            Order::new("C", OrderType::Delivery, 500, at(14, 10)).with_status(OrderStatus::Completed),
        ];
        for order in &orders {
            repo.insert(order).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_daily_summary_excludes_cancelled() {
        let repo = repo().await;
        seed_scenario(&repo).await;
        let window = ReportWindow::local_day(day());

        let summary = repo
            .get_daily_sales_summary(window.start, window.end)
            .await
            .unwrap();

        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_revenue_cents, 1500);
        assert_eq!(summary.average_order_value_cents, 750);
    }

    #[tokio::test]
    async fn test_daily_summary_empty_window_is_zero() {
        let repo = repo().await;
        seed_scenario(&repo).await;
        let next_day = ReportWindow::local_day(day().succ_opt().unwrap());

        let summary = repo
            .get_daily_sales_summary(next_day.start, next_day.end)
            .await
            .unwrap();

        assert_eq!(summary, DailySalesSummary::from_totals(0, 0));
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_revenue_cents, 0);
        assert_eq!(summary.average_order_value_cents, 0);
    }

    #[tokio::test]
    async fn test_hourly_sales_scenario() {
        let repo = repo().await;
        seed_scenario(&repo).await;
        let window = ReportWindow::local_day(day());

        let hourly = repo.get_hourly_sales(window.start, window.end).await.unwrap();

        assert_eq!(
            hourly,
            vec![
                HourlySales {
                    hour: "09".to_string(),
                    order_count: 1,
                    revenue_cents: 1000,
                },
                HourlySales {
                    hour: "14".to_string(),
                    order_count: 1,
                    revenue_cents: 500,
                },
            ]
        );

        let dense = fill_hours(&hourly);
        assert_eq!(dense.len(), 24);
        assert_eq!(dense[9].revenue_cents, 1000);
        assert_eq!(dense[12].order_count, 0);
    }

    #[tokio::test]
    async fn test_status_counts_include_cancelled() {
        let repo = repo().await;
        seed_scenario(&repo).await;
        let window = ReportWindow::local_day(day());

        let counts = repo
            .get_order_status_counts(window.start, window.end)
            .await
            .unwrap();

        // All tied at 1, so ordered by status name
        assert_eq!(
            counts,
            vec![
                OrderStatusCount { status: OrderStatus::Cancelled, count: 1 },
                OrderStatusCount { status: OrderStatus::Completed, count: 1 },
                OrderStatusCount { status: OrderStatus::New, count: 1 },
            ]
        );
    }

    #[tokio::test]
    async fn test_status_counts_busiest_first() {
        let repo = repo().await;
        seed_scenario(&repo).await;
        repo.insert(&Order::new("D", OrderType::DineIn, 300, at(11, 0)))
            .await
            .unwrap();
        let window = ReportWindow::local_day(day());

        let counts = repo
            .get_order_status_counts(window.start, window.end)
            .await
            .unwrap();

        assert_eq!(counts[0], OrderStatusCount { status: OrderStatus::New, count: 2 });
        assert_eq!(counts.len(), 3);
        assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[tokio::test]
    async fn test_type_counts_exclude_cancelled_and_sort_by_revenue() {
        let repo = repo().await;
        seed_scenario(&repo).await;
        repo.insert(&Order::new("E", OrderType::Delivery, 900, at(18, 30)))
            .await
            .unwrap();
        let window = ReportWindow::local_day(day());

        let stats = repo
            .get_order_type_counts(window.start, window.end)
            .await
            .unwrap();

        assert_eq!(
            stats,
            vec![
                OrderTypeStats {
                    order_type: OrderType::Delivery,
                    count: 2,
                    revenue_cents: 1400,
                },
                OrderTypeStats {
                    order_type: OrderType::DineIn,
                    count: 1,
                    revenue_cents: 1000,
                },
            ]
        );
        // The cancelled takeaway order leaves no takeaway row at all
        assert!(stats.iter().all(|s| s.order_type != OrderType::Takeaway));
    }

    #[tokio::test]
    async fn test_reports_respect_window_bounds() {
        let repo = repo().await;
        seed_scenario(&repo).await;
        let window = ReportWindow::local_day(day());

        // Exactly on the last millisecond of the day counts; one past does not
        repo.insert(&Order::new("edge", OrderType::DineIn, 100, window.end))
            .await
            .unwrap();
        repo.insert(&Order::new("next", OrderType::DineIn, 100, window.end + 1))
            .await
            .unwrap();

        let summary = repo
            .get_daily_sales_summary(window.start, window.end)
            .await
            .unwrap();
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.total_revenue_cents, 1600);

        let hourly = repo.get_hourly_sales(window.start, window.end).await.unwrap();
        assert_eq!(hourly.last().map(|h| h.hour.as_str()), Some("23"));
        assert_eq!(repo.get_order_count(window.start, window.end).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_reports_on_empty_store() {
        let repo = repo().await;
        let window = ReportWindow::local_day(day());

        assert!(repo
            .get_order_status_counts(window.start, window.end)
            .await
            .unwrap()
            .is_empty());
        assert!(repo
            .get_order_type_counts(window.start, window.end)
            .await
            .unwrap()
            .is_empty());
        assert!(repo
            .get_hourly_sales(window.start, window.end)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_type_counts_tie_break_by_name() {
        let repo = repo().await;

        // Equal revenue: type name decides
        repo.insert(&Order::new("T", OrderType::Takeaway, 700, at(12, 0)))
            .await
            .unwrap();
        repo.insert(&Order::new("D", OrderType::Delivery, 700, at(12, 30)))
            .await
            .unwrap();
        repo.insert(&Order::new("I", OrderType::DineIn, 700, at(13, 0)))
            .await
            .unwrap();
        let window = ReportWindow::local_day(day());
        let types: Vec<OrderType> = repo
            .get_order_type_counts(window.start, window.end)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.order_type)
            .collect();
        assert_eq!(types, vec![OrderType::Delivery, OrderType::DineIn, OrderType::Takeaway]);
    }

    #[tokio::test]
    async fn test_hourly_sales_edge_timestamps() {
        let repo = repo().await;

        // One millisecond before the epoch, and a date past year 9999
        repo.insert(&Order::new("pre", OrderType::DineIn, 100, -1))
            .await
            .unwrap();
        repo.insert(&Order::new("far", OrderType::DineIn, 100, 300_000_000_000_000))
            .await
            .unwrap();

        let expected_hour = format!("{:02}", Local.timestamp_millis_opt(-1).unwrap().hour());
        let hourly = repo.get_hourly_sales(i64::MIN, i64::MAX).await.unwrap();

        assert_eq!(
            hourly,
            vec![HourlySales {
                hour: expected_hour,
                order_count: 1,
                revenue_cents: 100,
            }]
        );
    }
}
