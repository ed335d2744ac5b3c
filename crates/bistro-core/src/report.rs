//! # Reporting Projections
//!
//! Row shapes returned by the order store's reporting queries.
//!
//! ## Which Orders Count?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Projection            Cancelled orders?   Grouped by    Sorted by      │
//! │  ────────────────────  ─────────────────   ──────────    ───────────    │
//! │  DailySalesSummary     excluded            (one row)     -              │
//! │  OrderStatusCount      INCLUDED            status        count desc     │
//! │  OrderTypeStats        excluded            order type    revenue desc   │
//! │  HourlySales           excluded            local hour    hour asc       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All money is in cents. Empty windows never produce null aggregates: sums and
//! averages default to zero.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{OrderStatus, OrderType};

// =============================================================================
// Daily Sales Summary
// =============================================================================

/// Sales totals over non-cancelled orders in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DailySalesSummary {
    pub total_orders: i64,
    pub total_revenue_cents: i64,
    pub average_order_value_cents: i64,
}

impl DailySalesSummary {
    /// Builds the summary from an order count and exact revenue sum.
    ///
    /// The average is derived here rather than with SQL `AVG` so it comes from
    /// the same integer sum and rounds exactly once.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::DailySalesSummary;
    ///
    /// let summary = DailySalesSummary::from_totals(2, 1500);
    /// assert_eq!(summary.average_order_value_cents, 750);
    ///
    /// assert_eq!(DailySalesSummary::from_totals(0, 0), DailySalesSummary::default());
    /// ```
    pub fn from_totals(total_orders: i64, total_revenue_cents: i64) -> Self {
        let average = Money::from_cents(total_revenue_cents).average_over(total_orders);
        DailySalesSummary {
            total_orders,
            total_revenue_cents,
            average_order_value_cents: average.cents(),
        }
    }

    #[inline]
    pub fn total_revenue(&self) -> Money {
        Money::from_cents(self.total_revenue_cents)
    }

    #[inline]
    pub fn average_order_value(&self) -> Money {
        Money::from_cents(self.average_order_value_cents)
    }
}

// =============================================================================
// Status Breakdown
// =============================================================================

/// Number of orders in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct OrderStatusCount {
    pub status: OrderStatus,
    pub count: i64,
}

// =============================================================================
// Type Breakdown
// =============================================================================

/// Order count and revenue for one order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTypeStats {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub count: i64,
    pub revenue_cents: i64,
}

impl OrderTypeStats {
    #[inline]
    pub fn revenue(&self) -> Money {
        Money::from_cents(self.revenue_cents)
    }
}

// =============================================================================
// Hourly Sales
// =============================================================================

/// Orders and revenue for one local hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HourlySales {
    /// Two-digit hour, "00" through "23".
    pub hour: String,
    pub order_count: i64,
    pub revenue_cents: i64,
}

impl HourlySales {
    /// An empty bucket for `hour` (0-23).
    pub fn empty(hour: u32) -> Self {
        HourlySales {
            hour: format!("{:02}", hour),
            order_count: 0,
            revenue_cents: 0,
        }
    }

    #[inline]
    pub fn revenue(&self) -> Money {
        Money::from_cents(self.revenue_cents)
    }
}

/// Expands a sparse hourly series into all 24 hours.
///
/// The store only returns hours that had orders. Charts want every hour, so
/// missing hours become zero buckets. Rows with an hour outside "00"-"23" are
/// dropped.
///
/// ## Example
/// ```rust
/// use bistro_core::report::{fill_hours, HourlySales};
///
/// let sparse = vec![HourlySales { hour: "09".into(), order_count: 1, revenue_cents: 1000 }];
/// let dense = fill_hours(&sparse);
/// assert_eq!(dense.len(), 24);
/// assert_eq!(dense[9].order_count, 1);
/// assert_eq!(dense[10].order_count, 0);
/// ```
pub fn fill_hours(sparse: &[HourlySales]) -> Vec<HourlySales> {
    let mut dense: Vec<HourlySales> = (0..24).map(HourlySales::empty).collect();
    for row in sparse {
        if let Some(slot) = row
            .hour
            .parse::<usize>()
            .ok()
            .and_then(|h| dense.get_mut(h))
        {
            slot.order_count += row.order_count;
            slot.revenue_cents += row.revenue_cents;
        }
    }
    dense
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_totals() {
        let summary = DailySalesSummary::from_totals(2, 1500);
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_revenue().to_string(), "$15.00");
        assert_eq!(summary.average_order_value().to_string(), "$7.50");
    }

    #[test]
    fn test_empty_summary_is_all_zero() {
        let summary = DailySalesSummary::from_totals(0, 0);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_revenue_cents, 0);
        assert_eq!(summary.average_order_value_cents, 0);
    }

    #[test]
    fn test_fill_hours_keeps_order_and_ignores_bad_rows() {
        let sparse = vec![
            HourlySales {
                hour: "14".to_string(),
                order_count: 2,
                revenue_cents: 900,
            },
            HourlySales {
                hour: "99".to_string(),
                order_count: 5,
                revenue_cents: 5,
            },
        ];
        let dense = fill_hours(&sparse);

        assert_eq!(dense.len(), 24);
        assert_eq!(dense[0].hour, "00");
        assert_eq!(dense[23].hour, "23");
        assert_eq!(dense[14].revenue().cents(), 900);
        assert_eq!(dense.iter().map(|h| h.order_count).sum::<i64>(), 2);
    }

    #[test]
    fn test_type_stats_json_uses_type_key() {
        let stats = OrderTypeStats {
            order_type: OrderType::Takeaway,
            count: 3,
            revenue_cents: 4500,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["type"], "takeaway");
        assert_eq!(json["revenueCents"], 4500);
    }
}
