//! # Domain Types
//!
//! Core domain types for the order store.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │   OrderStatus   │   │   OrderType     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64, PK)   │   │  New       ┐    │   │  DineIn         │       │
//! │  │  order_no       │   │  Preparing ├ pending  Takeaway       │       │
//! │  │  customer_id?   │   │  Ready     ┘    │   │  Delivery       │       │
//! │  │  order_type     │   │  Completed      │   └─────────────────┘       │
//! │  │  status         │   │  Cancelled      │                             │
//! │  │  total_cents    │   └─────────────────┘   ┌─────────────────┐       │
//! │  │  created_at(ms) │                         │  ReportWindow   │       │
//! │  └─────────────────┘                         │  [start, end]   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every order has:
//! - `id`: store-assigned integer key, used for updates and deletes
//! - `order_no`: human-facing number printed on the ticket

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, ValidationError};
use crate::money::Money;

// =============================================================================
// Order Type
// =============================================================================

/// How the order is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Eaten at a table in the restaurant.
    DineIn,
    /// Collected at the counter.
    Takeaway,
    /// Sent out with a courier.
    Delivery,
}

impl OrderType {
    /// Every order type, in stable order.
    pub const ALL: [OrderType; 3] = [OrderType::DineIn, OrderType::Takeaway, OrderType::Delivery];

    /// The stored text for this type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderType::DineIn => "dine_in",
            OrderType::Takeaway => "takeaway",
            OrderType::Delivery => "delivery",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownOrderType(s.to_string()))
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Where an order is in its lifecycle.
///
/// ## Kitchen Flow
/// ```text
/// new ──► preparing ──► ready ──► completed
///  │          │           │
///  └──────────┴───────────┴────► cancelled
/// ```
///
/// The arrows are the usual flow only. Nothing here enforces them: any status
/// may overwrite any other through `OrderRepository::update_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Just taken, not yet started.
    #[default]
    New,
    /// The kitchen is working on it.
    Preparing,
    /// Waiting at the pass for pickup or serving.
    Ready,
    /// Handed over and paid.
    Completed,
    /// Abandoned; excluded from sales reports.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::New,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Statuses that still need kitchen or counter attention.
    pub const PENDING: [OrderStatus; 3] =
        [OrderStatus::New, OrderStatus::Preparing, OrderStatus::Ready];

    /// The stored text for this status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// `true` for new, preparing and ready.
    pub const fn is_pending(&self) -> bool {
        matches!(
            self,
            OrderStatus::New | OrderStatus::Preparing | OrderStatus::Ready
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

// =============================================================================
// Order
// =============================================================================

/// A single customer order.
///
/// ## Identity
/// `id` is `None` until the store assigns one on insert. Passing `Some(id)`
/// to insert requests that exact key and fails with a conflict if it is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned key.
    pub id: Option<i64>,

    /// Number printed on the ticket (e.g. "A-1042").
    pub order_no: String,

    /// Customer reference, owned by the customer module.
    pub customer_id: Option<i64>,

    /// Dine-in, takeaway or delivery.
    #[serde(rename = "type")]
    pub order_type: OrderType,

    /// Lifecycle status.
    pub status: OrderStatus,

    /// Order total in cents.
    pub total_cents: i64,

    /// Creation time, milliseconds since the Unix epoch. Never updated.
    pub created_at: i64,
}

impl Order {
    /// Creates a new, not-yet-persisted order with status `New`.
    pub fn new(
        order_no: impl Into<String>,
        order_type: OrderType,
        total_cents: i64,
        created_at: i64,
    ) -> Self {
        Order {
            id: None,
            order_no: order_no.into(),
            customer_id: None,
            order_type,
            status: OrderStatus::New,
            total_cents,
            created_at,
        }
    }

    /// Attaches a customer reference.
    pub fn with_customer(mut self, customer_id: i64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Sets the initial status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Creation time as a UTC timestamp.
    ///
    /// `None` only for millisecond values outside chrono's range.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

// =============================================================================
// Report Window
// =============================================================================

/// An inclusive `[start, end]` range of epoch milliseconds over `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportWindow {
    pub start: i64,
    pub end: i64,
}

impl ReportWindow {
    /// Creates a window, rejecting `start > end`.
    pub fn new(start: i64, end: i64) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedWindow { start, end });
        }
        Ok(ReportWindow { start, end })
    }

    /// The local-time calendar day `date`: midnight to one millisecond
    /// before the next midnight.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::ReportWindow;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
    /// let window = ReportWindow::local_day(day);
    /// assert!(window.end > window.start);
    /// ```
    pub fn local_day(date: NaiveDate) -> Self {
        let start = local_midnight_millis(date);
        let end = match date.succ_opt() {
            Some(next) => local_midnight_millis(next) - 1,
            None => i64::MAX,
        };
        ReportWindow { start, end }
    }

    /// The current local calendar day.
    pub fn today() -> Self {
        ReportWindow::local_day(Local::now().date_naive())
    }

    /// Whether `timestamp` falls inside the window (bounds included).
    #[inline]
    pub fn contains(&self, timestamp: i64) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

/// Epoch millis of local midnight on `date`.
///
/// Where DST skips midnight, the first instant of the day that does exist is
/// used; where it repeats, the earlier one.
fn local_midnight_millis(date: NaiveDate) -> i64 {
    let naive = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&naive).earliest() {
        Some(midnight) => midnight.timestamp_millis(),
        None => Local
            .from_local_datetime(&(naive + chrono::Duration::hours(1)))
            .earliest()
            .map(|t| t.timestamp_millis())
            .unwrap_or_else(|| naive.and_utc().timestamp_millis()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_status_round_trips_through_text() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!(matches!(
            "served".parse::<OrderStatus>(),
            Err(CoreError::UnknownStatus(_))
        ));
        // No case-folding
        assert!("NEW".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_pending_set() {
        assert!(OrderStatus::New.is_pending());
        assert!(OrderStatus::Preparing.is_pending());
        assert!(OrderStatus::Ready.is_pending());
        assert!(!OrderStatus::Completed.is_pending());
        assert!(!OrderStatus::Cancelled.is_pending());
        assert!(OrderStatus::PENDING.iter().all(OrderStatus::is_pending));
    }

    #[test]
    fn test_order_type_text() {
        assert_eq!(OrderType::DineIn.to_string(), "dine_in");
        assert_eq!("takeaway".parse::<OrderType>().unwrap(), OrderType::Takeaway);
        assert!(matches!(
            "drive_thru".parse::<OrderType>(),
            Err(CoreError::UnknownOrderType(_))
        ));
    }

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new("A-1", OrderType::Delivery, 2599, 1_000).with_customer(7);
        assert_eq!(order.id, None);
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.customer_id, Some(7));
        assert_eq!(order.total().cents(), 2599);
    }

    #[test]
    fn test_order_json_shape() {
        let order = Order::new("A-1", OrderType::DineIn, 1000, 1_750_000_000_000)
            .with_status(OrderStatus::Preparing);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderNo"], "A-1");
        assert_eq!(json["type"], "dine_in");
        assert_eq!(json["status"], "preparing");
        assert_eq!(json["createdAt"], 1_750_000_000_000i64);
        assert!(json["customerId"].is_null());
    }

    #[test]
    fn test_created_at_utc() {
        let order = Order::new("A-1", OrderType::DineIn, 0, 1_000);
        let ts = order.created_at_utc().unwrap();
        assert_eq!(ts.timestamp_millis(), 1_000);
    }

    #[test]
    fn test_report_window_rejects_inverted_bounds() {
        assert!(ReportWindow::new(10, 10).is_ok());
        assert!(matches!(
            ReportWindow::new(11, 10),
            Err(ValidationError::InvertedWindow { start: 11, end: 10 })
        ));
    }

    #[test]
    fn test_local_day_bounds() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let window = ReportWindow::local_day(date);

        let start = Local.timestamp_millis_opt(window.start).unwrap();
        assert_eq!(start.date_naive(), date);
        assert_eq!(start.hour(), 0);
        assert_eq!(start.minute(), 0);

        let end = Local.timestamp_millis_opt(window.end).unwrap();
        assert_eq!(end.date_naive(), date);
        assert!(!window.contains(window.end + 1));
        assert!(window.contains(window.start));
    }
}
