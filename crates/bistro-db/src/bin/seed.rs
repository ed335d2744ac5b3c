//! # Seed Data Generator
//!
//! Populates the database with a day of test orders for development, then
//! prints today's reports.
//!
//! ## Usage
//! ```bash
//! # Generate 120 orders for today (default)
//! cargo run -p bistro-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p bistro-db --bin seed -- --count 500
//!
//! # Specify database path (otherwise BISTRO_DB_PATH, then ./bistro.db)
//! cargo run -p bistro-db --bin seed -- --db ./data/bistro.db
//! ```
//!
//! ## Generated Orders
//! - Spread over opening hours (11:00 - 22:59 local time), lunch and dinner heavy
//! - Mix of dine-in, takeaway and delivery
//! - Totals between $4.50 and $64.50
//! - Older orders mostly completed, recent ones still pending, a few cancelled

use bistro_core::report::fill_hours;
use bistro_core::{Order, OrderStatus, OrderType, ReportWindow};
use bistro_db::{Database, DbConfig};
use chrono::{Duration, Local, NaiveTime, TimeZone};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Relative weight of each opening hour (11:00 .. 22:00).
const HOUR_WEIGHTS: &[(u32, usize)] = &[
    (11, 2),
    (12, 6),
    (13, 5),
    (14, 2),
    (15, 1),
    (16, 1),
    (17, 2),
    (18, 5),
    (19, 7),
    (20, 5),
    (21, 3),
    (22, 1),
];

/// Order types in rough proportion for a neighbourhood bistro.
const TYPE_MIX: &[OrderType] = &[
    OrderType::DineIn,
    OrderType::DineIn,
    OrderType::DineIn,
    OrderType::Takeaway,
    OrderType::Takeaway,
    OrderType::Delivery,
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut count: usize = 120;
    let mut db_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(120);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bistro POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of orders to generate (default: 120)");
                println!("  -d, --db <PATH>    Database file path (default: $BISTRO_DB_PATH or ./bistro.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(arg = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    let config = match db_path {
        Some(path) => DbConfig::new(path),
        None => DbConfig::from_env()?,
    };

    println!("🌱 Bistro POS Seed Data Generator");
    println!("=================================");
    println!("Database: {}", config.database_path.display());
    println!("Orders:   {}", count);
    println!();

    let db = Database::new(config).await?;
    let orders = db.orders();

    let existing = orders.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} orders", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let slots: Vec<u32> = HOUR_WEIGHTS
        .iter()
        .flat_map(|(hour, weight)| std::iter::repeat(*hour).take(*weight))
        .collect();

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let hour = slots[(seed * 7) % slots.len()];
        let minute = ((seed * 13) % 60) as u32;
        let Some(created) = NaiveTime::from_hms_opt(hour, minute, 0)
            .map(|t| today.and_time(t))
            .and_then(|dt| Local.from_local_datetime(&dt).earliest())
        else {
            continue;
        };

        let order = generate_order(seed, count, created.timestamp_millis());
        if let Err(e) = orders.insert(&order).await {
            eprintln!("Failed to insert {}: {}", order.order_no, e);
            continue;
        }

        generated += 1;
        if generated % 50 == 0 {
            info!(generated, "Seeding orders");
        }
    }

    let elapsed = start.elapsed();
    println!("✓ Generated {} orders in {:?}", generated, elapsed);

    print_reports(&db).await?;

    println!();
    println!("✓ Seed complete!");
    Ok(())
}

/// Installs a fmt subscriber, overridable with `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bistro=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Generates a single order with realistic data.
fn generate_order(seed: usize, count: usize, created_at: i64) -> Order {
    let order_type = TYPE_MIX[seed % TYPE_MIX.len()];

    // $4.50 - $64.50 in 50 cent steps
    let total_cents = 450 + ((seed * 37) % 121) as i64 * 50;

    // The last fifth of the day's orders are still being worked on
    let status = if seed % 17 == 0 {
        OrderStatus::Cancelled
    } else if seed * 5 >= count * 4 {
        OrderStatus::PENDING[seed % OrderStatus::PENDING.len()]
    } else {
        OrderStatus::Completed
    };

    let mut order = Order::new(format!("B-{:04}", seed + 1), order_type, total_cents, created_at)
        .with_status(status);

    // Delivery orders always have a customer; a third of the rest are known
    if order_type == OrderType::Delivery || seed % 3 == 0 {
        order = order.with_customer(1 + (seed % 40) as i64);
    }

    order
}

/// Prints the four reports for today.
async fn print_reports(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    let window = ReportWindow::today();
    let orders = db.orders();

    let summary = orders.get_daily_sales_summary(window.start, window.end).await?;
    println!();
    println!("Today's sales");
    println!("  Orders:  {}", summary.total_orders);
    println!("  Revenue: {}", summary.total_revenue());
    println!("  Average: {}", summary.average_order_value());

    println!();
    println!("By status");
    for row in orders.get_order_status_counts(window.start, window.end).await? {
        println!("  {:<10} {:>4}", row.status, row.count);
    }

    println!();
    println!("By type");
    for row in orders.get_order_type_counts(window.start, window.end).await? {
        println!("  {:<10} {:>4}  {}", row.order_type, row.count, row.revenue());
    }

    println!();
    println!("By hour");
    let hourly = orders.get_hourly_sales(window.start, window.end).await?;
    for row in fill_hours(&hourly).iter().filter(|h| h.order_count > 0) {
        let bar = "#".repeat(row.order_count.min(60) as usize);
        println!("  {}:00 {:>4}  {:<10} {}", row.hour, row.order_count, row.revenue().to_string(), bar);
    }

    let pending = orders.get_pending_orders().await?;
    println!();
    println!("Pending in kitchen: {}", pending.len());
    if let Some(oldest) = pending.first() {
        let waiting = Local::now().timestamp_millis() - oldest.created_at;
        println!(
            "  Oldest: {} ({} min ago)",
            oldest.order_no,
            Duration::milliseconds(waiting).num_minutes()
        );
    }

    Ok(())
}
