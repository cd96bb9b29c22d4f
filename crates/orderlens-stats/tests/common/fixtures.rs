//! Test datasets

use orderlens_table::{ColumnDescriptor, ColumnType, Dataset};

/// Install a test subscriber so summarizer logs show up on failure
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A dozen food delivery orders
///
/// Ratings use "Not given" for unrated orders, as the raw data does.
#[allow(dead_code)]
pub fn sample_orders() -> Dataset {
    let rows: Vec<(&str, &str, f64, &str, &str, i64, i64)> = vec![
        ("Hangawi", "Korean", 30.75, "Weekend", "Not given", 25, 20),
        ("Blue Ribbon Sushi Izakaya", "Japanese", 12.08, "Weekend", "Not given", 25, 23),
        ("Cafe Habana", "Mexican", 12.23, "Weekday", "5", 23, 28),
        ("Blue Ribbon Fried Chicken", "American", 29.20, "Weekend", "3", 25, 15),
        ("Dirty Bird to Go", "American", 11.59, "Weekday", "4", 25, 24),
        ("Tamarind TriBeCa", "Indian", 25.22, "Weekday", "3", 20, 24),
        ("The Meatball Shop", "Italian", 16.44, "Weekend", "5", 21, 30),
        ("Barbounia", "Mediterranean", 5.00, "Weekend", "3", 33, 21),
        ("Anjappar Chettinad", "Indian", 16.44, "Weekend", "5", 21, 26),
        ("Bukhara Grill", "Indian", 20.00, "Weekend", "Not given", 25, 27),
        ("Big Wong Restaurant", "Chinese", 8.10, "Weekend", "Not given", 27, 28),
        ("Empanada Mama", "Mexican", 4.47, "Weekday", "4", 32, 30),
    ];

    Dataset::builder()
        .column("restaurant_name", rows.iter().map(|r| r.0).collect::<Vec<_>>())
        .column("cuisine_type", rows.iter().map(|r| r.1).collect::<Vec<_>>())
        .described_column(
            ColumnDescriptor::new("cost_of_the_order", ColumnType::Float64).with_unit("$"),
            rows.iter().map(|r| r.2).collect::<Vec<_>>(),
        )
        .column("day_of_the_week", rows.iter().map(|r| r.3).collect::<Vec<_>>())
        .column("rating", rows.iter().map(|r| r.4).collect::<Vec<_>>())
        .described_column(
            ColumnDescriptor::new("food_preparation_time", ColumnType::Int64).with_unit("min"),
            rows.iter().map(|r| r.5).collect::<Vec<_>>(),
        )
        .described_column(
            ColumnDescriptor::new("delivery_time", ColumnType::Int64).with_unit("min"),
            rows.iter().map(|r| r.6).collect::<Vec<_>>(),
        )
        .build()
        .expect("sample orders are well formed")
}

/// Orders for restaurants given as (name, order count, delivery time of every order)
#[allow(dead_code)]
pub fn restaurant_orders(restaurants: &[(&str, usize, f64)]) -> Dataset {
    let mut names = Vec::new();
    let mut times = Vec::new();
    for &(name, count, time) in restaurants {
        for _ in 0..count {
            names.push(name);
            times.push(time);
        }
    }
    Dataset::builder()
        .column("restaurant_name", names)
        .column("delivery_time", times)
        .build()
        .expect("restaurant orders are well formed")
}
