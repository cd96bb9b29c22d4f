//! Ranked extremes integration tests

mod common;

use common::fixtures::{init_tracing, restaurant_orders};
use orderlens_stats::{top_and_bottom, ExtremesConfig, RankedExtremesRequest, StatsConfig};
use orderlens_table::Value;

fn entity_names(rows: &[orderlens_stats::EntityAverage]) -> Vec<String> {
    rows.iter().map(|r| r.entity.to_string()).collect()
}

#[test]
fn test_low_count_entity_never_appears() {
    init_tracing();
    // The three-order restaurant has by far the best and worst possible values
    for extreme in [0.0, 1000.0] {
        let data = restaurant_orders(&[
            ("Shake Shack", 15, 28.0),
            ("The Meatball Shop", 12, 24.0),
            ("Tiny Place", 3, extreme),
            ("Blue Ribbon Sushi", 20, 21.5),
        ]);
        let result = top_and_bottom(&data, "restaurant_name", "delivery_time", 10).unwrap();

        assert_eq!(result.qualifying, 3);
        assert!(result
            .rows
            .iter()
            .all(|r| r.entity != Value::from("Tiny Place")));
    }
}

#[test]
fn test_seven_entities_overlap_by_three() {
    let data = restaurant_orders(&[
        ("a", 11, 7.0),
        ("b", 11, 6.0),
        ("c", 11, 5.0),
        ("d", 11, 4.0),
        ("e", 11, 3.0),
        ("f", 11, 2.0),
        ("g", 11, 1.0),
    ]);
    let result = top_and_bottom(&data, "restaurant_name", "delivery_time", 10).unwrap();

    assert_eq!(result.len(), 7);
    assert_eq!(result.lowest, 0..5);
    assert_eq!(result.highest, 2..7);
    assert_eq!(result.overlap(), 3);
    assert_eq!(result.boundary(), 5);
    assert_eq!(entity_names(result.lowest_rows()), vec!["g", "f", "e", "d", "c"]);
    assert_eq!(entity_names(result.highest_rows()), vec!["e", "d", "c", "b", "a"]);
}

#[test]
fn test_three_entities_share_both_halves() {
    let data = restaurant_orders(&[("a", 11, 3.0), ("b", 11, 2.0), ("c", 11, 1.0)]);
    let result = top_and_bottom(&data, "restaurant_name", "delivery_time", 10).unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result.boundary(), 3);
    assert_eq!(result.overlap(), 3);
    assert_eq!(result.lowest_rows(), result.highest_rows());
}

#[test]
fn test_configured_half_and_threshold() {
    let config = StatsConfig {
        extremes: ExtremesConfig {
            threshold: 1,
            half: 2,
        },
        ..Default::default()
    };
    let data = restaurant_orders(&[
        ("a", 2, 10.0),
        ("b", 2, 20.0),
        ("c", 1, 0.0),
        ("d", 2, 30.0),
        ("e", 2, 40.0),
        ("f", 2, 50.0),
    ]);

    let result = RankedExtremesRequest::new("restaurant_name", "delivery_time")
        .with_config(&config.extremes)
        .run(&data)
        .unwrap();

    assert_eq!(entity_names(&result.rows), vec!["a", "b", "e", "f"]);
    assert_eq!(result.boundary(), 2);
    assert_eq!(result.overlap(), 0);
}

#[test]
fn test_boundary_marker_in_rendered_table() {
    let data = restaurant_orders(&[
        ("a", 11, 1.0),
        ("b", 11, 2.0),
        ("c", 11, 3.0),
        ("d", 11, 4.0),
        ("e", 11, 5.0),
        ("f", 11, 6.0),
    ]);
    let result = top_and_bottom(&data, "restaurant_name", "delivery_time", 10).unwrap();
    let table = result.to_table();

    assert_eq!(table.columns(), ["restaurant_name", "average_delivery_time"]);
    assert_eq!(table.num_rows(), 6);
    // Separator goes after the last row of the lowest half
    assert_eq!(
        table.get(result.boundary() - 1, "restaurant_name"),
        Some(&Value::from("e"))
    );
}
