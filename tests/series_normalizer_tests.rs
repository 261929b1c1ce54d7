use linechart_rs::core::{
    ChartInput, Point, RawPoint, Series, ValueMode, format_day_label, normalize_columns,
    normalize_points, palette_color, parse_time,
};
use linechart_rs::render::Color;
use serde_json::json;

fn raw(time: &str, value: serde_json::Value) -> RawPoint {
    RawPoint {
        time: time.to_owned(),
        value,
    }
}

fn day(date: &str) -> f64 {
    parse_time(date).expect("valid date")
}

#[test]
fn parses_day_dates_as_utc_midnight() {
    assert_eq!(day("2024-10-14"), 1_728_864_000.0);
    assert_eq!(format_day_label(1_728_864_000.0), "14 Oct 2024");
    assert!(parse_time("14/10/2024").is_err());
}

#[test]
fn null_value_is_kept_as_a_gap() {
    let points = normalize_points(&[
        raw("2024-10-11", json!(93.24)),
        raw("2024-10-12", json!(null)),
        raw("2024-10-13", json!(98.84)),
    ]);

    assert_eq!(
        points,
        vec![
            Point::new(day("2024-10-11"), 93.24),
            Point::gap(day("2024-10-12")),
            Point::new(day("2024-10-13"), 98.84),
        ]
    );
    assert!(!points[1].is_plottable());
}

#[test]
fn malformed_entries_are_dropped_per_point() {
    let points = normalize_points(&[
        raw("2024-10-11", json!(1.0)),
        raw("not-a-date", json!(2.0)),
        raw("2024-10-13", json!("3.0")),
        raw("2024-10-14", json!({"nested": 4.0})),
        raw("2024-10-15", json!(5.0)),
    ]);

    assert_eq!(
        points,
        vec![
            Point::new(day("2024-10-11"), 1.0),
            Point::new(day("2024-10-15"), 5.0),
        ]
    );
}

#[test]
fn series_points_are_sorted_and_unique_per_time() {
    let series = Series::from_raw(
        "eur",
        Some("#4e79a7"),
        0,
        &[
            raw("2024-10-13", json!(3.0)),
            raw("2024-10-11", json!(1.0)),
            raw("2024-10-13", json!(3.5)),
            raw("2024-10-12", json!(2.0)),
        ],
    );

    let times: Vec<f64> = series.points().iter().map(|point| point.time).collect();
    assert_eq!(
        times,
        vec![day("2024-10-11"), day("2024-10-12"), day("2024-10-13")]
    );
    assert_eq!(series.points()[2].value, Some(3.5));
    assert_eq!(series.plottable_len(), 3);
    assert_eq!(
        series.time_extent(),
        Some((day("2024-10-11"), day("2024-10-13")))
    );
}

#[test]
fn color_token_falls_back_to_palette() {
    let explicit = Series::from_raw("a", Some("#123456"), 0, &[]);
    assert_eq!(
        explicit.color(),
        Color::rgb(
            f64::from(0x12u8) / 255.0,
            f64::from(0x34u8) / 255.0,
            f64::from(0x56u8) / 255.0
        )
    );

    let missing = Series::from_raw("b", None, 1, &[]);
    assert_eq!(missing.color(), palette_color(1));

    let invalid = Series::from_raw("c", Some("blue-ish"), 2, &[]);
    assert_eq!(invalid.color(), palette_color(2));

    assert_eq!(palette_color(10), palette_color(0));
}

#[test]
fn column_helper_drops_missing_values() {
    let dates = ["2024-10-11", "2024-10-12", "2024-10-13", "2024-10-14"];
    let points = normalize_columns(&dates, &[Some(1.0), None, Some(f64::NAN), Some(4.0)]);

    assert_eq!(
        points,
        vec![
            Point::new(day("2024-10-11"), 1.0),
            Point::new(day("2024-10-14"), 4.0),
        ]
    );
}

#[test]
fn column_helper_tolerates_short_value_columns() {
    let dates = ["2024-10-11", "2024-10-12", "2024-10-13"];
    let points = normalize_columns(&dates, &[Some(1.0)]);
    assert_eq!(points, vec![Point::new(day("2024-10-11"), 1.0)]);
}

#[test]
fn columns_build_one_series_per_value_column() {
    let dates = ["2024-10-11", "2024-10-12"];
    let upper = [Some(1.2), Some(1.3)];
    let lower = [Some(0.8), None];
    let input = ChartInput::from_columns(
        &dates,
        &[
            ("upper", upper.as_slice(), Some("#59a14f")),
            ("lower", lower.as_slice(), None),
        ],
        ValueMode::Linear,
    );

    assert_eq!(input.series.len(), 2);
    assert_eq!(input.series[0].name(), "upper");
    assert_eq!(input.series[0].points().len(), 2);
    assert_eq!(input.series[1].name(), "lower");
    assert_eq!(input.series[1].points().len(), 1);
    assert_eq!(input.series[1].color(), palette_color(1));
    assert!(input.has_plottable_points());
}

#[test]
fn rfc3339_timestamps_are_accepted() {
    assert_eq!(
        parse_time("2024-10-14T12:00:00Z").expect("timestamp"),
        1_728_907_200.0
    );
}
