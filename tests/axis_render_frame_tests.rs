use linechart_rs::api::{ChartEngine, ChartEngineConfig};
use linechart_rs::core::{
    ChartInput, Point, Series, TimeInterval, ValueMode, format_value_tick, parse_time,
    select_time_interval, time_ticks, value_ticks,
};
use linechart_rs::render::{Color, NullRenderer, TextHAlign};

fn day(date: &str) -> f64 {
    parse_time(date).expect("valid date")
}

fn october_input(mode: ValueMode) -> ChartInput {
    let start = day("2024-10-01");
    let points = (0..31)
        .map(|i| Point::new(start + f64::from(i) * 86_400.0, 40.0 + f64::from(i % 7)))
        .collect();
    ChartInput::new(vec![Series::new("osc", Color::WHITE, points)], mode)
}

fn engine_with(input: ChartInput) -> ChartEngine<NullRenderer> {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    engine.set_input(input).expect("data");
    engine
}

#[test]
fn value_ticks_are_nice_and_roughly_six() {
    let ticks = value_ticks(0.0, 100.0, 6);
    assert_eq!(ticks.values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(ticks.step, 20.0);
    assert_eq!(ticks.labels(), vec!["0", "20", "40", "60", "80", "100"]);

    let ticks = value_ticks(0.95, 1.05, 6);
    assert!(ticks.values.len() >= 4 && ticks.values.len() <= 12);
    assert_eq!(ticks.step, 0.02);
}

#[test]
fn value_tick_labels_use_step_precision() {
    assert_eq!(format_value_tick(1.1, 0.02), "1.10");
    assert_eq!(format_value_tick(-0.0, 0.5), "0.0");
    assert_eq!(format_value_tick(250.0, 50.0), "250");
}

#[test]
fn time_interval_follows_visible_span() {
    let start = day("2024-10-01");
    assert_eq!(
        select_time_interval(start, start + 30.0 * 86_400.0, 6),
        TimeInterval::Weeks
    );
    assert_eq!(
        select_time_interval(start, start + 6.0 * 86_400.0, 6),
        TimeInterval::Days(1)
    );
    assert_eq!(
        select_time_interval(start, start + 365.0 * 86_400.0, 6),
        TimeInterval::Months(3)
    );
}

#[test]
fn weekly_ticks_land_on_sundays() {
    let ticks = time_ticks(day("2024-10-01"), day("2024-10-31"), 6);
    assert_eq!(
        ticks,
        vec![
            day("2024-10-06"),
            day("2024-10-13"),
            day("2024-10-20"),
            day("2024-10-27")
        ]
    );
}

#[test]
fn axis_ticks_use_day_month_year_labels() {
    let engine = engine_with(october_input(ValueMode::Linear));
    let ticks = engine.time_axis_ticks();
    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["06 Oct 2024", "13 Oct 2024", "20 Oct 2024", "27 Oct 2024"]
    );

    let plot = engine.plot_area();
    for tick in &ticks {
        assert!(tick.position_px >= plot.left && tick.position_px <= plot.right());
    }
}

#[test]
fn bounded_value_axis_spans_zero_to_hundred() {
    let engine = engine_with(october_input(ValueMode::bounded_percent()));
    let ticks = engine.value_axis_ticks();
    let plot = engine.plot_area();

    assert_eq!(ticks.first().map(|tick| tick.value), Some(0.0));
    assert_eq!(ticks.last().map(|tick| tick.value), Some(100.0));
    assert_eq!(ticks[0].position_px, plot.bottom());
    assert_eq!(ticks[ticks.len() - 1].position_px, plot.top);
}

#[test]
fn ticks_are_regenerated_after_zoom() {
    let mut engine = engine_with(october_input(ValueMode::Linear));
    let before = engine.time_axis_ticks();
    let value_before = engine.value_axis_ticks();

    let plot = engine.plot_area();
    engine
        .zoom_by(4.0, plot.left + plot.inner_width / 2.0)
        .expect("zoom");
    let after = engine.time_axis_ticks();

    assert_ne!(before, after);
    assert!(after.len() > before.len());
    let (visible_start, visible_end) = engine.scales().expect("scales").time.visible_range();
    for tick in &after {
        assert!(tick.value >= visible_start - 1e-6 && tick.value <= visible_end + 1e-6);
        assert!(tick.position_px >= plot.left - 0.5 && tick.position_px <= plot.right() + 0.5);
    }

    assert_eq!(engine.value_axis_ticks(), value_before);
}

#[test]
fn deep_zoom_keeps_time_labels_distinct() {
    let start = day("2024-10-01");
    let points = (0..30)
        .map(|i| Point::new(start + f64::from(i) * 86_400.0, 100.0 + f64::from(i % 5)))
        .collect();
    let mut engine = engine_with(ChartInput::new(
        vec![Series::new("daily", Color::WHITE, points)],
        ValueMode::Linear,
    ));

    let plot = engine.plot_area();
    engine
        .zoom_by(10.0, plot.left + plot.inner_width / 2.0)
        .expect("zoom");
    assert_eq!(engine.view_transform().scale_factor, 10.0);

    let labels: Vec<String> = engine
        .time_axis_ticks()
        .into_iter()
        .map(|tick| tick.label)
        .collect();
    assert!(!labels.is_empty());
    let mut distinct = labels.clone();
    distinct.dedup();
    assert_eq!(distinct, labels);
}

#[test]
fn sub_day_spans_still_tick_daily() {
    let start = day("2024-10-01");
    assert_eq!(
        select_time_interval(start, start + 6.0 * 3_600.0, 6),
        TimeInterval::Days(1)
    );
    assert_eq!(
        time_ticks(start, start + 2.5 * 86_400.0, 6),
        vec![start, start + 86_400.0, start + 2.0 * 86_400.0]
    );
}

#[test]
fn frame_contains_gridlines_ticks_and_labels() {
    let engine = engine_with(october_input(ValueMode::Linear));
    let time_ticks = engine.time_axis_ticks().len();
    let value_ticks = engine.value_axis_ticks().len();

    let frame = engine.build_render_frame().expect("frame");
    // grid + tick mark per tick, plus two domain lines.
    assert_eq!(frame.lines.len(), 2 * (time_ticks + value_ticks) + 2);

    let centered = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .count();
    let right = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .count();
    assert_eq!(centered, time_ticks);
    assert_eq!(right, value_ticks);
}
