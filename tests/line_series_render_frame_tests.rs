use linechart_rs::api::{ChartEngine, ChartEngineConfig, parse_chart_input};
use linechart_rs::core::{
    ChartInput, ChartScales, Point, ProjectedRun, Series, TimeScale, ValueMode, ValueScale,
    ValueScaleTuning, defined_runs, monotone_segments, parse_time, project_series_runs,
};
use linechart_rs::render::{Color, NullRenderer, PathCommand};

fn day(date: &str) -> f64 {
    parse_time(date).expect("valid date")
}

fn engine_with(input: ChartInput) -> ChartEngine<NullRenderer> {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    engine.set_input(input).expect("data");
    engine
}

#[test]
fn null_in_the_middle_yields_two_disconnected_runs() {
    let input = parse_chart_input(
        r##"[{"name": "spread", "color": "#4e79a7", "data": [
            {"time": "2024-10-11", "value": 93.24},
            {"time": "2024-10-12", "value": null},
            {"time": "2024-10-13", "value": 98.84}
        ]}]"##,
    )
    .expect("payload");
    let series = &input.series[0];
    assert_eq!(series.points().len(), 3);
    assert_eq!(defined_runs(series.points()).len(), 2);

    let engine = engine_with(input.clone());
    let scales = engine.scales().expect("scales");
    let runs = project_series_runs(series.points(), scales.time, scales.value);
    assert_eq!(runs.len(), 2);
    assert!(runs.iter().all(|run| matches!(run, ProjectedRun::Dot { .. })));

    let frame = engine.build_render_frame().expect("frame");
    assert!(
        frame.paths.is_empty(),
        "no path may connect 93.24 to 98.84 across the gap"
    );
    assert_eq!(frame.circles.len(), 2);
}

#[test]
fn gap_splits_longer_series_into_two_paths() {
    let points = vec![
        Point::new(day("2024-10-10"), 1.0),
        Point::new(day("2024-10-11"), 2.0),
        Point::gap(day("2024-10-12")),
        Point::new(day("2024-10-13"), 3.0),
        Point::new(day("2024-10-14"), 2.5),
        Point::new(day("2024-10-15"), 2.8),
    ];
    let engine = engine_with(ChartInput::new(
        vec![Series::new("s", Color::WHITE, points)],
        ValueMode::Linear,
    ));
    let scales = engine.scales().expect("scales");
    let gap_x = engine.plot_area().left + scales.time.time_to_pixel(day("2024-10-12"));

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.paths.len(), 2);
    assert_eq!(frame.paths[0].commands.len(), 2);
    assert_eq!(frame.paths[1].commands.len(), 3);

    for path in &frame.paths {
        let xs: Vec<f64> = path
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo { x, .. }
                | PathCommand::LineTo { x, .. }
                | PathCommand::CubicTo { x, .. } => x,
            })
            .collect();
        let first = xs.first().copied().expect("start");
        let last = xs.last().copied().expect("end");
        assert!(
            !(first < gap_x && gap_x < last),
            "path spans the gap at x={gap_x}"
        );
    }
}

#[test]
fn smoothing_never_overshoots_between_samples() {
    let xy = [
        (0.0, 10.0),
        (10.0, 90.0),
        (20.0, 85.0),
        (30.0, 5.0),
        (40.0, 5.0),
        (55.0, 60.0),
        (60.0, 20.0),
    ];
    let segments = monotone_segments(&xy);
    assert_eq!(segments.len(), xy.len() - 1);

    for segment in segments {
        let low = segment.y0.min(segment.y1);
        let high = segment.y0.max(segment.y1);
        for control in [segment.c1y, segment.c2y] {
            assert!(
                control >= low - 1e-9 && control <= high + 1e-9,
                "control {control} outside [{low}, {high}]"
            );
        }
        assert!(segment.c1x >= segment.x0 && segment.c2x <= segment.x1);
    }
}

#[test]
fn flat_neighbour_keeps_segment_flat() {
    let segments = monotone_segments(&[(0.0, 0.0), (1.0, 5.0), (2.0, 5.0), (3.0, 9.0)]);
    let middle = segments[1];
    assert_eq!(middle.c1y, 5.0);
    assert_eq!(middle.c2y, 5.0);
}

#[test]
fn series_are_drawn_in_input_order() {
    let make = |name: &str, offset: f64| {
        Series::new(
            name,
            Color::WHITE,
            (0..5)
                .map(|i| Point::new(f64::from(i) * 86_400.0, offset + f64::from(i)))
                .collect(),
        )
    };
    let engine = engine_with(ChartInput::new(
        vec![make("first", 0.0), make("second", 10.0), make("third", 20.0)],
        ValueMode::Linear,
    ));

    let frame = engine.build_render_frame().expect("frame");
    let order: Vec<Option<usize>> = frame.paths.iter().map(|path| path.series_index).collect();
    assert_eq!(order, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn series_paths_are_clipped_to_the_plot() {
    let engine = engine_with(ChartInput::new(
        vec![Series::new(
            "s",
            Color::WHITE,
            vec![Point::new(0.0, 1.0), Point::new(86_400.0, 2.0)],
        )],
        ValueMode::Linear,
    ));
    let frame = engine.build_render_frame().expect("frame");
    let clip = frame.clip_rect.expect("clip rect");
    assert_eq!(
        (clip.x, clip.y, clip.width, clip.height),
        (60.0, 20.0, 700.0, 340.0)
    );
}

#[test]
fn projection_matches_scales() {
    let points = vec![Point::new(0.0, 0.0), Point::new(50.0, 50.0), Point::new(100.0, 100.0)];
    let time = TimeScale::new(0.0, 100.0, 200.0).expect("time");
    let value = ValueScale::new(0.0, 100.0, 100.0).expect("value");

    let runs = project_series_runs(&points, time, value);
    let [ProjectedRun::Curve { segments }] = runs.as_slice() else {
        panic!("expected a single curve");
    };
    assert_eq!((segments[0].x0, segments[0].y0), (0.0, 100.0));
    assert_eq!((segments[1].x1, segments[1].y1), (200.0, 0.0));
}

#[test]
fn scales_build_from_union_of_series() {
    let input = ChartInput::new(
        vec![
            Series::new("a", Color::WHITE, vec![Point::new(10.0, 1.0)]),
            Series::new("b", Color::WHITE, vec![Point::new(30.0, 2.0)]),
        ],
        ValueMode::Linear,
    );
    let engine = engine_with(input.clone());
    let plot = engine.plot_area();
    let scales =
        ChartScales::build(&input, plot, ValueScaleTuning::default()).expect("scales");
    assert_eq!(engine.scales(), Some(scales));
    assert_eq!(scales.time.full_range(), (10.0, 30.0));
}
