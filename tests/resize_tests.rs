use linechart_rs::ChartError;
use linechart_rs::api::{ChartEngine, ChartEngineConfig, ChartEvent};
use linechart_rs::core::{ChartInput, Point, Series, ValueMode, Viewport};
use linechart_rs::interaction::HoverState;
use linechart_rs::render::{Color, NullRenderer};

fn input() -> ChartInput {
    let points = (0..30)
        .map(|i| Point::new(f64::from(i) * 86_400.0, 1.0 + f64::from(i % 5) * 0.01))
        .collect();
    ChartInput::new(vec![Series::new("fx", Color::WHITE, points)], ValueMode::Linear)
}

fn engine() -> ChartEngine<NullRenderer> {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    engine.set_input(input()).expect("data");
    engine
}

#[test]
fn resize_round_trip_reproduces_frame() {
    let mut engine = engine();
    let original = engine.build_render_frame().expect("frame");

    engine.resize(500).expect("shrink");
    assert_eq!(engine.plot_area().inner_width, 400.0);
    assert_ne!(engine.build_render_frame().expect("frame"), original);

    engine.resize(800).expect("grow");
    assert_eq!(engine.build_render_frame().expect("frame"), original);
}

#[test]
fn resize_keeps_domain_and_drops_zoom() {
    let mut engine = engine();
    let scales = engine.scales().expect("scales");
    let plot = engine.plot_area();
    engine.zoom_by(3.0, plot.left + 50.0).expect("zoom");
    let builds = engine.stats().scale_builds;

    engine
        .handle_event(ChartEvent::Resized { width: 640 })
        .expect("resize");

    let resized = engine.scales().expect("scales");
    assert!(engine.view_transform().is_identity());
    assert_eq!(resized.time.full_range(), scales.time.full_range());
    assert_eq!(resized.time.width(), 540.0);
    assert_eq!(resized.value, scales.value);
    assert_eq!(engine.stats().scale_builds, builds);
}

#[test]
fn too_small_width_is_rejected_and_state_kept() {
    let mut engine = engine();
    let before = engine.snapshot();

    let err = engine.resize(50).expect_err("width below margins");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 50,
            height: 400
        }
    ));
    assert!(engine.handle_event(ChartEvent::Resized { width: 0 }).is_err());

    assert_eq!(engine.snapshot(), before);
}

#[test]
fn height_change_rebuilds_value_scale() {
    let mut engine = engine();
    let builds = engine.stats().scale_builds;

    engine.set_viewport(Viewport::new(800, 600)).expect("viewport");
    let scales = engine.scales().expect("scales");
    assert_eq!(engine.plot_area().inner_height, 540.0);
    assert_eq!(scales.value.height(), 540.0);
    assert_eq!(engine.stats().scale_builds, builds + 1);
}

#[test]
fn resize_without_data_keeps_placeholder() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    engine.resize(300).expect("resize");
    assert!(engine.is_placeholder());

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.viewport, Viewport::new(300, 400));
    assert_eq!(frame.texts.len(), 1);
}

#[test]
fn resize_ends_hover_and_hides_crosshair() {
    let mut engine = engine();
    let plot = engine.plot_area();
    engine
        .pointer_enter(plot.left + 20.0, plot.top + 20.0)
        .expect("enter");
    assert_eq!(engine.hover_state(), HoverState::Hovering);

    engine.resize(700).expect("resize");
    assert_eq!(engine.hover_state(), HoverState::Idle);
    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.overlay_lines.is_empty());
}
