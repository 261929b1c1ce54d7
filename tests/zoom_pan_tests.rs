use approx::assert_abs_diff_eq;
use linechart_rs::api::{ChartEngine, ChartEngineConfig, ChartEvent};
use linechart_rs::core::{ChartInput, Point, Series, ValueMode, ViewTransform, ZoomLimits};
use linechart_rs::render::{Color, NullRenderer};

fn input() -> ChartInput {
    let points = (0..60)
        .map(|i| Point::new(f64::from(i) * 86_400.0, 100.0 + (f64::from(i) * 0.3).sin() * 5.0))
        .collect();
    ChartInput::new(vec![Series::new("px", Color::WHITE, points)], ValueMode::Linear)
}

fn engine() -> ChartEngine<NullRenderer> {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    engine.set_input(input()).expect("data");
    engine
}

#[test]
fn zoom_keeps_anchor_fixed() {
    let mut engine = engine();
    let plot = engine.plot_area();
    let anchor = plot.left + 210.0;
    let before = engine.scales().expect("scales").time.pixel_to_time(210.0);

    engine.zoom_by(2.5, anchor).expect("zoom");
    let after = engine.scales().expect("scales").time.pixel_to_time(210.0);
    assert_abs_diff_eq!(before, after, epsilon = 1e-6);
    assert_eq!(engine.view_transform().scale_factor, 2.5);
}

#[test]
fn zoom_factor_is_clamped_to_limits() {
    let mut engine = engine();
    let plot = engine.plot_area();
    let center = plot.left + plot.inner_width / 2.0;

    engine.zoom_by(100.0, center).expect("zoom in");
    assert_eq!(engine.view_transform().scale_factor, 10.0);

    engine.zoom_by(0.001, center).expect("zoom out");
    assert_eq!(engine.view_transform(), ViewTransform::identity());
}

#[test]
fn degenerate_zoom_events_clamp_and_redraw() {
    let mut engine = engine();
    let plot = engine.plot_area();
    let anchor = plot.left + 100.0;

    engine
        .handle_event(ChartEvent::Zoom {
            factor: 0.0,
            anchor_x: anchor,
        })
        .expect("zero factor clamps");
    assert_eq!(engine.view_transform(), ViewTransform::identity());
    assert_eq!(engine.stats().redraws, 1);

    engine
        .handle_event(ChartEvent::Zoom {
            factor: f64::INFINITY,
            anchor_x: anchor,
        })
        .expect("infinite factor clamps");
    assert_eq!(engine.view_transform().scale_factor, 10.0);
    assert_eq!(engine.stats().redraws, 2);

    engine
        .handle_event(ChartEvent::Zoom {
            factor: -3.0,
            anchor_x: anchor,
        })
        .expect("negative factor clamps");
    assert_eq!(engine.view_transform(), ViewTransform::identity());

    engine
        .handle_event(ChartEvent::Zoom {
            factor: 2.0,
            anchor_x: f64::NAN,
        })
        .expect("non-finite anchor is ignored");
    assert_eq!(engine.view_transform(), ViewTransform::identity());
    assert_eq!(engine.stats().redraws, 4);

    assert!(
        engine
            .handle_event(ChartEvent::Zoom {
                factor: f64::NAN,
                anchor_x: anchor,
            })
            .is_err()
    );
    assert_eq!(engine.stats().redraws, 4);
}

#[test]
fn pan_cannot_leave_the_data_extent() {
    let mut engine = engine();
    let plot = engine.plot_area();
    let full = engine.scales().expect("scales").time.full_range();

    engine.pan_by(250.0).expect("pan at k=1");
    assert!(engine.view_transform().is_identity());

    engine.zoom_by(2.0, plot.left).expect("zoom");
    engine.pan_by(10_000.0).expect("pan right");
    let (start, _) = engine.scales().expect("scales").time.visible_range();
    assert_abs_diff_eq!(start, full.0, epsilon = 1e-6);
    assert_eq!(engine.view_transform().translate_x, 0.0);

    engine.pan_by(-10_000.0).expect("pan left");
    let (_, end) = engine.scales().expect("scales").time.visible_range();
    assert_abs_diff_eq!(end, full.1, epsilon = 1e-6);
    assert_eq!(engine.view_transform().translate_x, -plot.inner_width);
}

#[test]
fn zoom_does_not_rebuild_scales_or_touch_value_axis() {
    let mut engine = engine();
    let plot = engine.plot_area();
    let scales = engine.scales().expect("scales");
    let builds = engine.stats().scale_builds;

    engine
        .handle_event(ChartEvent::Zoom {
            factor: 3.0,
            anchor_x: plot.left + 100.0,
        })
        .expect("zoom");
    engine
        .handle_event(ChartEvent::Pan { delta_x: -40.0 })
        .expect("pan");

    let zoomed = engine.scales().expect("scales");
    assert_eq!(engine.stats().scale_builds, builds);
    assert_eq!(zoomed.value, scales.value);
    assert_eq!(zoomed.time.full_range(), scales.time.full_range());
    assert_ne!(zoomed.time.visible_range(), scales.time.visible_range());
}

#[test]
fn identity_transform_reproduces_unzoomed_frame() {
    let mut engine = engine();
    let plot = engine.plot_area();
    let original = engine.build_render_frame().expect("frame");

    engine.zoom_by(4.0, plot.left + 123.0).expect("zoom");
    engine.pan_by(-57.0).expect("pan");
    assert_ne!(engine.build_render_frame().expect("frame"), original);

    engine.set_view_transform(ViewTransform {
        scale_factor: 1.0,
        translate_x: 0.0,
    });
    assert_eq!(engine.build_render_frame().expect("frame"), original);

    engine.zoom_by(2.0, plot.left + 300.0).expect("zoom");
    engine.zoom_by(0.5, plot.left + 300.0).expect("zoom back");
    assert!(engine.view_transform().is_identity());
    assert_eq!(engine.build_render_frame().expect("frame"), original);
}

#[test]
fn zoom_outside_plot_or_without_data_is_ignored() {
    let mut engine = engine();
    let plot = engine.plot_area();
    engine.zoom_by(2.0, plot.left - 30.0).expect("zoom in margin");
    assert!(engine.view_transform().is_identity());

    let mut empty =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    empty.zoom_by(2.0, 300.0).expect("zoom without data");
    empty.pan_by(20.0).expect("pan without data");
    assert!(empty.view_transform().is_identity());
}

#[test]
fn host_transform_is_clamped() {
    let mut engine = engine();
    engine.set_view_transform(ViewTransform {
        scale_factor: 25.0,
        translate_x: 500.0,
    });
    assert_eq!(
        engine.view_transform(),
        ViewTransform {
            scale_factor: 10.0,
            translate_x: 0.0
        }
    );

    engine.handle_event(ChartEvent::ResetZoom).expect("reset");
    assert!(engine.view_transform().is_identity());
}

#[test]
fn clamped_transform_bounds() {
    let limits = ZoomLimits::default();
    let transform = ViewTransform {
        scale_factor: 3.0,
        translate_x: -5_000.0,
    }
    .clamped(700.0, limits);
    assert_eq!(transform.translate_x, -1_400.0);

    let transform = ViewTransform {
        scale_factor: f64::NAN,
        translate_x: f64::INFINITY,
    }
    .clamped(700.0, limits);
    assert_eq!(transform, ViewTransform::identity());

    assert!(
        ZoomLimits {
            min_scale: 0.5,
            max_scale: 10.0
        }
        .validate()
        .is_err()
    );
}
