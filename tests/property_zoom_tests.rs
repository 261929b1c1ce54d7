use linechart_rs::api::{ChartEngine, ChartEngineConfig, ChartEvent};
use linechart_rs::core::{ChartInput, Point, Series, ValueMode};
use linechart_rs::render::{Color, NullRenderer};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Gesture {
    Zoom { factor: f64, anchor: f64 },
    Pan { delta: f64 },
}

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        (0.2f64..5.0, 0.0f64..1.0).prop_map(|(factor, anchor)| Gesture::Zoom { factor, anchor }),
        (-2_000.0f64..2_000.0).prop_map(|delta| Gesture::Pan { delta }),
    ]
}

fn engine() -> ChartEngine<NullRenderer> {
    let points = (0..90)
        .map(|i| Point::new(f64::from(i) * 86_400.0, f64::from(i % 17)))
        .collect();
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    engine
        .set_input(ChartInput::new(
            vec![Series::new("s", Color::WHITE, points)],
            ValueMode::Linear,
        ))
        .expect("data");
    engine
}

proptest! {
    #[test]
    fn gestures_keep_window_inside_data_extent(
        gestures in proptest::collection::vec(gesture(), 1..24)
    ) {
        let mut engine = engine();
        let plot = engine.plot_area();
        let full = engine.scales().expect("scales").time.full_range();
        let value = engine.scales().expect("scales").value;

        for gesture in gestures {
            let event = match gesture {
                Gesture::Zoom { factor, anchor } => ChartEvent::Zoom {
                    factor,
                    anchor_x: plot.left + anchor * plot.inner_width,
                },
                Gesture::Pan { delta } => ChartEvent::Pan { delta_x: delta },
            };
            engine.handle_event(event).expect("gesture");

            let transform = engine.view_transform();
            prop_assert!(transform.scale_factor >= 1.0 && transform.scale_factor <= 10.0);
            prop_assert!(transform.translate_x <= 0.0);
            prop_assert!(
                transform.translate_x >= plot.inner_width * (1.0 - transform.scale_factor) - 1e-9
            );

            let scales = engine.scales().expect("scales");
            let (start, end) = scales.time.visible_range();
            let tolerance = (full.1 - full.0) * 1e-9;
            prop_assert!(start >= full.0 - tolerance);
            prop_assert!(end <= full.1 + tolerance);
            prop_assert_eq!(scales.value, value);
        }
        prop_assert_eq!(engine.stats().scale_builds, 1);
    }

    #[test]
    fn resize_round_trip_restores_geometry(width in 120u32..2_000) {
        let mut engine = engine();
        let original = engine.build_render_frame().expect("frame");

        engine.resize(width).expect("resize");
        engine.resize(800).expect("restore");

        prop_assert_eq!(engine.build_render_frame().expect("frame"), original);
    }
}
