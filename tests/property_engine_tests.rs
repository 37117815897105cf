use proptest::prelude::*;
use timeline_chart::api::{ChartEngine, ChartEngineConfig};
use timeline_chart::core::{Dataset, Viewport};
use timeline_chart::render::NullRenderer;

const T0: f64 = 1_551_657_600_000.0;
const DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy)]
enum Input {
    Down(f64, f64),
    Move(f64, f64),
    Up,
    Tick,
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        (-100.0f64..700.0, 0.0f64..400.0).prop_map(|(x, y)| Input::Down(x, y)),
        (-500.0f64..1_100.0, 0.0f64..400.0).prop_map(|(x, y)| Input::Move(x, y)),
        Just(Input::Up),
        Just(Input::Tick),
    ]
}

fn build_engine(samples: u32, smoothing: f64) -> ChartEngine<NullRenderer> {
    let x = (0..samples).map(|i| T0 + f64::from(i) * DAY).collect();
    let values = (0..samples).map(|i| f64::from(i % 17) * 3.5).collect();
    let config = ChartEngineConfig::new(Viewport::new(600, 400)).with_drag_smoothing(smoothing);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(
        Dataset::default()
            .with_x_column("x", x)
            .with_series("y0", "Only", "#3dc23f", values),
    );
    engine
}

proptest! {
    #[test]
    fn drag_sequences_keep_detail_window_inside_data(
        samples in 2u32..400,
        smoothing in 0.1f64..=1.0,
        inputs in prop::collection::vec(input_strategy(), 1..60)
    ) {
        let mut engine = build_engine(samples, smoothing);
        let (full_min, full_max) = engine.overview_domain();
        let mut now = 0.0;

        for input in inputs {
            match input {
                Input::Down(x, y) => engine.pointer_down(x, y),
                Input::Move(x, y) => engine.pointer_move(x, y),
                Input::Up => engine.pointer_up(),
                Input::Tick => {
                    now += 16.0;
                    prop_assert!(engine.tick(now).is_ok());
                }
            }

            let (min, max) = engine.detail_domain();
            prop_assert!(min < max, "{min} >= {max}");
            prop_assert!(min >= full_min && max <= full_max);

            let window = engine.index_window();
            prop_assert!(window.min >= 1 && window.min <= window.max);
            prop_assert!(window.max <= samples as usize);

            let handles = engine.handle_positions();
            prop_assert!(handles.min < handles.max);

            let selection = engine.selection();
            if selection.active {
                prop_assert!(selection.index >= 1 && selection.index <= samples as usize);
            }
        }
    }

    #[test]
    fn arbitrary_valid_data_renders(
        values in prop::collection::vec(-1.0e9f64..1.0e9, 2..300),
        interval in 1.0f64..1.0e9,
        width in 40u32..2_000,
        height in 120u32..1_200
    ) {
        let x = (0..values.len()).map(|i| i as f64 * interval).collect();
        let config = ChartEngineConfig::new(Viewport::new(width, height));
        let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.set_data(
            Dataset::default()
                .with_x_column("x", x)
                .with_series("y0", "A", "#3dc23f", values.clone())
                .with_series("y1", "B", "#f34c44", values.iter().map(|v| -v).collect()),
        );
        prop_assert!(engine.has_data());

        prop_assert!(engine.tick(0.0).is_ok());
        engine.pointer_move(width as f64 / 2.0, 30.0);
        engine.set_series_visible(0, false);
        prop_assert!(engine.tick(100.0).is_ok());
        prop_assert!(engine.tick(1_000.0).is_ok());
        prop_assert!(engine.renderer().frames_rendered >= 2);
    }
}
