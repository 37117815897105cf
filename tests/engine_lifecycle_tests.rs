use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use timeline_chart::api::{ChartEngine, ChartEngineConfig, LegendEntry, TooltipContent};
use timeline_chart::core::{Dataset, IndexWindow, PaneId, Viewport};
use timeline_chart::error::{ChartError, ChartResult};
use timeline_chart::render::{NullRenderer, RenderFrame, Renderer};
use timeline_chart::ChartObserver;

const T0: f64 = 1_551_657_600_000.0;
const DAY: f64 = 86_400_000.0;

fn dataset() -> Dataset {
    let x = (0..100).map(|i| T0 + f64::from(i) * DAY).collect();
    let joined = (1..=100).map(|i| 10.0 + f64::from(i)).collect();
    let left = (1..=100).map(|i| 1000.0 + 2.0 * f64::from(i)).collect();
    Dataset::default()
        .with_x_column("x", x)
        .with_series("y0", "Joined", "#3dc23f", joined)
        .with_series("y1", "Left", "#f34c44", left)
}

fn build_engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(600, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(dataset());
    engine
}

#[derive(Default)]
struct Recorded {
    legends: Vec<Vec<LegendEntry>>,
    tooltips: Vec<Option<TooltipContent>>,
}

struct Recorder(Rc<RefCell<Recorded>>);

impl ChartObserver for Recorder {
    fn legend_rebuilt(&mut self, entries: &[LegendEntry]) {
        self.0.borrow_mut().legends.push(entries.to_vec());
    }

    fn tooltip_changed(&mut self, tooltip: Option<&TooltipContent>) {
        self.0.borrow_mut().tooltips.push(tooltip.cloned());
    }
}

#[derive(Default)]
struct PaneLog {
    panes: Vec<PaneId>,
    fail_next: bool,
}

impl Renderer for PaneLog {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        if self.fail_next {
            self.fail_next = false;
            return Err(ChartError::Backend("surface lost".to_owned()));
        }
        self.panes.push(frame.pane);
        Ok(())
    }
}

#[test]
fn load_opens_detail_window_on_last_quarter() {
    let engine = build_engine();

    let (min, max) = engine.detail_domain();
    assert_abs_diff_eq!(min, T0 + 74.25 * DAY, epsilon = 1.0);
    assert_abs_diff_eq!(max, T0 + 99.0 * DAY, epsilon = 1.0);
    assert_eq!(engine.overview_domain(), (T0, T0 + 99.0 * DAY));
    assert_eq!(engine.index_window(), IndexWindow { min: 74, max: 100 });

    let handles = engine.handle_positions();
    assert_abs_diff_eq!(handles.min, 444.5, epsilon = 1e-3);
    assert_abs_diff_eq!(handles.max, 589.0, epsilon = 1e-3);

    assert_eq!(engine.detail_vertical_range(), (84.0, 1200.0));
    assert_eq!(engine.overview_vertical_range(), (11.0, 1200.0));
    assert_eq!(engine.detail_vertical_current(), (84.0, 1116.0));
}

#[test]
fn nothing_is_painted_before_data_arrives() {
    let config = ChartEngineConfig::new(Viewport::new(600, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.tick(16.0).expect("tick");
    assert!(!engine.has_data());
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn first_tick_paints_both_panes_then_idles() {
    let mut engine = build_engine();

    engine.tick(16.0).expect("tick");
    assert_eq!(engine.renderer().frames_rendered, 2);
    assert!(engine.renderer().last_frame(PaneId::Detail).is_some());
    assert!(engine.renderer().last_frame(PaneId::Overview).is_some());

    engine.tick(32.0).expect("tick");
    assert_eq!(engine.renderer().frames_rendered, 2);
}

#[test]
fn overview_is_repainted_before_detail() {
    let config = ChartEngineConfig::new(Viewport::new(600, 400));
    let mut engine = ChartEngine::new(PaneLog::default(), config).expect("engine init");
    engine.set_data(dataset());

    engine.tick(16.0).expect("tick");
    assert_eq!(engine.renderer().panes, vec![PaneId::Overview, PaneId::Detail]);
}

#[test]
fn failed_pane_render_is_retried_next_tick() {
    let config = ChartEngineConfig::new(Viewport::new(600, 400));
    let renderer = PaneLog {
        panes: Vec::new(),
        fail_next: true,
    };
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.set_data(dataset());

    let err = engine.tick(16.0).expect_err("backend failure surfaces");
    assert!(matches!(err, ChartError::Backend(_)));
    assert!(engine.renderer().panes.is_empty());

    engine.tick(32.0).expect("tick");
    assert_eq!(engine.renderer().panes, vec![PaneId::Overview, PaneId::Detail]);
}

#[test]
fn resize_is_applied_on_next_tick() {
    let mut engine = build_engine();
    engine.tick(16.0).expect("tick");

    engine.resize(800.0, 400.0);
    assert_eq!(engine.viewport(), Viewport::new(600, 400));

    engine.tick(32.0).expect("tick");
    assert_eq!(engine.viewport(), Viewport::new(800, 400));
    assert_eq!(engine.renderer().frames_rendered, 4);
    assert_abs_diff_eq!(engine.handle_positions().min, 594.5, epsilon = 1e-3);
    assert_abs_diff_eq!(engine.handle_positions().max, 789.0, epsilon = 1e-3);
    assert_eq!(engine.label_counts(), (13, 7));
}

#[test]
fn resize_uses_pixel_ratio() {
    let config = ChartEngineConfig::new(Viewport::new(600, 400)).with_pixel_ratio(2.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.resize(320.0, 240.0);
    engine.tick(16.0).expect("tick");
    assert_eq!(engine.viewport(), Viewport::new(640, 480));
    assert_eq!(engine.geometry().overview_height, 76.0);
}

#[test]
fn zero_size_surface_skips_painting() {
    let mut engine = build_engine();
    engine.tick(16.0).expect("tick");

    engine.resize(0.0, 0.0);
    engine.tick(32.0).expect("tick");
    assert_eq!(engine.viewport(), Viewport::new(0, 0));
    assert_eq!(engine.renderer().frames_rendered, 2);

    engine.resize(600.0, 400.0);
    engine.tick(48.0).expect("tick");
    assert_eq!(engine.renderer().frames_rendered, 4);
}

#[test]
fn resize_before_data_is_kept() {
    let config = ChartEngineConfig::new(Viewport::new(600, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.resize(300.0, 200.0);
    engine.tick(16.0).expect("tick");
    assert_eq!(engine.viewport(), Viewport::new(300, 200));

    engine.set_data(dataset());
    engine.tick(32.0).expect("tick");
    assert_eq!(engine.renderer().frames_rendered, 2);
    assert_eq!(engine.geometry().width, 300.0);
}

#[test]
fn non_finite_clock_is_ignored() {
    let mut engine = build_engine();
    engine.tick(f64::NAN).expect("tick");
    engine.tick(f64::INFINITY).expect("tick");
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn detail_domain_is_clamped_and_animates_vertical_range() {
    let mut engine = build_engine();
    engine.tick(1_000.0).expect("tick");

    engine
        .set_detail_domain(T0 - 10.0 * DAY, T0 + 10.0 * DAY)
        .expect("domain");
    assert_eq!(engine.detail_domain(), (T0, T0 + 10.0 * DAY));
    assert_eq!(engine.index_window(), IndexWindow { min: 1, max: 13 });
    assert_eq!(engine.detail_vertical_range(), (11.0, 1026.0));
    assert_eq!(engine.detail_vertical_current(), (84.0, 1116.0));

    engine.tick(1_200.0).expect("tick");
    let (current_min, _) = engine.detail_vertical_current();
    assert!(current_min > 11.0 && current_min < 84.0);

    engine.tick(1_400.0).expect("tick");
    assert_eq!(engine.detail_vertical_current(), (11.0, 1015.0));
}

#[test]
fn invalid_detail_domain_is_rejected() {
    let mut engine = build_engine();
    let before = engine.detail_domain();

    assert!(engine.set_detail_domain(T0 + 5.0 * DAY, T0).is_err());
    assert!(engine.set_detail_domain(f64::NAN, T0).is_err());
    assert!(
        engine
            .set_detail_domain(T0 + 200.0 * DAY, T0 + 300.0 * DAY)
            .is_err()
    );
    assert_eq!(engine.detail_domain(), before);
}

#[test]
fn observer_receives_current_legend_on_install() {
    let mut engine = build_engine();
    let recorded = Rc::new(RefCell::new(Recorded::default()));
    engine.set_observer(Box::new(Recorder(Rc::clone(&recorded))));

    let recorded = recorded.borrow();
    let legend = recorded.legends.last().expect("legend published");
    assert_eq!(legend.len(), 2);
    assert_eq!(legend[0].name, "Joined");
    assert_eq!(legend[1].name, "Left");
    assert!(legend.iter().all(|entry| entry.visible));
    assert_eq!(recorded.tooltips.last(), Some(&None));
}

#[test]
fn legend_is_omitted_for_single_or_unnamed_series() {
    let config = ChartEngineConfig::new(Viewport::new(600, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.set_data(
        Dataset::default()
            .with_x_column("x", vec![0.0, DAY, 2.0 * DAY])
            .with_series("y0", "Only", "#3dc23f", vec![1.0, 2.0, 3.0]),
    );
    assert!(engine.has_data());
    assert!(engine.legend().is_empty());

    engine.set_data_json(
        r#"{
            "columns": [["x", 0, 1, 2], ["y0", 1, 2, 3], ["y1", 3, 2, 1]],
            "types": {"x": "x", "y0": "line", "y1": "line"}
        }"#,
    );
    assert!(engine.has_data());
    assert!(engine.legend().is_empty());
}

#[test]
fn destroy_clears_host_widgets_and_ignores_further_calls() {
    let mut engine = build_engine();
    let recorded = Rc::new(RefCell::new(Recorded::default()));
    engine.set_observer(Box::new(Recorder(Rc::clone(&recorded))));

    engine.destroy();
    assert!(engine.is_destroyed());
    assert!(!engine.has_data());
    {
        let recorded = recorded.borrow();
        assert_eq!(recorded.legends.last().map(Vec::len), Some(0));
        assert_eq!(recorded.tooltips.last(), Some(&None));
    }

    let publications = recorded.borrow().legends.len();
    engine.set_data(dataset());
    engine.pointer_move(300.0, 100.0);
    engine.resize(800.0, 600.0);
    engine.tick(16.0).expect("tick");
    engine.destroy();

    assert!(!engine.has_data());
    assert_eq!(engine.viewport(), Viewport::new(600, 400));
    assert_eq!(engine.renderer().frames_rendered, 0);
    assert_eq!(recorded.borrow().legends.len(), publications);
}
