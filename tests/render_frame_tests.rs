use approx::assert_abs_diff_eq;
use timeline_chart::api::{ChartEngine, ChartEngineConfig, ChartTheme};
use timeline_chart::core::{Dataset, PaneId, Viewport};
use timeline_chart::render::{CanvasLayerKind, NullRenderer, PaneRegion, TextHAlign};

const T0: f64 = 1_551_657_600_000.0;
const DAY: f64 = 86_400_000.0;

fn daily(samples: u32) -> Dataset {
    let x = (0..samples).map(|i| T0 + f64::from(i) * DAY).collect();
    let joined = (1..=samples).map(|i| 10.0 + f64::from(i)).collect();
    let left = (1..=samples).map(|i| 1000.0 + 2.0 * f64::from(i)).collect();
    Dataset::default()
        .with_x_column("x", x)
        .with_series("y0", "Joined", "#3dc23f", joined)
        .with_series("y1", "Left", "#f34c44", left)
}

fn build_engine(samples: u32) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(600, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(daily(samples));
    engine.tick(0.0).expect("tick");
    engine
}

#[test]
fn panes_clear_their_own_regions() {
    let engine = build_engine(100);
    let detail = engine
        .renderer()
        .last_frame(PaneId::Detail)
        .expect("detail frame");
    let overview = engine
        .renderer()
        .last_frame(PaneId::Overview)
        .expect("overview frame");

    assert_eq!(detail.clear_region, PaneRegion::new(0.0, 0.0, 600.0, 362.0));
    assert_eq!(overview.clear_region, PaneRegion::new(0.0, 361.0, 600.0, 39.0));
}

#[test]
fn detail_series_cover_index_window() {
    let engine = build_engine(100);
    let detail = engine
        .renderer()
        .last_frame(PaneId::Detail)
        .expect("detail frame");
    let series = detail.layer(CanvasLayerKind::Series).expect("series layer");

    assert_eq!(series.polylines.len(), 2);
    for polyline in &series.polylines {
        assert_eq!(polyline.points.len(), 27);
        assert_eq!(polyline.stroke_width, 2.0);
    }
    // Sample 100 of the taller series sits on the plot top.
    let &(x, y) = series.polylines[1].points.last().expect("points");
    assert_abs_diff_eq!(x, 589.0, epsilon = 1e-6);
    assert_abs_diff_eq!(y, 21.0, epsilon = 1e-6);
}

#[test]
fn polylines_stay_near_one_point_per_pixel() {
    let engine = build_engine(5_000);
    for pane in [PaneId::Detail, PaneId::Overview] {
        let frame = engine.renderer().last_frame(pane).expect("frame");
        let series = frame.layer(CanvasLayerKind::Series).expect("series layer");
        assert_eq!(series.polylines.len(), 2);
        for polyline in &series.polylines {
            assert!(polyline.points.len() <= 580, "{pane:?}: {}", polyline.points.len());
            assert!(polyline.points.len() > 100);
        }
    }
}

#[test]
fn grid_rows_and_baseline_are_drawn() {
    let engine = build_engine(100);
    let detail = engine
        .renderer()
        .last_frame(PaneId::Detail)
        .expect("detail frame");
    let grid = detail.layer(CanvasLayerKind::Grid).expect("grid layer");

    assert_eq!(grid.lines.len(), 7);
    let baseline = grid.lines.last().expect("baseline");
    assert_eq!((baseline.y1, baseline.y2), (330.0, 330.0));
    assert_eq!(baseline.color, ChartTheme::light().zero_line);
}

#[test]
fn axis_labels_anchor_at_last_sample() {
    let engine = build_engine(100);
    let detail = engine
        .renderer()
        .last_frame(PaneId::Detail)
        .expect("detail frame");
    let axis = detail.layer(CanvasLayerKind::Axis).expect("axis layer");

    let x_labels: Vec<_> = axis.texts.iter().filter(|text| text.y == 346.0).collect();
    assert_eq!(x_labels.len(), 7);
    assert_eq!(x_labels[0].text, "Jun 11");
    assert_eq!(x_labels[0].h_align, TextHAlign::Right);
    assert_abs_diff_eq!(x_labels[0].x, 589.0, epsilon = 1e-6);
    assert!(
        x_labels[1..]
            .iter()
            .all(|label| label.h_align == TextHAlign::Center)
    );

    let texts: Vec<&str> = axis.texts.iter().map(|text| text.text.as_str()).collect();
    assert!(texts.contains(&"243 "));
    assert!(texts.contains(&"1.0K"));
    assert_eq!(axis.texts.len(), 14);
}

#[test]
fn minimum_value_label_sits_on_baseline() {
    let engine = build_engine(100);
    let detail = engine
        .renderer()
        .last_frame(PaneId::Detail)
        .expect("detail frame");

    let min_label = detail
        .texts()
        .find(|text| text.text == "84 ")
        .expect("minimum label");
    assert_eq!(min_label.x, 11.0);
    assert_eq!(min_label.y, 324.0);
    assert_eq!(min_label.h_align, TextHAlign::Left);
}

#[test]
fn overview_masks_outside_window_and_draws_handles() {
    let engine = build_engine(100);
    let overview = engine
        .renderer()
        .last_frame(PaneId::Overview)
        .expect("overview frame");
    let overlay = overview
        .layer(CanvasLayerKind::Overlay)
        .expect("overlay layer");

    assert_eq!(overlay.rects.len(), 6);
    let left_mask = overlay.rects[0];
    assert_eq!(left_mask.x, 11.0);
    assert_eq!(left_mask.y, 362.0);
    assert_abs_diff_eq!(left_mask.width, 433.5, epsilon = 1e-3);
    assert_eq!(left_mask.height, 38.0);
    assert_eq!(left_mask.fill_color, ChartTheme::light().mask_fill());

    let right_mask = overlay.rects[1];
    assert_abs_diff_eq!(right_mask.width, 0.0, epsilon = 1e-3);

    let handle_fill = ChartTheme::light().handle_fill();
    assert!(overlay.rects[2..].iter().all(|rect| rect.fill_color == handle_fill));
    assert_eq!(overlay.rects[5].y, 399.0);
}

#[test]
fn theme_change_repaints_both_panes() {
    let mut engine = build_engine(100);
    assert_eq!(engine.renderer().frames_rendered, 2);

    engine.set_colors(ChartTheme::dark()).expect("theme");
    engine.tick(16.0).expect("tick");
    assert_eq!(engine.renderer().frames_rendered, 4);
    assert_eq!(engine.theme(), ChartTheme::dark());

    let detail = engine
        .renderer()
        .last_frame(PaneId::Detail)
        .expect("detail frame");
    let grid = detail.layer(CanvasLayerKind::Grid).expect("grid layer");
    let baseline = grid.lines.last().expect("baseline");
    assert_eq!(baseline.color, ChartTheme::dark().zero_line);
}

#[test]
fn invalid_theme_is_rejected_without_repaint() {
    let mut engine = build_engine(100);
    let theme = ChartTheme {
        mask_alpha: 2.0,
        ..ChartTheme::dark()
    };

    assert!(engine.set_colors(theme).is_err());
    engine.tick(16.0).expect("tick");
    assert_eq!(engine.renderer().frames_rendered, 2);
    assert_eq!(engine.theme(), ChartTheme::light());
}

#[test]
fn detail_labels_repaint_while_window_moves() {
    let mut engine = build_engine(100);

    engine
        .set_detail_domain(T0, T0 + 60.0 * DAY)
        .expect("domain");
    engine.tick(16.0).expect("tick");

    let detail = engine
        .renderer()
        .last_frame(PaneId::Detail)
        .expect("detail frame");
    let axis = detail.layer(CanvasLayerKind::Axis).expect("axis layer");
    // Labels dropped by the coarser step fade out.
    let faded = axis
        .texts
        .iter()
        .filter(|text| text.color.alpha < 1.0)
        .count();
    assert!(faded > 0);
    assert!(detail.validate().is_ok());
}

#[test]
fn flat_series_far_from_zero_stays_on_pane_bottoms() {
    for value in [1.0e6, 1.0e9] {
        let x = (0..40).map(|i| T0 + f64::from(i) * DAY).collect();
        let config = ChartEngineConfig::new(Viewport::new(600, 400));
        let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.set_data(
            Dataset::default()
                .with_x_column("x", x)
                .with_series("y0", "Flat", "#3dc23f", vec![value; 40]),
        );
        engine.tick(0.0).expect("tick");
        let geometry = engine.geometry();

        let detail = engine
            .renderer()
            .last_frame(PaneId::Detail)
            .expect("detail frame");
        let polyline = detail.polylines().next().expect("detail polyline");
        for &(_, y) in &polyline.points {
            assert_abs_diff_eq!(y, geometry.detail_bottom, epsilon = 1e-3);
        }

        let overview = engine
            .renderer()
            .last_frame(PaneId::Overview)
            .expect("overview frame");
        let band = overview.clear_region;
        let polyline = overview.polylines().next().expect("overview polyline");
        for &(_, y) in &polyline.points {
            assert!(
                y >= band.y - 1e-3 && y <= band.bottom() + 1e-3,
                "{value}: overview y {y}"
            );
        }
    }
}
