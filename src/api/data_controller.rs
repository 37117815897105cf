use tracing::{debug, warn};

use crate::core::{ChartData, DataModel, Dataset, PaneViewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, ChartTheme, LegendEntry};

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the dataset.
    ///
    /// A dataset failing validation is logged and leaves the chart empty; the
    /// host keeps running. The detail window opens on the last quarter of the
    /// data and both vertical ranges start settled.
    pub fn set_data(&mut self, dataset: Dataset) {
        if self.core.destroyed {
            return;
        }
        match ChartData::from_dataset(dataset) {
            Ok(data) => self.load_data(data),
            Err(err) => {
                warn!(error = %err, "dataset rejected; chart left empty");
                self.clear_data();
            }
        }
    }

    /// [`ChartEngine::set_data`] for a JSON document.
    pub fn set_data_json(&mut self, input: &str) {
        if self.core.destroyed {
            return;
        }
        match Dataset::from_json_str(input) {
            Ok(dataset) => self.set_data(dataset),
            Err(err) => {
                warn!(error = %err, "dataset json rejected; chart left empty");
                self.clear_data();
            }
        }
    }

    /// Replaces the color theme; both panes repaint without animation.
    pub fn set_colors(&mut self, theme: ChartTheme) -> ChartResult<()> {
        let theme = theme.validate()?;
        if self.core.destroyed {
            return Ok(());
        }
        self.core.theme = theme;
        self.core.invalidation.invalidate_all();
        Ok(())
    }

    /// Shows or hides one series (legend toggle).
    ///
    /// Both panes fade the series and rescale toward the remaining ones.
    /// Unknown indices are ignored.
    pub fn set_series_visible(&mut self, index: usize, visible: bool) {
        if self.core.destroyed {
            return;
        }
        let now = self.core.clock;
        let overview_transform = self.overview_vertical_transform();
        let Some(model) = self.core.model.as_mut() else {
            debug!(index, "series toggle ignored without data");
            return;
        };
        if !model.set_visible(index, visible, now, overview_transform) {
            warn!(index, "series toggle ignored for unknown index");
            return;
        }
        self.refresh_detail_range(now, true);
        self.refresh_overview_range(now, true);
        self.refresh_tooltip();
        self.publish_legend();
        self.core.invalidation.invalidate_all();
    }

    fn load_data(&mut self, data: ChartData) {
        let scale_duration = self.core.config.animation.scale_duration;
        let (first, last) = (data.x().first(), data.x().last());
        let series_count = data.series().len();
        let sample_count = data.x().sample_count();

        let core = &mut self.core;
        core.overview = PaneViewport::new(first, last, scale_duration);
        core.detail = PaneViewport::new(last - (last - first) / 4.0, last, scale_duration);
        core.model = Some(DataModel::new(data, scale_duration));
        core.interaction.reset();
        core.tooltip = None;

        let now = core.clock;
        self.relayout();
        self.refresh_detail_window(now, false);
        self.refresh_overview_range(now, false);
        self.publish_legend();
        self.publish_tooltip();
        self.core.invalidation.invalidate_all();
        debug!(series_count, sample_count, "dataset accepted");
    }

    pub(super) fn clear_data(&mut self) {
        let core = &mut self.core;
        core.model = None;
        core.interaction.reset();
        core.tooltip = None;
        self.publish_legend();
        self.publish_tooltip();
        self.core.invalidation.invalidate_all();
    }

    /// Legend model: one toggle per series, only for multi-series datasets
    /// that name their series.
    pub(super) fn legend_entries(&self) -> Vec<LegendEntry> {
        let Some(model) = self.core.model.as_ref() else {
            return Vec::new();
        };
        if model.series_count() < 2 || !model.data().names_provided() {
            return Vec::new();
        }
        model
            .series_with_visibility()
            .map(|(series_index, series, visibility)| LegendEntry {
                series_index,
                name: series.name.clone(),
                color: series.color,
                visible: visibility.is_shown(),
            })
            .collect()
    }

    pub(super) fn publish_legend(&mut self) {
        let entries = self.legend_entries();
        if let Some(observer) = self.core.observer.as_deref_mut() {
            observer.legend_rebuilt(&entries);
        }
    }

    pub(super) fn publish_tooltip(&mut self) {
        if let Some(observer) = self.core.observer.as_deref_mut() {
            observer.tooltip_changed(self.core.tooltip.as_ref());
        }
    }
}
