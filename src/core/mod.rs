pub mod dataset;
pub mod decimation;
pub mod labels;
pub mod model;
pub mod pane;
pub mod scale;
pub mod tween;
pub mod types;
pub mod viewport;

pub use dataset::{ChartData, Column, Dataset, SeriesData, XAxis};
pub use decimation::{decimated_indices, decimation_stride};
pub use labels::{LabelFade, LabelGeneration, x_label_indices, x_label_step, y_label_step};
pub use model::{DataModel, SeriesVisibility};
pub use pane::{PaneGeometry, PaneId};
pub use scale::{AxisTransform, floor_extent, floor_value_extent};
pub use tween::{Tween, ease_out_quad};
pub use types::Viewport;
pub use viewport::{IndexWindow, PaneViewport, VerticalRange, value_extent};
