mod data_controller;
mod detail_frame_builder;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod interaction_controller;
mod invalidation;
mod label_formatter;
mod observer;
mod overview_frame_builder;
mod render_coordinator;
mod theme;
mod viewport_controller;

pub use engine::ChartEngine;
pub use engine_config::{AnimationTimings, ChartEngineConfig, LayoutMetrics};
pub use invalidation::PaneInvalidation;
pub use label_formatter::{
    DateLabelFormatterFn, LabelFormatters, NumberLabelFormatterFn, format_date_label,
    format_number_label,
};
pub use observer::{ChartObserver, LegendEntry, TooltipContent, TooltipPlacement, TooltipRow};
pub use theme::ChartTheme;
