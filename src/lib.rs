//! timeline-chart: interactive time-series chart engine.
//!
//! A detail pane shows a zoomed window of aligned series over a shared time
//! axis; an overview pane below it shows the full range with a draggable
//! selection window. The engine is headless: it emits per-pane
//! [`render::RenderFrame`]s to a [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartObserver, ChartTheme, LabelFormatters};
pub use error::{ChartError, ChartResult};
