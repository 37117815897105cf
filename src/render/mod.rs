mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::{LayerPrimitives, PaneRegion, RenderFrame};
pub use layer_stack::{CanvasLayerKind, PaneLayerStack};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing surface.
///
/// The engine hands over one `RenderFrame` per dirty pane; a backend clears
/// the frame's region and paints its layers, without knowing anything about
/// series, scales or interaction.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
