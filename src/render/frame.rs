use crate::core::{PaneId, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, PaneLayerStack, PolylinePrimitive,
    RectPrimitive, TextPrimitive,
};

/// Pixel rectangle a pane owns; cleared before the pane is repainted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PaneRegion {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            polylines: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.polylines.is_empty()
            && self.rects.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic repaint of one pane.
///
/// Backends clear `clear_region`, then paint `layers` in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub pane: PaneId,
    pub clear_region: PaneRegion,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn for_pane(viewport: Viewport, pane: PaneId, clear_region: PaneRegion) -> Self {
        let layers = PaneLayerStack::canonical_for_pane(pane)
            .layers
            .into_iter()
            .map(LayerPrimitives::empty)
            .collect();
        Self {
            viewport,
            pane,
            clear_region,
            layers,
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_polyline(&mut self, kind: CanvasLayerKind, polyline: PolylinePrimitive) {
        if polyline.points.len() < 2 {
            return;
        }
        if let Some(layer) = self.layer_mut(kind) {
            layer.polylines.push(polyline);
        }
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.circles.push(circle);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if text.text.is_empty() {
            return;
        }
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for line in &layer.lines {
                line.validate()?;
            }
            for polyline in &layer.polylines {
                polyline.validate()?;
            }
            for rect in &layer.rects {
                rect.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    #[must_use]
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    #[must_use]
    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.polylines.iter())
    }
}
