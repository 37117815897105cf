use serde::{Deserialize, Serialize};

use crate::core::PaneId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Series,
    Overlay,
    Crosshair,
    Axis,
}

/// Paint order of the layers a pane draws into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneLayerStack {
    pub pane_id: PaneId,
    pub layers: Vec<CanvasLayerKind>,
}

impl PaneLayerStack {
    #[must_use]
    pub fn canonical_for_pane(pane_id: PaneId) -> Self {
        let layers = match pane_id {
            PaneId::Detail => vec![
                CanvasLayerKind::Grid,
                CanvasLayerKind::Series,
                CanvasLayerKind::Crosshair,
                CanvasLayerKind::Axis,
            ],
            PaneId::Overview => vec![CanvasLayerKind::Series, CanvasLayerKind::Overlay],
        };
        Self { pane_id, layers }
    }
}
