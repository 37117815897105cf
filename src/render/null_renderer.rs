use crate::core::PaneId;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer used by tests and hosts without a drawing surface.
///
/// Frames are validated so invalid geometry surfaces as an error, and the
/// latest frame per pane is retained for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_detail_frame: Option<RenderFrame>,
    pub last_overview_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_frame(&self, pane: PaneId) -> Option<&RenderFrame> {
        match pane {
            PaneId::Detail => self.last_detail_frame.as_ref(),
            PaneId::Overview => self.last_overview_frame.as_ref(),
        }
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        match frame.pane {
            PaneId::Detail => self.last_detail_frame = Some(frame.clone()),
            PaneId::Overview => self.last_overview_frame = Some(frame.clone()),
        }
        Ok(())
    }
}
