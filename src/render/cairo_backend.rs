use cairo::{Context, Format, ImageSurface, LineCap, LineJoin, Operator};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LayerPrimitives, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can paint into a Cairo context owned by the host
/// (for example a toolkit draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer.
///
/// Keeps one persistent image surface: each frame only clears and repaints
/// its own pane region, so the untouched pane survives between ticks.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let region = frame.clear_region;
        context.save().map_err(|err| map_backend_error("failed to save state", err))?;
        context.set_operator(Operator::Clear);
        context.rectangle(region.x, region.y, region.width, region.height);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to clear pane region", err))?;
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            paint_layer(context, layer, &mut stats)?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

fn paint_layer(
    context: &Context,
    layer: &LayerPrimitives,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for rect in &layer.rects {
        apply_color(context, rect.fill_color);
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for line in &layer.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for polyline in &layer.polylines {
        let mut points = polyline.points.iter();
        let Some(&(x, y)) = points.next() else {
            continue;
        };
        apply_color(context, polyline.color);
        context.set_line_width(polyline.stroke_width);
        context.set_line_join(LineJoin::Bevel);
        context.set_line_cap(LineCap::Butt);
        context.move_to(x, y);
        for &(x, y) in points {
            context.line_to(x, y);
        }
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
        stats.polylines_drawn += 1;
    }

    for circle in &layer.circles {
        context.new_sub_path();
        context.arc(circle.x, circle.y, circle.radius, 0.0, TAU);
        apply_color(context, circle.stroke_color);
        context.set_line_width(circle.stroke_width);
        context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke circle", err))?;
        apply_color(context, circle.fill_color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        stats.circles_drawn += 1;
    }

    for text in &layer.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!(
            "Sans {}px",
            text.font_size_px.round()
        ));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _) = layout.pixel_size();
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y - baseline);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(())
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
