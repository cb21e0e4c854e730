//! Cairo + Pango + PangoCairo engine backend.
//!
//! Materializes the same primitive scene as [`FrameEngine`] and rasterizes it
//! into an offscreen image surface. Identical in contract to the headless
//! backend; only the rendering library differs.

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::engine::{
    ChartEngine, ChartSpec, Color, FrameChart, FrameEngine, RenderFrame, RenderedChart,
    TextHAlign,
};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CairoEngine {
    scene: FrameEngine,
    clear_color: Color,
}

impl Default for CairoEngine {
    fn default() -> Self {
        Self {
            scene: FrameEngine::default(),
            clear_color: Color::rgb(1.0, 1.0, 1.0),
        }
    }
}

impl CairoEngine {
    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }
}

impl ChartEngine for CairoEngine {
    type Chart = CairoChart;

    fn create(&mut self, spec: &ChartSpec) -> ChartResult<Self::Chart> {
        let inner = self.scene.create(spec)?;

        let width = i32::try_from(spec.viewport.width)
            .map_err(|_| ChartError::Engine("viewport width exceeds surface limit".to_owned()))?;
        let height = i32::try_from(spec.viewport.height)
            .map_err(|_| ChartError::Engine("viewport height exceeds surface limit".to_owned()))?;
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;

        let mut chart = CairoChart {
            inner,
            surface: Some(surface),
            clear_color: self.clear_color,
            disposed: false,
        };
        // A failed first paint must not leak the surface it acquired.
        if let Err(err) = chart.repaint() {
            let _ = chart.dispose();
            return Err(err);
        }
        Ok(chart)
    }
}

pub struct CairoChart {
    inner: FrameChart,
    surface: Option<ImageSurface>,
    clear_color: Color,
    disposed: bool,
}

impl CairoChart {
    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.inner.pointer_leave();
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<String> {
        self.inner.tooltip()
    }

    pub fn wheel_zoom(&mut self, steps: i32, anchor_x: f64) -> ChartResult<()> {
        self.inner.wheel_zoom(steps, anchor_x)?;
        self.repaint()
    }

    pub fn scroll_to(&mut self, fraction: f64) -> ChartResult<()> {
        self.inner.scroll_to(fraction)?;
        self.repaint()
    }

    fn repaint(&mut self) -> ChartResult<()> {
        let Some(surface) = self.surface.as_ref() else {
            return Ok(());
        };
        let context = Context::new(surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        paint_frame(&context, self.inner.frame(), self.clear_color)?;
        for line in self.inner.crosshair_lines() {
            apply_color(&context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke crosshair", err))?;
        }
        Ok(())
    }
}

impl RenderedChart for CairoChart {
    fn records_shown(&self) -> usize {
        self.inner.records_shown()
    }

    fn dispose(&mut self) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;
        self.inner.dispose()?;
        if let Some(surface) = self.surface.take() {
            surface.finish();
        }
        Ok(())
    }
}

fn paint_frame(context: &Context, frame: &RenderFrame, clear_color: Color) -> ChartResult<()> {
    frame.validate()?;

    apply_color(context, clear_color);
    context
        .paint()
        .map_err(|err| map_backend_error("failed to clear surface", err))?;

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
    }

    for rect in &frame.rects {
        apply_color(context, rect.fill_color);
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
    }

    for text in &frame.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let offset = match text.h_align {
            TextHAlign::Left => 0.0,
            TextHAlign::Center => -f64::from(text_width) / 2.0,
            TextHAlign::Right => -f64::from(text_width),
        };

        apply_color(context, text.color);
        context.save().map_err(|err| {
            map_backend_error("failed to save context before text", err)
        })?;
        context.translate(text.x, text.y);
        context.rotate(text.rotation_deg.to_radians());
        context.move_to(offset, 0.0);
        pangocairo::functions::show_layout(context, &layout);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context after text", err))?;
    }

    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Engine(format!("{prefix}: {err}"))
}
