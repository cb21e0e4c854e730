//! Headless engine backend: projects a chart spec into deterministic
//! pixel-space primitives and owns the runtime interaction affordances
//! (crosshair cursor, wheel zoom, scrollbars, hover emphasis, tooltips).

use indexmap::IndexSet;
use tracing::debug;

use crate::core::{CategoryBandScale, LinearScale};
use crate::engine::{
    ChartEngine, ChartSpec, Color, LinePrimitive, RectPrimitive, RenderFrame, RenderedChart,
    TextHAlign, TextPrimitive,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, WheelBehavior, column_tooltip};

const SCROLLBAR_THICKNESS_PX: f64 = 8.0;
const COLUMN_WIDTH_RATIO: f64 = 0.8;
const PLOT_TOP_MARGIN_PX: f64 = 10.0;
const TICK_LABEL_FONT_PX: f64 = 11.0;
const AXIS_TITLE_FONT_PX: f64 = 12.0;

const AXIS_LINE_COLOR: Color = Color::rgb(0.45, 0.45, 0.45);
const LABEL_COLOR: Color = Color::rgb(0.20, 0.20, 0.20);
const SCROLLBAR_TRACK_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.08);
const SCROLLBAR_THUMB_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.35);
const DEFAULT_COLUMN_FILL: Color = Color::rgb(0.40, 0.55, 0.85);

/// Plot area inside the viewport, after axis and scrollbar insets.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotGeometry {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotGeometry {
    fn bottom(self) -> f64 {
        self.top + self.height
    }

    fn right(self) -> f64 {
        self.left + self.width
    }

    fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// Zoomable window over the category ticks, in tick units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VisibleWindow {
    first: usize,
    span: usize,
    total: usize,
}

impl VisibleWindow {
    fn full(total: usize) -> Self {
        Self {
            first: 0,
            span: total,
            total,
        }
    }

    fn contains(self, tick: usize) -> bool {
        tick >= self.first && tick < self.first + self.span
    }

    fn zoom_in(&mut self, anchor: usize) {
        let shrunk = (self.span * 4 / 5).max(1);
        self.rewindow(anchor, shrunk);
    }

    fn zoom_out(&mut self, anchor: usize) {
        let grown = (self.span * 5 / 4).max(self.span + 1).min(self.total);
        self.rewindow(anchor, grown);
    }

    fn rewindow(&mut self, anchor: usize, span: usize) {
        // Keep the anchor tick at roughly the same relative position.
        let anchor_offset = anchor.saturating_sub(self.first);
        let scaled_offset = if self.span == 0 {
            0
        } else {
            anchor_offset * span / self.span
        };
        self.span = span;
        self.first = anchor
            .saturating_sub(scaled_offset)
            .min(self.total - self.span);
    }

    fn scroll_to(&mut self, fraction: f64) {
        let max_first = self.total - self.span;
        let first = (fraction.clamp(0.0, 1.0) * self.total as f64) as usize;
        self.first = first.min(max_first);
    }
}

/// Scene-materializing backend with no drawing dependency.
///
/// The other backends rasterize the same frames; this one stops at the
/// primitive scene, which is all tests and headless hosts need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameEngine {
    column_fill: Color,
}

impl Default for FrameEngine {
    fn default() -> Self {
        Self {
            column_fill: DEFAULT_COLUMN_FILL,
        }
    }
}

impl FrameEngine {
    #[must_use]
    pub fn with_column_fill(mut self, fill: Color) -> Self {
        self.column_fill = fill;
        self
    }
}

impl ChartEngine for FrameEngine {
    type Chart = FrameChart;

    fn create(&mut self, spec: &ChartSpec) -> ChartResult<Self::Chart> {
        spec.validate()?;

        let plot = compute_plot(spec)?;
        let window = VisibleWindow::full(spec.axes.category.ticks.len());
        let frame = build_frame(spec, plot, window, self.column_fill)?;
        frame.validate()?;

        debug!(
            container = %spec.container,
            records = spec.records.len(),
            ticks = spec.axes.category.ticks.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "created frame chart"
        );

        Ok(FrameChart {
            spec: spec.clone(),
            column_fill: self.column_fill,
            plot,
            window,
            frame,
            hover: HoverState::default(),
            disposed: false,
        })
    }
}

/// Live chart produced by [`FrameEngine`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameChart {
    spec: ChartSpec,
    column_fill: Color,
    plot: PlotGeometry,
    window: VisibleWindow,
    frame: RenderFrame,
    hover: HoverState,
    disposed: bool,
}

impl FrameChart {
    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Currently visible category-tick window as `(first, span)`.
    #[must_use]
    pub fn visible_window(&self) -> (usize, usize) {
        (self.window.first, self.window.span)
    }

    #[must_use]
    pub fn hovered_column(&self) -> Option<usize> {
        self.hover.hovered_column()
    }

    /// Updates the crosshair cursor and the hovered column from a pointer
    /// position in viewport pixels. No-op after disposal.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.disposed {
            return;
        }
        let hovered = self.record_at(x, y);
        self.hover.on_pointer_move(x, y, hovered);
    }

    pub fn pointer_leave(&mut self) {
        self.hover.on_pointer_leave();
    }

    /// Tooltip for the hovered column, when tooltips are enabled.
    #[must_use]
    pub fn tooltip(&self) -> Option<String> {
        if !self.spec.series.tooltips_enabled {
            return None;
        }
        let record = self.spec.records.get(self.hover.hovered_column()?)?;
        column_tooltip(&self.spec.selector, record)
    }

    /// Effective fill opacity of a column, accounting for hover emphasis.
    #[must_use]
    pub fn column_fill_opacity(&self, record_index: usize) -> f64 {
        if self.hover.hovered_column() == Some(record_index) {
            self.spec.interaction.hover.fill_opacity
        } else {
            self.spec.series.fill_opacity
        }
    }

    /// Crosshair guide lines for the current cursor position.
    #[must_use]
    pub fn crosshair_lines(&self) -> Vec<LinePrimitive> {
        if self.disposed || !self.spec.interaction.cursor.enabled {
            return Vec::new();
        }
        let Some((x, y)) = self.hover.cursor() else {
            return Vec::new();
        };
        if !self.plot.contains(x, y) {
            return Vec::new();
        }

        let mut lines = vec![LinePrimitive {
            x1: x,
            y1: self.plot.top,
            x2: x,
            y2: self.plot.bottom(),
            stroke_width: 1.0,
            color: AXIS_LINE_COLOR,
        }];
        if self.spec.interaction.cursor.value_line_visible {
            lines.push(LinePrimitive {
                x1: self.plot.left,
                y1: y,
                x2: self.plot.right(),
                y2: y,
                stroke_width: 1.0,
                color: AXIS_LINE_COLOR,
            });
        }
        lines
    }

    /// Horizontal zoom on scroll: positive steps zoom in around the pointer.
    ///
    /// Re-materializes the frame for the new window. No-op when wheel zoom is
    /// not configured or the chart is disposed.
    pub fn wheel_zoom(&mut self, steps: i32, anchor_x: f64) -> ChartResult<()> {
        if self.disposed || self.spec.interaction.wheel != WheelBehavior::ZoomX {
            return Ok(());
        }

        let band = CategoryBandScale::new(self.window.span)?;
        let anchor_rel = band
            .band_at(anchor_x - self.plot.left, self.plot.width)
            .unwrap_or(self.window.span / 2);
        let anchor = self.window.first + anchor_rel;

        for _ in 0..steps.abs() {
            if steps > 0 {
                self.window.zoom_in(anchor);
            } else {
                self.window.zoom_out(anchor);
            }
        }
        self.rebuild_frame()
    }

    /// Moves the horizontal scrollbar thumb; `fraction` is the track offset
    /// in `[0, 1]`.
    pub fn scroll_to(&mut self, fraction: f64) -> ChartResult<()> {
        if self.disposed || !fraction.is_finite() {
            return Ok(());
        }
        self.window.scroll_to(fraction);
        self.rebuild_frame()
    }

    fn rebuild_frame(&mut self) -> ChartResult<()> {
        self.frame = build_frame(&self.spec, self.plot, self.window, self.column_fill)?;
        Ok(())
    }

    /// Maps a pointer position to the first record of the band under it.
    fn record_at(&self, x: f64, y: f64) -> Option<usize> {
        if !self.plot.contains(x, y) {
            return None;
        }
        let band = CategoryBandScale::new(self.window.span).ok()?;
        let rel = band.band_at(x - self.plot.left, self.plot.width)?;
        let tick = self.spec.axes.category.ticks.get(self.window.first + rel)?;

        self.spec.records.iter().position(|record| {
            record
                .get(&self.spec.selector.category_field)
                .is_some_and(|cell| cell.to_string() == *tick)
        })
    }
}

impl RenderedChart for FrameChart {
    fn records_shown(&self) -> usize {
        self.spec.records.len()
    }

    fn dispose(&mut self) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;
        self.hover.on_pointer_leave();
        self.frame.lines.clear();
        self.frame.rects.clear();
        self.frame.texts.clear();
        Ok(())
    }
}

fn compute_plot(spec: &ChartSpec) -> ChartResult<PlotGeometry> {
    let width = f64::from(spec.viewport.width);
    let height = f64::from(spec.viewport.height);

    let left = spec.axes.value.min_width_px;
    let right_inset = if spec.interaction.scrollbar_y {
        SCROLLBAR_THICKNESS_PX + 2.0
    } else {
        PLOT_TOP_MARGIN_PX
    };
    let bottom_inset = spec.axes.category.min_height_px
        + if spec.interaction.scrollbar_x {
            SCROLLBAR_THICKNESS_PX + 2.0
        } else {
            0.0
        };

    let plot = PlotGeometry {
        left,
        top: PLOT_TOP_MARGIN_PX,
        width: width - left - right_inset,
        height: height - PLOT_TOP_MARGIN_PX - bottom_inset,
    };

    if plot.width <= 0.0 || plot.height <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "viewport {}x{} too small for axis insets",
            spec.viewport.width, spec.viewport.height
        )));
    }
    Ok(plot)
}

fn build_frame(
    spec: &ChartSpec,
    plot: PlotGeometry,
    window: VisibleWindow,
    column_fill: Color,
) -> ChartResult<RenderFrame> {
    let ticks = &spec.axes.category.ticks;
    let tick_lookup: IndexSet<&str> = ticks.iter().map(String::as_str).collect();
    let band = CategoryBandScale::new(window.span)?;

    let (min, mut max) = (spec.axes.value.min, spec.axes.value.max);
    if min == max {
        // Degenerate domain: every value equal. Pad so the scale stays valid.
        max = min + 1.0;
    }
    let value_scale = LinearScale::new(min, max)?;
    let y_of = |value: f64| -> ChartResult<f64> {
        Ok(plot.bottom() - value_scale.domain_to_pixel(value, plot.height)?)
    };

    let mut frame = RenderFrame::new(spec.viewport);

    // Axis lines.
    frame.lines.push(LinePrimitive {
        x1: plot.left,
        y1: plot.bottom(),
        x2: plot.right(),
        y2: plot.bottom(),
        stroke_width: 1.0,
        color: AXIS_LINE_COLOR,
    });
    frame.lines.push(LinePrimitive {
        x1: plot.left,
        y1: plot.top,
        x2: plot.left,
        y2: plot.bottom(),
        stroke_width: 1.0,
        color: AXIS_LINE_COLOR,
    });

    // One column per record whose category tick is inside the window.
    let column_width = band.band_width(plot.width) * COLUMN_WIDTH_RATIO;
    for (record_index, record) in spec.records.iter().enumerate() {
        let category = record
            .get(&spec.selector.category_field)
            .ok_or_else(|| ChartError::MissingField {
                field: spec.selector.category_field.clone(),
                record_index,
            })?
            .to_string();
        let tick = tick_lookup.get_index_of(category.as_str()).ok_or_else(|| {
            ChartError::InvalidData(format!("category `{category}` missing from axis ticks"))
        })?;
        if !window.contains(tick) {
            continue;
        }

        let value = record
            .get(&spec.selector.value_field)
            .and_then(|cell| cell.as_f64())
            .ok_or_else(|| ChartError::NonNumericValue {
                field: spec.selector.value_field.clone(),
                record_index,
            })?;

        let center = plot.left + band.band_center(tick - window.first, plot.width)?;
        let top = y_of(value)?;
        frame.rects.push(RectPrimitive {
            x: center - column_width * 0.5,
            y: top,
            width: column_width,
            height: plot.bottom() - top,
            corner_radius: 0.0,
            fill_color: column_fill.with_alpha(spec.series.fill_opacity),
        });
    }

    // Rotated category tick labels, culled to keep the configured minimum
    // spacing between labeled ticks.
    let band_width = band.band_width(plot.width);
    let stride = (spec.axes.category.min_grid_distance_px / band_width).ceil() as usize;
    let stride = stride.max(1);
    for rel in (0..window.span).step_by(stride) {
        let Some(tick) = ticks.get(window.first + rel) else {
            continue;
        };
        frame.texts.push(TextPrimitive {
            x: plot.left + band.band_center(rel, plot.width)?,
            y: plot.bottom() + 6.0,
            text: tick.clone(),
            font_size_px: TICK_LABEL_FONT_PX,
            color: LABEL_COLOR,
            h_align: TextHAlign::Right,
            rotation_deg: spec.axes.category.label_rotation_deg,
        });
    }

    // Value axis bound labels and both axis titles.
    for (value, y) in [(min, plot.bottom()), (max, plot.top)] {
        frame.texts.push(TextPrimitive {
            x: plot.left - 6.0,
            y,
            text: format!("{value}"),
            font_size_px: TICK_LABEL_FONT_PX,
            color: LABEL_COLOR,
            h_align: TextHAlign::Right,
            rotation_deg: 0.0,
        });
    }
    frame.texts.push(TextPrimitive {
        x: plot.left + plot.width * 0.5,
        y: f64::from(spec.viewport.height) - AXIS_TITLE_FONT_PX,
        text: spec.axes.category.title.clone(),
        font_size_px: AXIS_TITLE_FONT_PX,
        color: LABEL_COLOR,
        h_align: TextHAlign::Center,
        rotation_deg: 0.0,
    });
    frame.texts.push(TextPrimitive {
        x: AXIS_TITLE_FONT_PX,
        y: plot.top + plot.height * 0.5,
        text: spec.axes.value.title.clone(),
        font_size_px: AXIS_TITLE_FONT_PX,
        color: LABEL_COLOR,
        h_align: TextHAlign::Center,
        rotation_deg: 270.0,
    });

    // Scrollbars: horizontal thumb tracks the zoom window, vertical spans the
    // full range (no vertical zoom on a categorical chart).
    if spec.interaction.scrollbar_x {
        let track_y = f64::from(spec.viewport.height) - SCROLLBAR_THICKNESS_PX;
        frame.rects.push(scrollbar_rect(
            plot.left,
            track_y,
            plot.width,
            SCROLLBAR_TRACK_COLOR,
        ));
        let total = window.total as f64;
        frame.rects.push(scrollbar_rect(
            plot.left + plot.width * window.first as f64 / total,
            track_y,
            plot.width * window.span as f64 / total,
            SCROLLBAR_THUMB_COLOR,
        ));
    }
    if spec.interaction.scrollbar_y {
        let track_x = f64::from(spec.viewport.width) - SCROLLBAR_THICKNESS_PX;
        for color in [SCROLLBAR_TRACK_COLOR, SCROLLBAR_THUMB_COLOR] {
            frame.rects.push(RectPrimitive {
                x: track_x,
                y: plot.top,
                width: SCROLLBAR_THICKNESS_PX,
                height: plot.height,
                corner_radius: SCROLLBAR_THICKNESS_PX * 0.5,
                fill_color: color,
            });
        }
    }

    Ok(frame)
}

fn scrollbar_rect(x: f64, y: f64, width: f64, color: Color) -> RectPrimitive {
    RectPrimitive {
        x,
        y,
        width,
        height: SCROLLBAR_THICKNESS_PX,
        corner_radius: SCROLLBAR_THICKNESS_PX * 0.5,
        fill_color: color,
    }
}
