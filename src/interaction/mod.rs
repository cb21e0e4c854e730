//! Interaction affordances attached to a rendered chart.
//!
//! Configuration types are plain serde-derived data so hosts can persist a
//! chart setup; runtime pointer state lives in [`HoverState`], owned by the
//! engine-side chart handle.

use serde::{Deserialize, Serialize};

use crate::core::{FieldSelector, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelBehavior {
    /// Scroll wheel zooms the category axis around the pointer.
    ZoomX,
    /// Scroll wheel pans the category axis.
    PanX,
    None,
}

/// Pointer-driven crosshair cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorConfig {
    pub enabled: bool,
    /// The horizontal guide line adds noise on categorical charts and is
    /// hidden by default.
    pub value_line_visible: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            value_line_visible: false,
        }
    }
}

/// Per-column emphasis applied while the pointer rests on a column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverEmphasis {
    pub fill_opacity: f64,
    pub corner_radius_px: f64,
}

impl Default for HoverEmphasis {
    fn default() -> Self {
        Self {
            fill_opacity: 1.0,
            corner_radius_px: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    pub cursor: CursorConfig,
    pub wheel: WheelBehavior,
    pub scrollbar_x: bool,
    pub scrollbar_y: bool,
    pub hover: HoverEmphasis,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            cursor: CursorConfig::default(),
            wheel: WheelBehavior::ZoomX,
            scrollbar_x: true,
            scrollbar_y: true,
            hover: HoverEmphasis::default(),
        }
    }
}

/// Runtime pointer state for one live chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverState {
    cursor: Option<(f64, f64)>,
    hovered_column: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[must_use]
    pub fn hovered_column(self) -> Option<usize> {
        self.hovered_column
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, hovered_column: Option<usize>) {
        self.cursor = Some((x, y));
        self.hovered_column = hovered_column;
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.hovered_column = None;
    }
}

/// Tooltip text for one column: `category_field: <cat>` over
/// `value_field: <val>`.
///
/// Returns `None` when either field is absent; tooltip rendering degrades
/// rather than failing a pointer event.
#[must_use]
pub fn column_tooltip(selector: &FieldSelector, record: &Record) -> Option<String> {
    let category = record.get(&selector.category_field)?;
    let value = record.get(&selector.value_field)?;
    Some(format!(
        "{}: {category}\n{}: {value}",
        selector.category_field, selector.value_field
    ))
}
