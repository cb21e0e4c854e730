use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{AxisConfig, FieldSelector, Record, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionConfig;

/// Stable identifier of the mounting surface a chart binds to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(String);

impl ContainerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Column series presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub fill_opacity: f64,
    pub stroke_width_px: f64,
    pub tooltips_enabled: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            fill_opacity: 0.8,
            stroke_width_px: 0.0,
            tooltips_enabled: true,
        }
    }
}

/// Fully materialized input for one engine instantiation.
///
/// The view assembles a spec from already-bounded records and derived axes;
/// engines consume it read-only. Serializable so hosts can snapshot or replay
/// a chart setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub container: ContainerId,
    pub viewport: Viewport,
    pub records: Vec<Record>,
    pub selector: FieldSelector,
    pub axes: AxisConfig,
    #[serde(default)]
    pub series: SeriesStyle,
    #[serde(default)]
    pub interaction: InteractionConfig,
}

impl ChartSpec {
    #[must_use]
    pub fn new(
        container: ContainerId,
        viewport: Viewport,
        records: Vec<Record>,
        selector: FieldSelector,
        axes: AxisConfig,
    ) -> Self {
        Self {
            container,
            viewport,
            records,
            selector,
            axes,
            series: SeriesStyle::default(),
            interaction: InteractionConfig::default(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesStyle) -> Self {
        self.series = series;
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: InteractionConfig) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidData(format!(
                "invalid viewport size: width={}, height={}",
                self.viewport.width, self.viewport.height
            )));
        }
        if self.records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        if self.axes.category.ticks.is_empty() {
            return Err(ChartError::InvalidData(
                "axis config carries no category ticks".to_owned(),
            ));
        }
        Ok(())
    }
}
