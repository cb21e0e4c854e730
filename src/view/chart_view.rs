//! The chart lifecycle component.
//!
//! `ChartView` is the only stateful piece of the crate: it watches its inputs
//! (dataset, field selectors, truncation toggle) and keeps exactly one live
//! engine chart consistent with them. Every input change runs the same
//! synchronous transition: dispose the previous chart, then derive and create
//! the next one. The underlying engines do not support rebinding axes on a
//! live instance, so a full rebuild is the only way to guarantee
//! axis/category consistency.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{FieldSelector, Record, Viewport, derive_axes, truncation};
use crate::engine::{ChartEngine, ChartSpec, ContainerId, RenderedChart, SeriesStyle};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionConfig;
use crate::view::TruncationControl;

/// What the host page should show for this view right now.
///
/// Rendering errors never propagate out of the view; they surface here as
/// placeholder states instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartStatus {
    Unmounted,
    Rendered { records_shown: usize },
    /// Mounted over an empty dataset; the host renders a "no data"
    /// placeholder instead of a chart.
    NoData,
    /// Mounted but the chart could not be built; the host renders a
    /// "chart unavailable" affordance.
    Unavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
struct ChartInputs {
    records: Vec<Record>,
    selector: FieldSelector,
}

/// One interactive chart bound to one container.
///
/// State machine: `Unmounted -> Mounted` on [`mount`](Self::mount),
/// `Mounted -> Mounted` on any input change (dispose + create),
/// `Mounted -> Unmounted` on [`dispose`](Self::dispose). Calling an update
/// method while unmounted fails with [`ChartError::NotMounted`].
pub struct ChartView<E: ChartEngine> {
    engine: E,
    container: ContainerId,
    viewport: Viewport,
    interaction: InteractionConfig,
    series: SeriesStyle,
    inputs: Option<ChartInputs>,
    chart: Option<E::Chart>,
    truncate: bool,
    status: ChartStatus,
}

impl<E: ChartEngine> ChartView<E> {
    #[must_use]
    pub fn new(engine: E, container: ContainerId) -> Self {
        Self {
            engine,
            container,
            viewport: Viewport::new(800, 600),
            interaction: InteractionConfig::default(),
            series: SeriesStyle::default(),
            inputs: None,
            chart: None,
            truncate: false,
            status: ChartStatus::Unmounted,
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: InteractionConfig) -> Self {
        self.interaction = interaction;
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesStyle) -> Self {
        self.series = series;
        self
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    #[must_use]
    pub fn status(&self) -> &ChartStatus {
        &self.status
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inputs.is_some()
    }

    #[must_use]
    pub fn truncation_enabled(&self) -> bool {
        self.truncate
    }

    /// The toggle control the host should render next to the chart.
    #[must_use]
    pub fn truncation_control(&self) -> TruncationControl {
        TruncationControl::for_state(self.truncate)
    }

    /// The live chart handle, when one exists. Read-only access; the view
    /// keeps exclusive ownership.
    #[must_use]
    pub fn chart(&self) -> Option<&E::Chart> {
        self.chart.as_ref()
    }

    #[must_use]
    pub fn chart_mut(&mut self) -> Option<&mut E::Chart> {
        self.chart.as_mut()
    }

    /// Mounts the view over a dataset, creating the first chart.
    ///
    /// Mounting an already-mounted view rebuilds in place, preserving the
    /// one-chart-per-container invariant.
    pub fn mount(&mut self, records: Vec<Record>, selector: FieldSelector) {
        self.inputs = Some(ChartInputs { records, selector });
        self.rebuild();
    }

    /// Replaces the dataset and rebuilds.
    pub fn set_dataset(&mut self, records: Vec<Record>) -> ChartResult<()> {
        self.inputs_mut()?.records = records;
        self.rebuild();
        Ok(())
    }

    pub fn set_category_field(&mut self, field: impl Into<String>) -> ChartResult<()> {
        self.inputs_mut()?.selector.category_field = field.into();
        self.rebuild();
        Ok(())
    }

    pub fn set_value_field(&mut self, field: impl Into<String>) -> ChartResult<()> {
        self.inputs_mut()?.selector.value_field = field.into();
        self.rebuild();
        Ok(())
    }

    /// Flips the truncation toggle and rebuilds.
    pub fn toggle_truncation(&mut self) -> ChartResult<()> {
        if self.inputs.is_none() {
            return Err(ChartError::NotMounted);
        }
        self.truncate = !self.truncate;
        self.rebuild();
        Ok(())
    }

    /// Releases the live chart and returns to `Unmounted`. Idempotent; safe
    /// on every teardown path.
    pub fn dispose(&mut self) {
        self.dispose_current();
        self.inputs = None;
        self.status = ChartStatus::Unmounted;
    }

    fn inputs_mut(&mut self) -> ChartResult<&mut ChartInputs> {
        self.inputs.as_mut().ok_or(ChartError::NotMounted)
    }

    /// The lifecycle transition: dispose the previous chart, then derive and
    /// create the next one from current inputs. Disposal is strictly
    /// sequenced before creation; two live charts on one container never
    /// coexist.
    fn rebuild(&mut self) {
        self.dispose_current();

        let Some(inputs) = self.inputs.as_ref() else {
            self.status = ChartStatus::Unmounted;
            return;
        };

        let bounded = truncation::apply(&inputs.records, self.truncate);
        if bounded.is_empty() {
            // A minimum over zero records is undefined; skip axis derivation
            // entirely and show the placeholder.
            self.status = ChartStatus::NoData;
            return;
        }

        let axes = match derive_axes(bounded, &inputs.selector) {
            Ok(axes) => axes,
            Err(err) => {
                warn!(container = %self.container, error = %err, "axis derivation failed");
                self.status = ChartStatus::Unavailable {
                    reason: err.to_string(),
                };
                return;
            }
        };

        let spec = ChartSpec::new(
            self.container.clone(),
            self.viewport,
            bounded.to_vec(),
            inputs.selector.clone(),
            axes,
        )
        .with_series(self.series)
        .with_interaction(self.interaction);

        match self.engine.create(&spec) {
            Ok(chart) => {
                debug!(
                    container = %self.container,
                    records_shown = chart.records_shown(),
                    truncated = truncation::is_bounded(inputs.records.len(), self.truncate),
                    "chart rebuilt"
                );
                self.status = ChartStatus::Rendered {
                    records_shown: chart.records_shown(),
                };
                self.chart = Some(chart);
            }
            Err(err) => {
                warn!(container = %self.container, error = %err, "engine creation failed");
                self.status = ChartStatus::Unavailable {
                    reason: err.to_string(),
                };
            }
        }
    }

    fn dispose_current(&mut self) {
        if let Some(mut chart) = self.chart.take() {
            // A noisy release must not leave stale state behind; log and
            // carry on so the next mount proceeds.
            if let Err(err) = chart.dispose() {
                warn!(container = %self.container, error = %err, "chart disposal failed");
            }
        }
    }
}

impl<E: ChartEngine> Drop for ChartView<E> {
    fn drop(&mut self) {
        self.dispose_current();
    }
}
