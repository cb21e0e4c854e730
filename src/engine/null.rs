//! Counting engine backend used by tests and headless lifecycle checks.
//!
//! It validates specs like a real backend, tracks acquisitions and releases
//! through a shared probe, and can inject failures at two points the
//! lifecycle contract cares about: partway through attaching interaction
//! affordances during creation, and during disposal.

use std::cell::Cell;
use std::rc::Rc;

use crate::engine::{ChartEngine, ChartSpec, RenderedChart};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionConfig;

/// Shared counters observing one [`NullEngine`] and every chart it created.
///
/// Counters live behind `Rc<Cell<_>>` so a test can keep reading them after
/// handing the engine to a view; the whole model is single-threaded.
#[derive(Debug, Clone, Default)]
pub struct EngineProbe {
    created: Rc<Cell<usize>>,
    disposed: Rc<Cell<usize>>,
    affordances_attached: Rc<Cell<usize>>,
    affordances_released: Rc<Cell<usize>>,
}

impl EngineProbe {
    #[must_use]
    pub fn created(&self) -> usize {
        self.created.get()
    }

    #[must_use]
    pub fn disposed(&self) -> usize {
        self.disposed.get()
    }

    /// Charts currently alive: creations minus disposals.
    #[must_use]
    pub fn live(&self) -> usize {
        self.created.get() - self.disposed.get()
    }

    #[must_use]
    pub fn affordances_attached(&self) -> usize {
        self.affordances_attached.get()
    }

    #[must_use]
    pub fn affordances_released(&self) -> usize {
        self.affordances_released.get()
    }

    fn bump(cell: &Rc<Cell<usize>>, by: usize) {
        cell.set(cell.get() + by);
    }
}

#[derive(Debug, Default)]
pub struct NullEngine {
    probe: EngineProbe,
    fail_create_after: Option<usize>,
    fail_next_dispose: bool,
}

impl NullEngine {
    #[must_use]
    pub fn probe(&self) -> EngineProbe {
        self.probe.clone()
    }

    /// Makes the next `create` fail after attaching `attached` affordances.
    ///
    /// The failing create still releases everything it attached, which is
    /// exactly what the scoped-acquisition contract demands of a real
    /// backend. Injection is one-shot.
    pub fn fail_next_create_after(&mut self, attached: usize) {
        self.fail_create_after = Some(attached);
    }

    /// Makes the next created chart fail its first `dispose` call. The
    /// resources still count as released; only the call reports an error.
    pub fn fail_next_dispose(&mut self) {
        self.fail_next_dispose = true;
    }
}

fn affordance_count(interaction: &InteractionConfig) -> usize {
    let mut count = 0;
    if interaction.cursor.enabled {
        count += 1;
    }
    if interaction.wheel != crate::interaction::WheelBehavior::None {
        count += 1;
    }
    if interaction.scrollbar_x {
        count += 1;
    }
    if interaction.scrollbar_y {
        count += 1;
    }
    count + 1 // hover emphasis is always wired
}

impl ChartEngine for NullEngine {
    type Chart = NullChart;

    fn create(&mut self, spec: &ChartSpec) -> ChartResult<Self::Chart> {
        spec.validate()?;

        let planned = affordance_count(&spec.interaction);
        let fail_after = self.fail_create_after.take();
        let mut attached = 0;

        while attached < planned {
            if fail_after == Some(attached) {
                // Partial mount: hand back everything acquired so far.
                EngineProbe::bump(&self.probe.affordances_released, attached);
                return Err(ChartError::Engine(format!(
                    "injected creation failure after {attached} affordances"
                )));
            }
            attached += 1;
            EngineProbe::bump(&self.probe.affordances_attached, 1);
        }

        EngineProbe::bump(&self.probe.created, 1);
        Ok(NullChart {
            records_shown: spec.records.len(),
            category_field: spec.selector.category_field.clone(),
            value_field: spec.selector.value_field.clone(),
            attached,
            disposed: false,
            fail_dispose: std::mem::take(&mut self.fail_next_dispose),
            probe: self.probe.clone(),
        })
    }
}

#[derive(Debug)]
pub struct NullChart {
    records_shown: usize,
    category_field: String,
    value_field: String,
    attached: usize,
    disposed: bool,
    fail_dispose: bool,
    probe: EngineProbe,
}

impl NullChart {
    #[must_use]
    pub fn category_field(&self) -> &str {
        &self.category_field
    }

    #[must_use]
    pub fn value_field(&self) -> &str {
        &self.value_field
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl RenderedChart for NullChart {
    fn records_shown(&self) -> usize {
        self.records_shown
    }

    fn dispose(&mut self) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;
        EngineProbe::bump(&self.probe.disposed, 1);
        EngineProbe::bump(&self.probe.affordances_released, self.attached);

        if std::mem::take(&mut self.fail_dispose) {
            return Err(ChartError::Disposal(
                "injected disposal failure".to_owned(),
            ));
        }
        Ok(())
    }
}
