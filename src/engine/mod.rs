//! Rendering-engine contract and the backends implementing it.
//!
//! A chart engine is a factory for live chart instances. The instance is a
//! foreign resource handle: it wraps rendering surface state that the
//! surrounding code does not manage automatically, so release is an explicit
//! step the owner must drive on every exit path.

mod frame;
mod frame_engine;
mod null;
mod spec;

pub use frame::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};
pub use frame_engine::{FrameChart, FrameEngine};
pub use null::{EngineProbe, NullChart, NullEngine};
pub use spec::{ChartSpec, ContainerId, SeriesStyle};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoChart, CairoEngine};

use crate::error::ChartResult;

/// One live chart bound to a container.
///
/// Exactly one instance may exist per view at any time; the owner disposes
/// the previous instance strictly before creating the next.
pub trait RenderedChart {
    /// Number of records this instance was fed (after truncation).
    fn records_shown(&self) -> usize;

    /// Releases every engine-level resource behind this handle.
    ///
    /// Must release each acquired resource at most once, no matter how many
    /// times it is called.
    fn dispose(&mut self) -> ChartResult<()>;
}

/// Factory contract implemented by every backend.
///
/// `create` either returns a fully constructed chart or nothing: a failure
/// partway through attaching interaction affordances must release whatever
/// it already acquired before returning the error.
pub trait ChartEngine {
    type Chart: RenderedChart;

    fn create(&mut self, spec: &ChartSpec) -> ChartResult<Self::Chart>;
}
