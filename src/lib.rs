//! vizor-chart: chart rendering lifecycle core for the vizor data explorer.
//!
//! Takes an in-memory dataset plus two field selectors (category, value) and
//! maintains one interactive column chart bound to one container, including
//! the user-visible cardinality-limiting policy for large query results.
//! Pure policy and derivation live in [`core`]; rendering backends implement
//! the [`engine`] contract; [`view::ChartView`] is the single stateful
//! component tying them together.

pub mod core;
pub mod engine;
pub mod error;
pub mod interaction;
pub mod telemetry;
pub mod view;

pub use engine::{ChartEngine, ChartSpec, ContainerId, RenderedChart};
pub use error::{ChartError, ChartResult};
pub use view::{ChartStatus, ChartView, TruncationControl};
