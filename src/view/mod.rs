mod chart_view;
mod controls;

pub use chart_view::{ChartStatus, ChartView};
pub use controls::TruncationControl;
