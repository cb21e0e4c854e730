pub mod axis;
pub mod scale;
pub mod truncation;
pub mod types;

pub use axis::{AxisConfig, CategoryAxisConfig, ValueAxisConfig, derive_axes};
pub use scale::{CategoryBandScale, LinearScale};
pub use types::{FieldSelector, FieldValue, Record, Viewport, records_from_json};
