//! Axis derivation: dataset + field selectors in, axis configuration out.
//!
//! Pure and engine-free so the derivation is testable without instantiating
//! any rendering backend. Validation is eager: a selector that does not
//! resolve on every record fails here, before any engine resource is
//! acquired.

use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{FieldSelector, Record};
use crate::error::{ChartError, ChartResult};

/// Rotation applied to category tick labels so high-cardinality axes stay
/// readable.
pub const CATEGORY_LABEL_ROTATION_DEG: f64 = 270.0;
/// Minimum pixel spacing between category ticks before labels are culled.
pub const CATEGORY_MIN_GRID_DISTANCE_PX: f64 = 30.0;
/// Reserved height for the rotated category labels below the plot area.
pub const CATEGORY_AXIS_MIN_HEIGHT_PX: f64 = 110.0;
/// Reserved width for value labels left of the plot area.
pub const VALUE_AXIS_MIN_WIDTH_PX: f64 = 50.0;

/// Discrete axis: one tick per distinct category value, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxisConfig {
    pub title: String,
    pub ticks: Vec<String>,
    pub label_rotation_deg: f64,
    pub min_grid_distance_px: f64,
    pub min_height_px: f64,
    /// Tooltips are shown per column, never on the axis itself.
    pub axis_tooltip_enabled: bool,
}

/// Continuous numeric axis.
///
/// `min` is the observed data minimum, deliberately not forced to zero: the
/// visual baseline reflects the true data range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisConfig {
    pub title: String,
    pub min: f64,
    pub max: f64,
    pub min_width_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub category: CategoryAxisConfig,
    pub value: ValueAxisConfig,
}

/// Derives both axes from a dataset and its field selectors.
///
/// Fails with [`ChartError::EmptyDataset`] on zero records (a minimum over
/// nothing is undefined; callers render a "no data" placeholder instead),
/// [`ChartError::MissingField`] when either selector does not resolve on some
/// record, and [`ChartError::NonNumericValue`] when a value cell is not a
/// finite number.
///
/// Deterministic and idempotent: identical inputs yield identical configs.
pub fn derive_axes(records: &[Record], selector: &FieldSelector) -> ChartResult<AxisConfig> {
    if records.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let mut ticks: IndexSet<String> = IndexSet::new();
    let mut min = OrderedFloat(f64::INFINITY);
    let mut max = OrderedFloat(f64::NEG_INFINITY);

    for (record_index, record) in records.iter().enumerate() {
        let category = record.get(&selector.category_field).ok_or_else(|| {
            ChartError::MissingField {
                field: selector.category_field.clone(),
                record_index,
            }
        })?;
        ticks.insert(category.to_string());

        let value = record.get(&selector.value_field).ok_or_else(|| {
            ChartError::MissingField {
                field: selector.value_field.clone(),
                record_index,
            }
        })?;
        let value = value
            .as_f64()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ChartError::NonNumericValue {
                field: selector.value_field.clone(),
                record_index,
            })?;

        min = min.min(OrderedFloat(value));
        max = max.max(OrderedFloat(value));
    }

    Ok(AxisConfig {
        category: CategoryAxisConfig {
            title: selector.category_field.clone(),
            ticks: ticks.into_iter().collect(),
            label_rotation_deg: CATEGORY_LABEL_ROTATION_DEG,
            min_grid_distance_px: CATEGORY_MIN_GRID_DISTANCE_PX,
            min_height_px: CATEGORY_AXIS_MIN_HEIGHT_PX,
            axis_tooltip_enabled: false,
        },
        value: ValueAxisConfig {
            title: selector.value_field.clone(),
            min: min.into_inner(),
            max: max.into_inner(),
            min_width_px: VALUE_AXIS_MIN_WIDTH_PX,
        },
    })
}
