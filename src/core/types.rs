use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One scalar cell of a record.
///
/// Query results mix labels and measures freely, so every cell is either a
/// string or a finite number; which one a given field holds is decided per
/// record, not per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Num(f64),
    Str(String),
}

impl FieldValue {
    /// Returns the numeric value, or `None` for string cells.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(value) => Some(*value),
            Self::Str(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Num(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// One row of a dataset: an insertion-ordered field map.
///
/// Field order is preserved so hosts can round-trip rows through JSON without
/// reshuffling columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion, mostly for tests and fixtures.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.to_owned(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a record from one JSON row object.
    ///
    /// Strings and numbers map to [`FieldValue`]; anything else (null, bool,
    /// nested structure) is rejected since the chart has no rendering for it.
    pub fn from_json_object(value: &serde_json::Value) -> ChartResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            ChartError::InvalidData(format!("expected a JSON object row, got {value}"))
        })?;

        let mut fields = IndexMap::with_capacity(object.len());
        for (field, cell) in object {
            let cell = match cell {
                serde_json::Value::String(text) => FieldValue::Str(text.clone()),
                serde_json::Value::Number(number) => {
                    let number = number.as_f64().ok_or_else(|| {
                        ChartError::InvalidData(format!(
                            "field `{field}` holds a non-representable number"
                        ))
                    })?;
                    FieldValue::Num(number)
                }
                other => {
                    return Err(ChartError::InvalidData(format!(
                        "field `{field}` holds unsupported JSON value {other}"
                    )));
                }
            };
            fields.insert(field.clone(), cell);
        }

        Ok(Self { fields })
    }
}

/// Parses a JSON array of row objects into a dataset.
pub fn records_from_json(value: &serde_json::Value) -> ChartResult<Vec<Record>> {
    let rows = value.as_array().ok_or_else(|| {
        ChartError::InvalidData("expected a JSON array of row objects".to_owned())
    })?;

    rows.iter().map(Record::from_json_object).collect()
}

/// The two field names a chart is plotted over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    pub category_field: String,
    pub value_field: String,
}

impl FieldSelector {
    #[must_use]
    pub fn new(category_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            category_field: category_field.into(),
            value_field: value_field.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}
