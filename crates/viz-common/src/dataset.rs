//! Named gridded fields of a glacier dataset.
//!
//! A [`Dataset`] is a bag of named [`Field`]s (coordinate axes, elevation,
//! masks) plus the projection descriptor of its x/y coordinates. Values are
//! stored row-major: for a `[ny, nx]` field, index `row * nx + col`.

use crate::error::{DataError, DataResult};
use crate::extent::AxisRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An n-dimensional array of values with its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawField")]
pub struct Field {
    shape: Vec<usize>,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawField {
    shape: Vec<usize>,
    values: Vec<f64>,
}

impl TryFrom<RawField> for Field {
    type Error = DataError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        Field::new(raw.shape, raw.values)
    }
}

impl Field {
    /// Create a field, checking that the shape matches the number of values.
    pub fn new(shape: Vec<usize>, values: Vec<f64>) -> DataResult<Self> {
        let expected: usize = shape.iter().product();
        if expected != values.len() {
            return Err(DataError::InvalidShape {
                shape,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { shape, values })
    }

    /// A one-dimensional field.
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self {
            shape: vec![values.len()],
            values,
        }
    }

    /// A two-dimensional `[rows, cols]` field.
    pub fn grid(rows: usize, cols: usize, values: Vec<f64>) -> DataResult<Self> {
        Self::new(vec![rows, cols], values)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `(row, col)` of a two-dimensional field.
    pub fn get2(&self, row: usize, col: usize) -> Option<f64> {
        match self.shape.as_slice() {
            [rows, cols] if row < *rows && col < *cols => Some(self.values[row * cols + col]),
            _ => None,
        }
    }

    /// Finite minimum and maximum, if any.
    pub fn range(&self) -> Option<AxisRange> {
        AxisRange::from_values(&self.values)
    }
}

/// Named fields plus the projection of the x/y coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Projection descriptor, e.g. `+proj=tmerc +lat_0=0 +lon_0=10 ...`
    srs: String,

    #[serde(default)]
    fields: BTreeMap<String, Field>,
}

impl Dataset {
    pub fn new(srs: impl Into<String>) -> Self {
        Self {
            srs: srs.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insert.
    pub fn with_field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.insert_field(name, field);
        self
    }

    pub fn insert_field(&mut self, name: impl Into<String>, field: Field) {
        self.fields.insert(name.into(), field);
    }

    pub fn srs(&self) -> &str {
        &self.srs
    }

    pub fn field(&self, name: &str) -> DataResult<&Field> {
        self.fields
            .get(name)
            .ok_or_else(|| DataError::MissingField(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Finite range of a named field.
    pub fn range(&self, name: &str) -> DataResult<AxisRange> {
        self.field(name)?
            .range()
            .ok_or_else(|| DataError::NoFiniteValues(name.to_string()))
    }

    /// Load a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_shape_checked() {
        let err = Field::grid(2, 3, vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            DataError::InvalidShape {
                shape: vec![2, 3],
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_get2_row_major() {
        let field = Field::grid(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(field.get2(1, 0), Some(3.0));
        assert_eq!(field.get2(0, 2), Some(2.0));
        assert_eq!(field.get2(2, 0), None);
    }

    #[test]
    fn test_missing_field() {
        let dataset = Dataset::new("EPSG:4326");
        assert_eq!(
            dataset.field("glacier_ext").unwrap_err(),
            DataError::MissingField("glacier_ext".to_string())
        );
    }

    #[test]
    fn test_deserialize_rejects_bad_shape() {
        let json = r#"{"srs": "EPSG:4326", "fields": {"x": {"shape": [3], "values": [1.0, 2.0]}}}"#;
        assert!(Dataset::from_json(json).is_err());
    }
}
