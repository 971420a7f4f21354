//! Dataset loader — builds an [`ElementTable`] from a JSON document.
//!
//! Three document shapes are accepted:
//!
//! 1. a bare array of record objects;
//! 2. an object whose `elements` field holds that array (the upstream
//!    `PeriodicTableJSON.json` layout);
//! 3. any other object with exactly one array-valued field.
//!
//! Each record is mapped through [`schema::map_record`](crate::schema::map_record)
//! and the resulting table must have unique atomic numbers. Loading has no
//! side effects beyond reading the source, so repeated loads of the same
//! source produce equal tables.

use crate::error::DataError;
use crate::schema;
use crate::types::{ElementRecord, ElementTable};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// The dataset shipped inside the binary.
const BUNDLED_DATASET: &str = include_str!("../data/PeriodicTableJSON.json");

/// Field holding the record array in the upstream document layout.
const ELEMENTS_FIELD: &str = "elements";

impl ElementTable {
    /// Parse the dataset compiled into the binary.
    pub fn bundled() -> Result<Self, DataError> {
        let table = Self::from_json_str(BUNDLED_DATASET)?;
        tracing::debug!(records = table.len(), "loader: bundled dataset loaded");
        Ok(table)
    }

    /// Read and parse a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&src)?;
        tracing::debug!(
            path = %path.display(),
            records = table.len(),
            "loader: dataset loaded from file"
        );
        Ok(table)
    }

    /// Parse an in-memory JSON document.
    pub fn from_json_str(src: &str) -> Result<Self, DataError> {
        let doc: Value = serde_json::from_str(src)?;
        let rows = record_array(&doc)?;

        let records = rows
            .iter()
            .enumerate()
            .map(|(index, row)| match row {
                Value::Object(object) => schema::map_record(index, object),
                other => Err(DataError::record(
                    index,
                    format!("expected an object, found {}", json_kind(other)),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    /// Build a table from already-canonical records, keeping their order.
    ///
    /// Fails if two records share an atomic number.
    pub fn from_records(records: Vec<ElementRecord>) -> Result<Self, DataError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if !seen.insert(record.atomic_number) {
                return Err(DataError::record(
                    index,
                    format!("duplicate atomic number {}", record.atomic_number),
                ));
            }
        }
        if records.is_empty() {
            tracing::warn!("loader: dataset contains no element records");
        }
        Ok(Self::new_unchecked(records))
    }
}

/// Locate the record array inside `doc`.
fn record_array(doc: &Value) -> Result<&Vec<Value>, DataError> {
    match doc {
        Value::Array(rows) => Ok(rows),
        Value::Object(fields) => {
            if let Some(value) = fields.get(ELEMENTS_FIELD) {
                return value.as_array().ok_or_else(|| {
                    DataError::Shape(format!(
                        "`{ELEMENTS_FIELD}` must be an array, found {}",
                        json_kind(value)
                    ))
                });
            }
            let mut arrays = fields.iter().filter(|(_, v)| v.is_array());
            match (arrays.next(), arrays.next()) {
                (Some((_, Value::Array(rows))), None) => Ok(rows),
                (None, _) => Err(DataError::Shape(
                    "object has no array of element records".to_string(),
                )),
                _ => Err(DataError::Shape(format!(
                    "object has several array fields and no `{ELEMENTS_FIELD}` field"
                ))),
            }
        }
        other => Err(DataError::Shape(format!(
            "expected an array or an object, found {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
