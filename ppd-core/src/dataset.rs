//! Immutable, shape-checked dataset store.

use crate::error::{DashboardError, MalformedDataError};
use crate::record::CountryRecord;
use serde_json::Value;
use std::rc::Rc;

/// The loaded country records.
///
/// Cheaply cloneable (via `Rc`) and read-only, suitable for sharing across
/// Dioxus components in single-threaded WASM. The only way to build one is
/// through the loader functions below, which guarantee it is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Rc<[CountryRecord]>,
}

impl Dataset {
    /// Parse a JSON document into a dataset.
    ///
    /// Fails with [`crate::LoadError::Parse`] if the text is not JSON and with
    /// [`MalformedDataError`] if it is not a non-empty array of objects.
    pub fn from_json_str(text: &str) -> Result<Self, DashboardError> {
        let value: Value = serde_json::from_str(text).map_err(crate::LoadError::from)?;
        Ok(Self::from_value(value)?)
    }

    /// Shape-check an already parsed JSON value.
    ///
    /// Only the array shape is checked. Records are otherwise taken as-is.
    pub fn from_value(value: Value) -> Result<Self, MalformedDataError> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(MalformedDataError::NotAnArray {
                    found: json_kind(&other),
                })
            }
        };
        if items.is_empty() {
            return Err(MalformedDataError::Empty);
        }

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(CountryRecord::from_attributes(map)),
                _ => Err(MalformedDataError::RecordNotObject { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("[PPD] dataset: Loaded {} country records", records.len());
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true for a dataset built by the loader.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record in dataset order. Never fails, the store is non-empty.
    pub fn first(&self) -> &CountryRecord {
        &self.records[0]
    }

    /// Dropdown option values in dataset order. Duplicates are kept.
    pub fn country_names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.country().to_string()).collect()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    const SAMPLE_JSON: &str =
        include_str!("../../chart-plastic-pollution/public/data/plastic_pollution.json");

    #[test]
    fn test_loads_sample_dataset() {
        let dataset = Dataset::from_json_str(SAMPLE_JSON).unwrap();
        assert_eq!(dataset.len(), 10);
        assert_eq!(dataset.first().country(), "China");
        assert_eq!(dataset.country_names()[1], "United States");
    }

    #[test]
    fn test_object_payload_is_malformed() {
        let err = Dataset::from_json_str("{}").unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Malformed(MalformedDataError::NotAnArray { found: "an object" })
        ));
    }

    #[test]
    fn test_empty_array_is_malformed() {
        let err = Dataset::from_json_str("[]").unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Malformed(MalformedDataError::Empty)
        ));
    }

    #[test]
    fn test_null_payload_is_malformed() {
        let err = Dataset::from_json_str("null").unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Malformed(MalformedDataError::NotAnArray { found: "null" })
        ));
    }

    #[test]
    fn test_non_object_record_is_malformed() {
        let err = Dataset::from_json_str(r#"[{"country": "A"}, 3]"#).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Malformed(MalformedDataError::RecordNotObject { index: 1 })
        ));
    }

    #[test]
    fn test_invalid_json_is_load_error() {
        let err = Dataset::from_json_str("<html>404</html>").unwrap_err();
        assert!(matches!(err, DashboardError::Load(LoadError::Parse(_))));
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let dataset =
            Dataset::from_json_str(r#"[{"country": "A"}, {"country": "A"}, {"country": "B"}]"#)
                .unwrap();
        assert_eq!(dataset.country_names(), vec!["A", "A", "B"]);
    }

    #[test]
    fn test_clone_shares_records() {
        let dataset = Dataset::from_json_str(SAMPLE_JSON).unwrap();
        let other = dataset.clone();
        assert!(std::ptr::eq(dataset.records(), other.records()));
    }
}
