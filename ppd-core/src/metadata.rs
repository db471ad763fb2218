//! Metadata panel content for the selected countries.

use crate::format::{format_key, format_value};
use crate::record::{CountryRecord, COUNTRY_ID_KEY, COUNTRY_KEY};

/// Text shown when the selection has no matching records.
pub const NO_DATA_TEXT: &str = "No data available";

/// What the metadata panel shows. Replaces the previous panel wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataPanel {
    /// One block per selected country, in filtered order.
    Countries(Vec<CountryBlock>),
    /// Placeholder for an empty selection.
    NoData,
}

impl Default for MetadataPanel {
    fn default() -> Self {
        MetadataPanel::Countries(Vec::new())
    }
}

/// Heading plus one line per displayed attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryBlock {
    pub heading: String,
    pub lines: Vec<MetadataLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetadataLine {
    /// `TOTAL PLASTIC WASTE MT`
    pub label: String,
    /// `59.08`
    pub value: String,
}

impl MetadataLine {
    /// `LABEL: value`, as rendered in the panel.
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// Build the panel for the filtered records.
///
/// Every attribute except `country` and `country_id` becomes a line, in the
/// record's source key order.
pub fn build_metadata_panel(records: &[&CountryRecord]) -> MetadataPanel {
    if records.is_empty() {
        return MetadataPanel::NoData;
    }

    let blocks = records
        .iter()
        .map(|record| CountryBlock {
            heading: record.country().to_string(),
            lines: record
                .attributes()
                .filter(|(key, _)| *key != COUNTRY_ID_KEY && *key != COUNTRY_KEY)
                .map(|(key, value)| MetadataLine {
                    label: format_key(key),
                    value: format_value(value),
                })
                .collect(),
        })
        .collect();

    MetadataPanel::Countries(blocks)
}
