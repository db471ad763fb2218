use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Key of the display name / unique key of a record.
pub const COUNTRY_KEY: &str = "country";
/// Key of the numeric id, never shown in the metadata panel.
pub const COUNTRY_ID_KEY: &str = "country_id";
pub const TOTAL_PLASTIC_WASTE_KEY: &str = "total_plastic_waste_mt";
pub const RECYCLING_RATE_KEY: &str = "recycling_rate";
pub const PER_CAPITA_WASTE_KEY: &str = "per_capita_waste_kg";
pub const COASTAL_WASTE_RISK_KEY: &str = "coastal_waste_risk";

/// One country's row in the plastic pollution dataset.
///
/// The full attribute map is kept in source key order so the metadata panel
/// can list every attribute, including ones this crate has no accessor for
/// (e.g. `main_sources`). Named fields are read through typed accessors.
/// Records are never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    country: String,
    attributes: Map<String, Value>,
}

impl CountryRecord {
    /// Build a record from a JSON object.
    ///
    /// A missing `country` reads as the empty string; a non-string one is
    /// rendered with its JSON text (e.g. `42`).
    pub fn from_attributes(attributes: Map<String, Value>) -> Self {
        let country = match attributes.get(COUNTRY_KEY) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Self {
            country,
            attributes,
        }
    }

    /// Display name, also the value of the record's dropdown option.
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn country_id(&self) -> Option<&Value> {
        self.attributes.get(COUNTRY_ID_KEY)
    }

    /// Total plastic waste in million tonnes.
    pub fn total_plastic_waste_mt(&self) -> Option<f64> {
        self.number(TOTAL_PLASTIC_WASTE_KEY)
    }

    /// Recycling rate as a percentage.
    pub fn recycling_rate(&self) -> Option<f64> {
        self.number(RECYCLING_RATE_KEY)
    }

    pub fn per_capita_waste_kg(&self) -> Option<f64> {
        self.number(PER_CAPITA_WASTE_KEY)
    }

    /// Raw coastal risk category as it appears in the data.
    pub fn coastal_waste_risk(&self) -> Option<String> {
        match self.attributes.get(COASTAL_WASTE_RISK_KEY) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }

    pub fn coastal_risk(&self) -> CoastalRisk {
        match self.attributes.get(COASTAL_WASTE_RISK_KEY) {
            Some(Value::String(s)) => CoastalRisk::from_label(s),
            _ => CoastalRisk::Unrecognized,
        }
    }

    /// All attributes in source order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Read a numeric attribute.
    ///
    /// Numeric strings (`"12.5"`) are accepted the way the charting library
    /// coerces them. Anything else is `None` and plots as a gap.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.attributes.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

impl Serialize for CountryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.attributes.serialize(serializer)
    }
}

/// Coastal waste risk category.
///
/// Categories are matched exactly; anything else (including a missing
/// value) is `Unrecognized` and still plotted, at ordinal 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoastalRisk {
    Low,
    Medium,
    High,
    VeryHigh,
    Unrecognized,
}

impl CoastalRisk {
    /// Tick positions and labels for the coastal risk y-axis.
    pub const TICK_VALUES: [u8; 4] = [1, 2, 3, 4];
    pub const TICK_LABELS: [&'static str; 4] = ["Low", "Medium", "High", "Very High"];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Low" => CoastalRisk::Low,
            "Medium" => CoastalRisk::Medium,
            "High" => CoastalRisk::High,
            "Very_High" => CoastalRisk::VeryHigh,
            _ => CoastalRisk::Unrecognized,
        }
    }

    /// Position on the risk axis: Low=1 .. Very_High=4, unrecognized=0.
    pub fn ordinal(self) -> u8 {
        match self {
            CoastalRisk::Low => 1,
            CoastalRisk::Medium => 2,
            CoastalRisk::High => 3,
            CoastalRisk::VeryHigh => 4,
            CoastalRisk::Unrecognized => 0,
        }
    }
}

#[cfg(test)]
pub(crate) fn record(value: Value) -> CountryRecord {
    match value {
        Value::Object(map) => CountryRecord::from_attributes(map),
        other => panic!("test record must be an object, got {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coastal_ordinal_mapping() {
        assert_eq!(CoastalRisk::from_label("Low").ordinal(), 1);
        assert_eq!(CoastalRisk::from_label("Medium").ordinal(), 2);
        assert_eq!(CoastalRisk::from_label("High").ordinal(), 3);
        assert_eq!(CoastalRisk::from_label("Very_High").ordinal(), 4);
        assert_eq!(CoastalRisk::from_label("Unknown").ordinal(), 0);
        // Exact match only
        assert_eq!(CoastalRisk::from_label("Very High").ordinal(), 0);
        assert_eq!(CoastalRisk::from_label("low").ordinal(), 0);
    }

    #[test]
    fn test_accessors() {
        let r = record(json!({
            "country_id": 7,
            "country": "Indonesia",
            "total_plastic_waste_mt": 9.13,
            "recycling_rate": 7,
            "per_capita_waste_kg": "33.7",
            "coastal_waste_risk": "Very_High"
        }));
        assert_eq!(r.country(), "Indonesia");
        assert_eq!(r.country_id(), Some(&json!(7)));
        assert_eq!(r.total_plastic_waste_mt(), Some(9.13));
        assert_eq!(r.recycling_rate(), Some(7.0));
        assert_eq!(r.per_capita_waste_kg(), Some(33.7));
        assert_eq!(r.coastal_risk(), CoastalRisk::VeryHigh);
        assert_eq!(r.coastal_waste_risk().as_deref(), Some("Very_High"));
    }

    #[test]
    fn test_missing_fields() {
        let r = record(json!({ "recycling_rate": "n/a" }));
        assert_eq!(r.country(), "");
        assert_eq!(r.recycling_rate(), None);
        assert_eq!(r.total_plastic_waste_mt(), None);
        assert_eq!(r.coastal_waste_risk(), None);
        assert_eq!(r.coastal_risk(), CoastalRisk::Unrecognized);
    }

    #[test]
    fn test_attributes_keep_source_order() {
        let r = record(json!({ "zeta": 1, "country": "A", "alpha": 2 }));
        let keys: Vec<&str> = r.attributes().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "country", "alpha"]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let r = record(json!({ "country": "A", "recycling_rate": 10 }));
        let out = serde_json::to_value(&r).unwrap();
        assert_eq!(out, json!({ "country": "A", "recycling_rate": 10 }));
    }
}
