//! Shipping method model.
//!
//! A method is a carrier service for one destination zone with a static
//! transit profile. Which methods exist is decided upstream; this crate
//! only receives the records matching the buyer's country.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::MetaobjectRecord;
use crate::error::{DespatchError, DespatchResult};

/// Method type shown with subdued styling at checkout.
pub const STANDARD_METHOD_TYPE: &str = "Standard";

/// A shipping method's transit profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    /// Method name. Matches the checkout's shipping option code.
    pub name: String,
    /// Fewest transit days.
    pub transit_min: u32,
    /// Most transit days. Callers keep `transit_min <= transit_max`.
    pub transit_max: u32,
    /// Destination country ISO code.
    pub iso_code: String,
    /// Service tier (e.g. "Standard", "Express").
    #[serde(rename = "type", default)]
    pub method_type: String,
}

impl ShippingMethod {
    /// Creates a method with the given transit range.
    pub fn new(name: impl Into<String>, transit_min: u32, transit_max: u32) -> Self {
        Self {
            name: name.into(),
            transit_min,
            transit_max,
            iso_code: String::new(),
            method_type: String::new(),
        }
    }

    /// Sets the destination ISO code.
    pub fn with_iso_code(mut self, iso_code: impl Into<String>) -> Self {
        self.iso_code = iso_code.into();
        self
    }

    /// Sets the method type.
    pub fn with_type(mut self, method_type: impl Into<String>) -> Self {
        self.method_type = method_type.into();
        self
    }

    /// Whether this is the standard (non-expedited) service.
    pub fn is_standard(&self) -> bool {
        self.method_type == STANDARD_METHOD_TYPE
    }

    /// Parses a method from a metaobject record.
    ///
    /// `name`, `transit_min` and `transit_max` are required.
    pub fn from_record(record: &MetaobjectRecord) -> DespatchResult<Self> {
        let name = required(record, "name")?;
        let transit_min = parse_days(record, "transit_min")?;
        let transit_max = parse_days(record, "transit_max")?;

        Ok(Self {
            name: name.to_string(),
            transit_min,
            transit_max,
            iso_code: record.get("iso_code").unwrap_or_default().to_string(),
            method_type: record.get("type").unwrap_or_default().to_string(),
        })
    }
}

fn required<'a>(record: &'a MetaobjectRecord, key: &str) -> DespatchResult<&'a str> {
    record
        .get(key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DespatchError::MissingField {
            key: key.to_string(),
        })
}

fn parse_days(record: &MetaobjectRecord, key: &str) -> DespatchResult<u32> {
    let value = required(record, key)?;
    value
        .parse()
        .map_err(|e| DespatchError::invalid_field(key, value, e))
}

/// Selects the methods serving a destination country.
///
/// A record matches when any of its field values equals `iso_code`.
/// Matching records that cannot be parsed are skipped.
pub fn filter_by_iso_code(records: &[MetaobjectRecord], iso_code: &str) -> Vec<ShippingMethod> {
    records
        .iter()
        .filter(|r| r.has_value(iso_code))
        .filter_map(|r| match ShippingMethod::from_record(r) {
            Ok(method) => Some(method),
            Err(e) => {
                warn!(handle = %r.handle, error = %e, "skipping malformed shipping method");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(handle: &str, name: &str, min: &str, max: &str, iso: &str) -> MetaobjectRecord {
        MetaobjectRecord::new(handle)
            .with_field("name", name)
            .with_field("transit_min", min)
            .with_field("transit_max", max)
            .with_field("iso_code", iso)
            .with_field("type", "Express")
    }

    #[test]
    fn test_method_builder() {
        let m = ShippingMethod::new("Royal Mail 48", 2, 3)
            .with_iso_code("GB")
            .with_type("Standard");
        assert_eq!(m.transit_min, 2);
        assert_eq!(m.transit_max, 3);
        assert!(m.is_standard());
    }

    #[test]
    fn test_from_record() {
        let m = ShippingMethod::from_record(&record("dpd", "DPD Next Day", "1", "1", "GB")).unwrap();
        assert_eq!(m.name, "DPD Next Day");
        assert_eq!(m.transit_min, 1);
        assert_eq!(m.iso_code, "GB");
        assert_eq!(m.method_type, "Express");
        assert!(!m.is_standard());
    }

    #[test]
    fn test_from_record_errors() {
        let missing = MetaobjectRecord::new("x").with_field("name", "X");
        assert!(matches!(
            ShippingMethod::from_record(&missing),
            Err(DespatchError::MissingField { key }) if key == "transit_min"
        ));

        let bad = record("x", "X", "one", "2", "GB");
        assert!(matches!(
            ShippingMethod::from_record(&bad),
            Err(DespatchError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_filter_by_iso_code() {
        let records = vec![
            record("dpd-gb", "DPD", "1", "1", "GB"),
            record("dpd-fr", "DPD EU", "2", "4", "FR"),
            record("broken-gb", "Broken", "x", "1", "GB"),
            record("rm-gb", "Royal Mail", "2", "3", "GB"),
        ];

        let methods = filter_by_iso_code(&records, "GB");
        let names: Vec<&str> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["DPD", "Royal Mail"]);

        assert!(filter_by_iso_code(&records, "US").is_empty());
    }

    #[test]
    fn test_serde_type_field() {
        let m = ShippingMethod::new("DPD", 1, 1).with_type("Express");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["type"], "Express");
        assert_eq!(json["transitMin"], 1);
    }
}
