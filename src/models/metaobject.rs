//! Merchant-managed metaobject records.
//!
//! Shop configuration and shipping methods arrive as generic records of
//! `{ key, value }` string pairs with snake_case keys. Typed models are
//! built from these by [`ShippingConfig::from_fields`](super::ShippingConfig::from_fields)
//! and [`ShippingMethod::from_record`](super::ShippingMethod::from_record).

use serde::{Deserialize, Serialize};

/// A single `{ key, value }` pair of a metaobject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaobjectField {
    pub key: String,
    pub value: String,
}

impl MetaobjectField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The key in camelCase (`shipping_cutoff` → `shippingCutoff`).
    pub fn camel_key(&self) -> String {
        to_camel_case(&self.key)
    }
}

/// A metaobject record (one config entry or one shipping method).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaobjectRecord {
    /// Record handle.
    #[serde(default)]
    pub handle: String,
    /// Record fields.
    #[serde(default)]
    pub fields: Vec<MetaobjectField>,
}

impl MetaobjectRecord {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(MetaobjectField::new(key, value));
        self
    }

    /// Looks up a field value by key, accepting snake_case or camelCase.
    pub fn get(&self, key: &str) -> Option<&str> {
        let wanted = to_camel_case(key);
        self.fields
            .iter()
            .find(|f| f.camel_key() == wanted)
            .map(|f| f.value.as_str())
    }

    /// Whether any field carries exactly this value.
    pub fn has_value(&self, value: &str) -> bool {
        self.fields.iter().any(|f| f.value == value)
    }
}

/// Converts a snake_case key to camelCase.
///
/// Only an underscore followed by a lowercase ASCII letter is folded,
/// other underscores are kept.
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("shipping_cutoff"), "shippingCutoff");
        assert_eq!(to_camel_case("shipping_non_ship_days"), "shippingNonShipDays");
        assert_eq!(to_camel_case("transitMin"), "transitMin");
        assert_eq!(to_camel_case("trailing_"), "trailing_");
        assert_eq!(to_camel_case("digit_1"), "digit_1");
    }

    #[test]
    fn test_record_lookup_either_case() {
        let rec = MetaobjectRecord::new("dpd-gb")
            .with_field("transit_min", "1")
            .with_field("isoCode", "GB");

        assert_eq!(rec.get("transit_min"), Some("1"));
        assert_eq!(rec.get("transitMin"), Some("1"));
        assert_eq!(rec.get("iso_code"), Some("GB"));
        assert_eq!(rec.get("name"), None);
        assert!(rec.has_value("GB"));
        assert!(!rec.has_value("FR"));
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{"handle":"cfg","type":"shipping_config","fields":[{"key":"shipping_cutoff","value":"1400"}]}"#;
        let rec: MetaobjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.handle, "cfg");
        assert_eq!(rec.get("shipping_cutoff"), Some("1400"));
    }
}
