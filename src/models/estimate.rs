//! Estimation results.
//!
//! Each pipeline stage produces an immutable record; nothing is kept
//! between evaluations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Classification;

/// Expected delivery date range (inclusive on both ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    /// Earliest delivery date.
    pub min: NaiveDate,
    /// Latest delivery date.
    pub max: NaiveDate,
}

impl DeliveryWindow {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self { min, max }
    }

    /// Whether the estimate is a single day.
    #[inline]
    pub fn is_single_day(&self) -> bool {
        self.min == self.max
    }
}

/// Display-ready delivery estimate for one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryEstimate {
    /// Lead-in text ("Get them", "Estimated delivery").
    pub prefix: String,
    /// Delivery title ("Tomorrow", "between Monday 5th August and ...").
    pub despatch_date_label: String,
    /// Whether delivery is within the fast window.
    pub fast_delivery: bool,
}

/// Full record of one evaluation, stage by stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub classification: Classification,
    pub despatch_date: NaiveDate,
    pub window: DeliveryWindow,
    pub estimate: DeliveryEstimate,
}

/// Per-method result handed to the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    /// Method name (the checkout's shipping option code).
    pub name: String,
    /// Method type ("Standard", "Express", ...).
    #[serde(rename = "type")]
    pub method_type: String,
    #[serde(flatten)]
    pub estimate: DeliveryEstimate,
}

/// Finds the option for a checkout shipping option code.
pub fn find_option<'a>(options: &'a [ShippingOption], code: &str) -> Option<&'a ShippingOption> {
    options.iter().find(|o| o.name == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str) -> ShippingOption {
        ShippingOption {
            name: name.to_string(),
            method_type: "Express".to_string(),
            estimate: DeliveryEstimate {
                prefix: "Get them".to_string(),
                despatch_date_label: "Tomorrow".to_string(),
                fast_delivery: true,
            },
        }
    }

    #[test]
    fn test_window_single_day() {
        let d = NaiveDate::from_ymd_opt(2024, 8, 5).unwrap();
        let e = NaiveDate::from_ymd_opt(2024, 8, 6).unwrap();
        assert!(DeliveryWindow::new(d, d).is_single_day());
        assert!(!DeliveryWindow::new(d, e).is_single_day());
    }

    #[test]
    fn test_find_option() {
        let options = vec![option("DPD"), option("Royal Mail")];
        assert_eq!(find_option(&options, "Royal Mail").map(|o| o.name.as_str()), Some("Royal Mail"));
        assert!(find_option(&options, "UPS").is_none());
    }

    #[test]
    fn test_option_json_shape() {
        let json = serde_json::to_value(option("DPD")).unwrap();
        assert_eq!(json["name"], "DPD");
        assert_eq!(json["type"], "Express");
        assert_eq!(json["prefix"], "Get them");
        assert_eq!(json["despatchDateLabel"], "Tomorrow");
        assert_eq!(json["fastDelivery"], true);
    }
}
