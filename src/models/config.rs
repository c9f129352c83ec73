//! Shop-wide shipping configuration.
//!
//! Loaded once per evaluation and never mutated. Every field has an
//! explicit default so a partially filled metaobject still produces a
//! usable configuration (fail-open: checkout must never be blocked).
//!
//! # Defaults
//! | Field | Default | Effect |
//! |-------|---------|--------|
//! | `shipping_cutoff` | 2400 | No cutoff: same-day despatch all day |
//! | `prescription_lead_time` | 0 | No extra lead time |
//! | `shipping_non_ship_days` | empty | Only weekends skipped |
//! | `shipping_non_despatch` | empty | Only weekends skipped |

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{to_camel_case, MetaobjectField};
use crate::error::{parse_date, DespatchError, DespatchResult};

/// Cutoff value meaning "never past cutoff".
pub const NO_CUTOFF: u16 = 2400;

/// Longest accepted prescription lead time, in days.
pub const MAX_PRESCRIPTION_LEAD_TIME: u32 = 365;

/// Shipping configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingConfig {
    /// Same-day despatch cutoff as HHMM (e.g. 1400 = 14:00 London time).
    pub shipping_cutoff: u16,
    /// Extra calendar days before a prescription order can despatch.
    pub prescription_lead_time: u32,
    /// Days the carrier does not move parcels.
    pub shipping_non_ship_days: BTreeSet<NaiveDate>,
    /// Days the warehouse does not despatch.
    pub shipping_non_despatch: BTreeSet<NaiveDate>,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            shipping_cutoff: NO_CUTOFF,
            prescription_lead_time: 0,
            shipping_non_ship_days: BTreeSet::new(),
            shipping_non_despatch: BTreeSet::new(),
        }
    }
}

impl ShippingConfig {
    /// Sets the HHMM cutoff.
    pub fn with_cutoff(mut self, hhmm: u16) -> Self {
        self.shipping_cutoff = hhmm;
        self
    }

    /// Sets the prescription lead time in days.
    pub fn with_prescription_lead_time(mut self, days: u32) -> Self {
        self.prescription_lead_time = days;
        self
    }

    /// Adds a non-ship day.
    pub fn with_non_ship_day(mut self, date: NaiveDate) -> Self {
        self.shipping_non_ship_days.insert(date);
        self
    }

    /// Adds a non-despatch day.
    pub fn with_non_despatch_day(mut self, date: NaiveDate) -> Self {
        self.shipping_non_despatch.insert(date);
        self
    }

    /// Whether `time` (London wall clock) is at or past the cutoff.
    pub fn is_past_cutoff(&self, time: NaiveTime) -> bool {
        let hhmm = time.hour() * 100 + time.minute();
        hhmm >= u32::from(self.shipping_cutoff)
    }

    /// Builds a configuration from metaobject fields.
    ///
    /// Keys may be snake_case or camelCase. Unknown keys are ignored.
    /// Empty values keep the default. Malformed values are errors.
    pub fn from_fields(fields: &[MetaobjectField]) -> DespatchResult<Self> {
        let mut config = Self::default();

        for field in fields {
            let key = to_camel_case(&field.key);
            let value = field.value.trim();
            if value.is_empty() {
                warn!(key = %field.key, "empty shipping config field, using default");
                continue;
            }

            match key.as_str() {
                "shippingCutoff" => config.shipping_cutoff = parse_cutoff(&field.key, value)?,
                "prescriptionLeadTime" => {
                    config.prescription_lead_time = parse_lead_time(&field.key, value)?;
                }
                "shippingNonShipDays" => {
                    config.shipping_non_ship_days = parse_date_list(&field.key, value)?;
                }
                "shippingNonDespatch" => {
                    config.shipping_non_despatch = parse_date_list(&field.key, value)?;
                }
                _ => debug!(key = %field.key, "ignoring unknown shipping config field"),
            }
        }

        Ok(config)
    }
}

/// Parses `1400` or `14:00`.
fn parse_cutoff(key: &str, value: &str) -> DespatchResult<u16> {
    value
        .replace(':', "")
        .parse()
        .map_err(|e| DespatchError::invalid_field(key, value, e))
}

/// Parses a lead time of at most [`MAX_PRESCRIPTION_LEAD_TIME`] days.
fn parse_lead_time(key: &str, value: &str) -> DespatchResult<u32> {
    let days: u32 = value
        .parse()
        .map_err(|e| DespatchError::invalid_field(key, value, e))?;
    if days > MAX_PRESCRIPTION_LEAD_TIME {
        return Err(DespatchError::invalid_field(
            key,
            value,
            format!("exceeds {MAX_PRESCRIPTION_LEAD_TIME} days"),
        ));
    }
    Ok(days)
}

/// Parses a date list: a JSON array (`list.date` fields) or comma-separated.
pub(crate) fn parse_date_list(key: &str, value: &str) -> DespatchResult<BTreeSet<NaiveDate>> {
    let raw: Vec<String> = if value.starts_with('[') {
        serde_json::from_str(value).map_err(|e| DespatchError::invalid_field(key, value, e))?
    } else {
        value.split(',').map(str::to_string).collect()
    };

    raw.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(parse_date)
        .collect()
}
