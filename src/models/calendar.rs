//! Working-day calendar.
//!
//! Defines which calendar days the warehouse despatches on and which
//! days the carrier moves parcels. All dates are calendar days in the
//! shop's zone (Europe/London); there is no time-of-day component.
//!
//! # Precedence
//! Weekends are never working days. A date is a despatch day iff:
//! - It is a weekday (Monday to Friday), AND
//! - It is NOT listed as a non-ship day, AND
//! - It is NOT listed as a non-despatch day.
//!
//! A date is a delivery day iff it is a weekday and not a non-ship day.
//! Non-despatch days only constrain the warehouse, never the carrier.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::ShippingConfig;

/// Shop-wide calendar of non-working days.
///
/// Empty sets mean only weekends are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingCalendar {
    /// Days the carrier does not move parcels.
    pub non_ship_days: BTreeSet<NaiveDate>,
    /// Days the warehouse does not despatch.
    pub non_despatch_days: BTreeSet<NaiveDate>,
}

impl WorkingCalendar {
    /// Creates a calendar that only skips weekends.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the calendar from shop configuration.
    pub fn from_config(config: &ShippingConfig) -> Self {
        Self {
            non_ship_days: config.shipping_non_ship_days.clone(),
            non_despatch_days: config.shipping_non_despatch.clone(),
        }
    }

    /// Adds a non-ship day.
    pub fn with_non_ship_day(mut self, date: NaiveDate) -> Self {
        self.non_ship_days.insert(date);
        self
    }

    /// Adds a non-despatch day.
    pub fn with_non_despatch_day(mut self, date: NaiveDate) -> Self {
        self.non_despatch_days.insert(date);
        self
    }

    /// Whether the date falls on a Saturday or Sunday.
    #[inline]
    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether the warehouse can despatch on this date.
    pub fn is_despatch_day(&self, date: NaiveDate) -> bool {
        !Self::is_weekend(date)
            && !self.non_ship_days.contains(&date)
            && !self.non_despatch_days.contains(&date)
    }

    /// Whether the carrier delivers on this date.
    pub fn is_delivery_day(&self, date: NaiveDate) -> bool {
        !Self::is_weekend(date) && !self.non_ship_days.contains(&date)
    }

    /// Finds the first despatch day at or after `from`.
    ///
    /// Every shift re-checks all rules, so a holiday that rolls into a
    /// weekend is pushed past the weekend as well. Terminates because the
    /// non-working sets are finite. Stops at the last representable date.
    pub fn next_despatch_day(&self, from: NaiveDate) -> NaiveDate {
        let mut date = from;
        while !self.is_despatch_day(date) && date < NaiveDate::MAX {
            date = add_days(date, 1);
        }
        date
    }

    /// Finds the first delivery day at or after `from`.
    pub fn next_delivery_day(&self, from: NaiveDate) -> NaiveDate {
        let mut date = from;
        while !self.is_delivery_day(date) && date < NaiveDate::MAX {
            date = add_days(date, 1);
        }
        date
    }
}

/// Adds calendar days, saturating at the last representable date.
pub(crate) fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
