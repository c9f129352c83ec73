//! Transit walking.
//!
//! Each transit day advances one calendar day and then skips forward over
//! weekends and non-ship days. Non-despatch days are ignored here: the
//! carrier still delivers when the warehouse is closed.

use chrono::NaiveDate;

use crate::models::{add_days, DeliveryWindow, ShippingMethod, WorkingCalendar};

/// Advances `despatch` by `days` delivery days.
pub fn walk(calendar: &WorkingCalendar, despatch: NaiveDate, days: u32) -> NaiveDate {
    (0..days).fold(despatch, |date, _| calendar.next_delivery_day(add_days(date, 1)))
}

/// Delivery window for a method despatched on `despatch`.
///
/// `min <= max` holds whenever `transit_min <= transit_max`; that
/// precondition is not checked here.
pub fn delivery_window(
    calendar: &WorkingCalendar,
    despatch: NaiveDate,
    method: &ShippingMethod,
) -> DeliveryWindow {
    DeliveryWindow::new(
        walk(calendar, despatch, method.transit_min),
        walk(calendar, despatch, method.transit_max),
    )
}
