//! Delivery title formatting.
//!
//! # Labels
//!
//! | Window | Label | Fast |
//! |--------|-------|------|
//! | single day, today | `Today` | yes |
//! | single day, tomorrow | `Tomorrow` | yes |
//! | single day, 2-5 days out | `on Wednesday` | yes |
//! | single day, later | `Friday 21st March` | no |
//! | range | `between Monday 5th August and Tuesday 6th August` | no |

use chrono::{Datelike, NaiveDate};

use crate::models::{DeliveryWindow, ShippingContext};

/// Prefix for in-stock and prescription orders.
pub const PREFIX_GET_THEM: &str = "Get them";
/// Prefix for preorders and delayed despatch.
pub const PREFIX_ESTIMATED: &str = "Estimated delivery";

/// Single-day estimates closer than this many days are "fast".
pub const FAST_DELIVERY_DAYS: i64 = 6;

/// A rendered delivery title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryTitle {
    pub label: String,
    pub fast_delivery: bool,
}

impl DeliveryTitle {
    fn fast(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fast_delivery: true,
        }
    }

    fn slow(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fast_delivery: false,
        }
    }
}

/// Lead-in text for a context.
pub fn prefix(context: ShippingContext) -> &'static str {
    match context {
        ShippingContext::Default | ShippingContext::Prescription => PREFIX_GET_THEM,
        ShippingContext::Preorder | ShippingContext::DelayedDespatch => PREFIX_ESTIMATED,
    }
}

/// Renders a delivery window relative to `today` (London calendar date).
pub fn delivery_title(window: &DeliveryWindow, today: NaiveDate) -> DeliveryTitle {
    if !window.is_single_day() {
        return DeliveryTitle::slow(format!(
            "between {} and {}",
            full_date(window.min),
            full_date(window.max)
        ));
    }

    let day = window.min;
    match (day - today).num_days() {
        0 => DeliveryTitle::fast("Today"),
        1 => DeliveryTitle::fast("Tomorrow"),
        n if (2..FAST_DELIVERY_DAYS).contains(&n) => {
            DeliveryTitle::fast(format!("on {}", day.format("%A")))
        }
        _ => DeliveryTitle::slow(full_date(day)),
    }
}

/// `Friday 21st March`.
pub fn full_date(date: NaiveDate) -> String {
    format!(
        "{} {}{} {}",
        date.format("%A"),
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%B")
    )
}

/// English ordinal suffix for a day of month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
