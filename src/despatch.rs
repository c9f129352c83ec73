//! Despatch day calculation.
//!
//! # Rules by context
//!
//! | Context | Base date |
//! |---------|-----------|
//! | DelayedDespatch | override date |
//! | Preorder | override date + 2 days |
//! | Prescription | (override date or today) + lead time |
//! | Default, before cutoff | override date or today |
//! | Default, past cutoff | today + 1 |
//!
//! The base date is clamped to today, then moved forward to the first
//! valid despatch day (see [`WorkingCalendar::next_despatch_day`]).

use chrono::NaiveDate;
use tracing::debug;

use crate::estimator::EvaluationContext;
use crate::models::{add_days, Classification, ShippingConfig, ShippingContext, WorkingCalendar};

/// Calendar days between a preorder's restock date and its despatch.
pub const PREORDER_HANDLING_DAYS: u64 = 2;

/// First date on or after `date` that is a weekday, not a non-ship day
/// and not a non-despatch day.
pub fn first_valid_despatch_day(calendar: &WorkingCalendar, date: NaiveDate) -> NaiveDate {
    calendar.next_despatch_day(date)
}

/// Computes the despatch date for a classified cart.
pub fn despatch_date(
    classification: &Classification,
    config: &ShippingConfig,
    calendar: &WorkingCalendar,
    ctx: &EvaluationContext,
) -> NaiveDate {
    let today = ctx.today();
    let base = classification.override_date.unwrap_or(today);

    let candidate = match classification.context {
        ShippingContext::DelayedDespatch => base,
        ShippingContext::Preorder => add_days(base, PREORDER_HANDLING_DAYS),
        ShippingContext::Prescription => {
            add_days(base, u64::from(config.prescription_lead_time))
        }
        ShippingContext::Default => {
            if config.is_past_cutoff(ctx.time_of_day()) {
                add_days(today, 1)
            } else {
                base
            }
        }
    };

    if candidate < today {
        debug!(%candidate, %today, "despatch base date in the past, clamping to today");
    }

    let despatch = first_valid_despatch_day(calendar, candidate.max(today));
    debug!(context = ?classification.context, %candidate, %despatch, "despatch date");
    despatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// London wall clock on the given date.
    fn at(d: NaiveDate, h: u32, m: u32) -> EvaluationContext {
        EvaluationContext::at_london(d, NaiveTime::from_hms_opt(h, m, 0).unwrap()).unwrap()
    }

    fn config() -> ShippingConfig {
        ShippingConfig::default()
            .with_cutoff(1400)
            .with_prescription_lead_time(5)
    }

    fn compute(c: Classification, config: &ShippingConfig, ctx: &EvaluationContext) -> NaiveDate {
        despatch_date(&c, config, &WorkingCalendar::from_config(config), ctx)
    }

    fn monday() -> NaiveDate {
        date(2024, 8, 5)
    }

    #[test]
    fn test_default_before_cutoff() {
        let d = compute(Classification::default(), &config(), &at(monday(), 13, 0));
        assert_eq!(d, monday());
    }

    #[test]
    fn test_default_past_cutoff() {
        let d = compute(Classification::default(), &config(), &at(monday(), 15, 0));
        assert_eq!(d, date(2024, 8, 6));

        let exactly = compute(Classification::default(), &config(), &at(monday(), 14, 0));
        assert_eq!(exactly, date(2024, 8, 6));
    }

    #[test]
    fn test_default_past_cutoff_tuesday_closed() {
        let config = config().with_non_despatch_day(date(2024, 8, 6));
        let d = compute(Classification::default(), &config, &at(monday(), 15, 0));
        assert_eq!(d, date(2024, 8, 7));
    }

    #[test]
    fn test_default_past_cutoff_friday_rolls_to_monday() {
        let d = compute(Classification::default(), &config(), &at(date(2024, 8, 2), 16, 0));
        assert_eq!(d, monday());
    }

    #[test]
    fn test_default_weekend_order() {
        let d = compute(Classification::default(), &config(), &at(date(2024, 8, 3), 9, 0));
        assert_eq!(d, monday());
    }

    #[test]
    fn test_default_with_declared_date() {
        let c = Classification::new(ShippingContext::Default, Some(date(2024, 8, 8)));
        assert_eq!(compute(c, &config(), &at(monday(), 10, 0)), date(2024, 8, 8));
        // Past cutoff despatches from tomorrow regardless of the declared date.
        assert_eq!(compute(c, &config(), &at(monday(), 15, 0)), date(2024, 8, 6));
    }

    #[test]
    fn test_delayed_despatch() {
        let c = Classification::new(ShippingContext::DelayedDespatch, Some(date(2024, 8, 10)));
        // Saturday override rolls to Monday.
        assert_eq!(compute(c, &config(), &at(monday(), 10, 0)), date(2024, 8, 12));
    }

    #[test]
    fn test_delayed_despatch_without_date_uses_today() {
        let c = Classification::of(ShippingContext::DelayedDespatch);
        assert_eq!(compute(c, &config(), &at(monday(), 15, 0)), monday());
    }

    #[test]
    fn test_preorder_adds_two_days() {
        let c = Classification::new(ShippingContext::Preorder, Some(date(2024, 8, 5)));
        assert_eq!(compute(c, &config(), &at(date(2024, 7, 29), 10, 0)), date(2024, 8, 7));
    }

    #[test]
    fn test_preorder_non_working_days() {
        let config = config()
            .with_non_ship_day(date(2024, 8, 7))
            .with_non_despatch_day(date(2024, 8, 8));
        let c = Classification::new(ShippingContext::Preorder, Some(date(2024, 8, 5)));
        assert_eq!(compute(c, &config, &at(date(2024, 7, 29), 10, 0)), date(2024, 8, 9));
    }

    #[test]
    fn test_prescription_lead_time() {
        let c = Classification::of(ShippingContext::Prescription);
        // Monday + 5 = Saturday → Monday 12th
        assert_eq!(compute(c, &config(), &at(monday(), 10, 0)), date(2024, 8, 12));
    }

    #[test]
    fn test_prescription_zero_lead_time() {
        let config = config().with_prescription_lead_time(0);
        let c = Classification::of(ShippingContext::Prescription);
        assert_eq!(compute(c, &config, &at(monday(), 15, 0)), monday());
    }

    #[test]
    fn test_past_override_clamps_to_today() {
        let c = Classification::new(ShippingContext::DelayedDespatch, Some(date(2024, 7, 1)));
        assert_eq!(compute(c, &config(), &at(monday(), 10, 0)), monday());
    }

    #[test]
    fn test_far_future_declared_date_does_not_overflow() {
        let c = Classification::new(ShippingContext::Preorder, Some(NaiveDate::MAX));
        assert_eq!(compute(c, &config(), &at(monday(), 10, 0)), NaiveDate::MAX);
    }

    #[test]
    fn test_huge_lead_time_does_not_overflow() {
        let config = config().with_prescription_lead_time(u32::MAX);
        let c = Classification::of(ShippingContext::Prescription);
        assert_eq!(compute(c, &config, &at(monday(), 10, 0)), NaiveDate::MAX);
    }

    #[test]
    fn test_first_valid_despatch_day() {
        let cal = WorkingCalendar::new().with_non_ship_day(date(2024, 8, 9));
        // Friday non-ship → weekend → Monday
        assert_eq!(first_valid_despatch_day(&cal, date(2024, 8, 9)), date(2024, 8, 12));
        assert_eq!(first_valid_despatch_day(&cal, date(2024, 8, 8)), date(2024, 8, 8));
    }
}
