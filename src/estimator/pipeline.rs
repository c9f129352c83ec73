//! Delivery estimation pipeline.
//!
//! # Algorithm
//!
//! 1. Classify the cart once (context + override date).
//! 2. Compute the despatch date from context, config and the clock.
//! 3. Walk the method's transit range over delivery days.
//! 4. Render the window as a title with its prefix.
//!
//! Every stage returns a new value; the estimator itself is immutable and
//! can be shared across threads.

use tracing::{debug, warn};

use super::EvaluationContext;
use crate::classify::{classify_with, RuleTable};
use crate::despatch::despatch_date;
use crate::format::{delivery_title, prefix};
use crate::models::{
    CartLine, Classification, DeliveryEstimate, Estimate, ShippingConfig, ShippingMethod,
    ShippingOption, WorkingCalendar,
};
use crate::transit::delivery_window;

/// Computes delivery estimates for shipping methods.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use u_despatch::estimator::{EvaluationContext, Estimator};
/// use u_despatch::models::{CartLine, ShippingConfig, ShippingMethod};
///
/// let estimator = Estimator::new(ShippingConfig::default().with_cutoff(1400));
/// let ctx = EvaluationContext::at_london(
///     NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(), // Monday
///     NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// let options = estimator.estimate_cart(
///     &[CartLine::new()],
///     &[ShippingMethod::new("DPD Next Day", 1, 1)],
///     &ctx,
/// );
/// assert_eq!(options[0].estimate.despatch_date_label, "Tomorrow");
/// assert!(options[0].estimate.fast_delivery);
/// ```
#[derive(Debug, Clone)]
pub struct Estimator {
    config: ShippingConfig,
    calendar: WorkingCalendar,
    rules: RuleTable,
}

impl Estimator {
    /// Creates an estimator with the standard context rules.
    pub fn new(config: ShippingConfig) -> Self {
        let calendar = WorkingCalendar::from_config(&config);
        Self {
            config,
            calendar,
            rules: RuleTable::standard(),
        }
    }

    /// Replaces the context rule table.
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Shop configuration.
    pub fn config(&self) -> &ShippingConfig {
        &self.config
    }

    /// Working calendar derived from the configuration.
    pub fn calendar(&self) -> &WorkingCalendar {
        &self.calendar
    }

    /// Classifies cart lines.
    ///
    /// An unparseable despatch date falls back to the default context
    /// with no override date.
    pub fn classify(&self, lines: &[CartLine]) -> Classification {
        classify_with(&self.rules, lines).unwrap_or_else(|e| {
            warn!(error = %e, "cart classification failed, using default context");
            Classification::default()
        })
    }

    /// Runs all stages for one method and keeps every intermediate result.
    pub fn plan(
        &self,
        classification: &Classification,
        method: &ShippingMethod,
        ctx: &EvaluationContext,
    ) -> Estimate {
        let despatch = despatch_date(classification, &self.config, &self.calendar, ctx);
        let window = delivery_window(&self.calendar, despatch, method);
        let title = delivery_title(&window, ctx.today());

        debug!(
            method = %method.name,
            %despatch,
            min = %window.min,
            max = %window.max,
            label = %title.label,
            "delivery estimated"
        );

        Estimate {
            classification: *classification,
            despatch_date: despatch,
            window,
            estimate: DeliveryEstimate {
                prefix: prefix(classification.context).to_string(),
                despatch_date_label: title.label,
                fast_delivery: title.fast_delivery,
            },
        }
    }

    /// Display-ready estimate for one method.
    pub fn estimate(
        &self,
        classification: &Classification,
        method: &ShippingMethod,
        ctx: &EvaluationContext,
    ) -> DeliveryEstimate {
        self.plan(classification, method, ctx).estimate
    }

    /// Estimates every method for a cart.
    pub fn estimate_cart(
        &self,
        lines: &[CartLine],
        methods: &[ShippingMethod],
        ctx: &EvaluationContext,
    ) -> Vec<ShippingOption> {
        let classification = self.classify(lines);
        methods
            .iter()
            .map(|method| ShippingOption {
                name: method.name.clone(),
                method_type: method.method_type.clone(),
                estimate: self.estimate(&classification, method, ctx),
            })
            .collect()
    }
}
