//! Cart context classification.
//!
//! Reduces the cart's line attributes to a single [`ShippingContext`]
//! and an optional override despatch date.
//!
//! # Algorithm
//!
//! 1. Fold over lines: OR every checkout flag, keep the latest declared
//!    despatch date (a bundle cannot despatch before its last part).
//! 2. Resolve the folded flags through an ordered [`RuleTable`]; the
//!    first rule that matches wins.
//!
//! # Usage
//!
//! ```
//! use u_despatch::classify::{classify, RuleTable};
//! use u_despatch::models::{CartLine, ShippingContext};
//!
//! let lines = vec![
//!     CartLine::new().with_checkout_info(&["isPreorder"]).with_despatch_date("2024-08-05"),
//! ];
//! let c = classify(&lines).unwrap();
//! assert_eq!(c.context, ShippingContext::Preorder);
//! assert_eq!(RuleTable::standard().rule_names()[0], "PRESCRIPTION");
//! ```

pub mod rules;

use std::fmt::Debug;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{parse_date, DespatchResult};
use crate::models::{CartLine, CheckoutFlag, Classification};

/// Checkout flags OR-ed across every cart line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartFlags {
    pub prescription: bool,
    pub preorder: bool,
    pub delayed_despatch: bool,
    pub lite_packaging_available: bool,
    pub default_lite_packaging: bool,
    /// Latest declared despatch date across lines.
    pub despatch_date: Option<NaiveDate>,
}

impl CartFlags {
    /// Folds the flags of all lines.
    ///
    /// # Errors
    /// `InvalidDate` if any line declares an unparseable despatch date.
    pub fn from_lines<'a, I>(lines: I) -> DespatchResult<Self>
    where
        I: IntoIterator<Item = &'a CartLine>,
    {
        lines
            .into_iter()
            .try_fold(Self::default(), |acc, line| acc.absorb(line))
    }

    fn absorb(mut self, line: &CartLine) -> DespatchResult<Self> {
        for flag in line.checkout_flags() {
            match flag {
                CheckoutFlag::Prescription => self.prescription = true,
                CheckoutFlag::Preorder => self.preorder = true,
                CheckoutFlag::DelayedDespatch => self.delayed_despatch = true,
                CheckoutFlag::LitePackagingAvailable => self.lite_packaging_available = true,
                CheckoutFlag::DefaultLitePackaging => self.default_lite_packaging = true,
            }
        }

        if let Some(raw) = line.despatch_date() {
            let date = parse_date(raw)?;
            self.despatch_date = self.despatch_date.max(Some(date));
        }

        Ok(self)
    }
}

/// A context resolution rule.
///
/// Returns `Some` when the rule applies to the folded flags.
pub trait ContextRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRESCRIPTION").
    fn name(&self) -> &'static str;

    /// Classifies the cart if this rule matches.
    fn apply(&self, flags: &CartFlags) -> Option<Classification>;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Ordered list of context rules; first match wins.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Arc<dyn ContextRule>>,
}

impl RuleTable {
    /// Creates an empty table. Resolves everything to `Default`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The checkout's priority order.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::Prescription)
            .with_rule(rules::Preorder)
            .with_rule(rules::DelayedDespatch)
            .with_rule(rules::DeclaredDate)
            .with_rule(rules::Fallback)
    }

    /// Appends a rule (lowest priority so far).
    pub fn with_rule<R: ContextRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Rule names in priority order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Resolves flags to a classification.
    pub fn resolve(&self, flags: &CartFlags) -> Classification {
        for rule in &self.rules {
            if let Some(classification) = rule.apply(flags) {
                debug!(
                    rule = rule.name(),
                    description = rule.description(),
                    context = ?classification.context,
                    override_date = ?classification.override_date,
                    "cart classified"
                );
                return classification;
            }
        }
        Classification::default()
    }
}

/// Classifies cart lines with the standard rule table.
pub fn classify(lines: &[CartLine]) -> DespatchResult<Classification> {
    classify_with(&RuleTable::standard(), lines)
}

/// Classifies cart lines with a custom rule table.
pub fn classify_with(table: &RuleTable, lines: &[CartLine]) -> DespatchResult<Classification> {
    let flags = CartFlags::from_lines(lines)?;
    Ok(table.resolve(&flags))
}
