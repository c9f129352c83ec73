//! Built-in context rules.
//!
//! # Priority (standard table)
//!
//! | # | Rule | Matches | Context |
//! |---|------|---------|---------|
//! | 1 | PRESCRIPTION | prescription, no date | Prescription |
//! | 2 | PREORDER | date + preorder | Preorder |
//! | 3 | DELAYED | date + delayed despatch | DelayedDespatch |
//! | 4 | DECLARED_DATE | date | Default |
//! | 5 | FALLBACK | always | Default |
//!
//! A declared date outranks the prescription flag: a prescription line
//! bundled with a preorder part follows the preorder's date.

use super::{CartFlags, ContextRule};
use crate::models::{Classification, ShippingContext};

/// Prescription order with no declared despatch date.
#[derive(Debug, Clone, Copy)]
pub struct Prescription;

impl ContextRule for Prescription {
    fn name(&self) -> &'static str {
        "PRESCRIPTION"
    }

    fn apply(&self, flags: &CartFlags) -> Option<Classification> {
        (flags.prescription && flags.despatch_date.is_none())
            .then(|| Classification::of(ShippingContext::Prescription))
    }

    fn description(&self) -> &'static str {
        "Prescription lead time from today"
    }
}

/// Preorder with a restock date.
#[derive(Debug, Clone, Copy)]
pub struct Preorder;

impl ContextRule for Preorder {
    fn name(&self) -> &'static str {
        "PREORDER"
    }

    fn apply(&self, flags: &CartFlags) -> Option<Classification> {
        let date = flags.despatch_date?;
        flags
            .preorder
            .then(|| Classification::new(ShippingContext::Preorder, Some(date)))
    }

    fn description(&self) -> &'static str {
        "Preorder despatched after restock"
    }
}

/// Delayed despatch with a declared date.
#[derive(Debug, Clone, Copy)]
pub struct DelayedDespatch;

impl ContextRule for DelayedDespatch {
    fn name(&self) -> &'static str {
        "DELAYED"
    }

    fn apply(&self, flags: &CartFlags) -> Option<Classification> {
        let date = flags.despatch_date?;
        flags
            .delayed_despatch
            .then(|| Classification::new(ShippingContext::DelayedDespatch, Some(date)))
    }

    fn description(&self) -> &'static str {
        "Delayed despatch on a declared date"
    }
}

/// Declared date without a preorder or delayed flag.
#[derive(Debug, Clone, Copy)]
pub struct DeclaredDate;

impl ContextRule for DeclaredDate {
    fn name(&self) -> &'static str {
        "DECLARED_DATE"
    }

    fn apply(&self, flags: &CartFlags) -> Option<Classification> {
        flags
            .despatch_date
            .map(|date| Classification::new(ShippingContext::Default, Some(date)))
    }

    fn description(&self) -> &'static str {
        "Default rules from a declared date"
    }
}

/// Matches everything.
#[derive(Debug, Clone, Copy)]
pub struct Fallback;

impl ContextRule for Fallback {
    fn name(&self) -> &'static str {
        "FALLBACK"
    }

    fn apply(&self, _flags: &CartFlags) -> Option<Classification> {
        Some(Classification::default())
    }
}
