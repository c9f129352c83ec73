//! Shipping context: the business scenario governing despatch rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Business scenario for a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShippingContext {
    /// In-stock order subject to the same-day cutoff.
    #[default]
    Default,
    /// Despatches on a declared future date.
    DelayedDespatch,
    /// Despatches two days after the restock date.
    Preorder,
    /// Despatches after the prescription lead time.
    Prescription,
}

/// Output of cart classification.
///
/// `override_date` is the latest despatch date declared by any line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub context: ShippingContext,
    pub override_date: Option<NaiveDate>,
}

impl Classification {
    pub fn new(context: ShippingContext, override_date: Option<NaiveDate>) -> Self {
        Self {
            context,
            override_date,
        }
    }

    /// Context with no override date.
    pub fn of(context: ShippingContext) -> Self {
        Self::new(context, None)
    }
}
