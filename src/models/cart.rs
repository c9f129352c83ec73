//! Cart line model.
//!
//! A cart line carries merchant-defined order attributes. Two of them
//! drive delivery estimation:
//!
//! | Attribute | Content |
//! |-----------|---------|
//! | `_checkoutInfo` | Comma-separated checkout flags (see [`CheckoutFlag`]) |
//! | `_despatchDate` | Required despatch date, `YYYY-MM-DD` |
//!
//! Bundle grouping happens upstream; each bundle part arrives as its own line.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute holding the comma-separated checkout flags.
pub const CHECKOUT_INFO_KEY: &str = "_checkoutInfo";
/// Attribute holding the line's required despatch date.
pub const DESPATCH_DATE_KEY: &str = "_despatchDate";

/// A recognised checkout flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutFlag {
    /// `isPreorder`
    Preorder,
    /// `isDelayedDespatch` or `delayedDespatch`
    DelayedDespatch,
    /// `isPrescription`
    Prescription,
    /// `litePackagingAvailable`
    LitePackagingAvailable,
    /// `defaultLitePackaging`
    DefaultLitePackaging,
}

impl CheckoutFlag {
    /// Parses one flag token. Unknown tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "isPreorder" => Some(Self::Preorder),
            "isDelayedDespatch" | "delayedDespatch" => Some(Self::DelayedDespatch),
            "isPrescription" => Some(Self::Prescription),
            "litePackagingAvailable" => Some(Self::LitePackagingAvailable),
            "defaultLitePackaging" => Some(Self::DefaultLitePackaging),
            _ => None,
        }
    }
}

/// A cart line as seen by the estimator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartLine {
    /// Merchant-defined attributes.
    pub attributes: HashMap<String, String>,
}

impl CartLine {
    /// Creates a line with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets `_checkoutInfo` to the given flags.
    pub fn with_checkout_info(self, flags: &[&str]) -> Self {
        self.with_attribute(CHECKOUT_INFO_KEY, flags.join(","))
    }

    /// Sets `_despatchDate`.
    pub fn with_despatch_date(self, date: impl Into<String>) -> Self {
        self.with_attribute(DESPATCH_DATE_KEY, date)
    }

    /// Attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Recognised flags from `_checkoutInfo`.
    pub fn checkout_flags(&self) -> impl Iterator<Item = CheckoutFlag> + '_ {
        self.attribute(CHECKOUT_INFO_KEY)
            .unwrap_or_default()
            .split(',')
            .filter_map(CheckoutFlag::parse)
    }

    /// Raw `_despatchDate`, if present and non-blank.
    pub fn despatch_date(&self) -> Option<&str> {
        self.attribute(DESPATCH_DATE_KEY)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
