//! Delivery estimation domain models.
//!
//! Provides the data types flowing through the estimation pipeline,
//! from raw checkout input to display-ready results.
//!
//! # Domain Mappings
//!
//! | u-despatch | Checkout | Warehouse | Carrier |
//! |------------|----------|-----------|---------|
//! | CartLine | Cart item + attributes | Order line | - |
//! | ShippingConfig | - | Cutoff, closures | Non-ship days |
//! | ShippingMethod | Shipping option | - | Service + zone |
//! | WorkingCalendar | - | Despatch days | Delivery days |
//! | DeliveryEstimate | Option subtitle | - | - |

mod calendar;
mod cart;
mod config;
mod context;
mod estimate;
mod metaobject;
mod method;

pub(crate) use calendar::add_days;
pub use calendar::WorkingCalendar;
pub use cart::{CartLine, CheckoutFlag, CHECKOUT_INFO_KEY, DESPATCH_DATE_KEY};
pub use config::{ShippingConfig, MAX_PRESCRIPTION_LEAD_TIME, NO_CUTOFF};
pub use context::{Classification, ShippingContext};
pub use estimate::{find_option, DeliveryEstimate, DeliveryWindow, Estimate, ShippingOption};
pub use metaobject::{to_camel_case, MetaobjectField, MetaobjectRecord};
pub use method::{filter_by_iso_code, ShippingMethod, STANDARD_METHOD_TYPE};
