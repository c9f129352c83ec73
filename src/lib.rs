//! Delivery estimation for checkout.
//!
//! Computes when an order will leave the warehouse and when it will
//! arrive, for every shipping method offered at checkout, and renders
//! the estimate as a short sentence ("Get them Tomorrow").
//!
//! # Modules
//!
//! - **`models`**: Domain types: `CartLine`, `ShippingConfig`, `ShippingMethod`,
//!   `WorkingCalendar`, `Classification`, `DeliveryEstimate`
//! - **`classify`**: Cart flags → `ShippingContext` via an ordered rule table
//! - **`despatch`**: Despatch day from context, cutoff and non-working days
//! - **`transit`**: Transit walking over delivery days
//! - **`format`**: Delivery titles and prefixes
//! - **`estimator`**: End-to-end pipeline and the evaluation clock
//! - **`validation`**: Merchant data checks (cutoff, transit ranges, duplicates)
//!
//! # Architecture
//!
//! A pure, synchronous pipeline: classify → despatch → transit → format.
//! No I/O and no shared mutable state; all inputs, including the clock,
//! are explicit parameters. Time zone is Europe/London throughout.

pub mod classify;
pub mod despatch;
pub mod error;
pub mod estimator;
pub mod format;
pub mod models;
pub mod transit;
pub mod validation;

pub use error::{DespatchError, DespatchResult};
pub use estimator::{EvaluationContext, Estimator};
