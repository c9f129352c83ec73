//! End-to-end delivery estimation.
//!
//! Composes classification, despatch, transit and formatting into a
//! single reentrant entry point.
//!
//! # Clock
//!
//! `EvaluationContext` fixes the reference instant in Europe/London once
//! per evaluation. Both the despatch cutoff and the title's "today" read
//! from it.

mod context;
mod pipeline;

pub use context::EvaluationContext;
pub use pipeline::Estimator;
