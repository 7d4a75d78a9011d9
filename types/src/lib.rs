//! Core domain types for lazy fluent checks.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! negation state, the failures a check can produce, the aggregate report a
//! lazy run raises, the structured message builder, and the rendering of
//! checked values. Every other crate in the workspace builds on these.

mod failure;
mod message;
mod polarity;
mod settings;
mod subject;

pub use failure::{AggregateFailure, CheckError, CheckFailure, EvaluatorFault, REPORT_SEPARATOR};
pub use message::{BlockRole, FluentMessage};
pub use polarity::Polarity;
pub use settings::{ClipWidth, FluentSettings, MessageStyle, ValueWidth, ValueWidthError};
pub use subject::{Subject, TypeIdentity, shorten_type_name};
