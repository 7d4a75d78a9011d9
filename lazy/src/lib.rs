//! Deferred fluent checks.
//!
//! Register any number of checks against any number of values, run them all
//! at the end, and get every failure back in a single report instead of
//! stopping at the first one.
//!
//! ```
//! use fluent_lazy::prelude::*;
//!
//! let checks = LazyChecks::new();
//! checks.that(true).is_false();
//! checks.that('.').is_a_letter();
//! checks.that("Thomas").contains("oma").starts_with("Tho");
//!
//! let report = checks.run_all().unwrap_err();
//! assert_eq!(
//!     report.to_string(),
//!     "2 lazy checks failed:\n\
//!      -----------\n\
//!      The checked boolean is true whereas it must be false.\n\
//!      The checked boolean:\n\
//!      \t[true]\n\
//!      -----------\n\
//!      The checked char is not a letter.\n\
//!      The checked char:\n\
//!      \t['.']\n\
//!      -----------"
//! );
//! ```
//!
//! Predicates are grouped in traits by subject type ([`BooleanCheck`],
//! [`StringCheck`], ...); checks that apply to every type (equality, type
//! membership, custom conditions) are methods of [`LazyCheck`] itself.

mod handle;
mod predicates;
mod registry;

pub use handle::LazyCheck;
pub use predicates::{BooleanCheck, CharCheck, NullableCheck, NumericCheck, StringCheck};
pub use registry::{LazyCheckError, LazyChecks, RegistryState};

pub use fluent_types::{AggregateFailure, CheckFailure, EvaluatorFault, FluentSettings, Polarity, Subject, debug_subject};

pub mod prelude {
    pub use crate::{
        BooleanCheck, CharCheck, LazyCheck, LazyCheckError, LazyChecks, NullableCheck,
        NumericCheck, StringCheck,
    };
    pub use fluent_types::debug_subject;
}
