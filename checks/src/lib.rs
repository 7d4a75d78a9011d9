//! Predicate evaluators for fluent checks.
//!
//! Every predicate is a small value implementing [`Evaluator`]: it decides
//! whether the predicate holds for a subject and builds the failure message
//! for either polarity. [`evaluate`] is the single checker that turns an
//! evaluator, a subject and a [`Polarity`](fluent_types::Polarity) into a
//! pass or a [`CheckError`](fluent_types::CheckError).
//!
//! Nothing here defers or aggregates; that is the job of `fluent-lazy`.

mod boolean;
mod character;
mod custom;
mod equality;
mod evaluator;
mod instance;
mod nullable;
mod numeric;
mod string;

pub use boolean::{IsFalse, IsTrue};
pub use character::{IsADigit, IsALetter};
pub use custom::{Satisfies, TrySatisfies};
pub use equality::IsEqualTo;
pub use evaluator::{Evaluator, evaluate};
pub use instance::{IsInstanceOf, IsNotInstanceOf};
pub use nullable::{IsNotNull, IsNull};
pub use numeric::{IsNegative, IsPositive, IsStrictlyGreaterThan, IsStrictlyLessThan, IsZero, Numeric};
pub use string::{Contains, EndsWith, IsEmpty, StartsWith};
