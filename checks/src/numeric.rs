//! Sign and ordering predicates for primitive numbers.
//!
//! Comparisons go through `PartialOrd`. An unordered pair (any `NaN`)
//! satisfies none of the orderings: `NaN` is neither positive, negative, zero,
//! nor on either side of a threshold. That is an ordinary outcome, so a
//! negated check on `NaN` passes.

use std::cmp::Ordering;

use fluent_types::{EvaluatorFault, FluentMessage, Polarity, Subject};

use crate::evaluator::Evaluator;

pub trait Numeric: Subject + PartialOrd + Copy {
    const ZERO: Self;
}

macro_rules! numeric {
    ($zero:literal => $($ty:ty),+) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric!(0.0 => f32, f64);

fn orders_as<N: Numeric>(subject: N, other: N, expected: Ordering) -> bool {
    subject.partial_cmp(&other) == Some(expected)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsPositive;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsNegative;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsZero;

#[derive(Debug, Clone, Copy)]
pub struct IsStrictlyGreaterThan<N>(pub N);

#[derive(Debug, Clone, Copy)]
pub struct IsStrictlyLessThan<N>(pub N);

impl<N: Numeric> Evaluator<N> for IsPositive {
    fn holds(&self, subject: &N) -> Result<bool, EvaluatorFault> {
        Ok(orders_as(*subject, N::ZERO, Ordering::Greater))
    }

    fn message(&self, subject: &N, polarity: Polarity) -> FluentMessage {
        sign_message(subject, polarity, "strictly positive")
    }
}

impl<N: Numeric> Evaluator<N> for IsNegative {
    fn holds(&self, subject: &N) -> Result<bool, EvaluatorFault> {
        Ok(orders_as(*subject, N::ZERO, Ordering::Less))
    }

    fn message(&self, subject: &N, polarity: Polarity) -> FluentMessage {
        sign_message(subject, polarity, "strictly negative")
    }
}

impl<N: Numeric> Evaluator<N> for IsZero {
    fn holds(&self, subject: &N) -> Result<bool, EvaluatorFault> {
        Ok(orders_as(*subject, N::ZERO, Ordering::Equal))
    }

    fn message(&self, subject: &N, polarity: Polarity) -> FluentMessage {
        sign_message(subject, polarity, "zero")
    }
}

impl<N: Numeric> Evaluator<N> for IsStrictlyGreaterThan<N> {
    fn holds(&self, subject: &N) -> Result<bool, EvaluatorFault> {
        Ok(orders_as(*subject, self.0, Ordering::Greater))
    }

    fn message(&self, subject: &N, polarity: Polarity) -> FluentMessage {
        threshold_message(subject, polarity, "strictly greater than", self.0)
    }
}

impl<N: Numeric> Evaluator<N> for IsStrictlyLessThan<N> {
    fn holds(&self, subject: &N) -> Result<bool, EvaluatorFault> {
        Ok(orders_as(*subject, self.0, Ordering::Less))
    }

    fn message(&self, subject: &N, polarity: Polarity) -> FluentMessage {
        threshold_message(subject, polarity, "strictly less than", self.0)
    }
}

fn sign_message<N: Numeric>(subject: &N, polarity: Polarity, property: &str) -> FluentMessage {
    let label = N::label();
    let summary = match polarity {
        Polarity::Affirmed => format!("The checked {label} is not {property}."),
        Polarity::Negated => format!("The checked {label} is {property} whereas it must not."),
    };
    FluentMessage::new(summary).checked(label, subject.render())
}

fn threshold_message<N: Numeric>(
    subject: &N,
    polarity: Polarity,
    relation: &str,
    threshold: N,
) -> FluentMessage {
    let label = N::label();
    let summary = match polarity {
        Polarity::Affirmed => format!("The checked {label} is not {relation} the threshold."),
        Polarity::Negated => {
            format!("The checked {label} is {relation} the threshold whereas it must not.")
        }
    };
    FluentMessage::new(summary)
        .checked(label, subject.render())
        .expected("threshold", threshold.render())
}
