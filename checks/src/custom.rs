//! Caller-supplied predicates.
//!
//! Wrapping a closure in [`Satisfies`] or [`TrySatisfies`] gives it the same
//! negation, deferral and reporting as the built-in predicates.

use std::fmt;

use fluent_types::{EvaluatorFault, FluentMessage, Polarity, Subject};

use crate::evaluator::Evaluator;

pub struct Satisfies<F> {
    description: String,
    predicate: F,
}

/// Like [`Satisfies`], for predicates that may be unable to decide.
pub struct TrySatisfies<F> {
    description: String,
    predicate: F,
}

impl<F> Satisfies<F> {
    pub fn new(description: impl Into<String>, predicate: F) -> Self {
        Self {
            description: description.into(),
            predicate,
        }
    }
}

impl<F> TrySatisfies<F> {
    pub fn new(description: impl Into<String>, predicate: F) -> Self {
        Self {
            description: description.into(),
            predicate,
        }
    }
}

impl<F> fmt::Debug for Satisfies<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfies")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<F> fmt::Debug for TrySatisfies<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrySatisfies")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<T, F> Evaluator<T> for Satisfies<F>
where
    T: Subject + ?Sized,
    F: Fn(&T) -> bool,
{
    fn holds(&self, subject: &T) -> Result<bool, EvaluatorFault> {
        Ok((self.predicate)(subject))
    }

    fn message(&self, subject: &T, polarity: Polarity) -> FluentMessage {
        condition_message(subject, polarity, &self.description)
    }
}

impl<T, F> Evaluator<T> for TrySatisfies<F>
where
    T: Subject + ?Sized,
    F: Fn(&T) -> Result<bool, EvaluatorFault>,
{
    fn holds(&self, subject: &T) -> Result<bool, EvaluatorFault> {
        (self.predicate)(subject)
    }

    fn message(&self, subject: &T, polarity: Polarity) -> FluentMessage {
        condition_message(subject, polarity, &self.description)
    }
}

fn condition_message<T: Subject + ?Sized>(
    subject: &T,
    polarity: Polarity,
    description: &str,
) -> FluentMessage {
    let label = T::label();
    let summary = match polarity {
        Polarity::Affirmed => format!("The checked {label} does not satisfy: {description}."),
        Polarity::Negated => {
            format!("The checked {label} satisfies: {description}, whereas it must not.")
        }
    };
    FluentMessage::new(summary).checked(label, subject.render())
}
