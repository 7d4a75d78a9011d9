//! Boolean predicates.
//!
//! The wording depends only on the actual value, so `is_true` under negation
//! and `is_false` report the same sentence.

use fluent_types::{EvaluatorFault, FluentMessage, Polarity, Subject};

use crate::evaluator::Evaluator;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsTrue;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsFalse;

impl Evaluator<bool> for IsTrue {
    fn holds(&self, subject: &bool) -> Result<bool, EvaluatorFault> {
        Ok(*subject)
    }

    fn message(&self, subject: &bool, _polarity: Polarity) -> FluentMessage {
        boolean_message(*subject)
    }
}

impl Evaluator<bool> for IsFalse {
    fn holds(&self, subject: &bool) -> Result<bool, EvaluatorFault> {
        Ok(!*subject)
    }

    fn message(&self, subject: &bool, _polarity: Polarity) -> FluentMessage {
        boolean_message(*subject)
    }
}

fn boolean_message(actual: bool) -> FluentMessage {
    let label = <bool as Subject>::label();
    FluentMessage::new(format!(
        "The checked {label} is {actual} whereas it must be {}.",
        !actual
    ))
    .checked(label, actual.render())
}
