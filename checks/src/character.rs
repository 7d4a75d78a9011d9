//! Character class predicates.

use fluent_types::{EvaluatorFault, FluentMessage, Polarity, Subject};

use crate::evaluator::Evaluator;

/// Holds for alphabetic characters, Unicode-aware.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsALetter;

/// Holds for the ASCII digits `0`-`9`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsADigit;

impl Evaluator<char> for IsALetter {
    fn holds(&self, subject: &char) -> Result<bool, EvaluatorFault> {
        Ok(subject.is_alphabetic())
    }

    fn message(&self, subject: &char, polarity: Polarity) -> FluentMessage {
        class_message(*subject, "a letter", polarity)
    }
}

impl Evaluator<char> for IsADigit {
    fn holds(&self, subject: &char) -> Result<bool, EvaluatorFault> {
        Ok(subject.is_ascii_digit())
    }

    fn message(&self, subject: &char, polarity: Polarity) -> FluentMessage {
        class_message(*subject, "a digit", polarity)
    }
}

fn class_message(subject: char, class: &str, polarity: Polarity) -> FluentMessage {
    let label = <char as Subject>::label();
    let summary = match polarity {
        Polarity::Affirmed => format!("The checked {label} is not {class}."),
        Polarity::Negated => format!("The checked {label} is {class} whereas it must not."),
    };
    FluentMessage::new(summary).checked(label, subject.render())
}
