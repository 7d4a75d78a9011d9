use fluent_types::{EvaluatorFault, FluentMessage, Polarity, Subject};

use crate::evaluator::Evaluator;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsNull;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsNotNull;

impl<T: Subject + 'static> Evaluator<Option<T>> for IsNull {
    fn holds(&self, subject: &Option<T>) -> Result<bool, EvaluatorFault> {
        Ok(subject.is_none())
    }

    fn message(&self, subject: &Option<T>, _polarity: Polarity) -> FluentMessage {
        null_message(subject)
    }
}

impl<T: Subject + 'static> Evaluator<Option<T>> for IsNotNull {
    fn holds(&self, subject: &Option<T>) -> Result<bool, EvaluatorFault> {
        Ok(subject.is_some())
    }

    fn message(&self, subject: &Option<T>, _polarity: Polarity) -> FluentMessage {
        null_message(subject)
    }
}

// Like booleans, the sentence depends on presence alone.
fn null_message<T: Subject + 'static>(subject: &Option<T>) -> FluentMessage {
    let label = <Option<T> as Subject>::label();
    let summary = if subject.is_some() {
        format!("The checked {label} is not null whereas it must be.")
    } else {
        format!("The checked {label} is null whereas it must not.")
    };
    FluentMessage::new(summary).checked(label, subject.render())
}
