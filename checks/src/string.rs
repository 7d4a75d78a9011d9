//! Substring predicates over anything that reads as a `str`.

use fluent_types::{EvaluatorFault, FluentMessage, Polarity, Subject};

use crate::evaluator::Evaluator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contains {
    needle: String,
}

impl Contains {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartsWith {
    prefix: String,
}

impl StartsWith {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndsWith {
    suffix: String,
}

impl EndsWith {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmpty;

impl<S> Evaluator<S> for Contains
where
    S: AsRef<str> + Subject + ?Sized,
{
    fn holds(&self, subject: &S) -> Result<bool, EvaluatorFault> {
        Ok(subject.as_ref().contains(self.needle.as_str()))
    }

    fn message(&self, subject: &S, polarity: Polarity) -> FluentMessage {
        part_message(subject, polarity, "contain", "substring", &self.needle)
    }
}

impl<S> Evaluator<S> for StartsWith
where
    S: AsRef<str> + Subject + ?Sized,
{
    fn holds(&self, subject: &S) -> Result<bool, EvaluatorFault> {
        Ok(subject.as_ref().starts_with(self.prefix.as_str()))
    }

    fn message(&self, subject: &S, polarity: Polarity) -> FluentMessage {
        part_message(subject, polarity, "start with", "prefix", &self.prefix)
    }
}

impl<S> Evaluator<S> for EndsWith
where
    S: AsRef<str> + Subject + ?Sized,
{
    fn holds(&self, subject: &S) -> Result<bool, EvaluatorFault> {
        Ok(subject.as_ref().ends_with(self.suffix.as_str()))
    }

    fn message(&self, subject: &S, polarity: Polarity) -> FluentMessage {
        part_message(subject, polarity, "end with", "suffix", &self.suffix)
    }
}

impl<S> Evaluator<S> for IsEmpty
where
    S: AsRef<str> + Subject + ?Sized,
{
    fn holds(&self, subject: &S) -> Result<bool, EvaluatorFault> {
        Ok(subject.as_ref().is_empty())
    }

    fn message(&self, subject: &S, polarity: Polarity) -> FluentMessage {
        let label = S::label();
        let summary = match polarity {
            Polarity::Affirmed => format!("The checked {label} is not empty."),
            Polarity::Negated => format!("The checked {label} is empty whereas it must not."),
        };
        FluentMessage::new(summary).checked(label, subject.render())
    }
}

/// `verb` is the bare infinitive ("contain", "start with"); `part` names the
/// expected piece ("substring", "prefix").
fn part_message<S>(subject: &S, polarity: Polarity, verb: &str, part: &str, expected: &str) -> FluentMessage
where
    S: Subject + ?Sized,
{
    let label = S::label();
    let summary = match polarity {
        Polarity::Affirmed => format!("The checked {label} does not {verb} the expected {part}."),
        Polarity::Negated => {
            format!("The checked {label} does {verb} the given {part} whereas it must not.")
        }
    };
    FluentMessage::new(summary)
        .checked(label, subject.render())
        .expected(part, expected.render())
}

#[cfg(test)]
mod tests {
    use fluent_types::{MessageStyle, Polarity};

    use super::{Contains, EndsWith, IsEmpty, StartsWith};
    use crate::evaluate;

    #[test]
    fn contains_works_for_str_and_string() {
        let style = MessageStyle::default();
        let name = String::from("Thomas");
        assert!(evaluate(&Contains::new("oma"), &name, Polarity::Affirmed, &style).is_ok());
        assert!(evaluate(&Contains::new("oma"), "Thomas", Polarity::Affirmed, &style).is_ok());
    }

    #[test]
    fn missing_substring_reports_both_sides() {
        let err = evaluate(&Contains::new("xyz"), "Thomas", Polarity::Affirmed, &MessageStyle::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The checked string does not contain the expected substring.\nThe checked string:\n\t[\"Thomas\"]\nThe expected substring:\n\t[\"xyz\"]"
        );
    }

    #[test]
    fn negated_contains_fails_when_present() {
        let err = evaluate(&Contains::new("oma"), "Thomas", Polarity::Negated, &MessageStyle::default())
            .unwrap_err();
        assert!(
            err.to_string()
                .starts_with("The checked string does contain the given substring whereas it must not.")
        );
    }

    #[test]
    fn prefix_and_suffix() {
        let style = MessageStyle::default();
        assert!(evaluate(&StartsWith::new("Tho"), "Thomas", Polarity::Affirmed, &style).is_ok());
        assert!(evaluate(&EndsWith::new("mas"), "Thomas", Polarity::Affirmed, &style).is_ok());
        assert!(evaluate(&EndsWith::new("Tho"), "Thomas", Polarity::Affirmed, &style).is_err());
    }

    #[test]
    fn empty_string() {
        let style = MessageStyle::default();
        assert!(evaluate(&IsEmpty, "", Polarity::Affirmed, &style).is_ok());
        let err = evaluate(&IsEmpty, "x", Polarity::Affirmed, &style).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The checked string is not empty.\nThe checked string:\n\t[\"x\"]"
        );
    }
}
