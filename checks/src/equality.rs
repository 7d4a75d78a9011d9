use std::any::type_name;

use fluent_types::{EvaluatorFault, FluentMessage, Polarity, Subject, shorten_type_name};

use crate::evaluator::Evaluator;

/// Structural equality through `PartialEq<E>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsEqualTo<E> {
    expected: E,
}

impl<E> IsEqualTo<E> {
    pub fn new(expected: E) -> Self {
        Self { expected }
    }

    pub fn expected(&self) -> &E {
        &self.expected
    }
}

impl<T, E> Evaluator<T> for IsEqualTo<E>
where
    T: PartialEq<E> + Subject + ?Sized,
    E: Subject,
{
    fn holds(&self, subject: &T) -> Result<bool, EvaluatorFault> {
        Ok(*subject == self.expected)
    }

    fn message(&self, subject: &T, polarity: Polarity) -> FluentMessage {
        let label = T::label();
        let summary = match polarity {
            Polarity::Affirmed => format!("The checked {label} is different from the expected one."),
            Polarity::Negated => {
                format!("The checked {label} is equal to the expected one whereas it must not.")
            }
        };
        let checked = subject.render();
        let expected = self.expected.render();
        // Same text, different values: show the types so the reader can tell them apart.
        if polarity == Polarity::Affirmed && checked == expected {
            return FluentMessage::new(summary)
                .checked(label, checked)
                .of_type(shortened::<T>())
                .expected(E::label(), expected)
                .of_type(shortened::<E>());
        }
        FluentMessage::new(summary)
            .checked(label, checked)
            .expected(E::label(), expected)
    }
}

fn shortened<T: ?Sized>() -> String {
    shorten_type_name(type_name::<T>())
}

#[cfg(test)]
mod tests {
    use fluent_types::{MessageStyle, Polarity};

    use super::IsEqualTo;
    use crate::evaluate;

    #[test]
    fn equal_values_pass() {
        let style = MessageStyle::default();
        assert!(evaluate(&IsEqualTo::new(42_i32), &42_i32, Polarity::Affirmed, &style).is_ok());
        assert!(evaluate(&IsEqualTo::new("a"), &String::from("a"), Polarity::Affirmed, &style).is_ok());
        assert!(evaluate(&IsEqualTo::new(1_i32), &2_i32, Polarity::Negated, &style).is_ok());
    }

    #[test]
    fn mismatch_shows_both_values() {
        let err = evaluate(&IsEqualTo::new(3_i32), &2_i32, Polarity::Affirmed, &MessageStyle::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The checked value is different from the expected one.\nThe checked value:\n\t[2]\nThe expected value:\n\t[3]"
        );
    }

    #[test]
    fn identical_rendering_adds_types() {
        let err = evaluate(&IsEqualTo::new(f64::NAN), &f64::NAN, Polarity::Affirmed, &MessageStyle::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The checked value is different from the expected one.\nThe checked value:\n\t[NaN] of type: [f64]\nThe expected value:\n\t[NaN] of type: [f64]"
        );
    }

    #[test]
    fn negated_equality_on_equal_values_fails() {
        let err = evaluate(&IsEqualTo::new('x'), &'x', Polarity::Negated, &MessageStyle::default())
            .unwrap_err();
        assert!(
            err.to_string()
                .starts_with("The checked char is equal to the expected one whereas it must not.")
        );
    }
}
