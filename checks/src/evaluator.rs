use fluent_types::{CheckError, CheckFailure, EvaluatorFault, FluentMessage, MessageStyle, Polarity};

/// A predicate over `T` together with the wording of its failures.
pub trait Evaluator<T: ?Sized> {
    /// Whether the predicate holds, ignoring negation.
    ///
    /// An `Err` means the predicate cannot be decided for this subject.
    fn holds(&self, subject: &T) -> Result<bool, EvaluatorFault>;

    /// Failure message for a check registered under `polarity`.
    ///
    /// Only called on failure, so under `Affirmed` the predicate did not
    /// hold and under `Negated` it did.
    fn message(&self, subject: &T, polarity: Polarity) -> FluentMessage;
}

/// Run one check now.
pub fn evaluate<T, E>(
    evaluator: &E,
    subject: &T,
    polarity: Polarity,
    style: &MessageStyle,
) -> Result<(), CheckError>
where
    T: ?Sized,
    E: Evaluator<T> + ?Sized,
{
    let holds = evaluator.holds(subject)?;
    if polarity.expects(holds) {
        return Ok(());
    }
    let message = evaluator.message(subject, polarity).render(style);
    Err(CheckFailure::new(message).into())
}

#[cfg(test)]
mod tests {
    use fluent_types::{
        CheckError, EvaluatorFault, FluentMessage, MessageStyle, Polarity, ValueWidth,
    };

    use super::{Evaluator, evaluate};

    struct IsEven;

    impl Evaluator<i64> for IsEven {
        fn holds(&self, subject: &i64) -> Result<bool, EvaluatorFault> {
            if *subject < 0 {
                return Err(EvaluatorFault::new("negative numbers are not supported"));
            }
            Ok(subject % 2 == 0)
        }

        fn message(&self, subject: &i64, polarity: Polarity) -> FluentMessage {
            let summary = if polarity.is_negated() {
                "The checked value is even whereas it must not."
            } else {
                "The checked value is odd."
            };
            FluentMessage::new(summary).checked("value", subject.to_string())
        }
    }

    #[test]
    fn passing_check_is_ok() {
        let style = MessageStyle::default();
        assert!(evaluate(&IsEven, &4_i64, Polarity::Affirmed, &style).is_ok());
        assert!(evaluate(&IsEven, &3_i64, Polarity::Negated, &style).is_ok());
    }

    #[test]
    fn affirmed_failure_uses_affirmed_wording() {
        let err = evaluate(&IsEven, &3_i64, Polarity::Affirmed, &MessageStyle::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The checked value is odd.\nThe checked value:\n\t[3]"
        );
    }

    #[test]
    fn negated_failure_uses_negated_wording() {
        let err = evaluate(&IsEven, &4_i64, Polarity::Negated, &MessageStyle::default()).unwrap_err();
        assert!(matches!(err, CheckError::Failed(_)));
        assert!(err.to_string().starts_with("The checked value is even whereas it must not."));
    }

    #[test]
    fn fault_is_not_a_failure() {
        let err = evaluate(&IsEven, &-1_i64, Polarity::Negated, &MessageStyle::default()).unwrap_err();
        assert_eq!(
            err,
            CheckError::Unexpected(EvaluatorFault::new("negative numbers are not supported"))
        );
    }

    #[test]
    fn style_is_applied_to_values() {
        let style = MessageStyle::new(ValueWidth::truncate(4).unwrap());
        let err = evaluate(&IsEven, &123_457_i64, Polarity::Affirmed, &style).unwrap_err();
        assert!(err.to_string().ends_with("\t[1...]"));
    }
}
