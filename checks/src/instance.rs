//! Type-membership predicates.
//!
//! For a plain subject the static type is compared with the expected type.
//! For a nullable subject (`Option<T>`) the wrapped type `T` is compared
//! instead, whether or not a value is present, so `None::<i32>` is an
//! instance of `i32`. Nullable subjects also get their own wording, naming
//! the wrapped type rather than the wrapper.

use std::fmt;
use std::marker::PhantomData;

use fluent_types::{EvaluatorFault, FluentMessage, Polarity, Subject, TypeIdentity};

use crate::evaluator::Evaluator;

pub struct IsInstanceOf<U>(PhantomData<fn() -> U>);

pub struct IsNotInstanceOf<U>(PhantomData<fn() -> U>);

impl<U> IsInstanceOf<U> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U> IsNotInstanceOf<U> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U> Default for IsInstanceOf<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Default for IsNotInstanceOf<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: 'static> fmt::Debug for IsInstanceOf<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IsInstanceOf<{}>", TypeIdentity::of::<U>())
    }
}

impl<U: 'static> fmt::Debug for IsNotInstanceOf<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IsNotInstanceOf<{}>", TypeIdentity::of::<U>())
    }
}

impl<T, U> Evaluator<T> for IsInstanceOf<U>
where
    T: Subject + ?Sized + 'static,
    U: 'static,
{
    fn holds(&self, _subject: &T) -> Result<bool, EvaluatorFault> {
        Ok(is_instance::<T, U>())
    }

    fn message(&self, subject: &T, _polarity: Polarity) -> FluentMessage {
        instance_message::<T, U>(subject)
    }
}

impl<T, U> Evaluator<T> for IsNotInstanceOf<U>
where
    T: Subject + ?Sized + 'static,
    U: 'static,
{
    fn holds(&self, _subject: &T) -> Result<bool, EvaluatorFault> {
        Ok(!is_instance::<T, U>())
    }

    fn message(&self, subject: &T, _polarity: Polarity) -> FluentMessage {
        instance_message::<T, U>(subject)
    }
}

fn is_instance<T, U>() -> bool
where
    T: Subject + ?Sized + 'static,
    U: 'static,
{
    T::nullable_inner()
        .unwrap_or_else(TypeIdentity::of::<T>)
        .is::<U>()
}

fn instance_message<T, U>(subject: &T) -> FluentMessage
where
    T: Subject + ?Sized + 'static,
    U: 'static,
{
    let is_instance = is_instance::<T, U>();
    match T::nullable_inner() {
        Some(inner) => nullable_message::<T, U>(subject, inner, is_instance),
        None => plain_message::<T, U>(subject, is_instance),
    }
}

fn plain_message<T, U>(subject: &T, is_instance: bool) -> FluentMessage
where
    T: Subject + ?Sized + 'static,
    U: 'static,
{
    let label = T::label();
    let actual = TypeIdentity::of::<T>().short_name();
    let expected = TypeIdentity::of::<U>().short_name();
    if is_instance {
        return FluentMessage::new(format!(
            "The checked {label} is an instance of [{expected}] whereas it must not."
        ))
        .checked(label, subject.render())
        .of_type(actual);
    }
    FluentMessage::new(format!(
        "The checked {label} is not an instance of the expected type."
    ))
    .checked(label, subject.render())
    .of_type(actual)
    .expected("type", expected)
}

fn nullable_message<T, U>(subject: &T, inner: TypeIdentity, is_instance: bool) -> FluentMessage
where
    T: Subject + ?Sized + 'static,
    U: 'static,
{
    let label = T::label();
    let wrapper = TypeIdentity::of::<T>().short_name();
    let expected = TypeIdentity::of::<U>().short_name();
    if is_instance {
        return FluentMessage::new(format!(
            "The checked {label} wraps an instance of [{expected}] whereas it must not."
        ))
        .checked(label, subject.render())
        .of_type(wrapper);
    }
    FluentMessage::new(format!(
        "The checked {label} wraps [{inner}] instead of the expected type."
    ))
    .checked(label, subject.render())
    .of_type(wrapper)
    .expected("type", expected)
}

#[cfg(test)]
mod tests {
    use fluent_types::{MessageStyle, Polarity};

    use super::{IsInstanceOf, IsNotInstanceOf};
    use crate::evaluate;

    #[derive(Debug)]
    struct Person {
        age: u8,
    }

    fluent_types::debug_subject!(Person);

    #[test]
    fn same_static_type_is_instance() {
        let style = MessageStyle::default();
        let hero = Person { age: 40 };
        assert_eq!(hero.age, 40);
        assert!(evaluate(&IsInstanceOf::<Person>::new(), &hero, Polarity::Affirmed, &style).is_ok());
        assert!(evaluate(&IsNotInstanceOf::<String>::new(), &hero, Polarity::Affirmed, &style).is_ok());
    }

    #[test]
    fn plain_mismatch_names_both_types() {
        let err = evaluate(&IsInstanceOf::<u8>::new(), &42_i32, Polarity::Affirmed, &MessageStyle::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The checked value is not an instance of the expected type.\nThe checked value:\n\t[42] of type: [i32]\nThe expected type:\n\t[u8]"
        );
    }

    #[test]
    fn plain_negated_match() {
        let err = evaluate(&IsInstanceOf::<i32>::new(), &42_i32, Polarity::Negated, &MessageStyle::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The checked value is an instance of [i32] whereas it must not.\nThe checked value:\n\t[42] of type: [i32]"
        );
    }

    #[test]
    fn empty_nullable_is_instance_of_inner_type() {
        let style = MessageStyle::default();
        let empty: Option<i32> = None;
        assert!(evaluate(&IsInstanceOf::<i32>::new(), &empty, Polarity::Affirmed, &style).is_ok());
        assert!(evaluate(&IsNotInstanceOf::<i64>::new(), &empty, Polarity::Affirmed, &style).is_ok());
        assert!(evaluate(&IsInstanceOf::<Option<i32>>::new(), &empty, Polarity::Affirmed, &style).is_err());
    }

    #[test]
    fn nullable_mismatch_uses_nullable_wording() {
        let err = evaluate(&IsInstanceOf::<u8>::new(), &Some(7_i32), Polarity::Affirmed, &MessageStyle::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The checked nullable value wraps [i32] instead of the expected type.\nThe checked nullable value:\n\t[7] of type: [Option<i32>]\nThe expected type:\n\t[u8]"
        );
    }

    #[test]
    fn is_not_instance_of_on_nullable_match() {
        let err = evaluate(&IsNotInstanceOf::<i32>::new(), &None::<i32>, Polarity::Affirmed, &MessageStyle::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The checked nullable value wraps an instance of [i32] whereas it must not.\nThe checked nullable value:\n\t[null] of type: [Option<i32>]"
        );
    }
}
