//! Fluent predicates available on a [`LazyCheck`], grouped by subject type.
//!
//! Each method registers exactly one deferred check through
//! [`LazyCheck::check`] and returns the forked handle.

use fluent_checks::{
    Contains, EndsWith, IsADigit, IsALetter, IsEmpty, IsFalse, IsNegative, IsNotNull, IsNull,
    IsPositive, IsStrictlyGreaterThan, IsStrictlyLessThan, IsTrue, IsZero, Numeric, StartsWith,
};
use fluent_types::Subject;

use crate::handle::LazyCheck;

pub trait BooleanCheck {
    fn is_true(&self) -> Self;
    fn is_false(&self) -> Self;
}

impl BooleanCheck for LazyCheck<'_, '_, bool> {
    fn is_true(&self) -> Self {
        self.check(IsTrue)
    }

    fn is_false(&self) -> Self {
        self.check(IsFalse)
    }
}

pub trait CharCheck {
    fn is_a_letter(&self) -> Self;
    fn is_a_digit(&self) -> Self;
}

impl CharCheck for LazyCheck<'_, '_, char> {
    fn is_a_letter(&self) -> Self {
        self.check(IsALetter)
    }

    fn is_a_digit(&self) -> Self {
        self.check(IsADigit)
    }
}

/// Predicates for `String`, `&str` and anything else that reads as a `str`.
pub trait StringCheck {
    fn contains(&self, needle: impl Into<String>) -> Self;
    fn starts_with(&self, prefix: impl Into<String>) -> Self;
    fn ends_with(&self, suffix: impl Into<String>) -> Self;
    fn is_empty(&self) -> Self;
}

impl<'v, S> StringCheck for LazyCheck<'_, 'v, S>
where
    S: AsRef<str> + Subject + Clone + 'v,
{
    fn contains(&self, needle: impl Into<String>) -> Self {
        self.check(Contains::new(needle))
    }

    fn starts_with(&self, prefix: impl Into<String>) -> Self {
        self.check(StartsWith::new(prefix))
    }

    fn ends_with(&self, suffix: impl Into<String>) -> Self {
        self.check(EndsWith::new(suffix))
    }

    fn is_empty(&self) -> Self {
        self.check(IsEmpty)
    }
}

pub trait NumericCheck<N> {
    fn is_positive(&self) -> Self;
    fn is_negative(&self) -> Self;
    fn is_zero(&self) -> Self;
    fn is_strictly_greater_than(&self, threshold: N) -> Self;
    fn is_strictly_less_than(&self, threshold: N) -> Self;
}

impl<'v, N> NumericCheck<N> for LazyCheck<'_, 'v, N>
where
    N: Numeric + 'v,
{
    fn is_positive(&self) -> Self {
        self.check(IsPositive)
    }

    fn is_negative(&self) -> Self {
        self.check(IsNegative)
    }

    fn is_zero(&self) -> Self {
        self.check(IsZero)
    }

    fn is_strictly_greater_than(&self, threshold: N) -> Self {
        self.check(IsStrictlyGreaterThan(threshold))
    }

    fn is_strictly_less_than(&self, threshold: N) -> Self {
        self.check(IsStrictlyLessThan(threshold))
    }
}

pub trait NullableCheck {
    fn is_null(&self) -> Self;
    fn is_not_null(&self) -> Self;
}

impl<T> NullableCheck for LazyCheck<'_, '_, Option<T>>
where
    T: Subject + Clone + 'static,
{
    fn is_null(&self) -> Self {
        self.check(IsNull)
    }

    fn is_not_null(&self) -> Self {
        self.check(IsNotNull)
    }
}

#[cfg(test)]
mod tests {
    use super::{BooleanCheck, CharCheck, NullableCheck, NumericCheck, StringCheck};
    use crate::registry::LazyChecks;

    #[test]
    fn every_predicate_registers_exactly_one_check() {
        let checks = LazyChecks::new();
        checks.that(true).is_true();
        checks.that(false).is_false();
        checks.that('a').is_a_letter();
        checks.that('1').is_a_digit();
        checks.that("abc").contains("b");
        checks.that(String::from("abc")).starts_with("a");
        checks.that("abc").ends_with("c");
        checks.that("").is_empty();
        checks.that(2_i64).is_positive();
        checks.that(-2.5_f32).is_negative();
        checks.that(0_usize).is_zero();
        checks.that(3_u16).is_strictly_greater_than(2);
        checks.that(1.0_f64).is_strictly_less_than(1.5);
        checks.that(None::<u8>).is_null();
        checks.that(Some('x')).is_not_null();
        assert_eq!(checks.len(), 15);
        assert!(checks.run_all().is_ok());
    }

    #[test]
    fn chained_predicates_share_the_subject() {
        let checks = LazyChecks::new();
        checks
            .that(7_i32)
            .is_positive()
            .and()
            .is_strictly_greater_than(5)
            .not()
            .is_zero();
        assert_eq!(checks.len(), 3);
        assert!(checks.run_all().is_ok());
    }

    #[test]
    fn negation_applies_to_the_next_predicate_only() {
        let checks = LazyChecks::new();
        checks.that("abc").not().contains("z").contains("z");
        let err = checks.run_all().unwrap_err();
        assert_eq!(err.aggregate().unwrap().count(), 1);
    }
}
