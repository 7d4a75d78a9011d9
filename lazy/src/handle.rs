//! The deferred check handle.

use std::fmt;

use fluent_checks::{
    Evaluator, IsEqualTo, IsInstanceOf, IsNotInstanceOf, Satisfies, TrySatisfies, evaluate,
};
use fluent_types::{EvaluatorFault, MessageStyle, Polarity, Subject};

use crate::registry::LazyChecks;

/// One subject under test across a fluent chain.
///
/// A handle is an immutable value: predicates never change it, they register
/// a check and hand back a fresh handle over the same value with the
/// polarity reset (a fork). `not` hands back a fresh handle with the
/// polarity flipped. Two branches started from the same handle therefore
/// never share negation state.
pub struct LazyCheck<'c, 'v, T> {
    registry: &'c LazyChecks<'v>,
    value: T,
    polarity: Polarity,
}

impl<'c, 'v, T> LazyCheck<'c, 'v, T> {
    pub(crate) fn new(registry: &'c LazyChecks<'v>, value: T) -> Self {
        Self {
            registry,
            value,
            polarity: Polarity::default(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Reads naturally between two predicates: `.is_positive().and().is_zero()`.
    pub fn and(self) -> Self {
        self
    }
}

impl<'c, 'v, T: Clone> LazyCheck<'c, 'v, T> {
    /// Negate the next predicate. Registers nothing.
    ///
    /// Flips the current polarity, so `not().not()` is the plain check.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> Self {
        self.with_polarity(self.polarity.flip())
    }

    /// Same value, polarity reset to affirmed.
    #[must_use]
    pub fn fork(&self) -> Self {
        self.with_polarity(Polarity::default())
    }

    /// Register `evaluator` against a snapshot of the value and the current
    /// polarity, and return the fork used to continue the chain.
    ///
    /// Every fluent predicate goes through here.
    pub fn check<E>(&self, evaluator: E) -> Self
    where
        E: Evaluator<T> + 'v,
        T: 'v,
    {
        let value = self.value.clone();
        let polarity = self.polarity;
        self.registry.push(Box::new(move |style: &MessageStyle| {
            evaluate(&evaluator, &value, polarity, style)
        }));
        self.fork()
    }

    pub fn is_equal_to<E>(&self, expected: E) -> Self
    where
        T: PartialEq<E> + Subject + 'v,
        E: Subject + 'v,
    {
        self.check(IsEqualTo::new(expected))
    }

    pub fn is_not_equal_to<E>(&self, expected: E) -> Self
    where
        T: PartialEq<E> + Subject + 'v,
        E: Subject + 'v,
    {
        self.not().is_equal_to(expected)
    }

    /// For `Option<X>` subjects the comparison is against `X`.
    pub fn is_instance_of<U: 'static>(&self) -> Self
    where
        T: Subject + 'static,
    {
        self.check(IsInstanceOf::<U>::new())
    }

    pub fn is_not_instance_of<U: 'static>(&self) -> Self
    where
        T: Subject + 'static,
    {
        self.check(IsNotInstanceOf::<U>::new())
    }

    pub fn satisfies<F>(&self, description: impl Into<String>, predicate: F) -> Self
    where
        T: Subject + 'v,
        F: Fn(&T) -> bool + 'v,
    {
        self.check(Satisfies::new(description, predicate))
    }

    /// Like [`satisfies`](Self::satisfies); an `Err` from `predicate` aborts
    /// the run instead of counting as a failure.
    pub fn try_satisfies<F>(&self, description: impl Into<String>, predicate: F) -> Self
    where
        T: Subject + 'v,
        F: Fn(&T) -> Result<bool, EvaluatorFault> + 'v,
    {
        self.check(TrySatisfies::new(description, predicate))
    }

    fn with_polarity(&self, polarity: Polarity) -> Self {
        Self {
            registry: self.registry,
            value: self.value.clone(),
            polarity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyCheck<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyCheck")
            .field("value", &self.value)
            .field("polarity", &self.polarity)
            .finish_non_exhaustive()
    }
}
