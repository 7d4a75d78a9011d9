//! Negation state carried by a fluent check.

use std::ops::Not;

/// Whether a check asserts its predicate or the complement of it.
///
/// `Affirmed` is the state every fresh or forked check starts in. Negation
/// is a per-check modifier: a check registered under `Negated` passes exactly
/// when the underlying predicate does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Polarity {
    #[default]
    Affirmed,
    Negated,
}

impl Polarity {
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Polarity::Affirmed => Polarity::Negated,
            Polarity::Negated => Polarity::Affirmed,
        }
    }

    #[must_use]
    pub const fn is_negated(self) -> bool {
        matches!(self, Polarity::Negated)
    }

    /// Whether a predicate outcome satisfies this polarity.
    #[must_use]
    pub const fn expects(self, holds: bool) -> bool {
        match self {
            Polarity::Affirmed => holds,
            Polarity::Negated => !holds,
        }
    }
}

impl Not for Polarity {
    type Output = Polarity;

    fn not(self) -> Self::Output {
        self.flip()
    }
}
