//! Resolved configuration types shared across crates.
//!
//! These types represent fully-validated settings. Raw TOML deserialization
//! structs (with `Option` fields) stay private in `fluent-config`, which
//! resolves them into these types at the parse boundary.

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueWidthError {
    #[error("value width must be at least {min} characters, got {requested}")]
    TooSmall { requested: usize, min: usize },
}

/// How much of a rendered value a failure message may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueWidth {
    #[default]
    Unbounded,
    /// Values longer than the width are cut and end with `...`.
    /// The ellipsis counts toward the width.
    Truncate(ClipWidth),
}

/// Character budget for a clipped value. Never smaller than the ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipWidth(usize);

impl ClipWidth {
    #[must_use]
    pub const fn chars(self) -> usize {
        self.0
    }
}

impl ValueWidth {
    pub const ELLIPSIS: &'static str = "...";
    pub const MIN_CHARS: usize = 3;

    pub fn truncate(max_chars: usize) -> Result<Self, ValueWidthError> {
        if max_chars < Self::MIN_CHARS {
            return Err(ValueWidthError::TooSmall {
                requested: max_chars,
                min: Self::MIN_CHARS,
            });
        }
        Ok(Self::Truncate(ClipWidth(max_chars)))
    }

    /// Clip `rendered` to this width, counting `char`s rather than bytes.
    #[must_use]
    pub fn apply(self, rendered: &str) -> Cow<'_, str> {
        let ValueWidth::Truncate(width) = self else {
            return Cow::Borrowed(rendered);
        };
        if rendered.chars().count() <= width.chars() {
            return Cow::Borrowed(rendered);
        }
        let take = width.chars() - Self::ELLIPSIS.len();
        let head: String = rendered.chars().take(take).collect();
        Cow::Owned(format!("{head}{}", Self::ELLIPSIS))
    }
}

/// Presentation rules applied when a failure message is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageStyle {
    value_width: ValueWidth,
}

impl MessageStyle {
    #[must_use]
    pub const fn new(value_width: ValueWidth) -> Self {
        Self { value_width }
    }

    #[must_use]
    pub const fn value_width(&self) -> ValueWidth {
        self.value_width
    }

    #[must_use]
    pub fn clip<'a>(&self, rendered: &'a str) -> Cow<'a, str> {
        self.value_width.apply(rendered)
    }
}

/// Everything a lazy registry needs to know about the environment it runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FluentSettings {
    message_style: MessageStyle,
}

impl FluentSettings {
    #[must_use]
    pub const fn new(message_style: MessageStyle) -> Self {
        Self { message_style }
    }

    #[must_use]
    pub const fn message_style(&self) -> &MessageStyle {
        &self.message_style
    }
}
