//! Structured failure messages.
//!
//! A [`FluentMessage`] is a summary sentence followed by labelled value blocks:
//!
//! ```text
//! The checked char is not a letter.
//! The checked char:
//!     ['.']
//! ```
//!
//! (value lines are indented with a tab.) Evaluators build the structure;
//! the checker renders it once, under the [`MessageStyle`] of the registry
//! that runs the check.

use std::fmt;

use crate::settings::MessageStyle;

/// Which side of the comparison a value block describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRole {
    Checked,
    Expected,
}

impl BlockRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BlockRole::Checked => "checked",
            BlockRole::Expected => "expected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ValueBlock {
    role: BlockRole,
    label: String,
    value: String,
    type_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluentMessage {
    summary: String,
    blocks: Vec<ValueBlock>,
}

impl FluentMessage {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            blocks: Vec::new(),
        }
    }

    /// Append a block describing the checked value.
    pub fn checked(self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.block(BlockRole::Checked, label.into(), value.into())
    }

    /// Append a block describing the expected value.
    pub fn expected(self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.block(BlockRole::Expected, label.into(), value.into())
    }

    /// Annotate the most recent block with a type name. No-op without blocks.
    pub fn of_type(mut self, type_name: impl Into<String>) -> Self {
        if let Some(last) = self.blocks.last_mut() {
            last.type_name = Some(type_name.into());
        }
        self
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn render(&self, style: &MessageStyle) -> String {
        let mut out = self.summary.clone();
        for block in &self.blocks {
            out.push_str(&format!(
                "\nThe {} {}:\n\t[{}]",
                block.role.as_str(),
                block.label,
                style.clip(&block.value)
            ));
            if let Some(type_name) = &block.type_name {
                out.push_str(&format!(" of type: [{type_name}]"));
            }
        }
        out
    }

    fn block(mut self, role: BlockRole, label: String, value: String) -> Self {
        self.blocks.push(ValueBlock {
            role,
            label,
            value,
            type_name: None,
        });
        self
    }
}

impl fmt::Display for FluentMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&MessageStyle::default()))
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;

    use super::FluentMessage;
    use crate::settings::{MessageStyle, ValueWidth};

    #[test]
    fn summary_only() {
        let message = FluentMessage::new("The checked value is odd.");
        assert_eq!(message.to_string(), "The checked value is odd.");
    }

    #[test]
    fn blocks_follow_summary_in_order() {
        let message = FluentMessage::new("The checked value is different from the expected one.")
            .checked("value", "1")
            .expected("value", "2");
        assert_eq!(
            message.to_string(),
            "The checked value is different from the expected one.\nThe checked value:\n\t[1]\nThe expected value:\n\t[2]"
        );
    }

    #[test]
    fn type_annotation_attaches_to_last_block() {
        let message = FluentMessage::new("The checked value is not an instance of the expected type.")
            .checked("value", "42")
            .of_type("i32")
            .expected("type", "u8");
        assert_debug_snapshot!(
            message.to_string(),
            @r#""The checked value is not an instance of the expected type.\nThe checked value:\n\t[42] of type: [i32]\nThe expected type:\n\t[u8]""#
        );
    }

    #[test]
    fn type_annotation_without_blocks_is_ignored() {
        let message = FluentMessage::new("summary").of_type("i32");
        assert_eq!(message.to_string(), "summary");
    }

    #[test]
    fn style_clips_long_values() {
        let style = MessageStyle::new(ValueWidth::truncate(8).unwrap());
        let message = FluentMessage::new("s").checked("string", "\"abcdefghij\"");
        assert_eq!(message.render(&style), "s\nThe checked string:\n\t[\"abcd...]");
    }
}
