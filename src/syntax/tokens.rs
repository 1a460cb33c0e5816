//! Style tags for syntax highlighting
//!
//! This module defines the closed set of lexical categories the
//! classifier recognizes and their default visual styles.

use super::style::{Color, Style};

/// Lexical category of a character in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleTag {
    /// Plain text (no special highlighting)
    #[default]
    Default,
    /// Language keywords (if, else, fn, let, etc.)
    Keyword,
    /// Runs of ASCII digits
    Number,
    /// Double-quoted string literals
    String,
    /// Line comments
    Comment,
}

impl StyleTag {
    /// Every tag, `Default` first
    pub const ALL: [StyleTag; 5] = [
        StyleTag::Default,
        StyleTag::Keyword,
        StyleTag::Number,
        StyleTag::String,
        StyleTag::Comment,
    ];

    /// Classifier passes in paint order. Later passes win on overlap.
    pub const PASS_ORDER: [StyleTag; 4] = [
        StyleTag::Keyword,
        StyleTag::Number,
        StyleTag::String,
        StyleTag::Comment,
    ];

    /// Get the default style for this tag
    pub fn default_style(&self) -> Style {
        match self {
            StyleTag::Default => Style::default(),
            StyleTag::Keyword => Style::fg(Color::Magenta).with_bold(),
            StyleTag::Number => Style::fg(Color::Cyan),
            StyleTag::String => Style::fg(Color::Green),
            StyleTag::Comment => Style::fg(Color::BrightBlack).with_italic(),
        }
    }

    /// Get a human-readable name for this tag
    pub fn name(&self) -> &'static str {
        match self {
            StyleTag::Default => "Default",
            StyleTag::Keyword => "Keyword",
            StyleTag::Number => "Number",
            StyleTag::String => "String",
            StyleTag::Comment => "Comment",
        }
    }

    /// Parse a tag from its name, case-insensitively (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        StyleTag::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }

    /// Position in a table indexed by tag
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}
