//! Pattern rules for syntax highlighting
//!
//! Each rule is one regex that tags every match it finds in the whole
//! buffer. Rules are independent: a rule never looks at what another
//! rule matched.

use regex::{Regex, RegexBuilder};

use super::style::Span;
use super::tokens::StyleTag;
use crate::error::Result;

/// Default compiled-program size limit for a single rule
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Double-quoted string, backslash escapes allowed, never crossing a line
const STRING_PATTERN: &str = r#""(?:[^"\\\r\n]|\\[^\r\n])*""#;

/// Maximal run of ASCII digits
const NUMBER_PATTERN: &str = r"[0-9]+";

/// A whole-buffer pattern rule
///
/// Matches a regex pattern and assigns a style tag to every match.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Tag to assign to matches
    pub tag: StyleTag,
    /// Reject matches touching an identifier character on either side
    standalone: bool,
}

/// Characters that make up identifiers, the same set as regex `\w`
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl PatternRule {
    /// Compile a new pattern rule
    pub fn new(name: &str, pattern: &str, tag: StyleTag, size_limit: usize) -> Result<Self> {
        let regex = RegexBuilder::new(pattern).size_limit(size_limit).build()?;
        Ok(Self {
            name: name.to_string(),
            pattern: regex,
            tag,
            standalone: false,
        })
    }

    /// Rule matching any of `keywords` as a standalone word, case-sensitively
    ///
    /// A keyword may start or end with a non-identifier character
    /// (`#define`, `c++`); it still has to be bounded by non-identifier
    /// characters on both sides.
    pub fn keywords<S: AsRef<str>>(keywords: &[S], size_limit: usize) -> Result<Self> {
        let mut words: Vec<&str> = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .collect();
        // Longest first so a keyword never shadows a longer one sharing its prefix
        words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        words.dedup();

        // `\b` only works next to a word character; the other sides are
        // checked in `find_all`
        let alternation: Vec<String> = words
            .iter()
            .map(|w| {
                let lead = if w.starts_with(is_word_char) { r"\b" } else { "" };
                let trail = if w.ends_with(is_word_char) { r"\b" } else { "" };
                format!("{}{}{}", lead, regex::escape(w), trail)
            })
            .collect();
        let pattern = format!("(?:{})", alternation.join("|"));
        let mut rule = Self::new("keyword", &pattern, StyleTag::Keyword, size_limit)?;
        rule.standalone = true;
        Ok(rule)
    }

    /// Rule matching runs of ASCII digits
    pub fn numbers(size_limit: usize) -> Result<Self> {
        Self::new("number", NUMBER_PATTERN, StyleTag::Number, size_limit)
    }

    /// Rule matching terminated double-quoted strings
    pub fn strings(size_limit: usize) -> Result<Self> {
        Self::new("string", STRING_PATTERN, StyleTag::String, size_limit)
    }

    /// Rule matching `marker` through the end of its line
    pub fn line_comment(marker: &str, size_limit: usize) -> Result<Self> {
        let pattern = format!(r"{}[^\r\n]*", regex::escape(marker));
        Self::new("line_comment", &pattern, StyleTag::Comment, size_limit)
    }

    /// Whether the match `[start, end)` is not glued to an identifier
    fn is_standalone(text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.map_or(false, is_word_char) && !after.map_or(false, is_word_char)
    }

    /// Find every match in `text`, as character-offset spans in ascending order
    pub fn find_all(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        // Matches come back in ascending byte order, so the byte->char
        // conversion can walk forward from the previous match.
        let mut byte_pos = 0;
        let mut char_pos = 0;
        let mut at = 0;

        while let Some(m) = self.pattern.find_at(text, at) {
            let rejected = m.start() == m.end()
                || (self.standalone && !Self::is_standalone(text, m.start(), m.end()));
            if rejected {
                // Retry one character further on; a shorter keyword may start inside
                match text[m.start()..].chars().next() {
                    Some(c) => at = m.start() + c.len_utf8(),
                    None => break,
                }
                continue;
            }
            at = m.end();
            char_pos += text[byte_pos..m.start()].chars().count();
            let start = char_pos;
            char_pos += m.as_str().chars().count();
            byte_pos = m.end();
            spans.push(Span::new(start, char_pos, self.tag));
        }

        spans
    }
}
