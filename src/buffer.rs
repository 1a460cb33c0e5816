//! Text buffer - document content plus per-character style tags

use crate::error::{EditorError, Result};
use crate::syntax::{Span, StyleTag};

/// The document content and its style annotations
///
/// The style mapping always holds exactly one tag per character of the
/// content. After [`replace_content`](Self::replace_content) the tags are
/// stale (left over from the previous content, padded with `Default`)
/// until the next classification pass repaints them.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    /// Document content
    text: String,
    /// Length of `text` in characters
    len: usize,
    /// One tag per character
    styles: Vec<StyleTag>,
    /// Whether `styles` predates the current content
    stale: bool,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire content in one operation
    pub fn replace_content(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
        self.len = self.text.chars().count();
        self.styles.resize(self.len, StyleTag::Default);
        self.stale = true;
    }

    /// Get the full content
    pub fn current_text(&self) -> &str {
        &self.text
    }

    /// Get number of characters
    pub fn len_chars(&self) -> usize {
        self.len
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether content changed since styles were last applied
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Effective tag at a character offset
    pub fn style_at(&self, offset: usize) -> Result<StyleTag> {
        self.styles
            .get(offset)
            .copied()
            .ok_or(EditorError::OutOfRange {
                offset,
                len: self.len,
            })
    }

    /// All tags, one per character
    pub fn styles(&self) -> &[StyleTag] {
        &self.styles
    }

    /// Coalesce the style mapping into maximal runs of one tag
    ///
    /// The runs are sorted, contiguous, and cover the whole buffer.
    pub fn runs(&self) -> Vec<Span> {
        let mut runs: Vec<Span> = Vec::new();
        for (offset, &tag) in self.styles.iter().enumerate() {
            match runs.last_mut() {
                Some(run) if run.tag == tag => run.end = offset + 1,
                _ => runs.push(Span::new(offset, offset + 1, tag)),
            }
        }
        runs
    }

    /// Runs paired with the text they cover, for renderers
    pub fn styled_runs(&self) -> Vec<(StyleTag, &str)> {
        // Byte offset of every character boundary, end of text included
        let mut bounds = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.text.len()));
        let mut byte_start = bounds.next().unwrap_or(0);
        let mut out = Vec::new();

        for run in self.runs() {
            let byte_end = bounds.nth(run.len() - 1).unwrap_or(self.text.len());
            out.push((run.tag, &self.text[byte_start..byte_end]));
            byte_start = byte_end;
        }

        out
    }

    /// Reset every tag to `Default` and hand out the mapping for painting
    pub(crate) fn reset_styles(&mut self) -> &mut [StyleTag] {
        self.styles.clear();
        self.styles.resize(self.len, StyleTag::Default);
        &mut self.styles
    }

    /// Put back a mapping saved before a failed repaint; it stays stale
    pub(crate) fn restore_styles(&mut self, mut styles: Vec<StyleTag>) {
        styles.resize(self.len, StyleTag::Default);
        self.styles = styles;
        self.stale = true;
    }

    /// Record that the mapping now matches the content
    pub(crate) fn mark_styled(&mut self) {
        self.stale = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer() {
        let buf = TextBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.current_text(), "");
        assert!(buf.runs().is_empty());
    }

    #[test]
    fn test_replace_round_trip() {
        let mut buf = TextBuffer::new();
        for text in ["hello", "", "naïve → ok\n", "line1\r\nline2"] {
            buf.replace_content(text);
            assert_eq!(buf.current_text(), text);
            assert_eq!(buf.len_chars(), text.chars().count());
            assert_eq!(buf.styles().len(), buf.len_chars());
        }
    }

    #[test]
    fn test_replace_marks_stale() {
        let mut buf = TextBuffer::new();
        buf.replace_content("abc");
        assert!(buf.is_stale());
        buf.reset_styles();
        buf.mark_styled();
        assert!(!buf.is_stale());
        buf.replace_content("abcd");
        assert!(buf.is_stale());
    }

    #[test]
    fn test_stale_styles_stay_in_range() {
        let mut buf = TextBuffer::new();
        buf.replace_content("abcdef");
        buf.reset_styles().fill(StyleTag::Comment);
        buf.mark_styled();

        buf.replace_content("ab");
        assert_eq!(buf.styles(), &[StyleTag::Comment, StyleTag::Comment]);
        assert!(buf.style_at(2).is_err());

        buf.replace_content("abcd");
        assert_eq!(buf.style_at(3).unwrap(), StyleTag::Default);
    }

    #[test]
    fn test_restore_styles_fits_content() {
        let mut buf = TextBuffer::new();
        buf.replace_content("abc");
        buf.restore_styles(vec![StyleTag::Number; 5]);
        assert_eq!(buf.styles(), &[StyleTag::Number; 3]);
        assert!(buf.is_stale());

        buf.restore_styles(vec![StyleTag::Number]);
        assert_eq!(buf.styles(), &[StyleTag::Number, StyleTag::Default, StyleTag::Default]);
    }

    #[test]
    fn test_style_at_out_of_range() {
        let mut buf = TextBuffer::new();
        assert!(matches!(
            buf.style_at(0),
            Err(EditorError::OutOfRange { offset: 0, len: 0 })
        ));
        buf.replace_content("xy");
        assert!(buf.style_at(1).is_ok());
        assert!(matches!(
            buf.style_at(2),
            Err(EditorError::OutOfRange { offset: 2, len: 2 })
        ));
    }

    #[test]
    fn test_runs_cover_buffer() {
        let mut buf = TextBuffer::new();
        buf.replace_content("aabbbc");
        let styles = buf.reset_styles();
        styles[2..5].fill(StyleTag::Number);
        buf.mark_styled();

        assert_eq!(
            buf.runs(),
            vec![
                Span::new(0, 2, StyleTag::Default),
                Span::new(2, 5, StyleTag::Number),
                Span::new(5, 6, StyleTag::Default),
            ]
        );
    }

    #[test]
    fn test_styled_runs_slice_multibyte_text() {
        let mut buf = TextBuffer::new();
        buf.replace_content("é \"ü\" ø");
        let styles = buf.reset_styles();
        styles[2..5].fill(StyleTag::String);
        buf.mark_styled();

        assert_eq!(
            buf.styled_runs(),
            vec![
                (StyleTag::Default, "é "),
                (StyleTag::String, "\"ü\""),
                (StyleTag::Default, " ø"),
            ]
        );
    }
}
