//! Style application
//!
//! Paints classifier spans onto a buffer's style mapping.

use super::style::Span;
use super::tokens::StyleTag;
use crate::buffer::TextBuffer;

/// Reset `buffer` to Default, then paint `spans` in pass order.
///
/// Keyword spans are painted first and Comment spans last, so where
/// spans overlap the later pass wins. Spans reaching past the end of the
/// buffer are clamped; spans lying wholly outside it are dropped.
pub fn apply_styles(buffer: &mut TextBuffer, spans: &[Span]) {
    let len = buffer.len_chars();
    let styles = buffer.reset_styles();
    let mut dropped = 0;

    for tag in StyleTag::PASS_ORDER {
        for span in spans.iter().filter(|s| s.tag == tag) {
            match span.clamped(len) {
                Some(span) => styles[span.start..span.end].fill(tag),
                None => dropped += 1,
            }
        }
    }

    if dropped > 0 {
        log::debug!("dropped {} span(s) outside buffer of length {}", dropped, len);
    }
    buffer.mark_styled();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> TextBuffer {
        let mut buffer = TextBuffer::new();
        buffer.replace_content(text);
        buffer
    }

    #[test]
    fn test_resets_to_default() {
        let mut buf = buffer("abc");
        apply_styles(&mut buf, &[Span::new(0, 3, StyleTag::Keyword)]);
        apply_styles(&mut buf, &[]);
        assert!(buf.styles().iter().all(|t| *t == StyleTag::Default));
        assert!(!buf.is_stale());
    }

    #[test]
    fn test_later_pass_wins_regardless_of_input_order() {
        let mut buf = buffer("0123456789");
        let spans = [
            Span::new(4, 8, StyleTag::Comment),
            Span::new(2, 6, StyleTag::String),
            Span::new(0, 3, StyleTag::Number),
            Span::new(0, 10, StyleTag::Keyword),
        ];
        apply_styles(&mut buf, &spans);

        use StyleTag::*;
        assert_eq!(
            buf.styles(),
            &[Number, Number, String, String, Comment, Comment, Comment, Comment, Keyword, Keyword]
        );
    }

    #[test]
    fn test_out_of_range_spans_clamped_or_dropped() {
        let mut buf = buffer("abcd");
        let spans = [
            Span::new(2, 50, StyleTag::String),
            Span::new(9, 12, StyleTag::Comment),
        ];
        apply_styles(&mut buf, &spans);
        use StyleTag::*;
        assert_eq!(buf.styles(), &[Default, Default, String, String]);
    }

    #[test]
    fn test_default_spans_ignored() {
        let mut buf = buffer("ab");
        apply_styles(
            &mut buf,
            &[Span::new(0, 2, StyleTag::Keyword), Span::new(0, 2, StyleTag::Default)],
        );
        assert_eq!(buf.styles(), &[StyleTag::Keyword, StyleTag::Keyword]);
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf = buffer("");
        apply_styles(&mut buf, &[Span::new(0, 1, StyleTag::Number)]);
        assert!(buf.styles().is_empty());
        assert!(!buf.is_stale());
    }
}
