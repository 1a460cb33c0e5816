//! Terminal rendering of a styled buffer using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use crate::buffer::TextBuffer;
use crate::error::Result;
use crate::syntax::{Color, Style, Theme};

/// Map a palette color to the terminal's
fn term_color(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
    }
}

/// Queue the escape sequences for `style`
fn set_style<W: Write>(out: &mut W, style: Style) -> Result<()> {
    queue!(
        out,
        SetForegroundColor(term_color(style.fg)),
        SetBackgroundColor(term_color(style.bg))
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

/// Write the buffer to `out`, colored by `theme` when `color` is set
pub fn render<W: Write>(buffer: &TextBuffer, theme: &Theme, out: &mut W, color: bool) -> Result<()> {
    if !color {
        out.write_all(buffer.current_text().as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    for (tag, text) in buffer.styled_runs() {
        let style = theme.style_for(tag);
        if style.is_default() {
            queue!(out, Print(text))?;
            continue;
        }
        set_style(out, style)?;
        queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorSession;

    #[test]
    fn test_plain_render_is_exact_text() {
        let mut session = EditorSession::new();
        session.on_edit("let x = \"hi\" // done\n");
        let mut out = Vec::new();
        render(session.buffer(), session.theme(), &mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "let x = \"hi\" // done\n");
    }

    #[test]
    fn test_color_render_wraps_styled_runs() {
        let mut session = EditorSession::new();
        session.on_edit("if 42");
        let mut out = Vec::new();
        render(session.buffer(), session.theme(), &mut out, true).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.contains('\x1b'));
        assert!(rendered.contains("if"));
        assert!(rendered.contains("42"));
        // Escape codes stripped, the text is unchanged
        let stripped: String = strip_escapes(&rendered);
        assert_eq!(stripped, "if 42");
    }

    #[test]
    fn test_unstyled_text_has_no_escapes() {
        let mut session = EditorSession::new();
        session.on_edit("plain words");
        let mut out = Vec::new();
        render(session.buffer(), session.theme(), &mut out, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "plain words");
    }

    fn strip_escapes(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // CSI: ESC [ params final-byte
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}
