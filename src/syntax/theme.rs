//! Color themes
//!
//! A theme maps each [`StyleTag`] to the [`Style`] a renderer draws it
//! with. There is exactly one style per tag.

use super::style::{Color, Style};
use super::tokens::StyleTag;

/// A syntax highlighting theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Style per tag, indexed by `StyleTag::index`
    styles: [Style; 5],
}

impl Theme {
    /// Theme built from each tag's default style
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            styles: StyleTag::ALL.map(|tag| tag.default_style()),
        }
    }

    /// Style used to draw text carrying `tag`
    pub fn style_for(&self, tag: StyleTag) -> Style {
        self.styles[tag.index()]
    }

    /// Replace the style for a tag
    pub fn set_style(&mut self, tag: StyleTag, style: Style) {
        self.styles[tag.index()] = style;
    }

    /// Replace only the foreground color for a tag
    pub fn set_color(&mut self, tag: StyleTag, color: Color) {
        self.styles[tag.index()].fg = color;
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_matches_tag_styles() {
        let theme = Theme::default();
        for tag in StyleTag::ALL {
            assert_eq!(theme.style_for(tag), tag.default_style());
        }
    }

    #[test]
    fn test_set_color_keeps_attributes() {
        let mut theme = Theme::default();
        theme.set_color(StyleTag::Keyword, Color::Red);
        let style = theme.style_for(StyleTag::Keyword);
        assert_eq!(style.fg, Color::Red);
        assert!(style.bold);
        // Other tags untouched
        assert_eq!(theme.style_for(StyleTag::Number), StyleTag::Number.default_style());
    }

    #[test]
    fn test_set_style() {
        let mut theme = Theme::default();
        let plain = Style::fg(Color::White);
        theme.set_style(StyleTag::Default, plain);
        assert_eq!(theme.style_for(StyleTag::Default), plain);
    }
}
