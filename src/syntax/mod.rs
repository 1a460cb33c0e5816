//! Syntax and styling module
//!
//! This module provides the highlighting pipeline:
//! - Token classification (full re-scan of the buffer per edit)
//! - Style application (paint spans onto the buffer in pass order)
//! - Languages and themes

mod applicator;
mod builtin;
mod classifier;
mod language;
mod rules;
mod style;
mod theme;
mod tokens;

pub use applicator::apply_styles;
pub use classifier::{Classifier, ClassifierOptions, TokenClassifier};
pub use language::{LanguageDefinition, LanguageRegistry, PLAIN};
pub use rules::{PatternRule, DEFAULT_SIZE_LIMIT};
pub use style::{Color, Span, Style};
pub use theme::Theme;
pub use tokens::StyleTag;
