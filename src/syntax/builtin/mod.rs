//! Built-in language definitions
//!
//! This module provides keyword lists and comment markers for
//! common programming languages.

mod c;
mod python;
mod rust;
mod swift;

use super::language::{LanguageDefinition, PLAIN};

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        plain_language(),
        rust::rust_language(),
        c::c_language(),
        python::python_language(),
        swift::swift_language(),
    ]
}

/// Generic definition for files with no recognized extension
pub fn plain_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(PLAIN, "//");
    lang.add_keywords(&[
        "break", "case", "class", "const", "continue", "default", "do", "else", "enum",
        "false", "for", "func", "function", "if", "import", "in", "let", "nil", "null",
        "return", "static", "struct", "switch", "true", "var", "while",
    ]);
    lang
}
