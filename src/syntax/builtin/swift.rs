//! Swift language definition

use crate::syntax::language::LanguageDefinition;

/// Create Swift language definition
pub fn swift_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Swift", "//");
    lang.add_extension("swift");

    lang.add_keywords(&[
        "as", "break", "case", "catch", "class", "continue", "default", "defer", "do",
        "else", "enum", "extension", "false", "fileprivate", "for", "func", "guard", "if",
        "import", "in", "init", "internal", "is", "let", "nil", "private", "protocol",
        "public", "repeat", "return", "self", "static", "struct", "switch", "throw",
        "throws", "true", "try", "var", "where", "while",
    ]);

    lang
}
