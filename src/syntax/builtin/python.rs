//! Python language definition

use crate::syntax::language::LanguageDefinition;

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Python", "#");
    lang.add_extension("py");
    lang.add_extension("pyw");
    lang.add_extension("pyi");

    lang.add_keywords(&[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break",
        "class", "continue", "def", "del", "elif", "else", "except", "finally", "for",
        "from", "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or",
        "pass", "raise", "return", "try", "while", "with", "yield",
    ]);

    lang
}
