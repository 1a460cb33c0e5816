//! C/C++ language definition

use crate::syntax::language::LanguageDefinition;

/// Create C language definition (also works for C++)
pub fn c_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("C", "//");
    lang.add_extension("c");
    lang.add_extension("h");
    lang.add_extension("cpp");
    lang.add_extension("hpp");
    lang.add_extension("cc");
    lang.add_extension("cxx");

    lang.add_keywords(&[
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double",
        "else", "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long",
        "register", "restrict", "return", "short", "signed", "sizeof", "static",
        "struct", "switch", "typedef", "union", "unsigned", "void", "volatile", "while",
    ]);

    // C++ keywords
    lang.add_keywords(&[
        "bool", "catch", "class", "constexpr", "delete", "false", "namespace", "new",
        "nullptr", "private", "protected", "public", "template", "this", "throw", "true",
        "try", "typename", "using", "virtual",
    ]);

    lang
}
