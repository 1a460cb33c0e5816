//! Language definitions for syntax highlighting
//!
//! A language here is only a keyword list and a line-comment marker.
//! Numbers and strings are matched the same way for every language.

use std::collections::HashMap;
use std::path::Path;

use super::builtin;

/// Name of the fallback language used when nothing else matches
pub const PLAIN: &str = "Plain";

/// A language definition for syntax highlighting
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Language name (e.g., "Rust", "Python")
    pub name: String,
    /// File extensions (e.g., ["rs"], ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Fixed keyword list, matched case-sensitively as whole words
    pub keywords: Vec<String>,
    /// Marker that starts a comment running to end of line
    pub line_comment: String,
}

impl LanguageDefinition {
    /// Create a new language definition with no keywords
    pub fn new(name: &str, line_comment: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            keywords: Vec::new(),
            line_comment: line_comment.to_string(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Add keywords
    pub fn add_keywords(&mut self, keywords: &[&str]) {
        self.keywords.extend(keywords.iter().map(|k| k.to_string()));
    }
}

/// Known languages, looked up by name or file extension
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    /// Loaded language definitions
    languages: HashMap<String, LanguageDefinition>,
    /// Extension to language name mapping
    extension_map: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create a registry with the built-in languages
    pub fn new() -> Self {
        let mut registry = Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
        };
        for lang in builtin::all_languages() {
            registry.add_language(lang);
        }
        registry
    }

    /// Add a language definition
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let name = lang.name.clone();
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), name.clone());
        }
        self.languages.insert(name, lang);
    }

    /// Get a language definition by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&LanguageDefinition> {
        self.languages
            .values()
            .find(|lang| lang.name.eq_ignore_ascii_case(name))
    }

    /// The fallback language
    pub fn plain(&self) -> LanguageDefinition {
        self.languages
            .get(PLAIN)
            .cloned()
            .unwrap_or_else(builtin::plain_language)
    }

    /// Pick a language from a file's display name, falling back to Plain
    pub fn detect(&self, display_name: &str) -> LanguageDefinition {
        Path::new(display_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.extension_map.get(&ext.to_lowercase()))
            .and_then(|name| self.languages.get(name))
            .cloned()
            .unwrap_or_else(|| self.plain())
    }

    /// Names of the available languages, sorted
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
