//! Token classification
//!
//! The classifier runs four independent pattern passes (keywords,
//! numbers, strings, line comments) over the entire buffer on every call.
//! Nothing is incremental: each call is a full re-scan. Passes do not see
//! each other's matches, so spans from different passes may overlap; the
//! style applicator resolves that by paint order.

use super::language::LanguageDefinition;
use super::rules::{PatternRule, DEFAULT_SIZE_LIMIT};
use super::style::Span;
use super::tokens::StyleTag;

/// Anything that can turn buffer text into tagged spans
pub trait Classifier {
    /// Tag the whole of `text`. Spans are grouped per pass, not sorted.
    fn classify(&self, text: &str) -> Vec<Span>;
}

/// Settings that adjust how a language's passes are built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierOptions {
    /// Keywords appended to the language's own list
    pub extra_keywords: Vec<String>,
    /// Replacement for the language's line-comment marker
    pub comment_marker: Option<String>,
    /// Compiled-program size limit for each pass
    pub size_limit: usize,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            extra_keywords: Vec::new(),
            comment_marker: None,
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// One classification pass; `rule` is `None` when the pass is unavailable
#[derive(Debug, Clone)]
struct Pass {
    tag: StyleTag,
    rule: Option<PatternRule>,
}

/// Pattern-based classifier for one language
#[derive(Debug, Clone)]
pub struct TokenClassifier {
    /// Name of the language the passes were built for
    language: String,
    /// Passes in paint order
    passes: Vec<Pass>,
}

impl TokenClassifier {
    /// Build a classifier for `lang` with default options
    pub fn new(lang: &LanguageDefinition) -> Self {
        Self::with_options(lang, &ClassifierOptions::default())
    }

    /// Build a classifier for `lang`
    ///
    /// A pass whose pattern fails to compile is kept as unavailable: it
    /// yields no spans, and the other passes still run.
    pub fn with_options(lang: &LanguageDefinition, options: &ClassifierOptions) -> Self {
        let limit = options.size_limit;
        let mut keywords = lang.keywords.clone();
        keywords.extend(options.extra_keywords.iter().cloned());
        let marker = options
            .comment_marker
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(lang.line_comment.as_str());

        let passes = StyleTag::PASS_ORDER
            .into_iter()
            .map(|tag| {
                let built = match tag {
                    StyleTag::Keyword => PatternRule::keywords(&keywords, limit),
                    StyleTag::Number => PatternRule::numbers(limit),
                    StyleTag::String => PatternRule::strings(limit),
                    _ => PatternRule::line_comment(marker, limit),
                };
                let rule = match built {
                    Ok(rule) => Some(rule),
                    Err(e) => {
                        log::warn!("{} pass unavailable for {}: {}", tag.name(), lang.name, e);
                        None
                    }
                };
                Pass { tag, rule }
            })
            .collect();

        Self {
            language: lang.name.clone(),
            passes,
        }
    }

    /// Name of the language this classifier highlights
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Tags whose pass could not be built
    pub fn unavailable(&self) -> Vec<StyleTag> {
        self.passes
            .iter()
            .filter(|p| p.rule.is_none())
            .map(|p| p.tag)
            .collect()
    }

    /// Run a single pass. `None` if the pass is unavailable or `tag` has no pass.
    pub fn classify_pass(&self, tag: StyleTag, text: &str) -> Option<Vec<Span>> {
        self.passes
            .iter()
            .find(|p| p.tag == tag)
            .and_then(|p| p.rule.as_ref())
            .map(|rule| rule.find_all(text))
    }
}

impl Classifier for TokenClassifier {
    fn classify(&self, text: &str) -> Vec<Span> {
        self.passes
            .iter()
            .filter_map(|p| p.rule.as_ref())
            .flat_map(|rule| rule.find_all(text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::LanguageRegistry;

    fn plain() -> TokenClassifier {
        TokenClassifier::new(&LanguageRegistry::new().plain())
    }

    fn spans_of(spans: &[Span], tag: StyleTag) -> Vec<(usize, usize)> {
        spans
            .iter()
            .filter(|s| s.tag == tag)
            .map(|s| (s.start, s.end))
            .collect()
    }

    #[test]
    fn test_all_passes_run() {
        let spans = plain().classify("let x = 5 // \"hi\"");
        assert_eq!(spans_of(&spans, StyleTag::Keyword), vec![(0, 3)]);
        assert_eq!(spans_of(&spans, StyleTag::Number), vec![(8, 9)]);
        assert_eq!(spans_of(&spans, StyleTag::String), vec![(13, 17)]);
        assert_eq!(spans_of(&spans, StyleTag::Comment), vec![(10, 17)]);
    }

    #[test]
    fn test_grouped_in_pass_order() {
        let spans = plain().classify("// 1\nlet");
        let tags: Vec<StyleTag> = spans.iter().map(|s| s.tag).collect();
        assert_eq!(tags, vec![StyleTag::Keyword, StyleTag::Number, StyleTag::Comment]);
    }

    #[test]
    fn test_empty_text() {
        let classifier = plain();
        assert!(classifier.classify("").is_empty());
        for tag in StyleTag::PASS_ORDER {
            assert_eq!(classifier.classify_pass(tag, ""), Some(Vec::new()));
        }
    }

    #[test]
    fn test_classify_pass_default_has_no_pass() {
        assert_eq!(plain().classify_pass(StyleTag::Default, "let"), None);
    }

    #[test]
    fn test_language_comment_marker() {
        let registry = LanguageRegistry::new();
        let python = TokenClassifier::new(registry.get("Python").unwrap());
        let spans = python.classify("x = 1  # note // not c");
        assert_eq!(spans_of(&spans, StyleTag::Comment), vec![(7, 22)]);
    }

    #[test]
    fn test_options_extend_keywords_and_marker() {
        let options = ClassifierOptions {
            extra_keywords: vec!["unless".to_string()],
            comment_marker: Some(";".to_string()),
            ..Default::default()
        };
        let classifier = TokenClassifier::with_options(&LanguageRegistry::new().plain(), &options);
        let spans = classifier.classify("unless if ; tail");
        assert_eq!(spans_of(&spans, StyleTag::Keyword), vec![(0, 6), (7, 9)]);
        assert_eq!(spans_of(&spans, StyleTag::Comment), vec![(10, 16)]);
    }

    #[test]
    fn test_unavailable_pass_is_skipped() {
        let options = ClassifierOptions {
            size_limit: 16,
            ..Default::default()
        };
        let classifier = TokenClassifier::with_options(&LanguageRegistry::new().plain(), &options);
        // The keyword alternation is far larger than 16 bytes
        assert!(classifier.unavailable().contains(&StyleTag::Keyword));
        assert_eq!(classifier.classify_pass(StyleTag::Keyword, "let"), None);

        let spans = classifier.classify("let 42");
        assert!(spans_of(&spans, StyleTag::Keyword).is_empty());
    }

    #[test]
    fn test_language_name() {
        assert_eq!(plain().language(), "Plain");
    }
}
