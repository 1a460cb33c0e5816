//! Configuration file support
//!
//! Loads settings from ~/.synpad.toml (or %USERPROFILE%\.synpad.toml on Windows)
//!
//! Example:
//! ```toml
//! # synpad configuration
//! highlighting = true
//! extra-keywords = ["unless", "until"]
//! comment-marker = "--"
//! history-limit = 200
//! regex-size-limit = 1048576
//!
//! [theme]
//! keyword = "bright-blue"
//! comment = { fg = "bright-black", italic = true }
//! string = { fg = "green", bg = "black", underline = true }
//! ```
//!
//! A theme entry is either a foreground color name or a table with any of
//! `fg`, `bg`, `bold`, `italic` and `underline`; omitted fields keep the
//! tag's current style.

use std::fs;
use std::path::PathBuf;

use crate::error::{EditorError, Result};
use crate::history;
use crate::syntax::{ClassifierOptions, Color, Style, StyleTag, Theme, DEFAULT_SIZE_LIMIT};

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether syntax highlighting is enabled
    pub highlighting: bool,
    /// Keywords added to every language
    pub extra_keywords: Vec<String>,
    /// Line-comment marker overriding the language's own
    pub comment_marker: Option<String>,
    /// Undo levels kept by the edit history
    pub history_limit: usize,
    /// Compiled-program size limit per classification pass
    pub regex_size_limit: usize,
    /// Colors per style tag
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlighting: true,
            extra_keywords: Vec::new(),
            comment_marker: None,
            history_limit: history::DEFAULT_LIMIT,
            regex_size_limit: DEFAULT_SIZE_LIMIT,
            theme: Theme::default(),
        }
    }
}

/// The user's home directory
pub(crate) fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".synpad.toml"))
    }

    /// Load configuration from file, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        let Ok(contents) = fs::read_to_string(&path) else {
            return Config::default();
        };

        match Self::from_toml(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Build a configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings = Self::parse(contents)?;
        let mut config = Config::default();
        config.apply(&settings);
        Ok(config)
    }

    /// Parse config file contents into a table
    fn parse(contents: &str) -> Result<toml::Table> {
        Ok(contents.parse::<toml::Table>()?)
    }

    /// Apply settings from a parsed config. Unknown keys and bad values are ignored.
    fn apply(&mut self, settings: &toml::Table) {
        if let Some(value) = settings.get("highlighting").and_then(parse_bool) {
            self.highlighting = value;
        }

        if let Some(words) = settings.get("extra-keywords").and_then(|v| v.as_array()) {
            self.extra_keywords = words
                .iter()
                .filter_map(|w| w.as_str())
                .map(str::to_string)
                .collect();
        }

        if let Some(marker) = settings.get("comment-marker").and_then(|v| v.as_str()) {
            let marker = marker.trim();
            self.comment_marker = (!marker.is_empty()).then(|| marker.to_string());
        }

        if let Some(n) = settings.get("history-limit").and_then(|v| v.as_integer()) {
            self.history_limit = n.clamp(1, 10_000) as usize;
        }

        if let Some(n) = settings.get("regex-size-limit").and_then(|v| v.as_integer()) {
            if n > 0 {
                self.regex_size_limit = n as usize;
            }
        }

        if let Some(theme) = settings.get("theme").and_then(|v| v.as_table()) {
            for (key, value) in theme {
                let Some(tag) = StyleTag::from_name(key) else {
                    log::warn!("ignoring theme entry for unknown tag {}", key);
                    continue;
                };
                match value {
                    toml::Value::String(name) => {
                        if let Some(color) = Color::from_name(name) {
                            self.theme.set_color(tag, color);
                            continue;
                        }
                    }
                    toml::Value::Table(fields) => {
                        if let Some(style) = parse_style(fields, self.theme.style_for(tag)) {
                            self.theme.set_style(tag, style);
                            continue;
                        }
                    }
                    _ => {}
                }
                log::warn!("ignoring theme entry {} = {}", key, value);
            }
        }
    }

    /// Options for building classifiers from these settings
    pub fn classifier_options(&self) -> ClassifierOptions {
        ClassifierOptions {
            extra_keywords: self.extra_keywords.clone(),
            comment_marker: self.comment_marker.clone(),
            size_limit: self.regex_size_limit,
        }
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(EditorError::NoFile)?;
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML text
    pub fn to_toml(&self) -> Result<String> {
        let mut doc = toml::Table::new();
        doc.insert("highlighting".into(), toml::Value::Boolean(self.highlighting));
        doc.insert(
            "extra-keywords".into(),
            toml::Value::Array(
                self.extra_keywords
                    .iter()
                    .map(|w| toml::Value::String(w.clone()))
                    .collect(),
            ),
        );
        if let Some(marker) = &self.comment_marker {
            doc.insert("comment-marker".into(), toml::Value::String(marker.clone()));
        }
        doc.insert(
            "history-limit".into(),
            toml::Value::Integer(self.history_limit as i64),
        );
        doc.insert(
            "regex-size-limit".into(),
            toml::Value::Integer(self.regex_size_limit as i64),
        );
        let mut theme = toml::Table::new();
        for tag in StyleTag::ALL {
            let style = self.theme.style_for(tag);
            let mut entry = toml::Table::new();
            entry.insert("fg".into(), toml::Value::String(style.fg.name().to_string()));
            entry.insert("bg".into(), toml::Value::String(style.bg.name().to_string()));
            entry.insert("bold".into(), toml::Value::Boolean(style.bold));
            entry.insert("italic".into(), toml::Value::Boolean(style.italic));
            entry.insert("underline".into(), toml::Value::Boolean(style.underline));
            theme.insert(tag.name().to_lowercase(), toml::Value::Table(entry));
        }
        doc.insert("theme".into(), toml::Value::Table(theme));

        let body = toml::to_string(&doc).map_err(|e| EditorError::Message(e.to_string()))?;
        Ok(format!("# synpad configuration\n# Generated automatically\n\n{}", body))
    }
}

/// Parse a theme table on top of `base`. `None` if any field is invalid.
fn parse_style(fields: &toml::Table, base: Style) -> Option<Style> {
    let mut style = base;
    for (key, value) in fields {
        match key.as_str() {
            "fg" => style.fg = value.as_str().and_then(Color::from_name)?,
            "bg" => style.bg = value.as_str().and_then(Color::from_name)?,
            "bold" => style.bold = parse_bool(value)?,
            "italic" => style.italic = parse_bool(value)?,
            "underline" => style.underline = parse_bool(value)?,
            _ => return None,
        }
    }
    Some(style)
}

/// Parse a boolean from a TOML bool or a yes/no style string
fn parse_bool(value: &toml::Value) -> Option<bool> {
    if let Some(b) = value.as_bool() {
        return Some(b);
    }
    let s = value.as_str()?.to_lowercase();
    match s.as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
