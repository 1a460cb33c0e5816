//! Editor session - the entry points the host UI calls
//!
//! Every discrete edit goes through [`EditorSession::on_edit`]: the
//! buffer content is replaced, the whole buffer is reclassified, styles
//! are repainted, and the host is told to redraw and that the document
//! has unsaved changes. All of it runs synchronously on the caller's
//! thread; one edit completes before the next is accepted.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::buffer::TextBuffer;
use crate::config::Config;
use crate::error::{EditorError, Result};
use crate::file::{self, FileHandle};
use crate::history::EditHistory;
use crate::syntax::{
    apply_styles, Classifier, ClassifierOptions, LanguageDefinition, LanguageRegistry, Style,
    StyleTag, Theme, TokenClassifier,
};

/// Callbacks from the session to the host UI
pub trait EditListener {
    /// The buffer's displayable state changed and should be redrawn
    fn display_changed(&mut self, _buffer: &TextBuffer) {}

    /// The document now has unsaved changes
    fn document_changed(&mut self) {}
}

/// Listener that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullListener;

impl EditListener for NullListener {}

/// One open document and its highlighting state
pub struct EditorSession {
    /// Content and style tags
    buffer: TextBuffer,
    /// Known languages
    registry: LanguageRegistry,
    /// Language currently highlighted
    language: LanguageDefinition,
    /// Classifier built for `language`, or the host's own
    classifier: Box<dyn Classifier>,
    /// Set once the host supplied a classifier; language switches keep it
    custom_classifier: bool,
    /// Settings the classifier is built with
    options: ClassifierOptions,
    /// Colors per tag
    theme: Theme,
    /// When false every character is Default
    highlighting: bool,
    /// The document's file, if it has one
    file: Option<FileHandle>,
    /// Whether there are unsaved changes
    modified: bool,
    /// Undo/redo snapshots
    history: EditHistory,
    /// Host UI callbacks
    listener: Box<dyn EditListener>,
}

impl EditorSession {
    /// Create an empty session with default settings
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create an empty session from a configuration
    pub fn with_config(config: &Config) -> Self {
        let registry = LanguageRegistry::new();
        let language = registry.plain();
        let options = config.classifier_options();
        let classifier = Box::new(TokenClassifier::with_options(&language, &options));

        Self {
            buffer: TextBuffer::new(),
            registry,
            language,
            classifier,
            custom_classifier: false,
            options,
            theme: config.theme.clone(),
            highlighting: config.highlighting,
            file: None,
            modified: false,
            history: EditHistory::new(config.history_limit),
            listener: Box::new(NullListener),
        }
    }

    /// Set the host callbacks
    pub fn set_listener(&mut self, listener: Box<dyn EditListener>) {
        self.listener = listener;
    }

    /// Replace the classifier with a host-provided one
    ///
    /// It stays in place for the rest of the session, across file opens
    /// and language changes; only the language label follows those.
    pub fn set_classifier(&mut self, classifier: Box<dyn Classifier>) {
        self.classifier = classifier;
        self.custom_classifier = true;
        self.restyle();
        self.listener.display_changed(&self.buffer);
    }


    /// Apply one edit from the host: the full new text of the document
    pub fn on_edit(&mut self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        self.history.record(self.buffer.current_text(), &new_text);
        self.apply_edit(new_text);
    }

    /// Load text supplied by the file picker
    ///
    /// `display_name` only selects the language; it is not otherwise used.
    pub fn on_file_opened(&mut self, text: impl Into<String>, display_name: &str) {
        self.switch_language(self.registry.detect(display_name));
        self.history.clear();
        self.modified = false;
        self.buffer.replace_content(text);
        self.restyle();
        self.listener.display_changed(&self.buffer);
    }

    /// Open a file from disk
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        let (text, handle) = file::open(path)?;
        self.on_file_opened(text, handle.name());
        self.file = Some(handle);
        Ok(())
    }

    /// Reopen a remembered handle
    pub fn reopen(&mut self, handle: FileHandle) -> Result<()> {
        let path = handle.location().ok_or(EditorError::NoFile)?;
        self.open_file(path)
    }

    /// Save to the current file
    pub fn save(&mut self) -> Result<()> {
        let handle = self.file.as_mut().ok_or(EditorError::NoFile)?;
        file::save(handle, self.buffer.current_text())?;
        self.modified = false;
        Ok(())
    }

    /// Save to a new file, which becomes the current one
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        let handle = file::save_as(path, self.buffer.current_text())?;
        self.file = Some(handle);
        self.modified = false;
        Ok(())
    }

    /// Discard the document (the trash action)
    pub fn trash(&mut self) {
        self.file = None;
        self.history.clear();
        self.modified = false;
        self.buffer.replace_content("");
        self.restyle();
        self.listener.display_changed(&self.buffer);
    }

    /// Undo the last edit. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(text) => {
                self.apply_edit(text);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone edit. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(text) => {
                self.apply_edit(text);
                true
            }
            None => false,
        }
    }

    /// Force a language by name. Returns false if it is unknown.
    pub fn set_language(&mut self, name: &str) -> bool {
        let Some(lang) = self.registry.get(name).cloned() else {
            return false;
        };
        self.switch_language(lang);
        self.restyle();
        self.listener.display_changed(&self.buffer);
        true
    }

    /// Turn highlighting on or off
    pub fn set_highlighting(&mut self, enabled: bool) {
        self.highlighting = enabled;
        self.restyle();
        self.listener.display_changed(&self.buffer);
    }

    /// Full document text, for saving
    pub fn current_text(&self) -> &str {
        self.buffer.current_text()
    }

    /// Effective tag at a character offset
    pub fn style_at(&self, offset: usize) -> Result<StyleTag> {
        self.buffer.style_at(offset)
    }

    /// Presentation style at a character offset
    pub fn style_attr_at(&self, offset: usize) -> Result<Style> {
        Ok(self.theme.style_for(self.buffer.style_at(offset)?))
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn file(&self) -> Option<&FileHandle> {
        self.file.as_ref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Label shown for the document's language
    pub fn language_label(&self) -> &str {
        &self.language.name
    }

    /// Names accepted by [`EditorSession::set_language`], sorted
    pub fn languages(&self) -> Vec<&str> {
        self.registry.list()
    }

    /// Replace, reclassify, repaint, notify
    fn apply_edit(&mut self, new_text: String) {
        self.buffer.replace_content(new_text);
        self.restyle();
        self.modified = true;
        self.listener.display_changed(&self.buffer);
        self.listener.document_changed();
    }

    fn switch_language(&mut self, lang: LanguageDefinition) {
        if lang.name != self.language.name {
            log::debug!("language {} -> {}", self.language.name, lang.name);
        }
        if !self.custom_classifier {
            self.classifier = Box::new(TokenClassifier::with_options(&lang, &self.options));
        }
        self.language = lang;
    }

    /// Run the classifier over the whole buffer and repaint.
    ///
    /// If classifying or painting panics the previous styles are kept,
    /// already resized to the new content by `replace_content`. The
    /// process panic hook still runs first; hosts that draw to the same
    /// terminal install a quiet one (see the `synpad` binary).
    fn restyle(&mut self) {
        if !self.highlighting {
            apply_styles(&mut self.buffer, &[]);
            return;
        }

        let classifier = &self.classifier;
        let text = self.buffer.current_text();
        let spans = match panic::catch_unwind(AssertUnwindSafe(|| classifier.classify(text))) {
            Ok(spans) => spans,
            Err(_) => {
                log::error!("classification failed; keeping previous styles");
                return;
            }
        };
        log::debug!("{} span(s) over {} chars", spans.len(), self.buffer.len_chars());

        let previous = self.buffer.styles().to_vec();
        let buffer = &mut self.buffer;
        if panic::catch_unwind(AssertUnwindSafe(|| apply_styles(buffer, &spans))).is_err() {
            log::error!("styling failed; keeping previous styles");
            self.buffer.restore_styles(previous);
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
