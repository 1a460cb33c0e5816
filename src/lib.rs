//! synpad - a text editor core with pattern-based syntax highlighting
//!
//! The host UI drives an [`EditorSession`]: every edit replaces the whole
//! document, which is then reclassified and restyled before the host is
//! asked to redraw.

pub mod buffer;
pub mod config;
pub mod editor;
pub mod error;
pub mod file;
pub mod history;
pub mod render;
pub mod syntax;

pub use buffer::TextBuffer;
pub use config::Config;
pub use editor::{EditListener, EditorSession, NullListener};
pub use error::{EditorError, Result};
pub use file::{Bookmark, BookmarkStore, FileHandle};
pub use history::EditHistory;
pub use syntax::{Span, StyleTag};
