//! rich-canvas - in-canvas rich-text editing engine
//!
//! Keeps a multi-line styled document, a caret and an optional range, lays out
//! every character against a pluggable measurement [`Backend`], and paints
//! text, selection and caret from that layout. The host owns the drawing
//! surface and the event loop; it feeds normalized [`InputEvent`]s to an
//! [`Editor`] and observes the resulting [`Snapshot`]s.

pub mod backend;
pub mod config;
pub mod config_paths;
pub mod document;
pub mod editor;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod render;
pub mod selection;
pub mod style;
pub mod tracing;

// Re-export commonly used types
pub use backend::{Backend, RecordingBackend, TextMetrics};
pub use config::EditorConfig;
pub use document::Document;
pub use editor::{Editor, Snapshot, StyleTarget};
pub use geometry::{Point, Position, Rect, TextRange};
pub use input::{InputEvent, Key, KeyEvent, Modifiers, PointerEvent, PointerPhase};
pub use layout::Layout;
pub use selection::{Selection, SelectionEvent};
pub use style::{Color, ComputedStyle, Style};
