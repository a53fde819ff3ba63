//! Editor controller - the synchronous edit cycle.
//!
//! Every input event runs one cycle to completion before the next is handled:
//!
//! 1. apply the event to the document and/or the selection
//! 2. recompute the layout from the post-edit document
//! 3. paint text, selection and caret through the backend
//! 4. notify every observer with a [`Snapshot`]
//!
//! Caret navigation reads the layout of the previous cycle, which always
//! describes the document as it is before the current edit.

use anyhow::{ensure, Result};
use serde::Serialize;

use crate::backend::Backend;
use crate::config::EditorConfig;
use crate::document::{Document, EditHistory, HistoryEntry};
use crate::geometry::{Position, TextRange};
use crate::input::{InputEvent, Key, KeyEvent, Modifiers, PointerEvent};
use crate::layout::Layout;
use crate::render;
use crate::selection::{Caret, Selection, SelectionEvent};
use crate::style::Style;

/// State handed to observers after every cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub text: Vec<String>,
    pub styles: Vec<Vec<Option<Style>>>,
    pub caret: Option<Position>,
    pub range: Option<TextRange>,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Where a style patch is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget {
    Position(Position),
    Range(TextRange),
}

type Observer = Box<dyn FnMut(&Snapshot)>;

pub struct Editor<B: Backend> {
    backend: B,
    document: Document,
    selection: Selection,
    /// Layout of the last completed cycle
    layout: Layout,
    history: EditHistory,
    config: EditorConfig,
    observers: Vec<Observer>,
}

impl<B: Backend> Editor<B> {
    /// Build an editor over `text` and paint the first frame.
    ///
    /// Fails when the backend surface has no usable size.
    pub fn new(backend: B, text: &str, config: EditorConfig) -> Result<Self> {
        let (width, height) = backend.canvas_size();
        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "backend canvas has unusable size {}x{}",
            width,
            height
        );

        let document = Document::new(text, config.default_style.clone());
        let layout = Layout::compute(&document, &backend);
        let mut editor = Self {
            backend,
            document,
            selection: Selection::new(),
            layout,
            history: EditHistory::with_max_size(config.history_limit),
            config,
            observers: Vec::new(),
        };
        editor.cycle("new");
        tracing::debug!(target: "editor", lines = editor.document.line_count(), "editor created");
        Ok(editor)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn caret(&self) -> Position {
        self.selection.caret()
    }

    pub fn range(&self) -> Option<TextRange> {
        self.selection.active_range()
    }

    pub fn lines(&self) -> Vec<String> {
        self.document.lines()
    }

    /// Register an observer; it is called after every cycle
    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            text: self.document.lines(),
            styles: self.document.styles().to_vec(),
            caret: Some(self.selection.caret()),
            range: self.selection.active_range(),
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle one input event, running a full cycle when anything changed.
    ///
    /// Key events always run the cycle. Pointer events run it only when they
    /// changed the selection, so hover moves stay cheap.
    pub fn handle(&mut self, event: impl Into<InputEvent>) {
        let event = event.into();

        #[cfg(debug_assertions)]
        {
            self.handle_traced(event)
        }
        #[cfg(not(debug_assertions))]
        {
            self.handle_inner(event)
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        self.handle(event)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.handle(event)
    }

    #[cfg(debug_assertions)]
    fn handle_traced(&mut self, event: InputEvent) {
        use crate::tracing::SelectionSnapshot;
        use tracing::{debug, span, Level};

        let name = event_name(&event);
        let _span = span!(Level::DEBUG, "cycle", event = %name).entered();
        let before = SelectionSnapshot::from_selection(&self.selection);

        self.handle_inner(event);

        let after = SelectionSnapshot::from_selection(&self.selection);
        if let Some(diff) = before.diff(&after) {
            debug!(target: "selection", %diff, "state changed");
        }
    }

    fn handle_inner(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key) => {
                self.apply_key(key);
                self.cycle("key");
            }
            InputEvent::Pointer(pointer) => {
                let events = self
                    .selection
                    .on_pointer(&pointer, &self.layout, &self.document);
                if !events.is_empty() {
                    log_events(&events);
                    self.cycle("pointer");
                }
            }
        }
    }

    fn apply_key(&mut self, event: KeyEvent) {
        if event.modifiers.is_shortcut() {
            self.apply_shortcut(event.key, event.modifiers);
            return;
        }
        if let Some(range) = self.selection.active_range() {
            if self.apply_range_key(event, range) {
                return;
            }
        }
        self.apply_caret_key(event);
    }

    /// Modifier-qualified keys. Only undo/redo touch the document.
    fn apply_shortcut(&mut self, key: Key, modifiers: Modifiers) {
        if modifiers.command() {
            match key {
                Key::Char(c) => match c.to_ascii_lowercase() {
                    'a' => {
                        self.selection.range.select_all(&self.document);
                    }
                    'z' if modifiers.shift() => self.apply_redo(),
                    'z' => self.apply_undo(),
                    'y' => self.apply_redo(),
                    _ => {}
                },
                Key::Left => self.navigate(|caret, _, _| caret.move_line_start()),
                Key::Right => self.navigate(|caret, layout, _| caret.move_line_end(layout)),
                Key::Up => self.navigate(|caret, _, _| caret.move_document_start()),
                Key::Down => self.navigate(|caret, layout, _| caret.move_document_end(layout)),
                _ => {}
            }
        } else if modifiers.alt() {
            match key {
                Key::Left => self.navigate(|caret, _, doc| caret.move_word_left(doc)),
                Key::Right => self.navigate(|caret, _, doc| caret.move_word_right(doc)),
                _ => {}
            }
        }
    }

    /// Collapse any range, then move the caret
    fn navigate(
        &mut self,
        motion: impl FnOnce(&mut Caret, &Layout, &Document) -> Option<SelectionEvent>,
    ) {
        self.selection.range.clear();
        motion(&mut self.selection.caret, &self.layout, &self.document);
    }

    /// Keys that act on an active range. Returns false when the key should
    /// fall through to caret handling.
    fn apply_range_key(&mut self, event: KeyEvent, range: TextRange) -> bool {
        let start = range.start;

        if let Some(ch) = event.printable_char() {
            self.edit(|editor| {
                editor.document.remove_range(range);
                editor.document.insert_text(&ch.to_string(), start);
                editor.selection.range.clear();
                editor
                    .selection
                    .caret
                    .set_position(Position::new(start.line, start.index + 1));
            });
            return true;
        }

        match event.key {
            Key::Enter => self.edit(|editor| {
                editor.document.remove_range(range);
                editor.document.insert_new_line(start);
                editor.selection.range.clear();
                editor
                    .selection
                    .caret
                    .set_position(Position::new(start.line + 1, 0));
            }),
            Key::Backspace | Key::Delete => self.edit(|editor| {
                editor.document.remove_range(range);
                editor.selection.range.clear();
                editor.selection.caret.set_position(start);
            }),
            Key::Escape => {
                self.selection.range.clear();
            }
            Key::Left | Key::Up => {
                self.selection.range.clear();
                self.selection.caret.set_position(start);
            }
            Key::Right | Key::Down => {
                self.selection.range.clear();
                self.selection.caret.set_position(range.end);
            }
            Key::Home | Key::End => {
                self.selection.range.clear();
                return false;
            }
            _ => {}
        }
        true
    }

    fn apply_caret_key(&mut self, event: KeyEvent) {
        let pos = self.selection.caret();

        if let Some(ch) = event.printable_char() {
            self.edit(|editor| {
                if editor.document.insert_text(&ch.to_string(), pos).is_some() {
                    editor.selection.caret.on_typed_character();
                }
            });
            return;
        }

        match event.key {
            Key::Backspace => self.edit(|editor| {
                editor.selection.caret.on_backspace(&editor.layout);
                editor.document.remove_before(pos);
            }),
            Key::Delete => self.edit(|editor| {
                editor.selection.caret.on_delete(&editor.layout);
                editor.document.remove_after(pos);
            }),
            Key::Enter => self.edit(|editor| {
                if editor.document.insert_new_line(pos) {
                    editor.selection.caret.on_enter();
                }
            }),
            Key::Left => {
                self.selection.caret.move_left(&self.layout);
            }
            Key::Right => {
                self.selection.caret.move_right(&self.layout);
            }
            Key::Up => {
                self.selection.caret.move_up(&self.layout);
            }
            Key::Down => {
                self.selection.caret.move_down(&self.layout);
            }
            Key::Home => {
                self.selection.caret.move_line_start();
            }
            Key::End => {
                self.selection.caret.move_line_end(&self.layout);
            }
            Key::Escape => {
                self.selection.range.clear();
            }
            Key::Char(_) | Key::Tab => {}
        }
    }

    // =========================================================================
    // Programmatic edits
    // =========================================================================

    /// Apply a style patch to the active range. No-op without a range.
    pub fn set_style(&mut self, patch: &Style) {
        if let Some(range) = self.selection.active_range() {
            self.set_style_at(patch, StyleTarget::Range(range));
        }
    }

    /// Apply a style patch to an explicit position or range.
    /// Out-of-bounds targets are ignored.
    pub fn set_style_at(&mut self, patch: &Style, target: StyleTarget) {
        self.edit(|editor| {
            let applied = match target {
                StyleTarget::Position(pos) => editor.document.apply_style(pos, patch),
                StyleTarget::Range(range) => editor.document.apply_style_range(range, patch),
            };
            if !applied {
                tracing::debug!(target: "editor", ?target, "style target out of bounds, ignored");
            }
        });
        self.cycle("set_style");
    }

    /// Resolved style of the character at `pos`
    pub fn style_at(&self, pos: Position) -> Style {
        self.document.style_at(pos).clone()
    }

    /// Style a toolbar should show: the range start's style when a range is
    /// active, otherwise the style typing at the caret would continue.
    pub fn current_style(&self) -> Style {
        match self.selection.active_range() {
            Some(range) => self.style_at(range.start),
            None => self.document.style_before(self.selection.caret()).clone(),
        }
    }

    /// Insert a string at the caret, replacing the active range.
    /// Line breaks in `text` split lines; the caret lands after the text.
    pub fn insert_text(&mut self, text: &str) {
        self.edit(|editor| {
            let pos = match editor.selection.active_range() {
                Some(range) => {
                    editor.document.remove_range(range);
                    editor.selection.range.clear();
                    range.start
                }
                None => editor.selection.caret(),
            };
            if let Some(end) = editor.document.insert_text(text, pos) {
                editor.selection.caret.set_position(end);
            } else {
                editor.selection.caret.set_position(pos);
            }
        });
        self.cycle("insert_text");
    }

    /// Replace the whole document. Selection and history start over.
    pub fn load_text(&mut self, text: &str) {
        self.document = Document::new(text, self.config.default_style.clone());
        self.selection = Selection::new();
        self.history.clear();
        self.cycle("load_text");
    }

    /// Place the caret programmatically, clamped into the document.
    /// Clears any range.
    pub fn set_caret(&mut self, pos: Position) {
        self.selection.range.clear();
        let pos = self.document.clamp(pos);
        self.selection.caret.set_position(pos);
        self.cycle("set_caret");
    }

    /// Select a range programmatically; both ends are clamped. An empty
    /// range clears the selection. The caret moves to the range end.
    pub fn select(&mut self, range: TextRange) {
        let range = TextRange::new(
            self.document.clamp(range.start),
            self.document.clamp(range.end),
        );
        if range.is_empty() {
            self.selection.range.clear();
        } else {
            self.selection.range.set(Some(range));
        }
        self.selection.caret.set_position(range.end);
        self.cycle("select");
    }

    pub fn undo(&mut self) {
        self.apply_undo();
        self.cycle("undo");
    }

    pub fn redo(&mut self) {
        self.apply_redo();
        self.cycle("redo");
    }

    fn apply_undo(&mut self) {
        let current = HistoryEntry::new(self.document.clone(), self.selection.caret());
        if let Some(entry) = self.history.undo(current) {
            self.restore(entry);
        }
    }

    fn apply_redo(&mut self) {
        let current = HistoryEntry::new(self.document.clone(), self.selection.caret());
        if let Some(entry) = self.history.redo(current) {
            self.restore(entry);
        }
    }

    /// Undo/redo always leave caret-only mode
    fn restore(&mut self, entry: HistoryEntry) {
        self.document = entry.document;
        self.selection.range.clear();
        let caret = self.document.clamp(entry.caret);
        self.selection.caret.set_position(caret);
    }

    /// Let the host resize the backend surface, then re-run the cycle so
    /// alignment follows the new canvas width.
    pub fn resize(&mut self, resize: impl FnOnce(&mut B)) {
        resize(&mut self.backend);
        self.cycle("resize");
    }

    /// Re-run layout, paint and notification without an input event
    pub fn refresh(&mut self) {
        self.cycle("refresh");
    }

    // =========================================================================
    // Cycle
    // =========================================================================

    /// Run a document edit, recording the prior state when anything changed
    fn edit(&mut self, apply: impl FnOnce(&mut Self)) {
        let before = HistoryEntry::new(self.document.clone(), self.selection.caret());
        apply(self);
        if self.document != before.document {
            self.history.push(before);
        }
    }

    fn cycle(&mut self, context: &str) {
        self.document.assert_invariants(context);
        self.layout = Layout::compute(&self.document, &self.backend);
        render::paint(
            &mut self.backend,
            &self.document,
            &self.layout,
            &self.selection,
            &self.config,
        );

        if !self.observers.is_empty() {
            let snapshot = self.snapshot();
            for observer in &mut self.observers {
                observer(&snapshot);
            }
        }
    }
}

fn log_events(events: &[SelectionEvent]) {
    for event in events {
        tracing::trace!(target: "selection", ?event, "selection event");
    }
}

#[cfg(debug_assertions)]
fn event_name(event: &InputEvent) -> String {
    match event {
        InputEvent::Key(key) => format!("key {}", key),
        InputEvent::Pointer(pointer) => {
            format!("pointer {:?} x{}", pointer.phase, pointer.click_count)
        }
    }
}
