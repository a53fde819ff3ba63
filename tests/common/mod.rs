//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.
//!
//! Every editor here uses a 10px font with a 20px line height on a 400x200
//! recording backend, so lowercase glyphs are 5px wide and line `n` spans
//! `y = 20n .. 20n + 20`.

#![allow(dead_code)]

use rich_canvas::{
    Editor, EditorConfig, Key, KeyEvent, Modifiers, PointerEvent, Position, RecordingBackend,
    Style, TextRange,
};

pub const GLYPH_WIDTH: f32 = 5.0;
pub const LINE_HEIGHT: f32 = 20.0;

pub fn test_config() -> EditorConfig {
    EditorConfig {
        default_style: Style::base().with_font_size(10.0).with_line_height(20.0),
        ..EditorConfig::default()
    }
}

/// Create a test editor with given text and caret position
pub fn test_editor(text: &str, line: usize, index: usize) -> Editor<RecordingBackend> {
    let mut editor = Editor::new(RecordingBackend::new(400.0, 200.0), text, test_config())
        .expect("recording backend has a usable size");
    editor.set_caret(Position::new(line, index));
    editor
}

/// Create a test editor with an active range
pub fn test_editor_with_range(
    text: &str,
    start: (usize, usize),
    end: (usize, usize),
) -> Editor<RecordingBackend> {
    let mut editor = test_editor(text, 0, 0);
    editor.select(TextRange::new(
        Position::new(start.0, start.1),
        Position::new(end.0, end.1),
    ));
    editor
}

pub fn press(editor: &mut Editor<RecordingBackend>, key: Key) {
    editor.handle(KeyEvent::plain(key));
}

pub fn press_with(editor: &mut Editor<RecordingBackend>, key: Key, modifiers: Modifiers) {
    editor.handle(KeyEvent::new(key, modifiers));
}

pub fn type_text(editor: &mut Editor<RecordingBackend>, text: &str) {
    for ch in text.chars() {
        press(editor, Key::Char(ch));
    }
}

/// Point inside line `line`, `index` glyphs from the left edge
pub fn point(line: usize, index: usize) -> (f32, f32) {
    (
        index as f32 * GLYPH_WIDTH,
        line as f32 * LINE_HEIGHT + LINE_HEIGHT / 2.0,
    )
}

/// Click `count` times at the same spot, sending the full down/up sequence
pub fn click(editor: &mut Editor<RecordingBackend>, x: f32, y: f32, count: u8) {
    for depth in 1..=count {
        editor.handle(PointerEvent::down(x, y, depth));
        editor.handle(PointerEvent::up(x, y, depth));
    }
}

/// Drag from one point to another with a single move in between
pub fn drag(editor: &mut Editor<RecordingBackend>, from: (f32, f32), to: (f32, f32)) {
    editor.handle(PointerEvent::down(from.0, from.1, 1));
    editor.handle(PointerEvent::moved(to.0, to.1));
    editor.handle(PointerEvent::up(to.0, to.1, 1));
}

pub fn pos(line: usize, index: usize) -> Position {
    Position::new(line, index)
}

pub fn range(start: (usize, usize), end: (usize, usize)) -> TextRange {
    TextRange::new(pos(start.0, start.1), pos(end.0, end.1))
}
