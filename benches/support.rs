//! Shared helpers for benchmarks

use rich_canvas::style::{FontWeight, TextAlign};
use rich_canvas::{Editor, EditorConfig, Position, RecordingBackend, Style, StyleTarget, TextRange};

/// Create an editor with the specified number of lines, every third line
/// bold and every fifth one centered so layout resolves real cascades
#[allow(dead_code)]
pub fn make_editor(lines: usize) -> Editor<RecordingBackend> {
    let text = "The quick brown fox jumps over the lazy dog.\n".repeat(lines);
    let config = EditorConfig {
        default_style: Style::base().with_font_size(16.0).with_line_height(20.0),
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(RecordingBackend::new(1920.0, 1080.0), &text, config)
        .expect("recording backend has a usable size");

    let bold = Style::default().with_font_weight(FontWeight::Bold);
    let centered = Style::default().with_text_align(TextAlign::Center);
    for line in (0..lines).step_by(3) {
        let range = TextRange::new(Position::new(line, 4), Position::new(line, 9));
        editor.set_style_at(&bold, StyleTarget::Range(range));
    }
    for line in (0..lines).step_by(5) {
        editor.set_style_at(&centered, StyleTarget::Position(Position::new(line, 0)));
    }
    editor
}

/// Create an editor of `lines` unstyled lines, `width` characters each.
/// Nothing is explicit, so every character inherits from the document default.
#[allow(dead_code)]
pub fn make_plain_editor(lines: usize, width: usize) -> Editor<RecordingBackend> {
    let line: String = "abcdefghij".chars().cycle().take(width).collect();
    let text = vec![line; lines].join("\n");
    Editor::new(RecordingBackend::new(1920.0, 1080.0), &text, EditorConfig::default())
        .expect("recording backend has a usable size")
}
