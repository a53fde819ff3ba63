//! Text editing tests - insert, delete, split/merge, range replace, undo/redo

mod common;

use common::{pos, press, press_with, range, test_editor, test_editor_with_range, type_text};
use rich_canvas::style::FontWeight;
use rich_canvas::{Key, Modifiers, Style, StyleTarget};

// ========================================================================
// Caret-only edits
// ========================================================================

#[test]
fn test_type_character_in_middle() {
    let mut editor = test_editor("ab", 0, 1);
    type_text(&mut editor, "X");

    assert_eq!(editor.lines(), vec!["aXb"]);
    assert_eq!(editor.caret(), pos(0, 2));
}

#[test]
fn test_type_several_characters() {
    let mut editor = test_editor("hello", 0, 5);
    type_text(&mut editor, " world");

    assert_eq!(editor.lines(), vec!["hello world"]);
    assert_eq!(editor.caret(), pos(0, 11));
}

#[test]
fn test_shifted_character_is_typed() {
    let mut editor = test_editor("", 0, 0);
    press_with(&mut editor, Key::Char('Q'), Modifiers::SHIFT);
    assert_eq!(editor.lines(), vec!["Q"]);
}

#[test]
fn test_control_character_is_not_typed() {
    let mut editor = test_editor("ab", 0, 1);
    press_with(&mut editor, Key::Char('b'), Modifiers::CTRL);
    assert_eq!(editor.lines(), vec!["ab"]);
    assert_eq!(editor.caret(), pos(0, 1));
}

#[test]
fn test_enter_splits_line() {
    let mut editor = test_editor("hello", 0, 2);
    press(&mut editor, Key::Enter);

    assert_eq!(editor.lines(), vec!["he", "llo"]);
    assert_eq!(editor.caret(), pos(1, 0));
}

#[test]
fn test_enter_at_end_of_empty_line_creates_empty_line() {
    let mut editor = test_editor("", 0, 0);
    press(&mut editor, Key::Enter);

    assert_eq!(editor.lines(), vec!["", ""]);
    assert_eq!(editor.caret(), pos(1, 0));
    assert!(editor.document().is_consistent());
}

#[test]
fn test_backspace_merges_lines() {
    let mut editor = test_editor("he\nllo", 1, 0);
    press(&mut editor, Key::Backspace);

    assert_eq!(editor.lines(), vec!["hello"]);
    assert_eq!(editor.caret(), pos(0, 2));
}

#[test]
fn test_backspace_removes_previous_character() {
    let mut editor = test_editor("abc", 0, 2);
    press(&mut editor, Key::Backspace);

    assert_eq!(editor.lines(), vec!["ac"]);
    assert_eq!(editor.caret(), pos(0, 1));
}

#[test]
fn test_backspace_at_document_start_is_noop() {
    let mut editor = test_editor("abc", 0, 0);
    press(&mut editor, Key::Backspace);

    assert_eq!(editor.lines(), vec!["abc"]);
    assert_eq!(editor.caret(), pos(0, 0));
}

#[test]
fn test_delete_removes_next_character() {
    let mut editor = test_editor("abc", 0, 1);
    press(&mut editor, Key::Delete);

    assert_eq!(editor.lines(), vec!["ac"]);
    assert_eq!(editor.caret(), pos(0, 1));
}

#[test]
fn test_delete_at_line_end_merges_next_line() {
    let mut editor = test_editor("ab\ncd", 0, 2);
    press(&mut editor, Key::Delete);

    assert_eq!(editor.lines(), vec!["abcd"]);
    assert_eq!(editor.caret(), pos(0, 2));
}

#[test]
fn test_delete_at_document_end_is_noop() {
    let mut editor = test_editor("ab", 0, 2);
    press(&mut editor, Key::Delete);
    assert_eq!(editor.lines(), vec!["ab"]);
}

// ========================================================================
// Range edits
// ========================================================================

#[test]
fn test_delete_range_across_lines() {
    let mut editor = test_editor_with_range("foo\nbar", (0, 1), (1, 2));
    press(&mut editor, Key::Delete);

    assert_eq!(editor.lines(), vec!["fr"]);
    assert_eq!(editor.range(), None);
}

#[test]
fn test_delete_and_backspace_on_range_leave_caret_at_start() {
    for key in [Key::Delete, Key::Backspace] {
        let mut editor = test_editor_with_range("foo\nbar", (0, 1), (1, 2));
        press(&mut editor, key);

        assert_eq!(editor.lines(), vec!["fr"]);
        assert_eq!(editor.caret(), pos(0, 1), "caret after {key}");
    }
}

#[test]
fn test_range_delete_removes_intermediate_lines() {
    let mut editor = test_editor_with_range("one\ntwo\nthree\nfour", (0, 2), (2, 3));
    press(&mut editor, Key::Backspace);

    assert_eq!(editor.lines(), vec!["onee", "four"]);
    assert!(editor.document().is_consistent());
}

#[test]
fn test_delete_whole_document_keeps_one_line() {
    let mut editor = test_editor("abc\ndef", 0, 0);
    press_with(&mut editor, Key::Char('a'), Modifiers::CTRL);
    press(&mut editor, Key::Delete);

    assert_eq!(editor.lines(), vec![""]);
    assert_eq!(editor.caret(), pos(0, 0));
}

#[test]
fn test_typing_replaces_range() {
    let mut editor = test_editor_with_range("hello", (0, 1), (0, 4));
    type_text(&mut editor, "X");

    assert_eq!(editor.lines(), vec!["hXo"]);
    assert_eq!(editor.caret(), pos(0, 2));
    assert_eq!(editor.range(), None);
}

#[test]
fn test_enter_replaces_range_with_line_break() {
    let mut editor = test_editor_with_range("hello\nworld", (0, 2), (1, 1));
    press(&mut editor, Key::Enter);

    assert_eq!(editor.lines(), vec!["he", "orld"]);
    assert_eq!(editor.caret(), pos(1, 0));
    assert_eq!(editor.range(), None);
}

// ========================================================================
// Style inheritance on insert
// ========================================================================

#[test]
fn test_typed_character_continues_style_run() {
    let mut editor = test_editor("ab", 0, 0);
    editor.set_style_at(&bold(), StyleTarget::Range(range((0, 0), (0, 2))));
    editor.set_caret(pos(0, 2));
    type_text(&mut editor, "c");

    assert_eq!(editor.style_at(pos(0, 2)).font_weight, Some(FontWeight::Bold));
}

#[test]
fn test_character_at_line_start_inherits_previous_line() {
    let mut editor = test_editor("ab\n", 0, 0);
    editor.set_style_at(&bold(), StyleTarget::Position(pos(0, 1)));
    editor.set_caret(pos(1, 0));
    type_text(&mut editor, "x");

    assert_eq!(editor.style_at(pos(1, 0)).font_weight, Some(FontWeight::Bold));
}

#[test]
fn test_character_at_document_start_uses_default() {
    let mut editor = test_editor("ab", 0, 0);
    type_text(&mut editor, "x");

    assert_eq!(editor.style_at(pos(0, 0)).font_weight, Some(FontWeight::Lighter));
}

// ========================================================================
// Styling
// ========================================================================

fn bold() -> Style {
    Style::default().with_font_weight(FontWeight::Bold)
}

#[test]
fn test_range_style_does_not_leak_past_range() {
    let mut editor = test_editor("abc def", 0, 0);
    editor.set_style_at(&bold(), StyleTarget::Range(range((0, 0), (0, 3))));

    assert_eq!(editor.style_at(pos(0, 2)).font_weight, Some(FontWeight::Bold));
    for index in 3..7 {
        assert_eq!(
            editor.style_at(pos(0, index)).font_weight,
            Some(FontWeight::Lighter),
            "at (0,{index})"
        );
    }
}

#[test]
fn test_position_style_does_not_leak_into_next_line() {
    let mut editor = test_editor("abc\ndef", 0, 0);
    editor.set_style_at(&bold(), StyleTarget::Position(pos(0, 2)));

    assert_eq!(editor.style_at(pos(0, 2)).font_weight, Some(FontWeight::Bold));
    assert_eq!(editor.style_at(pos(1, 0)).font_weight, Some(FontWeight::Lighter));
    assert_eq!(editor.style_at(pos(1, 2)).font_weight, Some(FontWeight::Lighter));
}

#[test]
fn test_set_style_applies_to_active_range_only() {
    let mut editor = test_editor("abc\ndef", 0, 0);
    editor.select(range((0, 0), (0, 1)));
    editor.set_style(&bold());

    assert_eq!(editor.style_at(pos(0, 0)).font_weight, Some(FontWeight::Bold));
    assert_eq!(editor.style_at(pos(0, 1)).font_weight, Some(FontWeight::Lighter));
    assert_eq!(editor.style_at(pos(1, 2)).font_weight, Some(FontWeight::Lighter));
    assert_eq!(editor.range(), Some(range((0, 0), (0, 1))));
    assert!(editor.history().can_undo());
}

#[test]
fn test_set_style_without_range_is_noop() {
    let mut editor = test_editor("abc", 0, 1);
    let before = editor.snapshot();
    editor.set_style(&bold());

    assert_eq!(editor.snapshot(), before);
    assert!(!editor.history().can_undo());
}

#[test]
fn test_set_style_is_undoable() {
    let mut editor = test_editor_with_range("abc", (0, 1), (0, 2));
    editor.set_style(&bold());
    editor.undo();

    assert_eq!(editor.style_at(pos(0, 1)).font_weight, Some(FontWeight::Lighter));
    assert!(editor.document().styles()[0].iter().all(Option::is_none));
}

#[test]
fn test_current_style_uses_range_start() {
    let mut editor = test_editor("abc", 0, 0);
    editor.set_style_at(&bold(), StyleTarget::Position(pos(0, 1)));
    editor.select(range((0, 1), (0, 3)));

    assert_eq!(editor.current_style().font_weight, Some(FontWeight::Bold));

    editor.select(range((0, 0), (0, 2)));
    assert_eq!(editor.current_style().font_weight, Some(FontWeight::Lighter));
}

#[test]
fn test_current_style_without_range_uses_character_before_caret() {
    let mut editor = test_editor("abc", 0, 0);
    editor.set_style_at(&bold(), StyleTarget::Position(pos(0, 1)));

    editor.set_caret(pos(0, 2));
    assert_eq!(editor.current_style().font_weight, Some(FontWeight::Bold));

    editor.set_caret(pos(0, 1));
    assert_eq!(editor.current_style().font_weight, Some(FontWeight::Lighter));

    editor.set_caret(pos(0, 0));
    assert_eq!(editor.current_style(), editor.config().default_style);
}

// ========================================================================
// Multi-character insert and document replacement
// ========================================================================

#[test]
fn test_insert_text_with_line_breaks() {
    let mut editor = test_editor("ad", 0, 1);
    editor.insert_text("b\nc");

    assert_eq!(editor.lines(), vec!["ab", "cd"]);
    assert_eq!(editor.caret(), pos(1, 1));
}

#[test]
fn test_insert_text_replaces_range() {
    let mut editor = test_editor_with_range("hello world", (0, 6), (0, 11));
    editor.insert_text("there");

    assert_eq!(editor.lines(), vec!["hello there"]);
    assert_eq!(editor.caret(), pos(0, 11));
    assert_eq!(editor.range(), None);
}

#[test]
fn test_load_text_resets_selection_and_history() {
    let mut editor = test_editor("abc", 0, 3);
    type_text(&mut editor, "d");
    editor.load_text("new\ntext");

    assert_eq!(editor.lines(), vec!["new", "text"]);
    assert_eq!(editor.caret(), pos(0, 0));
    assert!(!editor.history().can_undo());
}

// ========================================================================
// Undo / redo
// ========================================================================

#[test]
fn test_undo_redo_typing() {
    let mut editor = test_editor("ab", 0, 2);
    type_text(&mut editor, "cd");

    press_with(&mut editor, Key::Char('z'), Modifiers::CTRL);
    assert_eq!(editor.lines(), vec!["abc"]);
    assert_eq!(editor.caret(), pos(0, 3));

    press_with(&mut editor, Key::Char('z'), Modifiers::META);
    assert_eq!(editor.lines(), vec!["ab"]);
    assert_eq!(editor.caret(), pos(0, 2));

    press_with(&mut editor, Key::Char('Z'), Modifiers::CTRL | Modifiers::SHIFT);
    assert_eq!(editor.lines(), vec!["abc"]);

    press_with(&mut editor, Key::Char('y'), Modifiers::CTRL);
    assert_eq!(editor.lines(), vec!["abcd"]);
    assert_eq!(editor.caret(), pos(0, 4));
}

#[test]
fn test_new_edit_clears_redo() {
    let mut editor = test_editor("ab", 0, 2);
    type_text(&mut editor, "c");
    editor.undo();
    assert!(editor.history().can_redo());

    type_text(&mut editor, "x");
    assert!(!editor.history().can_redo());
    editor.redo();
    assert_eq!(editor.lines(), vec!["abx"]);
}

#[test]
fn test_undo_range_delete_restores_text_and_clears_range() {
    let mut editor = test_editor_with_range("foo\nbar", (0, 1), (1, 2));
    press(&mut editor, Key::Delete);
    editor.select(range((0, 0), (0, 1)));
    editor.undo();

    assert_eq!(editor.lines(), vec!["foo", "bar"]);
    assert_eq!(editor.range(), None);
}

#[test]
fn test_undo_with_empty_history_is_noop() {
    let mut editor = test_editor("ab", 0, 1);
    editor.undo();
    assert_eq!(editor.lines(), vec!["ab"]);
    assert_eq!(editor.caret(), pos(0, 1));
}
