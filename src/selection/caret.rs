//! Caret - a single insertion point with keyboard navigation and click hit testing.
//!
//! Navigation reads line lengths from the current [`Layout`], so every method
//! must be called before the document mutation it accompanies: the layout
//! still describes the pre-edit document at that point.

use crate::document::Document;
use crate::geometry::{Point, Position};
use crate::layout::Layout;

use super::word::{next_word_end, previous_word_start, word_bounds};
use super::SelectionEvent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caret {
    position: Position,
}

impl Caret {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the caret. Emits an event only if the position actually changed.
    pub fn set_position(&mut self, position: Position) -> Option<SelectionEvent> {
        if self.position == position {
            return None;
        }
        self.position = position;
        Some(SelectionEvent::CaretMoved(position))
    }

    // =========================================================================
    // Arrow navigation
    // =========================================================================

    /// One character left, wrapping to the end of the previous line
    pub fn move_left(&mut self, layout: &Layout) -> Option<SelectionEvent> {
        let Position { line, index } = self.position;
        if index > 0 {
            self.set_position(Position::new(line, index - 1))
        } else if line > 0 {
            self.set_position(Position::new(line - 1, layout.line_len(line - 1)))
        } else {
            None
        }
    }

    /// One character right, wrapping to the start of the next line
    pub fn move_right(&mut self, layout: &Layout) -> Option<SelectionEvent> {
        let Position { line, index } = self.position;
        if index < layout.line_len(line) {
            self.set_position(Position::new(line, index + 1))
        } else if line + 1 < layout.line_count() {
            self.set_position(Position::new(line + 1, 0))
        } else {
            None
        }
    }

    /// One line up, clamping the column to the target line
    pub fn move_up(&mut self, layout: &Layout) -> Option<SelectionEvent> {
        let Position { line, index } = self.position;
        if line == 0 {
            return None;
        }
        let index = index.min(layout.line_len(line - 1));
        self.set_position(Position::new(line - 1, index))
    }

    /// One line down, clamping the column to the target line
    pub fn move_down(&mut self, layout: &Layout) -> Option<SelectionEvent> {
        let Position { line, index } = self.position;
        if line + 1 >= layout.line_count() {
            return None;
        }
        let index = index.min(layout.line_len(line + 1));
        self.set_position(Position::new(line + 1, index))
    }

    pub fn move_line_start(&mut self) -> Option<SelectionEvent> {
        self.set_position(Position::new(self.position.line, 0))
    }

    pub fn move_line_end(&mut self, layout: &Layout) -> Option<SelectionEvent> {
        let line = self.position.line;
        self.set_position(Position::new(line, layout.line_len(line)))
    }

    pub fn move_document_start(&mut self) -> Option<SelectionEvent> {
        self.set_position(Position::zero())
    }

    pub fn move_document_end(&mut self, layout: &Layout) -> Option<SelectionEvent> {
        let last = layout.line_count().saturating_sub(1);
        self.set_position(Position::new(last, layout.line_len(last)))
    }

    /// To the start of the previous word; at column 0, to the previous line's end
    pub fn move_word_left(&mut self, document: &Document) -> Option<SelectionEvent> {
        let Position { line, index } = document.clamp(self.position);
        if index == 0 {
            if line == 0 {
                return None;
            }
            return self.set_position(Position::new(line - 1, document.line_len(line - 1)));
        }
        let text = document.line(line).unwrap_or(&[]);
        self.set_position(Position::new(line, previous_word_start(text, index)))
    }

    /// To the end of the next word; at the line end, to the next line's start
    pub fn move_word_right(&mut self, document: &Document) -> Option<SelectionEvent> {
        let Position { line, index } = document.clamp(self.position);
        let text = document.line(line).unwrap_or(&[]);
        if index >= text.len() {
            if line + 1 >= document.line_count() {
                return None;
            }
            return self.set_position(Position::new(line + 1, 0));
        }
        self.set_position(Position::new(line, next_word_end(text, index)))
    }

    // =========================================================================
    // Edit tracking
    // =========================================================================

    /// A character was typed at the caret
    pub fn on_typed_character(&mut self) -> Option<SelectionEvent> {
        let Position { line, index } = self.position;
        self.set_position(Position::new(line, index + 1))
    }

    /// Backspace: step left, or to the end of the previous line it merges into
    pub fn on_backspace(&mut self, layout: &Layout) -> Option<SelectionEvent> {
        self.move_left(layout)
    }

    /// Forward delete: the caret stays, clamped into the line
    pub fn on_delete(&mut self, layout: &Layout) -> Option<SelectionEvent> {
        let Position { line, index } = self.position;
        self.set_position(Position::new(line, index.min(layout.line_len(line))))
    }

    /// Enter: start of the newly split line
    pub fn on_enter(&mut self) -> Option<SelectionEvent> {
        self.set_position(Position::new(self.position.line + 1, 0))
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    /// Place the caret from a click.
    ///
    /// A triple click (`click_count == 3`) places it at the end of the word
    /// under the pointer instead; clicking a space does nothing then.
    pub fn on_click(
        &mut self,
        layout: &Layout,
        document: &Document,
        point: Point,
        click_count: u8,
    ) -> Option<SelectionEvent> {
        if click_count == 3 {
            let glyph = layout.glyph_at(point)?;
            let text = document.line(glyph.line)?;
            let word = word_bounds(glyph.line, glyph.index, text)?;
            return self.set_position(word.end);
        }
        let position = layout.position_at(point)?;
        self.set_position(position)
    }

    /// A double click selects one character; the caret goes after it
    pub fn on_double_click(&mut self, layout: &Layout, point: Point) -> Option<SelectionEvent> {
        let glyph = layout.glyph_at(point)?;
        self.set_position(Position::new(glyph.line, glyph.index + 1))
    }
}
