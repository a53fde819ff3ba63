//! Range selection driven by pointer drags, double and triple clicks.

use crate::document::Document;
use crate::geometry::{Point, Position, TextRange};
use crate::layout::Layout;

use super::word::word_bounds;
use super::SelectionEvent;

/// An optional normalized range plus the transient drag state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSelection {
    range: Option<TextRange>,
    /// Drag anchor; set between mouse down and mouse up
    anchor: Option<Position>,
}

impl RangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(&self) -> Option<TextRange> {
        self.range
    }

    pub fn is_active(&self) -> bool {
        self.range.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    /// Replace the range. Emits an event only on a structural change.
    pub fn set(&mut self, range: Option<TextRange>) -> Option<SelectionEvent> {
        if self.range == range {
            return None;
        }
        self.range = range;
        Some(SelectionEvent::RangeChanged(range))
    }

    /// Drop the range (Escape). Idempotent.
    pub fn clear(&mut self) -> Option<SelectionEvent> {
        self.set(None)
    }

    /// Select the whole document
    pub fn select_all(&mut self, document: &Document) -> Option<SelectionEvent> {
        let range = TextRange::new(Position::zero(), document.end_position());
        self.set((!range.is_empty()).then_some(range))
    }

    /// Start a drag: remember the anchor and discard any existing range
    pub fn on_mouse_down(&mut self, layout: &Layout, point: Point) -> Option<SelectionEvent> {
        self.anchor = layout.position_at(point);
        self.clear()
    }

    /// Extend the drag to the pointer. Ignored unless a drag is in progress.
    pub fn on_mouse_move(&mut self, layout: &Layout, point: Point) -> Option<SelectionEvent> {
        let anchor = self.anchor?;
        let current = layout.position_at(point)?;
        let range = TextRange::new(anchor, current);
        self.set((!range.is_empty()).then_some(range))
    }

    /// End the drag. Emits `RangeFinalized` when a range was selected.
    pub fn on_mouse_up(&mut self) -> Option<SelectionEvent> {
        self.anchor.take()?;
        self.range.map(SelectionEvent::RangeFinalized)
    }

    /// Select exactly the character under the pointer
    pub fn on_double_click(&mut self, layout: &Layout, point: Point) -> Option<SelectionEvent> {
        let pos = layout.glyph_at(point)?;
        self.set(Some(TextRange::new(
            pos,
            Position::new(pos.line, pos.index + 1),
        )))
    }

    /// A triple click selects the word under the pointer; other clicks are ignored
    pub fn on_click(
        &mut self,
        layout: &Layout,
        document: &Document,
        point: Point,
        click_count: u8,
    ) -> Option<SelectionEvent> {
        if click_count != 3 {
            return None;
        }
        let pos = layout.glyph_at(point)?;
        let word = word_bounds(pos.line, pos.index, document.line(pos.line)?)?;
        self.set(Some(word))
    }
}
