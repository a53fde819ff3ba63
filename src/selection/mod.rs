//! Selection - the caret and the optional range behind one change stream.
//!
//! # Architecture
//!
//! - [`Caret`]: single insertion point, keyboard navigation, click placement
//! - [`RangeSelection`]: drag, double-click and triple-click ranges
//! - [`Selection`]: routes pointer input to both and syncs the caret to a
//!   finished drag
//!
//! Every state change is reported as a typed [`SelectionEvent`] return value
//! instead of a callback; the editor collects them to decide whether to
//! re-render. Key routing lives in the editor, because choosing between a
//! range edit and a caret edit depends on the document.

mod caret;
mod range;
mod word;

pub use caret::Caret;
pub use range::RangeSelection;
pub use word::{next_word_end, previous_word_start, word_bounds};

use crate::document::Document;
use crate::geometry::{Position, TextRange};
use crate::input::{PointerEvent, PointerPhase};
use crate::layout::Layout;

/// A change reported by the caret or the range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The caret moved to a new position
    CaretMoved(Position),
    /// The range was replaced or cleared
    RangeChanged(Option<TextRange>),
    /// A drag finished with a non-empty range
    RangeFinalized(TextRange),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub caret: Caret,
    pub range: RangeSelection,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caret position
    pub fn caret(&self) -> Position {
        self.caret.position()
    }

    /// Active range, if any
    pub fn active_range(&self) -> Option<TextRange> {
        self.range.range()
    }

    /// Route a pointer event. Returns every change it caused, in order.
    ///
    /// `Up` completes a click of depth `click_count`: single clicks place the
    /// caret when no range is active, double clicks select one character,
    /// triple clicks select a word.
    pub fn on_pointer(
        &mut self,
        event: &PointerEvent,
        layout: &Layout,
        document: &Document,
    ) -> Vec<SelectionEvent> {
        let point = event.point;
        let mut events = Vec::new();

        match event.phase {
            PointerPhase::Down => events.extend(self.range.on_mouse_down(layout, point)),
            PointerPhase::Move => events.extend(self.range.on_mouse_move(layout, point)),
            PointerPhase::Up => {
                if let Some(finalized) = self.range.on_mouse_up() {
                    if let SelectionEvent::RangeFinalized(range) = finalized {
                        events.extend(self.caret.set_position(range.end));
                    }
                    events.push(finalized);
                }

                if event.click_count >= 1 {
                    if !self.range.is_active() {
                        events.extend(self.caret.on_click(layout, document, point, event.click_count));
                    }
                    events.extend(self.range.on_click(layout, document, point, event.click_count));
                }
                if event.click_count == 2 {
                    events.extend(self.range.on_double_click(layout, point));
                    events.extend(self.caret.on_double_click(layout, point));
                }
            }
        }

        events
    }
}
