//! Document model - lines of characters plus a parallel per-character style table.
//!
//! `styles[line][index]` is the explicit style of `text[line][index]`, or `None`
//! when the character inherits through the cascade. Every public operation keeps
//! the two tables the same shape and keeps at least one line in the document.

mod history;

pub use history::{EditHistory, HistoryEntry, DEFAULT_HISTORY_LIMIT};

use crate::geometry::{Position, TextRange};
use crate::style::{resolve, resolve_preceding, Style};

/// A multi-line styled text buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    text: Vec<Vec<char>>,
    styles: Vec<Vec<Option<Style>>>,
    default_style: Style,
}

impl Default for Document {
    fn default() -> Self {
        Self::new("", Style::base())
    }
}

impl Document {
    /// Create a document from plain text, one line per line break.
    /// All characters start unstyled and inherit `default_style`.
    pub fn new(text: &str, default_style: Style) -> Self {
        let text: Vec<Vec<char>> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        let styles = text.iter().map(|line| vec![None; line.len()]).collect();
        Self {
            text,
            styles,
            default_style,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.text.len()
    }

    /// Length of a line in characters, 0 if the line does not exist
    pub fn line_len(&self, line: usize) -> usize {
        self.text.get(line).map_or(0, Vec::len)
    }

    /// Characters of a line, None if out of bounds
    pub fn line(&self, line: usize) -> Option<&[char]> {
        self.text.get(line).map(Vec::as_slice)
    }

    /// Line content as a String (empty if out of bounds)
    pub fn line_text(&self, line: usize) -> String {
        self.line(line).map(|chars| chars.iter().collect()).unwrap_or_default()
    }

    /// Character at a position, None if out of bounds
    pub fn char_at(&self, pos: Position) -> Option<char> {
        self.text.get(pos.line)?.get(pos.index).copied()
    }

    /// All lines as Strings
    pub fn lines(&self) -> Vec<String> {
        self.text.iter().map(|line| line.iter().collect()).collect()
    }

    /// Full content joined with line breaks
    pub fn content(&self) -> String {
        self.lines().join("\n")
    }

    pub fn styles(&self) -> &[Vec<Option<Style>>] {
        &self.styles
    }

    pub fn default_style(&self) -> &Style {
        &self.default_style
    }

    /// Resolved style at a position
    pub fn style_at(&self, pos: Position) -> &Style {
        resolve(&self.styles, &self.default_style, pos)
    }

    /// Resolved style a character typed at `pos` would inherit
    pub fn style_before(&self, pos: Position) -> &Style {
        resolve_preceding(&self.styles, &self.default_style, pos)
    }

    /// Position after the last character of the last line
    pub fn end_position(&self) -> Position {
        let last = self.line_count() - 1;
        Position::new(last, self.line_len(last))
    }

    /// Check that a position addresses an existing line and a valid index
    pub fn contains(&self, pos: Position) -> bool {
        pos.line < self.line_count() && pos.index <= self.line_len(pos.line)
    }

    /// Clamp a possibly stale position into the current document extent
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count() - 1);
        Position::new(line, pos.index.min(self.line_len(line)))
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert text at a position. Line breaks in `text` split the line.
    ///
    /// New characters take an explicit copy of the style preceding the
    /// insertion point, so typing continues the current style run.
    /// Returns the position just after the inserted text, or None (no-op)
    /// when `pos.line` is out of bounds.
    pub fn insert_text(&mut self, text: &str, pos: Position) -> Option<Position> {
        if pos.line >= self.line_count() {
            tracing::debug!(target: "document", ?pos, "insert_text out of bounds, ignored");
            return None;
        }
        let mut pos = self.clamp(pos);
        let inherited = self.style_before(pos).clone();

        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.insert_new_line(pos);
                pos = Position::new(pos.line + 1, 0);
            }
            let chars: Vec<char> = segment.chars().filter(|&c| c != '\r').collect();
            let count = chars.len();
            let line = &mut self.text[pos.line];
            line.splice(pos.index..pos.index, chars);
            self.styles[pos.line].splice(
                pos.index..pos.index,
                std::iter::repeat(Some(inherited.clone())).take(count),
            );
            pos.index += count;
        }
        Some(pos)
    }

    /// Split the line at `pos` into two lines; the tail keeps its styles.
    /// Returns false (no-op) when `pos.line` is out of bounds.
    pub fn insert_new_line(&mut self, pos: Position) -> bool {
        if pos.line >= self.line_count() {
            return false;
        }
        let pos = self.clamp(pos);
        let tail_text = self.text[pos.line].split_off(pos.index);
        let tail_styles = self.styles[pos.line].split_off(pos.index);
        self.text.insert(pos.line + 1, tail_text);
        self.styles.insert(pos.line + 1, tail_styles);
        true
    }

    /// Delete the character before `pos` (Backspace).
    ///
    /// At column 0 the line is merged into the previous one. At the document
    /// start nothing happens. Returns true if the document changed.
    pub fn remove_before(&mut self, pos: Position) -> bool {
        if pos.line >= self.line_count() {
            return false;
        }
        let pos = self.clamp(pos);
        if pos.index == 0 {
            if pos.line == 0 {
                return false;
            }
            self.merge_with_previous(pos.line);
            return true;
        }
        self.text[pos.line].remove(pos.index - 1);
        self.styles[pos.line].remove(pos.index - 1);
        true
    }

    /// Delete the character after `pos` (forward Delete).
    ///
    /// At the end of a non-last line the next line is merged into this one.
    /// Returns true if the document changed.
    pub fn remove_after(&mut self, pos: Position) -> bool {
        if pos.line >= self.line_count() {
            return false;
        }
        let pos = self.clamp(pos);
        if pos.index < self.line_len(pos.line) {
            self.remove_before(Position::new(pos.line, pos.index + 1))
        } else if pos.line + 1 < self.line_count() {
            self.remove_before(Position::new(pos.line + 1, 0))
        } else {
            false
        }
    }

    /// Delete every character in `[start, end)`, joining the start line's
    /// prefix with the end line's suffix and dropping the lines in between.
    /// Returns true if the document changed.
    pub fn remove_range(&mut self, range: TextRange) -> bool {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end);
        if start >= end {
            return false;
        }

        if start.line == end.line {
            self.text[start.line].drain(start.index..end.index);
            self.styles[start.line].drain(start.index..end.index);
            return true;
        }

        let tail_text = self.text[end.line].split_off(end.index);
        let tail_styles = self.styles[end.line].split_off(end.index);
        self.text[start.line].truncate(start.index);
        self.styles[start.line].truncate(start.index);
        self.text[start.line].extend(tail_text);
        self.styles[start.line].extend(tail_styles);

        // Lines after the start line are emptied or merged; drop them bottom-up
        for line in (start.line + 1..=end.line).rev() {
            self.remove_line(line);
        }
        true
    }

    /// Delete a line and its style row outright.
    /// The last remaining line is never removed.
    pub fn remove_line(&mut self, line: usize) -> bool {
        if line >= self.line_count() || self.line_count() == 1 {
            return false;
        }
        self.text.remove(line);
        self.styles.remove(line);
        true
    }

    fn merge_with_previous(&mut self, line: usize) {
        let text = std::mem::take(&mut self.text[line]);
        let styles = std::mem::take(&mut self.styles[line]);
        self.text[line - 1].extend(text);
        self.styles[line - 1].extend(styles);
        self.remove_line(line);
    }

    // =========================================================================
    // Styling
    // =========================================================================

    /// Merge `patch` over the resolved style of the character at `pos` and
    /// store the result as its explicit style. Returns false (no-op) when `pos`
    /// does not address a character.
    ///
    /// The character after `pos` keeps the style it had before the call.
    pub fn apply_style(&mut self, pos: Position, patch: &Style) -> bool {
        if pos.line >= self.line_count() || pos.index >= self.line_len(pos.line) {
            tracing::debug!(target: "document", ?pos, "apply_style out of bounds, ignored");
            return false;
        }
        self.pin_style_from(Position::new(pos.line, pos.index + 1));
        self.patch_style(pos, patch);
        true
    }

    /// Apply `patch` to every character in `[start, end)`.
    /// Returns true if at least one character was restyled. Text after the
    /// range keeps its previous style.
    pub fn apply_style_range(&mut self, range: TextRange, patch: &Style) -> bool {
        if !self.contains(range.start) || !self.contains(range.end) {
            tracing::debug!(target: "document", ?range, "apply_style_range out of bounds, ignored");
            return false;
        }
        if self.next_char_from(range.start).map_or(true, |first| first >= range.end) {
            return false;
        }
        self.pin_style_from(range.end);
        for line in range.start.line..=range.end.line {
            let from = if line == range.start.line {
                range.start.index
            } else {
                0
            };
            let to = if line == range.end.line {
                range.end.index
            } else {
                self.line_len(line)
            };
            // Resolve left to right so each character sees its own prior style
            for index in from..to {
                self.patch_style(Position::new(line, index), patch);
            }
        }
        true
    }

    fn patch_style(&mut self, pos: Position, patch: &Style) {
        let merged = self.style_at(pos).merged(patch);
        self.styles[pos.line][pos.index] = Some(merged);
    }

    /// Give the first character at or after `pos` an explicit copy of its
    /// resolved style, so restyling what precedes it cannot cascade into it.
    fn pin_style_from(&mut self, pos: Position) {
        let Some(next) = self.next_char_from(pos) else {
            return;
        };
        if self.styles[next.line][next.index].is_none() {
            let resolved = self.style_at(next).clone();
            self.styles[next.line][next.index] = Some(resolved);
        }
    }

    /// First character position at or after `pos` in document order
    fn next_char_from(&self, pos: Position) -> Option<Position> {
        if pos.index < self.line_len(pos.line) {
            return Some(pos);
        }
        (pos.line + 1..self.line_count())
            .find(|&line| self.line_len(line) > 0)
            .map(|line| Position::new(line, 0))
    }

    // =========================================================================
    // Invariants
    // =========================================================================

    /// Check if the text and style tables have the same shape
    pub fn is_consistent(&self) -> bool {
        !self.text.is_empty()
            && self.text.len() == self.styles.len()
            && self
                .text
                .iter()
                .zip(&self.styles)
                .all(|(text, styles)| text.len() == styles.len())
    }

    /// Panic in debug builds if the text/style parity invariant is broken
    pub fn assert_invariants(&self, context: &str) {
        debug_assert!(
            self.is_consistent(),
            "document text/style shape mismatch after {}: text {:?}, styles {:?}",
            context,
            self.text.iter().map(Vec::len).collect::<Vec<_>>(),
            self.styles.iter().map(Vec::len).collect::<Vec<_>>()
        );
    }
}
