//! Positions, ranges and canvas geometry shared by every layer of the editor.

use serde::{Deserialize, Serialize};

/// A position in the document (line and character index, both 0-indexed).
///
/// `index` ranges over `0..=line_len`; `line_len` means "after the last character".
/// Ordering is by line, then index, which is document order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub index: usize,
}

impl Position {
    pub const fn new(line: usize, index: usize) -> Self {
        Self { line, index }
    }

    pub const fn zero() -> Self {
        Self { line: 0, index: 0 }
    }
}

/// A normalized selection range: `start` never comes after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    /// Build a range from two endpoints in any order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Check if the range covers no characters
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if a position is within this range (end is exclusive)
    pub fn contains(&self, pos: Position) -> bool {
        pos >= self.start && pos < self.end
    }
}

/// A point in canvas coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        let a = Position::new(0, 5);
        let b = Position::new(1, 0);
        let c = Position::new(1, 3);

        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }

    #[test]
    fn test_range_normalizes_endpoints() {
        let forward = TextRange::new(Position::new(0, 1), Position::new(2, 0));
        let backward = TextRange::new(Position::new(2, 0), Position::new(0, 1));
        assert_eq!(forward, backward);
        assert_eq!(backward.start, Position::new(0, 1));

        let same_line = TextRange::new(Position::new(3, 9), Position::new(3, 2));
        assert_eq!(same_line.start, Position::new(3, 2));
        assert_eq!(same_line.end, Position::new(3, 9));
    }

    #[test]
    fn test_range_contains() {
        let range = TextRange::new(Position::new(0, 2), Position::new(1, 1));
        assert!(!range.contains(Position::new(0, 1)));
        assert!(range.contains(Position::new(0, 2)));
        assert!(range.contains(Position::new(1, 0)));
        assert!(!range.contains(Position::new(1, 1))); // End is exclusive
    }
}
