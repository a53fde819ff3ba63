//! Whitespace-delimited word boundaries.
//!
//! Words are runs of characters between ASCII spaces. This is deliberately not
//! Unicode word segmentation: punctuation belongs to the word it touches.

use crate::geometry::{Position, TextRange};

const SPACE: char = ' ';

/// Bounds of the word containing `index` on a line.
///
/// The word starts just after the last space at or before `index` (or at 0)
/// and ends at the first space at or after `index` (or at the line end).
/// Returns None when `index` is past the line or sits on a space.
pub fn word_bounds(line: usize, index: usize, text: &[char]) -> Option<TextRange> {
    if *text.get(index)? == SPACE {
        return None;
    }
    let start = text[..=index]
        .iter()
        .rposition(|&c| c == SPACE)
        .map_or(0, |i| i + 1);
    let end = text[index..]
        .iter()
        .position(|&c| c == SPACE)
        .map_or(text.len(), |i| index + i);
    Some(TextRange::new(
        Position::new(line, start),
        Position::new(line, end),
    ))
}

/// Index of the end of the next word at or after `index`, skipping leading spaces.
/// Returns `index` unchanged when it is already at the line end.
pub fn next_word_end(text: &[char], index: usize) -> usize {
    let mut i = index.min(text.len());
    while i < text.len() && text[i] == SPACE {
        i += 1;
    }
    while i < text.len() && text[i] != SPACE {
        i += 1;
    }
    i
}

/// Index of the start of the previous word before `index`, skipping trailing spaces.
/// Returns 0 at the line start.
pub fn previous_word_start(text: &[char], index: usize) -> usize {
    let mut i = index.min(text.len());
    while i > 0 && text[i - 1] == SPACE {
        i -= 1;
    }
    while i > 0 && text[i - 1] != SPACE {
        i -= 1;
    }
    i
}
