//! The style cascade: the effective style of a character is its own explicit
//! entry, or the nearest explicit entry before it in document order, or the
//! document default.

use crate::geometry::Position;

use super::Style;

/// Resolve the effective style at `pos`.
///
/// Scans leftward on the line, then upward through previous lines, and never
/// looks forward. Positions past the document are clamped to its end.
pub fn resolve<'a>(
    styles: &'a [Vec<Option<Style>>],
    default: &'a Style,
    pos: Position,
) -> &'a Style {
    if styles.is_empty() {
        return default;
    }

    let mut line = pos.line.min(styles.len() - 1);
    // `index` is one past the entry we look at next, so 0 means "move up a line"
    let mut index = if line == pos.line {
        (pos.index + 1).min(styles[line].len())
    } else {
        styles[line].len()
    };

    loop {
        while index > 0 {
            index -= 1;
            if let Some(style) = &styles[line][index] {
                return style;
            }
        }
        if line == 0 {
            return default;
        }
        line -= 1;
        index = styles[line].len();
    }
}

/// Resolve the style of the character immediately before `pos`.
///
/// This is the style a character inserted at `pos` inherits: its left neighbour,
/// the previous line's last character when `pos` is at column 0, or the
/// document default at the very start.
pub fn resolve_preceding<'a>(
    styles: &'a [Vec<Option<Style>>],
    default: &'a Style,
    pos: Position,
) -> &'a Style {
    if pos.index > 0 {
        resolve(styles, default, Position::new(pos.line, pos.index - 1))
    } else if pos.line > 0 {
        let prev = pos.line - 1;
        let len = styles.get(prev).map_or(0, Vec::len);
        // An empty previous line has no entry of its own and cascades upward
        resolve(styles, default, Position::new(prev, len.saturating_sub(1)))
    } else {
        default
    }
}
