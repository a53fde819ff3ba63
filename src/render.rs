//! Painter - draws text, selection highlight and caret from a computed layout.
//!
//! Painting is a pure function of (document, layout, selection, config): the
//! painter keeps no state between frames.

use crate::backend::Backend;
use crate::config::EditorConfig;
use crate::document::Document;
use crate::geometry::{Point, Position, Rect, TextRange};
use crate::layout::{Layout, LineLayout};
use crate::selection::Selection;
use crate::style::TextDecoration;

/// Paint one full frame
pub fn paint<B: Backend + ?Sized>(
    backend: &mut B,
    document: &Document,
    layout: &Layout,
    selection: &Selection,
    config: &EditorConfig,
) {
    let (width, height) = backend.canvas_size();
    backend.clear(width, height);

    for line in layout.lines() {
        paint_line(backend, line);
    }

    match selection.active_range() {
        Some(range) => {
            for rect in selection_rects(backend, document, layout, range) {
                backend.paint_rect(rect, config.selection_color);
            }
        }
        None => {
            if let Some(caret) = layout.caret_rect(selection.caret()) {
                backend.stroke_line(
                    Point::new(caret.x, caret.y),
                    Point::new(caret.x, caret.bottom()),
                    config.caret_color,
                    config.caret_width,
                );
            }
        }
    }
}

fn paint_line<B: Backend + ?Sized>(backend: &mut B, line: &LineLayout) {
    for glyph in &line.glyphs {
        let style = &glyph.style;

        if !style.background_color.is_transparent() {
            backend.paint_rect(
                Rect::new(glyph.x, line.top, glyph.width, line.height),
                style.background_color,
            );
        }

        if style.is_underlined() {
            backend.paint_rect(
                Rect::new(glyph.x, line.baseline + 1.0, glyph.width, 1.0),
                style.color,
            );
        }
        match style.text_decoration {
            TextDecoration::LineThrough => backend.paint_rect(
                Rect::new(glyph.x, line.baseline - glyph.ascent * 0.35, glyph.width, 1.0),
                style.color,
            ),
            TextDecoration::Overline => {
                backend.paint_rect(Rect::new(glyph.x, glyph.y, glyph.width, 1.0), style.color)
            }
            TextDecoration::None | TextDecoration::Underline => {}
        }

        backend.paint_glyph(&glyph.glyph, glyph.x, line.baseline, style);
    }
}

/// Highlight rectangles for a range, one per line band it touches.
///
/// Lines the range fully crosses but that have no glyphs get the width of a
/// space so the selection stays visible across blank lines.
pub fn selection_rects<B: Backend + ?Sized>(
    backend: &B,
    document: &Document,
    layout: &Layout,
    range: TextRange,
) -> Vec<Rect> {
    let mut rects = Vec::new();
    let last = range.end.line.min(layout.line_count().saturating_sub(1));

    for index in range.start.line..=last {
        let Some(line) = layout.line(index) else {
            break;
        };
        let from = if index == range.start.line {
            line.caret_x(range.start.index)
        } else {
            line.x
        };
        let mut to = if index == range.end.line {
            line.caret_x(range.end.index)
        } else {
            line.x + line.width
        };

        if line.is_empty() && index != range.end.line {
            let style = document.style_at(Position::new(index, 0)).computed();
            to = from + backend.measure(" ", &style).width;
        }

        if to > from {
            rects.push(Rect::new(from, line.top, to - from, line.height));
        }
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{PaintOp, RecordingBackend};
    use crate::style::{Color, Style};

    fn setup(text: &str) -> (Document, Layout, RecordingBackend) {
        let style = Style::base().with_font_size(10.0).with_line_height(20.0);
        let doc = Document::new(text, style);
        let backend = RecordingBackend::new(400.0, 200.0);
        let layout = Layout::compute(&doc, &backend);
        (doc, layout, backend)
    }

    #[test]
    fn test_paint_draws_glyphs_and_caret() {
        let (doc, layout, mut backend) = setup("ab");
        let mut selection = Selection::new();
        selection.caret.set_position(Position::new(0, 1));
        paint(&mut backend, &doc, &layout, &selection, &EditorConfig::default());

        assert!(matches!(backend.ops()[0], PaintOp::Clear { .. }));
        assert_eq!(backend.painted_text(), "ab");
        assert_eq!(
            backend.lines(),
            vec![(Point::new(5.0, 0.0), Point::new(5.0, 20.0))]
        );
    }

    #[test]
    fn test_range_replaces_caret() {
        let (doc, layout, mut backend) = setup("hello");
        let mut selection = Selection::new();
        selection
            .range
            .set(Some(TextRange::new(Position::new(0, 1), Position::new(0, 3))));
        let config = EditorConfig::default();
        paint(&mut backend, &doc, &layout, &selection, &config);

        assert!(backend.lines().is_empty());
        assert_eq!(
            backend.rects_of(config.selection_color),
            vec![Rect::new(5.0, 0.0, 10.0, 20.0)]
        );
    }

    #[test]
    fn test_selection_rects_across_blank_line() {
        let (doc, layout, backend) = setup("abc\n\nde");
        let range = TextRange::new(Position::new(0, 2), Position::new(2, 1));
        let rects = selection_rects(&backend, &doc, &layout, range);

        assert_eq!(
            rects,
            vec![
                Rect::new(10.0, 0.0, 5.0, 20.0),
                Rect::new(0.0, 20.0, 5.0, 20.0),
                Rect::new(0.0, 40.0, 5.0, 20.0),
            ]
        );
    }

    #[test]
    fn test_background_and_underline() {
        let mut doc = Document::new(
            "a",
            Style::base().with_font_size(10.0).with_line_height(20.0),
        );
        let red = Color::rgb(255, 0, 0);
        doc.apply_style(
            Position::new(0, 0),
            &Style::default().with_background(red).with_underline(true),
        );
        let mut backend = RecordingBackend::new(100.0, 100.0);
        let layout = Layout::compute(&doc, &backend);
        paint(&mut backend, &doc, &layout, &Selection::new(), &EditorConfig::default());

        assert_eq!(backend.rects_of(red), vec![Rect::new(0.0, 0.0, 5.0, 20.0)]);
        assert_eq!(
            backend.rects_of(Color::BLACK),
            vec![Rect::new(0.0, 21.0, 5.0, 1.0)]
        );
    }
}
