//! Layout engine - per-character bounding boxes for the whole document.
//!
//! A [`Layout`] is an immutable value computed from a [`Document`] and a
//! [`Backend`] once per render cycle. Caret placement, hit testing and painting
//! all read from the same layout, so clicks map to the rendered position even
//! under alignment and text-transform.


use crate::backend::Backend;
use crate::document::Document;
use crate::geometry::{Position, Rect};
use crate::style::{ComputedStyle, TextAlign};

/// Geometry of one rendered character
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBox {
    /// The letter-cased text that was measured and is painted
    pub glyph: String,
    pub x: f32,
    /// Top of the glyph (baseline - ascent)
    pub y: f32,
    pub width: f32,
    /// ascent + descent
    pub height: f32,
    pub ascent: f32,
    pub descent: f32,
    pub style: ComputedStyle,
}

impl GlyphBox {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Geometry of one line: its vertical band and its glyphs
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    /// Top of the line band
    pub top: f32,
    /// Line height (band height)
    pub height: f32,
    /// Baseline y, the bottom of the band
    pub baseline: f32,
    /// Horizontal start offset from text alignment
    pub x: f32,
    /// Sum of glyph advances
    pub width: f32,
    pub glyphs: Vec<GlyphBox>,
}

impl LineLayout {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Caret x for an index into this line (clamped to the line end)
    pub fn caret_x(&self, index: usize) -> f32 {
        match index.min(self.glyphs.len()) {
            0 => self.x,
            i => self.glyphs[i - 1].right(),
        }
    }
}

/// Bounding boxes for every character of a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    lines: Vec<LineLayout>,
    canvas_width: f32,
}

impl Layout {
    /// Lay out the whole document against the backend's metrics.
    ///
    /// Styles are resolved in one forward pass: the last explicit entry seen
    /// is carried along, which is what the cascade would return for every
    /// character after it.
    pub fn compute<B: Backend + ?Sized>(document: &Document, backend: &B) -> Self {
        let (canvas_width, _) = backend.canvas_size();
        let styles = document.styles();

        let mut lines = Vec::with_capacity(document.line_count());
        let mut cursor_y = 0.0_f32;
        let mut inherited = document.default_style().computed();

        for line in 0..document.line_count() {
            let chars = document.line(line).unwrap_or(&[]);
            let line_styles = styles.get(line).map_or(&[][..], Vec::as_slice);

            let mut computed = Vec::with_capacity(chars.len());
            for index in 0..chars.len() {
                if let Some(Some(style)) = line_styles.get(index) {
                    inherited = style.computed();
                }
                computed.push(inherited.clone());
            }

            // An empty line takes the inherited height and alignment
            let height = computed
                .iter()
                .map(|style| style.line_height)
                .fold(inherited.line_height, f32::max);
            let align = computed
                .first()
                .unwrap_or(&inherited)
                .text_align;

            cursor_y += height;
            let baseline = cursor_y;

            let mut glyphs: Vec<GlyphBox> = chars
                .iter()
                .zip(computed)
                .map(|(&ch, style)| {
                    let glyph = style.text_transform.apply(ch);
                    let metrics = backend.measure(&glyph, &style);
                    GlyphBox {
                        glyph,
                        x: 0.0,
                        y: baseline - metrics.ascent,
                        width: metrics.width,
                        height: metrics.ascent + metrics.descent,
                        ascent: metrics.ascent,
                        descent: metrics.descent,
                        style,
                    }
                })
                .collect();

            let width: f32 = glyphs.iter().map(|g| g.width).sum();
            let start_x = match align {
                TextAlign::Left => 0.0,
                TextAlign::Center => (canvas_width - width) / 2.0,
                TextAlign::Right => canvas_width - width,
            };

            let mut x = start_x;
            for glyph in &mut glyphs {
                glyph.x = x;
                x += glyph.width;
            }

            lines.push(LineLayout {
                top: baseline - height,
                height,
                baseline,
                x: start_x,
                width,
                glyphs,
            });
        }

        tracing::trace!(target: "layout", lines = lines.len(), height = cursor_y, "layout computed");

        Self {
            lines,
            canvas_width,
        }
    }

    pub fn lines(&self) -> &[LineLayout] {
        &self.lines
    }

    pub fn line(&self, line: usize) -> Option<&LineLayout> {
        self.lines.get(line)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of glyphs on a line, 0 if the line does not exist
    pub fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.glyphs.len())
    }

    pub fn glyph(&self, pos: Position) -> Option<&GlyphBox> {
        self.lines.get(pos.line)?.glyphs.get(pos.index)
    }

    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    /// Bottom of the last line
    pub fn height(&self) -> f32 {
        self.lines.last().map_or(0.0, LineLayout::bottom)
    }

    /// Vertical caret bar for a position: x, line top, zero width, line height
    pub fn caret_rect(&self, pos: Position) -> Option<Rect> {
        let line = self.lines.get(pos.line)?;
        Some(Rect::new(line.caret_x(pos.index), line.top, 0.0, line.height))
    }
}
