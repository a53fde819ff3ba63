//! Measurement and paint backend.
//!
//! The editor never talks to a concrete drawing surface. Hosts implement
//! [`Backend`] over whatever 2D raster API they have; layout only needs
//! [`Backend::measure`], painting needs the rest.

use crate::geometry::{Point, Rect};
use crate::style::{Color, ComputedStyle};

/// Metrics of a measured glyph run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance
    pub width: f32,
    /// Distance from the baseline to the top of the glyphs
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the glyphs
    pub descent: f32,
}

/// Primitives the editor consumes from a 2D drawing surface
pub trait Backend {
    /// Size of the drawing surface as (width, height)
    fn canvas_size(&self) -> (f32, f32);

    /// Measure already letter-cased `text` in `style`
    fn measure(&self, text: &str, style: &ComputedStyle) -> TextMetrics;

    /// Paint `text` with its baseline origin at (x, y)
    fn paint_glyph(&mut self, text: &str, x: f32, y: f32, style: &ComputedStyle);

    /// Fill a rectangle
    fn paint_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a straight line
    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Clear the surface
    fn clear(&mut self, width: f32, height: f32);
}

// =============================================================================
// RecordingBackend - deterministic headless backend
// =============================================================================

/// A paint call captured by [`RecordingBackend`]
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Clear {
        width: f32,
        height: f32,
    },
    Glyph {
        text: String,
        x: f32,
        y: f32,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
}

/// Headless backend with synthetic monospace-like metrics that records paint calls.
///
/// Advance is half the font size (uppercase ASCII is wider at 0.7), ascent is
/// 0.8 and descent 0.2 of the font size.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    width: f32,
    height: f32,
    ops: Vec<PaintOp>,
}

impl RecordingBackend {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Paint calls since the last clear
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Text of every painted glyph, in paint order
    pub fn painted_text(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Glyph { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every stroked line (the caret is painted as one)
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Every filled rectangle of the given color
    pub fn rects_of(&self, color: Color) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Rect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    fn advance(ch: char, font_size: f32) -> f32 {
        if ch.is_ascii_uppercase() {
            font_size * 0.7
        } else {
            font_size * 0.5
        }
    }
}

impl Backend for RecordingBackend {
    fn canvas_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn measure(&self, text: &str, style: &ComputedStyle) -> TextMetrics {
        TextMetrics {
            width: text
                .chars()
                .map(|ch| Self::advance(ch, style.font_size))
                .sum(),
            ascent: style.font_size * 0.8,
            descent: style.font_size * 0.2,
        }
    }

    fn paint_glyph(&mut self, text: &str, x: f32, y: f32, style: &ComputedStyle) {
        self.ops.push(PaintOp::Glyph {
            text: text.to_string(),
            x,
            y,
            color: style.color,
        });
    }

    fn paint_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::Rect { rect, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.ops.push(PaintOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ops.clear();
        self.ops.push(PaintOp::Clear { width, height });
    }
}
