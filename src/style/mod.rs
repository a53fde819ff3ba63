//! Character styles.
//!
//! A [`Style`] is a partial record: every field is optional and unset fields are
//! inherited through the cascade in [`resolve`]. Concrete values only appear in
//! a [`ComputedStyle`], which is what the layout engine and the backend see.

mod resolve;

pub use resolve::{resolve, resolve_preceding};

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Color
// ============================================================================

/// An RGBA color, serialized as a `#RRGGBB` / `#RRGGBBAA` hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Color::TRANSPARENT);
        }
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|e| e.to_string());
        match s.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

// ============================================================================
// Style enums
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Lighter,
    #[default]
    Normal,
    Bold,
    Bolder,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Lighter => "lighter",
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
            FontWeight::Bolder => "bolder",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
    Overline,
}

/// Letter casing applied before measuring and painting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    #[serde(alias = "uppercase")]
    Upper,
    #[serde(alias = "lowercase")]
    Lower,
}

impl TextTransform {
    /// Apply the transform to a single character.
    ///
    /// Returns a string because case mapping is not always one-to-one ('ß' → "SS").
    pub fn apply(self, ch: char) -> String {
        match self {
            TextTransform::None => ch.to_string(),
            TextTransform::Upper => ch.to_uppercase().collect(),
            TextTransform::Lower => ch.to_lowercase().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

// ============================================================================
// Style
// ============================================================================

/// Baseline values used when neither the document nor the configured default
/// style sets a field.
pub const DEFAULT_FONT_FAMILY: &str = "serif";
pub const DEFAULT_FONT_SIZE: f32 = 48.0;
pub const DEFAULT_LINE_HEIGHT: f32 = 48.0;

/// A partial character style. Unset fields are inherited, never defaulted eagerly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

impl Style {
    /// The built-in document default: every field set.
    pub fn base() -> Self {
        Self {
            color: Some(Color::BLACK),
            background_color: Some(Color::TRANSPARENT),
            font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            font_size: Some(DEFAULT_FONT_SIZE),
            font_weight: Some(FontWeight::Lighter),
            font_style: Some(FontStyle::Normal),
            underline: Some(false),
            text_decoration: Some(TextDecoration::None),
            line_height: Some(DEFAULT_LINE_HEIGHT),
            text_transform: Some(TextTransform::None),
            text_align: Some(TextAlign::Left),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn with_text_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = Some(transform);
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Overlay `patch` on top of `self`: fields set in `patch` win.
    pub fn merged(&self, patch: &Style) -> Style {
        Style {
            color: patch.color.or(self.color),
            background_color: patch.background_color.or(self.background_color),
            font_family: patch
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            font_size: patch.font_size.or(self.font_size),
            font_weight: patch.font_weight.or(self.font_weight),
            font_style: patch.font_style.or(self.font_style),
            underline: patch.underline.or(self.underline),
            text_decoration: patch.text_decoration.or(self.text_decoration),
            line_height: patch.line_height.or(self.line_height),
            text_transform: patch.text_transform.or(self.text_transform),
            text_align: patch.text_align.or(self.text_align),
        }
    }

    /// Fill every unset field from the built-in defaults.
    pub fn computed(&self) -> ComputedStyle {
        ComputedStyle {
            color: self.color.unwrap_or(Color::BLACK),
            background_color: self.background_color.unwrap_or(Color::TRANSPARENT),
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            font_size: self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            font_weight: self.font_weight.unwrap_or(FontWeight::Lighter),
            font_style: self.font_style.unwrap_or_default(),
            underline: self.underline.unwrap_or(false),
            text_decoration: self.text_decoration.unwrap_or_default(),
            line_height: self.line_height.unwrap_or(DEFAULT_LINE_HEIGHT),
            text_transform: self.text_transform.unwrap_or_default(),
            text_align: self.text_align.unwrap_or_default(),
        }
    }
}

/// A style with every field concrete, as handed to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub color: Color,
    pub background_color: Color,
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub underline: bool,
    pub text_decoration: TextDecoration,
    pub line_height: f32,
    pub text_transform: TextTransform,
    pub text_align: TextAlign,
}

impl ComputedStyle {
    /// CSS-like font shorthand, e.g. `italic bold 48px serif`
    pub fn font_descriptor(&self) -> String {
        format!(
            "{} {} {}px {}",
            self.font_style.as_str(),
            self.font_weight.as_str(),
            self.font_size,
            self.font_family
        )
    }

    pub fn is_underlined(&self) -> bool {
        self.underline || self.text_decoration == TextDecoration::Underline
    }
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Style::base().computed()
    }
}
