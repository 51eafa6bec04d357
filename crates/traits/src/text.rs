//! TextMeasurer trait for abstracting glyph measurement.
//!
//! The layout engine never shapes text itself. It resolves a concrete
//! [`TextStyle`] for every run and asks a measurer how wide the run is when
//! wrapped as tightly as possible and when not wrapped at all.

use quire_style::TextAlign;
use std::fmt::Debug;

/// Fully resolved text properties for one run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub font_size: f32,
    /// Multiple of `font_size`.
    pub line_height: f32,
    pub bold: bool,
    pub italics: bool,
    pub alignment: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "Helvetica".to_string(),
            font_size: 12.0,
            line_height: 1.0,
            bold: false,
            italics: false,
            alignment: TextAlign::Left,
        }
    }
}

/// A run of text together with the style it should be measured in.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub style: TextStyle,
}

impl StyledText {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One shaped, unbreakable piece of inline content.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineRun {
    pub text: String,
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub style: TextStyle,
}

/// Result of measuring a sequence of styled runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextMeasurement {
    /// Width of the widest unbreakable piece (tightest wrap).
    pub min_width: f32,
    /// Width of everything on a single line (no wrap).
    pub max_width: f32,
    pub items: Vec<InlineRun>,
}

/// Metrics for a single string laid out on one line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StringSize {
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub line_height: f32,
    /// Distance from the baseline to the lowest glyph extent. Usually negative.
    pub descender: f32,
}

/// Measures text for the layout engine.
///
/// # Implementations
///
/// - `FixedAdvanceMeasurer` (layout crate): every glyph advances by a fixed
///   fraction of the font size. Deterministic, no font files required.
pub trait TextMeasurer: Debug + Send + Sync {
    /// Measures a sequence of runs that flow together as one paragraph.
    fn measure(&self, runs: &[StyledText]) -> TextMeasurement;

    /// Measures a single string on one line.
    fn size_of_string(&self, text: &str, style: &TextStyle) -> StringSize;
}
