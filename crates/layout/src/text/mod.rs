//! A deterministic text measurer that needs no font files.

use quire_traits::{InlineRun, StringSize, StyledText, TextMeasurement, TextMeasurer, TextStyle};

/// Descender as a fraction of the font size.
const DESCENDER_RATIO: f32 = -0.2;

/// Measures text as if every glyph advanced by `advance * font_size`.
///
/// Runs are broken into words after each whitespace character. A word keeps
/// its trailing whitespace in its inline width, but that whitespace does not
/// count towards the minimum width since a line can always break there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub advance: f32,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl FixedAdvanceMeasurer {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }

    fn width_of(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.advance
    }
}

/// Splits `text` into words, each carrying the whitespace that follows it.
pub(crate) fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut in_space = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            in_space = true;
        } else if in_space {
            words.push(&text[start..i]);
            start = i;
            in_space = false;
        }
    }
    if start < text.len() {
        words.push(&text[start..]);
    }
    words
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, runs: &[StyledText]) -> TextMeasurement {
        let mut measurement = TextMeasurement::default();
        for run in runs {
            let style = &run.style;
            for word in split_words(&run.text) {
                let width = self.width_of(word, style.font_size);
                let trimmed = self.width_of(word.trim_end(), style.font_size);
                measurement.min_width = measurement.min_width.max(trimmed);
                measurement.max_width += width;
                measurement.items.push(InlineRun {
                    text: word.to_string(),
                    width,
                    height: style.font_size * style.line_height,
                    font_size: style.font_size,
                    style: style.clone(),
                });
            }
        }
        measurement
    }

    fn size_of_string(&self, text: &str, style: &TextStyle) -> StringSize {
        StringSize {
            width: self.width_of(text, style.font_size),
            height: style.font_size * style.line_height,
            font_size: style.font_size,
            line_height: style.line_height,
            descender: DESCENDER_RATIO * style.font_size,
        }
    }
}
