use crate::context::LayoutContext;
use crate::measure::{DocumentMeasurer, MeasuredNode};
use crate::page::{Fragment, Line};
use crate::text::split_words;
use crate::vector::Vector;
use crate::writer::{DefaultElementWriter, ElementWriter};
use quire_style::{Margins, StyleDictionary};
use quire_traits::{InlineRun, StringSize, StyledText, TextMeasurement, TextMeasurer, TextStyle};
use quire_types::Size;
use serde_json::Value;
use std::collections::HashMap;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A text measurer with hand-picked word widths.
///
/// Listed words measure exactly their table width. Anything else is
/// `char_width` per character. Font size does not affect widths.
#[derive(Debug, Clone)]
pub struct StubMeasurer {
    pub words: HashMap<String, f32>,
    pub char_width: f32,
}

impl Default for StubMeasurer {
    fn default() -> Self {
        Self {
            words: HashMap::from([("hello".to_string(), 30.0), ("world".to_string(), 35.0)]),
            char_width: 5.0,
        }
    }
}

impl StubMeasurer {
    pub fn width(&self, word: &str) -> f32 {
        self.words
            .get(word)
            .copied()
            .unwrap_or(word.chars().count() as f32 * self.char_width)
    }
}

impl TextMeasurer for StubMeasurer {
    fn measure(&self, runs: &[StyledText]) -> TextMeasurement {
        let mut result = TextMeasurement::default();
        for run in runs {
            for word in split_words(&run.text) {
                let trimmed = self.width(word.trim_end());
                let width = trimmed + (word.len() - word.trim_end().len()) as f32 * self.char_width;
                result.min_width = result.min_width.max(trimmed);
                result.max_width += width;
                result.items.push(InlineRun {
                    text: word.to_string(),
                    width,
                    height: run.style.font_size * run.style.line_height,
                    font_size: run.style.font_size,
                    style: run.style.clone(),
                });
            }
        }
        result
    }

    fn size_of_string(&self, text: &str, style: &TextStyle) -> StringSize {
        StringSize {
            width: text.chars().count() as f32 * self.char_width,
            height: style.font_size * style.line_height,
            font_size: style.font_size,
            line_height: style.line_height,
            descender: -0.2 * style.font_size,
        }
    }
}

pub fn measure_with(value: Value, styles: &StyleDictionary) -> MeasuredNode {
    init_logging();
    let measurer = StubMeasurer::default();
    DocumentMeasurer::new(styles, &measurer)
        .measure_value(&value)
        .unwrap()
}

pub fn measure(value: Value) -> MeasuredNode {
    measure_with(value, &StyleDictionary::default())
}

/// A 100x100 page with 10pt margins: an 80x80 content area.
pub fn small_context() -> LayoutContext {
    LayoutContext::new(Size::new(100.0, 100.0), Margins::all(10.0))
}

/// Delegates to the default writer but refuses the first `rejections`
/// fit-checked placements.
#[derive(Debug, Default)]
pub struct RejectingWriter {
    pub inner: DefaultElementWriter,
    pub rejections: usize,
    pub line_calls: usize,
    pub fragment_calls: usize,
    pub repeatable_calls: usize,
}

impl RejectingWriter {
    pub fn rejecting(rejections: usize) -> Self {
        Self {
            rejections,
            ..Default::default()
        }
    }

    fn reject(&mut self) -> bool {
        if self.rejections > 0 {
            self.rejections -= 1;
            true
        } else {
            false
        }
    }
}

impl ElementWriter for RejectingWriter {
    fn add_line(&mut self, ctx: &mut LayoutContext, line: &Line, keep_cursor: bool) -> bool {
        self.line_calls += 1;
        !self.reject() && self.inner.add_line(ctx, line, keep_cursor)
    }

    fn add_vector(&mut self, ctx: &mut LayoutContext, vector: &Vector) {
        self.inner.add_vector(ctx, vector);
    }

    fn add_fragment(&mut self, ctx: &mut LayoutContext, fragment: &Fragment, as_repeatable: bool) -> bool {
        if as_repeatable {
            self.repeatable_calls += 1;
            return self.inner.add_fragment(ctx, fragment, true);
        }
        self.fragment_calls += 1;
        !self.reject() && self.inner.add_fragment(ctx, fragment, false)
    }
}

/// A line of `height` made of one run labelled `text`.
pub fn text_line(text: &str, width: f32, height: f32) -> Line {
    Line::from_inlines(vec![InlineRun {
        text: text.to_string(),
        width,
        height,
        font_size: height,
        style: TextStyle::default(),
    }])
}

pub fn line_texts(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| line.inlines.iter().map(|run| run.text.clone()))
        .collect()
}
