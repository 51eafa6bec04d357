pub mod fixtures;

use quire::{
    DocumentEngine, EngineError, FixedAdvanceMeasurer, InlineRun, LayoutConfig, MeasuredNode,
    StringSize, StyleDictionary, StyledText, TextMeasurement, TextMeasurer, TextStyle,
};
use std::collections::HashMap;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Measures listed words by table and every other character as 5pt.
#[derive(Debug, Default)]
pub struct WordTableMeasurer {
    pub widths: HashMap<&'static str, f32>,
}

impl WordTableMeasurer {
    pub fn with(words: &[(&'static str, f32)]) -> Self {
        Self {
            widths: words.iter().copied().collect(),
        }
    }

    fn width(&self, text: &str) -> f32 {
        self.widths
            .get(text)
            .copied()
            .unwrap_or(text.chars().count() as f32 * 5.0)
    }
}

impl TextMeasurer for WordTableMeasurer {
    fn measure(&self, runs: &[StyledText]) -> TextMeasurement {
        let mut result = TextMeasurement::default();
        for run in runs {
            for word in run.text.split_whitespace() {
                let width = self.width(word);
                result.min_width = result.min_width.max(width);
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
            width: self.width(text),
            height: style.font_size * style.line_height,
            font_size: style.font_size,
            line_height: style.line_height,
            descender: -0.2 * style.font_size,
        }
    }
}

pub fn engine() -> DocumentEngine {
    init_logging();
    DocumentEngine::new(LayoutConfig::default(), FixedAdvanceMeasurer::default())
}

pub fn measure_json(json: &serde_json::Value, styles: &StyleDictionary) -> Result<MeasuredNode, EngineError> {
    engine().measure_json(&json.to_string(), styles)
}
