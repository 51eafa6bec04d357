pub mod text;

pub use text::{InlineRun, StringSize, StyledText, TextMeasurement, TextMeasurer, TextStyle};
