//! Layout core for paginated documents.
//!
//! A [`DocumentEngine`] turns a declarative JSON document into a measured
//! tree (intrinsic minimum and maximum widths for every node) and hands out
//! [`PageElementWriter`]s that place positioned content onto pages.
//!
//! ```no_run
//! use quire::{DocumentEngine, StyleDictionary};
//!
//! let engine = DocumentEngine::default();
//! let styles = StyleDictionary::default();
//! let measured = engine.measure_json(r#"{"stack": ["hello", "world"]}"#, &styles)?;
//! println!("{} .. {}", measured.min_width, measured.max_width);
//! # Ok::<(), quire::EngineError>(())
//! ```

pub mod error;

pub use error::EngineError;

pub use quire_layout::{
    ColumnWidth, DecimalMarkers, DefaultElementWriter, DepthCycledMarkers, DocumentMeasurer,
    ElementWriter, FixedAdvanceMeasurer, Fragment, LayoutConfig, LayoutContext, LayoutError, Line,
    ListMarker, MarkerContent, MarkerStrategy, MeasuredKind, MeasuredNode, MeasuredTable, Node,
    NodeContent, Page, PageElementWriter, PageTransition, StyleContext, Vector,
};
pub use quire_style::{Dimension, ElementStyle, Margins, PageLayout, PageSize, StyleDictionary, TextAlign};
pub use quire_traits::{InlineRun, StringSize, StyledText, TextMeasurement, TextMeasurer, TextStyle};
pub use quire_types::{Color, Point, Rect, Size};

/// Entry point tying configuration, text measurement and marker numbering
/// together.
#[derive(Debug)]
pub struct DocumentEngine<M: TextMeasurer = FixedAdvanceMeasurer> {
    config: LayoutConfig,
    measurer: M,
    markers: Box<dyn MarkerStrategy>,
}

impl Default for DocumentEngine<FixedAdvanceMeasurer> {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), FixedAdvanceMeasurer::default())
    }
}

impl DocumentEngine<FixedAdvanceMeasurer> {
    /// Parses a style dictionary (`{"styles": {...}, "defaultStyle": {...}}`).
    pub fn styles_from_json(json: &str) -> Result<StyleDictionary, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<M: TextMeasurer> DocumentEngine<M> {
    pub fn new(config: LayoutConfig, measurer: M) -> Self {
        Self {
            config,
            measurer,
            markers: Box::new(DecimalMarkers),
        }
    }

    /// Replaces the numbering used for ordered-list markers.
    pub fn with_marker_strategy(mut self, markers: impl MarkerStrategy + 'static) -> Self {
        self.markers = Box::new(markers);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Measures an already-parsed document tree.
    pub fn measure(&self, node: &Node, styles: &StyleDictionary) -> Result<MeasuredNode, EngineError> {
        let measured = DocumentMeasurer::new(styles, &self.measurer)
            .with_marker_strategy(self.markers.as_ref())
            .measure(node)?;
        log::debug!(
            "measured document: min={:.2} max={:.2}",
            measured.min_width,
            measured.max_width
        );
        Ok(measured)
    }

    /// Parses a JSON document and measures it.
    pub fn measure_json(&self, json: &str, styles: &StyleDictionary) -> Result<MeasuredNode, EngineError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let node = Node::from_value(&value)?;
        self.measure(&node, styles)
    }

    /// A paginator over a fresh, page-less context built from the config.
    pub fn paginator(&self) -> PageElementWriter {
        self.config.create_paginator()
    }
}
