//! The output of pagination: pages holding positioned lines and vectors, and
//! fragments that can be placed as a single block.

use crate::vector::Vector;
use quire_style::TextAlign;
use quire_traits::InlineRun;

/// A laid-out line of inline content.
///
/// `x` and `y` are zero until the line is placed on a page; placement sets
/// them to the page position of the line's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alignment: TextAlign,
    pub inlines: Vec<InlineRun>,
}

impl Line {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            alignment: TextAlign::Left,
            inlines: Vec::new(),
        }
    }

    /// Builds a line from measured runs: widths add up, the tallest run
    /// sets the height.
    pub fn from_inlines(inlines: Vec<InlineRun>) -> Self {
        let width = inlines.iter().map(|run| run.width).sum();
        let height = inlines.iter().map(|run| run.height).fold(0.0, f32::max);
        Self {
            inlines,
            ..Self::new(width, height)
        }
    }

    pub fn with_alignment(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }

    pub(crate) fn offset(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<Line>,
    pub vectors: Vec<Vector>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.vectors.is_empty()
    }
}

/// A captured block of already-positioned content.
///
/// Coordinates inside a fragment are relative to the fragment's top-left
/// corner. `x_offset` is the horizontal position the block was laid out at,
/// used when the fragment is re-emitted as a repeatable header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub lines: Vec<Line>,
    pub vectors: Vec<Vector>,
    pub height: f32,
    pub x_offset: f32,
}

impl Fragment {
    /// Captures the content of `page` as a fragment of the given height.
    pub fn from_page(page: &Page, height: f32, x_offset: f32) -> Self {
        Self {
            lines: page.lines.clone(),
            vectors: page.vectors.clone(),
            height,
            x_offset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.vectors.is_empty()
    }
}
