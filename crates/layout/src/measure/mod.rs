//! Intrinsic sizing of a document tree.
//!
//! [`DocumentMeasurer`] walks a [`Node`] tree bottom-up and returns a new
//! [`MeasuredNode`] tree carrying the minimum (tightest wrap) and maximum
//! (no wrap) width of every node. The input tree is never modified, so
//! measuring the same tree twice yields identical results.

mod canvas;
mod list;
pub mod markers;
mod table;

use crate::LayoutError;
use crate::node::{Node, NodeContent, TextSpan};
use crate::style::StyleContext;
use crate::vector::Vector;
use markers::{DecimalMarkers, MarkerStrategy};
use quire_style::{Dimension, ElementStyle, Margins, StyleDictionary};
use quire_traits::{InlineRun, StringSize, StyledText, TextMeasurer};
use serde_json::Value;

/// A node together with its intrinsic bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredNode {
    pub kind: MeasuredKind,
    /// Resolved margin, already included in `min_width`/`max_width`.
    pub margin: Option<Margins>,
    pub min_width: f32,
    pub max_width: f32,
    /// Set on the items of a list.
    pub list_marker: Option<ListMarker>,
    pub style: Vec<String>,
    pub overrides: ElementStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MeasuredKind {
    Text {
        items: Vec<InlineRun>,
    },
    Stack(Vec<MeasuredNode>),
    Columns {
        children: Vec<MeasuredNode>,
        /// Resolved gap between columns. Not part of the width.
        gap: f32,
    },
    List {
        ordered: bool,
        items: Vec<MeasuredNode>,
        /// Footprint of the marker column.
        gap: StringSize,
    },
    Table(MeasuredTable),
    Canvas {
        vectors: Vec<Vector>,
        min_height: f32,
        max_height: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredTable {
    /// One entry per column.
    pub widths: Vec<ColumnWidth>,
    pub body: Vec<Vec<MeasuredNode>>,
    pub header_rows: usize,
}

/// A normalized column width plus the bounds of the column's cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnWidth {
    pub width: Dimension,
    pub min_width: f32,
    pub max_width: f32,
}

/// A synthesized list-item marker pinned to the list's gap size.
#[derive(Debug, Clone, PartialEq)]
pub struct ListMarker {
    pub content: MarkerContent,
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkerContent {
    Text(Vec<InlineRun>),
    Bullet(Vector),
}

impl MeasuredNode {
    fn new(kind: MeasuredKind, min_width: f32, max_width: f32) -> Self {
        Self {
            kind,
            margin: None,
            min_width,
            max_width,
            list_marker: None,
            style: Vec::new(),
            overrides: ElementStyle::default(),
        }
    }

    /// Height bounds; only canvases have them.
    pub fn height_bounds(&self) -> Option<(f32, f32)> {
        match self.kind {
            MeasuredKind::Canvas {
                min_height,
                max_height,
                ..
            } => Some((min_height, max_height)),
            _ => None,
        }
    }

    pub fn children(&self) -> Vec<&MeasuredNode> {
        match &self.kind {
            MeasuredKind::Stack(children)
            | MeasuredKind::Columns { children, .. }
            | MeasuredKind::List {
                items: children, ..
            } => children.iter().collect(),
            MeasuredKind::Table(table) => table.body.iter().flatten().collect(),
            MeasuredKind::Text { .. } | MeasuredKind::Canvas { .. } => Vec::new(),
        }
    }

    /// Calls `f` on this node and every descendant, depth first.
    pub fn visit<'s>(&'s self, f: &mut impl FnMut(&'s MeasuredNode)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }
}

/// Computes intrinsic widths for document trees.
#[derive(Debug, Clone, Copy)]
pub struct DocumentMeasurer<'a> {
    styles: &'a StyleDictionary,
    text: &'a dyn TextMeasurer,
    markers: &'a dyn MarkerStrategy,
}

impl<'a> DocumentMeasurer<'a> {
    pub fn new(styles: &'a StyleDictionary, text: &'a dyn TextMeasurer) -> Self {
        Self {
            styles,
            text,
            markers: &DecimalMarkers,
        }
    }

    pub fn with_marker_strategy(mut self, markers: &'a dyn MarkerStrategy) -> Self {
        self.markers = markers;
        self
    }

    pub fn measure(&self, node: &Node) -> Result<MeasuredNode, LayoutError> {
        let root = StyleContext::new(self.styles);
        self.measure_node(node, &root, 0)
    }

    /// Parses a JSON document and measures it.
    pub fn measure_value(&self, value: &Value) -> Result<MeasuredNode, LayoutError> {
        let node = Node::from_value(value)?;
        self.measure(&node)
    }

    /// Measures `node` under `parent`, the style context of its parent.
    /// `depth` counts the lists enclosing the node.
    pub fn measure_node(
        &self,
        node: &Node,
        parent: &StyleContext<'_>,
        depth: usize,
    ) -> Result<MeasuredNode, LayoutError> {
        let ctx = parent.push_node(node);

        let mut measured = match &node.content {
            NodeContent::Columns(children) => self.measure_columns(children, &ctx, depth)?,
            NodeContent::Stack(children) => self.measure_stack(children, &ctx, depth)?,
            NodeContent::List { ordered, items } => self.measure_list(*ordered, items, &ctx, depth)?,
            NodeContent::Table(source) => self.measure_table(source, &ctx, depth)?,
            NodeContent::Text(spans) => self.measure_text(spans, &ctx),
            NodeContent::Canvas(vectors) => self.measure_canvas(vectors),
        };

        measured.margin = ctx.resolve_margin(node);
        if let Some(margin) = measured.margin {
            measured.min_width += margin.horizontal();
            measured.max_width += margin.horizontal();
        }
        measured.style = node.style.clone();
        measured.overrides = node.overrides.clone();

        log::trace!(
            "measured {} node: min={:.2} max={:.2}",
            node.kind().as_str(),
            measured.min_width,
            measured.max_width
        );
        Ok(measured)
    }

    fn measure_text(&self, spans: &[TextSpan], ctx: &StyleContext<'_>) -> MeasuredNode {
        let runs: Vec<StyledText> = spans
            .iter()
            .map(|span| {
                let span_ctx = ctx.push(&span.style, &span.overrides);
                StyledText::new(span.text.clone(), span_ctx.text_style())
            })
            .collect();
        let measurement = self.text.measure(&runs);
        MeasuredNode::new(
            MeasuredKind::Text {
                items: measurement.items,
            },
            measurement.min_width,
            measurement.max_width,
        )
    }

    fn measure_stack(
        &self,
        children: &[Node],
        ctx: &StyleContext<'_>,
        depth: usize,
    ) -> Result<MeasuredNode, LayoutError> {
        let children = self.measure_children(children, ctx, depth)?;
        let (min_width, max_width) = children.iter().fold((0.0f32, 0.0f32), |(min, max), c| {
            (min.max(c.min_width), max.max(c.max_width))
        });
        Ok(MeasuredNode::new(
            MeasuredKind::Stack(children),
            min_width,
            max_width,
        ))
    }

    fn measure_columns(
        &self,
        children: &[Node],
        ctx: &StyleContext<'_>,
        depth: usize,
    ) -> Result<MeasuredNode, LayoutError> {
        let children = self.measure_children(children, ctx, depth)?;
        let min_width = children.iter().map(|c| c.min_width).sum();
        let max_width = children.iter().map(|c| c.max_width).sum();
        Ok(MeasuredNode::new(
            MeasuredKind::Columns {
                children,
                gap: ctx.column_gap(),
            },
            min_width,
            max_width,
        ))
    }

    fn measure_children(
        &self,
        children: &[Node],
        ctx: &StyleContext<'_>,
        depth: usize,
    ) -> Result<Vec<MeasuredNode>, LayoutError> {
        children
            .iter()
            .map(|child| self.measure_node(child, ctx, depth))
            .collect()
    }
}
