use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Unrecognized document structure: {0}")]
    MalformedDocument(String),
    #[error("Node has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Unbreakable block spans {0} pages; only single-page blocks can be committed.")]
    MultiPageTransaction(usize),
    #[error("No unbreakable block is open (called from {0}).")]
    NoActiveTransaction(&'static str),
    #[error("Layout finished with {0} unbreakable block(s) still open.")]
    UnbalancedTransaction(usize),
    #[error("Repeatable stack is empty.")]
    EmptyRepeatables,
}

pub mod algorithms;
pub mod config;
pub mod context;
pub mod measure;
pub mod node;
pub mod node_kind;
pub mod page;
pub mod paginator;
pub mod style;
pub mod text;
pub mod vector;
pub mod writer;

pub use self::config::LayoutConfig;
pub use self::context::{LayoutContext, PageTransition};
pub use self::measure::markers::{DecimalMarkers, DepthCycledMarkers, MarkerStrategy};
pub use self::measure::{
    ColumnWidth, DocumentMeasurer, ListMarker, MarkerContent, MeasuredKind, MeasuredNode,
    MeasuredTable,
};
pub use self::node::{Node, NodeContent, TableSpec, TableWidths, TextSpan};
pub use self::node_kind::NodeKind;
pub use self::page::{Fragment, Line, Page};
pub use self::paginator::PageElementWriter;
pub use self::style::StyleContext;
pub use self::text::FixedAdvanceMeasurer;
pub use self::vector::Vector;
pub use self::writer::{DefaultElementWriter, ElementWriter};

// Re-export geometry types used by the public API to prevent type mismatches
pub use quire_types::geometry::{Point, Rect, Size};

#[cfg(test)]
mod measure_test;
#[cfg(test)]
mod test_utils;
