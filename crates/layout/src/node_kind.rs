use crate::node::NodeContent;
use serde_json::{Map, Value};

/// Represents the specific type of a document node.
///
/// The declaration order is the detection precedence: an object carrying
/// several shape keys is classified by the first one found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Columns,
    Stack,
    UnorderedList,
    OrderedList,
    Table,
    Text,
    Canvas,
}

impl NodeKind {
    const PRECEDENCE: [NodeKind; 7] = [
        NodeKind::Columns,
        NodeKind::Stack,
        NodeKind::UnorderedList,
        NodeKind::OrderedList,
        NodeKind::Table,
        NodeKind::Text,
        NodeKind::Canvas,
    ];

    /// The object key that marks this shape in a document.
    pub fn key(&self) -> &'static str {
        match self {
            NodeKind::Columns => "columns",
            NodeKind::Stack => "stack",
            NodeKind::UnorderedList => "ul",
            NodeKind::OrderedList => "ol",
            NodeKind::Table => "table",
            NodeKind::Text => "text",
            NodeKind::Canvas => "canvas",
        }
    }

    /// Classifies a node object, or `None` when it carries no known shape key.
    pub fn detect(object: &Map<String, Value>) -> Option<Self> {
        Self::PRECEDENCE
            .into_iter()
            .find(|kind| object.contains_key(kind.key()))
    }

    /// Determines the `NodeKind` of already-parsed content.
    pub fn of(content: &NodeContent) -> Self {
        match content {
            NodeContent::Columns(_) => NodeKind::Columns,
            NodeContent::Stack(_) => NodeKind::Stack,
            NodeContent::List { ordered: false, .. } => NodeKind::UnorderedList,
            NodeContent::List { ordered: true, .. } => NodeKind::OrderedList,
            NodeContent::Table(_) => NodeKind::Table,
            NodeContent::Text(_) => NodeKind::Text,
            NodeContent::Canvas(_) => NodeKind::Canvas,
        }
    }

    /// Returns a string representation, primarily for debugging or error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Columns => "Columns",
            NodeKind::Stack => "Stack",
            NodeKind::UnorderedList => "UnorderedList",
            NodeKind::OrderedList => "OrderedList",
            NodeKind::Table => "Table",
            NodeKind::Text => "Text",
            NodeKind::Canvas => "Canvas",
        }
    }
}
