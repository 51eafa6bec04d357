//! The declarative document tree accepted by the measurement pass.
//!
//! Documents arrive as JSON. A bare string is a text leaf, a bare array is a
//! stack, and an object is classified by its shape key (see [`NodeKind`]).

use crate::LayoutError;
use crate::node_kind::NodeKind;
use crate::vector::Vector;
use quire_style::{Dimension, ElementStyle};
use serde::{Deserialize, Deserializer, de};
use serde_json::{Map, Value};

/// Object keys that are read as inline style overrides.
const STYLE_KEYS: [&str; 9] = [
    "font",
    "fontSize",
    "lineHeight",
    "bold",
    "italics",
    "alignment",
    "color",
    "margin",
    "columnGap",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub content: NodeContent,
    /// Named styles, least specific first.
    pub style: Vec<String>,
    /// Properties set directly on the node. `overrides.margin` is the
    /// node's explicit margin.
    pub overrides: ElementStyle,
    /// Explicit marker value for an ordered-list item.
    pub counter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    Columns(Vec<Node>),
    Stack(Vec<Node>),
    List { ordered: bool, items: Vec<Node> },
    Table(TableSpec),
    Text(Vec<TextSpan>),
    Canvas(Vec<Vector>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub widths: Option<TableWidths>,
    pub body: Vec<Vec<Node>>,
    pub header_rows: usize,
}

/// Column widths as written: one value for every column, or a list.
#[derive(Debug, Clone, PartialEq)]
pub enum TableWidths {
    Single(Dimension),
    PerColumn(Vec<Dimension>),
}

/// A piece of a text leaf with its own optional styling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextSpan {
    pub text: String,
    pub style: Vec<String>,
    pub overrides: ElementStyle,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

impl Node {
    pub fn new(content: NodeContent) -> Self {
        Self {
            content,
            style: Vec::new(),
            overrides: ElementStyle::default(),
            counter: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeContent::Text(vec![TextSpan::plain(text)]))
    }

    pub fn stack(children: Vec<Node>) -> Self {
        Self::new(NodeContent::Stack(children))
    }

    pub fn with_style(mut self, name: impl Into<String>) -> Self {
        self.style.push(name.into());
        self
    }

    pub fn with_overrides(mut self, overrides: ElementStyle) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::of(&self.content)
    }

    /// True for ordered and unordered lists.
    pub fn is_list(&self) -> bool {
        matches!(self.content, NodeContent::List { .. })
    }

    /// Parses a JSON document node, applying the shorthand rules.
    pub fn from_value(value: &Value) -> Result<Self, LayoutError> {
        match value {
            Value::String(s) => Ok(Node::text(s.clone())),
            Value::Array(items) => Ok(Node::stack(parse_children(items)?)),
            Value::Object(object) => parse_object(object, value),
            other => Err(malformed(other)),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Node::from_value(&value).map_err(de::Error::custom)
    }
}

fn malformed(value: &Value) -> LayoutError {
    LayoutError::MalformedDocument(value.to_string())
}

fn parse_children(items: &[Value]) -> Result<Vec<Node>, LayoutError> {
    items.iter().map(Node::from_value).collect()
}

fn parse_object(object: &Map<String, Value>, whole: &Value) -> Result<Node, LayoutError> {
    let kind = NodeKind::detect(object).ok_or_else(|| malformed(whole))?;
    let body = &object[kind.key()];

    let content = match kind {
        NodeKind::Columns => NodeContent::Columns(parse_node_list(body, whole)?),
        NodeKind::Stack => NodeContent::Stack(parse_node_list(body, whole)?),
        NodeKind::UnorderedList => NodeContent::List {
            ordered: false,
            items: parse_node_list(body, whole)?,
        },
        NodeKind::OrderedList => NodeContent::List {
            ordered: true,
            items: parse_node_list(body, whole)?,
        },
        NodeKind::Table => NodeContent::Table(parse_table(body, whole)?),
        NodeKind::Text => NodeContent::Text(parse_spans(body, whole)?),
        NodeKind::Canvas => NodeContent::Canvas(
            serde_json::from_value(body.clone())
                .map_err(|e| LayoutError::MalformedDocument(format!("invalid canvas: {}", e)))?,
        ),
    };

    Ok(Node {
        content,
        style: parse_style_names(object.get("style"))?,
        overrides: parse_overrides(object)?,
        counter: object.get("counter").and_then(scalar_to_string),
    })
}

fn parse_node_list(body: &Value, whole: &Value) -> Result<Vec<Node>, LayoutError> {
    match body {
        Value::Array(items) => parse_children(items),
        _ => Err(malformed(whole)),
    }
}

fn parse_style_names(style: Option<&Value>) -> Result<Vec<String>, LayoutError> {
    match style {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(name)) => Ok(vec![name.clone()]),
        Some(Value::Array(names)) => names
            .iter()
            .map(|n| {
                n.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        LayoutError::MalformedDocument(format!("style name must be a string, got {}", n))
                    })
            })
            .collect(),
        Some(other) => Err(LayoutError::MalformedDocument(format!(
            "style must be a name or a list of names, got {}",
            other
        ))),
    }
}

fn parse_overrides(object: &Map<String, Value>) -> Result<ElementStyle, LayoutError> {
    let subset: Map<String, Value> = STYLE_KEYS
        .iter()
        .filter_map(|key| object.get(*key).map(|v| (key.to_string(), v.clone())))
        .collect();
    if subset.is_empty() {
        return Ok(ElementStyle::default());
    }
    serde_json::from_value(Value::Object(subset))
        .map_err(|e| LayoutError::MalformedDocument(format!("invalid style property: {}", e)))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_spans(body: &Value, whole: &Value) -> Result<Vec<TextSpan>, LayoutError> {
    match body {
        Value::String(_) | Value::Number(_) => {
            Ok(vec![TextSpan::plain(scalar_to_string(body).unwrap_or_default())])
        }
        Value::Array(parts) => parts.iter().map(|part| parse_span(part, whole)).collect(),
        _ => Err(malformed(whole)),
    }
}

fn parse_span(part: &Value, whole: &Value) -> Result<TextSpan, LayoutError> {
    match part {
        Value::String(_) | Value::Number(_) => {
            Ok(TextSpan::plain(scalar_to_string(part).unwrap_or_default()))
        }
        Value::Object(object) => {
            let text = object
                .get("text")
                .and_then(scalar_to_string)
                .ok_or_else(|| malformed(whole))?;
            Ok(TextSpan {
                text,
                style: parse_style_names(object.get("style"))?,
                overrides: parse_overrides(object)?,
            })
        }
        _ => Err(malformed(whole)),
    }
}

fn parse_table(body: &Value, whole: &Value) -> Result<TableSpec, LayoutError> {
    let table = body.as_object().ok_or_else(|| malformed(whole))?;

    let rows = match table.get("body") {
        Some(Value::Array(rows)) => rows,
        _ => return Err(malformed(whole)),
    };
    let body = rows
        .iter()
        .map(|row| match row {
            Value::Array(cells) => parse_children(cells),
            _ => Err(malformed(whole)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let widths = match table.get("widths") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(TableWidths::PerColumn(
            items.iter().map(parse_width).collect::<Result<_, _>>()?,
        )),
        Some(single) => Some(TableWidths::Single(parse_width(single)?)),
    };

    let header_rows = table
        .get("headerRows")
        .and_then(Value::as_u64)
        .unwrap_or(0) as usize;

    Ok(TableSpec {
        widths,
        body,
        header_rows,
    })
}

/// Accepts a bare number, a width token, or a `{ "width": ... }` descriptor.
fn parse_width(value: &Value) -> Result<Dimension, LayoutError> {
    let raw = match value {
        Value::Object(descriptor) => descriptor.get("width").cloned().unwrap_or(Value::Null),
        other => other.clone(),
    };
    serde_json::from_value::<Dimension>(raw)
        .map_err(|e| LayoutError::MalformedDocument(format!("invalid column width {}: {}", value, e)))
}
