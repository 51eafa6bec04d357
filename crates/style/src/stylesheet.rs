//! Defines the style dictionary that holds all named styling information.

use super::dimension::{Margins, PageSize};
use super::text::TextAlign;
use quire_types::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Named styles plus the document-wide default style.
///
/// Deserialises from `{"styles": {...}, "defaultStyle": {...}}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDictionary {
    /// A map of all named element styles.
    #[serde(default)]
    pub styles: HashMap<String, Arc<ElementStyle>>,
    /// Properties that apply when no named style or inline override sets them.
    #[serde(default)]
    pub default_style: ElementStyle,
}

impl StyleDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a named style.
    pub fn with_style(mut self, name: impl Into<String>, style: ElementStyle) -> Self {
        self.styles.insert(name.into(), Arc::new(style));
        self
    }

    pub fn with_default_style(mut self, style: ElementStyle) -> Self {
        self.default_style = style;
        self
    }

    /// Looks up a style by its name.
    pub fn get_style_by_name(&self, name: &str) -> Option<&Arc<ElementStyle>> {
        self.styles.get(name)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<Margins>,
}

/// A set of style properties. Every field is optional: unset fields fall
/// through to the next layer of the style context.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    // Font & Text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Line height as a multiple of the font size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    // Box Model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margins>,

    // Columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_gap: Option<f32>,
}

impl ElementStyle {
    /// True when no property is set.
    pub fn is_empty(&self) -> bool {
        *self == ElementStyle::default()
    }
}
