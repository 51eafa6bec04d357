//! Cascading style resolution for the measurement pass.
//!
//! A [`StyleContext`] is a chain of borrowed layers. Each layer holds the
//! style names and inline overrides of one node; looking a property up walks
//! the chain from the innermost layer outwards and finally falls back to the
//! dictionary's default style. Nothing is mutated, so a child context simply
//! goes out of scope when the node that pushed it has been measured.

use crate::node::Node;
use quire_style::{ElementStyle, Margins, StyleDictionary, TextAlign};
use quire_traits::TextStyle;

const DEFAULT_FONT: &str = "Helvetica";
const DEFAULT_FONT_SIZE: f32 = 12.0;
const DEFAULT_LINE_HEIGHT: f32 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    dictionary: &'a StyleDictionary,
    names: &'a [String],
    overrides: Option<&'a ElementStyle>,
    parent: Option<&'a StyleContext<'a>>,
}

impl<'a> StyleContext<'a> {
    /// The root context: only the dictionary's default style applies.
    pub fn new(dictionary: &'a StyleDictionary) -> Self {
        Self {
            dictionary,
            names: &[],
            overrides: None,
            parent: None,
        }
    }

    /// Returns a child context with one more layer on top of `self`.
    pub fn push(&'a self, names: &'a [String], overrides: &'a ElementStyle) -> StyleContext<'a> {
        StyleContext {
            dictionary: self.dictionary,
            names,
            overrides: Some(overrides),
            parent: Some(self),
        }
    }

    /// Pushes the style names and overrides carried by `node`.
    pub fn push_node(&'a self, node: &'a Node) -> StyleContext<'a> {
        self.push(&node.style, &node.overrides)
    }

    pub fn dictionary(&self) -> &'a StyleDictionary {
        self.dictionary
    }

    /// Resolves one property through the chain.
    ///
    /// Within a layer the inline overrides win, then the named styles from
    /// the last name to the first. Unknown style names are skipped.
    pub fn lookup<T>(&self, get: impl Fn(&ElementStyle) -> Option<T>) -> Option<T> {
        let mut layer = Some(self);
        while let Some(ctx) = layer {
            if let Some(value) = ctx.lookup_local(&get) {
                return Some(value);
            }
            layer = ctx.parent;
        }
        get(&self.dictionary.default_style)
    }

    fn lookup_local<T>(&self, get: &impl Fn(&ElementStyle) -> Option<T>) -> Option<T> {
        if let Some(value) = self.overrides.and_then(get) {
            return Some(value);
        }
        self.names
            .iter()
            .rev()
            .filter_map(|name| self.dictionary.get_style_by_name(name))
            .find_map(|style| get(style.as_ref()))
    }

    pub fn font(&self) -> String {
        self.lookup(|s| s.font.clone())
            .unwrap_or_else(|| DEFAULT_FONT.to_string())
    }

    pub fn font_size(&self) -> f32 {
        self.lookup(|s| s.font_size).unwrap_or(DEFAULT_FONT_SIZE)
    }

    pub fn line_height(&self) -> f32 {
        self.lookup(|s| s.line_height).unwrap_or(DEFAULT_LINE_HEIGHT)
    }

    pub fn bold(&self) -> bool {
        self.lookup(|s| s.bold).unwrap_or(false)
    }

    pub fn italics(&self) -> bool {
        self.lookup(|s| s.italics).unwrap_or(false)
    }

    pub fn alignment(&self) -> TextAlign {
        self.lookup(|s| s.alignment).unwrap_or_default()
    }

    pub fn column_gap(&self) -> f32 {
        self.lookup(|s| s.column_gap).unwrap_or(0.0)
    }

    /// The concrete text properties in effect at this point of the tree.
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            font: self.font(),
            font_size: self.font_size(),
            line_height: self.line_height(),
            bold: self.bold(),
            italics: self.italics(),
            alignment: self.alignment(),
        }
    }

    /// Margin of a node. Margins do not inherit: only the node's explicit
    /// margin and its own named styles (last name first) are consulted.
    pub fn resolve_margin(&self, node: &Node) -> Option<Margins> {
        node.overrides.margin.or_else(|| {
            node.style
                .iter()
                .rev()
                .filter_map(|name| self.dictionary.get_style_by_name(name))
                .find_map(|style| style.margin)
        })
    }
}
