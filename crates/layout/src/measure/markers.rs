//! Marker text for ordered-list items.

use quire_style::ListStyleType;
use std::fmt::Debug;

/// Chooses the marker text of an ordered-list item.
///
/// `position` is the 1-based index of the item within its list and `depth`
/// the nesting depth of the list (0 for a list that is not inside another
/// list). The returned text includes its trailing separator.
pub trait MarkerStrategy: Debug + Send + Sync {
    fn ordered_marker(&self, position: usize, depth: usize) -> String;
}

/// `1. `, `2. `, ... at every depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalMarkers;

impl MarkerStrategy for DecimalMarkers {
    fn ordered_marker(&self, position: usize, _depth: usize) -> String {
        format_marker(ListStyleType::Decimal, position)
    }
}

/// Numbers nested lists differently from their parents.
///
/// With a decimal base the style cycles decimal, lower-alpha, lower-roman as
/// the depth grows. Any other base style is used at every depth.
#[derive(Debug, Clone, Copy)]
pub struct DepthCycledMarkers {
    pub base: ListStyleType,
}

impl Default for DepthCycledMarkers {
    fn default() -> Self {
        Self {
            base: ListStyleType::Decimal,
        }
    }
}

impl MarkerStrategy for DepthCycledMarkers {
    fn ordered_marker(&self, position: usize, depth: usize) -> String {
        let style = if self.base == ListStyleType::Decimal {
            match depth % 3 {
                1 => ListStyleType::LowerAlpha,
                2 => ListStyleType::LowerRoman,
                _ => ListStyleType::Decimal,
            }
        } else {
            self.base
        };
        format_marker(style, position)
    }
}

pub fn format_marker(style: ListStyleType, position: usize) -> String {
    let label = match style {
        ListStyleType::Decimal => position.to_string(),
        ListStyleType::LowerAlpha => int_to_lower_alpha(position),
        ListStyleType::UpperAlpha => int_to_lower_alpha(position).to_uppercase(),
        ListStyleType::LowerRoman => int_to_lower_roman(position),
        ListStyleType::UpperRoman => int_to_lower_roman(position).to_uppercase(),
    };
    format!("{}. ", label)
}

/// 1 -> a, 26 -> z, 27 -> aa.
pub fn int_to_lower_alpha(n: usize) -> String {
    if n == 0 {
        return "a".to_string();
    }
    let mut s = String::new();
    let mut num = n - 1;
    loop {
        s.insert(0, (b'a' + (num % 26) as u8) as char);
        num /= 26;
        if num == 0 {
            break;
        }
        num -= 1;
    }
    s
}

pub fn int_to_lower_roman(n: usize) -> String {
    const VALUES: [(usize, &str); 13] = [
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut num = n;
    let mut result = String::new();
    for &(val, sym) in &VALUES {
        while num >= val {
            result.push_str(sym);
            num -= val;
        }
    }
    result
}
