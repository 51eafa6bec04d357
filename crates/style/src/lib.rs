pub mod dimension;
pub mod list;
pub mod parsers;
pub mod stylesheet;
pub mod text;

pub use dimension::{Dimension, Margins, PageSize};
pub use list::ListStyleType;
pub use parsers::StyleParseError;
pub use stylesheet::{ElementStyle, PageLayout, StyleDictionary};
pub use text::TextAlign;
