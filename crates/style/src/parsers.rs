//! Low-level nom parser functions for style values.
//!
//! This module provides composable parser functions for parsing lengths,
//! width tokens and margin shorthands written as strings.

use crate::dimension::{Dimension, Margins};
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{char, digit1, space1};
use nom::combinator::{map, map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::sequence::{pair, terminated};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Unit & Dimension Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")), // Treat px as pt
        value(72.0, tag_no_case("in")),
        value(28.35, tag_no_case("cm")),
        value(2.835, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, amount) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, amount * unit_multiplier.unwrap_or(1.0)))
}

/// Parses a width token: `auto`, `*`, a percentage, or a length.
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        value(Dimension::Auto, tag_no_case("auto")),
        value(Dimension::Star, tag("*")),
        map(terminated(parse_f32, char('%')), Dimension::Percent),
        map(parse_length, Dimension::Pt),
    ))
    .parse(input)
}

/// Parses a margin written as a string: one, two, or four lengths separated
/// by whitespace, in the same order as the array form
/// (`left top right bottom`).
pub fn parse_shorthand_margins(input: &str) -> Result<Margins, StyleParseError> {
    let parts = run_parser(
        separated_list1(space1, parse_length),
        input,
    )?;
    Margins::from_values(&parts).map_err(|msg| StyleParseError::InvalidValue {
        property: "margin".to_string(),
        value: msg,
    })
}

/// Helper to run a nom parser to completion and convert its result to a
/// `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, P>(mut parser: P, input: &'a str) -> Result<T, StyleParseError>
where
    P: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", parsed)) => Ok(parsed),
        Ok((rest, _)) => Err(StyleParseError::Parse(format!(
            "Unexpected trailing input '{}' in '{}'",
            rest, input
        ))),
        Err(e) => Err(StyleParseError::Parse(format!(
            "Failed to parse '{}': {}",
            input, e
        ))),
    }
}
