// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Well-Known Text reader for single points.
//!
//! Grammar accepted by [`parse_point_geometry`]:
//!
//! ```text
//! geometry := TAG [ "Z" | "M" | "ZM" ] ( "EMPTY" | "(" number { WS number } ")" )
//! ```
//!
//! Tags are matched case-insensitively. A `POINT` body is fully parsed; any
//! other known tag is reported as [`Geometry::Other`] without reading its body.

use thiserror::Error;

use crate::types::{kind::GeometryKind, point::Point};

/// Errors produced while reading WKT or while narrowing a geometry to a point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Input was empty or whitespace only.
    #[error("empty geometry text")]
    EmptyInput,
    /// Input did not start with an alphabetic tag.
    #[error("expected a geometry tag, found {0:?}")]
    MissingTag(String),
    /// Tag is not a WKT geometry type.
    #[error("unknown geometry type {0:?}")]
    UnknownType(String),
    /// A required delimiter was absent.
    #[error("expected `{expected}` at byte {offset}")]
    Expected {
        /// Delimiter that was required.
        expected: char,
        /// Byte offset into the geometry text.
        offset: usize,
    },
    /// A word other than a dimension tag or `EMPTY` followed the type tag.
    #[error("unexpected {0:?} after geometry tag")]
    UnexpectedWord(String),
    /// An ordinate token did not parse as a number.
    #[error("invalid ordinate {0:?}")]
    InvalidNumber(String),
    /// An ordinate parsed to NaN or an infinity.
    #[error("ordinate {0:?} is not finite")]
    NonFinite(String),
    /// Ordinate count does not fit the dimension tag.
    #[error("point needs 2 to 4 ordinates matching its dimension tag, found {found}")]
    OrdinateCount {
        /// Number of ordinates read.
        found: usize,
    },
    /// Characters remained after the geometry.
    #[error("trailing input {0:?}")]
    TrailingInput(String),
    /// Geometry parsed but is not a point.
    #[error("geometry is not a point: {0}")]
    NotAPoint(GeometryKind),
    /// Geometry is `POINT EMPTY`.
    #[error("point is empty")]
    EmptyPoint,
}

/// Result of reading one WKT geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geometry {
    /// A point; `None` for `POINT EMPTY`.
    Point(Option<Point>),
    /// Any other recognised geometry tag.
    Other(GeometryKind),
}

impl Geometry {
    /// Geometry tag of the parsed value.
    #[must_use]
    pub const fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::Other(kind) => *kind,
        }
    }

    /// Narrows to a non-empty point.
    pub fn into_point(self) -> Result<Point, GeometryError> {
        match self {
            Self::Point(Some(point)) => Ok(point),
            Self::Point(None) => Err(GeometryError::EmptyPoint),
            Self::Other(kind) => Err(GeometryError::NotAPoint(kind)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Dims {
    Z,
    M,
    Zm,
}

struct Lexer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn word(&mut self) -> &'a str {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_ws();
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn number(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .find(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | ','))
            .unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }
}

/// Parses `text` as a single WKT geometry.
///
/// Points are returned with their ordinates; other tags come back as
/// [`Geometry::Other`] so callers can name what they rejected.
pub fn parse_point_geometry(text: &str) -> Result<Geometry, GeometryError> {
    let mut lex = Lexer::new(text);
    lex.skip_ws();
    if lex.rest().is_empty() {
        return Err(GeometryError::EmptyInput);
    }

    let tag = lex.word();
    if tag.is_empty() {
        return Err(GeometryError::MissingTag(lex.rest().to_owned()));
    }
    let kind =
        GeometryKind::from_tag(tag).ok_or_else(|| GeometryError::UnknownType(tag.to_owned()))?;
    if kind != GeometryKind::Point {
        return Ok(Geometry::Other(kind));
    }

    let mut word = lex.word();
    let dims = match word.to_ascii_uppercase().as_str() {
        "Z" => Some(Dims::Z),
        "M" => Some(Dims::M),
        "ZM" => Some(Dims::Zm),
        _ => None,
    };
    if dims.is_some() {
        word = lex.word();
    }

    let point = if word.eq_ignore_ascii_case("EMPTY") {
        None
    } else if word.is_empty() {
        Some(read_body(&mut lex, dims)?)
    } else {
        return Err(GeometryError::UnexpectedWord(word.to_owned()));
    };

    lex.skip_ws();
    if !lex.rest().is_empty() {
        return Err(GeometryError::TrailingInput(lex.rest().to_owned()));
    }
    Ok(Geometry::Point(point))
}

fn read_body(lex: &mut Lexer<'_>, dims: Option<Dims>) -> Result<Point, GeometryError> {
    if !lex.eat('(') {
        return Err(GeometryError::Expected {
            expected: '(',
            offset: lex.pos,
        });
    }
    let mut ords: Vec<f64> = Vec::with_capacity(4);
    while let Some(token) = lex.number() {
        let value: f64 = token
            .parse()
            .map_err(|_| GeometryError::InvalidNumber(token.to_owned()))?;
        if !value.is_finite() {
            return Err(GeometryError::NonFinite(token.to_owned()));
        }
        ords.push(value);
    }
    if !lex.eat(')') {
        return Err(GeometryError::Expected {
            expected: ')',
            offset: lex.pos,
        });
    }

    match (dims, ords.as_slice()) {
        (None, &[x, y]) => Ok(Point::new(x, y)),
        (None | Some(Dims::Z), &[x, y, z]) => Ok(Point::new(x, y).with_z(z)),
        (Some(Dims::M), &[x, y, m]) => Ok(Point::new(x, y).with_m(m)),
        (None | Some(Dims::Zm), &[x, y, z, m]) => Ok(Point::new(x, y).with_z(z).with_m(m)),
        _ => Err(GeometryError::OrdinateCount { found: ords.len() }),
    }
}
