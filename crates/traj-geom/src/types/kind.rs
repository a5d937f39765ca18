// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

/// Geometry tags of the ISO/OGC Well-Known Text grammar.
///
/// The reader matches tags case-insensitively; `Display` yields the canonical
/// upper-case spelling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// `POINT`
    Point,
    /// `LINESTRING`
    LineString,
    /// `POLYGON`
    Polygon,
    /// `MULTIPOINT`
    MultiPoint,
    /// `MULTILINESTRING`
    MultiLineString,
    /// `MULTIPOLYGON`
    MultiPolygon,
    /// `GEOMETRYCOLLECTION`
    GeometryCollection,
    /// `CIRCULARSTRING`
    CircularString,
    /// `COMPOUNDCURVE`
    CompoundCurve,
    /// `CURVEPOLYGON`
    CurvePolygon,
    /// `MULTICURVE`
    MultiCurve,
    /// `MULTISURFACE`
    MultiSurface,
    /// `POLYHEDRALSURFACE`
    PolyhedralSurface,
    /// `TIN`
    Tin,
    /// `TRIANGLE`
    Triangle,
}

impl GeometryKind {
    /// Every tag, in the order the reader tries them.
    pub const ALL: [Self; 15] = [
        Self::Point,
        Self::LineString,
        Self::Polygon,
        Self::MultiPoint,
        Self::MultiLineString,
        Self::MultiPolygon,
        Self::GeometryCollection,
        Self::CircularString,
        Self::CompoundCurve,
        Self::CurvePolygon,
        Self::MultiCurve,
        Self::MultiSurface,
        Self::PolyhedralSurface,
        Self::Tin,
        Self::Triangle,
    ];

    /// Canonical upper-case WKT tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
            Self::CircularString => "CIRCULARSTRING",
            Self::CompoundCurve => "COMPOUNDCURVE",
            Self::CurvePolygon => "CURVEPOLYGON",
            Self::MultiCurve => "MULTICURVE",
            Self::MultiSurface => "MULTISURFACE",
            Self::PolyhedralSurface => "POLYHEDRALSURFACE",
            Self::Tin => "TIN",
            Self::Triangle => "TRIANGLE",
        }
    }

    /// Looks up a tag ignoring ASCII case. Returns `None` for unknown words.
    #[must_use]
    pub fn from_tag(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
