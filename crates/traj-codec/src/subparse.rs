// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Timestamp and point sub-parsers.
//!
//! Each sub-parser cuts a bounded substring at its delimiter, hands it to a
//! collaborator from `traj-geom`, and leaves the cursor immediately after the
//! delimiter it owns:
//!
//! | sub-parser          | consumes through |
//! |---------------------|------------------|
//! | [`parse_timestamp`] | `;`              |
//! | [`parse_point`]     | `,`              |

use traj_geom::{parse_point_geometry, parse_time, Point, Timestamp};

use crate::error::DecodeError;
use crate::scanner::Cursor;

/// Terminates timestamps and sequence elements.
pub const COLLECTION_DELIM: char = ';';
/// Separates a point from its timestamp.
pub const POSITION_DELIM: char = ',';

/// Parses the text up to the next `;` as a timestamp and consumes the `;`.
pub fn parse_timestamp(cursor: &mut Cursor<'_>) -> Result<Timestamp, DecodeError> {
    cursor.skip_ws();
    let offset = cursor.offset();
    let text = cursor
        .take_until(COLLECTION_DELIM)
        .ok_or_else(|| cursor.syntax_error("expected `;` after timestamp"))?;
    parse_time(text).map_err(|source| DecodeError::InvalidTimestamp { offset, source })
}

/// Parses the text up to the next `,` as a non-empty point and consumes the `,`.
///
/// The point text may not span a `;`; that is a syntax error rather than a
/// geometry error.
pub fn parse_point(cursor: &mut Cursor<'_>) -> Result<Point, DecodeError> {
    cursor.skip_ws();
    let offset = cursor.offset();
    let text = cursor
        .take_until_before(POSITION_DELIM, COLLECTION_DELIM)
        .ok_or_else(|| cursor.syntax_error("expected `,` after point"))?;
    parse_point_geometry(text)
        .and_then(traj_geom::Geometry::into_point)
        .map_err(|source| DecodeError::Geometry { offset, source })
}
