// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Trajectory decoder: `ST_TRAJECTORY(...)` text into a [`TrajectoryRecord`].
//!
//! ```text
//! trajectory := "ST_" "TRAJECTORY" "(" timestamp ";" timestamp ";" sequence? ")"
//! sequence   := { "POINT" "(" coord ")" "," timestamp ";" }
//! ```
//!
//! Two passes: the elements are counted by their `;` terminators up to the
//! body's closing `)`, then the sequence encoder fills a buffer sized for that
//! count. Text after the body never contributes to the count, so it is always
//! reported as trailing input.

use tracing::{debug, instrument};

use crate::config::CodecConfig;
use crate::error::DecodeError;
use crate::record::TrajectoryRecord;
use crate::scanner::Cursor;
use crate::sequence::{encode_sequence, EncodedSequence};
use crate::subparse::{parse_timestamp, COLLECTION_DELIM};

/// Type prefix keyword.
pub const ST_KEYWORD: &str = "ST_";
/// Type name keyword.
pub const TRAJECTORY_KEYWORD: &str = "TRAJECTORY";
/// The only supported sequence element keyword.
pub const POINT_KEYWORD: &str = "POINT";

/// Opens the trajectory body.
pub const LDELIM: char = '(';
/// Closes the trajectory body.
pub const RDELIM: char = ')';

/// Decodes `text` with [`CodecConfig::default`].
pub fn decode(text: &str) -> Result<TrajectoryRecord, DecodeError> {
    decode_with(text, &CodecConfig::default())
}

/// Decodes `text` into a record.
///
/// A body with no elements yields a zero-point record. A sequence that starts
/// with any keyword other than `POINT` is rejected with
/// [`DecodeError::UnsupportedGeometry`].
#[instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn decode_with(text: &str, config: &CodecConfig) -> Result<TrajectoryRecord, DecodeError> {
    let mut cursor = Cursor::new(text);

    cursor.skip_ws();
    cursor.expect_keyword(ST_KEYWORD)?;
    cursor.expect_keyword(TRAJECTORY_KEYWORD)?;
    cursor.skip_ws();
    cursor.expect_char(LDELIM)?;

    let start_time = parse_timestamp(&mut cursor)?;
    let end_time = parse_timestamp(&mut cursor)?;
    if start_time > end_time && !config.allow_inverted_interval {
        return Err(DecodeError::InvertedInterval {
            start: start_time,
            end: end_time,
        });
    }
    cursor.skip_ws();

    let keyword_offset = cursor.offset();
    let keyword = cursor.peek_word();
    let EncodedSequence { mut builder, .. } = if keyword.eq_ignore_ascii_case(POINT_KEYWORD) {
        let n_points = cursor.count_before_close(COLLECTION_DELIM, LDELIM, RDELIM);
        debug!(n_points, "counted sequence elements");
        encode_sequence(&mut cursor, n_points, config)?
    } else if keyword.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(DecodeError::UnsupportedGeometry {
            offset: keyword_offset,
            keyword: keyword.to_owned(),
        });
    } else {
        // No sequence; anything but `)` fails below.
        encode_sequence(&mut cursor, 0, config)?
    };

    cursor.skip_ws();
    cursor.expect_char(RDELIM)?;
    cursor.skip_ws();
    if !cursor.at_end() {
        return Err(cursor.syntax_error("unexpected input after `)`"));
    }

    builder.set_flags(0);
    builder.set_interval(start_time, end_time);
    let record = builder.finish()?;
    debug!(
        points = record.num_points(),
        bytes = record.record_length(),
        "decoded trajectory"
    );
    Ok(record)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::record::{HEADER_SIZE, POINT_SIZE};
    use traj_geom::{parse_time, Point};

    #[test]
    fn zero_point_body_is_accepted() {
        let rec = decode("ST_TRAJECTORY(2020-01-01 00:00:00;2020-01-01 01:00:00;)").unwrap();
        assert_eq!(rec.num_points(), 0);
        assert_eq!(rec.record_length() as usize, HEADER_SIZE);
    }

    #[test]
    fn keywords_ignore_case_and_whitespace_is_flexible() {
        let rec = decode(
            "  st_trajectory ( 2020-01-01 00:00:00 ; 2020-01-01 01:00:00 ;\n  point(1 2) , 2020-01-01 00:30:00 ;\n ) \n",
        )
        .unwrap();
        assert_eq!(rec.points().collect::<Vec<_>>(), vec![Point::new(1.0, 2.0)]);
        assert_eq!(rec.record_length() as usize, HEADER_SIZE + POINT_SIZE);
        assert_eq!(rec.end_time(), parse_time("2020-01-01 01:00:00").unwrap());
    }

    #[test]
    fn inverted_interval_is_rejected_unless_allowed() {
        let text = "ST_TRAJECTORY(2020-01-02;2020-01-01;)";
        assert!(matches!(
            decode(text),
            Err(DecodeError::InvertedInterval { .. })
        ));
        let cfg = CodecConfig {
            allow_inverted_interval: true,
            ..CodecConfig::default()
        };
        let rec = decode_with(text, &cfg).unwrap();
        assert!(rec.start_time() > rec.end_time());
    }

    #[test]
    fn missing_type_keywords_are_syntax_errors() {
        assert_eq!(
            decode("TRAJECTORY(2020-01-01;2020-01-01;)"),
            Err(DecodeError::Syntax {
                offset: 0,
                message: "expected `ST_`".into()
            })
        );
        assert_eq!(
            decode("ST_TRAJ(2020-01-01;2020-01-01;)"),
            Err(DecodeError::Syntax {
                offset: 3,
                message: "expected `TRAJECTORY`".into()
            })
        );
    }

    #[test]
    fn trailing_input_is_rejected() {
        assert_eq!(
            decode("ST_TRAJECTORY(2020-01-01;2020-01-01;) extra"),
            Err(DecodeError::Syntax {
                offset: 38,
                message: "unexpected input after `)`".into()
            })
        );
    }

    #[test]
    fn semicolons_after_the_body_are_trailing_input() {
        let trailing = DecodeError::Syntax {
            offset: 69,
            message: "unexpected input after `)`".into(),
        };
        let text = "ST_TRAJECTORY(2020-01-01;2020-01-02;POINT(1 2),2020-01-01 06:00:00;) junk;";
        assert_eq!(decode(text), Err(trailing.clone()));
        assert_eq!(decode(text.trim_end_matches(';')), Err(trailing));
    }
}
