// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! End-to-end decode/render scenarios for `ST_TRAJECTORY` text.

use traj_codec::{
    decode, decode_with, render, to_wkt, CodecConfig, DecodeError, SizeMismatchPolicy,
    TrajectoryRecord, HEADER_SIZE, POINT_SIZE,
};
use traj_geom::{parse_time, GeometryError, GeometryKind, Point};

const TWO_POINTS: &str = "ST_TRAJECTORY(2020-01-01 00:00:00;2020-01-01 01:00:00;\
POINT(1 2),2020-01-01 00:10:00;POINT(3 4),2020-01-01 00:20:00;)";

#[test]
fn two_point_trajectory_decodes_to_expected_record() {
    let rec = decode(TWO_POINTS).unwrap();
    assert_eq!(rec.start_time(), parse_time("2020-01-01T00:00:00").unwrap());
    assert_eq!(rec.end_time(), parse_time("2020-01-01T01:00:00").unwrap());
    assert_eq!(
        rec.points().collect::<Vec<_>>(),
        vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
    );
    assert_eq!(rec.record_length() as usize, HEADER_SIZE + 2 * POINT_SIZE);
    assert_eq!(rec.as_bytes().len(), rec.record_length() as usize);
    assert_eq!(rec.flags(), 0);
    assert_eq!(rec.duration().unwrap().num_minutes(), 60);
}

#[test]
fn record_survives_hex_transport() {
    let rec = decode(TWO_POINTS).unwrap();
    let back = TrajectoryRecord::from_hex(&rec.to_hex()).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn render_reproduces_bounds_and_all_points() {
    let rec = decode(TWO_POINTS).unwrap();
    assert_eq!(
        render(&rec).unwrap(),
        "2020-01-01 00:00:00,2020-01-01 01:00:00,POINT(1 2)-POINT(3 4)"
    );
}

#[test]
fn canonical_text_decodes_to_identical_record() {
    let rec = decode(TWO_POINTS).unwrap();
    let again = decode(&to_wkt(&rec).unwrap()).unwrap();
    assert_eq!(again.as_bytes(), rec.as_bytes());
}

#[test]
fn missing_open_paren_is_a_syntax_error() {
    let err = decode("ST_TRAJECTORY 2020-01-01 00:00:00;2020-01-01 01:00:00;)").unwrap_err();
    assert_eq!(
        err,
        DecodeError::Syntax {
            offset: 14,
            message: "expected `(`".into()
        }
    );
}

#[test]
fn missing_close_paren_is_a_syntax_error() {
    let text = TWO_POINTS.trim_end_matches(')');
    assert!(matches!(
        decode(text),
        Err(DecodeError::Syntax { message, .. }) if message == "expected `)`"
    ));
}

#[test]
fn linestring_sequence_is_rejected_by_name() {
    let text = TWO_POINTS.replace("POINT", "LINESTRING");
    assert_eq!(
        decode(&text).unwrap_err(),
        DecodeError::UnsupportedGeometry {
            offset: 54,
            keyword: "LINESTRING".into()
        }
    );
}

#[test]
fn non_point_element_is_a_geometry_error() {
    let text = "ST_TRAJECTORY(2020-01-01;2020-01-02;POINT(1 2),2020-01-01 06:00:00;\
LINESTRING(1 2,3 4),2020-01-01 12:00:00;)";
    assert!(matches!(
        decode(text),
        Err(DecodeError::Geometry {
            source: GeometryError::NotAPoint(GeometryKind::LineString),
            ..
        })
    ));
}

#[test]
fn empty_point_is_a_geometry_error() {
    let text = "ST_TRAJECTORY(2020-01-01;2020-01-02;POINT EMPTY,2020-01-01 06:00:00;)";
    assert_eq!(
        decode(text).unwrap_err(),
        DecodeError::Geometry {
            offset: 36,
            source: GeometryError::EmptyPoint
        }
    );
}

#[test]
fn invalid_inner_timestamp_aborts() {
    let text = "ST_TRAJECTORY(2020-01-01;2020-01-02;POINT(1 2),noon;)";
    assert!(matches!(
        decode(text),
        Err(DecodeError::InvalidTimestamp { offset: 47, .. })
    ));
}

#[test]
fn text_after_the_body_is_trailing_input_under_either_policy() {
    let text = format!("{TWO_POINTS} junk;");
    let warn = CodecConfig {
        size_mismatch: SizeMismatchPolicy::Warn,
        ..CodecConfig::default()
    };
    for config in [CodecConfig::default(), warn] {
        assert!(matches!(
            decode_with(&text, &config),
            Err(DecodeError::Syntax { offset: 118, message }) if message == "unexpected input after `)`"
        ));
    }
}

#[test]
fn stray_semicolon_inside_the_body_is_a_syntax_error() {
    let text = TWO_POINTS.replace(";)", ";;)");
    assert!(matches!(
        decode(&text),
        Err(DecodeError::Syntax { message, .. }) if message == "expected `,` after point"
    ));
}

#[test]
fn point_limit_applies_to_counted_elements() {
    let cfg = CodecConfig {
        max_points: 1,
        ..CodecConfig::default()
    };
    assert_eq!(
        decode_with(TWO_POINTS, &cfg).unwrap_err(),
        DecodeError::TooManyPoints {
            requested: 2,
            max: 1
        }
    );
}

#[test]
fn three_dimensional_points_keep_only_xy() {
    let text = "ST_TRAJECTORY(2020-01-01;2020-01-02;POINT Z (1 2 3),2020-01-01 06:00:00;)";
    let rec = decode(text).unwrap();
    assert_eq!(rec.point(0), Some(Point::new(1.0, 2.0)));
}
