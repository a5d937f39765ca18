// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! Property tests: size invariant, bound preservation, idempotence, and
//! no-panic fuzzing of the text and binary entry points.

use proptest::prelude::*;
use traj_codec::{decode, render, to_wkt, TrajectoryRecord, HEADER_SIZE, POINT_SIZE};
use traj_geom::{format_time, Point, Timestamp};

// 1970..2100 relative to 2000-01-01, in microseconds.
const TIME_RANGE: core::ops::Range<i64> = -946_684_800_000_000..3_155_760_000_000_000;

fn trajectory_text(start: i64, len: i64, points: &[(f64, f64, i64)]) -> String {
    let fmt = |micros: i64| format_time(Timestamp::from_micros(micros)).unwrap();
    let mut text = format!("ST_TRAJECTORY({};{};", fmt(start), fmt(start + len));
    for (x, y, at) in points {
        text.push_str(&format!("{},{};", Point::new(*x, *y), fmt(*at)));
    }
    text.push(')');
    text
}

fn case() -> impl Strategy<Value = (i64, i64, Vec<(f64, f64, i64)>)> {
    (TIME_RANGE, 0i64..86_400_000_000).prop_flat_map(|(start, len)| {
        let element = (-1.0e9f64..1.0e9, -1.0e9f64..1.0e9, start..=start + len);
        (
            Just(start),
            Just(len),
            prop::collection::vec(element, 1..12),
        )
    })
}

proptest! {
    #[test]
    fn record_length_counts_every_point((start, len, points) in case()) {
        let rec = decode(&trajectory_text(start, len, &points)).unwrap();
        prop_assert_eq!(rec.record_length() as usize, HEADER_SIZE + points.len() * POINT_SIZE);
        prop_assert_eq!(rec.start_time().micros(), start);
        prop_assert_eq!(rec.end_time().micros(), start + len);
        let stored: Vec<(f64, f64)> = rec.points().map(|p| p.xy()).collect();
        let given: Vec<(f64, f64)> = points.iter().map(|(x, y, _)| (*x, *y)).collect();
        prop_assert_eq!(stored, given);
    }

    #[test]
    fn render_reproduces_time_bounds((start, len, points) in case()) {
        let rec = decode(&trajectory_text(start, len, &points)).unwrap();
        let text = render(&rec).unwrap();
        let bounds = format!(
            "{},{}",
            format_time(Timestamp::from_micros(start)).unwrap(),
            format_time(Timestamp::from_micros(start + len)).unwrap()
        );
        prop_assert!(text.starts_with(&bounds));
        prop_assert_eq!(text.matches("POINT").count(), points.len());
    }

    #[test]
    fn canonical_text_is_idempotent((start, len, points) in case()) {
        let rec = decode(&trajectory_text(start, len, &points)).unwrap();
        let again = decode(&to_wkt(&rec).unwrap()).unwrap();
        prop_assert_eq!(again.as_bytes(), rec.as_bytes());
    }

    #[test]
    fn decode_never_panics(text in "(ST_TRAJECTORY\\()?[ -~]{0,80}") {
        let _ = decode(&text);
    }

    #[test]
    fn from_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        if let Ok(rec) = TrajectoryRecord::from_bytes(&bytes) {
            prop_assert_eq!(rec.record_length() as usize, bytes.len());
            prop_assert_eq!(rec.points().count(), rec.num_points());
        }
    }
}
