// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text renderers for trajectory records.

use traj_geom::{format_time, TimeError, Timestamp};

use crate::decoder::{ST_KEYWORD, TRAJECTORY_KEYWORD};
use crate::record::TrajectoryRecord;

/// Summary text: `start,end` followed by `,` and every point as WKT joined
/// with `-`.
///
/// ```text
/// 2020-01-01 00:00:00,2020-01-01 01:00:00,POINT(1 2)-POINT(3 4)
/// ```
///
/// Differs from the legacy text output, which always wrote `start,end,` and
/// prefixed every point with `-` (`...,-POINT(1 2)-POINT(3 4)`). Here `-`
/// only separates points, and a record without points renders as `start,end`
/// with no trailing `,`.
pub fn render(record: &TrajectoryRecord) -> Result<String, TimeError> {
    let mut out = format_time(record.start_time())?;
    out.push(',');
    out.push_str(&format_time(record.end_time())?);
    for (index, point) in record.points().enumerate() {
        out.push(if index == 0 { ',' } else { '-' });
        out.push_str(&point.to_string());
    }
    Ok(out)
}

/// Canonical `ST_TRAJECTORY(...)` text that [`crate::decode`] reads back into
/// an identical record.
///
/// Records keep no per-point times, so each point is stamped with a time
/// interpolated linearly over the interval by index.
pub fn to_wkt(record: &TrajectoryRecord) -> Result<String, TimeError> {
    let start = record.start_time();
    let end = record.end_time();
    let count = record.num_points();

    let mut out = String::from(ST_KEYWORD);
    out.push_str(TRAJECTORY_KEYWORD);
    out.push('(');
    out.push_str(&format_time(start)?);
    out.push(';');
    out.push_str(&format_time(end)?);
    out.push(';');
    for (index, point) in record.points().enumerate() {
        out.push_str(&point.to_string());
        out.push(',');
        out.push_str(&format_time(interpolate(start, end, index, count))?);
        out.push(';');
    }
    out.push(')');
    Ok(out)
}

fn interpolate(start: Timestamp, end: Timestamp, index: usize, count: usize) -> Timestamp {
    if count < 2 || start.is_infinite() || end.is_infinite() {
        return start;
    }
    let (Ok(index), Ok(last)) = (i128::try_from(index), i128::try_from(count - 1)) else {
        return start;
    };
    let from = i128::from(start.micros());
    let span = i128::from(end.micros()) - from;
    let micros = from + span * index / last;
    i64::try_from(micros).map_or(start, Timestamp::from_micros)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::decode;

    const TEXT: &str = "ST_TRAJECTORY(2020-01-01 00:00:00;2020-01-01 01:00:00;\
POINT(1 2),2020-01-01 00:10:00;POINT(3 4),2020-01-01 00:20:00;POINT(5.5 -6),2020-01-01 00:50:00;)";

    #[test]
    fn render_lists_every_point() {
        let rec = decode(TEXT).unwrap();
        assert_eq!(
            render(&rec).unwrap(),
            "2020-01-01 00:00:00,2020-01-01 01:00:00,POINT(1 2)-POINT(3 4)-POINT(5.5 -6)"
        );
    }

    #[test]
    fn render_of_empty_sequence_is_just_the_interval() {
        let rec = decode("ST_TRAJECTORY(2020-01-01;2020-01-02;)").unwrap();
        assert_eq!(render(&rec).unwrap(), "2020-01-01 00:00:00,2020-01-02 00:00:00");
    }

    #[test]
    fn to_wkt_spreads_times_over_the_interval() {
        let rec = decode(TEXT).unwrap();
        assert_eq!(
            to_wkt(&rec).unwrap(),
            "ST_TRAJECTORY(2020-01-01 00:00:00;2020-01-01 01:00:00;\
POINT(1 2),2020-01-01 00:00:00;POINT(3 4),2020-01-01 00:30:00;POINT(5.5 -6),2020-01-01 01:00:00;)"
        );
    }

    #[test]
    fn single_point_is_stamped_with_start() {
        let start = Timestamp::from_micros(100);
        let end = Timestamp::from_micros(200);
        assert_eq!(interpolate(start, end, 0, 1), start);
        assert_eq!(interpolate(start, end, 1, 3), Timestamp::from_micros(150));
        assert_eq!(interpolate(end, start, 1, 2), start);
    }
}
