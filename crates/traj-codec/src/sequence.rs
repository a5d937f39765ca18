// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sequence encoder: point/timestamp pairs into a pre-sized record buffer.

use tracing::{debug, warn};

use crate::config::{CodecConfig, SizeMismatchPolicy};
use crate::error::DecodeError;
use crate::record::{encoded_size, RecordBuilder};
use crate::scanner::Cursor;
use crate::subparse::{parse_point, parse_timestamp};

/// Output of [`encode_sequence`]: a builder holding the points, header unset.
#[derive(Debug)]
pub struct EncodedSequence {
    /// Buffer with the header reserved and the points written.
    pub builder: RecordBuilder,
    /// Size computed from the caller's point count.
    pub expected_size: usize,
    /// Bytes actually written, header included.
    pub actual_size: usize,
}

/// Encodes up to `n_points` `POINT(x y),timestamp;` elements starting at `cursor`.
///
/// The buffer is sized for `n_points` before any parsing. The loop stops early
/// at `)` or end of input; the resulting size difference is handled per
/// [`CodecConfig::size_mismatch`]. Per-element timestamps are validated and
/// then dropped.
pub fn encode_sequence(
    cursor: &mut Cursor<'_>,
    n_points: usize,
    config: &CodecConfig,
) -> Result<EncodedSequence, DecodeError> {
    let too_many = || DecodeError::TooManyPoints {
        requested: n_points,
        max: config.max_points,
    };
    if n_points > config.max_points {
        return Err(too_many());
    }
    let expected_size = encoded_size(n_points).ok_or_else(too_many)?;
    let mut builder = RecordBuilder::with_points(n_points)?;

    for index in 0..n_points {
        cursor.skip_ws();
        if cursor.at_end() || cursor.peek() == Some(')') {
            debug!(index, n_points, "sequence ended before the counted points");
            break;
        }
        let point = parse_point(cursor)?;
        let _stamp = parse_timestamp(cursor)?;
        cursor.skip_ws();
        let (x, y) = point.xy();
        builder.push_point(x, y)?;
    }

    let actual_size = builder.len();
    if actual_size != expected_size {
        match config.size_mismatch {
            SizeMismatchPolicy::Fail => {
                return Err(DecodeError::SizeMismatch {
                    expected: expected_size,
                    actual: actual_size,
                });
            }
            SizeMismatchPolicy::Warn => {
                warn!(
                    expected = expected_size,
                    actual = actual_size,
                    "encoded trajectory size differs from the pre-computed size"
                );
            }
        }
    }

    Ok(EncodedSequence {
        builder,
        expected_size,
        actual_size,
    })
}
