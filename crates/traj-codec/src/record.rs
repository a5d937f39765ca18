// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Trajectory record: binary layout, builder, and validated reader.
//!
//! Wire format (Little-Endian):
//! ```text
//! offset size  field
//! 0      4     record_length = u32 LE (HEADER_SIZE + N * POINT_SIZE)
//! 4      4     flags = u32 LE (0)
//! 8      8     start_time = i64 LE (microseconds since 2000-01-01)
//! 16     8     end_time = i64 LE
//!
//! 24     16*N  points = N x (x: f64 LE, y: f64 LE)
//! ```
//!
//! Per-point timestamps are not stored; only the interval bounds survive.
//! Non-zero flags are rejected so a later layout can claim them.

use core::ops::Range;

use traj_geom::temporal::timestamp::{TimeDelta, TIMESTAMP_SIZE};
use traj_geom::{subtract_times, Point, TimeError, Timestamp};

use crate::error::RecordError;

/// Fixed header size in bytes (before point data).
pub const HEADER_SIZE: usize = 8 + 2 * TIMESTAMP_SIZE;

/// Encoded size of one `(x, y)` pair.
pub const POINT_SIZE: usize = 16;

const LENGTH_FIELD: Range<usize> = 0..4;
const FLAGS_FIELD: Range<usize> = 4..8;
const START_FIELD: Range<usize> = 8..16;
const END_FIELD: Range<usize> = 16..24;

/// Size of a record holding `n_points` points, or `None` if it would not fit
/// the 32-bit `record_length` field.
#[must_use]
pub fn encoded_size(n_points: usize) -> Option<usize> {
    n_points
        .checked_mul(POINT_SIZE)?
        .checked_add(HEADER_SIZE)
        .filter(|size| u32::try_from(*size).is_ok())
}

fn le_u32(bytes: &[u8], field: Range<usize>) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[field]);
    u32::from_le_bytes(raw)
}

fn le_i64(bytes: &[u8], field: Range<usize>) -> i64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[field]);
    i64::from_le_bytes(raw)
}

fn le_f64(bytes: &[u8], at: usize) -> f64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[at..at + 8]);
    f64::from_le_bytes(raw)
}

/// Pre-sized buffer with named-field writes.
///
/// The header region is reserved (zeroed) up front; points are appended in
/// order and header fields are patched once the sequence is known.
#[derive(Debug)]
pub struct RecordBuilder {
    buf: Vec<u8>,
    capacity: usize,
}

impl RecordBuilder {
    /// Allocates exactly `encoded_size(n_points)` bytes.
    pub fn with_points(n_points: usize) -> Result<Self, RecordError> {
        let size = encoded_size(n_points).ok_or(RecordError::TooLarge(n_points))?;
        let mut buf = Vec::with_capacity(size);
        buf.resize(HEADER_SIZE, 0);
        Ok(Self {
            buf,
            capacity: n_points,
        })
    }

    /// Bytes written so far, header included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Always `false`; the header is reserved on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Points written so far.
    #[must_use]
    pub fn num_points(&self) -> usize {
        (self.buf.len() - HEADER_SIZE) / POINT_SIZE
    }

    /// Appends one `(x, y)` pair.
    pub fn push_point(&mut self, x: f64, y: f64) -> Result<(), RecordError> {
        if self.num_points() >= self.capacity {
            return Err(RecordError::CapacityExceeded(self.capacity));
        }
        self.buf.extend_from_slice(&x.to_le_bytes());
        self.buf.extend_from_slice(&y.to_le_bytes());
        Ok(())
    }

    /// Sets the reserved flags word.
    pub fn set_flags(&mut self, flags: u32) {
        self.buf[FLAGS_FIELD].copy_from_slice(&flags.to_le_bytes());
    }

    /// Sets the interval bounds.
    pub fn set_interval(&mut self, start: Timestamp, end: Timestamp) {
        self.buf[START_FIELD].copy_from_slice(&start.to_le_bytes());
        self.buf[END_FIELD].copy_from_slice(&end.to_le_bytes());
    }

    /// Patches `record_length` to the bytes actually written and seals the record.
    pub fn finish(mut self) -> Result<TrajectoryRecord, RecordError> {
        let len = u32::try_from(self.buf.len())
            .map_err(|_| RecordError::TooLarge(self.num_points()))?;
        self.buf[LENGTH_FIELD].copy_from_slice(&len.to_le_bytes());
        Ok(TrajectoryRecord { bytes: self.buf })
    }
}

/// An owned, immutable trajectory record.
///
/// Invariants (checked by every constructor):
/// - at least [`HEADER_SIZE`] bytes;
/// - `record_length` equals the byte length;
/// - the body is a whole number of [`POINT_SIZE`] pairs;
/// - flags are zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrajectoryRecord {
    bytes: Vec<u8>,
}

impl TrajectoryRecord {
    /// Validates and takes ownership of raw record bytes.
    pub fn from_vec(bytes: Vec<u8>) -> Result<Self, RecordError> {
        if bytes.len() < HEADER_SIZE {
            return Err(RecordError::TooShort {
                needed: HEADER_SIZE,
                got: bytes.len(),
            });
        }
        let declared = le_u32(&bytes, LENGTH_FIELD);
        if usize::try_from(declared).ok() != Some(bytes.len()) {
            return Err(RecordError::LengthMismatch {
                declared,
                actual: bytes.len(),
            });
        }
        let body = bytes.len() - HEADER_SIZE;
        if body % POINT_SIZE != 0 {
            return Err(RecordError::RaggedBody(body));
        }
        let flags = le_u32(&bytes, FLAGS_FIELD);
        if flags != 0 {
            return Err(RecordError::UnknownFlags(flags));
        }
        Ok(Self { bytes })
    }

    /// Validates and copies raw record bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Self::from_vec(bytes.to_vec())
    }

    /// Decodes a hex string (either case, surrounding whitespace ignored).
    pub fn from_hex(text: &str) -> Result<Self, RecordError> {
        Self::from_vec(hex::decode(text.trim())?)
    }

    /// Lower-case hex encoding of the record bytes.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Raw record bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the record, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The `record_length` header field.
    #[must_use]
    pub fn record_length(&self) -> u32 {
        le_u32(&self.bytes, LENGTH_FIELD)
    }

    /// The reserved flags word (always zero).
    #[must_use]
    pub fn flags(&self) -> u32 {
        le_u32(&self.bytes, FLAGS_FIELD)
    }

    /// Interval start.
    #[must_use]
    pub fn start_time(&self) -> Timestamp {
        Timestamp::from_micros(le_i64(&self.bytes, START_FIELD))
    }

    /// Interval end.
    #[must_use]
    pub fn end_time(&self) -> Timestamp {
        Timestamp::from_micros(le_i64(&self.bytes, END_FIELD))
    }

    /// `end_time - start_time`.
    pub fn duration(&self) -> Result<TimeDelta, TimeError> {
        subtract_times(self.end_time(), self.start_time())
    }

    /// Number of stored points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        (self.bytes.len() - HEADER_SIZE) / POINT_SIZE
    }

    /// The `index`-th point, in temporal order.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<Point> {
        let at = index.checked_mul(POINT_SIZE)?.checked_add(HEADER_SIZE)?;
        if at.checked_add(POINT_SIZE)? > self.bytes.len() {
            return None;
        }
        Some(Point::new(
            le_f64(&self.bytes, at),
            le_f64(&self.bytes, at + 8),
        ))
    }

    /// Stored points in temporal order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.bytes[HEADER_SIZE..]
            .chunks_exact(POINT_SIZE)
            .map(|pair| Point::new(le_f64(pair, 0), le_f64(pair, 8)))
    }
}

impl TryFrom<Vec<u8>> for TrajectoryRecord {
    type Error = RecordError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_vec(bytes)
    }
}

impl AsRef<[u8]> for TrajectoryRecord {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
