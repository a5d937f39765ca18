// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for decoding text and validating binary records.

use thiserror::Error;
use traj_geom::{GeometryError, TimeError, Timestamp};

/// Failures while turning trajectory text into a record.
///
/// Every variant aborts the decode; no partial record is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Missing keyword or delimiter, or trailing input.
    #[error("syntax error at byte {offset}: {message}")]
    Syntax {
        /// Byte offset into the input text.
        offset: usize,
        /// What the scanner expected.
        message: String,
    },
    /// A sequence element is not a valid, non-empty point.
    #[error("invalid point at byte {offset}: {source}")]
    Geometry {
        /// Byte offset of the element.
        offset: usize,
        /// Reader or narrowing failure.
        source: GeometryError,
    },
    /// The time collaborator rejected a timestamp.
    #[error("invalid timestamp at byte {offset}: {source}")]
    InvalidTimestamp {
        /// Byte offset of the timestamp text.
        offset: usize,
        /// Parser failure.
        source: TimeError,
    },
    /// The sequence starts with a geometry keyword other than `POINT`.
    #[error("unsupported sequence geometry {keyword:?} at byte {offset}; only POINT sequences are supported")]
    UnsupportedGeometry {
        /// Byte offset of the keyword.
        offset: usize,
        /// Keyword as written.
        keyword: String,
    },
    /// The interval's start lies after its end.
    #[error("interval start {start:?} is after end {end:?}")]
    InvertedInterval {
        /// Parsed start bound.
        start: Timestamp,
        /// Parsed end bound.
        end: Timestamp,
    },
    /// The counted point total exceeds the configured bound or the record's size range.
    #[error("sequence of {requested} points exceeds the limit of {max}")]
    TooManyPoints {
        /// Points counted in the input.
        requested: usize,
        /// Largest accepted count.
        max: usize,
    },
    /// Bytes written differ from the pre-computed size.
    #[error("encoded {actual} bytes but expected {expected}")]
    SizeMismatch {
        /// Size computed from the counted points.
        expected: usize,
        /// Size actually written.
        actual: usize,
    },
    /// Record assembly failed.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Failures while building or validating binary records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Fewer bytes than the fixed header.
    #[error("record too short: need at least {needed} bytes, got {got}")]
    TooShort {
        /// Header size.
        needed: usize,
        /// Bytes available.
        got: usize,
    },
    /// Declared `record_length` disagrees with the buffer.
    #[error("record_length is {declared} but the record holds {actual} bytes")]
    LengthMismatch {
        /// Value of the header field.
        declared: u32,
        /// Buffer length.
        actual: usize,
    },
    /// Body is not a whole number of points.
    #[error("point data of {0} bytes is not a multiple of the point size")]
    RaggedBody(usize),
    /// Flags carry bits this codec does not understand.
    #[error("unsupported flags {0:#010x}")]
    UnknownFlags(u32),
    /// Record would exceed the 32-bit length field.
    #[error("record of {0} points does not fit a 32-bit length")]
    TooLarge(usize),
    /// More points pushed than the builder was sized for.
    #[error("builder sized for {0} points is full")]
    CapacityExceeded(usize),
    /// Hex text failed to decode.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}
