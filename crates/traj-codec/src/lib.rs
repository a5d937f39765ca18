// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Codec between `ST_TRAJECTORY(...)` text and compact binary trajectory records.
//!
//! Data flow:
//!
//! ```text
//! text -> scanner -> {timestamp, point} sub-parsers -> sequence encoder -> decoder -> record
//! record -> renderer -> text
//! ```
//!
//! - [`decode`] / [`decode_with`] validate the outer grammar, count the
//!   sequence elements, and patch the header of the encoded buffer.
//! - [`render`] formats the interval and every stored point; [`to_wkt`]
//!   produces text that decodes back to an identical record.
//! - [`TrajectoryRecord`] owns validated bytes; see [`record`] for the layout.
//!
//! Geometry and time interpretation live in `traj-geom`.

pub mod config;
pub mod decoder;
pub mod error;
pub mod record;
pub mod render;
pub mod scanner;
pub mod sequence;
pub mod subparse;

pub use config::{CodecConfig, SizeMismatchPolicy};
pub use decoder::{decode, decode_with};
pub use error::{DecodeError, RecordError};
pub use record::{RecordBuilder, TrajectoryRecord, HEADER_SIZE, POINT_SIZE};
pub use render::{render, to_wkt};
pub use scanner::Cursor;
pub use sequence::{encode_sequence, EncodedSequence};
pub use subparse::{parse_point, parse_timestamp};
