// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Geometry and time collaborators for the trajectory codec.

This crate provides:
- A 2-D/3-D/4-D point type (`Point`) and the WKT geometry tags (`GeometryKind`).
- A WKT reader that parses point bodies and recognises every other tag
  (`wkt::parse_point_geometry`).
- Timestamps in microseconds since 2000-01-01 (`Timestamp`) with parse,
  format, and subtraction helpers.

Design notes:
- Points format with shortest round-trip float text so that writing and
  re-reading yields bit-identical ordinates.
- Timestamps are 8 bytes wide; `infinity`/`-infinity` map to the `i64`
  extremes.
"]

/// Timestamp parsing, formatting, and arithmetic.
pub mod temporal;
/// Foundational geometric types.
pub mod types;
/// Well-Known Text reader.
pub mod wkt;

pub use temporal::timestamp::{format_time, parse_time, subtract_times, TimeError, Timestamp};
pub use types::kind::GeometryKind;
pub use types::point::Point;
pub use wkt::{parse_point_geometry, Geometry, GeometryError};
