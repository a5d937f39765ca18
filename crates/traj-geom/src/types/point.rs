// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

/// A single position with optional elevation (`z`) and measure (`m`).
///
/// Invariants:
/// - Every ordinate is finite; the WKT reader rejects NaN and infinities.
/// - Only `x` and `y` travel into a trajectory record.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    z: Option<f64>,
    m: Option<f64>,
}

impl Point {
    /// Creates a 2-D point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// Returns a copy carrying elevation `z`.
    #[must_use]
    pub const fn with_z(self, z: f64) -> Self {
        Self { z: Some(z), ..self }
    }

    /// Returns a copy carrying measure `m`.
    #[must_use]
    pub const fn with_m(self, m: f64) -> Self {
        Self { m: Some(m), ..self }
    }

    /// Returns the x ordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y ordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the elevation, if present.
    #[must_use]
    pub const fn z(&self) -> Option<f64> {
        self.z
    }

    /// Returns the measure, if present.
    #[must_use]
    pub const fn m(&self) -> Option<f64> {
        self.m
    }

    /// Planar coordinates `(x, y)`; the pair a trajectory record stores.
    #[must_use]
    pub const fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// ISO WKT: `POINT(x y)`, `POINT Z (x y z)`, `POINT M (x y m)`, `POINT ZM (x y z m)`.
///
/// Ordinates use Rust's shortest round-trip formatting (`1.0` prints as `1`).
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.z, self.m) {
            (None, None) => write!(f, "POINT({} {})", self.x, self.y),
            (Some(z), None) => write!(f, "POINT Z ({} {} {z})", self.x, self.y),
            (None, Some(m)) => write!(f, "POINT M ({} {} {m})", self.x, self.y),
            (Some(z), Some(m)) => write!(f, "POINT ZM ({} {} {z} {m})", self.x, self.y),
        }
    }
}
