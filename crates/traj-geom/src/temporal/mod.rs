//! Temporal types and helpers used for trajectory interval bounds.

#[doc = "Microsecond timestamps relative to 2000-01-01 (i64 newtype)."]
pub mod timestamp;
