//! Core geometry types consumed by the trajectory codec (point, geometry tag).
//!
//! Only points carry coordinates here. Every other geometry kind is a tag the
//! reader can recognise and report, never a value the codec stores.

#[doc = "WKT geometry tags (POINT, LINESTRING, ...)."]
pub mod kind;
#[doc = "Points with optional Z and M ordinates."]
pub mod point;
