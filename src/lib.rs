//! Dragon curve generation by recursive midpoint displacement.
//!
//! [`curve::generate`] folds a baseline segment `depth` times and returns the
//! `2^depth` segments of the resulting polyline in drawing order. Consumers in
//! [`export`] write that sequence out; drawing it is left to the caller.

pub mod curve;
pub mod geometry;

#[cfg(feature = "export")]
pub mod export;

pub use curve::{generate, try_generate, CurveError, GenerationRequest};
pub use geometry::{Bounds, Point, Segment};
