use std::fmt;

use log::trace;

use crate::geometry::{Point, Segment};

/// Depth past which a curve has over a million segments.
pub const PRACTICAL_DEPTH_LIMIT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    InvalidArgument(String),
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
        }
    }
}

impl std::error::Error for CurveError {}

/// Depth and baseline of a single curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRequest {
    pub depth: u32,
    pub start: Point,
    pub end: Point,
}

impl GenerationRequest {
    pub fn new(depth: u32, start: Point, end: Point) -> Self {
        Self { depth, start, end }
    }

    pub fn segment_count(&self) -> Option<usize> {
        segment_count(self.depth)
    }

    pub fn is_expensive(&self) -> bool {
        is_expensive(self.depth)
    }

    pub fn generate(&self) -> Vec<Segment> {
        generate(self.depth, self.start, self.end)
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            depth: 10,
            start: Point::new(400.0, 400.0),
            end: Point::new(600.0, 400.0),
        }
    }
}

/// Number of segments a curve of `depth` folds has, or `None` if it does not fit in memory addressing.
pub fn segment_count(depth: u32) -> Option<usize> {
    2usize.checked_pow(depth)
}

pub fn is_expensive(depth: u32) -> bool {
    depth > PRACTICAL_DEPTH_LIMIT
}

/// Converts a signed depth into one the generator accepts.
pub fn validate_depth(depth: i64) -> Result<u32, CurveError> {
    if depth < 0 {
        return Err(CurveError::InvalidArgument(format!(
            "depth must be non-negative, got {}",
            depth
        )));
    }

    u32::try_from(depth)
        .map_err(|_| CurveError::InvalidArgument(format!("depth {} is out of range", depth)))
}

/// Generates the dragon curve between `start` and `end`.
///
/// The result holds exactly `2^depth` segments forming one continuous polyline
/// from `start` to `end`, ordered by a depth-first walk that expands the left
/// fold before the right one at every level.
///
/// No upper bound is imposed on `depth`. Preallocation stops at
/// `2^PRACTICAL_DEPTH_LIMIT` segments and the output grows on demand past that,
/// so an oversized depth fails the same way at any value: by running out of memory.
pub fn generate(depth: u32, start: Point, end: Point) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(initial_capacity(depth));

    trace!("Generating depth {} from {:?} to {:?}", depth, start, end);
    fold(depth, start, end, true, &mut segments);

    segments
}

/// Same as [`generate`] for callers holding a signed depth.
pub fn try_generate(depth: i64, start: Point, end: Point) -> Result<Vec<Segment>, CurveError> {
    let depth = validate_depth(depth)?;

    Ok(generate(depth, start, end))
}

fn initial_capacity(depth: u32) -> usize {
    let limit = 1usize << PRACTICAL_DEPTH_LIMIT;

    segment_count(depth).map_or(limit, |count| count.min(limit))
}

fn fold(level: u32, p1: Point, p2: Point, turn_left: bool, out: &mut Vec<Segment>) {
    if level == 0 {
        out.push(Segment::new(p1, p2));
        return;
    }

    let mid = p1.midpoint(&p2);
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    let apex = if turn_left {
        Point::new(mid.x - dy / 2.0, mid.y + dx / 2.0)
    } else {
        Point::new(mid.x + dy / 2.0, mid.y - dx / 2.0)
    };

    fold(level - 1, p1, apex, true, out);
    fold(level - 1, apex, p2, false, out);
}
