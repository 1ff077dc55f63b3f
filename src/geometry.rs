use core::str::FromStr;

#[cfg(feature = "export")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "export", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_x, raw_y) = s.split_once(',').ok_or(format!("invalid format: {}", s))?;

        let x = raw_x
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid x coordinate: {}", raw_x))?;
        let y = raw_y
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid y coordinate: {}", raw_y))?;

        if !x.is_finite() || !y.is_finite() {
            Err(format!("coordinates must be finite: {}", s))?
        }

        Ok(Point { x, y })
    }
}

/// A directed line from `start` to `end`.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "export", derive(Serialize, Deserialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Axis-aligned box enclosing a set of segments.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn of(segments: &[Segment]) -> Option<Self> {
        let first = segments.first()?;
        let mut bounds = Bounds {
            min: first.start,
            max: first.start,
        };

        for segment in segments {
            bounds.include(segment.start);
            bounds.include(segment.end);
        }

        Some(bounds)
    }

    fn include(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
