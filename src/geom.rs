#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned bounding box with non-negative extents.
///
/// Construct through [`Bounds::from_corners`] or [`Bounds::from_points`]; both
/// normalize so that `min_x <= max_x` and `min_y <= max_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Box spanned by two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Smallest box containing every point. `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::from_corners(*first, *first);
        for p in rest {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Inclusive containment: points on the edge are inside.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min_x && pt.x <= self.max_x && pt.y >= self.min_y && pt.y <= self.max_y
    }

    /// Grow the box outward by `margin` on every side.
    #[must_use]
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}
