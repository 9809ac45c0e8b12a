//! 2-D points and the easing used for friction

use std::ops::Sub;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::SCREEN_ANGLE_OFFSET;

/// Easing curve applied to `1 - friction`: `1 - sqrt(1 - x^2)`
pub fn ease(x: f64) -> f64 {
    1.0 - (1.0 - x * x).sqrt()
}

/// Friction only applies inside the open interval (0, 1).
///
/// Anything else (0, 1, negatives, values above 1, NaN) means "no friction"
/// and the full distance is moved.
pub fn effective_friction(friction: Option<f64>) -> Option<f64> {
    friction.filter(|f| *f > 0.0 && *f < 1.0)
}

/// A point in screen space (origin top left, y pointing down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrite the coordinates with another point's
    pub fn update(&mut self, other: Point) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    /// Move the point by `distance` along `angle` (radians).
    ///
    /// With a friction in (0, 1) only `distance * ease(1 - friction)` is
    /// travelled: friction near 1 barely moves, near 0 moves almost fully.
    pub fn move_by_angle(&mut self, angle: f64, distance: f64, friction: Option<f64>) -> &mut Self {
        let rotated = angle + SCREEN_ANGLE_OFFSET;
        let distance = match effective_friction(friction) {
            Some(friction) => distance * ease(1.0 - friction),
            None => distance,
        };

        self.x += rotated.sin() * distance;
        self.y -= rotated.cos() * distance;
        self
    }

    /// Exact coordinate equality, no epsilon
    pub fn equals_to(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub fn difference_to(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let diff = self.difference_to(other);
        (diff.x * diff.x + diff.y * diff.y).sqrt()
    }

    /// Angle of `self - other` in radians, `atan2` conventions
    pub fn angle_to(&self, other: &Point) -> f64 {
        let diff = self.difference_to(other);
        diff.y.atan2(diff.x)
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        self.difference_to(&rhs)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
