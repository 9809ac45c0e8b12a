//! Stroke geometry built from brush positions

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Point halfway between `a` and `b`
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new(a.x + (b.x - a.x) / 2.0, a.y + (b.y - a.y) / 2.0)
}

/// One piece of a smoothed path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Quadratic curve from the previous end point
    Quad { control: Point, end: Point },
    /// Straight line from the previous end point
    Line { end: Point },
}

impl PathSegment {
    pub fn end(&self) -> Point {
        match *self {
            PathSegment::Quad { end, .. } | PathSegment::Line { end } => end,
        }
    }
}

/// Ordered brush positions of a single stroke
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokePath {
    points: Vec<Point>,
}

impl StrokePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Smooth the path with quadratic curves through midpoints.
    ///
    /// The path starts at the first point. Every recorded point becomes the
    /// control point of a curve ending halfway to its successor, and the
    /// last point is reached with a straight line until a successor exists.
    pub fn segments(&self) -> Vec<PathSegment> {
        let Some(&last) = self.points.last() else {
            return Vec::new();
        };

        let mut segments: Vec<PathSegment> = self
            .points
            .windows(2)
            .map(|pair| PathSegment::Quad {
                control: pair[0],
                end: midpoint(pair[0], pair[1]),
            })
            .collect();
        segments.push(PathSegment::Line { end: last });
        segments
    }
}

impl FromIterator<Point> for StrokePath {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let m = midpoint(Point::new(0.0, 10.0), Point::new(20.0, -10.0));
        assert_eq!(m, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_empty_path_has_no_segments() {
        assert!(StrokePath::new().segments().is_empty());
    }

    #[test]
    fn test_single_point_is_a_line() {
        let path: StrokePath = [Point::new(5.0, 5.0)].into_iter().collect();
        assert_eq!(
            path.segments(),
            vec![PathSegment::Line {
                end: Point::new(5.0, 5.0)
            }]
        );
    }

    #[test]
    fn test_segments_through_midpoints() {
        let path: StrokePath = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]
        .into_iter()
        .collect();

        let segments = path.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[0],
            PathSegment::Quad {
                control: Point::new(0.0, 0.0),
                end: Point::new(5.0, 0.0),
            }
        );
        assert_eq!(
            segments[1],
            PathSegment::Quad {
                control: Point::new(10.0, 0.0),
                end: Point::new(10.0, 5.0),
            }
        );
        assert_eq!(segments[2].end(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_accessors() {
        let mut path = StrokePath::new();
        assert!(path.is_empty());
        assert_eq!(path.last(), None);

        path.push(Point::new(1.0, 2.0));
        path.push(Point::new(3.0, 4.0));
        assert_eq!(path.len(), 2);
        assert_eq!(path.first(), Some(Point::new(1.0, 2.0)));
        assert_eq!(path.last(), Some(Point::new(3.0, 4.0)));
        assert_eq!(path.points()[1], Point::new(3.0, 4.0));
    }
}
