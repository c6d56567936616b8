//! Points, line segments, and the two primitives used for hit testing.

/// A point in the coordinate space of the path data.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point { x, y }
    }
}

/// A directed straight line from `from` to `to`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Segment {
        Segment { from, to }
    }

    /// Whether a horizontal ray cast from `p` towards +x crosses this segment.
    ///
    /// Each end of the segment is tested with a strict `>` against `p.y`, so a ray
    /// that passes exactly through a vertex shared by two segments is counted once.
    /// Horizontal segments never straddle and are never counted.  Any NaN coordinate
    /// makes the comparisons false, so such a segment does not count either.
    pub fn crosses_ray_from(&self, p: Point) -> bool {
        let Segment { from: s, to: e } = *self;

        if (s.y > p.y) == (e.y > p.y) {
            return false;
        }

        let x_cross = s.x + (e.x - s.x) * (p.y - s.y) / (e.y - s.y);
        p.x < x_cross
    }

    /// Shortest distance from `p` to any point on this segment.
    ///
    /// Returns NaN if any coordinate is NaN; callers filter that out.
    #[allow(clippy::float_cmp)]
    pub fn distance_to(&self, p: Point) -> f64 {
        let Segment { from: a, to: b } = *self;

        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len_sq = dx * dx + dy * dy;

        if len_sq == 0.0 {
            return p.distance(a);
        }

        let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
        let t = t.clamp(0.0, 1.0);

        p.distance(Point::new(a.x + t * dx, a.y + t * dy))
    }
}
