//! Geometry primitives: points and axis-aligned rectangles.
//!
//! Coordinates follow the screen convention used throughout the crate:
//! x grows eastward, y grows southward, so the NW quadrant of a rectangle
//! is its low-x/low-y quarter.

/// A 2D point with `f64` coordinates.
///
/// Points are plain value types: `Copy`, compared by exact coordinate
/// equality with no tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Squared Euclidean distance to another point
    #[inline]
    pub fn dist_sq(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Whether both coordinates are finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned rectangle in min/max form.
///
/// Construction normalizes any two opposite corners, so `min_x <= max_x`
/// and `min_y <= max_y` always hold. Degenerate rectangles (zero width
/// or height) are legal and denote a line or point domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Western edge.
    pub min_x: f64,
    /// Northern edge.
    pub min_y: f64,
    /// Eastern edge.
    pub max_x: f64,
    /// Southern edge.
    pub max_y: f64,
}

impl Rect {
    /// Creates a rectangle from two opposite corners, normalizing them
    /// into min/max order.
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Rect {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Whether the rectangle contains a point. All four edges are closed.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Midpoint of the rectangle, where quadrant subdivision splits it
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Squared distance from a point to the nearest location inside the
    /// rectangle. Zero if the point lies inside.
    ///
    /// This is the lower bound used to prune quadrants during nearest
    /// searches: no point stored inside the rectangle can be closer to
    /// the query than this.
    #[inline]
    pub fn dist_sq_to_point(&self, p: Point) -> f64 {
        let dx = axis_distance(p.x, self.min_x, self.max_x);
        let dy = axis_distance(p.y, self.min_y, self.max_y);
        dx * dx + dy * dy
    }

    /// Width of the rectangle
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Distance from a coordinate to the interval `[min, max]` along one axis
#[inline]
fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
    if coordinate < min {
        min - coordinate
    } else if coordinate > max {
        coordinate - max
    } else {
        0.0
    }
}
