use geo::{Area, LineString};

/// A board-centred point in mm
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` mm along `angle` radians, CCW from +x
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Distance from the board centre
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle in radians in (-PI, PI], CCW from +x
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Implicitly closed ring of vertices; the last vertex connects back to the first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Shoelace area; positive for counter-clockwise winding
    pub fn signed_area(&self) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }
        self.to_geo().signed_area()
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Even-odd test with a ray cast towards +x
    ///
    /// Each edge covers the half-open band `[y_lo, y_hi)` and counts when it
    /// crosses at or right of `p`. Polygons sharing an edge therefore split
    /// the points on it: a point on a non-horizontal shared edge belongs to
    /// the polygon on its left, and a shared vertex is counted once.
    pub fn contains(&self, p: Point) -> bool {
        if !self.is_valid() {
            return false;
        }

        let n = self.vertices.len();
        let crossings = (0..n)
            .filter(|&i| ray_crosses(p, self.vertices[i], self.vertices[(i + 1) % n]))
            .count();
        crossings % 2 == 1
    }

    fn to_geo(&self) -> geo::Polygon<f64> {
        let ring: LineString<f64> = self
            .vertices
            .iter()
            .map(|p| geo::coord! { x: p.x, y: p.y })
            .collect();
        geo::Polygon::new(ring, Vec::new())
    }
}

/// Whether the +x ray from `p` crosses segment `a`-`b`
fn ray_crosses(p: Point, a: Point, b: Point) -> bool {
    let (lo, hi) = if a.y > b.y { (b, a) } else { (a, b) };
    if p.y < lo.y || p.y >= hi.y {
        return false;
    }

    let t = (p.y - lo.y) / (hi.y - lo.y);
    lo.x + t * (hi.x - lo.x) >= p.x
}

/// Axis-aligned extent of a set of points, in mm
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of points
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;

        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in points {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }

        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
