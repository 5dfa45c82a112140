//! Basic 2D types and the shared tolerance used by every geometric predicate.
//!
//! - `EPS`: single tolerance for determinants, dedup distances, and boundary slack.
//! - `Segment`: ordered pair of points (chords, division lines, polygon edges).
//! - `Polygon`: simple vertex ring with at least three vertices.
//! - `Board`: the axis-aligned play area, centred on the origin.

use nalgebra::Vector2;

/// Tolerance shared by all predicates in this crate.
///
/// Values are in board units; boards are O(10) wide, so this sits far above
/// f64 round-off and far below any meaningful feature size.
pub const EPS: f64 = 1e-9;

/// Ordered segment `start → end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn delta(&self) -> Vector2<f64> {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length() < EPS
    }

    /// Unit direction, or `None` for a zero-length segment.
    #[inline]
    pub fn direction(&self) -> Option<Vector2<f64>> {
        let d = self.delta();
        let len = d.norm();
        if len < EPS || !len.is_finite() {
            None
        } else {
            Some(d / len)
        }
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        (self.start + self.end) * 0.5
    }
}

/// Simple polygon (vertex ring, winding order irrelevant).
///
/// Invariant: at least three vertices. Regions produced by the partitioner are
/// convex, but nothing here relies on that.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector2<f64>>,
}

impl Polygon {
    /// Panics on fewer than three vertices: that can only come from a bug
    /// upstream in the partitioner, never from runtime data.
    pub fn new(vertices: Vec<Vector2<f64>>) -> Self {
        assert!(
            vertices.len() >= 3,
            "polygon needs at least 3 vertices, got {}",
            vertices.len()
        );
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Never true for a constructed polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edge `i` runs from vertex `i` to vertex `i + 1` (wrapping).
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        let n = self.vertices.len();
        Segment::new(self.vertices[i % n], self.vertices[(i + 1) % n])
    }

    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.vertices.len()).map(move |i| self.edge(i))
    }

    #[inline]
    pub fn area(&self) -> f64 {
        super::util::polygon_area(&self.vertices)
    }

    /// Area centroid; falls back to the vertex mean for sliver polygons.
    pub fn centroid(&self) -> Vector2<f64> {
        super::util::polygon_centroid(&self.vertices).unwrap_or_else(|| {
            let sum = self
                .vertices
                .iter()
                .fold(Vector2::zeros(), |acc, v| acc + v);
            sum / self.vertices.len() as f64
        })
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        super::util::point_in_polygon(self, p)
    }

    /// Smallest distance from `p` to any edge.
    pub fn distance_to_boundary(&self, p: Vector2<f64>) -> f64 {
        self.edges()
            .map(|e| super::util::distance_to_segment(&e, p))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Axis-aligned rectangular board.
///
/// Invariant: `max - min` is strictly positive on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Board {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Board {
    /// Board of the given size centred on the origin; `None` unless both sides
    /// are finite and positive.
    pub fn centered(width: f64, height: f64) -> Option<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }
        let half = Vector2::new(width * 0.5, height * 0.5);
        Some(Self {
            min: -half,
            max: half,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Boundary-inclusive membership.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn clamp(&self, p: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Distance from an interior point to the nearest board edge (negative outside).
    #[inline]
    pub fn inset_distance(&self, p: Vector2<f64>) -> f64 {
        (p.x - self.min.x)
            .min(self.max.x - p.x)
            .min(p.y - self.min.y)
            .min(self.max.y - p.y)
    }

    /// Corners in counter-clockwise order starting bottom-left.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            self.min,
            Vector2::new(self.max.x, self.min.y),
            self.max,
            Vector2::new(self.min.x, self.max.y),
        ]
    }

    pub fn as_polygon(&self) -> Polygon {
        Polygon::new(self.corners().to_vec())
    }
}
