//! Box wireframe geometry.
//!
//! This module lays out the corners and edges of an axis-aligned box with one
//! corner at the origin, for renderers that draw it as a wireframe plus the
//! space diagonal.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::vec3::{self, Vec3};

/// Number of corners of a box.
pub const VERTEX_COUNT: usize = 8;

/// Number of edges of a box.
pub const EDGE_COUNT: usize = 12;

/// Edge connectivity shared by every box.
///
/// Bottom face loop, top face loop, then the four verticals joining them.
pub const BOX_EDGES: [(usize, usize); EDGE_COUNT] = [
    // Bottom face (z = 0)
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    // Top face (z = c)
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    // Verticals
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point
    pub start: Vec3,
    /// End point
    pub end: Vec3,
}

impl Segment {
    /// Creates a segment.
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Corners and edges of a box.
///
/// Vertex ordering:
///
/// ```text
/// 0: (0, 0, 0)    4: (0, 0, c)
/// 1: (a, 0, 0)    5: (a, 0, c)
/// 2: (a, b, 0)    6: (a, b, c)
/// 3: (0, b, 0)    7: (0, b, c)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    /// The 8 corners in the fixed order above.
    pub vertices: [Vec3; VERTEX_COUNT],
    /// The 12 edges as index pairs into `vertices`.
    pub edges: [(usize, usize); EDGE_COUNT],
}

impl BoxGeometry {
    /// Corner opposite the origin, `(a, b, c)`.
    pub fn far_corner(&self) -> Vec3 {
        self.vertices[6]
    }

    /// Space diagonal from the origin to `(a, b, c)`.
    ///
    /// # Examples
    /// ```
    /// use box_kernel::{build_box_geometry, Vec3};
    /// let diagonal = build_box_geometry(4.0, 2.0, 4.0).diagonal();
    /// assert_eq!(diagonal.end, Vec3::new(4.0, 2.0, 4.0));
    /// assert_eq!(diagonal.length(), 6.0);
    /// ```
    pub fn diagonal(&self) -> Segment {
        Segment::new(self.vertices[0], self.far_corner())
    }

    /// The 12 edges resolved to their endpoint coordinates.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.edges
            .iter()
            .map(|&(i, j)| Segment::new(self.vertices[i], self.vertices[j]))
    }

    /// Axis-aligned bounds `(min, max)` over all corners.
    ///
    /// Differs from `(origin, far_corner)` only for mirrored boxes.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        self.vertices.iter().fold(
            (self.vertices[0], self.vertices[0]),
            |(min, max), &v| (min.min(v), max.max(v)),
        )
    }
}

/// Builds the wireframe of an `a × b × c` box with one corner at the origin.
///
/// Output is fully determined by the three lengths: identical inputs give
/// identical vertices in the same order, and the edge list never changes.
/// Negative lengths (mirrored boxes) are laid out as given. A zero length
/// (from `m = 0` or `n = 0`) gives a flat box whose four edges along that
/// axis have zero length; the vertex and edge layout is unchanged.
///
/// # Arguments
/// * `a` - Extent along x
/// * `b` - Extent along y
/// * `c` - Extent along z
///
/// # Examples
/// ```
/// use box_kernel::{build_box_geometry, Vec3};
///
/// let geometry = build_box_geometry(4.0, 2.0, 4.0);
/// assert_eq!(geometry.vertices.len(), 8);
/// assert_eq!(geometry.edges.len(), 12);
///
/// let (min, max) = geometry.bounding_box();
/// assert_eq!(min, Vec3::new(0.0, 0.0, 0.0));
/// assert_eq!(max, Vec3::new(4.0, 2.0, 4.0));
/// ```
pub fn build_box_geometry(a: f64, b: f64, c: f64) -> BoxGeometry {
    trace!(a, b, c, "building box geometry");

    let vertices = [
        vec3::zero(),          // 0
        Vec3::new(a, 0.0, 0.0), // 1
        Vec3::new(a, b, 0.0),   // 2
        Vec3::new(0.0, b, 0.0), // 3
        Vec3::new(0.0, 0.0, c), // 4
        Vec3::new(a, 0.0, c),   // 5
        Vec3::new(a, b, c),     // 6
        Vec3::new(0.0, b, c),   // 7
    ];

    BoxGeometry {
        vertices,
        edges: BOX_EDGES,
    }
}

#[cfg(test)]
mod tests;
