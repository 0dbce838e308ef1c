//! Definition of the segment shape.

use crate::math::{self, Isometry, Point, Real, Vector};

/// A segment shape.
///
/// Used both as the medial line of capsules and as the query shape of linetests.
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point,
    /// The segment second point.
    pub b: Point,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point, b: Point) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The squared length of this segment.
    pub fn length_squared(&self) -> Real {
        self.scaled_direction().norm_squared()
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`. This is the zero vector if both points are equal.
    pub fn direction(&self) -> Vector {
        math::direction(&self.a, &self.b)
    }

    /// Applies the isometry `m` to the vertices of this segment and returns the resulting segment.
    pub fn transformed(&self, m: &Isometry) -> Self {
        Segment::new(m * self.a, m * self.b)
    }

    /// Applies the inverse of the isometry `m` to the vertices of this segment.
    pub fn inverse_transformed(&self, m: &Isometry) -> Self {
        Segment::new(
            m.inverse_transform_point(&self.a),
            m.inverse_transform_point(&self.b),
        )
    }

    /// This segment with its endpoints sorted by lexicographic order of their coordinates.
    ///
    /// Both orientations of the same segment give bit-identical results.
    pub fn canonical(&self) -> Segment {
        if self.b.coords.as_slice() < self.a.coords.as_slice() {
            Segment::new(self.b, self.a)
        } else {
            *self
        }
    }

    /// Computes the point at the parameter `t`, where `0` is `self.a` and `1` is `self.b`.
    pub fn point_at(&self, t: Real) -> Point {
        self.a + self.scaled_direction() * t
    }
}
