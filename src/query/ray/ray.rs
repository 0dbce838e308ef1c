//! Rays and the results of ray casts.

use crate::math::{self, Isometry, Point, Real, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction.
///
/// Ray casts against spheres and boxes assume `dir` is normalized, so that
/// times of impact are distances from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point,
    /// Direction vector of the ray.
    pub dir: Vector,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point, dir: Vector) -> Ray {
        Ray { origin, dir }
    }

    /// Creates a ray starting at `from` and heading toward `to` with a unit direction.
    ///
    /// The direction is zero if both points are equal.
    pub fn from_points(from: Point, to: Point) -> Ray {
        Ray::new(from, math::direction(&from, &to))
    }

    /// Transforms this ray by the inverse of the given isometry.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry) -> Self {
        Self::new(
            m.inverse_transform_point(&self.origin),
            m.inverse_transform_vector(&self.dir),
        )
    }

    /// The point at the time `t` along this ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point {
        self.origin + self.dir * t
    }
}

/// The result of a successful ray cast or linetest.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayIntersection {
    /// The time of impact of the ray with the object.
    ///
    /// For ray casts with a unit direction, this is the distance traveled from the ray origin.
    /// For capsule linetests, this is the parameter in `[0, 1]` along the tested line.
    pub time_of_impact: Real,
    /// The location of the impact.
    pub point: Point,
}

impl RayIntersection {
    /// Creates a new `RayIntersection`.
    #[inline]
    pub fn new(time_of_impact: Real, point: Point) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            point,
        }
    }
}
