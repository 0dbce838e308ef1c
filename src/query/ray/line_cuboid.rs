use crate::math::{Isometry, Real};
use crate::query::{CollisionTolerances, Ray, RayIntersection};
use crate::shape::{Cuboid, Segment};
use num::Zero;

use super::ray_cuboid::ray_intersection_with_cuboid;

/// Computes the first intersection between a line segment and an oriented cuboid.
///
/// The segment is cast as a ray from `line.a` toward `line.b`, so the returned time of impact is
/// the distance from `line.a`. Hits farther than the length of the segment are discarded. If
/// `line.a` lies inside of the cuboid, the hit is where the segment leaves it.
pub fn line_intersection_with_cuboid(
    pos: &Isometry,
    cuboid: &Cuboid,
    line: &Segment,
    tolerances: &CollisionTolerances,
) -> Option<RayIntersection> {
    let ray = Ray::from_points(line.a, line.b);
    let hit = ray_intersection_with_cuboid(pos, cuboid, &ray, tolerances)?;
    let t = hit.time_of_impact;

    // The ray moves one unit per unit of time, so times compare with lengths.
    (t >= Real::zero() && t * t <= line.length_squared()).then_some(hit)
}
