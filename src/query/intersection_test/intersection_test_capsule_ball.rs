use crate::math::{Point, Real};
use crate::query::details::distance_squared_point_segment;
use crate::shape::Segment;

/// Intersection test between a capsule given by its world-space medial segment and radius, and a
/// ball.
///
/// Shapes touching at exactly one point do not intersect.
#[inline]
pub fn intersection_test_capsule_ball(
    medial1: &Segment,
    radius1: Real,
    center2: &Point,
    radius2: Real,
) -> bool {
    let distance_squared = distance_squared_point_segment(medial1, center2);
    let sum_radius = radius1 + radius2;
    distance_squared < sum_radius * sum_radius
}
