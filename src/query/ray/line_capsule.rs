use crate::math::Real;
use crate::query::details::closest_points_segment_segment;
use crate::query::RayIntersection;
use crate::shape::Segment;

/// Computes the intersection between a line segment and a capsule given by its medial segment.
///
/// The line hits the capsule iff it comes within `radius` of the medial segment, boundary
/// included. On a hit, the time of impact is the parameter in `[0, 1]` of the point of `line`
/// closest to the medial segment, and the point is that closest point.
pub fn line_intersection_with_capsule_segment(
    line: &Segment,
    medial: &Segment,
    radius: Real,
    eps: Real,
) -> Option<RayIntersection> {
    // A line is a capsule with a zero radius.
    let closest = closest_points_segment_segment(line, medial, eps);

    (closest.distance_squared <= radius * radius)
        .then(|| RayIntersection::new(closest.s, closest.point1))
}
