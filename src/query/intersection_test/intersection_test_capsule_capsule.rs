use crate::math::Real;
use crate::query::details::closest_points_segment_segment;
use crate::shape::Segment;

/// Intersection test between capsules given by their world-space medial segments and radii.
///
/// Capsules touching at exactly one point do not intersect. The segments are processed in a
/// fixed order so the result is the same when both capsules are swapped.
#[inline]
pub fn intersection_test_capsule_capsule(
    medial1: &Segment,
    radius1: Real,
    medial2: &Segment,
    radius2: Real,
    eps: Real,
) -> bool {
    let closest = if ordering_key(medial1) <= ordering_key(medial2) {
        closest_points_segment_segment(medial1, medial2, eps)
    } else {
        closest_points_segment_segment(medial2, medial1, eps)
    };

    let sum_radius = radius1 + radius2;
    closest.distance_squared < sum_radius * sum_radius
}

fn ordering_key(seg: &Segment) -> (&[Real], &[Real]) {
    (seg.a.coords.as_slice(), seg.b.coords.as_slice())
}
