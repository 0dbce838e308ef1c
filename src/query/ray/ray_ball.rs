use crate::math::{self, Point, Real};
use crate::query::{Ray, RayIntersection};
use num::Zero;

/// Computes the time of impact of a ray on a ball.
///
/// `ray.dir` must be normalized. If the ray starts inside of the ball, the
/// returned time is the one where the ray leaves the ball. Otherwise it is
/// the time where the ray enters it, and balls entirely behind the ray origin
/// are not hit.
#[inline]
pub fn ray_toi_with_ball(center: &Point, radius: Real, ray: &Ray) -> Option<Real> {
    let origin_to_center = center - ray.origin;
    let dist_squared = origin_to_center.norm_squared();
    let radius_squared = radius * radius;

    // Projection of the center on the ray, then the two other sides of the
    // triangle (radius, perpendicular offset, half-chord).
    let proj = origin_to_center.dot(&ray.dir);
    let offset_squared = dist_squared - proj * proj;
    let half_chord_squared = radius_squared - offset_squared;

    if half_chord_squared < Real::zero() {
        return None;
    }

    let half_chord = math::sqrt(half_chord_squared);

    if dist_squared < radius_squared {
        // The ray must leave the ball, no need to check the sign.
        return Some(proj + half_chord);
    }

    let toi = proj - half_chord;
    (toi >= Real::zero()).then_some(toi)
}

/// Computes the time and point of impact of a ray on a ball.
#[inline]
pub fn ray_intersection_with_ball(center: &Point, radius: Real, ray: &Ray) -> Option<RayIntersection> {
    ray_toi_with_ball(center, radius, ray).map(|toi| RayIntersection::new(toi, ray.point_at(toi)))
}
