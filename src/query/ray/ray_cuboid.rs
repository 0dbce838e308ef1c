use core::mem;

use approx::AbsDiffEq;
use num::{One, Zero};

use crate::math::{self, Isometry, Real, DIM};
use crate::query::{CollisionTolerances, Ray, RayIntersection};
use crate::shape::Cuboid;

/// Computes the time of impact of a ray on a cuboid centered at the origin and aligned with the
/// coordinate axes.
///
/// Slab test: the ray is clipped by the pair of planes of each axis, and the clipped intervals
/// are intersected.
///
/// Rays which only run along the surface of the cuboid without entering it, or which only touch
/// it at their origin, do not hit. If the ray starts inside of the cuboid, the returned time is
/// the one where the ray leaves it.
pub fn local_ray_toi_with_cuboid(
    cuboid: &Cuboid,
    ray: &Ray,
    tolerances: &CollisionTolerances,
) -> Option<Real> {
    let mins = cuboid.mins();
    let maxs = cuboid.maxs();

    // `None` until a slab actually constrains the ray.
    let mut interval: Option<(Real, Real)> = None;

    for i in 0..DIM {
        if ray.dir[i].abs_diff_eq(&Real::zero(), tolerances.parallel_direction) {
            // Not moving along this axis: the origin must already lie in the slab.
            if ray.origin[i] < mins[i] || ray.origin[i] > maxs[i] {
                return None;
            }
        } else {
            let denom = Real::one() / ray.dir[i];
            let mut inter_with_near_plane = (mins[i] - ray.origin[i]) * denom;
            let mut inter_with_far_plane = (maxs[i] - ray.origin[i]) * denom;

            if inter_with_near_plane > inter_with_far_plane {
                mem::swap(&mut inter_with_near_plane, &mut inter_with_far_plane)
            }

            let (tmin, tmax) = match interval {
                Some((tmin, tmax)) => (
                    math::max(tmin, inter_with_near_plane),
                    math::min(tmax, inter_with_far_plane),
                ),
                None => (inter_with_near_plane, inter_with_far_plane),
            };

            if tmin > tmax {
                return None;
            }

            interval = Some((tmin, tmax));
        }
    }

    // A ray without direction stays where it is.
    let (tmin, tmax) = interval?;

    // The whole cuboid is behind the ray, or the ray only starts on its surface.
    if tmax <= tolerances.surface_contact {
        return None;
    }

    let starts_inside = tmin < Real::zero();

    if !starts_inside {
        // The ray crosses the surface twice. It only runs along the surface iff both crossings
        // share a face.
        let entry = ray.point_at(tmin);
        let exit = ray.point_at(tmax);
        let entry_faces = cuboid.faces_touching_local_point(&entry, tolerances.face_touch);
        let exit_faces = cuboid.faces_touching_local_point(&exit, tolerances.face_touch);

        if entry_faces.intersects(exit_faces) {
            return None;
        }
    }

    Some(if starts_inside { tmax } else { tmin })
}

/// Computes the time and point of impact of a ray on a cuboid centered at the origin and aligned
/// with the coordinate axes.
pub fn local_ray_intersection_with_cuboid(
    cuboid: &Cuboid,
    ray: &Ray,
    tolerances: &CollisionTolerances,
) -> Option<RayIntersection> {
    local_ray_toi_with_cuboid(cuboid, ray, tolerances)
        .map(|toi| RayIntersection::new(toi, ray.point_at(toi)))
}

/// Computes the time and world-space point of impact of a world-space ray on an oriented cuboid.
pub fn ray_intersection_with_cuboid(
    pos: &Isometry,
    cuboid: &Cuboid,
    ray: &Ray,
    tolerances: &CollisionTolerances,
) -> Option<RayIntersection> {
    let local_ray = ray.inverse_transform_by(pos);
    local_ray_intersection_with_cuboid(cuboid, &local_ray, tolerances)
        .map(|inter| RayIntersection::new(inter.time_of_impact, pos * inter.point))
}
