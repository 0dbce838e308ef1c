use crate::math::{Isometry, Point, DIM};
use crate::shape::{Ball, Cuboid};
use num::Zero;

/// Intersection test between an oriented cuboid and a ball.
///
/// A ball whose center lies inside of the cuboid, surface included, always intersects it.
/// Otherwise the ball must reach strictly closer than its radius to the cuboid.
#[inline]
pub fn intersection_test_cuboid_ball(
    pos1: &Isometry,
    cuboid1: &Cuboid,
    center2: &Point,
    ball2: &Ball,
) -> bool {
    let local_center = pos1.inverse_transform_point(center2);
    let mut closest = local_center;

    for i in 0..DIM {
        closest[i] = na::clamp(
            local_center[i],
            -cuboid1.half_extents[i],
            cuboid1.half_extents[i],
        );
    }

    let distance_squared = (local_center - closest).norm_squared();

    if distance_squared.is_zero() {
        return true;
    }

    distance_squared < ball2.radius * ball2.radius
}

/// Intersection test between a ball and an oriented cuboid.
#[inline]
pub fn intersection_test_ball_cuboid(
    center1: &Point,
    ball1: &Ball,
    pos2: &Isometry,
    cuboid2: &Cuboid,
) -> bool {
    intersection_test_cuboid_ball(pos2, cuboid2, center1, ball1)
}
