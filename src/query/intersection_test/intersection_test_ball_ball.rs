use crate::math::Point;
use crate::shape::Ball;

/// Intersection test between balls.
///
/// Balls touching at exactly one point do not intersect.
#[inline]
pub fn intersection_test_ball_ball(center1: &Point, b1: &Ball, center2: &Point, b2: &Ball) -> bool {
    let distance_squared = (center2 - center1).norm_squared();
    let sum_radius = b1.radius + b2.radius;
    distance_squared < sum_radius * sum_radius
}
