use crate::math::Isometry;
use crate::query::sat;
use crate::shape::Cuboid;

/// Intersection test between oriented cuboids.
///
/// Cuboids only touching on their surface do not intersect.
#[inline]
pub fn intersection_test_cuboid_cuboid(
    pos1: &Isometry,
    cuboid1: &Cuboid,
    pos2: &Isometry,
    cuboid2: &Cuboid,
) -> bool {
    sat::cuboid_cuboid_find_min_penetration(pos1, cuboid1, pos2, cuboid2).is_some()
}
