use crate::math::{Isometry, Point, Real, DIM};
use crate::query::details::{
    intersection_test_cuboid_ball, line_intersection_with_capsule_segment,
    local_ray_intersection_with_cuboid,
};
use crate::query::{CollisionTolerances, Ray, RayIntersection};
use crate::shape::{corner, Ball, Capsule, Cuboid, Segment};

/// The part of a cuboid an intersecting capsule was classified against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CuboidCapsuleRegion {
    /// The capsule reaches one face of the cuboid.
    Face,
    /// The capsule reaches the rounded neighborhood of one edge of the cuboid.
    Edge,
    /// The capsule reaches the rounded neighborhood of one vertex of the cuboid.
    Vertex,
    /// The capsule has a zero-length medial segment and was tested as a ball.
    Ball,
}

/// Intersection test between an oriented cuboid and a capsule.
///
/// See [`intersection_test_cuboid_capsule_with_region`] for details.
#[inline]
pub fn intersection_test_cuboid_capsule(
    pos1: &Isometry,
    cuboid1: &Cuboid,
    pos2: &Isometry,
    capsule2: &Capsule,
    tolerances: &CollisionTolerances,
) -> bool {
    intersection_test_cuboid_capsule_with_region(pos1, cuboid1, pos2, capsule2, tolerances)
        .is_some()
}

/// Intersection test between a capsule and an oriented cuboid.
#[inline]
pub fn intersection_test_capsule_cuboid(
    pos1: &Isometry,
    capsule1: &Capsule,
    pos2: &Isometry,
    cuboid2: &Cuboid,
    tolerances: &CollisionTolerances,
) -> bool {
    intersection_test_cuboid_capsule(pos2, cuboid2, pos1, capsule1, tolerances)
}

/// Intersection test between an oriented cuboid and a capsule, telling which region of the
/// cuboid the capsule was found to reach.
///
/// Returns `None` if the shapes do not intersect.
///
/// The medial segment of the capsule is expressed in the local space of the cuboid and tested
/// against the cuboid dilated by the capsule radius. The procedure runs once from each endpoint
/// of the segment. An endpoint strictly inside the dilated cuboid is classified directly.
/// Otherwise the segment is cast as a ray from that endpoint, and the dilated cuboid must be
/// reached within the length of the segment. The point found is then classified against the
/// faces of the original cuboid:
///
/// - Outside of at most one face: the point is on the flat part of the dilated cuboid, the shapes
///   intersect.
/// - Outside of two faces: the point is in the rounded region of the edge shared by these faces.
///   The shapes intersect iff the medial segment comes within the capsule radius of that edge.
/// - Outside of three faces: the point is in the rounded region of a vertex. The shapes intersect
///   iff the medial segment comes within the capsule radius of any of the three edges meeting at
///   that vertex.
pub fn intersection_test_cuboid_capsule_with_region(
    pos1: &Isometry,
    cuboid1: &Cuboid,
    pos2: &Isometry,
    capsule2: &Capsule,
    tolerances: &CollisionTolerances,
) -> Option<CuboidCapsuleRegion> {
    let medial = capsule2.local_segment().transformed(pos2);

    if capsule2.is_degenerate() {
        let ball = Ball::new(capsule2.radius);
        return intersection_test_cuboid_ball(pos1, cuboid1, &medial.a, &ball)
            .then_some(CuboidCapsuleRegion::Ball);
    }

    // Both orientations of the capsule run the exact same computations.
    let local_medial = medial.inverse_transformed(pos1).canonical();
    let reversed = Segment::new(local_medial.b, local_medial.a);
    let dilated = cuboid1.dilated(capsule2.radius);
    let height = capsule2.height();

    [local_medial, reversed].iter().find_map(|seg| {
        let start = if dilated.contains_local_point_excluding_surface(&seg.a) {
            seg.a
        } else {
            let ray = Ray::from_points(seg.a, seg.b);
            let hit = local_ray_intersection_with_cuboid(&dilated, &ray, tolerances)?;

            if hit.time_of_impact >= height {
                // The dilated cuboid is only reached past the end of the capsule.
                return None;
            }

            hit.point
        };

        classify_region(
            cuboid1,
            &start,
            &local_medial,
            capsule2.radius,
            tolerances.segment_degeneracy,
        )
    })
}

// Classifies `pt`, a point of the medial segment lying in the dilated cuboid, and runs the edge
// tests of its region.
fn classify_region(
    cuboid: &Cuboid,
    pt: &Point,
    medial: &Segment,
    radius: Real,
    eps: Real,
) -> Option<CuboidCapsuleRegion> {
    let mins = cuboid.mins();
    let maxs = cuboid.maxs();
    let (below_mins, above_maxs) = outside_extents_masks(pt, &mins, &maxs);
    let mask = below_mins | above_maxs;

    log::trace!(
        "cuboid-capsule point {:?}: below mins {:#05b}, above maxs {:#05b}",
        pt,
        below_mins,
        above_maxs
    );

    match mask.count_ones() {
        0 | 1 => Some(CuboidCapsuleRegion::Face),
        2 => {
            let edge = Segment::new(
                corner(&mins, &maxs, below_mins ^ 0b111),
                corner(&mins, &maxs, above_maxs),
            );
            line_intersection_with_capsule_segment(medial, &edge, radius, eps)
                .map(|_| CuboidCapsuleRegion::Edge)
        }
        _ => {
            let vertex = corner(&mins, &maxs, above_maxs);
            [0b001, 0b010, 0b100]
                .into_iter()
                .filter_map(|axis_bit| {
                    let edge = Segment::new(vertex, corner(&mins, &maxs, above_maxs ^ axis_bit));
                    line_intersection_with_capsule_segment(medial, &edge, radius, eps)
                })
                .min_by_key(|hit: &RayIntersection| hit.time_of_impact)
                .map(|_| CuboidCapsuleRegion::Vertex)
        }
    }
}

// Bit `i` of the first mask is set iff `pt` is below `mins` along the axis `i`, and of the
// second one iff it is above `maxs`. Both masks never share a bit.
fn outside_extents_masks(pt: &Point, mins: &Point, maxs: &Point) -> (u8, u8) {
    let mut below_mins = 0;
    let mut above_maxs = 0;

    for i in 0..DIM {
        if pt[i] < mins[i] {
            below_mins |= 1 << i;
        } else if pt[i] > maxs[i] {
            above_maxs |= 1 << i;
        }
    }

    (below_mins, above_maxs)
}
