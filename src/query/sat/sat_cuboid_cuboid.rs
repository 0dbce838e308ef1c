use crate::math::{self, Isometry, Point, Real, Vector};
use crate::shape::Cuboid;
use num::Zero;

/// The estimated penetration between two intersecting shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penetration {
    /// How deep the shapes overlap along `axis`. Always positive.
    pub depth: Real,
    /// The unit axis along which the overlap is the smallest of all the tested axes.
    pub axis: Vector,
}

/// Computes the signed overlap of two sets of vertices projected on `axis`.
///
/// - **Positive**: the projections overlap; the value is the smallest translation along the axis
///   separating them.
/// - **Zero**: the projections are touching.
/// - **Negative**: the projections are separated by this distance.
pub fn penetration_along_axis(vertices1: &[Point], vertices2: &[Point], axis: &Vector) -> Real {
    let (min1, max1) = project_on_axis(vertices1, axis);
    let (min2, max2) = project_on_axis(vertices2, axis);
    math::min(max1 - min2, max2 - min1)
}

fn project_on_axis(vertices: &[Point], axis: &Vector) -> (Real, Real) {
    let mut it = vertices.iter().map(|v| v.coords.dot(axis));
    let first = it.next().unwrap_or_else(Real::zero);
    it.fold((first, first), |(min, max), proj| {
        (math::min(min, proj), math::max(max, proj))
    })
}

/// Runs the separating axis test between two oriented cuboids.
///
/// The fifteen candidate axes are tested in a fixed order: the three face normals of the first
/// cuboid, the three of the second cuboid, then the nine cross products `n1[i] × n2[j]` with
/// `i` major. Cross products of parallel normals vanish and are skipped. The sign of each cross
/// product is normalized so that swapping the two cuboids tests the exact same axes.
///
/// Returns `None` as soon as a separating axis is found, including when the cuboids only touch.
/// Otherwise returns the tested axis with the smallest overlap.
pub fn cuboid_cuboid_find_min_penetration(
    pos1: &Isometry,
    cuboid1: &Cuboid,
    pos2: &Isometry,
    cuboid2: &Cuboid,
) -> Option<Penetration> {
    let normals1 = cuboid1.local_normals().map(|n| pos1.rotation * n);
    let normals2 = cuboid2.local_normals().map(|n| pos2.rotation * n);
    let vertices1 = cuboid1.local_vertices().map(|v| pos1 * v);
    let vertices2 = cuboid2.local_vertices().map(|v| pos2 * v);

    let face_axes = normals1.iter().chain(normals2.iter()).copied();
    let edge_axes = normals1.iter().flat_map(|n1| {
        normals2
            .iter()
            .map(move |n2| math::normalize_or_zero(&unsigned_axis(n1.cross(n2))))
    });

    let mut best: Option<Penetration> = None;

    for axis in face_axes.chain(edge_axes) {
        if axis.iter().all(|c| c.is_zero()) {
            continue;
        }

        let depth = penetration_along_axis(&vertices1, &vertices2, &axis);

        if depth <= Real::zero() {
            log::trace!("separating axis found: {:?}", axis);
            return None;
        }

        if best.map_or(true, |b| depth < b.depth) {
            best = Some(Penetration { depth, axis });
        }
    }

    best
}

// Flips `axis` so that its first non-zero component is positive.
fn unsigned_axis(axis: Vector) -> Vector {
    match axis.iter().find(|c| !c.is_zero()) {
        Some(c) if *c < Real::zero() => -axis,
        _ => axis,
    }
}
