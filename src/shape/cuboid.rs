//! Cuboid shape.

use crate::math::{Point, Real, Vector, DIM};
use num::Zero;

/// Shape of a box.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// A set of faces of a cuboid.
pub struct FaceMask(u8);

bitflags::bitflags! {
    /// Flags for identifying the signed faces of a cuboid.
    impl FaceMask: u8 {
        /// The face whose outward normal is `+x`.
        const X_POS = 1 << 0;
        /// The face whose outward normal is `-x`.
        const X_NEG = 1 << 1;
        /// The face whose outward normal is `+y`.
        const Y_POS = 1 << 2;
        /// The face whose outward normal is `-y`.
        const Y_NEG = 1 << 3;
        /// The face whose outward normal is `+z`.
        const Z_POS = 1 << 4;
        /// The face whose outward normal is `-z`.
        const Z_NEG = 1 << 5;
    }
}

impl FaceMask {
    /// The face orthogonal to the axis `i`, on its positive side if `positive` is `true`.
    pub fn face(i: usize, positive: bool) -> Self {
        let bit = 1 << (i * 2 + usize::from(!positive));
        FaceMask::from_bits_truncate(bit)
    }
}

// NOTE: format of the corner index:
//
// The i-th bit of the index is set to 1 iff. the i-th component of the corner is the maximum
// extent (`+half_extents[i]`) of the cuboid along that axis. Flipping one bit with a XOR moves
// to the adjacent corner along that axis, which is what the box-capsule edge selection relies on.
impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The corner with the minimum coordinates on every axis.
    #[inline]
    pub fn mins(&self) -> Point {
        Point::from(-self.half_extents)
    }

    /// The corner with the maximum coordinates on every axis.
    #[inline]
    pub fn maxs(&self) -> Point {
        Point::from(self.half_extents)
    }

    /// The cuboid obtained by pushing every face of `self` outward by `amount`.
    #[inline]
    pub fn dilated(&self, amount: Real) -> Cuboid {
        Cuboid::new(self.half_extents.add_scalar(amount))
    }

    /// The corner identified by the 3-bit `index`.
    #[inline]
    pub fn corner(&self, index: u8) -> Point {
        corner(&self.mins(), &self.maxs(), index)
    }

    /// The eight corners of this cuboid, ordered by corner index.
    pub fn local_vertices(&self) -> [Point; 8] {
        core::array::from_fn(|i| self.corner(i as u8))
    }

    /// The three face normals (the positive local axes) of this cuboid.
    pub fn local_normals(&self) -> [Vector; DIM] {
        [Vector::x(), Vector::y(), Vector::z()]
    }

    /// Checks if `pt` lies inside of this cuboid, points on its surface excluded.
    pub fn contains_local_point_excluding_surface(&self, pt: &Point) -> bool {
        (0..DIM).all(|i| pt[i] > -self.half_extents[i] && pt[i] < self.half_extents[i])
    }

    /// The faces whose supporting plane passes within `tolerance` of `pt`.
    ///
    /// Only the coordinate along each face normal is checked: a point far outside of the cuboid
    /// can still "touch" the plane of a face. Callers are expected to pass points already known
    /// to lie on the cuboid.
    pub fn faces_touching_local_point(&self, pt: &Point, tolerance: Real) -> FaceMask {
        let mut faces = FaceMask::empty();

        for i in 0..DIM {
            let to_max = pt[i] - self.half_extents[i];
            let to_min = pt[i] + self.half_extents[i];

            if is_within(to_max, tolerance) {
                faces |= FaceMask::face(i, true);
            }
            if is_within(to_min, tolerance) {
                faces |= FaceMask::face(i, false);
            }
        }

        faces
    }
}

fn is_within(value: Real, tolerance: Real) -> bool {
    if tolerance.is_zero() {
        value.is_zero()
    } else {
        value <= tolerance && value >= -tolerance
    }
}

/// The corner of the box `[mins, maxs]` identified by the 3-bit index `n`.
///
/// Bit `i` of `n` selects `maxs[i]` when set and `mins[i]` otherwise.
#[inline]
pub fn corner(mins: &Point, maxs: &Point, n: u8) -> Point {
    Point::new(
        if n & 1 != 0 { maxs.x } else { mins.x },
        if n & 2 != 0 { maxs.y } else { mins.y },
        if n & 4 != 0 { maxs.z } else { mins.z },
    )
}
