/*!
nomad3d
========

**nomad3d** is a deterministic 3-dimensional narrow-phase collision library
written with the rust programming language.

Every query runs on fixed-point numbers so that all the machines taking part in
a rollback-synchronized simulation compute bit-identical results from identical
inputs. Boxes, capsules and spheres can be tested against each other, and rays
and line segments can be cast against boxes, spheres and capsules.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

extern crate num_traits as num;

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod query;
pub mod shape;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Isometry3, Point3, Translation3, Vector3};
    use na::{ComplexField, RealField, UnitQuaternion};
    use num::Zero;

    /// The scalar type used throughout this crate.
    ///
    /// A signed fixed-point number with 40 integer bits and 24 fractional bits.
    /// It has no NaN or infinite states and its ordering is total, so every
    /// comparison made by the queries is exact.
    ///
    /// Values span about `±5.5e11` with a resolution of `2^-24`. The queries multiply squared
    /// lengths together, so coordinates, shape sizes and distances between queried shapes must
    /// stay below `200` in magnitude. Larger inputs overflow: debug builds panic and release
    /// builds silently wrap.
    pub type Real = simba::scalar::FixedI40F24;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point = Point3<Real>;

    /// The vector type.
    pub type Vector = Vector3<Real>;

    /// The transformation matrix type.
    pub type Isometry = Isometry3<Real>;

    /// The rotation type.
    pub type Rotation = UnitQuaternion<Real>;

    /// The translation type.
    pub type Translation = Translation3<Real>;

    /// Converts a literal into the fixed-point scalar.
    ///
    /// The conversion rounds to the nearest representable value, which is the
    /// same on every platform. Only use it for constants and test inputs: the
    /// queries themselves never touch floating-point numbers.
    #[inline]
    pub fn real(value: f64) -> Real {
        na::convert(value)
    }

    /// Builds a vector from literals, see [`real`].
    #[inline]
    pub fn vector(x: f64, y: f64, z: f64) -> Vector {
        Vector::new(real(x), real(y), real(z))
    }

    /// Builds a point from literals, see [`real`].
    #[inline]
    pub fn point(x: f64, y: f64, z: f64) -> Point {
        Point::new(real(x), real(y), real(z))
    }

    /// Normalizes `v`, or returns the zero vector if `v` has a zero length.
    #[inline]
    pub fn normalize_or_zero(v: &Vector) -> Vector {
        let length = v.norm();

        if length.is_zero() {
            Vector::zeros()
        } else {
            v / length
        }
    }

    /// The unit direction pointing from `from` toward `to`, or zero if both points are equal.
    #[inline]
    pub fn direction(from: &Point, to: &Point) -> Vector {
        normalize_or_zero(&(to - from))
    }

    /// The absolute value of `x`.
    #[inline]
    pub fn abs(x: Real) -> Real {
        ComplexField::abs(x)
    }

    /// The square root of a non-negative `x`.
    #[inline]
    pub fn sqrt(x: Real) -> Real {
        ComplexField::sqrt(x)
    }

    /// The smallest of `a` and `b`.
    #[inline]
    pub fn min(a: Real, b: Real) -> Real {
        RealField::min(a, b)
    }

    /// The largest of `a` and `b`.
    #[inline]
    pub fn max(a: Real, b: Real) -> Real {
        RealField::max(a, b)
    }
}
