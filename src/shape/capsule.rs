use crate::math::{Point, Real, Vector};
use crate::shape::Segment;
use num::Zero;

#[derive(PartialEq, Copy, Clone, Debug)]
/// A capsule shape defined as a round segment.
///
/// The medial segment of the capsule is aligned with the local `z` axis and
/// centered at the origin.
pub struct Capsule {
    /// Half of the length of the medial segment.
    pub half_height: Real,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule aligned with the `z` axis and with the given half-height an radius.
    pub fn new(half_height: Real, radius: Real) -> Self {
        Self {
            half_height,
            radius,
        }
    }

    /// The length of the medial segment of this capsule.
    pub fn height(&self) -> Real {
        self.half_height + self.half_height
    }

    /// Is the medial segment of this capsule a single point?
    pub fn is_degenerate(&self) -> bool {
        self.half_height.is_zero()
    }

    /// The medial segment of this capsule, in its local space.
    ///
    /// `a` is the bottom end (`-z`), `b` the top end (`+z`).
    pub fn local_segment(&self) -> Segment {
        let b = Point::from(Vector::z() * self.half_height);
        Segment::new(-b, b)
    }
}
