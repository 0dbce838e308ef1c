use crate::math::{real, Real};
use num::Zero;

/// Tolerances used by the collision queries.
///
/// The defaults reproduce the engine's historical behavior and should rarely need changing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionTolerances {
    /// A ray direction component with an absolute value below this is considered not
    /// moving along that axis.
    pub parallel_direction: Real,
    /// Boxes hit no later than this time are considered only touched on their surface.
    pub surface_contact: Real,
    /// Segments with a squared length at or below this are treated as points.
    pub segment_degeneracy: Real,
    /// Maximum distance between a point and a face plane for the point to touch that face.
    pub face_touch: Real,
}

impl Default for CollisionTolerances {
    fn default() -> Self {
        CollisionTolerances {
            parallel_direction: real(1.0e-4),
            surface_contact: real(1.0e-3),
            segment_degeneracy: Real::zero(),
            face_touch: real(1.0e-4),
        }
    }
}

impl CollisionTolerances {
    /// Sets the tolerance under which a ray is considered parallel to a slab.
    pub fn with_parallel_direction(mut self, tolerance: Real) -> Self {
        self.parallel_direction = tolerance;
        self
    }

    /// Sets the time under which a box hit only counts as a surface contact.
    pub fn with_surface_contact(mut self, tolerance: Real) -> Self {
        self.surface_contact = tolerance;
        self
    }

    /// Sets the squared length under which segments are treated as points.
    pub fn with_segment_degeneracy(mut self, tolerance: Real) -> Self {
        self.segment_degeneracy = tolerance;
        self
    }

    /// Sets the distance under which a point touches a face plane.
    pub fn with_face_touch(mut self, tolerance: Real) -> Self {
        self.face_touch = tolerance;
        self
    }
}
