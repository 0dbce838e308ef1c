//! Non-persistent geometric queries.
//!
//! # General cases
//! [`SimpleCollisions`] is the entry point of this module. It works on
//! [`Collider`](crate::shape::Collider)s of any kind and provides:
//!
//! * [`SimpleCollisions::is_colliding()`] to determine if two colliders are intersecting or not.
//! * Ray casts against spheres and boxes, and linetests against boxes and capsules.
//!
//! Errors, like passing a capsule where a box is expected, are never returned nor panicked on:
//! they go to the [`ErrorReporter`] given to [`SimpleCollisions`] and the query answers with
//! `false` or `None`.
//!
//! # Specific cases
//! The functions exported by the `details` submodule work on shapes known at compile-time and
//! never fail. They have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` can be `closest_points`, `distance_squared` or `intersection_test`.
//! * `[shape1]` and `[shape2]` are the types of the shapes passed to the function, e.g., `ball`,
//!   `cuboid`, `capsule`, `segment` or `point`.

pub use self::error::QueryError;
pub use self::ray::{Ray, RayIntersection};
pub use self::reporter::{ErrorReporter, LogReporter, RecordingReporter, ReportedError};
pub use self::sat::Penetration;
pub use self::simple_collisions::SimpleCollisions;
pub use self::tolerances::CollisionTolerances;

mod closest_points;
mod error;
mod intersection_test;
mod point;
mod ray;
mod reporter;
pub mod sat;
mod simple_collisions;
mod tolerances;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::closest_points::*;
    pub use super::intersection_test::*;
    pub use super::point::*;
    pub use super::ray::{
        line_intersection_with_capsule_segment, line_intersection_with_cuboid,
        local_ray_intersection_with_cuboid, local_ray_toi_with_cuboid,
        ray_intersection_with_ball, ray_intersection_with_cuboid, ray_toi_with_ball,
    };
    pub use super::sat::*;
    pub use crate::shape::corner;
}
