//! Ray-casting and linetest related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayIntersection};
pub use self::line_capsule::line_intersection_with_capsule_segment;
pub use self::line_cuboid::line_intersection_with_cuboid;
pub use self::ray_ball::{ray_intersection_with_ball, ray_toi_with_ball};
pub use self::ray_cuboid::{
    local_ray_intersection_with_cuboid, local_ray_toi_with_cuboid, ray_intersection_with_cuboid,
};

#[doc(hidden)]
pub mod ray;
mod line_capsule;
mod line_cuboid;
mod ray_ball;
mod ray_cuboid;
