//! Boolean intersection tests between pairs of shapes known at compile-time.

pub use self::intersection_test_ball_ball::intersection_test_ball_ball;
pub use self::intersection_test_capsule_ball::intersection_test_capsule_ball;
pub use self::intersection_test_capsule_capsule::intersection_test_capsule_capsule;
pub use self::intersection_test_cuboid_ball::{
    intersection_test_ball_cuboid, intersection_test_cuboid_ball,
};
pub use self::intersection_test_cuboid_capsule::{
    intersection_test_capsule_cuboid, intersection_test_cuboid_capsule,
    intersection_test_cuboid_capsule_with_region, CuboidCapsuleRegion,
};
pub use self::intersection_test_cuboid_cuboid::intersection_test_cuboid_cuboid;

mod intersection_test_ball_ball;
mod intersection_test_capsule_ball;
mod intersection_test_capsule_capsule;
mod intersection_test_cuboid_ball;
mod intersection_test_cuboid_capsule;
mod intersection_test_cuboid_cuboid;
