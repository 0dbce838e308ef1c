//! Application of the Separating-Axis-Theorem (SAT).

pub use self::sat_cuboid_cuboid::{
    cuboid_cuboid_find_min_penetration, penetration_along_axis, Penetration,
};

mod sat_cuboid_cuboid;
