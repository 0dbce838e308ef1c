//! Point-related queries.

pub use self::point_segment::distance_squared_point_segment;

mod point_segment;
