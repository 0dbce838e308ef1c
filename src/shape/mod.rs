//! Shapes supported by nomad3d.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::collider::Collider;
pub use self::cuboid::{corner, Cuboid, FaceMask};
pub use self::segment::Segment;
#[doc(inline)]
pub use self::shape::{ColliderShape, ShapeType};

mod ball;
mod capsule;
mod collider;
mod cuboid;
mod segment;
mod shape;
