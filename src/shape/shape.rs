use crate::shape::{Ball, Capsule, Cuboid};
use core::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A collider that was never given a shape.
    Uninitialized,
    /// A box shape.
    Box,
    /// A capsule shape.
    Capsule,
    /// A sphere shape.
    Sphere,
}

impl ShapeType {
    /// The human-readable name of this shape type.
    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Uninitialized => "Uninitialized",
            ShapeType::Box => "Box",
            ShapeType::Capsule => "Capsule",
            ShapeType::Sphere => "Sphere",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The geometry carried by a collider.
///
/// The set of shapes is closed: every query matches on it exhaustively.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum ColliderShape {
    /// No shape was assigned yet. Queries on such a collider report an error.
    #[default]
    Uninitialized,
    /// A box.
    Cuboid(Cuboid),
    /// A capsule.
    Capsule(Capsule),
    /// A sphere.
    Ball(Ball),
}

impl ColliderShape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ColliderShape::Uninitialized => ShapeType::Uninitialized,
            ColliderShape::Cuboid(_) => ShapeType::Box,
            ColliderShape::Capsule(_) => ShapeType::Capsule,
            ColliderShape::Ball(_) => ShapeType::Sphere,
        }
    }
}

impl From<Cuboid> for ColliderShape {
    fn from(shape: Cuboid) -> Self {
        ColliderShape::Cuboid(shape)
    }
}

impl From<Capsule> for ColliderShape {
    fn from(shape: Capsule) -> Self {
        ColliderShape::Capsule(shape)
    }
}

impl From<Ball> for ColliderShape {
    fn from(shape: Ball) -> Self {
        ColliderShape::Ball(shape)
    }
}
