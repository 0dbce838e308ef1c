//! Positioned shapes.

use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use crate::shape::{Ball, Capsule, ColliderShape, Cuboid, Segment, ShapeType};

/// A shape placed in the world.
///
/// Colliders are plain values: queries read them and, when they need a
/// modified version (for example a dilated box), work on a local copy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Collider {
    /// The position (center and orientation) of the collider in world space.
    pub position: Isometry,
    /// The geometry of the collider.
    pub shape: ColliderShape,
}

static_assertions::assert_impl_all!(Collider: Copy, Send, Sync);

impl Default for Collider {
    fn default() -> Self {
        Collider {
            position: Isometry::identity(),
            shape: ColliderShape::Uninitialized,
        }
    }
}

impl Collider {
    /// Creates a collider from its world-space position and its shape.
    pub fn new(position: Isometry, shape: impl Into<ColliderShape>) -> Self {
        Collider {
            position,
            shape: shape.into(),
        }
    }

    /// Creates a box collider centered at `center` with the given orientation and half-extents.
    pub fn new_box(center: Point, rotation: Rotation, half_extents: Vector) -> Self {
        Self::new(Self::isometry(center, rotation), Cuboid::new(half_extents))
    }

    /// Creates a capsule collider.
    ///
    /// The medial segment is aligned with the local `z` axis, rotated by `rotation`, and spans
    /// `half_height` on both sides of `center`.
    pub fn new_capsule(center: Point, rotation: Rotation, half_height: Real, radius: Real) -> Self {
        Self::new(
            Self::isometry(center, rotation),
            Capsule::new(half_height, radius),
        )
    }

    /// Creates a sphere collider.
    pub fn new_sphere(center: Point, radius: Real) -> Self {
        Self::new(Self::isometry(center, Rotation::identity()), Ball::new(radius))
    }

    fn isometry(center: Point, rotation: Rotation) -> Isometry {
        Isometry::from_parts(Translation::from(center.coords), rotation)
    }

    /// The type of the shape of this collider.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    /// Is this collider a box?
    #[inline]
    pub fn is_box(&self) -> bool {
        matches!(self.shape, ColliderShape::Cuboid(_))
    }

    /// Is this collider a capsule?
    #[inline]
    pub fn is_capsule(&self) -> bool {
        matches!(self.shape, ColliderShape::Capsule(_))
    }

    /// Is this collider a sphere?
    #[inline]
    pub fn is_sphere(&self) -> bool {
        matches!(self.shape, ColliderShape::Ball(_))
    }

    /// Was this collider never given a shape?
    #[inline]
    pub fn is_uninitialized(&self) -> bool {
        matches!(self.shape, ColliderShape::Uninitialized)
    }

    /// The world-space center of this collider.
    #[inline]
    pub fn center(&self) -> Point {
        Point::from(self.position.translation.vector)
    }

    /// The world-space orientation of this collider.
    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.position.rotation
    }

    /// Moves the center of this collider.
    pub fn set_center(&mut self, center: Point) {
        self.position.translation = Translation::from(center.coords);
    }

    /// Changes the orientation of this collider.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.position.rotation = rotation;
    }

    /// The box shape of this collider, if it is a box.
    #[inline]
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        match &self.shape {
            ColliderShape::Cuboid(c) => Some(c),
            _ => None,
        }
    }

    /// The capsule shape of this collider, if it is a capsule.
    #[inline]
    pub fn as_capsule(&self) -> Option<&Capsule> {
        match &self.shape {
            ColliderShape::Capsule(c) => Some(c),
            _ => None,
        }
    }

    /// The sphere shape of this collider, if it is a sphere.
    #[inline]
    pub fn as_ball(&self) -> Option<&Ball> {
        match &self.shape {
            ColliderShape::Ball(b) => Some(b),
            _ => None,
        }
    }

    /// The half-extents of this box collider.
    pub fn box_half_extents(&self) -> Option<Vector> {
        self.as_cuboid().map(|c| c.half_extents)
    }

    /// The radius of this capsule collider.
    pub fn capsule_radius(&self) -> Option<Real> {
        self.as_capsule().map(|c| c.radius)
    }

    /// Half of the medial segment length of this capsule collider.
    pub fn capsule_half_height(&self) -> Option<Real> {
        self.as_capsule().map(|c| c.half_height)
    }

    /// The world-space medial segment of this capsule collider.
    pub fn capsule_medial_segment(&self) -> Option<Segment> {
        self.as_capsule()
            .map(|c| c.local_segment().transformed(&self.position))
    }

    /// The radius of this sphere collider.
    pub fn sphere_radius(&self) -> Option<Real> {
        self.as_ball().map(|b| b.radius)
    }

    /// The eight world-space vertices of this box collider, ordered by corner index.
    pub fn box_vertices_world(&self) -> Option<[Point; 8]> {
        self.as_cuboid()
            .map(|c| c.local_vertices().map(|v| self.position * v))
    }

    /// The three world-space face normals of this box collider.
    pub fn box_normals_world(&self) -> Option<[Vector; 3]> {
        self.as_cuboid()
            .map(|c| c.local_normals().map(|n| self.position.rotation * n))
    }

    /// Expresses a world-space point in the local space of this collider.
    #[inline]
    pub fn to_local_point(&self, pt: &Point) -> Point {
        self.position.inverse_transform_point(pt)
    }

    /// Expresses a world-space direction in the local space of this collider.
    ///
    /// Only the orientation applies: directions are not affected by the collider center.
    #[inline]
    pub fn to_local_vector(&self, v: &Vector) -> Vector {
        self.position.inverse_transform_vector(v)
    }

    /// Expresses a local-space point in world space.
    #[inline]
    pub fn to_world_point(&self, pt: &Point) -> Point {
        self.position * pt
    }

    /// Expresses a local-space direction in world space.
    #[inline]
    pub fn to_world_vector(&self, v: &Vector) -> Vector {
        self.position * v
    }
}

impl From<Cuboid> for Collider {
    fn from(shape: Cuboid) -> Self {
        Collider::new(Isometry::identity(), shape)
    }
}

impl From<Capsule> for Collider {
    fn from(shape: Capsule) -> Self {
        Collider::new(Isometry::identity(), shape)
    }
}

impl From<Ball> for Collider {
    fn from(shape: Ball) -> Self {
        Collider::new(Isometry::identity(), shape)
    }
}
